/// Maps catalog filenames to retrieval URLs under `{base}/rep/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLocator {
    base: String,
}

impl ReportLocator {
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The filename is used verbatim, exactly as the catalog listed it.
    pub fn resolve(&self, filename: &str) -> String {
        format!("{}/rep/{}", self.base, filename)
    }
}

#[cfg(test)]
mod tests {
    use super::ReportLocator;

    #[test]
    fn resolves_under_rep_path() {
        let locator = ReportLocator::new("http://localhost:9600");
        assert_eq!(
            locator.resolve("mbr1.jpg"),
            "http://localhost:9600/rep/mbr1.jpg"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let locator = ReportLocator::new("http://localhost:9600/");
        assert_eq!(
            locator.resolve("tree 1.jpg"),
            "http://localhost:9600/rep/tree 1.jpg"
        );
    }
}
