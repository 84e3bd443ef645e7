pub type RequestId = u64;

/// Report catalog lifecycle. Entries only exist in `Ready`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    #[default]
    Idle,
    Loading,
    Ready(Vec<String>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportCatalog {
    status: CatalogStatus,
    last_request: RequestId,
}

impl ReportCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn last_request(&self) -> RequestId {
        self.last_request
    }

    pub fn entries(&self) -> &[String] {
        match &self.status {
            CatalogStatus::Ready(entries) => entries,
            _ => &[],
        }
    }

    /// Moves to `Loading` and returns the id the completion must carry.
    pub fn begin_refresh(&mut self) -> RequestId {
        self.last_request += 1;
        self.status = CatalogStatus::Loading;
        self.last_request
    }

    /// Applies a completed fetch. Returns `false` if the completion is stale
    /// or no refresh is outstanding.
    pub fn settle(&mut self, request_id: RequestId, result: Result<Vec<String>, String>) -> bool {
        if request_id != self.last_request || self.status != CatalogStatus::Loading {
            return false;
        }
        self.status = match result {
            Ok(entries) => CatalogStatus::Ready(entries),
            Err(reason) => CatalogStatus::Failed(reason),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogStatus, ReportCatalog};

    #[test]
    fn failure_clears_entries() {
        let mut catalog = ReportCatalog::new();
        let first = catalog.begin_refresh();
        assert!(catalog.settle(first, Ok(vec!["mbr1.jpg".to_string()])));
        assert_eq!(catalog.entries(), ["mbr1.jpg"]);

        let second = catalog.begin_refresh();
        assert!(catalog.entries().is_empty());
        assert!(catalog.settle(second, Err("boom".to_string())));
        assert_eq!(catalog.status(), &CatalogStatus::Failed("boom".to_string()));
        assert!(catalog.entries().is_empty());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut catalog = ReportCatalog::new();
        let old = catalog.begin_refresh();
        let current = catalog.begin_refresh();

        assert!(!catalog.settle(old, Ok(vec!["old.jpg".to_string()])));
        assert_eq!(catalog.status(), &CatalogStatus::Loading);

        assert!(catalog.settle(current, Ok(Vec::new())));
        assert_eq!(catalog.status(), &CatalogStatus::Ready(Vec::new()));
        assert!(!catalog.settle(current, Err("late".to_string())));
    }
}
