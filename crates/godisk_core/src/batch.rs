pub type SubmissionId = u64;

/// One submission of operator text. The engine receives `raw_text` verbatim;
/// the command count is local bookkeeping only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBatch {
    raw_text: String,
    command_count: usize,
}

impl CommandBatch {
    /// Returns `None` when the text is blank, which must never be submitted.
    pub fn from_raw(raw_text: &str) -> Option<Self> {
        if raw_text.trim().is_empty() {
            return None;
        }
        Some(Self {
            raw_text: raw_text.to_string(),
            command_count: count_commands(raw_text),
        })
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Non-blank lines after trimming.
    pub fn command_count(&self) -> usize {
        self.command_count
    }
}

fn count_commands(raw: &str) -> usize {
    raw.lines().filter(|line| !line.trim().is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::CommandBatch;

    #[test]
    fn blank_text_is_not_a_batch() {
        assert!(CommandBatch::from_raw("").is_none());
        assert!(CommandBatch::from_raw("  \n\t\n ").is_none());
    }

    #[test]
    fn raw_text_is_kept_verbatim() {
        let raw = "  mkdisk -size=10 -unit=M \n\n# comment\n   \nfdisk -size=5\n";
        let batch = CommandBatch::from_raw(raw).unwrap();
        assert_eq!(batch.raw_text(), raw);
        assert_eq!(batch.command_count(), 3);
    }
}
