pub type EntryId = u64;

/// Display class of a transcript entry. Fixed when the entry is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
    Comment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    id: EntryId,
    severity: Severity,
    content: String,
}

impl TranscriptEntry {
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Append-only transcript with monotonic entry ids.
///
/// Entries are never reordered or edited; `clear` is the only removal and it
/// does not rewind the id counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
    next_id: EntryId,
}

impl Default for Transcript {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, severity: Severity, content: impl Into<String>) -> EntryId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(TranscriptEntry {
            id,
            severity,
            content: content.into(),
        });
        id
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn snapshot(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
