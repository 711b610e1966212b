/// Whether a reference row has been matched by a stream record yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// Not matched; reported as unmatched at the end of the run
    Pending,
    /// Matched once; further records with the same key are dropped
    Consumed,
}

/// One reference row in the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Original reference line, verbatim
    pub line: String,

    pub state: EntryState,
}

impl IndexEntry {
    #[must_use]
    pub fn new(line: String) -> Self {
        Self {
            line,
            state: EntryState::Pending,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state == EntryState::Pending
    }
}
