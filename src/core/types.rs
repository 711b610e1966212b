/// What to do with a row that has too few fields for the column layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedRowPolicy {
    /// Abort the whole run on the first short row
    #[default]
    Fail,
    /// Log a warning, skip the row and keep going
    Skip,
}

impl std::fmt::Display for MalformedRowPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fail => write!(f, "fail"),
            Self::Skip => write!(f, "skip"),
        }
    }
}
