use std::path::PathBuf;

use thiserror::Error;

use crate::core::columns::ColumnLayout;
use crate::core::types::MalformedRowPolicy;

/// Separator used when none is given on the command line
pub const DEFAULT_SEPARATOR: &str = "\t";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Field separator must not be empty")]
    EmptySeparator,
}

/// Everything the join needs to know, resolved from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinConfig {
    /// Path to the reference table (plain text or gzip)
    pub reference: PathBuf,

    /// Variant column positions in the reference table
    pub columns: ColumnLayout,

    /// Field separator of the reference table; also used to build join keys
    /// and to glue scores onto matched rows
    pub separator: String,

    /// Handling of rows with too few fields
    pub malformed_rows: MalformedRowPolicy,
}

impl JoinConfig {
    #[must_use]
    pub fn new(reference: impl Into<PathBuf>) -> Self {
        Self {
            reference: reference.into(),
            columns: ColumnLayout::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
            malformed_rows: MalformedRowPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_columns(mut self, columns: ColumnLayout) -> Self {
        self.columns = columns;
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_malformed_rows(mut self, policy: MalformedRowPolicy) -> Self {
        self.malformed_rows = policy;
        self
    }

    /// Check the configuration before any input is opened
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptySeparator` if the separator is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        Ok(())
    }
}
