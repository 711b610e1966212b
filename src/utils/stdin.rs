//! Detection of what standard input is connected to.
//!
//! The filter is meant to sit at the end of a pipe behind a CADD scoring
//! tool. An interactive terminal or a redirected file on stdin is rejected
//! by the command runner before any input is read.

use std::io::IsTerminal;

/// Kind of file backing standard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdinKind {
    /// Anonymous or named pipe
    Pipe,
    /// Interactive terminal
    Terminal,
    /// Regular file redirect
    File,
    /// Anything else (`/dev/null`, sockets, ...)
    Other,
}

impl StdinKind {
    #[must_use]
    pub fn is_pipe(self) -> bool {
        self == Self::Pipe
    }
}

impl std::fmt::Display for StdinKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pipe => write!(f, "pipe"),
            Self::Terminal => write!(f, "terminal"),
            Self::File => write!(f, "regular file"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Inspect the file behind standard input
///
/// # Errors
///
/// Returns an error if the stdin descriptor cannot be duplicated or its
/// metadata cannot be read.
#[cfg(unix)]
pub fn stdin_kind() -> std::io::Result<StdinKind> {
    use std::os::fd::AsFd;
    use std::os::unix::fs::FileTypeExt;

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(StdinKind::Terminal);
    }

    // Duplicate the descriptor so dropping the File leaves stdin open
    let fd = stdin.as_fd().try_clone_to_owned()?;
    let file_type = std::fs::File::from(fd).metadata()?.file_type();

    Ok(if file_type.is_fifo() {
        StdinKind::Pipe
    } else if file_type.is_file() {
        StdinKind::File
    } else {
        StdinKind::Other
    })
}

/// Inspect the file behind standard input
///
/// Without FIFO metadata anything that is not a terminal counts as a pipe.
///
/// # Errors
///
/// Never fails on this platform.
#[cfg(not(unix))]
pub fn stdin_kind() -> std::io::Result<StdinKind> {
    if std::io::stdin().is_terminal() {
        Ok(StdinKind::Terminal)
    } else {
        Ok(StdinKind::Pipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pipe_accepted() {
        assert!(StdinKind::Pipe.is_pipe());
        assert!(!StdinKind::Terminal.is_pipe());
        assert!(!StdinKind::File.is_pipe());
        assert!(!StdinKind::Other.is_pipe());
    }

    #[test]
    fn test_stdin_kind_does_not_fail() {
        // Whatever the test harness gives us, inspection itself must work
        assert!(stdin_kind().is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(StdinKind::File.to_string(), "regular file");
    }
}
