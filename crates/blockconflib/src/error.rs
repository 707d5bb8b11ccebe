use std::{
    backtrace::Backtrace,
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
    io::Error as IoError,
    path::{Path, PathBuf},
};

/// An error that occurred while loading or navigating a configuration file.
///
/// Malformed lines are never reported here; the parser skips them.
#[derive(Debug)]
pub struct BlockConfError {
    /// The kind of error that occurred.
    pub kind: BlockConfErrorKind,

    /// Additional backtrace information.
    pub backtrace: Backtrace,
}

impl BlockConfError {
    /// Create a new [BlockConfError] with the given kind. The backtrace will be captured automatically.
    pub fn new(kind: BlockConfErrorKind) -> Self {
        Self {
            kind,
            backtrace: Backtrace::capture(),
        }
    }

    /// Create a new [BlockConfError] for a file that could not be read.
    pub fn io(filename: impl AsRef<Path>, error: IoError) -> Self {
        Self::new(BlockConfErrorKind::Io(filename.as_ref().to_path_buf(), error))
    }

    /// Create a new [BlockConfError] for a path segment that does not name a child of `block`.
    pub fn not_found(segment: impl ToString, block: impl ToString) -> Self {
        Self::new(BlockConfErrorKind::NotFound {
            segment: segment.to_string(),
            block: block.to_string(),
        })
    }

    /// Indicates whether this error is a missing path segment.
    #[inline(always)]
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, BlockConfErrorKind::NotFound { .. })
    }
}

impl Display for BlockConfError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        Display::fmt(&self.kind, f)
    }
}

impl Error for BlockConfError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            BlockConfErrorKind::Io(_, e) => Some(e),
            _ => None,
        }
    }
}

/// The types of errors that can occur.
#[derive(Debug)]
pub enum BlockConfErrorKind {
    /// The configuration file is missing or unreadable.
    Io(PathBuf, IoError),

    /// A path segment does not name a child of the block it was looked up in.
    NotFound {
        /// The missing block name.
        segment: String,

        /// The name of the block that was searched.
        block: String,
    },
}

impl Display for BlockConfErrorKind {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Io(filename, e) => write!(f, "{}: I/O error: {e}", filename.display()),
            Self::NotFound {
                segment,
                block,
            } => write!(f, "{segment} not found in {block}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::BlockConfError,
        std::io::{Error as IoError, ErrorKind},
    };

    #[test]
    fn not_found_message() {
        let e = BlockConfError::not_found("missing", "alpha");
        assert!(e.is_not_found());
        assert_eq!(e.to_string(), "missing not found in alpha");
    }

    #[test]
    fn io_message_names_file() {
        let e = BlockConfError::io("conf.txt", IoError::new(ErrorKind::NotFound, "gone"));
        assert!(!e.is_not_found());
        assert_eq!(e.to_string(), "conf.txt: I/O error: gone");
    }
}
