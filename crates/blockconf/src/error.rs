use {
    blockconf_lib::BlockConfError,
    std::{
        error::Error,
        fmt::{Display, Formatter, Result as FmtResult},
        io::Error as IoError,
        path::PathBuf,
    },
};

/// An error from a command-line operation.
#[derive(Debug)]
pub enum CliError {
    /// The command needs an open configuration file and none is open.
    Closed,

    /// `open` was used while a file was already open.
    AlreadyOpen(String),

    /// `close` was used while no file was open.
    AlreadyClosed,

    /// A variable in a filename could not be expanded.
    Expand(String),

    /// Parsing or navigating the configuration failed.
    Conf(BlockConfError),

    /// The state file could not be read or written.
    StateIo(PathBuf, IoError),

    /// The state file is not valid TOML.
    StateFormat(PathBuf, toml::de::Error),

    /// The state could not be serialized.
    StateSerialize(toml::ser::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Closed => f.write_str("closed."),
            Self::AlreadyOpen(file) => write!(f, "{file:?} already opened."),
            Self::AlreadyClosed => f.write_str("already closed."),
            Self::Expand(e) => write!(f, "cannot expand filename: {e}"),
            Self::Conf(e) => Display::fmt(e, f),
            Self::StateIo(path, e) => write!(f, "{}: I/O error: {e}", path.display()),
            Self::StateFormat(path, e) => write!(f, "{}: invalid state file: {e}", path.display()),
            Self::StateSerialize(e) => write!(f, "cannot serialize state: {e}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Conf(e) => Some(e),
            Self::StateIo(_, e) => Some(e),
            Self::StateFormat(_, e) => Some(e),
            Self::StateSerialize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BlockConfError> for CliError {
    fn from(e: BlockConfError) -> Self {
        Self::Conf(e)
    }
}
