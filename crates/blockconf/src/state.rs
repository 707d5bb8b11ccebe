use {
    crate::CliError,
    serde::{Deserialize, Serialize},
    std::{fs, io::ErrorKind as IoErrorKind, path::Path},
};

/// Navigation state kept between invocations.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct State {
    /// The open configuration file. Empty if no file is open.
    pub file: String,

    /// Path of the current block, relative to the root block.
    pub location: String,
}

impl State {
    /// Load the state from `path`. A missing file is the default (closed) state.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                log::debug!("{} does not exist; starting closed", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(CliError::StateIo(path.to_path_buf(), e)),
        };

        let state: Self = toml::from_str(&text).map_err(|e| CliError::StateFormat(path.to_path_buf(), e))?;
        log::debug!("loaded state: file={:?} location={:?}", state.file, state.location);
        Ok(state)
    }

    /// Write the state to `path`, creating it if needed.
    pub fn save(&self, path: &Path) -> Result<(), CliError> {
        log::debug!("saving state: file={:?} location={:?}", self.file, self.location);
        let text = toml::to_string(self).map_err(CliError::StateSerialize)?;
        fs::write(path, text).map_err(|e| CliError::StateIo(path.to_path_buf(), e))
    }

    /// Returns true if a configuration file is open.
    #[inline(always)]
    pub fn is_open(&self) -> bool {
        !self.file.is_empty()
    }

    /// Returns the open file name, or [CliError::Closed].
    pub fn require_open(&self) -> Result<&str, CliError> {
        if self.is_open() {
            Ok(&self.file)
        } else {
            Err(CliError::Closed)
        }
    }
}
