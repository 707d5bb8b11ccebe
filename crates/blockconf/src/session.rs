use {
    crate::{CliError, State},
    blockconf_lib::{ascend, descend, parse_file, render, resolve, BlockConfError, Event, Report},
    std::fs::File,
};

/// Runs commands against the persisted navigation state.
///
/// Every operation re-reads and re-parses the open file. On error the state is left as it was.
pub struct Session<'a, R: Report + ?Sized> {
    /// State loaded at startup; saved by the caller after a successful command.
    pub state: State,

    sink: &'a mut R,
}

impl<'a, R: Report + ?Sized> Session<'a, R> {
    /// Create a session over `state` that reports to `sink`.
    pub fn new(state: State, sink: &'a mut R) -> Self {
        Self {
            state,
            sink,
        }
    }

    /// Show the open file and current path.
    pub fn status(&mut self) -> Result<(), CliError> {
        let file = self.state.require_open()?;
        self.sink.report(Event::Status, file);
        self.sink.report(Event::Status, &format!("/{}", self.state.location));
        Ok(())
    }

    /// Open `file` and move to its root block.
    pub fn open(&mut self, file: &str) -> Result<(), CliError> {
        if self.state.is_open() {
            return Err(CliError::AlreadyOpen(self.state.file.clone()));
        }

        let expanded = shellexpand::full(file).map_err(|e| CliError::Expand(e.to_string()))?;
        self.sink.report(Event::Notice, &format!("opening configuration file {expanded:?}."));
        File::open(&*expanded).map_err(|e| BlockConfError::io(&*expanded, e))?;

        log::debug!("opened {expanded}");
        self.state.file = expanded.into_owned();
        self.state.location.clear();
        Ok(())
    }

    /// Forget the open file.
    pub fn close(&mut self) -> Result<(), CliError> {
        if !self.state.is_open() {
            return Err(CliError::AlreadyClosed);
        }

        self.sink.report(Event::Notice, &format!("closing configuration file {:?}.", self.state.file));
        log::debug!("closed {}", self.state.file);
        self.state = State::default();
        Ok(())
    }

    /// List the current block.
    pub fn list(&mut self) -> Result<(), CliError> {
        let root = parse_file(self.state.require_open()?)?;
        let block = resolve(&root, &self.state.location)?;
        render(block).report(&mut *self.sink);
        Ok(())
    }

    /// Move into the child `name` of the current block and list it.
    pub fn forward(&mut self, name: &str) -> Result<(), CliError> {
        let root = parse_file(self.state.require_open()?)?;
        let (location, block) = descend(&root, &self.state.location, name)?;
        render(block).report(&mut *self.sink);
        self.state.location = location;
        Ok(())
    }

    /// Move to the parent of the current block and list it.
    pub fn back(&mut self) -> Result<(), CliError> {
        let root = parse_file(self.state.require_open()?)?;
        let (location, block) = ascend(&root, &self.state.location)?;
        render(block).report(&mut *self.sink);
        self.state.location = location;
        Ok(())
    }

    /// Parse the open file and report how many blocks it contains.
    ///
    /// The parser logs each block and line at `debug`/`trace` level, so this is mostly useful with logging enabled.
    pub fn parse(&mut self) -> Result<(), CliError> {
        let file = self.state.require_open()?;
        let root = parse_file(file)?;
        self.sink.report(Event::Notice, &format!("{file}: {} blocks", root.count()));
        Ok(())
    }
}
