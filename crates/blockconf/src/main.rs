//! Browse a tab-indented block configuration file one block at a time.
//!
//! The open file and the current block are remembered in a small state file between invocations.

mod error;
mod session;
mod state;
mod term;

pub(crate) use {error::CliError, session::Session, state::State};

use {
    blockconf_lib::{Event, Report},
    clap::{Parser, Subcommand},
    log::LevelFilter,
    std::{path::PathBuf, process::ExitCode},
    term::Terminal,
};

/// Command line options.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Options {
    /// The file holding the open configuration file name and current block.
    #[arg(long, env = "BLOCKCONF_STATE", default_value = "./conf.stat")]
    state: PathBuf,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the open file and current block path.
    #[command(alias = "s")]
    Status,

    /// Open a configuration file and move to its root block.
    #[command(alias = "o")]
    Open {
        /// The configuration file. `~` and `$VAR` are expanded.
        file: String,
    },

    /// Close the configuration file.
    #[command(alias = "c")]
    Close,

    /// List the current block.
    #[command(alias = "l")]
    List,

    /// Move into a child of the current block.
    #[command(alias = "f")]
    Forward {
        /// The child block name.
        name: String,
    },

    /// Move back to the parent block.
    #[command(alias = "b")]
    Back,

    /// Parse the open file, logging every block and line.
    Parse,
}

fn main() -> ExitCode {
    let options = Options::parse();
    init_logging(&options.command);
    log::debug!("enter: {:?}", options.command);

    let mut terminal = Terminal::new(!options.no_color);
    let result = run(&options, &mut terminal);
    log::debug!("exit");

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            terminal.report(Event::Error, &e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Logging follows `RUST_LOG`, except that `parse` always traces the parser.
fn init_logging(command: &Command) {
    let mut builder = env_logger::Builder::from_default_env();
    if matches!(command, Command::Parse) {
        builder.filter_module("blockconf_lib", LevelFilter::Trace);
    }
    builder.init();
}

/// Load the state, run the command, and save the state if the command succeeded.
fn run<R: Report>(options: &Options, sink: &mut R) -> Result<(), CliError> {
    let state = State::load(&options.state)?;
    let mut session = Session::new(state, sink);

    match &options.command {
        Command::Status => session.status()?,
        Command::Open {
            file,
        } => session.open(file)?,
        Command::Close => session.close()?,
        Command::List => session.list()?,
        Command::Forward {
            name,
        } => session.forward(name)?,
        Command::Back => session.back()?,
        Command::Parse => session.parse()?,
    }

    session.state.save(&options.state)
}
