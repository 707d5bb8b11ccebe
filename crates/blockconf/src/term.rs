use {
    blockconf_lib::{Event, Report},
    std::io::{stderr, stdout, IsTerminal, Result as IoResult, Write},
    termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor},
};

/// Writes reported lines to the terminal, styled by event. Errors go to stderr, everything else to stdout.
pub struct Terminal {
    stdout: StandardStream,
    stderr: StandardStream,
}

impl Terminal {
    /// Create a terminal sink. Output is never styled on a stream that is not a terminal.
    pub fn new(color: bool) -> Self {
        Self {
            stdout: StandardStream::stdout(color_choice(color, stdout().is_terminal())),
            stderr: StandardStream::stderr(color_choice(color, stderr().is_terminal())),
        }
    }

    fn write_line(&mut self, event: Event, payload: &str) -> IoResult<()> {
        let stream = match event {
            Event::Error => &mut self.stderr,
            _ => &mut self.stdout,
        };

        stream.set_color(&style(event))?;
        write!(stream, "{payload}")?;
        stream.reset()?;
        writeln!(stream)
    }
}

impl Report for Terminal {
    fn report(&mut self, event: Event, payload: &str) {
        if let Err(e) = self.write_line(event, payload) {
            log::error!("cannot write {event}: {e}");
        }
    }
}

/// Pipes and files get plain text; `Auto` still honors `TERM` and `NO_COLOR` on a terminal.
fn color_choice(color: bool, is_terminal: bool) -> ColorChoice {
    if color && is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Returns the style used for `event`.
fn style(event: Event) -> ColorSpec {
    let mut spec = ColorSpec::new();
    match event {
        Event::LocalContext => {
            spec.set_bold(true);
        }
        Event::Error => {
            spec.set_fg(Some(Color::Red)).set_intense(true);
        }
        _ => (),
    }
    spec
}
