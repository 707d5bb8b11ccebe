use std::fmt::{Display, Formatter, Result as FmtResult};

/// What a reported line describes. Display sinks use this to pick a style.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Event {
    /// The path of the block being shown.
    Location,

    /// A context variable declared in the block being shown.
    LocalContext,

    /// A context variable visible only through an ancestor.
    InheritedContext,

    /// A child block.
    Block,

    /// A target.
    Target,

    /// Open file and path information.
    Status,

    /// Informational message.
    Notice,

    /// A failed operation.
    Error,
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(match self {
            Self::Location => "location",
            Self::LocalContext => "local context",
            Self::InheritedContext => "inherited context",
            Self::Block => "block",
            Self::Target => "target",
            Self::Status => "status",
            Self::Notice => "notice",
            Self::Error => "error",
        })
    }
}

/// A display sink.
pub trait Report {
    /// Show one line of output.
    fn report(&mut self, event: Event, payload: &str);
}

/// Collects reported lines in memory.
impl Report for Vec<(Event, String)> {
    fn report(&mut self, event: Event, payload: &str) {
        self.push((event, payload.to_string()));
    }
}
