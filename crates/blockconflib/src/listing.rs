use {
    crate::{parser::Block, Event, Report},
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// Where a context variable shown in a listing was declared.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Scope {
    /// Declared in the listed block.
    Local,

    /// Declared only in an ancestor.
    Inherited,
}

/// A context variable as shown in a listing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContextEntry {
    /// Variable name.
    pub name: String,

    /// Value visible in the listed block.
    pub value: String,

    /// Where the visible value was declared.
    pub scope: Scope,
}

/// A read-only view of one block: its path, visible context, children, and targets.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    /// Root-relative path of the block.
    pub path: String,

    /// Every visible context variable, in declaration order.
    pub context: Vec<ContextEntry>,

    /// Names of the direct children.
    pub blocks: Vec<String>,

    /// Target key/value pairs.
    pub targets: Vec<(String, String)>,
}

impl Listing {
    /// Build the listing for `block`.
    pub fn new(block: &Block) -> Self {
        let context = block
            .inherited_context
            .iter()
            .map(|(name, value)| ContextEntry {
                name: name.clone(),
                value: value.clone(),
                scope: if block.is_inherited_only(name) {
                    Scope::Inherited
                } else {
                    Scope::Local
                },
            })
            .collect();

        Self {
            path: block.path.clone(),
            context,
            blocks: block.children.keys().cloned().collect(),
            targets: block.targets.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        }
    }

    /// Send each line of the listing to `sink`.
    pub fn report<R: Report + ?Sized>(&self, sink: &mut R) {
        sink.report(Event::Location, &format!("@ /{}", self.path));

        for entry in &self.context {
            let event = match entry.scope {
                Scope::Local => Event::LocalContext,
                Scope::Inherited => Event::InheritedContext,
            };
            sink.report(event, &format!("[{}] = {}", entry.name, entry.value));
        }

        for name in &self.blocks {
            sink.report(Event::Block, &format!("/{name}"));
        }

        for (key, value) in &self.targets {
            sink.report(Event::Target, &format!("<{key}> = <{value}>"));
        }
    }
}

impl Display for Listing {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        let mut lines: Vec<(Event, String)> = Vec::new();
        self.report(&mut lines);
        for (_, line) in lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Build the listing for `block`.
#[inline(always)]
pub fn render(block: &Block) -> Listing {
    Listing::new(block)
}
