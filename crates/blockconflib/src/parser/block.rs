use {
    crate::parser::{indentation, Line, LineCursor},
    indexmap::IndexMap,
};

/// Name given to the implicit block that holds the whole file.
pub const ROOT_NAME: &str = "root";

/// A string-to-string mapping that remembers declaration order.
pub type Vars = IndexMap<String, String>;

/// A block in a configuration file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Block {
    /// The block name. The top-level block is named [`ROOT_NAME`].
    pub name: String,

    /// The root-relative path of this block, with names joined by `/`. Empty for the root block.
    pub path: String,

    /// Nesting depth; body lines of this block are prefixed by this many tabs.
    pub level: usize,

    /// Child blocks, in the order they were first declared.
    pub children: IndexMap<String, Block>,

    /// Context variables declared directly in this block.
    pub local_context: Vars,

    /// Context variables visible in this block: those declared in ancestors before this block was declared, plus
    /// those declared locally.
    pub inherited_context: Vars,

    /// Targets declared in this block. These are not inherited.
    pub targets: Vars,
}

impl Block {
    /// Parse a complete file into its root block.
    pub fn parse_root(cursor: &mut LineCursor) -> Self {
        Self::parse(0, ROOT_NAME, String::new(), &Vars::new(), cursor)
    }

    /// Parse the body of a block at `level`.
    ///
    /// Lines are consumed from `cursor` until one is found that does not carry this level's indentation, or until
    /// the input runs out. That line is left in the cursor for the parent to look at. Lines that cannot be
    /// classified are skipped; this never fails.
    pub fn parse(level: usize, name: &str, path: String, inherited: &Vars, cursor: &mut LineCursor) -> Self {
        log::debug!("enter block {name:?} at level {level}");

        let indent = indentation(level);
        let mut block = Self {
            name: name.to_string(),
            path,
            level,
            inherited_context: inherited.clone(),
            ..Self::default()
        };

        while let Some(raw) = cursor.peek() {
            let line_no = cursor.line_number();

            match Line::classify(raw, &indent) {
                Line::Dedent => break,
                Line::Blank => cursor.advance(),
                Line::SubBlock(child_name) => {
                    log::trace!("line {line_no}: block <{child_name}>");
                    cursor.advance();

                    let child_path = block.child_path(child_name);
                    let child = Self::parse(level + 1, child_name, child_path, &block.inherited_context, cursor);
                    if block.children.insert(child_name.to_string(), child).is_some() {
                        log::debug!("line {line_no}: block {child_name:?} replaces an earlier declaration");
                    }
                }
                Line::Context {
                    name,
                    value,
                } => {
                    log::trace!("line {line_no}: context <{name}>=<{value}>");
                    cursor.advance();
                    block.local_context.insert(name.to_string(), value.to_string());
                    block.inherited_context.insert(name.to_string(), value.to_string());
                }
                Line::Target {
                    key,
                    value,
                } => {
                    log::trace!("line {line_no}: target <{key}>=<{value}>");
                    cursor.advance();
                    block.targets.insert(key.to_string(), value.to_string());
                }
                Line::Unrecognized(text) => {
                    log::trace!("line {line_no}: skipping {text:?}");
                    cursor.advance();
                }
            }
        }

        log::debug!("exit block {name:?} at level {level}");
        block
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&Block> {
        self.children.get(name)
    }

    /// Returns the path a child of this block named `name` would have.
    pub fn child_path(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}/{name}", self.path)
        }
    }

    /// Returns true if `name` is visible here only because an ancestor declared it.
    pub fn is_inherited_only(&self, name: &str) -> bool {
        self.inherited_context.contains_key(name) && !self.local_context.contains_key(name)
    }

    /// Count this block and all of its descendants.
    pub fn count(&self) -> usize {
        1 + self.children.values().map(Block::count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{Block, ROOT_NAME},
        crate::parser::{parse, LineCursor},
    };

    fn vars(pairs: &[(&str, &str)]) -> super::Vars {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn alpha_beta() {
        let root = parse("/alpha\n\t[env] = prod\n\tkey = 1\n\t/beta\n\t\tkey = 2\n");
        assert_eq!(root.name, ROOT_NAME);
        assert_eq!(root.level, 0);
        assert_eq!(root.children.len(), 1);

        let alpha = &root.children["alpha"];
        assert_eq!(alpha.level, 1);
        assert_eq!(alpha.local_context, vars(&[("env", "prod")]));
        assert_eq!(alpha.inherited_context, vars(&[("env", "prod")]));
        assert_eq!(alpha.targets, vars(&[("key", "1")]));

        let beta = &alpha.children["beta"];
        assert_eq!(beta.path, "alpha/beta");
        assert_eq!(beta.level, 2);
        assert_eq!(beta.inherited_context, vars(&[("env", "prod")]));
        assert!(beta.local_context.is_empty());
        assert_eq!(beta.targets, vars(&[("key", "2")]));
        assert!(beta.is_inherited_only("env"));
    }

    #[test_log::test]
    fn dedent_returns_line_to_parent() {
        let root = parse("/a\n\t/b\n\t\tx = 1\n\ty = 2\nz = 3\n/c\n\tw = 4\n");
        let a = &root.children["a"];
        assert_eq!(a.targets, vars(&[("y", "2")]));
        assert_eq!(a.children["b"].targets, vars(&[("x", "1")]));
        assert_eq!(root.targets, vars(&[("z", "3")]));
        assert_eq!(root.children["c"].targets, vars(&[("w", "4")]));
    }

    #[test]
    fn blank_lines_do_not_end_blocks() {
        let root = parse("/a\n\n\tx = 1\n\n\n\ty = 2\n");
        assert_eq!(root.children["a"].targets, vars(&[("x", "1"), ("y", "2")]));
        assert!(root.targets.is_empty());
    }

    #[test]
    fn empty_block_name_still_owns_its_body() {
        let root = parse("/\n\tx = 1\n");
        assert!(root.targets.is_empty());
        assert_eq!(root.children[""].targets, vars(&[("x", "1")]));
        assert!(std::ptr::eq(crate::navigate::resolve(&root, "/").unwrap(), &root));
    }

    #[test]
    fn whitespace_only_line_ends_block() {
        let root = parse("/a\n\tx = 1\n \n\ty = 2\n");
        assert_eq!(root.children["a"].targets, vars(&[("x", "1")]));
        assert_eq!(root.targets, vars(&[("y", "2")]));
    }

    #[test]
    fn context_snapshot_taken_at_declaration() {
        let root = parse("[a] = 1\n/early\n[b] = 2\n/late\n");
        assert_eq!(root.children["early"].inherited_context, vars(&[("a", "1")]));
        assert_eq!(root.children["late"].inherited_context, vars(&[("a", "1"), ("b", "2")]));
    }

    #[test]
    fn override_is_scoped_to_subtree() {
        let root = parse(concat!(
            "[env] = prod\n",
            "/a\n",
            "\t[env] = test\n",
            "\t/inner\n",
            "\t\tk = v\n",
            "/b\n",
            "\t/inner\n",
        ));

        assert_eq!(root.local_context, vars(&[("env", "prod")]));
        let a = &root.children["a"];
        assert_eq!(a.local_context, vars(&[("env", "test")]));
        assert_eq!(a.inherited_context, vars(&[("env", "test")]));
        assert_eq!(a.children["inner"].inherited_context, vars(&[("env", "test")]));
        assert_eq!(root.children["b"].children["inner"].inherited_context, vars(&[("env", "prod")]));
    }

    #[test]
    fn targets_are_not_inherited() {
        let root = parse("key = 1\n/child\n");
        assert!(root.children["child"].targets.is_empty());
    }

    #[test]
    fn duplicate_sibling_replaces() {
        let root = parse("/a\n\tx = 1\n/b\n/a\n\ty = 2\n");
        let names: Vec<_> = root.children.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(root.children["a"].targets, vars(&[("y", "2")]));
    }

    #[test]
    fn unrecognized_lines_are_skipped() {
        let root = parse("# not a comment yet\nno separator\n[broken\nkey = value\n");
        assert_eq!(root.targets, vars(&[("key", "value")]));
        assert!(root.local_context.is_empty());
    }

    #[test]
    fn over_indented_header_is_attributed_to_nearest_block() {
        // `a` expects one tab; after stripping it the header starts with a tab, not `/`.
        let root = parse("/a\n\t\t/deep\n\t\t\tx = 1\n");
        let a = &root.children["a"];
        assert!(a.children.is_empty());
        assert_eq!(a.targets, vars(&[("x", "1")]));
    }

    #[test]
    fn cursor_stops_on_dedent() {
        let mut cursor = LineCursor::new("\tx = 1\ny = 2\n");
        let block = Block::parse(1, "child", "child".to_string(), &Default::default(), &mut cursor);
        assert_eq!(block.targets, vars(&[("x", "1")]));
        assert_eq!(cursor.peek(), Some("y = 2"));
    }

    #[test]
    fn parse_is_deterministic() {
        let text = "[a] = 1\n/x\n\t/y\n\t\tk = v\n/z\n";
        assert_eq!(parse(text), parse(text));
        assert_eq!(parse(text).count(), 4);
    }
}
