/// The literal separator between a key and its value.
pub const SEPARATOR: &str = " = ";

/// The indentation marker; a block at level `n` expects its body lines to start with `n` of these.
pub const INDENT: char = '\t';

/// A single configuration line, classified relative to the block that is reading it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Line<'a> {
    /// An empty line.
    Blank,

    /// A line without the block's indentation prefix. The block ends here and the line is left for the parent.
    Dedent,

    /// `/name`: the start of a child block.
    SubBlock(&'a str),

    /// `[name] = value`: a context variable declaration.
    Context {
        /// Variable name between the brackets.
        name: &'a str,

        /// Everything after the separator.
        value: &'a str,
    },

    /// `key = value`: a target.
    Target {
        /// Trimmed text before the separator.
        key: &'a str,

        /// Everything after the separator.
        value: &'a str,
    },

    /// Anything else. These lines are skipped.
    Unrecognized(&'a str),
}

impl<'a> Line<'a> {
    /// Classify `line` (already stripped of its terminator) for a block whose body lines start with `indent`.
    ///
    /// Sub-block headers are tried first, then context declarations, then targets. A line starting with `[` is
    /// always a context declaration; if it is missing its `]` or separator it is unrecognized rather than being
    /// re-read as a target.
    pub fn classify(line: &'a str, indent: &str) -> Self {
        if line.is_empty() {
            return Self::Blank;
        }

        let Some(body) = line.strip_prefix(indent) else {
            return Self::Dedent;
        };

        if let Some(name) = body.strip_prefix('/') {
            return Self::SubBlock(name.trim());
        }

        if let Some(rest) = body.strip_prefix('[') {
            let Some((front, value)) = rest.split_once(SEPARATOR) else {
                return Self::Unrecognized(body);
            };

            return match front.find(']') {
                Some(end) => Self::Context {
                    name: &front[..end],
                    value,
                },
                None => Self::Unrecognized(body),
            };
        }

        match body.split_once(SEPARATOR) {
            Some((front, value)) if !front.trim().is_empty() => Self::Target {
                key: front.trim(),
                value,
            },
            _ => Self::Unrecognized(body),
        }
    }
}

/// Returns the indentation prefix expected of body lines at `level`.
pub fn indentation(level: usize) -> String {
    INDENT.to_string().repeat(level)
}

#[cfg(test)]
mod tests {
    use super::{indentation, Line};

    #[test]
    fn blank_before_indentation() {
        assert_eq!(Line::classify("", "\t\t"), Line::Blank);
    }

    #[test]
    fn missing_indentation_is_dedent() {
        assert_eq!(Line::classify("key = 1", "\t"), Line::Dedent);
        assert_eq!(Line::classify("\tkey = 1", "\t\t"), Line::Dedent);
    }

    #[test]
    fn indent_marker_elsewhere_is_not_a_prefix() {
        // The tab appears inside the line, not at its start.
        assert_eq!(Line::classify("key = a\tb", "\t"), Line::Dedent);
    }

    #[test]
    fn sub_block_name_is_trimmed() {
        assert_eq!(Line::classify("\t/  beta  ", "\t"), Line::SubBlock("beta"));
    }

    #[test]
    fn context_declaration() {
        assert_eq!(
            Line::classify("[env] = prod", ""),
            Line::Context {
                name: "env",
                value: "prod"
            }
        );
    }

    #[test]
    fn context_without_separator_is_unrecognized() {
        assert_eq!(Line::classify("[env]", ""), Line::Unrecognized("[env]"));
        assert_eq!(Line::classify("[env = prod", ""), Line::Unrecognized("[env = prod"));
    }

    #[test]
    fn target_value_keeps_later_equals_and_spaces() {
        assert_eq!(
            Line::classify("  url  = a = b ", ""),
            Line::Target {
                key: "url",
                value: "a = b "
            }
        );
    }

    #[test]
    fn target_needs_a_key() {
        assert_eq!(Line::classify(" = value", ""), Line::Unrecognized(" = value"));
        assert_eq!(Line::classify("key=value", ""), Line::Unrecognized("key=value"));
    }

    #[test]
    fn deeper_indentation_stays_in_the_body() {
        assert_eq!(
            Line::classify("\t\tkey = 1", "\t"),
            Line::Target {
                key: "key",
                value: "1"
            }
        );
    }

    #[test]
    fn indentation_strings() {
        assert_eq!(indentation(0), "");
        assert_eq!(indentation(3), "\t\t\t");
    }
}
