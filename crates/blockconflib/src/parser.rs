//! Block configuration parser.

mod block;
mod cursor;
mod line;

pub use {block::*, cursor::*, line::*};

use {
    crate::BlockConfError,
    std::{fs::File, io::Read, path::Path},
};

/// Parse configuration text into its root block.
///
/// This never fails: lines that cannot be classified are skipped, and a line with too little indentation simply
/// ends the blocks that expected more.
pub fn parse(text: &str) -> Block {
    let mut cursor = LineCursor::new(text);
    let root = Block::parse_root(&mut cursor);
    debug_assert!(cursor.is_empty(), "root block stopped before end of input");
    root
}

/// Read and parse the given file.
pub fn parse_file(filename: impl AsRef<Path>) -> Result<Block, BlockConfError> {
    let filename = filename.as_ref();
    log::debug!("parsing {}", filename.display());

    let mut input = String::new();
    File::open(filename)
        .and_then(|mut file| file.read_to_string(&mut input))
        .map_err(|e| BlockConfError::io(filename, e))?;

    Ok(parse(&input))
}
