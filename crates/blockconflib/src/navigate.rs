//! Path-based lookup and navigation over a parsed block tree.
//!
//! A path is a `/`-separated list of block names relative to the root block. The empty path is the root. Empty
//! segments (from leading, trailing, or doubled separators) are ignored.
use crate::{parser::Block, BlockConfError};

/// Path separator.
pub const PATH_SEPARATOR: char = '/';

/// Returns the non-empty segments of `path`.
///
/// A block whose header name contains `/` can never be reached this way; [descend] refuses to step into one.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(PATH_SEPARATOR).filter(|segment| !segment.is_empty())
}

/// Find the block at `path` below `root`.
///
/// Fails with a not-found error naming the first segment that does not exist and the block it was looked up in.
pub fn resolve<'a>(root: &'a Block, path: &str) -> Result<&'a Block, BlockConfError> {
    let mut block = root;

    for segment in segments(path) {
        log::trace!("resolve: <{segment}> in <{}>", block.name);
        match block.child(segment) {
            Some(child) => block = child,
            None => return Err(BlockConfError::not_found(segment, &block.name)),
        }
    }

    Ok(block)
}

/// Step forward from the block at `path` into its child `name`.
///
/// Returns the new path and the child. Nothing is changed on failure; persisting the new path is up to the caller.
pub fn descend<'a>(root: &'a Block, path: &str, name: &str) -> Result<(String, &'a Block), BlockConfError> {
    let current = resolve(root, path)?;
    let child = if name.contains(PATH_SEPARATOR) {
        None
    } else {
        current.child(name)
    };
    let Some(child) = child else {
        return Err(BlockConfError::not_found(name, &current.name));
    };

    Ok((join(path, name), child))
}

/// Step back from the block at `path` to its parent.
///
/// Stepping back from the root stays at the root.
pub fn ascend<'a>(root: &'a Block, path: &str) -> Result<(String, &'a Block), BlockConfError> {
    let parent = parent_path(path);
    let block = resolve(root, parent)?;
    Ok((parent.to_string(), block))
}

/// Remove the last `/`-delimited segment of `path`. A path without a separator becomes the empty (root) path.
pub fn parent_path(path: &str) -> &str {
    match path.rfind(PATH_SEPARATOR) {
        Some(index) => &path[..index],
        None => "",
    }
}

/// Append `name` to `path`, adding a separator only if `path` is not empty.
pub fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}{PATH_SEPARATOR}{name}")
    }
}
