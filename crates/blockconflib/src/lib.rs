//! Parsing and navigation for tab-indented block configuration files.
//!
//! A configuration file is a tree of blocks. Each block holds targets (plain `key = value` settings) and context
//! variables (`[name] = value`) that are inherited by every block nested inside it:
//!
//! ```text
//! /alpha
//! 	[env] = prod
//! 	key = 1
//! 	/beta
//! 		key = 2
//! ```
#![warn(clippy::all)]
#![allow(clippy::result_large_err)]
#![warn(missing_docs)]

mod error;
mod listing;
mod report;

pub mod navigate;
pub mod parser;
pub use {
    error::*,
    listing::*,
    navigate::{ascend, descend, resolve},
    parser::{parse, parse_file, Block},
    report::*,
};
