//! File loading for relationship-type exports.
//!
//! This module reads the files graph tooling produces when dumping the
//! relationship types of a database: a small JSON export document, or a
//! plain text file with one type name per line.

mod type_load;

pub use type_load::*;
