//! Name-keyed relationship-type collections.
//!
//! A relationship type in a property graph is identified by its name string
//! alone. The structures in this module store only those names, so any two
//! concrete representations of a type compare equal whenever their names
//! match: [`RelationshipType`] is the abstraction, [`RelType`] the canonical
//! owned representation, and [`RelTypeSet`] the set adapter backed by name
//! strings.

mod relationship_type;
mod type_set;

pub use relationship_type::*;
pub use type_set::*;
