use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A trait for concrete representations of a relationship type.
///
/// Tooling around property graphs juggles many shapes of "a relationship
/// type": values decoded from an export file, values typed by a user, values
/// handed back by a driver. Only the name takes part in identity, so the
/// trait requires nothing else.
pub trait RelationshipType {
    /// Returns the name identifying this relationship type.
    fn name(&self) -> &str;
}

/// The canonical owned relationship type: a name and nothing more.
///
/// Collections in this crate hand out `RelType` values regardless of which
/// [`RelationshipType`] implementation originally produced a name.
///
/// # Examples
///
/// ```
/// use reltype::sets::{RelType, RelationshipType};
///
/// let knows = RelType::with_name("KNOWS");
/// assert_eq!(knows.name(), "KNOWS");
/// assert_eq!(knows, RelType::with_name("KNOWS"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelType {
    name: String,
}

impl RelType {
    /// Creates a relationship type with the given name.
    ///
    /// Names are opaque: no validation or normalization is applied, and the
    /// empty string is a legal name.
    pub fn with_name(name: impl Into<String>) -> Self {
        RelType { name: name.into() }
    }
}

impl RelationshipType for RelType {
    fn name(&self) -> &str {
        &self.name
    }
}

impl RelationshipType for str {
    fn name(&self) -> &str {
        self
    }
}

impl RelationshipType for String {
    fn name(&self) -> &str {
        self
    }
}

impl<T: RelationshipType + ?Sized> RelationshipType for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl Display for RelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
