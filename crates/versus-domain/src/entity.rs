//! Entity module - the named subjects being compared

use std::fmt;

/// Stable identifier for an entity within one comparison
///
/// Keys are authored short slugs (e.g. "riverside"); the human-facing name
/// lives on [`Entity`]. Position in the table's canonical entity order
/// establishes tie-break precedence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityKey(String);

impl EntityKey {
    /// Create a key from an authored identifier
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One of the competing subjects in a comparison
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Stable identifier used in score rows and ranking output
    pub key: EntityKey,

    /// Human-facing name rendered in page copy
    pub display_name: String,
}

impl Entity {
    /// Create a new entity
    pub fn new(key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            key: EntityKey::new(key),
            display_name: display_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_creation() {
        let entity = Entity::new("loom", "Loom");
        assert_eq!(entity.key.as_str(), "loom");
        assert_eq!(entity.display_name, "Loom");
    }

    #[test]
    fn test_key_equality() {
        assert_eq!(EntityKey::new("descript"), EntityKey::from("descript"));
        assert_ne!(EntityKey::new("descript"), EntityKey::new("Descript"));
    }
}
