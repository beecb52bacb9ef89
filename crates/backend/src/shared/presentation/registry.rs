//! Entity index to presentation descriptor registry

use std::collections::{HashMap, HashSet};

use contracts::shared::presentation::ClassPresentation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Entity index '{0}' is already registered")]
    DuplicateIndex(String),
    #[error("Descriptor for '{index}' is invalid: {reason}")]
    InvalidDescriptor { index: String, reason: String },
}

#[derive(Debug)]
struct RegistryEntry {
    descriptor: Option<&'static ClassPresentation>,
    parent: Option<String>,
}

/// Maps entity indexes to their presentation descriptors.
///
/// A subtype without a descriptor of its own may point at a parent index;
/// lookup walks the parent chain and answers the first descriptor found,
/// so families of entities can share one screen layout.
#[derive(Debug, Default)]
pub struct PresentationRegistry {
    entries: HashMap<String, RegistryEntry>,
}

impl PresentationRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registers a descriptor under an entity index. Fails fast on a
    /// duplicate index and on a descriptor with ambiguous group names.
    pub fn register(
        &mut self,
        index: &str,
        descriptor: &'static ClassPresentation,
    ) -> Result<(), RegistryError> {
        descriptor
            .validate()
            .map_err(|reason| RegistryError::InvalidDescriptor {
                index: index.to_string(),
                reason,
            })?;
        if self.entries.contains_key(index) {
            return Err(RegistryError::DuplicateIndex(index.to_string()));
        }
        self.entries.insert(
            index.to_string(),
            RegistryEntry {
                descriptor: Some(descriptor),
                parent: None,
            },
        );
        Ok(())
    }

    /// Registers an index that inherits its presentation from a parent
    /// index. The parent may be registered later; a dangling parent just
    /// resolves to nothing.
    pub fn register_subtype(&mut self, index: &str, parent: &str) -> Result<(), RegistryError> {
        if self.entries.contains_key(index) {
            return Err(RegistryError::DuplicateIndex(index.to_string()));
        }
        self.entries.insert(
            index.to_string(),
            RegistryEntry {
                descriptor: None,
                parent: Some(parent.to_string()),
            },
        );
        Ok(())
    }

    /// Descriptor for an index, walking the parent chain when the index
    /// has none of its own.
    pub fn lookup(&self, index: &str) -> Option<&'static ClassPresentation> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut current = index;
        loop {
            if !visited.insert(current) {
                tracing::warn!("Presentation lookup hit a parent cycle at '{current}'");
                return None;
            }
            let entry = self.entries.get(current)?;
            if let Some(descriptor) = entry.descriptor {
                return Some(descriptor);
            }
            current = entry.parent.as_deref()?;
        }
    }

    /// All registered indexes, sorted for stable iteration.
    pub fn entity_indexes(&self) -> Vec<String> {
        let mut indexes: Vec<String> = self.entries.keys().cloned().collect();
        indexes.sort();
        indexes
    }
}
