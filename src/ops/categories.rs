use log::debug;

use crate::ops::store::StoreError;

/// User-defined category names, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categories {
    names: Vec<String>,
}

impl Categories {
    /// Seed from config, skipping blanks and duplicates
    pub fn from_defaults(defaults: &[String]) -> Self {
        let mut cats = Categories::default();
        for name in defaults {
            if let Err(e) = cats.add(name) {
                debug!("event=category_default_skipped name={:?} reason={}", name, e);
            }
        }
        cats
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Add a category. Names are trimmed; duplicates compare case-insensitively.
    pub fn add(&mut self, name: &str) -> Result<&str, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::Validation("category name cannot be empty".into()));
        }
        let lower = name.to_lowercase();
        if self.names.iter().any(|n| n.to_lowercase() == lower) {
            return Err(StoreError::Validation(format!(
                "category \"{}\" already exists",
                name
            )));
        }
        self.names.push(name.to_string());
        Ok(self.names.last().map(String::as_str).unwrap_or_default())
    }

    /// Remove by position, returning the removed name
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.names.len()).then(|| self.names.remove(index))
    }
}
