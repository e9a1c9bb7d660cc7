//! Implementations of [`ClassResolver`].

use std::collections::HashMap;

use super::{ClassResolver, ResolutionError};

/// An in-memory resolver that maps class names to handles registered beforehand.
#[derive(Debug, Clone)]
pub struct ClassRegistry<C> {
    classes: HashMap<String, C>,
}

impl<C> Default for ClassRegistry<C> {
    fn default() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }
}

impl<C> ClassRegistry<C> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `class` under `class_name`, returning the handle previously registered under
    /// the same name, if any.
    pub fn register(&mut self, class_name: impl Into<String>, class: C) -> Option<C> {
        self.classes.insert(class_name.into(), class)
    }

    /// Checks if a class is registered under `class_name`.
    #[must_use]
    pub fn contains(&self, class_name: &str) -> bool {
        self.classes.contains_key(class_name)
    }

    /// The number of registered classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Checks if no class is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl<C> FromIterator<(String, C)> for ClassRegistry<C> {
    fn from_iter<T: IntoIterator<Item = (String, C)>>(iter: T) -> Self {
        Self {
            classes: iter.into_iter().collect(),
        }
    }
}

impl<C> Extend<(String, C)> for ClassRegistry<C> {
    fn extend<T: IntoIterator<Item = (String, C)>>(&mut self, iter: T) {
        self.classes.extend(iter);
    }
}

impl<C: Clone> ClassResolver for ClassRegistry<C> {
    type Class = C;

    fn resolve_class(&self, class_name: &str) -> Result<Self::Class, ResolutionError> {
        self.classes
            .get(class_name)
            .cloned()
            .ok_or_else(|| ResolutionError::ClassNotFound(class_name.to_owned()))
    }
}

/// A resolver that does not resolve any class.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopResolver;

impl ClassResolver for NopResolver {
    type Class = std::convert::Infallible;

    fn resolve_class(&self, class_name: &str) -> Result<Self::Class, ResolutionError> {
        Err(ResolutionError::ClassNotFound(class_name.to_owned()))
    }
}
