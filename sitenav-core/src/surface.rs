//! Element seam the toggle operates on.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::convert::Infallible;

/// Class-set and attribute access on a single page element.
///
/// Methods take `&self` because DOM handles mutate through shared references;
/// in-memory implementations use interior mutability to match.
pub trait MenuSurface {
    type Error;

    /// # Errors
    ///
    /// Returns the surface error when the class list cannot be read.
    fn contains_class(&self, class: &str) -> Result<bool, Self::Error>;

    /// Flip membership of `class`, returning whether it is present afterwards.
    ///
    /// # Errors
    ///
    /// Returns the surface error when the class list rejects the token.
    fn toggle_class(&self, class: &str) -> Result<bool, Self::Error>;

    /// # Errors
    ///
    /// Returns the surface error when the class list rejects the token.
    fn add_class(&self, class: &str) -> Result<(), Self::Error>;

    /// # Errors
    ///
    /// Returns the surface error when the class list rejects the token.
    fn remove_class(&self, class: &str) -> Result<(), Self::Error>;

    fn attribute(&self, name: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns the surface error when the attribute cannot be written.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), Self::Error>;
}

/// In-memory stand-in for the menu element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualMenu {
    id: String,
    classes: RefCell<BTreeSet<String>>,
    attributes: RefCell<BTreeMap<String, String>>,
}

impl VirtualMenu {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        self.classes.borrow_mut().insert(class.to_string());
        self
    }

    #[must_use]
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Snapshot of the class set in sorted order.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }

    /// Space-separated class list, as `className` would report it.
    #[must_use]
    pub fn class_name(&self) -> String {
        self.classes().join(" ")
    }
}

impl MenuSurface for VirtualMenu {
    type Error = Infallible;

    fn contains_class(&self, class: &str) -> Result<bool, Self::Error> {
        Ok(self.classes.borrow().contains(class))
    }

    fn toggle_class(&self, class: &str) -> Result<bool, Self::Error> {
        let mut classes = self.classes.borrow_mut();
        if classes.remove(class) {
            Ok(false)
        } else {
            classes.insert(class.to_string());
            Ok(true)
        }
    }

    fn add_class(&self, class: &str) -> Result<(), Self::Error> {
        self.classes.borrow_mut().insert(class.to_string());
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), Self::Error> {
        self.classes.borrow_mut().remove(class);
        Ok(())
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), Self::Error> {
        self.attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}
