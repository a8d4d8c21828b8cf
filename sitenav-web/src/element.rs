//! `MenuSurface` over a live DOM element.

use sitenav_core::MenuSurface;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom;

/// A class-list or attribute call rejected by the browser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("DOM operation failed: {0}")]
pub struct DomError(pub String);

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self(dom::js_error_message(&value))
    }
}

/// The navigation menu as found in the page.
#[derive(Debug, Clone)]
pub struct DomMenu {
    element: Element,
}

impl DomMenu {
    #[must_use]
    pub const fn new(element: Element) -> Self {
        Self { element }
    }
}

impl MenuSurface for DomMenu {
    type Error = DomError;

    fn contains_class(&self, class: &str) -> Result<bool, Self::Error> {
        Ok(self.element.class_list().contains(class))
    }

    fn toggle_class(&self, class: &str) -> Result<bool, Self::Error> {
        Ok(self.element.class_list().toggle(class)?)
    }

    fn add_class(&self, class: &str) -> Result<(), Self::Error> {
        Ok(self.element.class_list().add_1(class)?)
    }

    fn remove_class(&self, class: &str) -> Result<(), Self::Error> {
        Ok(self.element.class_list().remove_1(class)?)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), Self::Error> {
        Ok(self.element.set_attribute(name, value)?)
    }
}
