//! Resolves the menu in a document and applies the toggle operations to it.

use sitenav_core::{
    ConfigError, MissingMenuPolicy, NavMenuConfig, Visibility, set_visibility, sync_aria_hidden,
    toggle_menu,
};
use web_sys::Document;

use crate::dom;
use crate::element::DomMenu;
use crate::error::NavMenuError;

/// Menu toggle bound to one validated configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavMenuToggle {
    config: NavMenuConfig,
}

impl NavMenuToggle {
    /// # Errors
    ///
    /// Returns `ConfigError` when `config` fails validation.
    pub fn new(config: NavMenuConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &NavMenuConfig {
        &self.config
    }

    /// Find the menu element in `doc`.
    ///
    /// # Errors
    ///
    /// Returns `NavMenuError::MissingElement` when the page has no element with
    /// the configured id.
    pub fn locate(&self, doc: &Document) -> Result<DomMenu, NavMenuError> {
        dom::element_by_id(doc, &self.config.element_id)
            .map(DomMenu::new)
            .ok_or_else(|| NavMenuError::MissingElement {
                id: self.config.element_id.clone(),
            })
    }

    /// Flip the menu and mirror the result into `aria-hidden`.
    ///
    /// # Errors
    ///
    /// Returns `NavMenuError` if the menu is missing or the DOM rejects a call.
    pub fn toggle(&self, doc: &Document) -> Result<Visibility, NavMenuError> {
        let menu = self.locate(doc)?;
        Ok(toggle_menu(&menu, &self.config.shown_class)?)
    }

    /// Bring `aria-hidden` in line with the current class list.
    ///
    /// # Errors
    ///
    /// Returns `NavMenuError` if the menu is missing or the DOM rejects a call.
    pub fn sync(&self, doc: &Document) -> Result<Visibility, NavMenuError> {
        let menu = self.locate(doc)?;
        Ok(sync_aria_hidden(&menu, &self.config.shown_class)?)
    }

    /// # Errors
    ///
    /// Returns `NavMenuError` if the menu is missing or the DOM rejects a call.
    pub fn set(&self, doc: &Document, visibility: Visibility) -> Result<Visibility, NavMenuError> {
        let menu = self.locate(doc)?;
        set_visibility(&menu, &self.config.shown_class, visibility)?;
        Ok(visibility)
    }

    /// Apply the configured missing-element policy to an operation result.
    ///
    /// `Ok(None)` means the menu was absent and the policy chose to carry on.
    ///
    /// # Errors
    ///
    /// Passes every error through except a missing element under the `Warn`
    /// and `Ignore` policies.
    pub fn settle<T>(&self, result: Result<T, NavMenuError>) -> Result<Option<T>, NavMenuError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_missing_element() => match self.config.on_missing {
                MissingMenuPolicy::Warn => {
                    log::warn!("navigation menu not toggled: {err}");
                    Ok(None)
                }
                MissingMenuPolicy::Ignore => Ok(None),
                MissingMenuPolicy::Throw => Err(err),
            },
            Err(err) => Err(err),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn toggle_with(policy: MissingMenuPolicy) -> NavMenuToggle {
        NavMenuToggle::new(NavMenuConfig {
            on_missing: policy,
            ..NavMenuConfig::default()
        })
        .unwrap()
    }

    fn missing() -> Result<Visibility, NavMenuError> {
        Err(NavMenuError::MissingElement {
            id: "site-nav-menu".to_string(),
        })
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = NavMenuConfig {
            shown_class: "a b".to_string(),
            ..NavMenuConfig::default()
        };
        assert!(NavMenuToggle::new(config).is_err());
    }

    #[test]
    fn warn_and_ignore_swallow_missing_element() {
        assert!(matches!(toggle_with(MissingMenuPolicy::Warn).settle(missing()), Ok(None)));
        assert!(matches!(toggle_with(MissingMenuPolicy::Ignore).settle(missing()), Ok(None)));
    }

    #[test]
    fn throw_surfaces_missing_element() {
        let err = toggle_with(MissingMenuPolicy::Throw)
            .settle(missing())
            .unwrap_err();
        assert_eq!(err.to_string(), "element #site-nav-menu not found in document");
    }

    #[test]
    fn other_errors_always_propagate() {
        let toggle = toggle_with(MissingMenuPolicy::Ignore);
        let result: Result<Visibility, _> = Err(NavMenuError::NoDocument);
        assert!(matches!(toggle.settle(result), Err(NavMenuError::NoDocument)));
    }

    #[test]
    fn success_passes_through() {
        let toggle = toggle_with(MissingMenuPolicy::Throw);
        assert!(matches!(
            toggle.settle(Ok(Visibility::Shown)),
            Ok(Some(Visibility::Shown))
        ));
    }
}
