//! Sitenav core
//!
//! Platform-agnostic logic for the site navigation menu toggle. This crate knows
//! nothing about the browser: it flips the shown marker on anything implementing
//! [`MenuSurface`] and mirrors the result into `aria-hidden`.

pub mod config;
pub mod constants;
pub mod surface;
pub mod toggle;
pub mod visibility;

pub use config::{ConfigError, MissingMenuPolicy, NavMenuConfig};
pub use constants::{ARIA_HIDDEN, MENU_ELEMENT_ID, SHOWN_CLASS};
pub use surface::{MenuSurface, VirtualMenu};
pub use toggle::{set_visibility, sync_aria_hidden, toggle_menu, visibility_of};
pub use visibility::Visibility;
