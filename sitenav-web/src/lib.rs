//! Browser front end for the site navigation menu toggle.
#![forbid(unsafe_code)]

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod bindings;
pub mod dom;
pub mod element;
pub mod error;
pub mod handler;
pub mod logger;

pub use bindings::{
    bind_nav_button, configure_nav_menu, hide_nav_menu, on_nav_button_clicked, show_nav_menu,
};
pub use element::{DomError, DomMenu};
pub use error::NavMenuError;
pub use handler::NavMenuToggle;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A host page may have installed its own logger already
    let _ = logger::init();
}
