//! JavaScript entry points.
//!
//! `onNavButtonClicked` keeps the name the page markup already wires to its
//! navigation button. The remaining exports configure and drive the same
//! toggle from page scripts.

use std::cell::RefCell;

use sitenav_core::{NavMenuConfig, Visibility};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};

use crate::dom;
use crate::error::NavMenuError;
use crate::handler::NavMenuToggle;

thread_local! {
    static ACTIVE: RefCell<NavMenuToggle> = RefCell::new(NavMenuToggle::default());
}

fn active() -> NavMenuToggle {
    ACTIVE.with(|cell| cell.borrow().clone())
}

fn current_document() -> Result<Document, NavMenuError> {
    let win = dom::window().ok_or(NavMenuError::NoWindow)?;
    win.document().ok_or(NavMenuError::NoDocument)
}

fn run<T>(
    op: impl FnOnce(&NavMenuToggle, &Document) -> Result<T, NavMenuError>,
) -> Result<Option<T>, NavMenuError> {
    let toggle = active();
    let result = current_document().and_then(|doc| op(&toggle, &doc));
    toggle.settle(result)
}

/// Replace the active configuration. `undefined` or `null` restores defaults.
///
/// # Errors
///
/// Throws when the object cannot be read as a configuration or fails validation.
#[wasm_bindgen(js_name = configureNavMenu)]
pub fn configure_nav_menu(config: JsValue) -> Result<(), JsValue> {
    let config = if config.is_undefined() || config.is_null() {
        NavMenuConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(NavMenuError::from)?
    };
    let toggle = NavMenuToggle::new(config).map_err(NavMenuError::from)?;
    log::debug!("navigation menu configured for #{}", toggle.config().element_id);
    ACTIVE.with(|cell| cell.replace(toggle));
    Ok(())
}

/// Click handler for the navigation button.
///
/// # Errors
///
/// Throws only if the DOM rejects the update, or if the menu is missing and
/// the active policy is `throw`.
#[wasm_bindgen(js_name = onNavButtonClicked)]
pub fn on_nav_button_clicked() -> Result<(), JsValue> {
    run(NavMenuToggle::toggle)?;
    Ok(())
}

/// # Errors
///
/// Same conditions as `onNavButtonClicked`.
#[wasm_bindgen(js_name = showNavMenu)]
pub fn show_nav_menu() -> Result<(), JsValue> {
    run(|toggle, doc| toggle.set(doc, Visibility::Shown))?;
    Ok(())
}

/// # Errors
///
/// Same conditions as `onNavButtonClicked`.
#[wasm_bindgen(js_name = hideNavMenu)]
pub fn hide_nav_menu() -> Result<(), JsValue> {
    run(|toggle, doc| toggle.set(doc, Visibility::Hidden))?;
    Ok(())
}

/// Marks a button that already carries the toggle listener.
const BOUND_ATTR: &str = "data-sitenav-bound";

/// Wire `onNavButtonClicked` to clicks on `button_id` and reconcile the menu's
/// `aria-hidden` with its classes once.
///
/// Binding the same button again only repeats the reconcile step; a second
/// listener would undo every click.
///
/// # Errors
///
/// Throws when the button does not exist, when the reconcile step fails under
/// the active policy, or when the listener cannot be attached. No listener is
/// left behind on error.
#[wasm_bindgen(js_name = bindNavButton)]
pub fn bind_nav_button(button_id: &str) -> Result<(), JsValue> {
    let doc = current_document()?;
    let button = dom::element_by_id(&doc, button_id).ok_or_else(|| {
        NavMenuError::MissingElement {
            id: button_id.to_string(),
        }
    })?;

    run(NavMenuToggle::sync)?;

    if button.has_attribute(BOUND_ATTR) {
        log::debug!("#{button_id} already bound to the navigation toggle");
        return Ok(());
    }

    let on_click = Closure::wrap(Box::new(move |_event: Event| {
        if let Err(err) = on_nav_button_clicked() {
            log::error!("navigation toggle failed: {}", dom::js_error_message(&err));
        }
    }) as Box<dyn FnMut(Event)>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    button.set_attribute(BOUND_ATTR, "")?;
    Ok(())
}
