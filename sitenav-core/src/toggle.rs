//! The menu toggle and its companions.

use crate::constants::ARIA_HIDDEN;
use crate::surface::MenuSurface;
use crate::visibility::Visibility;

/// Flip the shown marker and mirror the result into `aria-hidden`.
///
/// Visibility is re-read from the class list after the flip rather than taken
/// from the toggle's return value, so the attribute always reflects what the
/// stylesheet will see.
///
/// # Errors
///
/// Propagates any error from the underlying surface.
pub fn toggle_menu<S: MenuSurface>(
    surface: &S,
    shown_class: &str,
) -> Result<Visibility, S::Error> {
    surface.toggle_class(shown_class)?;
    let visibility = visibility_of(surface, shown_class)?;
    surface.set_attribute(ARIA_HIDDEN, visibility.aria_hidden())?;
    log::debug!("navigation menu toggled to {visibility}");
    Ok(visibility)
}

/// Current visibility as implied by the class list.
///
/// # Errors
///
/// Propagates any error from the underlying surface.
pub fn visibility_of<S: MenuSurface>(
    surface: &S,
    shown_class: &str,
) -> Result<Visibility, S::Error> {
    Ok(Visibility::from_marker(surface.contains_class(shown_class)?))
}

/// Write `aria-hidden` from the current class list without toggling.
///
/// Markup can ship with an attribute that disagrees with its classes; calling
/// this once at load restores the invariant before the first click. An
/// attribute that already announces the right state (`"TRUE"` on a hidden
/// menu, say) is left as written.
///
/// # Errors
///
/// Propagates any error from the underlying surface.
pub fn sync_aria_hidden<S: MenuSurface>(
    surface: &S,
    shown_class: &str,
) -> Result<Visibility, S::Error> {
    let visibility = visibility_of(surface, shown_class)?;
    let announced = surface
        .attribute(ARIA_HIDDEN)
        .map(|value| Visibility::from_aria_hidden(&value));
    if announced != Some(visibility) {
        log::debug!("repairing {ARIA_HIDDEN} for {visibility} menu");
        surface.set_attribute(ARIA_HIDDEN, visibility.aria_hidden())?;
    }
    Ok(visibility)
}

/// Force the menu into `visibility`.
///
/// # Errors
///
/// Propagates any error from the underlying surface.
pub fn set_visibility<S: MenuSurface>(
    surface: &S,
    shown_class: &str,
    visibility: Visibility,
) -> Result<(), S::Error> {
    match visibility {
        Visibility::Shown => surface.add_class(shown_class)?,
        Visibility::Hidden => surface.remove_class(shown_class)?,
    }
    surface.set_attribute(ARIA_HIDDEN, visibility.aria_hidden())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::VirtualMenu;
    use crate::{MENU_ELEMENT_ID, SHOWN_CLASS};

    fn hidden_menu() -> VirtualMenu {
        VirtualMenu::new(MENU_ELEMENT_ID).with_attribute(ARIA_HIDDEN, "true")
    }

    #[test]
    fn toggle_shows_hidden_menu() {
        let menu = hidden_menu();
        let result = toggle_menu(&menu, SHOWN_CLASS).unwrap();
        assert_eq!(result, Visibility::Shown);
        assert!(menu.contains_class(SHOWN_CLASS).unwrap());
        assert_eq!(menu.attribute(ARIA_HIDDEN).as_deref(), Some("false"));
    }

    #[test]
    fn toggle_leaves_other_classes_alone() {
        let menu = hidden_menu().with_class("nav").with_class("nav--wide");
        toggle_menu(&menu, SHOWN_CLASS).unwrap();
        assert_eq!(menu.class_name(), "nav nav--wide shown");
        toggle_menu(&menu, SHOWN_CLASS).unwrap();
        assert_eq!(menu.class_name(), "nav nav--wide");
    }

    #[test]
    fn toggle_honours_custom_class() {
        let menu = hidden_menu();
        toggle_menu(&menu, "open").unwrap();
        assert!(menu.contains_class("open").unwrap());
        assert!(!menu.contains_class(SHOWN_CLASS).unwrap());
    }

    #[test]
    fn sync_repairs_inconsistent_attribute() {
        let menu = VirtualMenu::new(MENU_ELEMENT_ID)
            .with_class(SHOWN_CLASS)
            .with_attribute(ARIA_HIDDEN, "true");
        assert_eq!(sync_aria_hidden(&menu, SHOWN_CLASS).unwrap(), Visibility::Shown);
        assert_eq!(menu.attribute(ARIA_HIDDEN).as_deref(), Some("false"));
        assert!(menu.contains_class(SHOWN_CLASS).unwrap());
    }

    #[test]
    fn sync_writes_missing_attribute() {
        let menu = VirtualMenu::new(MENU_ELEMENT_ID);
        assert_eq!(sync_aria_hidden(&menu, SHOWN_CLASS).unwrap(), Visibility::Hidden);
        assert_eq!(menu.attribute(ARIA_HIDDEN).as_deref(), Some("true"));
    }

    #[test]
    fn sync_reads_attribute_like_assistive_technology() {
        let hidden = VirtualMenu::new(MENU_ELEMENT_ID).with_attribute(ARIA_HIDDEN, "TRUE");
        assert_eq!(sync_aria_hidden(&hidden, SHOWN_CLASS).unwrap(), Visibility::Hidden);
        assert_eq!(hidden.attribute(ARIA_HIDDEN).as_deref(), Some("TRUE"));

        let shown = VirtualMenu::new(MENU_ELEMENT_ID)
            .with_class(SHOWN_CLASS)
            .with_attribute(ARIA_HIDDEN, " True ");
        assert_eq!(sync_aria_hidden(&shown, SHOWN_CLASS).unwrap(), Visibility::Shown);
        assert_eq!(shown.attribute(ARIA_HIDDEN).as_deref(), Some("false"));

        let garbage = VirtualMenu::new(MENU_ELEMENT_ID).with_attribute(ARIA_HIDDEN, "yes");
        assert_eq!(sync_aria_hidden(&garbage, SHOWN_CLASS).unwrap(), Visibility::Hidden);
        assert_eq!(garbage.attribute(ARIA_HIDDEN).as_deref(), Some("true"));
    }

    #[test]
    fn set_visibility_is_idempotent() {
        let menu = hidden_menu();
        set_visibility(&menu, SHOWN_CLASS, Visibility::Shown).unwrap();
        set_visibility(&menu, SHOWN_CLASS, Visibility::Shown).unwrap();
        assert_eq!(visibility_of(&menu, SHOWN_CLASS).unwrap(), Visibility::Shown);
        assert_eq!(menu.attribute(ARIA_HIDDEN).as_deref(), Some("false"));

        set_visibility(&menu, SHOWN_CLASS, Visibility::Hidden).unwrap();
        set_visibility(&menu, SHOWN_CLASS, Visibility::Hidden).unwrap();
        assert_eq!(visibility_of(&menu, SHOWN_CLASS).unwrap(), Visibility::Hidden);
        assert_eq!(menu.attribute(ARIA_HIDDEN).as_deref(), Some("true"));
    }
}
