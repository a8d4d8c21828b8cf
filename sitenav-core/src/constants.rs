/// Id the page markup gives the navigation menu element.
pub const MENU_ELEMENT_ID: &str = "site-nav-menu";

/// Class whose presence makes the stylesheet display the menu.
pub const SHOWN_CLASS: &str = "shown";

/// Attribute read by assistive technology.
pub const ARIA_HIDDEN: &str = "aria-hidden";
