use std::fmt;

/// Two-valued display state of the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    /// Visibility implied by presence of the shown marker class.
    #[must_use]
    pub const fn from_marker(present: bool) -> Self {
        if present { Self::Shown } else { Self::Hidden }
    }

    /// Read an `aria-hidden` value the way assistive technology does: only the
    /// literal `"true"` hides the element.
    #[must_use]
    pub fn from_aria_hidden(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("true") {
            Self::Hidden
        } else {
            Self::Shown
        }
    }

    /// String-encoded boolean written to `aria-hidden`.
    #[must_use]
    pub const fn aria_hidden(self) -> &'static str {
        match self {
            Self::Shown => "false",
            Self::Hidden => "true",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Shown => "shown",
            Self::Hidden => "hidden",
        })
    }
}
