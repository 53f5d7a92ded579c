//! Display preferences persisted next to the conversation log.

use serde::{Deserialize, Serialize};

/// Stored value for the dark theme.
pub const THEME_DARK: &str = "dark";
/// Stored value for the light theme.
pub const THEME_LIGHT: &str = "light";

/// User-facing preferences.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Dark theme enabled.
    pub dark_mode: bool,
}

impl Preferences {
    /// Decode the theme slot. Anything other than `"dark"` means light.
    #[must_use]
    pub fn from_theme_value(value: Option<&str>) -> Self {
        Self {
            dark_mode: value == Some(THEME_DARK),
        }
    }

    /// Encode for the theme slot.
    #[must_use]
    pub const fn theme_value(self) -> &'static str {
        if self.dark_mode { THEME_DARK } else { THEME_LIGHT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_decoding() {
        assert!(Preferences::from_theme_value(Some("dark")).dark_mode);
        assert!(!Preferences::from_theme_value(Some("light")).dark_mode);
        assert!(!Preferences::from_theme_value(Some("DARK")).dark_mode);
        assert!(!Preferences::from_theme_value(None).dark_mode);
    }

    #[test]
    fn test_theme_encoding() {
        assert_eq!(Preferences { dark_mode: true }.theme_value(), "dark");
        assert_eq!(Preferences::default().theme_value(), "light");
    }
}
