//! Theme flag: persisted in localStorage, mirrored onto `<body>` as the
//! `light-mode` class so the stylesheet and the rain painter can both
//! read it.

const STORAGE_KEY: &str = "theme";
const DARK_MARKER: &str = "dark-mode";
const LIGHT_MARKER: &str = "light-mode";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Only the literal dark marker selects dark; anything else,
    /// including a missing value, falls back to light.
    pub fn from_marker(raw: Option<&str>) -> Theme {
        match raw {
            Some(DARK_MARKER) => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Theme::Dark => DARK_MARKER,
            Theme::Light => LIGHT_MARKER,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph tint for the rain animation.
    pub fn rain_tint(self) -> &'static str {
        match self {
            Theme::Light => "rgba(45, 55, 72, 0.3)",
            Theme::Dark => "rgba(66, 153, 225, 0.3)",
        }
    }

    /// Translucent wash painted over the whole canvas each tick; the
    /// low alpha is what produces the fading trails.
    pub fn backdrop_wash(self) -> &'static str {
        match self {
            Theme::Light => "rgba(247, 250, 252, 0.25)",
            Theme::Dark => "rgba(26, 32, 44, 0.25)",
        }
    }
}

pub fn load() -> Theme {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(raw) = storage.get_item(STORAGE_KEY) {
                return Theme::from_marker(raw.as_deref());
            }
        }
    }
    Theme::Light
}

pub fn store(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, theme.marker());
        }
    }
}

/// Mirror the theme onto the body class list.
pub fn apply(theme: Theme) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let classes = body.class_list();
        let _ = match theme {
            Theme::Light => classes.add_1(LIGHT_MARKER),
            Theme::Dark => classes.remove_1(LIGHT_MARKER),
        };
    }
}

/// Re-derive the theme from the body class list. The rain painter calls
/// this on every frame so an in-flight animation recolors the moment
/// the class flips.
pub fn current() -> Theme {
    let lit = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .map(|body| body.class_list().contains(LIGHT_MARKER))
        .unwrap_or(false);
    if lit {
        Theme::Light
    } else {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_dark_marker_selects_dark() {
        assert_eq!(Theme::from_marker(Some("dark-mode")), Theme::Dark);
        assert_eq!(Theme::from_marker(Some("light-mode")), Theme::Light);
        assert_eq!(Theme::from_marker(Some("midnight")), Theme::Light);
        assert_eq!(Theme::from_marker(None), Theme::Light);
    }

    #[test]
    fn marker_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_marker(Some(theme.marker())), theme);
        }
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
