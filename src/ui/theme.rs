//! # Theme System
//!
//! Centralized colors for the kiosk. Rendering code references theme
//! fields instead of hardcoding `ratatui::style::Color` values, and the
//! active theme is picked with `--theme` or remembered in the config
//! file.
//!
//! ## Built-in Themes
//!
//! - **Dark Cocoa** (default) - dark chocolate browns with caramel accents
//! - **Vanilla Cream** - light theme, cream background with berry accents
//! - **Raspberry Glaze** - dark plum theme with bright raspberry accents

use ratatui::style::Color;

/// All colors used by the kiosk, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name matched by `--theme` (case-insensitive).
    pub name: &'static str,

    // -- Background colors --
    /// Main background for panels, cards and popups.
    pub bg: Color,

    // -- Foreground / text colors --
    /// Primary text color.
    pub fg: Color,
    /// Muted text (hints, image references, the footer).
    pub fg_dim: Color,

    // -- Accent / brand colors --
    /// Brand color: header, focused borders, active tab.
    pub accent: Color,
    /// Secondary accent: category tags, the offer popover, search text.
    pub secondary: Color,

    // -- Semantic status colors --
    /// Confirmation region after an accepted submission.
    pub success: Color,
    /// Validation notices.
    pub error: Color,

    // -- Selection --
    /// Background of the selected card and of select-field values.
    pub selection_bg: Color,
}

impl Theme {
    /// All built-in themes, in display order.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// The default theme (Dark Cocoa).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static BUILT_IN_THEMES: [Theme; 3] = [
    // 0 - Dark Cocoa (default)
    Theme {
        name: "Dark Cocoa",
        bg: Color::Rgb(43, 31, 26),             // dark chocolate
        fg: Color::Rgb(241, 230, 214),          // cream
        fg_dim: Color::Rgb(150, 126, 108),      // milk chocolate
        accent: Color::Rgb(214, 153, 86),       // caramel
        secondary: Color::Rgb(209, 109, 140),   // raspberry
        success: Color::Rgb(150, 182, 115),     // pistachio
        error: Color::Rgb(211, 89, 74),         // cherry
        selection_bg: Color::Rgb(74, 55, 45),   // mocha
    },
    // 1 - Vanilla Cream
    Theme {
        name: "Vanilla Cream",
        bg: Color::Rgb(247, 240, 227),          // cream
        fg: Color::Rgb(74, 55, 42),             // cocoa
        fg_dim: Color::Rgb(162, 141, 121),      // latte
        accent: Color::Rgb(176, 104, 52),       // burnt caramel
        secondary: Color::Rgb(158, 62, 96),     // berry
        success: Color::Rgb(96, 133, 73),       // leaf
        error: Color::Rgb(176, 58, 46),         // cherry
        selection_bg: Color::Rgb(232, 218, 196), // shortbread
    },
    // 2 - Raspberry Glaze
    Theme {
        name: "Raspberry Glaze",
        bg: Color::Rgb(48, 26, 35),             // dark plum
        fg: Color::Rgb(243, 226, 231),          // icing
        fg_dim: Color::Rgb(152, 116, 128),      // dusty rose
        accent: Color::Rgb(232, 122, 155),      // raspberry
        secondary: Color::Rgb(240, 184, 108),   // honey
        success: Color::Rgb(151, 190, 144),     // mint
        error: Color::Rgb(235, 94, 94),         // strawberry
        selection_bg: Color::Rgb(77, 44, 56),   // mulberry
    },
];
