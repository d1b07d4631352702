//! Theme colors shared by the asset recipes.

use crate::color::Color;

pub const PRIMARY: Color = Color::rgb(224, 64, 251); // #e040fb
pub const ACCENT: Color = Color::rgb(122, 235, 190); // #7aebbe
pub const BACKGROUND: Color = Color::rgb(18, 14, 26); // #120e1a
pub const DARK_PURPLE: Color = Color::rgb(88, 24, 120);
pub const LIGHT_PURPLE: Color = Color::rgb(240, 120, 255);

pub const GRID_LINE: Color = Color::rgb(25, 20, 35);
pub const BADGE_RED: Color = Color::rgb(220, 50, 50);
pub const STATUS_ONLINE: Color = Color::rgb(80, 200, 120);
pub const STATUS_OFFLINE: Color = Color::rgb(128, 128, 128);

/// Colors of the dragon avatar icon.
pub mod dragon {
    use crate::color::Color;

    pub const ACCENT_PURPLE: Color = Color::rgb(0x8b, 0x5c, 0xf6);
    pub const ACCENT_BLUE: Color = Color::rgb(0x3b, 0x82, 0xf6);
    pub const BG_PRIMARY: Color = Color::rgb(0x0d, 0x11, 0x17);
    pub const BG_SECONDARY: Color = Color::rgb(0x16, 0x1b, 0x22);

    /// Named colors, in the order they are listed in the prompt document.
    pub const NAMED: [(&str, Color); 4] = [
        ("accent_purple", ACCENT_PURPLE),
        ("accent_blue", ACCENT_BLUE),
        ("bg_primary", BG_PRIMARY),
        ("bg_secondary", BG_SECONDARY),
    ];
}

/// Slate and blue of the bundle icon shipped with the desktop shell.
pub mod shell {
    use crate::color::Color;

    pub const BACKGROUND: Color = Color::rgb(30, 30, 46);
    pub const FILL: Color = Color::rgb(100, 150, 255);
    pub const OUTLINE: Color = Color::rgb(150, 180, 255);
}
