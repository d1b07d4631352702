//! The application's asset catalog and the recipes that draw each asset.

use crate::canvas::{Bounds, Canvas};
use crate::color::Color;
use crate::error::SynthesisError;
use crate::gradient::{synthesize, GradientSpec};
use crate::palette::{self, dragon, shell};
use crate::prompt::DRAGON_PROMPT;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Default square sizes of the app icon.
pub const DEFAULT_ICON_SIZES: [u32; 7] = [16, 32, 48, 64, 128, 256, 512];

/// Sizes the dragon icon is exported at.
pub const DRAGON_SIZES: [u32; 8] = [16, 32, 48, 64, 128, 256, 512, 1024];

const BACKGROUND_SIZE: (u32, u32) = (1920, 1080);
const TERMINAL_SEED: u64 = 42;

/// Output sub-directory an asset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    AppIcons,
    Backgrounds,
    UiElements,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::AppIcons,
        Category::Backgrounds,
        Category::UiElements,
    ];

    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::AppIcons => "app-icons",
            Category::Backgrounds => "backgrounds",
            Category::UiElements => "ui-elements",
        }
    }
}

/// Groups of assets that can be selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum AssetGroup {
    Icons,
    Backgrounds,
    Ui,
    Dragon,
}

impl AssetGroup {
    pub const ALL: [AssetGroup; 4] = [
        AssetGroup::Icons,
        AssetGroup::Backgrounds,
        AssetGroup::Ui,
        AssetGroup::Dragon,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            AssetGroup::Icons => "📱 Generating app icons...",
            AssetGroup::Backgrounds => "🖼️  Generating backgrounds...",
            AssetGroup::Ui => "🎯 Generating UI elements...",
            AssetGroup::Dragon => "🐉 Generating dragon avatar icon...",
        }
    }

    pub fn assets(&self, icon_sizes: &[u32]) -> Vec<Asset> {
        match self {
            AssetGroup::Icons => icon_sizes.iter().map(|&s| Asset::AppIcon(s)).collect(),
            AssetGroup::Backgrounds => vec![
                Asset::HeroBackground,
                Asset::SidebarBackground,
                Asset::TerminalBackground,
                Asset::ChatBackground,
            ],
            AssetGroup::Ui => vec![
                Asset::AvatarPlaceholder,
                Asset::NotificationBadge,
                Asset::StatusIndicator { online: true },
                Asset::StatusIndicator { online: false },
            ],
            AssetGroup::Dragon => vec![Asset::DragonIcon],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    AppIcon(u32),
    HeroBackground,
    SidebarBackground,
    TerminalBackground,
    ChatBackground,
    AvatarPlaceholder,
    NotificationBadge,
    StatusIndicator { online: bool },
    /// Rendered at 1024px and exported at every [`DRAGON_SIZES`] entry.
    DragonIcon,
    /// Bundle icon of the desktop shell, written as `icon.png` and `icon.ico`.
    ShellIcon,
}

impl Asset {
    pub fn file_name(&self) -> String {
        match self {
            Asset::AppIcon(size) => format!("icon-{size}.png"),
            Asset::HeroBackground => "hero-background.png".to_string(),
            Asset::SidebarBackground => "sidebar-background.png".to_string(),
            Asset::TerminalBackground => "terminal-background.png".to_string(),
            Asset::ChatBackground => "chat-background.png".to_string(),
            Asset::AvatarPlaceholder => "avatar-placeholder.png".to_string(),
            Asset::NotificationBadge => "notification-badge.png".to_string(),
            Asset::StatusIndicator { online: true } => "status-online.png".to_string(),
            Asset::StatusIndicator { online: false } => "status-offline.png".to_string(),
            Asset::DragonIcon => "dragon-icon.png".to_string(),
            Asset::ShellIcon => "icon.png".to_string(),
        }
    }

    /// Directory under the output root, `None` for the shell bundle icon.
    pub fn category(&self) -> Option<Category> {
        match self {
            Asset::AppIcon(_) | Asset::DragonIcon => Some(Category::AppIcons),
            Asset::HeroBackground
            | Asset::SidebarBackground
            | Asset::TerminalBackground
            | Asset::ChatBackground => Some(Category::Backgrounds),
            Asset::AvatarPlaceholder
            | Asset::NotificationBadge
            | Asset::StatusIndicator { .. } => Some(Category::UiElements),
            Asset::ShellIcon => None,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Asset::AppIcon(size) => (*size, *size),
            Asset::HeroBackground | Asset::TerminalBackground | Asset::ChatBackground => {
                BACKGROUND_SIZE
            }
            Asset::SidebarBackground => (400, 1080),
            Asset::AvatarPlaceholder => (100, 100),
            Asset::NotificationBadge => (32, 32),
            Asset::StatusIndicator { .. } => (16, 16),
            Asset::DragonIcon => (1024, 1024),
            Asset::ShellIcon => (256, 256),
        }
    }

    /// Text prompt for remote image generation, if the asset has one.
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            Asset::DragonIcon => Some(DRAGON_PROMPT),
            _ => None,
        }
    }

    /// Draw the asset with the local primitives.
    pub fn render_local(&self) -> Result<Canvas, SynthesisError> {
        match *self {
            Asset::AppIcon(size) => app_icon(size),
            Asset::HeroBackground => hero_background(),
            Asset::SidebarBackground => sidebar_background(),
            Asset::TerminalBackground => terminal_background(),
            Asset::ChatBackground => chat_background(),
            Asset::AvatarPlaceholder => avatar_placeholder(),
            Asset::NotificationBadge => notification_badge(),
            Asset::StatusIndicator { online } => status_indicator(online),
            Asset::DragonIcon => dragon_icon(),
            Asset::ShellIcon => shell_icon(),
        }
    }
}

/// Rounded square with a vertical purple gradient and a "K" monogram.
fn app_icon(size: u32) -> Result<Canvas, SynthesisError> {
    let mut icon = synthesize(
        size,
        size,
        &GradientSpec::vertical(palette::LIGHT_PURPLE, palette::PRIMARY),
    )?;
    let corner_radius = (size / 8).max(8);
    icon.mask_rounded_rect(corner_radius as f32);

    let letter_size = (size / 2) as f32;
    let letter_x = (size / 4) as f32;
    let letter_y = (size / 4) as f32;
    let stroke = (size / 16).max(2) as f32;
    let waist = (letter_x, letter_y + (size / 4) as f32);
    let arm = (size / 4) as f32;

    icon.draw_line(
        (letter_x, letter_y),
        (letter_x, letter_y + letter_size),
        palette::ACCENT,
        stroke,
    );
    icon.draw_line(waist, (letter_x + arm, letter_y), palette::ACCENT, stroke);
    icon.draw_line(
        waist,
        (letter_x + arm, letter_y + letter_size),
        palette::ACCENT,
        stroke,
    );

    Ok(icon)
}

fn hero_background() -> Result<Canvas, SynthesisError> {
    let (width, height) = BACKGROUND_SIZE;
    let mut img = synthesize(
        width,
        height,
        &GradientSpec::radial(palette::DARK_PURPLE, palette::BACKGROUND),
    )?;

    let tint = Canvas::filled(width, height, palette::PRIMARY.with_alpha(20))?;
    img.composite(&tint);

    // Faint diagonal "circuit" traces.
    for i in (0..width).step_by(100) {
        let alpha = 10 + (i % 200) / 20;
        img.draw_line(
            (i as f32, 0.0),
            ((i + 200) as f32, height as f32),
            palette::PRIMARY.with_alpha(alpha as u8),
            2.0,
        );
    }

    Ok(img)
}

fn sidebar_background() -> Result<Canvas, SynthesisError> {
    let (width, height) = (400, 1080);
    let mut img = synthesize(
        width,
        height,
        &GradientSpec::vertical(palette::DARK_PURPLE, palette::BACKGROUND),
    )?;

    // Accent glow fading out over the left edge.
    for x in 0..50u32 {
        let alpha = (30.0 * (1.0 - x as f32 / 50.0)) as u8;
        img.draw_line(
            (x as f32, 0.0),
            (x as f32, (height - 1) as f32),
            palette::ACCENT.with_alpha(alpha),
            1.0,
        );
    }

    Ok(img)
}

fn terminal_background() -> Result<Canvas, SynthesisError> {
    let (width, height) = BACKGROUND_SIZE;
    let mut img = Canvas::filled(width, height, palette::BACKGROUND)?;

    let grid_size = 40;
    for x in (0..width).step_by(grid_size) {
        img.draw_line(
            (x as f32, 0.0),
            (x as f32, (height - 1) as f32),
            palette::GRID_LINE,
            1.0,
        );
    }
    for y in (0..height).step_by(grid_size) {
        img.draw_line(
            (0.0, y as f32),
            ((width - 1) as f32, y as f32),
            palette::GRID_LINE,
            1.0,
        );
    }

    // Fixed seed so every run draws the same dots.
    let mut rng = StdRng::seed_from_u64(TERMINAL_SEED);
    for _ in 0..100 {
        let x = rng.gen_range(0..=width) as f32;
        let y = rng.gen_range(0..=height) as f32;
        let size = rng.gen_range(1..=3) as f32;
        let color = if rng.gen::<f64>() > 0.5 {
            palette::ACCENT
        } else {
            palette::PRIMARY
        };
        img.fill_ellipse(Bounds::new(x, y, x + size, y + size), color);
    }

    Ok(img)
}

/// Flat top half, bottom half fading towards a dimmed purple.
fn chat_background() -> Result<Canvas, SynthesisError> {
    let (width, height) = BACKGROUND_SIZE;
    let half = height / 2;
    let mut img = Canvas::filled(width, height, palette::BACKGROUND)?;

    let fade = synthesize(
        width,
        height - half,
        &GradientSpec::vertical(palette::BACKGROUND, palette::DARK_PURPLE.scaled(0.3)),
    )?;
    img.composite_at(&fade, 0, half as i64);

    Ok(img)
}

fn avatar_placeholder() -> Result<Canvas, SynthesisError> {
    let size = 100u32;
    let mut img = Canvas::new(size, size)?;
    let edge = (size - 1) as f32;
    img.fill_ellipse(Bounds::new(0.0, 0.0, edge, edge), palette::DARK_PURPLE);

    let head_radius = (size / 6) as f32;
    let head_center = ((size / 2) as f32, (size / 3) as f32);
    img.fill_ellipse(
        Bounds::around(head_center.0, head_center.1, head_radius),
        palette::ACCENT,
    );

    let body_width = (size / 2) as f32;
    let body_height = (size / 3) as f32;
    let body_y = (size as f32 * 0.6).floor();
    let mid = (size / 2) as f32;
    img.fill_ellipse(
        Bounds::new(
            mid - body_width / 2.0,
            body_y,
            mid + body_width / 2.0,
            body_y + body_height,
        ),
        palette::ACCENT,
    );

    Ok(img)
}

fn notification_badge() -> Result<Canvas, SynthesisError> {
    let size = 32u32;
    let mut img = Canvas::new(size, size)?;
    let edge = (size - 1) as f32;

    img.fill_ellipse(Bounds::new(0.0, 0.0, edge, edge), palette::BADGE_RED);
    img.stroke_ellipse(
        Bounds::new(2.0, 2.0, edge - 2.0, edge - 2.0),
        Color::WHITE,
        2.0,
    );

    Ok(img)
}

fn status_indicator(online: bool) -> Result<Canvas, SynthesisError> {
    let size = 16u32;
    let mut img = Canvas::new(size, size)?;
    let edge = (size - 1) as f32;
    let color = if online {
        palette::STATUS_ONLINE
    } else {
        palette::STATUS_OFFLINE
    };
    img.fill_ellipse(Bounds::new(0.0, 0.0, edge, edge), color);

    let offset = (size / 4) as f32;
    let highlight = (size / 4) as f32;
    img.fill_ellipse(
        Bounds::new(offset, offset, offset + highlight, offset + highlight),
        Color::WHITE.with_alpha(100),
    );

    Ok(img)
}

/// Stylised dragon-bird head: purple glow, blue eyes and crest wings, softened
/// with a blur.
fn dragon_icon() -> Result<Canvas, SynthesisError> {
    let size = 1024u32;
    let mut img = Canvas::filled(size, size, dragon::BG_PRIMARY)?;
    let center = (size / 2) as f32;

    // Glows blend over each other, so the core ends up opaque rather than
    // taking the alpha of the last, innermost ring.
    for i in (2..=200u32).rev().step_by(2) {
        let alpha = (255 * i / 200) as u8;
        img.fill_ellipse(
            Bounds::around(center, center, i as f32),
            dragon::ACCENT_PURPLE.with_alpha(alpha),
        );
    }

    let eyes = [(center - 80.0, center - 40.0), (center + 80.0, center - 40.0)];
    for i in (2..=40u32).rev().step_by(2) {
        let alpha = (255 * i / 40) as u8;
        for (eye_x, eye_y) in eyes {
            img.fill_ellipse(
                Bounds::around(eye_x, eye_y, i as f32),
                dragon::ACCENT_BLUE.with_alpha(alpha),
            );
        }
    }

    let crest = dragon::ACCENT_PURPLE.with_alpha(180);
    img.fill_polygon(
        &[
            (center - 250.0, center - 100.0),
            (center - 150.0, center - 200.0),
            (center - 100.0, center - 50.0),
        ],
        crest,
    );
    img.fill_polygon(
        &[
            (center + 250.0, center - 100.0),
            (center + 150.0, center - 200.0),
            (center + 100.0, center - 50.0),
        ],
        crest,
    );

    Ok(img.blurred(5.0))
}

/// Blue disc on a slate square.
fn shell_icon() -> Result<Canvas, SynthesisError> {
    let size = 256u32;
    let margin = 30.0;
    let mut img = Canvas::filled(size, size, shell::BACKGROUND)?;
    let bounds = Bounds::new(margin, margin, size as f32 - margin, size as f32 - margin);

    img.fill_ellipse(bounds, shell::FILL);
    img.stroke_ellipse(bounds, shell::OUTLINE, 3.0);

    Ok(img)
}
