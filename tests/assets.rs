use asset_gen::assets::{Asset, AssetGroup, Category, DEFAULT_ICON_SIZES};
use asset_gen::palette;
use asset_gen::{Color, SynthesisError};

fn assert_close(actual: Color, expected: Color) {
    let channels = [
        (actual.r, expected.r),
        (actual.g, expected.g),
        (actual.b, expected.b),
        (actual.a, expected.a),
    ];
    for (a, e) in channels {
        assert!(
            (a as i16 - e as i16).abs() <= 1,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }
}

#[test]
fn local_renders_match_catalog_dimensions() {
    let mut assets = Vec::new();
    for group in [AssetGroup::Icons, AssetGroup::Backgrounds, AssetGroup::Ui] {
        assets.extend(group.assets(&DEFAULT_ICON_SIZES));
    }
    assets.push(Asset::ShellIcon);

    for asset in assets {
        let canvas = asset
            .render_local()
            .unwrap_or_else(|err| panic!("{} failed: {err}", asset.file_name()));
        assert_eq!(
            canvas.dimensions(),
            asset.dimensions(),
            "{} has the wrong size",
            asset.file_name()
        );
    }
}

#[test]
fn catalog_names_and_directories() {
    let cases = [
        (Asset::AppIcon(48), "icon-48.png", Some(Category::AppIcons)),
        (Asset::HeroBackground, "hero-background.png", Some(Category::Backgrounds)),
        (Asset::ChatBackground, "chat-background.png", Some(Category::Backgrounds)),
        (Asset::StatusIndicator { online: true }, "status-online.png", Some(Category::UiElements)),
        (Asset::StatusIndicator { online: false }, "status-offline.png", Some(Category::UiElements)),
        (Asset::DragonIcon, "dragon-icon.png", Some(Category::AppIcons)),
        (Asset::ShellIcon, "icon.png", None),
    ];

    for (asset, name, category) in cases {
        assert_eq!(asset.file_name(), name);
        assert_eq!(asset.category(), category);
    }
    assert_eq!(Category::UiElements.dir_name(), "ui-elements");
}

#[test]
fn only_the_dragon_has_a_prompt() {
    assert!(Asset::DragonIcon.prompt().unwrap().contains("dragon"));
    assert!(Asset::HeroBackground.prompt().is_none());
    assert!(Asset::AppIcon(64).prompt().is_none());
}

#[test]
fn zero_sized_icon_is_rejected() {
    assert_eq!(
        Asset::AppIcon(0).render_local(),
        Err(SynthesisError::InvalidDimensions {
            width: 0,
            height: 0
        })
    );
}

#[test]
fn app_icon_has_rounded_corners_and_monogram() {
    let icon = Asset::AppIcon(64).render_local().unwrap();

    assert_eq!(icon.get(0, 0), Some(Color::TRANSPARENT));
    assert_eq!(icon.get(63, 63), Some(Color::TRANSPARENT));

    // Gradient starts light at the top edge.
    assert_close(icon.get(32, 0).unwrap(), palette::LIGHT_PURPLE);

    // Vertical stroke of the "K".
    assert_close(icon.get(16, 24).unwrap(), palette::ACCENT);
    // Right of the letter is untouched gradient.
    assert_eq!(icon.get(56, 32).unwrap().a, 255);
    assert_ne!(icon.get(56, 32).unwrap(), palette::ACCENT);
}

#[test]
fn status_indicators() {
    let online = Asset::StatusIndicator { online: true }.render_local().unwrap();
    let offline = Asset::StatusIndicator { online: false }.render_local().unwrap();

    assert_close(online.get(8, 8).unwrap(), palette::STATUS_ONLINE);
    assert_close(offline.get(8, 8).unwrap(), palette::STATUS_OFFLINE);
    assert_eq!(online.get(0, 0), Some(Color::TRANSPARENT));

    // Translucent white highlight brightens the disc.
    let highlight = online.get(6, 6).unwrap();
    assert!(highlight.r > palette::STATUS_ONLINE.r);
    assert_eq!(highlight.a, 255);
}

#[test]
fn notification_badge_has_a_white_ring() {
    let badge = Asset::NotificationBadge.render_local().unwrap();
    assert_close(badge.get(16, 16).unwrap(), palette::BADGE_RED);
    assert_close(badge.get(2, 16).unwrap(), Color::WHITE);
    assert_eq!(badge.get(0, 0), Some(Color::TRANSPARENT));
}

#[test]
fn avatar_placeholder_layout() {
    let avatar = Asset::AvatarPlaceholder.render_local().unwrap();
    assert_close(avatar.get(50, 33).unwrap(), palette::ACCENT);
    assert_close(avatar.get(50, 75).unwrap(), palette::ACCENT);
    assert_close(avatar.get(5, 50).unwrap(), palette::DARK_PURPLE);
    assert_eq!(avatar.get(0, 0), Some(Color::TRANSPARENT));
}

#[test]
fn chat_background_fades_in_the_bottom_half() {
    let chat = Asset::ChatBackground.render_local().unwrap();
    let target = palette::DARK_PURPLE.scaled(0.3);

    assert_eq!(chat.get(0, 0), Some(palette::BACKGROUND));
    assert_eq!(chat.get(1000, 539), Some(palette::BACKGROUND));
    assert_close(chat.get(0, 540).unwrap(), palette::BACKGROUND);
    assert_close(
        chat.get(0, 1079).unwrap(),
        palette::BACKGROUND.lerp(target, 539.0 / 540.0),
    );
}

#[test]
fn sidebar_glows_on_the_left_edge() {
    let sidebar = Asset::SidebarBackground.render_local().unwrap();
    let edge = sidebar.get(0, 500).unwrap();
    let inner = sidebar.get(200, 500).unwrap();
    assert!(edge.g > inner.g, "edge {:?} should be greener than {:?}", edge, inner);
}

#[test]
fn seeded_terminal_background_is_reproducible() {
    let first = Asset::TerminalBackground.render_local().unwrap();
    let second = Asset::TerminalBackground.render_local().unwrap();
    assert_eq!(first, second);

    // Grid lines every 40px.
    assert_close(first.get(40, 7).unwrap(), palette::GRID_LINE);
    assert_close(first.get(7, 80).unwrap(), palette::GRID_LINE);
}

#[test]
fn dragon_glow_core_is_opaque_purple() {
    let dragon = Asset::DragonIcon.render_local().unwrap();
    assert_eq!(dragon.dimensions(), (1024, 1024));

    // Stacked translucent glows add up instead of replacing each other.
    let core = dragon.get(512, 560).unwrap();
    assert!(core.a >= 250, "got {:?}", core);
    assert!(core.b > 200 && core.r > core.g, "got {:?}", core);

    // The background stays the dark theme color away from the glow.
    assert_close(dragon.get(20, 1000).unwrap(), palette::dragon::BG_PRIMARY);
}
