use asset_gen::assets::Asset;
use asset_gen::provider::{
    decode_generated_image, select_provider, ImageProvider, LocalProvider, ProviderError,
    RemoteProvider, WithFallback,
};
use asset_gen::RemoteConfig;
use base64::{engine::general_purpose::STANDARD, Engine};
use image::{DynamicImage, ImageOutputFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Provider that always fails, standing in for an unreachable API.
struct Unreachable;

impl ImageProvider for Unreachable {
    fn name(&self) -> &'static str {
        "unreachable"
    }

    fn render(&self, _asset: &Asset) -> Result<RgbaImage, ProviderError> {
        Err(ProviderError::NoImage)
    }
}

fn encoded_png(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8 * 60, y as u8 * 60, 7, 255]));
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)
        .expect("Failed to encode test png");
    buf
}

#[test]
fn without_api_key_everything_is_local() {
    let provider = select_provider(&RemoteConfig::default());
    assert_eq!(provider.name(), "local");

    let empty_key = RemoteConfig {
        api_key: Some(String::new()),
        ..RemoteConfig::default()
    };
    assert_eq!(select_provider(&empty_key).name(), "local");
}

#[test]
fn offline_mode_ignores_the_api_key() {
    let config = RemoteConfig {
        api_key: Some("secret".to_string()),
        offline: true,
        ..RemoteConfig::default()
    };
    assert_eq!(select_provider(&config).name(), "local");
}

#[test]
fn api_key_selects_the_remote_provider() {
    let config = RemoteConfig {
        api_key: Some("secret".to_string()),
        ..RemoteConfig::default()
    };
    assert_eq!(select_provider(&config).name(), "remote");
}

#[test]
fn failing_primary_falls_back_to_local() {
    let provider = WithFallback::new(Unreachable, LocalProvider);
    let image = provider.render(&Asset::NotificationBadge).unwrap();
    assert_eq!(image.dimensions(), (32, 32));

    let local = LocalProvider.render(&Asset::NotificationBadge).unwrap();
    assert_eq!(image, local);
}

#[test]
fn remote_provider_refuses_assets_without_prompt() {
    let config = RemoteConfig {
        endpoint: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        ..RemoteConfig::default()
    };
    let remote = RemoteProvider::new(&config, "secret").unwrap();

    assert!(matches!(
        remote.render(&Asset::AvatarPlaceholder),
        Err(ProviderError::Unsupported(name)) if name == "avatar-placeholder.png"
    ));

    // Unsupported assets are drawn locally without touching the network.
    let provider = WithFallback::new(remote, LocalProvider);
    let image = provider.render(&Asset::AvatarPlaceholder).unwrap();
    assert_eq!(image.dimensions(), (100, 100));
}

#[test]
fn unreachable_endpoint_is_a_request_error() {
    let config = RemoteConfig {
        endpoint: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        ..RemoteConfig::default()
    };
    let remote = RemoteProvider::new(&config, "SUPERSECRETKEY").unwrap();

    let err = remote.render(&Asset::DragonIcon).unwrap_err();
    assert!(matches!(err, ProviderError::Request(_)));

    // The key never shows up in messages that end up in logs.
    assert!(!err.to_string().contains("SUPERSECRETKEY"), "{err}");
    assert!(!format!("{err:?}").contains("SUPERSECRETKEY"));
    assert!(!format!("{remote:?}").contains("SUPERSECRETKEY"));
}

#[test]
fn text_only_response_has_no_image() {
    let body = serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": "I can only describe images." }] }
        }]
    })
    .to_string();

    assert!(matches!(
        decode_generated_image(&body),
        Err(ProviderError::NoImage)
    ));
    assert!(matches!(
        decode_generated_image("{}"),
        Err(ProviderError::NoImage)
    ));
}

#[test]
fn inline_image_is_decoded() {
    let body = serde_json::json!({
        "candidates": [{
            "content": {
                "parts": [
                    { "text": "Here is your icon" },
                    { "inlineData": { "mimeType": "image/png", "data": STANDARD.encode(encoded_png(3, 2)) } }
                ]
            }
        }]
    })
    .to_string();

    let image = decode_generated_image(&body).unwrap();
    assert_eq!(image.dimensions(), (3, 2));
    assert_eq!(*image.get_pixel(2, 1), Rgba([120, 60, 7, 255]));
}

#[test]
fn malformed_responses_are_errors() {
    assert!(matches!(
        decode_generated_image("not json"),
        Err(ProviderError::Malformed(_))
    ));

    let bad_base64 = serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "inlineData": { "mimeType": "image/png", "data": "%%%" } }] }
        }]
    })
    .to_string();
    assert!(matches!(
        decode_generated_image(&bad_base64),
        Err(ProviderError::Base64(_))
    ));

    let not_an_image = serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "inlineData": { "mimeType": "image/png", "data": STANDARD.encode(b"hello") } }] }
        }]
    })
    .to_string();
    assert!(matches!(
        decode_generated_image(&not_an_image),
        Err(ProviderError::Decode(_))
    ));
}
