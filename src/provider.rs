//! Sources of rendered asset images.
//!
//! Assets are either drawn locally from primitives or requested from a
//! remote image-generation API. Which one is used is decided once, by
//! [`select_provider`], and the remote provider is always paired with a local
//! fallback.

use crate::assets::Asset;
use crate::config::RemoteConfig;
use crate::error::SynthesisError;
use base64::{engine::general_purpose::STANDARD, Engine};
use image::{imageops::FilterType, RgbaImage};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Header carrying the API key. Kept out of the URL so that request errors,
/// which print the URL, never contain it.
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0} has no prompt for remote generation")]
    Unsupported(String),

    #[error("image request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("response did not contain an image")]
    NoImage,

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("inline image data is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("could not decode generated image: {0}")]
    Decode(#[from] image::ImageError),

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

/// Something that can produce the pixels of an asset.
pub trait ImageProvider {
    fn name(&self) -> &'static str;

    /// Render `asset` at its catalog dimensions.
    fn render(&self, asset: &Asset) -> Result<RgbaImage, ProviderError>;
}

impl<P: ImageProvider + ?Sized> ImageProvider for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn render(&self, asset: &Asset) -> Result<RgbaImage, ProviderError> {
        (**self).render(asset)
    }
}

/// Draws every asset with the built-in recipes.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalProvider;

impl ImageProvider for LocalProvider {
    fn name(&self) -> &'static str {
        "local"
    }

    fn render(&self, asset: &Asset) -> Result<RgbaImage, ProviderError> {
        Ok(asset.render_local()?.finish())
    }
}

/// Client for a Gemini-style `generateContent` endpoint.
#[derive(Clone)]
pub struct RemoteProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl RemoteProvider {
    pub fn new(config: &RemoteConfig, api_key: &str) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: api_key.to_string(),
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl fmt::Debug for RemoteProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteProvider")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl ImageProvider for RemoteProvider {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn render(&self, asset: &Asset) -> Result<RgbaImage, ProviderError> {
        let prompt = asset
            .prompt()
            .ok_or_else(|| ProviderError::Unsupported(asset.file_name()))?;

        info!(model = %self.model, asset = %asset.file_name(), "requesting generated image");
        let body = self
            .client
            .post(self.url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request_payload(prompt))
            .send()?
            .error_for_status()?
            .text()?;

        let (width, height) = asset.dimensions();
        let generated = decode_generated_image(&body)?;
        Ok(image::imageops::resize(
            &generated,
            width,
            height,
            FilterType::Lanczos3,
        ))
    }
}

/// Tries `primary` first and falls back to `fallback` when it fails.
#[derive(Debug, Clone)]
pub struct WithFallback<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> WithFallback<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: ImageProvider, F: ImageProvider> ImageProvider for WithFallback<P, F> {
    fn name(&self) -> &'static str {
        self.primary.name()
    }

    fn render(&self, asset: &Asset) -> Result<RgbaImage, ProviderError> {
        match self.primary.render(asset) {
            Ok(image) => Ok(image),
            Err(ProviderError::Unsupported(name)) => {
                debug!(asset = %name, fallback = self.fallback.name(), "asset not supported remotely");
                self.fallback.render(asset)
            }
            Err(err) => {
                warn!(
                    asset = %asset.file_name(),
                    provider = self.primary.name(),
                    fallback = self.fallback.name(),
                    "image generation failed, falling back: {err}"
                );
                self.fallback.render(asset)
            }
        }
    }
}

/// Pick the provider for this run.
///
/// Without an API key, or when offline, everything is drawn locally.
pub fn select_provider(config: &RemoteConfig) -> Box<dyn ImageProvider> {
    if config.offline {
        info!("offline mode, drawing all assets locally");
        return Box::new(LocalProvider);
    }

    let Some(api_key) = config.api_key.as_deref().filter(|key| !key.is_empty()) else {
        info!("no API key configured, drawing all assets locally");
        return Box::new(LocalProvider);
    };

    match RemoteProvider::new(config, api_key) {
        Ok(remote) => Box::new(WithFallback::new(remote, LocalProvider)),
        Err(err) => {
            warn!("could not set up remote image generation: {err}");
            Box::new(LocalProvider)
        }
    }
}

fn request_payload(prompt: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [{
            "parts": [{
                "text": format!("Generate an image: {prompt}")
            }]
        }],
        "generationConfig": {
            "temperature": 0.9,
            "topK": 40,
            "topP": 0.95,
        }
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: String,
    data: String,
}

/// Pull the first inline image out of a `generateContent` response body.
///
/// Text-only answers are reported as [`ProviderError::NoImage`].
pub fn decode_generated_image(body: &str) -> Result<RgbaImage, ProviderError> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;

    let inline = response
        .candidates
        .into_iter()
        .filter_map(|candidate| candidate.content)
        .flat_map(|content| content.parts)
        .find_map(|part| part.inline_data)
        .ok_or(ProviderError::NoImage)?;

    debug!(mime_type = %inline.mime_type, "decoding inline image");
    let bytes = STANDARD.decode(inline.data.trim())?;
    Ok(image::load_from_memory(&bytes)?.to_rgba8())
}
