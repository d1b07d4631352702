//! Procedural generation of the desktop application's PNG assets.
//!
//! The drawing core is [`gradient::synthesize`] plus the primitives on
//! [`canvas::Canvas`]; [`generate::generate_assets`] runs the whole catalog
//! and writes the files.

pub mod assets;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod generate;
pub mod gradient;
pub mod palette;
pub mod prompt;
pub mod provider;
pub mod report;

pub use canvas::Canvas;
pub use color::Color;
pub use config::{Config, RemoteConfig};
pub use error::SynthesisError;
pub use generate::{generate_assets, generate_assets_with};
pub use gradient::{synthesize, Direction, GradientSpec};
