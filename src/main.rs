use anyhow::Result;
use asset_gen::{
    assets::{AssetGroup, DEFAULT_ICON_SIZES},
    config::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT_SECS},
    generate_assets, Config, RemoteConfig,
};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[clap(
    name = "asset-gen",
    about = "Draw the application's PNG icons, backgrounds and UI elements"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Also write the desktop bundle icons (icon.png, icon.ico, dragon-icon.png) here.
    #[clap(long, value_name = "DIR")]
    tauri_icons: Option<PathBuf>,

    /// App icon sizes to generate.
    #[clap(short, long, value_delimiter = ',', value_name = "SIZES")]
    sizes: Option<Vec<u32>>,

    /// Only generate these asset groups.
    #[clap(long, value_enum, value_delimiter = ',', value_name = "GROUPS")]
    only: Vec<AssetGroup>,

    /// API key of the remote image-generation service.
    #[clap(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of the remote image-generation service.
    #[clap(long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    api_endpoint: String,

    /// Model used for remote generation.
    #[clap(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Timeout of a remote request, in seconds.
    #[clap(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Draw everything locally, even when an API key is set.
    #[clap(long)]
    offline: bool,
}

impl Args {
    fn into_config(self) -> Config {
        Config {
            output: self.output,
            tauri_icons: self.tauri_icons,
            icon_sizes: self.sizes.unwrap_or_else(|| DEFAULT_ICON_SIZES.to_vec()),
            groups: if self.only.is_empty() {
                AssetGroup::ALL.to_vec()
            } else {
                dedup_groups(self.only)
            },
            remote: RemoteConfig {
                api_key: self.api_key,
                endpoint: self.api_endpoint,
                model: self.model,
                timeout_secs: self.timeout,
                offline: self.offline,
            },
        }
    }
}

/// Drop repeated groups, keeping the first occurrence.
fn dedup_groups(groups: Vec<AssetGroup>) -> Vec<AssetGroup> {
    let mut unique = Vec::with_capacity(groups.len());
    for group in groups {
        if !unique.contains(&group) {
            unique.push(group);
        }
    }
    unique
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Args::parse().into_config();
    println!("🎨 Generating PNG assets into {}", config.output.display());

    let summary = generate_assets(&config)?;
    if summary.failures > 0 {
        anyhow::bail!("{} asset(s) could not be generated", summary.failures);
    }

    Ok(())
}
