use crate::assets::{Asset, AssetGroup, Category, DRAGON_SIZES};
use crate::config::Config;
use crate::prompt;
use crate::provider::{select_provider, ImageProvider};
use crate::report::{ConsoleReporter, Summary};
use anyhow::{Context, Result};
use image::{
    codecs::{
        ico::{IcoEncoder, IcoFrame},
        png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    },
    imageops::{self, FilterType},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::Path,
};
use tracing::{debug, error, info};

/// Sizes packed into the `.ico` bundle icon.
const ICO_SIZES: [u32; 6] = [16, 24, 32, 48, 64, 256];

/// Size of the dragon icon copied next to the bundle icons.
const BUNDLE_DRAGON_SIZE: u32 = 512;

/// Generate every configured asset, printing progress to stdout.
///
/// The image provider is chosen here, once, from `config.remote`.
pub fn generate_assets(config: &Config) -> Result<Summary> {
    let provider = select_provider(&config.remote);
    let mut reporter = ConsoleReporter::stdout();
    generate_assets_with(config, &*provider, &mut reporter)
}

/// Generate every configured asset through `provider`.
///
/// A failing asset is reported and skipped; only failing to create the
/// output directories aborts the run.
pub fn generate_assets_with<W: Write>(
    config: &Config,
    provider: &dyn ImageProvider,
    reporter: &mut ConsoleReporter<W>,
) -> Result<Summary> {
    prepare_output_dirs(config)?;
    info!(
        provider = provider.name(),
        output = %config.output.display(),
        "generating assets"
    );

    let mut dragon = None;

    for group in &config.groups {
        reporter.section(group.heading())?;

        for asset in group.assets(&config.icon_sizes) {
            let result = match asset {
                Asset::DragonIcon => {
                    generate_dragon_icons(config, provider, reporter).map(|image| {
                        dragon = Some(image);
                    })
                }
                _ => generate_asset(&asset, config, provider, reporter),
            };

            if let Err(err) = result {
                error!(asset = %asset.file_name(), "asset generation failed: {err:#}");
                reporter.failed(&asset.file_name(), &err)?;
            }
        }

        if *group == AssetGroup::Dragon {
            match prompt::write_prompt_file(&config.output) {
                Ok(path) => reporter.note(&format!("📋 Prompt saved to {}", path.display()))?,
                Err(err) => reporter.failed(prompt::PROMPT_FILE_NAME, &err)?,
            }
        }
    }

    if let Some(bundle_dir) = &config.tauri_icons {
        reporter.section("🧩 Generating desktop bundle icons...")?;

        if let Err(err) = generate_bundle_icons(bundle_dir, provider, reporter) {
            error!("bundle icon generation failed: {err:#}");
            reporter.failed(&Asset::ShellIcon.file_name(), &err)?;
        }

        let name = Asset::DragonIcon.file_name();
        if let Err(err) = generate_bundle_dragon(bundle_dir, dragon, provider, reporter) {
            error!("bundle dragon icon failed: {err:#}");
            reporter.failed(&name, &err)?;
        }
    }

    Ok(reporter.finish()?)
}

fn prepare_output_dirs(config: &Config) -> Result<()> {
    for category in Category::ALL {
        create_dir_all(config.output.join(category.dir_name()))
            .context("Can't create output directory")?;
    }

    if let Some(bundle_dir) = &config.tauri_icons {
        create_dir_all(bundle_dir).context("Can't create bundle icon directory")?;
    }

    Ok(())
}

fn generate_asset<W: Write>(
    asset: &Asset,
    config: &Config,
    provider: &dyn ImageProvider,
    reporter: &mut ConsoleReporter<W>,
) -> Result<()> {
    let category = asset
        .category()
        .with_context(|| format!("{} has no output directory", asset.file_name()))?;

    let image = provider
        .render(asset)
        .with_context(|| format!("Failed to render {}", asset.file_name()))?;

    let file_name = asset.file_name();
    let path = config.output.join(category.dir_name()).join(&file_name);
    let bytes = save_png(&image, &path)?;
    reporter.file_written(&file_name, bytes)?;
    Ok(())
}

/// Render the dragon icon once and write every exported size.
fn generate_dragon_icons<W: Write>(
    config: &Config,
    provider: &dyn ImageProvider,
    reporter: &mut ConsoleReporter<W>,
) -> Result<RgbaImage> {
    let source = provider
        .render(&Asset::DragonIcon)
        .context("Failed to render dragon icon")?;
    let out_dir = config.output.join(Category::AppIcons.dir_name());

    for size in DRAGON_SIZES {
        let file_name = format!("dragon-icon-{size}.png");
        let bytes = save_png(&resize_square(&source, size), &out_dir.join(&file_name))?;
        reporter.file_written(&file_name, bytes)?;
    }

    Ok(source)
}

fn generate_bundle_icons<W: Write>(
    out_dir: &Path,
    provider: &dyn ImageProvider,
    reporter: &mut ConsoleReporter<W>,
) -> Result<()> {
    let icon = provider
        .render(&Asset::ShellIcon)
        .context("Failed to render bundle icon")?;

    let bytes = save_png(&icon, &out_dir.join("icon.png"))?;
    reporter.file_written("icon.png", bytes)?;

    let bytes = generate_ico(&icon, out_dir)?;
    reporter.file_written("icon.ico", bytes)?;
    Ok(())
}

fn generate_bundle_dragon<W: Write>(
    out_dir: &Path,
    rendered: Option<RgbaImage>,
    provider: &dyn ImageProvider,
    reporter: &mut ConsoleReporter<W>,
) -> Result<()> {
    let source = match rendered {
        Some(image) => image,
        None => provider
            .render(&Asset::DragonIcon)
            .context("Failed to render dragon icon")?,
    };

    let file_name = Asset::DragonIcon.file_name();
    let bytes = save_png(
        &resize_square(&source, BUNDLE_DRAGON_SIZE),
        &out_dir.join(&file_name),
    )?;
    reporter.file_written(&file_name, bytes)?;
    Ok(())
}

fn resize_square(source: &RgbaImage, size: u32) -> RgbaImage {
    if source.dimensions() == (size, size) {
        return source.clone();
    }
    imageops::resize(source, size, size, FilterType::Lanczos3)
}

/// Encode `source` at every [`ICO_SIZES`] entry into `icon.ico`.
fn generate_ico(source: &RgbaImage, out_dir: &Path) -> Result<u64> {
    let mut frames = Vec::new();

    for size in ICO_SIZES {
        let resized = resize_square(source, size);

        // Only the 256px layer can be compressed according to the ico specs
        if size == 256 {
            let mut buf = Vec::new();
            write_png(resized.as_raw(), &mut buf, size, size)?;
            frames.push(IcoFrame::with_encoded(buf, size, size, ColorType::Rgba8)?);
        } else {
            frames.push(IcoFrame::as_png(
                resized.as_raw(),
                size,
                size,
                ColorType::Rgba8,
            )?);
        }
    }

    let path = out_dir.join("icon.ico");
    let mut out_file = BufWriter::new(File::create(&path).context("Failed to create ICO file")?);
    let encoder = IcoEncoder::new(&mut out_file);
    encoder.encode_images(&frames)?;
    out_file.flush()?;
    drop(out_file);

    file_size(&path)
}

/// Write `image` as a PNG and return the size of the file.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<u64> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_png(image.as_raw(), &mut writer, image.width(), image.height())
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    writer.flush()?;
    drop(writer);

    debug!(path = %path.display(), "wrote png");
    file_size(path)
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, width: u32, height: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, width, height, ColorType::Rgba8)?;
    Ok(())
}

fn file_size(path: &Path) -> Result<u64> {
    Ok(std::fs::metadata(path)
        .with_context(|| format!("Can't read size of {}", path.display()))?
        .len())
}
