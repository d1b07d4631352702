use anyhow::{Context, Result};
use image::io::Reader as ImageReader;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Re-open every generated PNG/ICO under a directory and print its color
/// type and size.
fn main() -> Result<()> {
    let root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(asset_gen::config::DEFAULT_OUTPUT_DIR));

    let files = collect_images(&root).with_context(|| format!("Can't read {}", root.display()))?;

    println!("Checking {} image(s) in {}", files.len(), root.display());

    let mut errors = 0;
    for path in &files {
        match ImageReader::open(path)
            .map_err(anyhow::Error::from)
            .and_then(|reader| Ok(reader.with_guessed_format()?.decode()?))
        {
            Ok(img) => println!(
                "{}: {:?} ({}, {})",
                path.display(),
                img.color(),
                img.width(),
                img.height()
            ),
            Err(err) => {
                errors += 1;
                println!("{}: ERROR - {err}", path.display());
            }
        }
    }

    if errors > 0 {
        anyhow::bail!("{errors} image(s) could not be decoded");
    }

    println!("✓ All images decoded");
    Ok(())
}

/// Generated images below `root`, sorted. Symlinks are not followed.
fn collect_images(root: &Path) -> walkdir::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && is_image(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_image(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("png") | Some("ico")
    )
}
