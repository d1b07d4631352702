use crate::palette;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const PROMPT_FILE_NAME: &str = "DRAGON_ICON_PROMPT.txt";

/// Text prompt describing the dragon-bird avatar icon.
pub const DRAGON_PROMPT: &str = "
Create a mystical, futuristic avatar icon of a sleek bird-dragon hybrid creature.

Style requirements:
- Minimalist, modern, geometric design suitable for an app icon
- Avatar/profile style composition (head/upper body focus)
- Sharp, clean lines with a tech-aesthetic
- Glowing elements suggesting AI/digital nature

Colors (STRICTLY USE THESE):
- Primary: Vibrant purple (#8b5cf6)
- Secondary: Electric blue (#3b82f6)
- Accents: Dark purple/navy gradients
- Subtle glow effects in purple and blue
- Dark background (#0d1117 to #161b22)

Creature design:
- Dragon-like head with intelligent, piercing eyes
- Sleek bird-like features (streamlined beak/snout, elegant neck)
- Ethereal, mystical aura
- Tech-enhanced elements (circuit patterns, energy glow)
- Majestic, wise, powerful presence
- Forward-facing, centered composition

Art style:
- Digital art, vector-like quality
- Cyberpunk/sci-fi fantasy fusion
- Icon-friendly (clear at small sizes)
- Professional, polished finish
- Gradient overlays for depth

The icon should represent an AI assistant - intelligent, mystical, powerful, and futuristic.
Perfect for a 512x512 or 1024x1024 app icon.
";

const GENERATORS: [&str; 4] = [
    "DALL-E 3 (ChatGPT Plus)",
    "Midjourney",
    "Stable Diffusion",
    "Adobe Firefly",
];

/// The prompt framed for manual use with an image generator.
pub fn render_prompt_document() -> String {
    let rule = "=".repeat(80);
    let mut doc = String::new();

    doc.push_str(&format!("{rule}\n"));
    doc.push_str("DRAGON-BIRD AVATAR ICON GENERATION PROMPT\n");
    doc.push_str(&format!("{rule}\n\n"));
    doc.push_str("USE THIS PROMPT WITH:\n");
    for generator in GENERATORS {
        doc.push_str(&format!("- {generator}\n"));
    }
    doc.push_str(&format!("\n{rule}\n\n"));
    doc.push_str(DRAGON_PROMPT);
    doc.push_str(&format!("\n\n{rule}\n"));
    doc.push_str("COLOR CODES:\n");
    for (name, color) in palette::dragon::NAMED {
        doc.push_str(&format!("  {name}: {}\n", color.to_hex()));
    }
    doc.push_str(&format!("{rule}\n"));

    doc
}

/// Write the prompt document into `dir` and return its path.
pub fn write_prompt_file(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(PROMPT_FILE_NAME);
    std::fs::write(&path, render_prompt_document())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
