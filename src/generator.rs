use anyhow::{Context, Result, bail};
use image::ImageFormat;
use std::fs;
use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::fonts::{self, FontSource};
use crate::icon_plan::{self, IconSpec};
use crate::builtin_font;
use crate::render;

/// Result of rendering one icon to disk
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedIcon {
    pub path: PathBuf,
    pub size: u32,
    pub label: String,
    pub font_source: FontSource,
}

/// Render a single icon and write it as PNG, replacing any existing file.
/// The output directory must already exist.
pub fn create_icon(spec: &IconSpec, config: &GeneratorConfig) -> Result<GeneratedIcon> {
    if spec.size == 0 {
        bail!("icon size must be greater than 0 ({})", spec.filename);
    }

    let font = fonts::select_font(config.fonts.as_slice(), config.font_px(spec.size));
    let img = render::render_icon(spec.size, &spec.label, &font, config.background, config.foreground);

    let path = config.output_dir.join(&spec.filename);
    img.save_with_format(&path, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("✓ Generated icon: {} ({}x{})", spec.filename, spec.size, spec.size);

    Ok(GeneratedIcon {
        path,
        size: spec.size,
        label: spec.label.clone(),
        font_source: font.source(),
    })
}

/// Create the output directory, then every app icon and shortcut icon in order.
/// The first failure aborts the batch.
pub fn generate_all(config: &GeneratorConfig) -> Result<Vec<GeneratedIcon>> {
    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("Failed to create output directory {}", config.output_dir.display()))?;

    let mut generated = Vec::new();

    println!("App icons:");
    generate_batch(&icon_plan::app_icons(), config, &mut generated)?;

    println!();
    println!("Shortcut icons:");
    generate_batch(&icon_plan::shortcut_icons(), config, &mut generated)?;

    if let Some(warning) = fallback_warning(&generated) {
        eprintln!("⚠️  {}", warning);
    }

    Ok(generated)
}

/// Warning text when any icon was drawn with the built-in bitmap font
pub fn fallback_warning(icons: &[GeneratedIcon]) -> Option<String> {
    let fallback: Vec<&GeneratedIcon> = icons
        .iter()
        .filter(|icon| icon.font_source == FontSource::Builtin)
        .collect();
    if fallback.is_empty() {
        return None;
    }

    let mut boxed: Vec<&str> = fallback
        .iter()
        .filter(|icon| !builtin_font::covers(&icon.label))
        .map(|icon| icon.label.as_str())
        .collect();
    boxed.dedup();

    let mut warning = format!(
        "No scalable font could be loaded; {} icon(s) use the built-in bitmap font",
        fallback.len()
    );
    if !boxed.is_empty() {
        warning.push_str(&format!(
            " (labels drawn as boxes: {})",
            boxed.join(", ")
        ));
    }
    Some(warning)
}

fn generate_batch(
    specs: &[IconSpec],
    config: &GeneratorConfig,
    generated: &mut Vec<GeneratedIcon>,
) -> Result<()> {
    for spec in specs {
        let icon = create_icon(spec, config)
            .with_context(|| format!("Failed to generate {}", spec.filename))?;
        generated.push(icon);
    }
    Ok(())
}
