use ab_glyph::{Font, FontVec, PxScale};
use anyhow::{Context, Result, anyhow};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::fonts::MAX_SEARCH_DEPTH;

/// Where the glyphs of a rendered icon came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    Builtin,
}

pub enum IconFont {
    Scalable {
        font: FontVec,
        scale: PxScale,
        path: PathBuf,
    },
    /// Fixed 5x7 bitmap font, see `builtin_font`
    Builtin,
}

impl IconFont {
    pub fn source(&self) -> FontSource {
        match self {
            IconFont::Scalable { path, .. } => FontSource::File(path.clone()),
            IconFont::Builtin => FontSource::Builtin,
        }
    }
}

/// Pick the first candidate that loads at `px_size`, or the built-in font.
/// Load failures are not reported; the next candidate is simply tried.
pub fn select_font<S: AsRef<str>>(candidates: &[S], px_size: u32) -> IconFont {
    if px_size == 0 {
        return IconFont::Builtin;
    }

    candidates
        .iter()
        .find_map(|name| load_scalable(name.as_ref(), px_size).ok())
        .unwrap_or(IconFont::Builtin)
}

pub fn load_scalable(name: &str, px_size: u32) -> Result<IconFont> {
    let path = resolve_font_path(name)
        .with_context(|| format!("Font not found: {}", name))?;

    let data = fs::read(&path)
        .with_context(|| format!("Failed to read font {}", path.display()))?;

    // Collections (.ttc) use their first face
    let font = FontVec::try_from_vec_and_index(data, 0)
        .map_err(|e| anyhow!("Failed to parse font {}: {e}", path.display()))?;

    let scale = em_scale(&font, px_size as f32);

    Ok(IconFont::Scalable { font, scale, path })
}

/// `PxScale` whose em square is `em_px` pixels tall.
/// PxScale measures ascent-to-descent height, which is usually larger than the em.
pub fn em_scale(font: &impl Font, em_px: f32) -> PxScale {
    match font.units_per_em() {
        Some(upem) if upem > 0.0 => PxScale::from(em_px * font.height_unscaled() / upem),
        _ => PxScale::from(em_px),
    }
}

/// Find a font file by path, or by file name in the user and system font directories.
pub fn resolve_font_path(name: &str) -> Option<PathBuf> {
    let direct = PathBuf::from(name);
    if direct.is_file() {
        return Some(direct);
    }
    if direct.is_absolute() {
        return None;
    }

    let file_name = direct.file_name()?;
    font_search_dirs()
        .iter()
        .find_map(|dir| find_in_dir(dir, file_name, MAX_SEARCH_DEPTH))
}

fn font_search_dirs() -> Vec<PathBuf> {
    let mut search = Vec::new();

    if let Some(user_fonts) = dirs::font_dir() {
        search.push(user_fonts);
    }
    if let Some(windir) = std::env::var_os("WINDIR") {
        search.push(PathBuf::from(windir).join("Fonts"));
    }
    for system in ["/usr/share/fonts", "/usr/local/share/fonts", "/Library/Fonts", "/System/Library/Fonts"] {
        search.push(PathBuf::from(system));
    }

    search
}

fn find_in_dir(dir: &Path, file_name: &OsStr, depth: usize) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    let wanted = file_name.to_string_lossy();

    let mut subdirs = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        } else if path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().eq_ignore_ascii_case(&wanted))
        {
            return Some(path);
        }
    }

    if depth == 0 {
        return None;
    }

    subdirs.sort();
    subdirs
        .iter()
        .find_map(|sub| find_in_dir(sub, file_name, depth - 1))
}
