use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::render::text::TextFace;

/// Optional scalable font files per text weight.
///
/// Unset or unusable entries fall through to well-known system fonts, then to the built-in
/// bitmap font.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Font file for slide titles.
    pub title: Option<PathBuf>,
    /// Font file for slide bodies.
    pub body: Option<PathBuf>,
}

/// The two text weights a slide uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weight {
    /// Large bold title text.
    Title,
    /// Smaller regular body text.
    Body,
}

impl Weight {
    fn system_candidates(self) -> &'static [&'static str] {
        match self {
            Weight::Title => &[
                "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
                "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
                "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
                "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans-Bold.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
                "/Library/Fonts/Arial Bold.ttf",
                "C:\\Windows\\Fonts\\arialbd.ttf",
            ],
            Weight::Body => &[
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/TTF/DejaVuSans.ttf",
                "/usr/share/fonts/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
                "/Library/Fonts/Arial.ttf",
                "C:\\Windows\\Fonts\\arial.ttf",
            ],
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Weight::Title => "title",
            Weight::Body => "body",
        })
    }
}

/// Outcome of font resolution for one weight.
#[derive(Clone, Debug)]
pub enum FontChoice {
    /// A scalable font file that parsed successfully.
    Scalable {
        /// File the bytes were read from.
        source: PathBuf,
        /// Registered family name.
        family: String,
        /// Raw font file bytes.
        bytes: Arc<Vec<u8>>,
    },
    /// The built-in 8x8 bitmap font.
    Bitmap,
}

impl FontChoice {
    /// `true` for the built-in bitmap fallback.
    pub fn is_bitmap(&self) -> bool {
        matches!(self, FontChoice::Bitmap)
    }
}

/// Resolved fonts for both weights.
#[derive(Clone, Debug)]
pub struct ResolvedFonts {
    /// Title font.
    pub title: FontChoice,
    /// Body font.
    pub body: FontChoice,
}

impl ResolvedFonts {
    /// Resolve both weights. Never fails; unusable fonts degrade to the bitmap font.
    pub fn resolve(cfg: &FontConfig) -> Self {
        Self {
            title: resolve_weight(Weight::Title, cfg.title.as_deref()),
            body: resolve_weight(Weight::Body, cfg.body.as_deref()),
        }
    }

    /// Use the bitmap font for both weights.
    pub fn bitmap_only() -> Self {
        Self {
            title: FontChoice::Bitmap,
            body: FontChoice::Bitmap,
        }
    }

    /// Choice for a weight.
    pub fn get(&self, weight: Weight) -> &FontChoice {
        match weight {
            Weight::Title => &self.title,
            Weight::Body => &self.body,
        }
    }
}

fn resolve_weight(weight: Weight, configured: Option<&Path>) -> FontChoice {
    let configured = configured.map(Path::to_path_buf);
    let system = weight.system_candidates().iter().map(PathBuf::from);

    for path in configured.iter().cloned().chain(system) {
        let explicit = configured.as_ref() == Some(&path);
        match load_scalable(&path) {
            Ok(choice) => {
                tracing::debug!(%weight, path = %path.display(), "resolved scalable font");
                return choice;
            }
            Err(reason) if explicit => {
                tracing::warn!(%weight, path = %path.display(), %reason, "configured font unusable");
            }
            Err(_) => {}
        }
    }

    tracing::warn!(%weight, "no scalable font found; using built-in bitmap font");
    FontChoice::Bitmap
}

fn load_scalable(path: &Path) -> Result<FontChoice, String> {
    let bytes = std::fs::read(path).map_err(|e| e.to_string())?;
    let face = TextFace::from_bytes(&bytes).map_err(|e| e.to_string())?;
    Ok(FontChoice::Scalable {
        source: path.to_path_buf(),
        family: face.family().to_string(),
        bytes: Arc::new(bytes),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/font.rs"]
mod tests;
