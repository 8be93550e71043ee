//! Font discovery over an ordered list of candidate files.
//!
//! The bundled project font comes first because it is known to cover Thai.
//! System fonts follow as a best effort. When nothing on the list exists the
//! resolver hands back [`FontSource::Builtin`], which renders Latin text with
//! a fixed-size bitmap font and draws boxes for anything else.

use std::path::{Path, PathBuf};

const BUNDLED_FONT: &str = "fonts/PSLxOmyim-Bold.ttf";

#[cfg(target_os = "macos")]
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/System/Library/AssetsV2/com_apple_MobileAsset_Font8/07da2743cea0a1354e81aa4a33c736f3a8066a79.asset/AssetData/K2D.ttc",
    "/System/Library/AssetsV2/com_apple_MobileAsset_Font8/cf0dc8d3b09f9ba379660e591e82566e2b557949.asset/AssetData/Sarabun.ttc",
    "/System/Library/Fonts/Supplemental/SukhumvitSet.ttc",
];

#[cfg(target_os = "windows")]
const SYSTEM_FONT_PATHS: &[&str] = &[
    "C:\\Windows\\Fonts\\LeelaUIb.ttf",
    "C:\\Windows\\Fonts\\tahomabd.ttf",
];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/thai/Sarabun-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSansThai-Bold.ttf",
    // Latin only, keeps the width guarantee on hosts without Thai fonts.
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
];

/// Where the glyphs for a render come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A scalable font file found on disk.
    File(PathBuf),
    /// No candidate exists; use the builtin fixed-size bitmap font.
    Builtin,
}

impl FontSource {
    pub fn is_builtin(&self) -> bool {
        matches!(self, FontSource::Builtin)
    }
}

/// Ordered, immutable list of font files to try.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontResolver {
    candidates: Vec<PathBuf>,
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new(default_candidates())
    }
}

impl FontResolver {
    pub fn new<I, P>(candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// A resolver that always yields the builtin font.
    pub fn builtin_only() -> Self {
        Self {
            candidates: Vec::new(),
        }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Returns the first candidate that exists on disk.
    ///
    /// Never fails: an empty match is the [`FontSource::Builtin`] outcome.
    pub fn resolve(&self) -> FontSource {
        match self.candidates.iter().find(|path| path.is_file()) {
            Some(path) => {
                log::debug!("Resolved font {}", path.display());
                FontSource::File(path.clone())
            }
            None => {
                log::warn!(
                    "No scalable font found among {} candidates; using builtin bitmap font",
                    self.candidates.len()
                );
                FontSource::Builtin
            }
        }
    }
}

/// The platform candidate list, bundled font first.
pub fn default_candidates() -> Vec<PathBuf> {
    std::iter::once(bundled_font_path())
        .chain(SYSTEM_FONT_PATHS.iter().map(PathBuf::from))
        .collect()
}

pub fn bundled_font_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(BUNDLED_FONT)
}
