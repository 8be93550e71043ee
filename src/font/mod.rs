mod builtin;
mod face;
mod resolver;
mod scalable;

pub use builtin::BuiltinFace;
pub use face::{FaceSource, GlyphMask, TextFace, TextMetrics};
pub use resolver::{bundled_font_path, default_candidates, FontResolver, FontSource};
pub use scalable::{FontHandle, ScalableFace};

use crate::error::Result;

/// The font chosen for one render call.
#[derive(Debug)]
pub enum LoadedFont {
    File(FontHandle),
    Builtin(BuiltinFace),
}

impl LoadedFont {
    pub fn load(source: &FontSource) -> Result<Self> {
        match source {
            FontSource::File(path) => {
                let handle = FontHandle::load(path)?;
                log::info!("Using font {}", handle.path().display());
                Ok(Self::File(handle))
            }
            FontSource::Builtin => Ok(Self::Builtin(BuiltinFace)),
        }
    }
}

impl FaceSource for LoadedFont {
    fn is_scalable(&self) -> bool {
        match self {
            Self::File(handle) => handle.is_scalable(),
            Self::Builtin(face) => face.is_scalable(),
        }
    }

    fn face_at(&self, size_px: u32) -> Box<dyn TextFace + '_> {
        match self {
            Self::File(handle) => handle.face_at(size_px),
            Self::Builtin(face) => face.face_at(size_px),
        }
    }
}
