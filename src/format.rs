//! Design file formats.

use std::path::Path;

use crate::base::tags;
use crate::config::ImportOptions;
use crate::error::ImportError;
use crate::model::{ComponentId, ComponentKind, ComponentTree};
use crate::warnings::WarningSet;

/// Result of reading a design: the component tree plus every non-fatal
/// problem found along the way.
#[derive(Debug, Default)]
pub struct ImportedDesign {
    pub tree: ComponentTree,
    pub warnings: WarningSet,
}

impl ImportedDesign {
    /// The first rocket root in the tree.
    pub fn rocket(&self) -> Option<ComponentId> {
        self.tree
            .roots()
            .find(|&id| matches!(self.tree.kind(id), Some(ComponentKind::Rocket)))
    }
}

/// A file format designs can be imported from.
pub trait DesignFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format, without the dot.
    fn extensions(&self) -> &'static [&'static str];

    /// Read a design from bytes.
    fn read(&self, input: &[u8], options: &ImportOptions) -> Result<ImportedDesign, ImportError>;

    /// Quick check that the input looks like this format, without reading it.
    fn validate(&self, input: &[u8]) -> Result<(), ImportError> {
        let _ = input;
        Ok(())
    }
}

/// RASAero II design files (`.CDX1`).
#[derive(Debug, Clone, Copy, Default)]
pub struct RasAero;

impl DesignFormat for RasAero {
    fn name(&self) -> &'static str {
        "RASAero"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["CDX1"]
    }

    #[cfg(feature = "xml")]
    fn read(&self, input: &[u8], options: &ImportOptions) -> Result<ImportedDesign, ImportError> {
        crate::xml::read_design(input, options)
    }

    #[cfg(not(feature = "xml"))]
    fn read(&self, _input: &[u8], _options: &ImportOptions) -> Result<ImportedDesign, ImportError> {
        Err(ImportError::unsupported(
            "RASAero import requires the 'xml' feature",
        ))
    }

    fn validate(&self, input: &[u8]) -> Result<(), ImportError> {
        let marker = tags::RASAERO_DOCUMENT.as_bytes();
        if input.windows(marker.len()).any(|w| w == marker) {
            Ok(())
        } else {
            Err(ImportError::unsupported(format!(
                "missing <{}> element",
                tags::RASAERO_DOCUMENT
            )))
        }
    }
}

/// Supported file extensions.
pub fn supported_extensions() -> &'static [&'static str] {
    RasAero.extensions()
}

/// Detect format from file extension (case-insensitive).
pub fn detect_format(path: &Path) -> Option<Box<dyn DesignFormat>> {
    let ext = path.extension()?.to_str()?;
    if supported_extensions()
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ext))
    {
        Some(Box::new(RasAero))
    } else {
        None
    }
}

/// Read a design file, picking the format from its extension.
pub fn read_design_file(path: &Path, options: &ImportOptions) -> Result<ImportedDesign, ImportError> {
    let format = detect_format(path).ok_or_else(|| {
        ImportError::unsupported(format!("unrecognized design file: {}", path.display()))
    })?;
    let input = std::fs::read(path)?;
    format.validate(&input)?;
    tracing::info!(path = %path.display(), format = format.name(), "reading design");
    format.read(&input, options)
}
