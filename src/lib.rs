//! # rasaero-import
//!
//! Streaming import of RASAero rocket designs into a hierarchical component
//! tree, centred on fin cans: a pod set hung off the aft end of a body tube,
//! holding a sliding tube and a conical shoulder synthesized once all of the
//! fin can's measurements are known.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! format    → DesignFormat trait, format detection
//!   ↓
//! xml       → quick-xml event reader driving the handler stack
//!   ↓
//! import    → ElementHandler trait, body tube / fin can / design handlers
//!   ↓
//! model     → ComponentTree arena, component kinds, colors
//!   ↓
//! config    → ImportOptions (JSON / YAML)
//!   ↓
//! base      → Element tags, unit conversion, warnings, errors
//! ```

// ============================================================================
// MODULES (dependency order: base → config → model → import → xml → format)
// ============================================================================

/// Foundation types: element tags, length conversion
pub mod base;

/// Import errors
pub mod error;

/// Non-fatal import diagnostics
pub mod warnings;

/// Import options: unit factor, diagnostics toggles
pub mod config;

/// Rocket component model: arena tree and component kinds
pub mod model;

/// Element handlers: body tubes, fin cans, rocket designs
pub mod import;

/// Streaming RASAero XML reader
#[cfg(feature = "xml")]
pub mod xml;

/// Design file formats
pub mod format;

pub use config::ImportOptions;
pub use error::{ConfigError, ImportError, PreconditionError, TreeError};
pub use format::{DesignFormat, ImportedDesign, RasAero, detect_format, read_design_file};
pub use import::{BodyTubeBuilder, FinCanBuilder, FinCanParts, LoadingContext};
pub use model::{
    AxialMethod, BodyTube, Color, Component, ComponentId, ComponentKind, ComponentTree, PodSet,
    RadiusMethod, Transition, TransitionShape,
};
pub use warnings::{Warning, WarningSet};
#[cfg(feature = "xml")]
pub use xml::read_design;
