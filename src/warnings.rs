//! Non-fatal import diagnostics.
//!
//! Handlers never abort an import over a bad field value. They record a
//! [`Warning`] in the [`WarningSet`] threaded through every call and carry
//! on with the previous value.

use indexmap::IndexSet;
use smol_str::SmolStr;

/// A single import diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Warning {
    /// A numeric field could not be parsed.
    InvalidNumber { element: SmolStr, content: String },
    /// A color name is not one RASAero uses.
    UnknownColor { content: String },
    /// An element no handler recognizes; its subtree was skipped.
    UnknownElement { element: SmolStr },
    /// A recognized element this importer does not build.
    Unsupported { element: SmolStr },
    /// A fin can measurement never appeared; zero was used.
    MissingMeasurement { element: SmolStr },
    /// A component failed its structural preconditions and was left out.
    ComponentDropped { element: SmolStr, reason: String },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { element, content } => write!(
                f,
                "Could not convert {element} value of {content}. It is expected to be a number."
            ),
            Self::UnknownColor { content } => write!(f, "Unknown color '{content}', ignoring."),
            Self::UnknownElement { element } => write!(f, "Unknown element '{element}', ignoring."),
            Self::Unsupported { element } => {
                write!(f, "Importing '{element}' is not supported, ignoring.")
            }
            Self::MissingMeasurement { element } => {
                write!(f, "Fin can has no {element}, assuming 0.")
            }
            Self::ComponentDropped { element, reason } => {
                write!(f, "Dropped {element}: {reason}")
            }
        }
    }
}

/// Ordered set of warnings; adding a duplicate is a no-op.
#[derive(Debug, Clone, Default)]
pub struct WarningSet {
    warnings: IndexSet<Warning>,
}

impl WarningSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning. Returns `false` if it was already present.
    pub fn add(&mut self, warning: Warning) -> bool {
        tracing::debug!(%warning, "import warning");
        self.warnings.insert(warning)
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn contains(&self, warning: &Warning) -> bool {
        self.warnings.contains(warning)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Warning> {
        self.warnings.iter()
    }
}

impl<'a> IntoIterator for &'a WarningSet {
    type Item = &'a Warning;
    type IntoIter = indexmap::set::Iter<'a, Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.warnings.iter()
    }
}
