//! Error types for import operations.

use smol_str::SmolStr;
use thiserror::Error;

use crate::model::ComponentId;

/// Errors that abort an import, or a branch of one.
#[derive(Debug, Error)]
pub enum ImportError {
    /// XML parsing error reported by the event source.
    #[error("XML error: {0}")]
    Xml(String),

    /// The tree did not have the shape a component requires.
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    /// A tree operation was rejected.
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// Invalid import options.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO error while reading a design.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not a RASAero design.
    #[error("Unsupported document: {0}")]
    Unsupported(String),
}

impl ImportError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create an unsupported document error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }
}

/// Tree-shape contract violations detected before a fin can is attached.
///
/// Variants are listed in the order they are checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    /// No parent component was supplied.
    #[error("The parent component of a fin can may not be absent")]
    MissingParent,

    /// The parent has no children, so there is no tube to slide over.
    #[error("There is no component to attach the fin can to")]
    NoAnchorComponent,

    /// The anchor component is not a body tube.
    #[error("A fin can must be attached to a body tube, found {found}")]
    AnchorNotBodyTube { found: &'static str },
}

/// Rejected [`ComponentTree`](crate::model::ComponentTree) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The handle does not name a live component.
    #[error("Unknown component: {0}")]
    UnknownComponent(ComponentId),

    /// The parent kind cannot hold the child kind.
    #[error("{parent} cannot contain {child}")]
    IncompatibleChild {
        parent: &'static str,
        child: &'static str,
    },

    /// The child already has a parent.
    #[error("Component {0} is already attached")]
    AlreadyAttached(ComponentId),

    /// The child is the parent itself or one of its ancestors.
    #[error("Attaching {0} would create a cycle")]
    WouldCycle(ComponentId),

    /// The insertion index is past the end of the child list.
    #[error("Child index {index} out of range for {len} children")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Invalid or unreadable [`ImportOptions`](crate::config::ImportOptions).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The length factor must be finite and positive.
    #[error("Invalid length factor: {0}")]
    InvalidLengthFactor(f64),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The options file extension selects no parser.
    #[error("Unsupported options file: {0}")]
    UnsupportedFile(SmolStr),

    /// IO error while reading an options file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
