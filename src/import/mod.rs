//! Element handlers that turn RASAero element events into components.
//!
//! A document is read as a stack of [`ElementHandler`]s. Each handler owns
//! the component it is building and decides, per child element, whether the
//! element is a text field it consumes, a nested component with its own
//! handler, or something to skip.
//!
//! ```text
//! RASAeroDocument   DocumentHandler
//! └── RocketDesign  RocketDesignHandler   → Rocket + Stage
//!     ├── BodyTube  BodyTubeBuilder        → BodyTube
//!     └── FinCan    FinCanBuilder          → PodSet [Transition, BodyTube]
//! ```

mod body_tube;
mod design;
mod fin_can;
mod handler;

pub use body_tube::BodyTubeBuilder;
pub use design::{DocumentHandler, RocketDesignHandler, RootHandler};
pub use fin_can::{FinCanBuilder, FinCanParts};
pub use handler::{ElementAction, ElementHandler, LoadingContext};

use crate::base::parse_length;
use crate::warnings::{Warning, WarningSet};

/// Parse a length field, recording a warning when the text is not a number.
fn read_length(
    element: &str,
    content: &str,
    factor: f64,
    warnings: &mut WarningSet,
) -> Option<f64> {
    let value = parse_length(content, factor);
    if value.is_none() {
        warnings.add(Warning::InvalidNumber {
            element: element.into(),
            content: content.to_string(),
        });
    }
    value
}
