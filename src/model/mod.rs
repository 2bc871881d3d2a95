//! Rocket component model.
//!
//! Components live in a [`ComponentTree`] arena and are addressed by
//! [`ComponentId`] handles, so import handlers can hold on to the nodes they
//! created without borrowing the tree between events.
//!
//! ```text
//! ComponentTree
//! └── Rocket
//!     └── Stage
//!         ├── BodyTube
//!         │   └── PodSet            (fin can)
//!         │       ├── Transition    (shoulder)
//!         │       └── BodyTube      (fin can tube)
//!         └── BodyTube
//! ```

mod color;
mod component;
mod tree;

pub use color::Color;
pub use component::{
    AxialMethod, BodyTube, Component, ComponentKind, PodSet, RadiusMethod, Transition,
    TransitionShape,
};
pub use tree::{ComponentId, ComponentTree};
