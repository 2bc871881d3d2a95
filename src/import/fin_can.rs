//! Fin cans.
//!
//! A RASAero fin can is a finned tube that slides over the aft end of
//! another body tube. Its fore end is closed off by a shoulder running from
//! the inside diameter of the fin can (the outside of the tube it slides
//! over) out to the fin can tube's own outer radius.
//!
//! The fin can is modelled as a single-instance pod set on the host tube:
//!
//! ```text
//! BodyTube (anchor)
//! └── PodSet "Fin Can"            axial: Bottom, radius: Free 0
//!     ├── Transition "Fin Can Shoulder"
//!     └── BodyTube "Fin Can Tube"
//! ```
//!
//! The shoulder depends on the tube's final radius, thickness and color, so
//! it is only built when the fin can element closes.

use smol_str::SmolStr;

use super::body_tube::BodyTubeBuilder;
use super::handler::{ElementAction, ElementHandler, LoadingContext};
use super::read_length;
use crate::base::tags;
use crate::config::ImportOptions;
use crate::error::{ImportError, PreconditionError, TreeError};
use crate::model::{
    AxialMethod, BodyTube, Component, ComponentId, ComponentKind, ComponentTree, PodSet,
    RadiusMethod, Transition, TransitionShape,
};
use crate::warnings::{Warning, WarningSet};

pub const FIN_CAN_NAME: &str = "Fin Can";
pub const FIN_CAN_TUBE_NAME: &str = "Fin Can Tube";
pub const FIN_CAN_SHOULDER_NAME: &str = "Fin Can Shoulder";

/// Handles of the components making up a finished fin can.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinCanParts {
    pub pod_set: ComponentId,
    pub shoulder: ComponentId,
    pub tube: ComponentId,
}

/// Builds one fin can from its element events.
///
/// Construction attaches the pod set and its tube; [`accumulate`] collects
/// field values; [`finalize`] consumes the builder and adds the shoulder.
///
/// [`accumulate`]: FinCanBuilder::accumulate
/// [`finalize`]: FinCanBuilder::finalize
#[derive(Clone, Debug)]
pub struct FinCanBuilder {
    pod_set: ComponentId,
    tube: BodyTubeBuilder,
    length_factor: f64,
    warn_missing_measurements: bool,
    inside_diameter: Measurement,
    shoulder_length: Measurement,
}

/// State of a fin can measurement field.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Measurement {
    /// The element never appeared.
    #[default]
    Absent,
    /// The element appeared but never held a usable number.
    Invalid,
    Value(f64),
}

impl Measurement {
    fn record(&mut self, value: Option<f64>) {
        match value {
            Some(v) => *self = Measurement::Value(v),
            None if *self == Measurement::Absent => *self = Measurement::Invalid,
            None => {}
        }
    }

    fn value(self) -> f64 {
        match self {
            Measurement::Value(v) => v,
            Measurement::Absent | Measurement::Invalid => 0.0,
        }
    }
}

impl FinCanBuilder {
    /// Start a fin can on the body tube that is the last child of `parent`.
    ///
    /// Fails without touching the tree if `parent` is absent, has no
    /// children, or its last child is not a body tube.
    pub fn new(
        tree: &mut ComponentTree,
        parent: Option<ComponentId>,
        options: &ImportOptions,
    ) -> Result<Self, ImportError> {
        let parent = parent.ok_or(PreconditionError::MissingParent)?;
        if !tree.contains(parent) {
            return Err(TreeError::UnknownComponent(parent).into());
        }
        let anchor = tree
            .last_child(parent)
            .ok_or(PreconditionError::NoAnchorComponent)?;
        Self::attach_to(tree, anchor, options)
    }

    /// Start a fin can on an explicitly chosen body tube.
    ///
    /// Options with an unusable length factor are rejected before the tree
    /// is touched.
    pub fn attach_to(
        tree: &mut ComponentTree,
        anchor_tube: ComponentId,
        options: &ImportOptions,
    ) -> Result<Self, ImportError> {
        options.validate()?;
        let kind = tree
            .kind(anchor_tube)
            .ok_or(TreeError::UnknownComponent(anchor_tube))?;
        if !kind.is_body_tube() {
            return Err(PreconditionError::AnchorNotBodyTube {
                found: kind.type_name(),
            }
            .into());
        }

        let mut pods = PodSet::new();
        pods.set_instance_count(1);
        pods.set_radius(RadiusMethod::Free, 0.0);
        // Flush with the aft end of the anchor tube.
        pods.set_axial(AxialMethod::Bottom, 0.0);
        pods.angle_offset = 0.0;

        let pod_set =
            tree.create(Component::new(ComponentKind::PodSet(pods)).with_name(FIN_CAN_NAME));
        let tube = tree.create(
            Component::new(ComponentKind::BodyTube(BodyTube::new())).with_name(FIN_CAN_TUBE_NAME),
        );

        let linked = tree
            .add_child(pod_set, tube)
            .and_then(|()| tree.add_child(anchor_tube, pod_set));
        if let Err(e) = linked {
            // Removing the pod set takes the tube with it once linked.
            for id in [pod_set, tube] {
                if tree.contains(id) {
                    tree.remove(id).ok();
                }
            }
            return Err(e.into());
        }

        tracing::debug!(anchor = %anchor_tube, %pod_set, %tube, "attached fin can");

        Ok(Self {
            pod_set,
            tube: BodyTubeBuilder::for_component(tube, options.length_factor),
            length_factor: options.length_factor,
            warn_missing_measurements: options.warn_missing_measurements,
            inside_diameter: Measurement::Absent,
            shoulder_length: Measurement::Absent,
        })
    }

    pub fn pod_set(&self) -> ComponentId {
        self.pod_set
    }

    pub fn tube(&self) -> &BodyTubeBuilder {
        &self.tube
    }

    /// Inside diameter read so far, in internal units; 0 until supplied.
    pub fn inside_diameter(&self) -> f64 {
        self.inside_diameter.value()
    }

    /// Shoulder length read so far, in internal units; 0 until supplied.
    pub fn shoulder_length(&self) -> f64 {
        self.shoulder_length.value()
    }

    /// Decide how to read a child element of the fin can.
    pub fn open_element(&self, element: &str, warnings: &mut WarningSet) -> ElementAction {
        match element {
            tags::INSIDE_DIAMETER | tags::SHOULDER_LENGTH => ElementAction::Text,
            _ => self.tube.open_element(element, warnings),
        }
    }

    /// Record a field value. Fin can measurements are kept here; every
    /// other field goes to the fin can tube.
    pub fn accumulate(
        &mut self,
        tree: &mut ComponentTree,
        element: &str,
        content: &str,
        warnings: &mut WarningSet,
    ) {
        match element {
            tags::INSIDE_DIAMETER => {
                let value = read_length(element, content, self.length_factor, warnings);
                self.inside_diameter.record(value);
            }
            tags::SHOULDER_LENGTH => {
                let value = read_length(element, content, self.length_factor, warnings);
                self.shoulder_length.record(value);
            }
            _ => self.tube.close_element(tree, element, content, warnings),
        }
    }

    /// Build the shoulder from the collected measurements and the tube's
    /// current values, and put it in front of the tube.
    pub fn finalize(
        self,
        tree: &mut ComponentTree,
        warnings: &mut WarningSet,
    ) -> Result<FinCanParts, ImportError> {
        if self.warn_missing_measurements {
            let measurements = [
                (tags::INSIDE_DIAMETER, self.inside_diameter),
                (tags::SHOULDER_LENGTH, self.shoulder_length),
            ];
            for (element, value) in measurements {
                // A malformed value already carries its own warning.
                if value == Measurement::Absent {
                    warnings.add(Warning::MissingMeasurement {
                        element: SmolStr::new_static(element),
                    });
                }
            }
        }

        let shoulder = Transition::new(TransitionShape::Conical)
            .with_radii(self.inside_diameter() / 2.0, self.tube.outer_radius(tree)?)
            .with_length(self.shoulder_length())
            .with_thickness(self.tube.thickness(tree)?)
            .with_color(self.tube.color(tree)?);

        let shoulder = tree.create(
            Component::new(ComponentKind::Transition(shoulder)).with_name(FIN_CAN_SHOULDER_NAME),
        );
        if let Err(e) = tree.insert_child(self.pod_set, 0, shoulder) {
            tree.remove(shoulder).ok();
            return Err(e.into());
        }

        tracing::debug!(pod_set = %self.pod_set, %shoulder, "added fin can shoulder");

        Ok(FinCanParts {
            pod_set: self.pod_set,
            shoulder,
            tube: self.tube.component(),
        })
    }
}

impl ElementHandler for FinCanBuilder {
    fn open_element(
        &mut self,
        ctx: &mut LoadingContext<'_>,
        element: &str,
    ) -> Result<ElementAction, ImportError> {
        Ok(FinCanBuilder::open_element(self, element, ctx.warnings))
    }

    fn close_element(
        &mut self,
        ctx: &mut LoadingContext<'_>,
        element: &str,
        content: &str,
    ) -> Result<(), ImportError> {
        self.accumulate(ctx.tree, element, content, ctx.warnings);
        Ok(())
    }

    fn end_handler(self: Box<Self>, ctx: &mut LoadingContext<'_>) -> Result<(), ImportError> {
        (*self).finalize(ctx.tree, ctx.warnings).map(|_| ())
    }
}
