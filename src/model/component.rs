//! Component kinds and their attributes.

use smol_str::SmolStr;
use uuid::Uuid;

use super::Color;

// ============================================================================
// POSITIONING
// ============================================================================

/// How a component's axial position is anchored to its parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxialMethod {
    /// Offset from the tip of the rocket.
    Absolute,
    /// Directly after the previous sibling.
    After,
    /// Fore ends flush.
    #[default]
    Top,
    /// Centres aligned.
    Middle,
    /// Aft ends flush.
    Bottom,
}

/// How a pod set's radial distance from its parent's axis is determined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RadiusMethod {
    /// Explicit radial offset.
    Free,
    /// Offset added to the parent's outer radius.
    #[default]
    Relative,
    /// Touching the parent's outer surface.
    Surface,
    /// On the parent's axis.
    Coaxial,
}

/// Profile of a transition between two radii.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransitionShape {
    #[default]
    Conical,
    Ogive,
    Ellipsoid,
    Power,
    Parabolic,
    Haack,
}

// ============================================================================
// COMPONENT DATA
// ============================================================================

/// A cylindrical shell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BodyTube {
    pub outer_radius: f64,
    pub thickness: f64,
    pub length: f64,
    pub color: Option<Color>,
}

impl BodyTube {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outer_radius(mut self, radius: f64) -> Self {
        self.outer_radius = radius;
        self
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// A group of radially distributed instances of its children, mounted on a
/// host body.
#[derive(Clone, Debug, PartialEq)]
pub struct PodSet {
    /// Number of instances, at least 1.
    instance_count: u32,
    pub radius_method: RadiusMethod,
    pub radius_offset: f64,
    pub axial_method: AxialMethod,
    pub axial_offset: f64,
    /// Angular position of the first instance, in radians.
    pub angle_offset: f64,
}

impl Default for PodSet {
    fn default() -> Self {
        Self {
            instance_count: 1,
            radius_method: RadiusMethod::default(),
            radius_offset: 0.0,
            axial_method: AxialMethod::default(),
            axial_offset: 0.0,
            angle_offset: 0.0,
        }
    }
}

impl PodSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instance_count(&self) -> u32 {
        self.instance_count
    }

    /// Set the instance count; values below 1 are raised to 1.
    pub fn set_instance_count(&mut self, count: u32) {
        self.instance_count = count.max(1);
    }

    pub fn set_radius(&mut self, method: RadiusMethod, offset: f64) {
        self.radius_method = method;
        self.radius_offset = offset;
    }

    pub fn set_axial(&mut self, method: AxialMethod, offset: f64) {
        self.axial_method = method;
        self.axial_offset = offset;
    }
}

/// A frustum-like shell bridging a fore and an aft radius.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub shape: TransitionShape,
    pub fore_radius: f64,
    pub aft_radius: f64,
    /// Fore radius follows the previous component.
    pub fore_radius_automatic: bool,
    /// Aft radius follows the next component.
    pub aft_radius_automatic: bool,
    pub length: f64,
    pub thickness: f64,
    pub color: Option<Color>,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            shape: TransitionShape::default(),
            fore_radius: 0.0,
            aft_radius: 0.0,
            fore_radius_automatic: true,
            aft_radius_automatic: true,
            length: 0.0,
            thickness: 0.0,
            color: None,
        }
    }
}

impl Transition {
    pub fn new(shape: TransitionShape) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }

    /// Set both radii explicitly, turning off automatic sizing.
    pub fn with_radii(mut self, fore: f64, aft: f64) -> Self {
        self.fore_radius = fore;
        self.aft_radius = aft;
        self.fore_radius_automatic = false;
        self.aft_radius_automatic = false;
        self
    }

    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }
}

// ============================================================================
// COMPONENT KINDS
// ============================================================================

/// The type of a component together with its type-specific attributes.
#[derive(Clone, Debug, PartialEq)]
pub enum ComponentKind {
    Rocket,
    Stage,
    BodyTube(BodyTube),
    PodSet(PodSet),
    Transition(Transition),
}

impl ComponentKind {
    /// Human-readable type name, also used as the default component name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Rocket => "Rocket",
            Self::Stage => "Stage",
            Self::BodyTube(_) => "Body tube",
            Self::PodSet(_) => "Pod set",
            Self::Transition(_) => "Transition",
        }
    }

    /// Returns true if a component of this kind may contain `child`.
    pub fn allows_child(&self, child: &ComponentKind) -> bool {
        match self {
            Self::Rocket => matches!(child, Self::Stage),
            Self::Stage | Self::PodSet(_) => {
                matches!(child, Self::BodyTube(_) | Self::Transition(_))
            }
            Self::BodyTube(_) => matches!(child, Self::PodSet(_)),
            Self::Transition(_) => false,
        }
    }

    pub fn is_body_tube(&self) -> bool {
        matches!(self, Self::BodyTube(_))
    }
}

// ============================================================================
// COMPONENT
// ============================================================================

/// A node's payload: identity, name and kind.
#[derive(Clone, Debug, PartialEq)]
pub struct Component {
    /// Persistent identity, stable across tree restructuring.
    pub uuid: Uuid,
    pub name: SmolStr,
    pub kind: ComponentKind,
}

impl Component {
    /// Create a component named after its kind.
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: SmolStr::new_static(kind.type_name()),
            kind,
        }
    }

    pub fn with_name(mut self, name: impl Into<SmolStr>) -> Self {
        self.name = name.into();
        self
    }

    pub fn as_body_tube(&self) -> Option<&BodyTube> {
        match &self.kind {
            ComponentKind::BodyTube(tube) => Some(tube),
            _ => None,
        }
    }

    pub fn as_body_tube_mut(&mut self) -> Option<&mut BodyTube> {
        match &mut self.kind {
            ComponentKind::BodyTube(tube) => Some(tube),
            _ => None,
        }
    }

    pub fn as_pod_set(&self) -> Option<&PodSet> {
        match &self.kind {
            ComponentKind::PodSet(pods) => Some(pods),
            _ => None,
        }
    }

    pub fn as_transition(&self) -> Option<&Transition> {
        match &self.kind {
            ComponentKind::Transition(transition) => Some(transition),
            _ => None,
        }
    }
}
