//! RASAero element names.
//!
//! These identifiers are shared by every handler that reads a RASAero
//! document; a tag recognized by one handler must be spelled the same way
//! everywhere.

/// Root element of a `.CDX1` file.
pub const RASAERO_DOCUMENT: &str = "RASAeroDocument";
/// Document format version.
pub const FILE_VERSION: &str = "FileVersion";
/// Container for all components of one design.
pub const ROCKET_DESIGN: &str = "RocketDesign";

// Components
pub const NOSE_CONE: &str = "NoseCone";
pub const BODY_TUBE: &str = "BodyTube";
pub const TRANSITION: &str = "Transition";
pub const FIN_CAN: &str = "FinCan";
pub const BOAT_TAIL: &str = "BoatTail";
pub const FIN: &str = "Fin";

// Generic component fields
pub const PART_TYPE: &str = "PartType";
pub const LOCATION: &str = "Location";
pub const LENGTH: &str = "Length";
pub const DIAMETER: &str = "Diameter";
pub const THICKNESS: &str = "Thickness";
pub const COLOR: &str = "Color";

// Fin can fields
pub const INSIDE_DIAMETER: &str = "InsideDiameter";
pub const SHOULDER_LENGTH: &str = "ShoulderLength";
