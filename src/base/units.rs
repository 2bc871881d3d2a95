//! Length conversion from RASAero units to internal units.
//!
//! RASAero stores every length in inches. The component model is in metres,
//! so each raw value is divided by a conversion factor (inches per metre).

/// Default number of RASAero length units per internal length unit.
pub const RASAERO_TO_INTERNAL_LENGTH: f64 = 1.0 / 0.0254;

/// Parse a raw RASAero length and convert it to internal units.
///
/// Surrounding whitespace is ignored. Returns `None` when the text is not a
/// decimal number or the converted length is not finite.
pub fn parse_length(raw: &str, factor: f64) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    let length = value / factor;
    length.is_finite().then_some(length)
}
