//! Fin can builder tests driven through the public API.

use rasaero::base::tags;
use rasaero::{
    AxialMethod, BodyTube, Color, Component, ComponentKind, ComponentTree, FinCanBuilder,
    ImportError, ImportOptions, PreconditionError, RadiusMethod, TransitionShape, Warning,
    WarningSet,
};
use rstest::rstest;

use crate::helpers::tree_helpers::{assert_close, child_names, stage_with_tube, standard_stage};

fn inch_options() -> ImportOptions {
    ImportOptions::new().with_length_factor(25.4)
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn test_fin_can_hangs_off_last_tube() {
    let (mut tree, stage, anchor) = standard_stage();
    let builder = FinCanBuilder::new(&mut tree, Some(stage), &inch_options()).unwrap();

    assert_eq!(tree.parent(builder.pod_set()), Some(anchor));
    assert_eq!(child_names(&tree, builder.pod_set()), vec!["Fin Can Tube"]);
    assert_eq!(child_names(&tree, stage), vec!["Body tube"]);

    let pods = tree.pod_set(builder.pod_set()).unwrap();
    assert_eq!(pods.instance_count(), 1);
    assert_eq!(pods.radius_method, RadiusMethod::Free);
    assert_eq!(pods.axial_method, AxialMethod::Bottom);
    assert_eq!(pods.axial_offset, 0.0);
}

#[test]
fn test_fin_can_picks_last_of_several_tubes() {
    let (mut tree, stage, first) = standard_stage();
    let second = tree.create(Component::new(ComponentKind::BodyTube(BodyTube::new())));
    tree.add_child(stage, second).unwrap();

    let builder = FinCanBuilder::new(&mut tree, Some(stage), &inch_options()).unwrap();
    assert_eq!(tree.parent(builder.pod_set()), Some(second));
    assert!(tree.children(first).is_empty());
}

#[test]
fn test_missing_parent_creates_nothing() {
    let mut tree = ComponentTree::new();
    let err = FinCanBuilder::new(&mut tree, None, &inch_options()).unwrap_err();
    assert!(matches!(
        err,
        ImportError::Precondition(PreconditionError::MissingParent)
    ));
    assert!(tree.is_empty());
}

#[test]
fn test_childless_parent_creates_nothing() {
    let mut tree = ComponentTree::new();
    let stage = tree.create(Component::new(ComponentKind::Stage));
    let err = FinCanBuilder::new(&mut tree, Some(stage), &inch_options()).unwrap_err();
    assert!(matches!(
        err,
        ImportError::Precondition(PreconditionError::NoAnchorComponent)
    ));
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_non_tube_anchor_creates_nothing() {
    let mut tree = ComponentTree::new();
    let stage = tree.create(Component::new(ComponentKind::Stage));
    let nose = tree.create(
        Component::new(ComponentKind::Transition(rasaero::Transition::new(
            TransitionShape::Ogive,
        )))
        .with_name("Nose cone"),
    );
    tree.add_child(stage, nose).unwrap();

    let err = FinCanBuilder::new(&mut tree, Some(stage), &inch_options()).unwrap_err();
    assert!(matches!(
        err,
        ImportError::Precondition(PreconditionError::AnchorNotBodyTube {
            found: "Transition"
        })
    ));
    assert_eq!(tree.len(), 2);
    assert!(tree.children(nose).is_empty());
}

#[test]
fn test_attach_to_explicit_anchor() {
    let (mut tree, stage, anchor) = standard_stage();
    let later = tree.create(Component::new(ComponentKind::BodyTube(BodyTube::new())));
    tree.add_child(stage, later).unwrap();

    let builder = FinCanBuilder::attach_to(&mut tree, anchor, &inch_options()).unwrap();
    assert_eq!(tree.parent(builder.pod_set()), Some(anchor));
}

// ============================================================================
// SHOULDER SYNTHESIS
// ============================================================================

#[test]
fn test_shoulder_from_measurements_and_tube() {
    let (mut tree, stage, _) = standard_stage();
    let mut warnings = WarningSet::new();
    let mut builder = FinCanBuilder::new(&mut tree, Some(stage), &inch_options()).unwrap();

    // 0.1 diameter, 0.002 wall.
    builder.accumulate(&mut tree, tags::DIAMETER, "2.54", &mut warnings);
    builder.accumulate(&mut tree, tags::THICKNESS, "0.0508", &mut warnings);
    builder.accumulate(&mut tree, tags::COLOR, "Red", &mut warnings);
    builder.accumulate(&mut tree, tags::INSIDE_DIAMETER, "40.0", &mut warnings);
    builder.accumulate(&mut tree, tags::SHOULDER_LENGTH, "10.0", &mut warnings);

    let parts = builder.finalize(&mut tree, &mut warnings).unwrap();
    assert!(warnings.is_empty());

    assert_eq!(
        child_names(&tree, parts.pod_set),
        vec!["Fin Can Shoulder", "Fin Can Tube"]
    );

    let shoulder = tree.transition(parts.shoulder).unwrap();
    assert_eq!(shoulder.shape, TransitionShape::Conical);
    assert_close(shoulder.fore_radius, 40.0 / 25.4 / 2.0);
    assert_close(shoulder.length, 10.0 / 25.4);
    assert_close(shoulder.aft_radius, 0.05);
    assert_close(shoulder.thickness, 0.002);
    assert_eq!(shoulder.color, Some(Color::RED));
    assert!(!shoulder.fore_radius_automatic);
    assert!(!shoulder.aft_radius_automatic);
}

#[test]
fn test_measurements_accepted_in_any_order() {
    let (mut tree, stage, _) = standard_stage();
    let mut warnings = WarningSet::new();
    let mut builder = FinCanBuilder::new(&mut tree, Some(stage), &inch_options()).unwrap();

    builder.accumulate(&mut tree, tags::SHOULDER_LENGTH, "10.0", &mut warnings);
    builder.accumulate(&mut tree, tags::DIAMETER, "2.54", &mut warnings);
    builder.accumulate(&mut tree, tags::INSIDE_DIAMETER, "40.0", &mut warnings);

    let parts = builder.finalize(&mut tree, &mut warnings).unwrap();
    let shoulder = tree.transition(parts.shoulder).unwrap();
    assert_close(shoulder.fore_radius, 40.0 / 25.4 / 2.0);
    assert_close(shoulder.length, 10.0 / 25.4);
}

#[test]
fn test_shoulder_uses_fin_can_tube_not_anchor() {
    let (mut tree, stage, _) =
        stage_with_tube(BodyTube::new().with_outer_radius(9.0).with_thickness(1.0));
    let mut warnings = WarningSet::new();
    let mut builder = FinCanBuilder::new(&mut tree, Some(stage), &inch_options()).unwrap();

    builder.accumulate(&mut tree, tags::DIAMETER, "50.8", &mut warnings);

    let parts = builder.finalize(&mut tree, &mut warnings).unwrap();
    let shoulder = tree.transition(parts.shoulder).unwrap();
    assert_close(shoulder.aft_radius, 1.0);
    assert_close(shoulder.thickness, 0.0);
    assert_eq!(shoulder.color, None);
}

// ============================================================================
// INVALID AND MISSING VALUES
// ============================================================================

#[rstest]
#[case("abc")]
#[case("")]
#[case("1.0.0")]
#[case("NaN")]
#[case("inf")]
fn test_bad_inside_diameter_warns_once(#[case] raw: &str) {
    let (mut tree, stage, _) = standard_stage();
    let mut warnings = WarningSet::new();
    let mut builder = FinCanBuilder::new(&mut tree, Some(stage), &inch_options()).unwrap();

    builder.accumulate(&mut tree, tags::INSIDE_DIAMETER, raw, &mut warnings);

    assert_eq!(warnings.len(), 1);
    assert!(warnings.contains(&Warning::InvalidNumber {
        element: tags::INSIDE_DIAMETER.into(),
        content: raw.to_string(),
    }));
    assert_eq!(builder.inside_diameter(), 0.0);
}

#[test]
fn test_missing_measurements_give_zero_size_shoulder() {
    let (mut tree, stage, _) = standard_stage();
    let mut warnings = WarningSet::new();
    let builder = FinCanBuilder::new(&mut tree, Some(stage), &inch_options()).unwrap();

    let parts = builder.finalize(&mut tree, &mut warnings).unwrap();
    let shoulder = tree.transition(parts.shoulder).unwrap();
    assert_eq!(shoulder.fore_radius, 0.0);
    assert_eq!(shoulder.length, 0.0);

    assert_eq!(warnings.len(), 2);
    assert!(warnings.contains(&Warning::MissingMeasurement {
        element: tags::SHOULDER_LENGTH.into(),
    }));
}

#[test]
fn test_missing_measurement_warnings_can_be_disabled() {
    let (mut tree, stage, _) = standard_stage();
    let mut warnings = WarningSet::new();
    let options = inch_options().with_missing_measurement_warnings(false);
    let builder = FinCanBuilder::new(&mut tree, Some(stage), &options).unwrap();

    builder.finalize(&mut tree, &mut warnings).unwrap();
    assert!(warnings.is_empty());
}

#[test]
fn test_unknown_fin_can_child_is_skipped() {
    let (mut tree, stage, _) = standard_stage();
    let mut warnings = WarningSet::new();
    let builder = FinCanBuilder::new(&mut tree, Some(stage), &inch_options()).unwrap();

    assert!(matches!(
        builder.open_element("Sparkles", &mut warnings),
        rasaero::import::ElementAction::Skip
    ));
    assert!(matches!(
        builder.open_element(tags::SHOULDER_LENGTH, &mut warnings),
        rasaero::import::ElementAction::Text
    ));
    assert_eq!(warnings.len(), 1);
}
