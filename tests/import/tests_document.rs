//! Whole-document import tests.

use rasaero::{ComponentKind, ImportError, ImportOptions, TransitionShape, Warning, read_design};

use crate::helpers::design_fixtures::{LONE_FIN_CAN, TUBE_AND_FIN_CAN, document};
use crate::helpers::tree_helpers::{assert_close, child_names};

fn inch_options() -> ImportOptions {
    ImportOptions::new().with_length_factor(25.4)
}

#[test]
fn test_tube_and_fin_can() {
    let xml = document(TUBE_AND_FIN_CAN);
    let design = read_design(xml.as_bytes(), &inch_options()).unwrap();
    let tree = &design.tree;

    let rocket = design.rocket().unwrap();
    assert_eq!(child_names(tree, rocket), vec!["Sustainer"]);
    let stage = tree.children(rocket)[0];
    assert_eq!(child_names(tree, stage), vec!["Body tube"]);

    let anchor = tree.children(stage)[0];
    let anchor_tube = tree.body_tube(anchor).unwrap();
    assert_close(anchor_tube.length, 30.0);
    assert_close(anchor_tube.outer_radius, 2.0);

    assert_eq!(child_names(tree, anchor), vec!["Fin Can"]);
    let pod_set = tree.children(anchor)[0];
    assert_eq!(
        child_names(tree, pod_set),
        vec!["Fin Can Shoulder", "Fin Can Tube"]
    );

    let shoulder = tree.transition(tree.children(pod_set)[0]).unwrap();
    let fin_can_tube = tree.body_tube(tree.children(pod_set)[1]).unwrap();
    assert_eq!(shoulder.shape, TransitionShape::Conical);
    assert_close(shoulder.fore_radius, 2.0);
    assert_close(shoulder.aft_radius, 2.15);
    assert_close(shoulder.length, 2.0);
    assert_close(shoulder.thickness, 0.1);
    assert_eq!(shoulder.color, fin_can_tube.color);
    assert_close(fin_can_tube.length, 12.0);

    // Fins are not imported.
    assert_eq!(design.warnings.len(), 1);
    assert!(design.warnings.contains(&Warning::Unsupported {
        element: "Fin".into(),
    }));
}

#[test]
fn test_fin_can_without_tube_is_dropped() {
    let xml = document(LONE_FIN_CAN);
    let design = read_design(xml.as_bytes(), &inch_options()).unwrap();

    let rocket = design.rocket().unwrap();
    let stage = design.tree.children(rocket)[0];
    assert!(design.tree.children(stage).is_empty());
    assert_eq!(design.tree.len(), 2);

    let dropped: Vec<_> = design
        .warnings
        .iter()
        .filter(|w| matches!(w, Warning::ComponentDropped { .. }))
        .collect();
    assert_eq!(dropped.len(), 1);
}

#[test]
fn test_import_continues_after_dropped_fin_can() {
    let xml = document(&format!("{LONE_FIN_CAN}{TUBE_AND_FIN_CAN}"));
    let design = read_design(xml.as_bytes(), &inch_options()).unwrap();

    let pod_sets = design
        .tree
        .iter()
        .filter(|(_, c)| matches!(c.kind, ComponentKind::PodSet(_)))
        .count();
    assert_eq!(pod_sets, 1);
}

#[test]
fn test_unsupported_components_warn() {
    let xml = document(
        "<NoseCone><Length>300</Length></NoseCone>\
         <BodyTube><Diameter>50</Diameter></BodyTube>\
         <BoatTail><Length>20</Length></BoatTail>\
         <Parachute/>",
    );
    let design = read_design(xml.as_bytes(), &inch_options()).unwrap();

    assert!(design.warnings.contains(&Warning::Unsupported {
        element: "NoseCone".into(),
    }));
    assert!(design.warnings.contains(&Warning::Unsupported {
        element: "BoatTail".into(),
    }));
    assert!(design.warnings.contains(&Warning::UnknownElement {
        element: "Parachute".into(),
    }));
    assert_eq!(design.warnings.len(), 3);
}

#[test]
fn test_repeated_warnings_are_collapsed() {
    let xml = document(
        "<BodyTube><Color>Mauve</Color></BodyTube>\
         <BodyTube><Color>Mauve</Color></BodyTube>",
    );
    let design = read_design(xml.as_bytes(), &inch_options()).unwrap();
    assert_eq!(design.warnings.len(), 1);
}

#[test]
fn test_default_options_convert_inches() {
    let xml = document("<BodyTube><Length>0.0254</Length></BodyTube>");
    let design = read_design(xml.as_bytes(), &ImportOptions::default()).unwrap();

    let (_, tube) = design
        .tree
        .iter()
        .find(|(_, c)| c.as_body_tube().is_some())
        .unwrap();
    assert_close(tube.as_body_tube().unwrap().length, 0.0254 * 0.0254);
}

#[test]
fn test_malformed_inside_diameter_warns_once() {
    let xml = document(
        "<BodyTube><Diameter>101.6</Diameter></BodyTube>\
         <FinCan>\
           <Diameter>109.22</Diameter>\
           <InsideDiameter>abc</InsideDiameter>\
           <ShoulderLength>50.8</ShoulderLength>\
         </FinCan>",
    );
    let design = read_design(xml.as_bytes(), &inch_options()).unwrap();

    assert_eq!(design.warnings.len(), 1);
    assert!(design.warnings.contains(&Warning::InvalidNumber {
        element: "InsideDiameter".into(),
        content: "abc".into(),
    }));
    assert!(
        !design
            .warnings
            .iter()
            .any(|w| matches!(w, Warning::MissingMeasurement { .. }))
    );
}

#[test]
fn test_malformed_xml_is_an_error() {
    let err = read_design(
        b"<RASAeroDocument><RocketDesign><BodyTube></RocketDesign>",
        &inch_options(),
    )
    .unwrap_err();
    assert!(matches!(err, ImportError::Xml(_)));
}
