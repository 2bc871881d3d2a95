//! Tree setup and assertion helpers.

use rasaero::{BodyTube, Color, Component, ComponentId, ComponentKind, ComponentTree};

pub const EPSILON: f64 = 1e-9;

/// Stage holding a single anchor body tube.
pub fn stage_with_tube(tube: BodyTube) -> (ComponentTree, ComponentId, ComponentId) {
    let mut tree = ComponentTree::new();
    let stage = tree.create(Component::new(ComponentKind::Stage));
    let anchor = tree.create(Component::new(ComponentKind::BodyTube(tube)));
    tree.add_child(stage, anchor).unwrap();
    (tree, stage, anchor)
}

/// Stage holding the anchor tube used in most fin can tests.
pub fn standard_stage() -> (ComponentTree, ComponentId, ComponentId) {
    stage_with_tube(
        BodyTube::new()
            .with_outer_radius(0.05)
            .with_thickness(0.002)
            .with_color(Color::RED),
    )
}

/// Assert two lengths agree within [`EPSILON`].
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Names of `id`'s children, in order.
pub fn child_names(tree: &ComponentTree, id: ComponentId) -> Vec<String> {
    tree.children(id)
        .iter()
        .map(|&c| tree.get(c).unwrap().name.to_string())
        .collect()
}
