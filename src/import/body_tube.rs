//! Generic body tube fields.

use smol_str::SmolStr;

use super::handler::{ElementAction, ElementHandler, LoadingContext};
use super::read_length;
use crate::base::tags;
use crate::error::{ImportError, TreeError};
use crate::model::{BodyTube, Color, Component, ComponentId, ComponentKind, ComponentTree};
use crate::warnings::{Warning, WarningSet};

/// Fills in a body tube from its RASAero fields.
///
/// The builder only holds the tube's handle; every read and write goes
/// through the tree passed in, so values set by one event are visible to
/// anyone reading the tube afterwards.
#[derive(Clone, Debug)]
pub struct BodyTubeBuilder {
    tube: ComponentId,
    length_factor: f64,
}

impl BodyTubeBuilder {
    /// Bind to a tube that already exists in the tree.
    pub fn for_component(tube: ComponentId, length_factor: f64) -> Self {
        Self {
            tube,
            length_factor,
        }
    }

    /// Create a new tube as the last child of `parent`.
    pub fn attach(
        tree: &mut ComponentTree,
        parent: ComponentId,
        length_factor: f64,
    ) -> Result<Self, TreeError> {
        let tube = tree.create(Component::new(ComponentKind::BodyTube(BodyTube::new())));
        if let Err(e) = tree.add_child(parent, tube) {
            tree.remove(tube).ok();
            return Err(e);
        }
        tracing::debug!(%parent, %tube, "attached body tube");
        Ok(Self::for_component(tube, length_factor))
    }

    /// Handle of the tube being built.
    pub fn component(&self) -> ComponentId {
        self.tube
    }

    /// Decide how to read a child element of the tube.
    pub fn open_element(&self, element: &str, warnings: &mut WarningSet) -> ElementAction {
        match element {
            tags::PART_TYPE
            | tags::LOCATION
            | tags::LENGTH
            | tags::DIAMETER
            | tags::THICKNESS
            | tags::COLOR => ElementAction::Text,
            tags::FIN => {
                warnings.add(Warning::Unsupported {
                    element: SmolStr::new(element),
                });
                ElementAction::Skip
            }
            _ => {
                warnings.add(Warning::UnknownElement {
                    element: SmolStr::new(element),
                });
                ElementAction::Skip
            }
        }
    }

    /// Apply a text field to the tube. Bad values are reported as warnings
    /// and leave the tube unchanged.
    pub fn close_element(
        &self,
        tree: &mut ComponentTree,
        element: &str,
        content: &str,
        warnings: &mut WarningSet,
    ) {
        let Some(tube) = tree.body_tube_mut(self.tube) else {
            tracing::warn!(tube = %self.tube, element, "body tube no longer in tree");
            return;
        };

        match element {
            tags::LENGTH => {
                if let Some(length) = read_length(element, content, self.length_factor, warnings) {
                    tube.length = length;
                }
            }
            tags::DIAMETER => {
                if let Some(diameter) = read_length(element, content, self.length_factor, warnings)
                {
                    tube.outer_radius = diameter / 2.0;
                }
            }
            tags::THICKNESS => {
                if let Some(thickness) = read_length(element, content, self.length_factor, warnings)
                {
                    tube.thickness = thickness;
                }
            }
            tags::COLOR => match Color::from_rasaero_name(content) {
                Some(color) => tube.color = Some(color),
                None => {
                    warnings.add(Warning::UnknownColor {
                        content: content.to_string(),
                    });
                }
            },
            // Location is derived from the stacking order.
            tags::PART_TYPE | tags::LOCATION => {}
            _ => tracing::trace!(element, "ignoring body tube field"),
        }
    }

    fn body<'t>(&self, tree: &'t ComponentTree) -> Result<&'t BodyTube, TreeError> {
        tree.body_tube(self.tube)
            .ok_or(TreeError::UnknownComponent(self.tube))
    }

    /// Current outer radius of the tube.
    pub fn outer_radius(&self, tree: &ComponentTree) -> Result<f64, TreeError> {
        Ok(self.body(tree)?.outer_radius)
    }

    /// Current wall thickness of the tube.
    pub fn thickness(&self, tree: &ComponentTree) -> Result<f64, TreeError> {
        Ok(self.body(tree)?.thickness)
    }

    /// Current color of the tube.
    pub fn color(&self, tree: &ComponentTree) -> Result<Option<Color>, TreeError> {
        Ok(self.body(tree)?.color)
    }
}

impl ElementHandler for BodyTubeBuilder {
    fn open_element(
        &mut self,
        ctx: &mut LoadingContext<'_>,
        element: &str,
    ) -> Result<ElementAction, ImportError> {
        Ok(BodyTubeBuilder::open_element(self, element, ctx.warnings))
    }

    fn close_element(
        &mut self,
        ctx: &mut LoadingContext<'_>,
        element: &str,
        content: &str,
    ) -> Result<(), ImportError> {
        BodyTubeBuilder::close_element(self, ctx.tree, element, content, ctx.warnings);
        Ok(())
    }
}
