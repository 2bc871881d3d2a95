//! Document-level handlers.

use smol_str::SmolStr;

use super::body_tube::BodyTubeBuilder;
use super::fin_can::FinCanBuilder;
use super::handler::{ElementAction, ElementHandler, LoadingContext};
use crate::base::tags;
use crate::error::ImportError;
use crate::model::{Component, ComponentId, ComponentKind};
use crate::warnings::Warning;

pub const STAGE_NAME: &str = "Sustainer";

/// Sits below the document element; accepts a single RASAero root.
#[derive(Debug, Default)]
pub struct RootHandler {
    seen_document: bool,
}

impl RootHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ElementHandler for RootHandler {
    fn open_element(
        &mut self,
        _ctx: &mut LoadingContext<'_>,
        element: &str,
    ) -> Result<ElementAction, ImportError> {
        if self.seen_document {
            Err(ImportError::xml(format!(
                "unexpected <{element}> after the document element"
            )))
        } else if element == tags::RASAERO_DOCUMENT {
            self.seen_document = true;
            Ok(ElementAction::Nested(Box::new(DocumentHandler)))
        } else {
            Err(ImportError::unsupported(format!(
                "expected <{}> root element, found <{element}>",
                tags::RASAERO_DOCUMENT
            )))
        }
    }
}

/// Content of `<RASAeroDocument>`.
///
/// Only the rocket design is imported; launch site, recovery and simulation
/// sections are skipped.
#[derive(Debug, Default)]
pub struct DocumentHandler;

impl ElementHandler for DocumentHandler {
    fn open_element(
        &mut self,
        ctx: &mut LoadingContext<'_>,
        element: &str,
    ) -> Result<ElementAction, ImportError> {
        match element {
            tags::FILE_VERSION => Ok(ElementAction::Text),
            tags::ROCKET_DESIGN => Ok(ElementAction::Nested(Box::new(
                RocketDesignHandler::new(ctx)?,
            ))),
            _ => {
                tracing::trace!(element, "skipping document section");
                Ok(ElementAction::Skip)
            }
        }
    }

    fn close_element(
        &mut self,
        _ctx: &mut LoadingContext<'_>,
        element: &str,
        content: &str,
    ) -> Result<(), ImportError> {
        if element == tags::FILE_VERSION {
            tracing::debug!(version = content, "RASAero file version");
        }
        Ok(())
    }
}

/// Content of `<RocketDesign>`: a rocket with a single stage whose
/// components are stacked in document order.
#[derive(Debug)]
pub struct RocketDesignHandler {
    rocket: ComponentId,
    stage: ComponentId,
}

impl RocketDesignHandler {
    pub fn new(ctx: &mut LoadingContext<'_>) -> Result<Self, ImportError> {
        let rocket = ctx.tree.create(Component::new(ComponentKind::Rocket));
        let stage = ctx
            .tree
            .create(Component::new(ComponentKind::Stage).with_name(STAGE_NAME));
        ctx.tree.add_child(rocket, stage)?;
        Ok(Self { rocket, stage })
    }

    pub fn rocket(&self) -> ComponentId {
        self.rocket
    }

    pub fn stage(&self) -> ComponentId {
        self.stage
    }

    fn open_fin_can(
        &self,
        ctx: &mut LoadingContext<'_>,
        element: &str,
    ) -> Result<ElementAction, ImportError> {
        match FinCanBuilder::new(ctx.tree, Some(self.stage), ctx.options) {
            Ok(builder) => Ok(ElementAction::Nested(Box::new(builder))),
            Err(ImportError::Precondition(reason)) => {
                tracing::warn!(%reason, "dropping fin can");
                ctx.warnings.add(Warning::ComponentDropped {
                    element: SmolStr::new(element),
                    reason: reason.to_string(),
                });
                Ok(ElementAction::Skip)
            }
            Err(e) => Err(e),
        }
    }
}

impl ElementHandler for RocketDesignHandler {
    fn open_element(
        &mut self,
        ctx: &mut LoadingContext<'_>,
        element: &str,
    ) -> Result<ElementAction, ImportError> {
        match element {
            tags::BODY_TUBE => {
                let builder =
                    BodyTubeBuilder::attach(ctx.tree, self.stage, ctx.options.length_factor)?;
                Ok(ElementAction::Nested(Box::new(builder)))
            }
            tags::FIN_CAN => self.open_fin_can(ctx, element),
            tags::NOSE_CONE | tags::TRANSITION | tags::BOAT_TAIL => {
                ctx.warnings.add(Warning::Unsupported {
                    element: SmolStr::new(element),
                });
                Ok(ElementAction::Skip)
            }
            _ => {
                ctx.warnings.add(Warning::UnknownElement {
                    element: SmolStr::new(element),
                });
                Ok(ElementAction::Skip)
            }
        }
    }

    fn end_handler(self: Box<Self>, ctx: &mut LoadingContext<'_>) -> Result<(), ImportError> {
        tracing::debug!(
            rocket = %self.rocket,
            components = ctx.tree.child_count(self.stage),
            "finished rocket design"
        );
        Ok(())
    }
}
