//! The handler protocol shared by every element handler.

use crate::config::ImportOptions;
use crate::error::ImportError;
use crate::model::ComponentTree;
use crate::warnings::WarningSet;

/// Everything a handler may touch while an import pass runs.
///
/// The tree and the warnings are borrowed for the duration of the pass;
/// handlers only keep [`ComponentId`](crate::model::ComponentId) handles
/// between events.
pub struct LoadingContext<'a> {
    pub tree: &'a mut ComponentTree,
    pub warnings: &'a mut WarningSet,
    pub options: &'a ImportOptions,
}

impl<'a> LoadingContext<'a> {
    pub fn new(
        tree: &'a mut ComponentTree,
        warnings: &'a mut WarningSet,
        options: &'a ImportOptions,
    ) -> Self {
        Self {
            tree,
            warnings,
            options,
        }
    }
}

/// What to do with an element a handler has just seen open.
pub enum ElementAction {
    /// Collect the element's text and pass it to
    /// [`ElementHandler::close_element`].
    Text,
    /// Hand the element's content to a nested handler.
    Nested(Box<dyn ElementHandler>),
    /// Ignore the element and everything inside it.
    Skip,
}

impl std::fmt::Debug for ElementAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => f.write_str("Text"),
            Self::Nested(_) => f.write_str("Nested(..)"),
            Self::Skip => f.write_str("Skip"),
        }
    }
}

/// Receives the events for the content of one element.
///
/// Events arrive in document order: `open_element` for each child element,
/// `close_element` for each child the handler chose to read as
/// [`ElementAction::Text`], and finally `end_handler` once the handler's own
/// element closes. `end_handler` consumes the handler, so it runs at most
/// once.
pub trait ElementHandler {
    fn open_element(
        &mut self,
        ctx: &mut LoadingContext<'_>,
        element: &str,
    ) -> Result<ElementAction, ImportError>;

    fn close_element(
        &mut self,
        _ctx: &mut LoadingContext<'_>,
        _element: &str,
        _content: &str,
    ) -> Result<(), ImportError> {
        Ok(())
    }

    fn end_handler(self: Box<Self>, _ctx: &mut LoadingContext<'_>) -> Result<(), ImportError> {
        Ok(())
    }
}
