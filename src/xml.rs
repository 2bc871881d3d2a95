//! Streaming RASAero reader.
//!
//! Drives a stack of [`ElementHandler`]s from `quick-xml` events:
//!
//! ```text
//! <RASAeroDocument>            RootHandler::open_element      → Nested(DocumentHandler)
//!   <RocketDesign>             DocumentHandler::open_element  → Nested(RocketDesignHandler)
//!     <FinCan>                 RocketDesignHandler            → Nested(FinCanBuilder)
//!       <InsideDiameter>       FinCanBuilder::open_element    → Text
//!         3.0                    (collected)
//!       </InsideDiameter>      FinCanBuilder::close_element("InsideDiameter", "3.0")
//!     </FinCan>                FinCanBuilder::end_handler
//! ```

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::config::ImportOptions;
use crate::error::ImportError;
use crate::format::ImportedDesign;
use crate::import::{ElementAction, ElementHandler, LoadingContext, RootHandler};
use crate::model::ComponentTree;
use crate::warnings::WarningSet;

/// Read a RASAero design from XML bytes.
pub fn read_design(input: &[u8], options: &ImportOptions) -> Result<ImportedDesign, ImportError> {
    options.validate()?;

    let mut tree = ComponentTree::new();
    let mut warnings = WarningSet::new();
    {
        let mut ctx = LoadingContext::new(&mut tree, &mut warnings, options);
        EventDriver::new(Box::new(RootHandler::new())).run(input, &mut ctx)?;
    }

    tracing::debug!(
        components = tree.len(),
        warnings = warnings.len(),
        "imported RASAero design"
    );
    Ok(ImportedDesign { tree, warnings })
}

/// One open element on the driver stack.
enum Frame {
    /// A handler reading the content of `element`.
    Handler {
        element: String,
        handler: Box<dyn ElementHandler>,
    },
    /// A text field being collected for the handler below it.
    Text { element: String, content: String },
    /// An ignored subtree, `depth` elements deep.
    Skip { depth: usize },
}

/// Dispatches element events to the handler stack.
pub struct EventDriver {
    stack: Vec<Frame>,
}

impl EventDriver {
    /// Start with `root` receiving the document element.
    pub fn new(root: Box<dyn ElementHandler>) -> Self {
        Self {
            stack: vec![Frame::Handler {
                element: String::new(),
                handler: root,
            }],
        }
    }

    /// Read all of `input`, then end the root handler.
    pub fn run(mut self, input: &[u8], ctx: &mut LoadingContext<'_>) -> Result<(), ImportError> {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    let qname = e.name();
                    let name = decode_name(qname.as_ref())?;
                    self.open(ctx, name)?;
                }
                Ok(Event::Empty(ref e)) => {
                    // Self-closing element: start then end
                    let qname = e.name();
                    let name = decode_name(qname.as_ref())?;
                    self.open(ctx, name)?;
                    self.close(ctx)?;
                }
                Ok(Event::End(_)) => {
                    self.close(ctx)?;
                }
                Ok(Event::Text(ref e)) => {
                    let text = e.unescape().map_err(|err| {
                        ImportError::xml(format!(
                            "Text error at position {}: {err}",
                            reader.buffer_position()
                        ))
                    })?;
                    self.text(&text);
                }
                Ok(Event::CData(ref e)) => {
                    self.text(&String::from_utf8_lossy(e));
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ImportError::xml(format!(
                        "XML parse error at position {}: {e}",
                        reader.error_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        self.finish(ctx)
    }

    fn open(&mut self, ctx: &mut LoadingContext<'_>, element: &str) -> Result<(), ImportError> {
        let frame = match self.stack.last_mut() {
            Some(Frame::Skip { depth }) => {
                *depth += 1;
                return Ok(());
            }
            Some(Frame::Text { element: field, .. }) => {
                tracing::trace!(field = %field, element, "skipping element inside text field");
                Frame::Skip { depth: 1 }
            }
            Some(Frame::Handler { handler, .. }) => match handler.open_element(ctx, element)? {
                ElementAction::Text => Frame::Text {
                    element: element.to_string(),
                    content: String::new(),
                },
                ElementAction::Nested(handler) => Frame::Handler {
                    element: element.to_string(),
                    handler,
                },
                ElementAction::Skip => Frame::Skip { depth: 1 },
            },
            None => {
                return Err(ImportError::xml(format!(
                    "Content after document end: <{element}>"
                )));
            }
        };
        self.stack.push(frame);
        Ok(())
    }

    fn close(&mut self, ctx: &mut LoadingContext<'_>) -> Result<(), ImportError> {
        // Never pop the root handler here; it ends in `finish`.
        if self.stack.len() < 2 {
            return Err(ImportError::xml("Unmatched end tag"));
        }
        match self.stack.pop() {
            Some(Frame::Skip { depth }) if depth > 1 => {
                self.stack.push(Frame::Skip { depth: depth - 1 });
                Ok(())
            }
            Some(Frame::Skip { .. }) => Ok(()),
            Some(Frame::Text { element, content }) => match self.stack.last_mut() {
                Some(Frame::Handler { handler, .. }) => {
                    handler.close_element(ctx, &element, &content)
                }
                _ => Ok(()),
            },
            Some(Frame::Handler { element, handler }) => {
                tracing::trace!(element = %element, "end handler");
                handler.end_handler(ctx)
            }
            None => Err(ImportError::xml("Unmatched end tag")),
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(Frame::Text { content, .. }) = self.stack.last_mut() {
            content.push_str(text);
        }
    }

    fn finish(mut self, ctx: &mut LoadingContext<'_>) -> Result<(), ImportError> {
        if self.stack.len() > 1 {
            return Err(ImportError::xml("Unexpected end of document"));
        }
        match self.stack.pop() {
            Some(Frame::Handler { handler, .. }) => handler.end_handler(ctx),
            _ => Err(ImportError::xml("Empty document")),
        }
    }
}

fn decode_name(name: &[u8]) -> Result<&str, ImportError> {
    std::str::from_utf8(name).map_err(|e| ImportError::xml(format!("Invalid tag name: {e}")))
}
