//! Import tests
//!
//! Tests for:
//! - Fin can construction, accumulation and shoulder synthesis
//! - Whole document import
//! - Import options files
//! - Format detection

pub mod tests_document;
pub mod tests_fin_can;
pub mod tests_format;
