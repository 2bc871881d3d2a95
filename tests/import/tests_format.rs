//! Reading design files by extension.

use std::io::Write;

use rasaero::{ImportError, ImportOptions, detect_format, read_design_file};

use crate::helpers::design_fixtures::{TUBE_AND_FIN_CAN, document};

#[test]
fn test_read_cdx1_file() {
    let mut file = tempfile::Builder::new().suffix(".CDX1").tempfile().unwrap();
    file.write_all(document(TUBE_AND_FIN_CAN).as_bytes()).unwrap();

    let design = read_design_file(file.path(), &ImportOptions::default()).unwrap();
    assert!(design.rocket().is_some());
    assert_eq!(design.tree.len(), 6);
}

#[test]
fn test_cdx1_without_rasaero_root_rejected() {
    let mut file = tempfile::Builder::new().suffix(".cdx1").tempfile().unwrap();
    file.write_all(b"<openrocket><rocket/></openrocket>").unwrap();

    let err = read_design_file(file.path(), &ImportOptions::default()).unwrap_err();
    assert!(matches!(err, ImportError::Unsupported(_)));
}

#[test]
fn test_detect_format_extension() {
    let format = detect_format(std::path::Path::new("designs/Sprint.CDX1")).unwrap();
    assert_eq!(format.extensions(), &["CDX1"]);
    assert!(detect_format(std::path::Path::new("designs/Sprint.ork")).is_none());
}
