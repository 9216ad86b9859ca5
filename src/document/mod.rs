//! Loading XRNA documents and building the semantic view over them.

pub(crate) mod model;

use crate::foundation::error::{XrnaError, XrnaResult};
use crate::document::model::DocumentDef;
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse a document from a JSON reader.
pub fn parse_document<R: std::io::Read>(r: R) -> XrnaResult<Value> {
    serde_json::from_reader(r).map_err(|e| XrnaError::input(format!("parse document JSON: {e}")))
}

/// Parse a document from a JSON file on disk.
pub fn read_document(path: impl AsRef<Path>) -> XrnaResult<Value> {
    let path = path.as_ref();
    let f = File::open(path)
        .map_err(|e| XrnaError::input(format!("open document '{}': {e}", path.display())))?;
    parse_document(BufReader::new(f))
}

impl DocumentDef {
    /// Build the lenient view. Only a root that is not an object is rejected.
    pub(crate) fn from_value(document: &Value) -> XrnaResult<Self> {
        if !document.is_object() {
            return Err(XrnaError::input("document root must be a JSON object"));
        }
        Self::deserialize(document).map_err(|e| XrnaError::input(format!("read document: {e}")))
    }
}
