//! Validation of XRNA (RNA 2D JSON) secondary-structure documents.
//!
//! A document is checked in one pass on two layers:
//!
//! - structural conformance to a modular JSON Schema whose cross-file references resolve only
//!   inside a local sections directory;
//! - domain rules the schema cannot express: unique, gap-free residue indices per molecule,
//!   base pairs and labels that reference declared residues, and class references that are
//!   declared in the top-level class registry.
//!
//! Every violation from both layers is collected into a [`ValidationReport`] together with a
//! count per rule kind.
#![forbid(unsafe_code)]

mod document;
mod foundation;
mod report;
mod schema;
mod semantic;
mod validate;

pub use crate::document::{parse_document, read_document};
pub use crate::foundation::error::{XrnaError, XrnaResult};
pub use crate::report::summary::{Outcome, ValidationReport};
pub use crate::report::violation::{RuleKind, SemanticRule, Violation};
pub use crate::schema::retrieve::{LocalSchemaRetriever, RetrieveError};
pub use crate::schema::structural::{JsonSchemaCheck, NoStructuralCheck, StructuralCheck};
pub use crate::semantic::classes::ClassReporting;
pub use crate::validate::{ValidatorOpts, XrnaValidator};
