use crate::document::model::DocumentDef;
use crate::foundation::error::XrnaResult;
use crate::report::summary::ValidationReport;
use crate::report::violation::Violation;
use crate::schema::structural::{JsonSchemaCheck, StructuralCheck};
use crate::semantic::classes::ClassReporting;
use crate::semantic::semantic_violations;
use serde_json::Value;
use std::path::PathBuf;

/// Options for building an [`XrnaValidator`].
#[derive(Debug, Clone)]
pub struct ValidatorOpts {
    /// Root schema file.
    pub schema_path: PathBuf,
    /// Directory that `$ref`s in the root schema resolve against. Nothing outside it is loaded.
    pub sections_dir: PathBuf,
    /// Enforce the `format` keyword.
    pub validate_formats: bool,
    pub class_reporting: ClassReporting,
}

impl Default for ValidatorOpts {
    fn default() -> Self {
        Self {
            schema_path: PathBuf::from("schemas/xrna-schema.json"),
            sections_dir: PathBuf::from("schemas/sections"),
            validate_formats: true,
            class_reporting: ClassReporting::Distinct,
        }
    }
}

/// Runs the structural check and every semantic rule over a document in one pass.
///
/// A pass never stops at the first finding: all checks run to completion and every
/// violation ends up in the returned [`ValidationReport`]. The validator holds no state
/// between passes, so validating the same document twice gives the same report.
pub struct XrnaValidator<S = JsonSchemaCheck> {
    structural: S,
    class_reporting: ClassReporting,
}

impl XrnaValidator<JsonSchemaCheck> {
    pub fn from_opts(opts: &ValidatorOpts) -> XrnaResult<Self> {
        let structural =
            JsonSchemaCheck::load(&opts.schema_path, &opts.sections_dir, opts.validate_formats)?;
        Ok(Self::with_structural(structural, opts))
    }
}

impl<S: StructuralCheck> XrnaValidator<S> {
    /// Use `structural` in place of the schema-file check. Schema paths in `opts` are ignored.
    pub fn with_structural(structural: S, opts: &ValidatorOpts) -> Self {
        Self {
            structural,
            class_reporting: opts.class_reporting,
        }
    }

    /// Validate one parsed document.
    ///
    /// Fails only when the root is not a JSON object; rule violations are reported in the
    /// returned report.
    #[tracing::instrument(skip_all)]
    pub fn validate(&self, document: &Value) -> XrnaResult<ValidationReport> {
        let view = DocumentDef::from_value(document)?;

        tracing::debug!(state = "structural", "validation pass");
        let mut violations: Vec<Violation> = self.structural.violations(document).collect();
        let structural_count = violations.len();

        tracing::debug!(state = "semantic", structural_count, "validation pass");
        violations.extend(semantic_violations(&view, self.class_reporting));

        let report = ValidationReport::from_violations(violations);
        tracing::debug!(
            state = "aggregated",
            outcome = ?report.outcome(),
            total = report.violations().len(),
            summary = %report.summary(),
            "validation pass"
        );
        Ok(report)
    }
}
