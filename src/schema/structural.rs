use crate::foundation::error::{XrnaError, XrnaResult};
use crate::report::path::pointer_to_location;
use crate::report::violation::Violation;
use crate::schema::retrieve::LocalSchemaRetriever;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Schema conformance check run at the start of every validation pass.
pub trait StructuralCheck {
    /// All schema violations of `document`, in the order the checker finds them.
    fn violations<'a>(&'a self, document: &'a Value) -> impl Iterator<Item = Violation> + 'a;
}

/// Draft 4 JSON Schema check whose `$ref`s resolve through a [`LocalSchemaRetriever`].
pub struct JsonSchemaCheck {
    validator: jsonschema::Validator,
}

impl JsonSchemaCheck {
    /// Load the root schema at `schema_path` and compile it.
    ///
    /// A root schema without an `id` is anchored at the retriever's prefix, so relative
    /// references such as `"rna-molecule.json"` resolve inside the sections directory.
    pub fn load(
        schema_path: impl AsRef<Path>,
        sections_dir: impl AsRef<Path>,
        validate_formats: bool,
    ) -> XrnaResult<Self> {
        let schema_path = schema_path.as_ref();
        let f = File::open(schema_path).map_err(|e| {
            XrnaError::schema(format!("open schema '{}': {e}", schema_path.display()))
        })?;
        let schema: Value = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            XrnaError::schema(format!("parse schema '{}': {e}", schema_path.display()))
        })?;

        let sections_dir = sections_dir.as_ref();
        let retriever = LocalSchemaRetriever::new(sections_dir).map_err(|e| {
            XrnaError::schema(format!(
                "resolve sections directory '{}': {e}",
                sections_dir.display()
            ))
        })?;
        Self::compile(schema, retriever, validate_formats)
    }

    pub fn compile(
        mut schema: Value,
        retriever: LocalSchemaRetriever,
        validate_formats: bool,
    ) -> XrnaResult<Self> {
        let Some(root) = schema.as_object_mut() else {
            return Err(XrnaError::schema("root schema must be a JSON object"));
        };
        root.entry("id")
            .or_insert_with(|| Value::String(retriever.prefix().to_owned()));

        let validator = jsonschema::draft4::options()
            .should_validate_formats(validate_formats)
            .with_retriever(retriever)
            .build(&schema)
            .map_err(|e| XrnaError::schema(format!("compile schema: {e}")))?;
        Ok(Self { validator })
    }
}

impl StructuralCheck for JsonSchemaCheck {
    fn violations<'a>(&'a self, document: &'a Value) -> impl Iterator<Item = Violation> + 'a {
        self.validator.iter_errors(document).map(|err| {
            let schema_path = err.schema_path.to_string();
            Violation::structural(
                schema_keyword(&schema_path),
                pointer_to_location(&err.instance_path.to_string()),
                err.to_string(),
            )
        })
    }
}

/// Skips schema conformance entirely; only the semantic rules run.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStructuralCheck;

impl StructuralCheck for NoStructuralCheck {
    fn violations<'a>(&'a self, _document: &'a Value) -> impl Iterator<Item = Violation> + 'a {
        std::iter::empty()
    }
}

/// The failing keyword is the last segment of the schema path (`/properties/x/type` -> `type`).
fn schema_keyword(schema_path: &str) -> String {
    schema_path
        .rsplit('/')
        .find(|seg| !seg.is_empty() && !seg.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or("schema")
        .replace("~1", "/")
        .replace("~0", "~")
}
