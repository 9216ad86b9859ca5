//! Read-only view of an XRNA document, as seen by the semantic checks.
//!
//! Every field is lenient: a value of the wrong JSON type reads as absent (or as an empty
//! list) instead of failing deserialization. Reporting such values is the structural
//! check's job; the semantic checks only look at what is well-typed. List entries keep
//! their original positions (`None` for entries that are not usable) so violation paths
//! point at the right element. Struct-shaped entries are read only from JSON objects.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DocumentDef {
    #[serde(default, deserialize_with = "object_list")]
    pub(crate) rna_complexes: Vec<Option<RnaComplexDef>>,
    /// Top-level class registry.
    #[serde(default, deserialize_with = "object_list")]
    pub(crate) classes: Vec<Option<ClassDeclDef>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RnaComplexDef {
    #[serde(default, deserialize_with = "object_list")]
    pub(crate) rna_molecules: Vec<Option<RnaMoleculeDef>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RnaMoleculeDef {
    #[serde(default, deserialize_with = "object_list")]
    pub(crate) sequence: Vec<Option<ResidueDef>>,
    #[serde(default, deserialize_with = "object_list")]
    pub(crate) base_pairs: Vec<Option<BasePairDef>>,
    #[serde(default, deserialize_with = "object_list")]
    pub(crate) labels: Vec<Option<LabelDef>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub(crate) classes_for_sequence: Vec<Option<String>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub(crate) classes_for_labels: Vec<Option<String>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub(crate) classes_for_base_pairs: Vec<Option<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResidueDef {
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) residue_index: Option<i64>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub(crate) classes: Vec<Option<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BasePairDef {
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) residue_index1: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) residue_index2: Option<i64>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub(crate) classes: Vec<Option<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LabelDef {
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) residue_index: Option<i64>,
    #[serde(default, deserialize_with = "object")]
    pub(crate) label_line: Option<ClassedDef>,
    #[serde(default, deserialize_with = "object")]
    pub(crate) label_content: Option<ClassedDef>,
}

/// Any object whose only interesting field is its class list.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ClassedDef {
    #[serde(default, deserialize_with = "lenient_list")]
    pub(crate) classes: Vec<Option<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ClassDeclDef {
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) name: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(v).ok())
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(from_object(Value::deserialize(deserializer)?))
}

fn object_list<'de, D, T>(deserializer: D) -> Result<Vec<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items.into_iter().map(from_object).collect()),
        _ => Ok(Vec::new()),
    }
}

// A JSON array would otherwise fill a derived struct positionally.
fn from_object<T: DeserializeOwned>(v: Value) -> Option<T> {
    match v {
        Value::Object(_) => serde_json::from_value(v).ok(),
        _ => None,
    }
}
