use serde::Deserialize;

/// Tag and label counts for a dataset view
///
/// Dataset tooling emits this as `_id`-keyed groups, often wrapped in a
/// one-element array; both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FacetsDocument {
    #[serde(default)]
    pub tags: Vec<TagCount>,
    #[serde(default)]
    pub labels: Vec<LabelGroup>,
}

/// `name` is null for the bucket of samples carrying no tag
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TagCount {
    #[serde(alias = "_id")]
    pub name: Option<String>,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LabelGroup {
    #[serde(alias = "_id")]
    pub group: String,
    pub labels: Vec<LabelCount>,
}

/// `label` is null when the label object has no `label` field
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LabelCount {
    pub label: Option<String>,
    pub count: u64,
}
