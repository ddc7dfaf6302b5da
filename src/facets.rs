//! Entry sources
//!
//! Loads the list of selectable entries from a JSON file. Two shapes are
//! accepted: a plain array of entries, or a facets document with tag counts
//! and per-group label counts as produced by a dataset view.

mod facets_types;

pub use facets_types::{FacetsDocument, LabelCount, LabelGroup, TagCount};

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::entry::Entry;
use crate::error::CheckgridError;
use crate::theme;

/// Entries keyed by a count (samples carrying the tag or label)
pub type CountEntry = Entry<u64>;

/// Read and parse an entries file
pub fn load_entries(path: &Path) -> Result<Vec<CountEntry>, CheckgridError> {
    let contents = fs::read_to_string(path)?;

    #[cfg(debug_assertions)]
    log::debug!("Read entries file {:?}, {} bytes", path, contents.len());

    parse_entries(&contents)
}

/// Parse an entries document
///
/// The shape is picked from the top-level value first so that errors from
/// inside an entry (a bad color, a missing field) reach the user intact.
pub fn parse_entries(contents: &str) -> Result<Vec<CountEntry>, CheckgridError> {
    let value: Value = parse_json(contents)?;

    match value {
        Value::Array(items) if items.len() == 1 && is_facets_object(&items[0]) => {
            let mut documents: Vec<FacetsDocument> = parse_json(contents)?;
            Ok(documents.pop().map(flatten_facets).unwrap_or_default())
        }
        Value::Array(_) => parse_json(contents),
        Value::Object(_) => Ok(flatten_facets(parse_json(contents)?)),
        other => Err(CheckgridError::InvalidEntries(format!(
            "expected an array of entries or a facets object, found {}",
            json_kind(&other)
        ))),
    }
}

fn parse_json<T: DeserializeOwned>(contents: &str) -> Result<T, CheckgridError> {
    serde_json::from_str(contents).map_err(|e| CheckgridError::InvalidEntries(e.to_string()))
}

fn is_facets_object(value: &Value) -> bool {
    value.as_object().is_some_and(|object| {
        !object.contains_key("name") && (object.contains_key("tags") || object.contains_key("labels"))
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Turn facets into entries: tags first, then `group:label` per group
///
/// Colors rotate through the accent list. Zero counts are disabled since
/// there is nothing to select. Null tags and labels name no selectable value
/// and are skipped.
pub fn flatten_facets(document: FacetsDocument) -> Vec<CountEntry> {
    let tags = document
        .tags
        .into_iter()
        .filter_map(|tag| Some((tag.name?, tag.count)));

    let labels = document.labels.into_iter().flat_map(|group| {
        let group_name = group.group;
        group.labels.into_iter().filter_map(move |label| {
            Some((format!("{}:{}", group_name, label.label?), label.count))
        })
    });

    tags.chain(labels)
        .enumerate()
        .map(|(i, (name, count))| {
            let colors = theme::grid::ENTRY_COLORS;
            Entry::new(name, count)
                .color(colors[i % colors.len()])
                .disabled(count == 0)
        })
        .collect()
}

/// Mark the named entries selected; returns names that matched nothing
pub fn preselect<'n>(entries: &mut [CountEntry], names: &'n [String]) -> Vec<&'n str> {
    let mut unknown = Vec::new();
    for name in names {
        let mut found = false;
        for entry in entries.iter_mut().filter(|e| &e.name == name) {
            if !entry.disabled {
                entry.selected = true;
            }
            found = true;
        }
        if !found {
            unknown.push(name.as_str());
        }
    }
    unknown
}
