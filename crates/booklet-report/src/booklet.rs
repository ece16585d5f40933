//! Booklet input model

use crate::values::non_empty_object;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored booklet as read from JSON
///
/// Only the naming fields and the per-category tab data are used; any other
/// fields in the stored document are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookletData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_title: Option<String>,
    #[serde(default)]
    pub organization_name: Option<String>,
    /// Category key to arbitrarily nested tab data
    #[serde(default, alias = "data")]
    pub tabs: Map<String, Value>,
}

impl BookletData {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Name shown on the cover page
    ///
    /// Display title, then organization name, then booklet name; blank
    /// values are skipped. Falls back to `default`.
    pub fn display_name<'a>(&'a self, default: &'a str) -> &'a str {
        [&self.display_title, &self.organization_name, &self.name]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .map(str::trim)
            .find(|name| !name.is_empty())
            .unwrap_or(default)
    }

    /// Tab data for a category, if it is a non-empty object
    pub fn tab(&self, key: &str) -> Option<&Value> {
        self.tabs
            .get(key)
            .filter(|value| non_empty_object(value).is_some())
    }
}
