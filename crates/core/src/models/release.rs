use super::response::ItemResponse;
use crate::types::Date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Latest patch version published for a release cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVersion {
    pub name: String,
    #[serde(default)]
    pub date: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// One release cycle of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRelease {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codename: Option<String>,
    pub label: String,
    #[serde(default)]
    pub release_date: Date,
    #[serde(default)]
    pub is_lts: bool,
    #[serde(default)]
    pub lts_from: Date,
    /// End of active support
    #[serde(default)]
    pub is_eoas: bool,
    #[serde(default)]
    pub eoas_from: Date,
    #[serde(default)]
    pub is_eol: bool,
    #[serde(default)]
    pub eol_from: Date,
    #[serde(default)]
    pub is_discontinued: bool,
    #[serde(default)]
    pub discontinued_from: Date,
    /// End of extended support, only reported by products that sell it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_eoes: Option<bool>,
    #[serde(default)]
    pub eoes_from: Date,
    #[serde(default)]
    pub is_maintained: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<ProductVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<HashMap<String, serde_json::Value>>,
}

impl ProductRelease {
    /// Whether the release has reached end-of-life on the given day.
    ///
    /// Uses the end-of-life date when the API provides one and falls back to
    /// the `isEol` flag otherwise.
    pub fn is_eol_on(&self, day: NaiveDate) -> bool {
        match self.eol_from.as_naive_date() {
            Some(eol) => eol <= day,
            None => self.is_eol,
        }
    }

    /// Latest version name, if the API reports one
    pub fn latest_version(&self) -> Option<&str> {
        self.latest.as_ref().map(|latest| latest.name.as_str())
    }
}

pub type ProductReleaseResponse = ItemResponse<ProductRelease>;
