use super::identifier::Identifier;
use super::release::ProductRelease;
use super::response::{ItemResponse, ListResponse};
use serde::{Deserialize, Serialize};

/// Product entry as listed by `/products`, `/categories/{name}` and `/tags/{name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub uri: String,
}

/// Product-specific wording for the lifecycle phases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductLabels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eoas: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discontinued: Option<String>,
    pub eol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eoes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub html: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_policy: Option<String>,
}

/// Full product record including every release cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_command: Option<String>,
    #[serde(default)]
    pub identifiers: Vec<Identifier>,
    pub labels: ProductLabels,
    pub links: ProductLinks,
    #[serde(default)]
    pub releases: Vec<ProductRelease>,
}

impl ProductDetails {
    /// Find a release cycle by name
    pub fn release(&self, name: &str) -> Option<&ProductRelease> {
        self.releases.iter().find(|release| release.name == name)
    }

    /// Release cycle with the most recent release date.
    ///
    /// Releases without a release date only win when no release has one.
    pub fn latest_release(&self) -> Option<&ProductRelease> {
        self.releases
            .iter()
            .rev()
            .max_by_key(|release| release.release_date)
    }

    /// Release cycles still receiving maintenance
    pub fn maintained_releases(&self) -> impl Iterator<Item = &ProductRelease> {
        self.releases.iter().filter(|release| release.is_maintained)
    }
}

pub type ProductListResponse = ListResponse<ProductSummary>;
pub type FullProductListResponse = ListResponse<ProductDetails>;
pub type ProductResponse = ItemResponse<ProductDetails>;
