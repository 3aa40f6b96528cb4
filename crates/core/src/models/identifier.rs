use super::response::{ListResponse, Uri};
use serde::{Deserialize, Serialize};

/// Identifier a product is known by (purl, cpe, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Maps one identifier to the product it names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierMapping {
    pub identifier: String,
    pub product: Uri,
}

pub type IdentifierListResponse = ListResponse<IdentifierMapping>;
