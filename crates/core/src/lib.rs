//! Core types for the endoflife.date client: the error taxonomy, the
//! optional calendar [`Date`], and the response models.

pub mod constants;
pub mod error;
pub mod models;
pub mod types;

pub use error::{Error, ErrorBuilder, ErrorCategory, Result};
pub use types::{Date, DateParseError};

// Re-export commonly used models for convenience
pub use models::{
    identifier::{Identifier, IdentifierListResponse, IdentifierMapping},
    product::{
        FullProductListResponse, ProductDetails, ProductLabels, ProductLinks,
        ProductListResponse, ProductResponse, ProductSummary,
    },
    release::{ProductRelease, ProductReleaseResponse, ProductVersion},
    response::{ItemResponse, ListResponse, Uri, UriListResponse},
};
