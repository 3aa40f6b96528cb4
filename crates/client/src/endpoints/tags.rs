use super::required_segment;
use crate::{client::EolClient, context::RequestContext};
use endoflife_core::{ProductListResponse, Result, UriListResponse};
use tracing::debug;

impl EolClient {
    /// List product tags
    pub async fn tags(&self, ctx: &RequestContext) -> Result<UriListResponse> {
        let response: UriListResponse = self.get(ctx, "/tags").await?;
        debug!(total = response.total, "Fetched tags");
        Ok(response)
    }

    /// List the products carrying one tag
    pub async fn tag_products(&self, ctx: &RequestContext, tag: &str) -> Result<ProductListResponse> {
        let name = required_segment(tag, "tag name")?;
        let path = format!("/tags/{name}");

        let response: ProductListResponse = self.get(ctx, &path).await?;
        debug!(tag = %tag, total = response.total, "Fetched tag products");
        Ok(response)
    }
}
