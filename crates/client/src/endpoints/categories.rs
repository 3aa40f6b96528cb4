use super::required_segment;
use crate::{client::EolClient, context::RequestContext};
use endoflife_core::{ProductListResponse, Result, UriListResponse};
use tracing::debug;

impl EolClient {
    /// List product categories
    pub async fn categories(&self, ctx: &RequestContext) -> Result<UriListResponse> {
        let response: UriListResponse = self.get(ctx, "/categories").await?;
        debug!(total = response.total, "Fetched categories");
        Ok(response)
    }

    /// List the products in one category
    pub async fn category_products(
        &self,
        ctx: &RequestContext,
        category: &str,
    ) -> Result<ProductListResponse> {
        let name = required_segment(category, "category name")?;
        let path = format!("/categories/{name}");

        let response: ProductListResponse = self.get(ctx, &path).await?;
        debug!(category = %category, total = response.total, "Fetched category products");
        Ok(response)
    }
}
