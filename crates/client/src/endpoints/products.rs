use super::required_segment;
use crate::{client::EolClient, context::RequestContext};
use endoflife_core::{
    constants::LATEST_RELEASE, FullProductListResponse, ProductListResponse,
    ProductReleaseResponse, ProductResponse, Result,
};
use tracing::debug;

impl EolClient {
    /// List every product as a summary
    pub async fn products(&self, ctx: &RequestContext) -> Result<ProductListResponse> {
        let response: ProductListResponse = self.get(ctx, "/products").await?;
        debug!(total = response.total, "Fetched product list");
        Ok(response)
    }

    /// List every product with all of its release cycles
    pub async fn products_full(&self, ctx: &RequestContext) -> Result<FullProductListResponse> {
        let response: FullProductListResponse = self.get(ctx, "/products/full").await?;
        debug!(total = response.total, "Fetched full product list");
        Ok(response)
    }

    /// Fetch one product with all of its release cycles
    pub async fn product(&self, ctx: &RequestContext, product: &str) -> Result<ProductResponse> {
        let name = required_segment(product, "product name")?;
        let path = format!("/products/{name}");

        let response: ProductResponse = self.get(ctx, &path).await?;
        debug!(
            product = %product,
            releases = response.result.releases.len(),
            "Fetched product"
        );
        Ok(response)
    }

    /// Fetch one release cycle of a product
    pub async fn release(
        &self,
        ctx: &RequestContext,
        product: &str,
        release: &str,
    ) -> Result<ProductReleaseResponse> {
        let name = required_segment(product, "product name")?;
        let release_name = required_segment(release, "release name")?;
        let path = format!("/products/{name}/releases/{release_name}");

        let response: ProductReleaseResponse = self.get(ctx, &path).await?;
        debug!(product = %product, release = %release, "Fetched release");
        Ok(response)
    }

    /// Fetch the newest release cycle of a product
    pub async fn latest_release(
        &self,
        ctx: &RequestContext,
        product: &str,
    ) -> Result<ProductReleaseResponse> {
        let name = required_segment(product, "product name")?;
        let path = format!("/products/{name}/releases/{LATEST_RELEASE}");

        let response: ProductReleaseResponse = self.get(ctx, &path).await?;
        debug!(
            product = %product,
            release = %response.result.name,
            "Fetched latest release"
        );
        Ok(response)
    }
}
