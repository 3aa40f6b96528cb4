use crate::{client::EolClient, context::RequestContext};
use endoflife_core::{Result, UriListResponse};
use tracing::debug;

impl EolClient {
    /// List the API's top-level resources
    pub async fn index(&self, ctx: &RequestContext) -> Result<UriListResponse> {
        let response: UriListResponse = self.get(ctx, "/").await?;
        debug!(total = response.total, "Fetched API index");
        Ok(response)
    }
}
