use super::required_segment;
use crate::{client::EolClient, context::RequestContext};
use endoflife_core::{IdentifierListResponse, Result, UriListResponse};
use tracing::debug;

impl EolClient {
    /// List identifier types (purl, cpe, ...)
    pub async fn identifiers(&self, ctx: &RequestContext) -> Result<UriListResponse> {
        let response: UriListResponse = self.get(ctx, "/identifiers").await?;
        debug!(total = response.total, "Fetched identifier types");
        Ok(response)
    }

    /// List every identifier of one type with the product it maps to
    pub async fn identifier_details(
        &self,
        ctx: &RequestContext,
        identifier_type: &str,
    ) -> Result<IdentifierListResponse> {
        let kind = required_segment(identifier_type, "identifier type")?;
        let path = format!("/identifiers/{kind}");

        let response: IdentifierListResponse = self.get(ctx, &path).await?;
        debug!(
            identifier_type = %identifier_type,
            total = response.total,
            "Fetched identifiers"
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;

    #[tokio::test]
    async fn test_identifiers() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/identifiers")
            .with_status(200)
            .with_body(
                json!({
                    "schema_version": "1.2.0",
                    "total": 2,
                    "result": [
                        {"name": "cpe", "uri": "/api/v1/identifiers/cpe"},
                        {"name": "purl", "uri": "/api/v1/identifiers/purl"}
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = EolClient::test_client(&server.url());
        let identifiers = client
            .identifiers(&RequestContext::background())
            .await
            .unwrap();

        assert_eq!(identifiers.total, 2);
        assert_eq!(identifiers.result[1].name, "purl");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_identifier_details() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/identifiers/purl")
            .with_status(200)
            .with_body(
                json!({
                    "schema_version": "1.2.0",
                    "total": 1,
                    "result": [{
                        "identifier": "pkg:pypi/django",
                        "product": {"name": "django", "uri": "/api/v1/products/django"}
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = EolClient::test_client(&server.url());
        let details = client
            .identifier_details(&RequestContext::background(), "purl")
            .await
            .unwrap();

        assert_eq!(details.result[0].identifier, "pkg:pypi/django");
        assert_eq!(details.result[0].product.name, "django");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_identifier_details_empty_type() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = EolClient::test_client(&server.url());
        let err = client
            .identifier_details(&RequestContext::background(), "")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "identifier type is required");
        mock.assert_async().await;
    }
}
