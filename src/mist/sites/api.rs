//! Site API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::mist::client::segment;
use crate::mist::MistClient;

use super::models::Site;

impl MistClient {
    /// List all sites of an organization
    pub async fn list_sites(&self, org_id: &str) -> Result<Vec<Site>> {
        let path = format!("/orgs/{}/sites?limit={}", segment(org_id), api::SITE_PAGE_LIMIT);
        debug!("Fetching sites for org {}", org_id);
        self.fetch_list(&path, "sites").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GwError;
    use crate::mist::MistResource;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_sites_success() {
        let mock_server = MockServer::start().await;
        let client = MistClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v1/orgs/org-1/sites"))
            .and(query_param("limit", "1000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "s-1", "name": "main_site", "timezone": "UTC"},
                {"id": "s-2", "name": "branch1"}
            ])))
            .mount(&mock_server)
            .await;

        let sites = client.list_sites("org-1").await.unwrap();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].id(), "s-1");
        assert_eq!(sites[1].name(), "branch1");
        assert_eq!(sites[0].raw()["timezone"], "UTC");
    }

    #[tokio::test]
    async fn test_list_sites_empty() {
        let mock_server = MockServer::start().await;
        let client = MistClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v1/orgs/org-1/sites"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"results": []})))
            .mount(&mock_server)
            .await;

        assert!(client.list_sites("org-1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_sites_forbidden() {
        let mock_server = MockServer::start().await;
        let client = MistClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v1/orgs/org-1/sites"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        match client.list_sites("org-1").await.unwrap_err() {
            GwError::Api { status, .. } => assert_eq!(status, 403),
            other => panic!("Expected GwError::Api, got {:?}", other),
        }
    }
}
