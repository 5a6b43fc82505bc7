//! Interactive site → gateway → stats loop

use log::debug;
use std::io::{BufRead, Write};

use crate::cli::OutputFormat;
use crate::error::{GwError, Result};
use crate::mist::{visible_sites, MistClient, MistResource, Site, StatsIndex};
use crate::output::{format_inventory, gateway_table, render_device};
use crate::ui::{create_spinner, finish_spinner, Prompt};

/// Outcome of the site selection level
enum SiteChoice {
    Site(String),
    Quit,
    /// The org has no sites at all
    NoSites,
}

/// Interactive stats viewer
///
/// Outer level picks a site, inner level picks a gateway. After a gateway's
/// stats are shown the session always returns to site selection; only a quit
/// at site selection ends it.
pub struct InteractiveSession<'a, R, W> {
    client: &'a MistClient,
    org_id: Option<&'a str>,
    format: OutputFormat,
    limit: u32,
    show_progress: bool,
    prompt: Prompt<R, W>,
}

impl<'a, R: BufRead, W: Write> InteractiveSession<'a, R, W> {
    pub fn new(
        client: &'a MistClient,
        org_id: Option<&'a str>,
        format: OutputFormat,
        limit: u32,
        prompt: Prompt<R, W>,
    ) -> Self {
        Self {
            client,
            org_id,
            format,
            limit,
            show_progress: false,
            prompt,
        }
    }

    /// Show a spinner on stderr while requests are in flight
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Consume the session and return the prompt
    pub fn into_prompt(self) -> Prompt<R, W> {
        self.prompt
    }

    /// Run until the operator quits at site selection
    pub async fn run(&mut self) -> Result<()> {
        loop {
            match self.select_site().await? {
                SiteChoice::Site(site_id) => self.browse_site(&site_id).await?,
                SiteChoice::Quit => {
                    writeln!(self.prompt.out(), "Exiting gateway stats viewer.")?;
                    return Ok(());
                }
                SiteChoice::NoSites => return Ok(()),
            }
        }
    }

    /// Outer level: pick a site from the org's list, or ask for a raw id
    async fn select_site(&mut self) -> Result<SiteChoice> {
        let Some(org_id) = self.org_id else {
            writeln!(self.prompt.out(), "org_id not found in credential file.")?;
            return Ok(match self.prompt.ask_site_id()? {
                Some(site_id) => SiteChoice::Site(site_id),
                None => SiteChoice::Quit,
            });
        };

        let spinner = create_spinner("Fetching sites...", !self.show_progress);
        let sites = self.client.list_sites(org_id).await;
        finish_spinner(spinner);
        let sites = sites?;

        if sites.is_empty() {
            writeln!(self.prompt.out(), "No sites found for org {}.", org_id)?;
            return Ok(SiteChoice::NoSites);
        }

        let sites = visible_sites(sites);
        debug!("Showing {} site(s) for org {}", sites.len(), org_id);
        let labels: Vec<String> = sites.iter().map(Site::label).collect();

        let Some(idx) = self.prompt.choose("Select a site:", &labels)? else {
            return Ok(SiteChoice::Quit);
        };

        let site_id = sites[idx].id();
        if site_id.is_empty() {
            return Err(GwError::Config("Selected site has no 'id'".to_string()));
        }
        Ok(SiteChoice::Site(site_id))
    }

    /// Inner level: list the site's gateways, pick one, show its stats
    async fn browse_site(&mut self, site_id: &str) -> Result<()> {
        writeln!(self.prompt.out())?;
        writeln!(self.prompt.out(), "Selected site_id: {}", site_id)?;
        writeln!(self.prompt.out(), "Fetching gateway inventory...")?;

        let spinner = create_spinner("Fetching gateway inventory...", !self.show_progress);
        let gateways = self.client.list_gateway_devices(site_id, self.limit).await;
        finish_spinner(spinner);
        let gateways = gateways?;

        if gateways.is_empty() {
            writeln!(self.prompt.out(), "No gateway devices found for this site.")?;
            return Ok(());
        }

        writeln!(self.prompt.out())?;
        writeln!(self.prompt.out(), "Found {} gateway device(s):", gateways.len())?;
        writeln!(self.prompt.out(), "{}", gateway_table(&gateways))?;

        let spinner = create_spinner("Fetching gateway stats...", !self.show_progress);
        let stats = self.client.list_gateway_stats(site_id, self.limit).await;
        finish_spinner(spinner);
        let index = StatsIndex::build(stats?);
        debug!("Indexed {} stats record(s) for site {}", index.len(), site_id);

        writeln!(self.prompt.out())?;
        writeln!(
            self.prompt.out(),
            "Select a gateway to view stats (or 'q' to go back to site selection)."
        )?;
        let Some(idx) = self.prompt.read_index(gateways.len())? else {
            return Ok(());
        };

        let gateway = &gateways[idx];
        writeln!(self.prompt.out())?;
        write!(self.prompt.out(), "{}", format_inventory(gateway))?;

        match index.lookup(gateway) {
            Some(stats) => {
                writeln!(self.prompt.out())?;
                write!(self.prompt.out(), "{}", render_device(stats, self.format))?;
            }
            None => writeln!(self.prompt.out(), "No stats found for selected gateway.")?,
        }

        writeln!(self.prompt.out())?;
        self.prompt
            .acknowledge("Press Enter to return to site selection...")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Cursor;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount(server: &MockServer, route: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    async fn mount_site(server: &MockServer) {
        mount(
            server,
            "/api/v1/orgs/org-1/sites",
            json!([
                {"id": "s-1", "name": "main_site"},
                {"id": "s-2", "name": "branch1"}
            ]),
        )
        .await;
        mount(
            server,
            "/api/v1/sites/s-2/devices",
            json!([
                {"id": "dev1", "name": "ssr-a", "mac": "aa", "model": "SSR120", "status": "connected"},
                {"id": "dev2", "name": "ssr-b", "mac": "bb", "model": "SSR120", "status": "disconnected"}
            ]),
        )
        .await;
        mount(
            server,
            "/api/v1/sites/s-2/stats/devices",
            json!([
                {"id": "dev1", "name": "ssr-a", "uptime": 120, "memory_stat": {"usage": 12}},
                {"mac": "bb", "name": "ssr-b-by-mac"}
            ]),
        )
        .await;
    }

    async fn run_script(
        client: &MistClient,
        org_id: Option<&str>,
        format: OutputFormat,
        script: &str,
    ) -> (Result<()>, String) {
        let prompt = Prompt::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let mut session = InteractiveSession::new(client, org_id, format, 1000, prompt);
        let result = session.run().await;
        let out = String::from_utf8(session.into_prompt().into_output()).unwrap();
        (result, out)
    }

    #[tokio::test]
    async fn test_site_then_gateway_then_back_to_sites() {
        let mock_server = MockServer::start().await;
        mount_site(&mock_server).await;
        let client = MistClient::test_client(&mock_server.uri());

        let (result, out) = run_script(&client, Some("org-1"), OutputFormat::Text, "1\n1\n\nq\n").await;

        assert!(result.is_ok());
        assert!(out.contains("  1. branch1 (s-2)"));
        assert!(!out.contains("main_site"));
        assert!(out.contains("Selected site_id: s-2"));
        assert!(out.contains("Found 2 gateway device(s):"));
        assert!(out.contains("  Name:   ssr-a"));
        assert!(out.contains("Device: ssr-a"));
        assert!(out.contains("Memory usage: 12%"));
        assert!(out.contains("Press Enter to return to site selection..."));
        assert_eq!(out.matches("Select a site:").count(), 2);
        assert!(out.ends_with("Exiting gateway stats viewer.\n"));
    }

    #[tokio::test]
    async fn test_stats_matched_by_mac_fallback() {
        let mock_server = MockServer::start().await;
        mount_site(&mock_server).await;
        let client = MistClient::test_client(&mock_server.uri());

        let (result, out) = run_script(&client, Some("org-1"), OutputFormat::Text, "1\n2\n\nq\n").await;

        assert!(result.is_ok());
        assert!(out.contains("Device: ssr-b-by-mac"));
    }

    #[tokio::test]
    async fn test_repeated_selection_is_identical() {
        let mock_server = MockServer::start().await;
        mount_site(&mock_server).await;
        let client = MistClient::test_client(&mock_server.uri());

        let (result, out) =
            run_script(&client, Some("org-1"), OutputFormat::Text, "1\n1\n\n1\n1\n\nq\n").await;

        assert!(result.is_ok());
        let passes: Vec<&str> = out.split("Select a site:").collect();
        assert_eq!(passes.len(), 4);
        assert_eq!(passes[1], passes[2]);
    }

    #[tokio::test]
    async fn test_json_detail() {
        let mock_server = MockServer::start().await;
        mount_site(&mock_server).await;
        let client = MistClient::test_client(&mock_server.uri());

        let (result, out) = run_script(&client, Some("org-1"), OutputFormat::Json, "1\n1\n\nq\n").await;

        assert!(result.is_ok());
        assert!(out.contains("\"id\": \"dev1\""));
        assert!(out.contains("\"memory_stat\": {\n    \"usage\": 12\n  }"));
        assert!(!out.contains("Device: ssr-a"));
    }

    #[tokio::test]
    async fn test_quit_at_gateway_menu_returns_to_sites() {
        let mock_server = MockServer::start().await;
        mount_site(&mock_server).await;
        let client = MistClient::test_client(&mock_server.uri());

        let (result, out) = run_script(&client, Some("org-1"), OutputFormat::Text, "1\nq\nq\n").await;

        assert!(result.is_ok());
        assert_eq!(out.matches("Select a site:").count(), 2);
        assert!(!out.contains("Selected gateway (inventory):"));
    }

    #[tokio::test]
    async fn test_no_stats_for_gateway_is_reported() {
        let mock_server = MockServer::start().await;
        mount(&mock_server, "/api/v1/orgs/org-1/sites", json!([{"id": "s-2", "name": "branch1"}])).await;
        mount(&mock_server, "/api/v1/sites/s-2/devices", json!([{"id": "dev9", "name": "lonely"}])).await;
        mount(&mock_server, "/api/v1/sites/s-2/stats/devices", json!({"results": []})).await;
        let client = MistClient::test_client(&mock_server.uri());

        let (result, out) = run_script(&client, Some("org-1"), OutputFormat::Text, "1\n1\n\nq\n").await;

        assert!(result.is_ok());
        assert!(out.contains("No stats found for selected gateway."));
    }

    #[tokio::test]
    async fn test_site_without_gateways_returns_to_sites() {
        let mock_server = MockServer::start().await;
        mount(&mock_server, "/api/v1/orgs/org-1/sites", json!([{"id": "s-3", "name": "empty"}])).await;
        mount(&mock_server, "/api/v1/sites/s-3/devices", json!([])).await;
        let client = MistClient::test_client(&mock_server.uri());

        let (result, out) = run_script(&client, Some("org-1"), OutputFormat::Text, "1\nq\n").await;

        assert!(result.is_ok());
        assert!(out.contains("No gateway devices found for this site."));
        assert_eq!(out.matches("Select a site:").count(), 2);
    }

    #[tokio::test]
    async fn test_no_sites_ends_session() {
        let mock_server = MockServer::start().await;
        mount(&mock_server, "/api/v1/orgs/org-1/sites", json!([])).await;
        let client = MistClient::test_client(&mock_server.uri());

        let (result, out) = run_script(&client, Some("org-1"), OutputFormat::Text, "").await;

        assert!(result.is_ok());
        assert!(out.contains("No sites found for org org-1."));
        assert!(!out.contains("Exiting gateway stats viewer."));
    }

    #[tokio::test]
    async fn test_numeric_site_id_is_used() {
        let mock_server = MockServer::start().await;
        mount(&mock_server, "/api/v1/orgs/org-1/sites", json!([{"id": 42, "name": "b"}])).await;
        mount(&mock_server, "/api/v1/sites/42/devices", json!([])).await;
        let client = MistClient::test_client(&mock_server.uri());

        let (result, out) = run_script(&client, Some("org-1"), OutputFormat::Text, "1\nq\n").await;

        assert!(result.is_ok());
        assert!(out.contains("  1. b (42)"));
        assert!(out.contains("Selected site_id: 42"));
        assert!(out.contains("No gateway devices found for this site."));
    }

    #[tokio::test]
    async fn test_main_site_kept_when_alone() {
        let mock_server = MockServer::start().await;
        mount(&mock_server, "/api/v1/orgs/org-1/sites", json!([{"id": "s-1", "name": "main_site"}])).await;
        let client = MistClient::test_client(&mock_server.uri());

        let (result, out) = run_script(&client, Some("org-1"), OutputFormat::Text, "q\n").await;

        assert!(result.is_ok());
        assert!(out.contains("  1. main_site (s-1)"));
    }

    #[tokio::test]
    async fn test_site_without_id_is_config_error() {
        let mock_server = MockServer::start().await;
        mount(&mock_server, "/api/v1/orgs/org-1/sites", json!([{"name": "broken"}])).await;
        let client = MistClient::test_client(&mock_server.uri());

        let (result, _) = run_script(&client, Some("org-1"), OutputFormat::Text, "1\n").await;

        assert!(matches!(result, Err(GwError::Config(_))));
    }

    #[tokio::test]
    async fn test_without_org_prompts_for_site_id() {
        let mock_server = MockServer::start().await;
        mount_site(&mock_server).await;
        let client = MistClient::test_client(&mock_server.uri());

        let (result, out) = run_script(&client, None, OutputFormat::Text, "s-2\n1\n\nq\n").await;

        assert!(result.is_ok());
        assert!(out.contains("org_id not found in credential file."));
        assert!(out.contains("Selected site_id: s-2"));
        assert!(out.contains("Device: ssr-a"));
        assert!(out.ends_with("Exiting gateway stats viewer.\n"));
    }

    #[tokio::test]
    async fn test_transport_error_is_fatal() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/orgs/org-1/sites"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&mock_server)
            .await;
        let client = MistClient::test_client(&mock_server.uri());

        let (result, _) = run_script(&client, Some("org-1"), OutputFormat::Text, "1\n").await;

        assert!(matches!(result, Err(GwError::Api { status: 502, .. })));
    }
}
