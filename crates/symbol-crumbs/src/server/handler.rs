use tower_lsp::{LanguageServer, jsonrpc::Result, lsp_types::*};
use tracing::{debug, info, warn};

use crate::server::{
    requests::{Redraw, RedrawParams},
    state::CrumbsServer,
};

#[tower_lsp::async_trait]
impl LanguageServer for CrumbsServer {
    async fn initialize(
        &self,
        params: InitializeParams,
    ) -> Result<InitializeResult> {
        info!("Initializing symbol-crumbs...");

        let initial_settings = match params.initialization_options.as_ref() {
            Some(payload) => self.base_settings.merged_with_payload(payload),
            None => self.base_settings.clone(),
        };
        self.apply_settings(initial_settings).await;

        Ok(InitializeResult {
            capabilities: ServerCapabilities::default(),
            server_info: Some(ServerInfo {
                name: "symbol-crumbs".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(
        &self,
        _: InitializedParams,
    ) {
        info!("symbol-crumbs initialized");
    }

    async fn did_change_configuration(
        &self,
        params: DidChangeConfigurationParams,
    ) {
        let current = match self.settings_snapshot().await {
            Ok(current) => current,
            Err(error) => {
                warn!("ignoring configuration change: {error}");
                return;
            },
        };
        let merged = current.merged_with_payload(&params.settings);
        if merged == current {
            return;
        }

        let commands = self.apply_settings(merged).await;
        info!("Applied updated symbol-crumbs settings");

        // An open panel has no pending request to answer, so push the redraw.
        if !commands.is_empty() {
            debug!("pushing {} redraw commands", commands.len());
            self.client
                .send_notification::<Redraw>(RedrawParams {
                    commands,
                })
                .await;
        }
    }

    async fn shutdown(&self) -> Result<()> {
        info!("Shutting down symbol-crumbs");
        Ok(())
    }
}
