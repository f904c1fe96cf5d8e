use tower_lsp::{Client, jsonrpc};
use tracing::{debug, warn};

use crate::{
    config::{CrumbsSettings, LogFilter},
    navigator::{Command, DispatchError, Dispatcher, Event, Navigator},
};

/// JSON-RPC front end for the navigator.
pub struct CrumbsServer {
    /// The LSP client handle.
    pub(crate) client: Client,

    /// Queue into the single task that owns the navigator and its settings.
    pub(crate) dispatcher: Dispatcher,

    /// Settings loaded from disk before the client connected; client
    /// payloads are merged over these.
    pub(crate) base_settings: CrumbsSettings,

    /// Subscriber filter driven by `logging.level`. `None` when verbosity is
    /// pinned on the command line.
    pub(crate) log_filter: Option<LogFilter>,
}

impl CrumbsServer {
    /// Create a server wired to `client` and start its dispatch loop.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(
        client: Client,
        base_settings: CrumbsSettings,
        log_filter: Option<LogFilter>,
    ) -> Self {
        let (dispatcher, _loop_handle) = Dispatcher::spawn(Navigator::new(base_settings.clone()));

        Self {
            client,
            dispatcher,
            base_settings,
            log_filter,
        }
    }

    pub(crate) async fn settings_snapshot(&self) -> Result<CrumbsSettings, DispatchError> {
        self.dispatcher.settings().await
    }

    pub(crate) async fn apply_settings(
        &self,
        settings: CrumbsSettings,
    ) -> Vec<Command> {
        if let Some(filter) = &self.log_filter {
            match filter.set_level(settings.logging.level) {
                Ok(()) => debug!("log level set to {}", settings.logging.level.as_str()),
                Err(error) => warn!("failed to update log level: {error}"),
            }
        }
        match self.dispatcher.update_settings(settings).await {
            Ok(commands) => commands,
            Err(error) => {
                warn!("failed to forward settings: {error}");
                Vec::new()
            },
        }
    }

    pub(crate) async fn dispatch(
        &self,
        event: Event,
    ) -> jsonrpc::Result<Vec<Command>> {
        self.dispatcher.send(event).await.map_err(|error| {
            warn!("dropping event: {error}");
            jsonrpc::Error::internal_error()
        })
    }
}
