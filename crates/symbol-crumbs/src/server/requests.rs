//! Custom `symbolCrumbs/*` requests.

use serde::{Deserialize, Serialize};
use tower_lsp::{
    jsonrpc::Result,
    lsp_types::{DocumentSymbolResponse, Position, Url, notification::Notification},
};
use tracing::debug;

use crate::{
    navigator::{Command, Event},
    server::state::CrumbsServer,
};

pub const OPEN_METHOD: &str = "symbolCrumbs/open";
pub const TOGGLE_METHOD: &str = "symbolCrumbs/toggle";
pub const CLOSE_METHOD: &str = "symbolCrumbs/close";
pub const EVENT_METHOD: &str = "symbolCrumbs/event";

/// The editor's `documentSymbol` result for the buffer plus its cursor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenParams {
    /// Source document, for logging only.
    #[serde(default)]
    pub uri: Option<Url>,
    pub symbols: DocumentSymbolResponse,
    pub cursor: Position,
}

/// Server-initiated redraw, sent when settings change under an open panel.
#[derive(Debug)]
pub enum Redraw {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedrawParams {
    pub commands: Vec<Command>,
}

impl Notification for Redraw {
    type Params = RedrawParams;

    const METHOD: &'static str = "symbolCrumbs/redraw";
}

impl CrumbsServer {
    pub async fn open(
        &self,
        params: OpenParams,
    ) -> Result<Vec<Command>> {
        if let Some(uri) = &params.uri {
            debug!("open requested for {uri}");
        }
        self.dispatch(Event::Open {
            symbols: params.symbols,
            cursor: params.cursor,
        })
        .await
    }

    pub async fn toggle(
        &self,
        params: OpenParams,
    ) -> Result<Vec<Command>> {
        self.dispatch(Event::Toggle {
            symbols: params.symbols,
            cursor: params.cursor,
        })
        .await
    }

    pub async fn close(&self) -> Result<Vec<Command>> {
        self.dispatch(Event::Close).await
    }

    pub async fn event(
        &self,
        event: Event,
    ) -> Result<Vec<Command>> {
        self.dispatch(event).await
    }
}
