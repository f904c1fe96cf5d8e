pub(crate) mod handler;
pub mod requests;
pub(crate) mod state;

use tower_lsp::{ClientSocket, LspService};

pub use requests::{CLOSE_METHOD, EVENT_METHOD, OPEN_METHOD, OpenParams, Redraw, RedrawParams, TOGGLE_METHOD};
pub use state::CrumbsServer;

use crate::config::{CrumbsSettings, LogFilter};

/// Build the service with the custom `symbolCrumbs/*` methods registered.
///
/// With a `log_filter`, client `logging.level` settings retune the subscriber.
pub fn build_service(
    base_settings: CrumbsSettings,
    log_filter: Option<LogFilter>,
) -> (LspService<CrumbsServer>, ClientSocket) {
    LspService::build(|client| CrumbsServer::new(client, base_settings, log_filter))
        .custom_method(OPEN_METHOD, CrumbsServer::open)
        .custom_method(TOGGLE_METHOD, CrumbsServer::toggle)
        .custom_method(CLOSE_METHOD, CrumbsServer::close)
        .custom_method(EVENT_METHOD, CrumbsServer::event)
        .finish()
}
