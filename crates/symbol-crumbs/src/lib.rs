pub mod config;
pub mod navigator;
pub mod outline;
pub mod render;
pub mod server;
pub mod text_pos;

#[cfg(test)]
#[path = "../tests/src/fixtures.rs"]
pub(crate) mod fixtures;

pub use config::CrumbsSettings;
pub use navigator::{Action, Command, Dispatcher, Event, Navigator, Session};
pub use outline::{NodeId, Outline, SymbolNode, locate};
pub use server::{CrumbsServer, build_service};
