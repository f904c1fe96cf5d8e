//! Symbol outline model: arena tree built from `documentSymbol` results and
//! the nearest-node lookup used to pick the initial focus.

mod builder;
mod locate;
mod types;

pub use locate::locate;
pub use types::{Ancestors, NodeId, Outline, Preorder, SymbolNode};
