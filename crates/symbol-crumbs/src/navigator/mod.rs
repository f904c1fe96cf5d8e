//! Navigation session: actions, presentation commands, and the event loop
//! that applies them one at a time.

pub(crate) mod action;
pub(crate) mod command;
pub(crate) mod dispatch;
pub(crate) mod session;

pub use action::{Action, UnknownAction};
pub use command::{Column, Command, Split};
pub use dispatch::{DispatchError, Dispatcher, Event, Navigator};
pub use session::Session;
