use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
};
use tower_lsp::lsp_types::{DocumentSymbolResponse, Position};
use tracing::{debug, info};

use crate::{
    config::CrumbsSettings,
    navigator::{action::Action, command::Command, session::Session},
    outline::Outline,
};

/// Input to the navigator, one state transition each.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// Open a panel for `symbols`, focused at `cursor`. No-op while one is open.
    Open {
        symbols: DocumentSymbolResponse,
        cursor: Position,
    },
    /// Close the open panel, or open one.
    Toggle {
        symbols: DocumentSymbolResponse,
        cursor: Position,
    },
    Close,
    /// A key pressed inside the panel, resolved through the keymap.
    Key {
        key: String,
    },
    Action {
        action: Action,
    },
    /// The user moved the panel cursor to 1-based `row` of the middle column.
    CursorMoved {
        row: usize,
    },
    /// The panel lost focus.
    Leave,
    Resize,
}

/// Single-instance guard around the active [`Session`].
#[derive(Debug, Default)]
pub struct Navigator {
    session: Option<Session>,
    settings: CrumbsSettings,
}

impl Navigator {
    pub fn new(settings: CrumbsSettings) -> Self {
        Self {
            session: None,
            settings,
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn settings(&self) -> &CrumbsSettings {
        &self.settings
    }

    /// Replace settings; an open panel is redrawn with them.
    pub fn set_settings(
        &mut self,
        settings: CrumbsSettings,
    ) -> Vec<Command> {
        self.settings = settings;
        self.session.as_ref().map(|session| session.render(&self.settings)).unwrap_or_default()
    }

    pub fn handle(
        &mut self,
        event: Event,
    ) -> Vec<Command> {
        let commands = match event {
            Event::Open {
                symbols,
                cursor,
            } => self.open(symbols, cursor),
            Event::Toggle {
                symbols,
                cursor,
            } => {
                if self.is_active() {
                    self.apply(Action::Close)
                } else {
                    self.open(symbols, cursor)
                }
            },
            Event::Close | Event::Leave => self.apply(Action::Close),
            Event::Key {
                key,
            } => match self.settings.keymaps.resolve(&key) {
                Some(action) => self.apply(action),
                None => {
                    debug!("[navigator] no binding for key {key}");
                    Vec::new()
                },
            },
            Event::Action {
                action,
            } => self.apply(action),
            Event::CursorMoved {
                row,
            } => match self.session.as_mut() {
                Some(session) => session.focus_row(row, &self.settings),
                None => Vec::new(),
            },
            Event::Resize => match self.session.as_ref() {
                Some(session) => session.render(&self.settings),
                None => Vec::new(),
            },
        };

        if commands.iter().any(Command::closes_panel) {
            debug!("[navigator] session closed");
            self.session = None;
        }
        commands
    }

    fn open(
        &mut self,
        symbols: DocumentSymbolResponse,
        cursor: Position,
    ) -> Vec<Command> {
        if self.is_active() {
            debug!("[navigator] open ignored, a session is already active");
            return Vec::new();
        }

        let outline = Outline::from_response(symbols);
        let Some(session) = Session::open(outline, cursor) else {
            debug!("[navigator] no symbols to navigate");
            return Vec::new();
        };

        info!(
            "[navigator] opened at {} ({} symbols)",
            session.focused().name,
            session.outline().len()
        );
        let commands = session.open_commands(&self.settings);
        self.session = Some(session);
        commands
    }

    fn apply(
        &mut self,
        action: Action,
    ) -> Vec<Command> {
        match self.session.as_mut() {
            Some(session) => {
                debug!("[navigator] action {action}");
                session.apply(action, &self.settings)
            },
            None => Vec::new(),
        }
    }
}

enum Message {
    Event(Event, oneshot::Sender<Vec<Command>>),
    Settings(CrumbsSettings, oneshot::Sender<Vec<Command>>),
    Snapshot(oneshot::Sender<CrumbsSettings>),
}

/// Handle to the navigator's event queue.
///
/// A single task owns the [`Navigator`] and applies queued messages one at a
/// time, in arrival order.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    sender: mpsc::UnboundedSender<Message>,
}

impl std::fmt::Debug for Message {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Message::Event(event, _) => f.debug_tuple("Event").field(event).finish(),
            Message::Settings(..) => f.write_str("Settings"),
            Message::Snapshot(_) => f.write_str("Snapshot"),
        }
    }
}

impl Dispatcher {
    /// Start the dispatch loop on the current tokio runtime.
    pub fn spawn(navigator: Navigator) -> (Self, JoinHandle<()>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run(navigator, receiver));
        (
            Self {
                sender,
            },
            handle,
        )
    }

    pub async fn send(
        &self,
        event: Event,
    ) -> Result<Vec<Command>, DispatchError> {
        let (reply, response) = oneshot::channel();
        self.sender.send(Message::Event(event, reply)).map_err(|_| DispatchError::Stopped)?;
        response.await.map_err(|_| DispatchError::Stopped)
    }

    pub async fn update_settings(
        &self,
        settings: CrumbsSettings,
    ) -> Result<Vec<Command>, DispatchError> {
        let (reply, response) = oneshot::channel();
        self.sender.send(Message::Settings(settings, reply)).map_err(|_| DispatchError::Stopped)?;
        response.await.map_err(|_| DispatchError::Stopped)
    }

    /// Settings the navigator is currently using.
    pub async fn settings(&self) -> Result<CrumbsSettings, DispatchError> {
        let (reply, response) = oneshot::channel();
        self.sender.send(Message::Snapshot(reply)).map_err(|_| DispatchError::Stopped)?;
        response.await.map_err(|_| DispatchError::Stopped)
    }
}

async fn run(
    mut navigator: Navigator,
    mut receiver: mpsc::UnboundedReceiver<Message>,
) {
    while let Some(message) = receiver.recv().await {
        // The caller may have given up waiting; the transition still stands.
        match message {
            Message::Event(event, reply) => {
                let _ = reply.send(navigator.handle(event));
            },
            Message::Settings(settings, reply) => {
                let _ = reply.send(navigator.set_settings(settings));
            },
            Message::Snapshot(reply) => {
                let _ = reply.send(navigator.settings().clone());
            },
        }
    }
    debug!("[dispatch] event queue closed");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    Stopped,
}

impl Display for DispatchError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Stopped => write!(f, "navigator event loop has stopped"),
        }
    }
}

impl std::error::Error for DispatchError {}

#[cfg(test)]
#[path = "../../tests/src/navigator/dispatch_tests.rs"]
mod tests;
