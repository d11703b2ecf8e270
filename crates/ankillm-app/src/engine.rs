//! Engine - orchestration state shared by the TUI runner
//!
//! The Engine owns the application state, the unified message channel, the
//! shutdown signal and the remote service handles.

use std::path::PathBuf;

use ankillm_core::prelude::*;
use tokio::sync::{mpsc, watch};

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::services::Services;
use crate::signals::{self, SignalTarget};
use crate::state::{AppState, DeckCatalog};

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for anki-llm.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, background tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Sender for the shutdown signal. Send `true` to initiate shutdown.
    pub shutdown_tx: watch::Sender<bool>,

    /// Receiver for the shutdown signal. Clone for background tasks.
    pub shutdown_rx: watch::Receiver<bool>,

    /// Loaded settings
    pub settings: Settings,

    services: Services,
}

impl Engine {
    /// Create a new Engine whose file picker starts in `start_dir`.
    ///
    /// Spawns the OS signal handler, so it must be called inside a tokio
    /// runtime.
    pub fn new(settings: Settings, services: Services, start_dir: PathBuf) -> Self {
        let state = AppState::new(start_dir, settings.notes.template.clone());

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        signals::forward_signals(SignalTarget::Quit(msg_tx.clone()));

        Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            settings,
            services,
        }
    }

    /// Fetch the deck catalog once. Failure leaves an empty catalog with
    /// the default deck active.
    pub async fn load_deck_catalog(&mut self) {
        let names = match self.services.decks.deck_names().await {
            Ok(names) => {
                info!("Loaded {} decks", names.len());
                names
            }
            Err(e) => {
                warn!("Could not load deck names: {}", e);
                Vec::new()
            }
        };
        self.state.decks = DeckCatalog::new(names);
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.services,
            &self.shutdown_rx,
        );
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the shutdown receiver.
    pub fn shutdown_receiver(&self) -> watch::Receiver<bool> {
        self.shutdown_rx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Signal every background task to stop.
    pub fn shutdown(&mut self) {
        info!("Engine shutting down");
        let _ = self.shutdown_tx.send(true);
    }
}
