//! pwclockctl UI module
//!
//! The model and a presenter talk through a pair of channels: the
//! presenter sends [`UiEvent`]s and draws whatever [`UiCmd`]s come
//! back.  No toolkit types leak into the model.

pub mod panel;
pub mod term;

use crate::model::events::{UiCmd, UiEvent};
use async_std::channel::{bounded, Receiver, Sender};
use tracing::warn;

/// Model side of the UI channels
pub struct UiHandle {
    tx_cmd: Sender<UiCmd>,
    rx_event: Receiver<UiEvent>,
    tx_event: Sender<UiEvent>,
}

impl UiHandle {
    pub async fn next_event(&self) -> Option<UiEvent> {
        self.rx_event.recv().await.ok()
    }

    pub async fn send_cmd(&self, cmd: UiCmd) {
        if self.tx_cmd.send(cmd).await.is_err() {
            warn!("Failed to send UI command!");
        }
    }

    /// Sender feeding this handle's own event queue
    pub fn sender(&self) -> EventSender {
        EventSender(self.tx_event.clone())
    }
}

#[derive(Clone)]
pub struct EventSender(Sender<UiEvent>);

impl EventSender {
    /// Queue an event, blocking until there is room
    pub fn send(&self, e: UiEvent) -> bool {
        async_std::task::block_on(async {
            match self.0.send(e.clone()).await {
                Ok(()) => true,
                Err(_) => {
                    warn!("Failed to send event '{:?}'", e);
                    false
                }
            }
        })
    }

    pub async fn send_async(&self, e: UiEvent) -> bool {
        self.0.send(e).await.is_ok()
    }
}

/// Presenter side of the UI channels
pub struct UiRuntime {
    tx_event: Sender<UiEvent>,
    rx_cmd: Receiver<UiCmd>,
}

impl UiRuntime {
    pub fn new() -> (Self, UiHandle) {
        let (tx_cmd, rx_cmd) = bounded(8);
        let (tx_event, rx_event) = bounded(8);

        (
            UiRuntime {
                tx_event: tx_event.clone(),
                rx_cmd,
            },
            UiHandle {
                tx_cmd,
                rx_event,
                tx_event,
            },
        )
    }

    pub fn sender(&self) -> EventSender {
        EventSender(self.tx_event.clone())
    }

    /// Block until the model sends the next command, `None` once it is gone
    pub fn next_cmd(&self) -> Option<UiCmd> {
        async_std::task::block_on(self.rx_cmd.recv()).ok()
    }
}
