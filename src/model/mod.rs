//! pwclockctl's Model and Event to drive the application's MVC pattern
//!
//! The model is the only writer of [`CurrentState`] and
//! [`SelectionState`].  It runs on its own thread and handles one
//! [`UiEvent`] at a time; the optional poller merely queues sync
//! requests behind whatever the user asked for.

pub mod events;
pub mod param;
pub mod selection;
pub mod state;

use self::{
    events::{UiCmd, UiEvent},
    param::ParameterKind,
    selection::SelectionState,
    state::CurrentState,
};
use crate::{
    controller::Controller,
    rts::pipewire::ParameterStore,
    ui::{panel::PanelView, UiHandle},
};
use async_std::task;
use std::{
    thread::{self, JoinHandle},
    time::Duration,
};
use tracing::{debug, info, warn};

/// What the event loop should do after an event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Central Model of the MVC layout of the application
pub struct Model<S> {
    controller: Controller<S>,
    state: CurrentState,
    selection: SelectionState,
}

impl<S: ParameterStore> Model<S> {
    /// Returns a new model with every reading unknown.  Nothing is
    /// read from the daemon until the first sync.
    pub fn new(controller: Controller<S>) -> Self {
        Self {
            controller,
            state: CurrentState::default(),
            selection: SelectionState::new(),
        }
    }

    pub fn update(&mut self, evt: UiEvent) -> Flow {
        match evt {
            UiEvent::ValueSelected(kind, value) => self.select(kind, value),
            UiEvent::SyncRequested => self.sync(),
            UiEvent::Exit => return Flow::Exit,
        }
        Flow::Continue
    }

    /// Ask the daemon for `value`, then show whatever it reports back
    fn select(&mut self, kind: ParameterKind, value: u32) {
        if let Err(e) = self.controller.set_value(value, kind) {
            warn!("{}", e);
        }
        self.sync();

        if self.selection.get(kind).selected() != Some(value) {
            info!(
                "Daemon reports {} {:?} after requesting {}",
                kind,
                self.state.get(kind),
                value
            );
        }
    }

    fn sync(&mut self) {
        self.state = self.controller.sync();
        self.selection.reconcile(&self.state);
        debug!("Synced clock state: {:?}", self.state);
    }

    pub fn state(&self) -> &CurrentState {
        &self.state
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn view(&self) -> PanelView {
        PanelView::new(&self.state, &self.selection)
    }
}

/// Run the model on a dedicated thread until it receives [`UiEvent::Exit`]
pub fn dispatch<S>(model: Model<S>, ui: UiHandle, poll: Option<Duration>) -> JoinHandle<()>
where
    S: ParameterStore + Send + 'static,
{
    thread::spawn(move || task::block_on(run(model, ui, poll)))
}

async fn run<S: ParameterStore>(mut model: Model<S>, ui: UiHandle, poll: Option<Duration>) {
    if let Some(interval) = poll {
        let tx = ui.sender();
        task::spawn(async move {
            loop {
                task::sleep(interval).await;
                if !tx.send_async(UiEvent::SyncRequested).await {
                    break;
                }
            }
        });
    }

    model.update(UiEvent::SyncRequested);
    ui.send_cmd(UiCmd::Render(model.view())).await;

    while let Some(evt) = ui.next_event().await {
        debug!("Handling UI event {:?}", evt);
        match model.update(evt) {
            Flow::Continue => ui.send_cmd(UiCmd::Render(model.view())).await,
            Flow::Exit => break,
        }
    }

    ui.send_cmd(UiCmd::Closed).await;
    info!("Model stopped");
}
