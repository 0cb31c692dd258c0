use crate::{model::param::ParameterKind, ui::panel::PanelView};

/// UI event types executed on the model
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// The user picked one of the available values
    ValueSelected(ParameterKind, u32),
    /// Re-read everything from the daemon
    SyncRequested,
    /// Shut the model down
    Exit,
}

/// Commands from the model to manipulate the UI state
#[derive(Clone, Debug, PartialEq)]
pub enum UiCmd {
    /// Redraw with a freshly derived view
    Render(PanelView),
    /// The model has stopped, no further commands follow
    Closed,
}
