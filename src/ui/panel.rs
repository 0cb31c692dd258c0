use crate::{
    format,
    model::{
        param::{ParameterKind, LATENCY_UNIT},
        selection::{Selection, SelectionState},
        state::CurrentState,
    },
};

/// One selectable value
#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub value: u32,
    pub label: String,
    pub selected: bool,
}

/// A titled row of buttons for one parameter kind
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonRow {
    pub kind: ParameterKind,
    pub title: &'static str,
    pub buttons: Vec<Button>,
}

impl ButtonRow {
    fn new(selection: &Selection) -> Self {
        let kind = selection.kind();
        Self {
            kind,
            title: kind.title(),
            buttons: selection
                .entries()
                .iter()
                .map(|e| Button {
                    value: e.value,
                    label: format::format_button(kind, e.value),
                    selected: e.selected,
                })
                .collect(),
        }
    }
}

/// A formatted reading and its unit
#[derive(Clone, Debug, PartialEq)]
pub struct Reading {
    pub text: String,
    pub unit: &'static str,
}

/// Everything a presenter needs to draw the panel
#[derive(Clone, Debug, PartialEq)]
pub struct PanelView {
    pub rate: Reading,
    pub quantum: Reading,
    pub latency: Reading,
    pub rate_buttons: ButtonRow,
    pub quantum_buttons: ButtonRow,
}

impl PanelView {
    pub fn new(state: &CurrentState, selection: &SelectionState) -> Self {
        Self {
            rate: Reading {
                text: format::format_rate(state.rate),
                unit: ParameterKind::Rate.unit(),
            },
            quantum: Reading {
                text: format::format_quantum(state.quantum),
                unit: ParameterKind::Quantum.unit(),
            },
            latency: Reading {
                text: format::format_latency(state.latency()),
                unit: LATENCY_UNIT,
            },
            rate_buttons: ButtonRow::new(selection.get(ParameterKind::Rate)),
            quantum_buttons: ButtonRow::new(selection.get(ParameterKind::Quantum)),
        }
    }

    pub fn row(&self, kind: ParameterKind) -> &ButtonRow {
        match kind {
            ParameterKind::Rate => &self.rate_buttons,
            ParameterKind::Quantum => &self.quantum_buttons,
        }
    }
}
