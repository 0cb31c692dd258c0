//! Line based terminal presenter.
//!
//! Reads commands from stdin and prints every rendered panel to
//! stdout.  Selected buttons are shown in brackets.

use crate::{
    model::{
        events::{UiCmd, UiEvent},
        param::ParameterKind,
    },
    ui::{
        panel::{ButtonRow, PanelView},
        EventSender, UiRuntime,
    },
};
use std::{
    fmt::Write as _,
    io::{self, BufRead},
    thread::{self, JoinHandle},
};
use tracing::debug;

const HELP: &str = "commands: rate <hz> | quantum <frames> | sync | exit";

/// Turn one input line into a UI event
///
/// Blank lines yield `Ok(None)`, anything unrecognised an error message
/// for the user.
pub fn parse_command(line: &str) -> Result<Option<UiEvent>, String> {
    let mut words = line.split_whitespace();
    let cmd = match words.next() {
        Some(cmd) => cmd.to_ascii_lowercase(),
        None => return Ok(None),
    };

    let kind = match cmd.as_str() {
        "rate" | "r" => ParameterKind::Rate,
        "quantum" | "q" | "buffer" | "b" => ParameterKind::Quantum,
        "sync" | "update" | "u" => return Ok(Some(UiEvent::SyncRequested)),
        "exit" | "quit" | "x" => return Ok(Some(UiEvent::Exit)),
        other => return Err(format!("unknown command '{}', {}", other, HELP)),
    };

    let value = words
        .next()
        .ok_or_else(|| format!("{} needs a value", kind))?
        .parse::<u32>()
        .map_err(|e| format!("invalid {} value: {}", kind, e))?;
    Ok(Some(UiEvent::ValueSelected(kind, value)))
}

fn render_row(out: &mut String, row: &ButtonRow) {
    let _ = write!(out, "{:>12}:", row.title);
    for b in row.buttons.iter() {
        if b.selected {
            let _ = write!(out, " [{}]", b.label);
        } else {
            let _ = write!(out, "  {} ", b.label);
        }
    }
    out.push('\n');
}

/// Render a panel as a few lines of text
pub fn render(view: &PanelView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>8} {}  {:>6} {}  {:>5} {}",
        view.rate.text,
        view.rate.unit,
        view.quantum.text,
        view.quantum.unit,
        view.latency.text,
        view.latency.unit
    );
    for &kind in ParameterKind::ALL.iter() {
        render_row(&mut out, view.row(kind));
    }
    out
}

/// Forward stdin lines to the model, sending `Exit` on end of input
fn read_input(tx: EventSender) {
    eprintln!("{}", HELP);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                debug!("Failed to read stdin: {}", e);
                break;
            }
        };
        match parse_command(&line) {
            Ok(Some(evt)) => {
                let exit = evt == UiEvent::Exit;
                if !tx.send(evt) || exit {
                    return;
                }
            }
            Ok(None) => {}
            Err(msg) => eprintln!("{}", msg),
        }
    }
    tx.send(UiEvent::Exit);
}

/// Start the presenter, the returned handle finishes once the model closes
pub fn spawn(rt: UiRuntime) -> JoinHandle<()> {
    let tx = rt.sender();
    thread::spawn(move || read_input(tx));

    thread::spawn(move || {
        while let Some(cmd) = rt.next_cmd() {
            match cmd {
                UiCmd::Render(view) => print!("{}", render(&view)),
                UiCmd::Closed => break,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{selection::SelectionState, state::CurrentState};

    #[test]
    fn parses_selections() {
        assert_eq!(
            parse_command("rate 48000"),
            Ok(Some(UiEvent::ValueSelected(ParameterKind::Rate, 48000)))
        );
        assert_eq!(
            parse_command("  Q 256 "),
            Ok(Some(UiEvent::ValueSelected(ParameterKind::Quantum, 256)))
        );
    }

    #[test]
    fn parses_control_commands() {
        assert_eq!(parse_command("sync"), Ok(Some(UiEvent::SyncRequested)));
        assert_eq!(parse_command("quit"), Ok(Some(UiEvent::Exit)));
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_command("rate").is_err());
        assert!(parse_command("rate 44.1").is_err());
        assert!(parse_command("volume 3").is_err());
    }

    #[test]
    fn render_marks_selection() {
        let state = CurrentState {
            rate: Some(48000),
            quantum: None,
        };
        let mut selection = SelectionState::new();
        selection.reconcile(&state);
        let text = render(&PanelView::new(&state, &selection));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("48 kHz"));
        assert!(lines[0].contains("------ samples"));
        assert!(lines[0].contains("---- ms"));
        assert!(lines[1].contains("[48]"));
        assert!(!lines[2].contains('['));
    }
}
