//! Access to the PipeWire clock settings through `pw-metadata`.
//!
//! The daemon owns the clock configuration.  Everything in here talks
//! to it through the narrow [`ParameterStore`] capability, so the rest
//! of the application never spawns processes itself.

mod cmd;
#[cfg(test)]
pub mod mock;

pub use cmd::{CommandRunner, ProcessRunner};

use crate::{
    model::param::{ParameterKind, ParameterValue},
    settings::AppSettings,
};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

/// `pw-metadata` prints properties as `... value:'<token>' type:'...'`
static VALUE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"value:'([^']*)' type:").expect("value pattern is valid"));

/// Which metadata property of a kind is addressed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// `clock.force-<kind>`, set by the user or an administrator
    Override,
    /// `clock.<kind>`, negotiated by the daemon
    Natural,
}

impl Slot {
    pub fn key(self, kind: ParameterKind) -> String {
        match self {
            Self::Override => format!("clock.force-{}", kind.key_name()),
            Self::Natural => format!("clock.{}", kind.key_name()),
        }
    }
}

/// Remote authority over the clock parameters
pub trait ParameterStore {
    /// Read one property, `None` on any failure
    fn query(&self, kind: ParameterKind, slot: Slot) -> ParameterValue;

    /// Write the override property, `true` if the write did not signal failure
    fn mutate(&self, kind: ParameterKind, value: u32) -> bool;
}

/// Extract the integer token from a `pw-metadata` listing
///
/// Any missing delimiter or non-integer token fails the whole parse.
pub fn parse_value(output: &str) -> ParameterValue {
    VALUE_TOKEN
        .captures(output)
        .and_then(|caps| caps.get(1))
        .and_then(|token| token.as_str().parse().ok())
}

/// [`ParameterStore`] backed by the `pw-metadata` command line tool
pub struct MetadataStore<R> {
    runner: R,
    /// Program to run, usually `pw-metadata`
    tool: String,
    /// Name of the metadata object holding the clock settings
    name: String,
    /// Metadata subject id
    subject: u32,
}

impl<R: CommandRunner> MetadataStore<R> {
    pub fn new(runner: R, settings: &AppSettings) -> Self {
        Self {
            runner,
            tool: settings.metadata_tool.clone(),
            name: settings.metadata_name.clone(),
            subject: settings.subject,
        }
    }

    fn args(&self, key: String) -> Vec<String> {
        vec!["-n".into(), self.name.clone(), self.subject.to_string(), key]
    }
}

impl<R: CommandRunner> ParameterStore for MetadataStore<R> {
    fn query(&self, kind: ParameterKind, slot: Slot) -> ParameterValue {
        let key = slot.key(kind);
        match self.runner.run(&self.tool, &self.args(key.clone())) {
            Ok(out) => {
                let value = parse_value(&out);
                if value.is_none() {
                    debug!("No readable value for {}", key);
                }
                value
            }
            Err(e) => {
                debug!("Query of {} failed: {}", key, e);
                None
            }
        }
    }

    fn mutate(&self, kind: ParameterKind, value: u32) -> bool {
        let key = Slot::Override.key(kind);
        let mut args = self.args(key.clone());
        args.push(value.to_string());
        match self.runner.run(&self.tool, &args) {
            Ok(_) => true,
            Err(e) => {
                warn!("Setting {} to {} failed: {}", key, value, e);
                false
            }
        }
    }
}
