//! Runtimes talking to the outside world

pub mod pipewire;
