//! ttscan - translation marker scanner
//!
//! ttscan finds translation markers such as `<UFTT ttid="greet">Hello</UFTT>`
//! in JSX/TSX sources and keeps a JSON translation dictionary in sync with
//! them. Entries that are no longer referenced move to a separate unused
//! dictionary and come back, translations intact, when they reappear.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and validation
//! - `core`: Marker matching and reconciliation engine
//! - `issues`: Diagnostics reported after a scan
//! - `json_store`: Loading and saving translation dictionaries

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod json_store;
