//! Extraction and reconciliation engine.
//!
//! - `matcher`: locate translation markers in source text
//! - `normalize`: canonical single-line marker content
//! - `store`: active and unused translation dictionaries
//! - `session`: per-run observed ids, counters and diagnostics
//! - `reconcile`: merge markers into the store, sweep unused entries
//! - `file_scanner`: list candidate source files
//! - `pipeline`: one complete scan run

pub mod file_scanner;
pub mod matcher;
pub mod normalize;
pub mod pipeline;
pub mod reconcile;
pub mod session;
pub mod store;

pub use matcher::{Marker, MarkerMatcher};
pub use pipeline::{ScanOptions, ScanReport, ScanSummary, run_scan};
pub use reconcile::{LanguagePolicy, ReconcileOutcome, Reconciler};
pub use session::{ScanCounters, ScanSession};
pub use store::{DEFAULT_KEY, TranslationDictionary, TranslationEntry, TranslationStore};
