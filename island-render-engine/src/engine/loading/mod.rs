//! Scene config loading and the progress it reports to the state machine.

/// Scene config request, validation and simulation construction.
///
/// Falls back to built-in defaults when the file is missing or invalid.
pub mod config_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
