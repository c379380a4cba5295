//! Command Line Interface (CLI) layer for autocrop.
//!
//! This module defines argument parsing (`args`) and the orchestration
//! logic (`runner`) that crops one image and reports the outcome on
//! standard output.
//!
//! If you are embedding autocrop into another application, prefer using
//! the high-level `autocrop::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
