//! # Depot CLI
//!
//! Driver for the department data-access layer: loads configuration,
//! wires a DAO through dependency injection, and runs the five-step
//! walkthrough against the console.

pub mod app;
pub mod console;
pub mod di;
pub mod startup;
pub mod walkthrough;

pub use app::run;
pub use console::Console;
pub use walkthrough::{run_walkthrough, WalkthroughReport};
