// The binary entry point is main.rs; the module tree lives here so that the
// binary, integration tests and criterion benchmarks share one build of it.

pub mod app;
pub mod config;
pub mod content;
pub mod event;
pub mod keyboard;
pub mod logging;
pub mod practice;
pub mod session;
pub mod stats;
pub mod store;
pub mod ui;
