//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window and the `BrowserShell`, and moves engine
//! notifications, pointer input and outbound messages between them.

mod core;
mod event_handler;
mod init;
mod pointer;
mod polling;

pub use core::FennecApp;
