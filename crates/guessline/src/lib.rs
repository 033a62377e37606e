//! **guessline** -- a word-guessing game for the terminal.
//!
//! This is the umbrella crate: it re-exports the runtime and widgets, hosts
//! the game rules, and ships the playable binary.
//!
//! # Re-exports
//!
//! * All public items from [`guessline_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Subscription`], [`Program`],
//!   [`run`], [`run_with`], etc.).
//! * The [`widgets`] module re-exports everything from [`guessline_widgets`]
//!   (the guess line, the scored board, the animated banner).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   code does not need to depend on them directly.
//!
//! # Modules
//!
//! * [`game`] -- difficulty presets, word lists, scoring, and per-game state.
//! * [`app`] -- the top-level [`Model`] wiring menu, play screen, and overlay.
//!
//! # Quick start
//!
//! ```ignore
//! use guessline::app::{App, Flags};
//!
//! #[tokio::main]
//! async fn main() {
//!     guessline::run::<App>(Flags::default()).await.unwrap();
//! }
//! ```

pub use guessline_core::*;
pub mod widgets {
    pub use guessline_widgets::*;
}

pub mod app;
pub mod game;

// Re-export dependencies for use in examples and downstream code
pub use crossterm;
pub use ratatui;
pub use tokio;
