//! Built-in subscription sources.
//!
//! - **Terminal events** ([`terminal_events`], [`TerminalEvents`]) -- keyboard,
//!   resize, and focus events from the terminal.
//! - **Timers** ([`Every`], [`After`]) -- repeating and one-shot timer
//!   subscriptions.

mod terminal;
mod timer;

pub use terminal::*;
pub use timer::*;
