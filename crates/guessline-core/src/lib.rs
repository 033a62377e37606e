//! Core runtime for **guessline**.
//!
//! `guessline-core` provides the traits, types, and runtime that power the
//! guessline application and its widgets.  The design follows the
//! [Elm Architecture]: a program is expressed as a pure
//! **init -> update -> view** cycle, with side effects pushed to the edges
//! through [`Command`]s and [`Subscription`]s.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Describes a side effect to be executed by the runtime |
//! | [`Subscription`] | Long-lived event source (terminal events, timers) |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing a [`Model`] without a terminal |
//!
//! # Architecture
//!
//! 1. **init** -- [`Model::init`] creates the initial state and may return a
//!    [`Command`] to kick off early work.
//! 2. **view** -- The runtime calls [`Model::view`] to render the current
//!    state to a [`ratatui::Frame`].
//! 3. **event** -- External events (key presses, timers) arrive via
//!    [`Subscription`]s and are mapped into the model's `Message` type.
//! 4. **update** -- [`Model::update`] receives a message, mutates state, and
//!    optionally returns a [`Command`] for further side effects.
//! 5. **repeat** -- Steps 2-4 repeat until the program exits.
//!
//! Subscriptions are reconciled by diffing after every update, which gives
//! components a deterministic listener lifecycle: an event source is attached
//! exactly once when its subscription first appears and detached exactly once
//! when the model stops declaring it.
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod subscription;
pub mod subscriptions;
pub mod testing;

pub use command::{Command, TerminalCommand};
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{log_to_file, OutputTarget, Program, ProgramError, ProgramOptions};
pub use subscription::{subscribe, Subscription, SubscriptionId, SubscriptionSource};
pub use subscriptions::{terminal_events, After, Every};

/// Run a guessline application with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
