//! Ready-made widgets for **guessline**.
//!
//! Every widget in this crate implements [`guessline_core::Component`], so it
//! can be embedded inside any [`guessline_core::Model`] and composed freely
//! within [`ratatui`] layouts.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`banner`] | Decorative animated title row |
//! | [`board`] | Scored attempt grid with per-letter colors |
//! | [`guess_line`] | Bounded letter-slot entry row with submit-on-full |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`chrome`] | Cell metrics, slot layout, and bordered-block helpers |

pub mod banner;
pub mod board;
pub mod chrome;
pub mod guess_line;
