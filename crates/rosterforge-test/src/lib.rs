//! Shared test fixtures for RosterForge crates.
//!
//! This crate provides problem builders for testing. It depends only on
//! `rosterforge-core` so every other crate can use it as a dev-dependency.
//!
//! - [`scenarios`] - small hand-checkable problems with known rosters
//! - [`week`] - a deterministic full-week problem of realistic size
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! rosterforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use rosterforge_test::scenarios::{single_gate, back_to_back};
//! use rosterforge_test::week::demo_week;
//! ```

pub mod scenarios;
pub mod week;

pub use scenarios::{back_to_back, competing_priorities, overridden_double, single_gate, unstaffed_gate};
pub use week::{demo_week, WEEK_DAYS};
