//! # anlz-conformance
//!
//! Conformance harness for legacy Analyze 7.5 orientation handling.
//!
//! The harness embeds a captured little-endian header/pixel pair,
//! derives one variant per historical orientation byte (0 through 5),
//! round-trips each variant through a volume reader, and verifies both
//! bit-exact pixel fidelity and the decoded anatomical orientation.
//!
//! Library entry points are [`run_all`] and [`run_scenario`]; the
//! `anlz-conformance` binary wraps them behind a small CLI.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod harness;
pub mod reference;

pub use harness::{Report, SCENARIOS, Scenario, ScenarioError, ScenarioOutcome, run_all, run_scenario};
pub use reference::{LITTLE_ENDIAN_HDR, LITTLE_ENDIAN_IMG};
