//! scoreline-core — submission log parsing and score aggregation.
//!
//! This crate holds the pure parts of the pipeline, plus the shared types and
//! configuration used by the chart renderer and the driver.
//!
//! # Architecture
//!
//! ```text
//! log text ──► parser ──► [Submission] ──► timeline (per team) ──► [TotalScore]
//!                                    │
//!                                    └──► teams / standings
//! ```
//!
//! Everything here is synchronous and allocation-light; the parser and the
//! aggregator are lazy iterators borrowing their input.

pub mod config;
pub mod error;
pub mod parser;
pub mod standings;
pub mod teams;
pub mod timeline;
pub mod types;

pub use error::{Result, ScorelineError};
pub use parser::LogParser;
pub use standings::Standing;
pub use timeline::{total_score_over_time, TeamTimeline};
pub use types::{Submission, TotalScore};
