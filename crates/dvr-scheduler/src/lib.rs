//! # dvr-scheduler
//!
//! Deterministic DVR recording scheduling: expands user-declared recording
//! rules against a program guide, resolves time-overlap conflicts, and prunes
//! duplicate candidates before handing the host the next recording to execute.
//!
//! The crate is a pure scheduling core. Channel tuning, stream capture, and
//! rule/guide storage all live on the other side of the [`store`] traits.
//!
//! ## Modules
//!
//! - [`expander`] — recording rules → concrete recording candidates
//! - [`conflict`] — overlap predicate and pairwise conflict marking
//! - [`prune`] — duplicate removal with conflict-aware tie-breaking
//! - [`scheduler`] — the recording list manager (refresh / peek / consume)
//! - [`store`] — rule and guide store traits plus the timestamp codec
//! - [`types`] — candidates and rule kinds
//! - [`error`] — error types

pub mod conflict;
pub mod error;
pub mod expander;
pub mod prune;
pub mod scheduler;
pub mod store;
pub mod types;

pub use conflict::{mark_conflicts, overlaps};
pub use error::ScheduleError;
pub use expander::{expand_rules, Expansion, LOOKAHEAD_DAYS};
pub use prune::prune_duplicates;
pub use scheduler::Scheduler;
pub use store::{GuideStore, RuleStore};
pub use types::{Candidate, RuleKind};
