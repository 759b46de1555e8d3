//! Store boundary: rule and guide store traits, row types, timestamp codec.
//!
//! The scheduler consumes two external stores over synchronous request/response
//! calls. Rows cross the boundary with textual timestamps in the store's fixed
//! numeric layout `YYYYMMDDHHMMSS` (seconds always `00`); the expander parses
//! them, so a malformed row is a per-row fault rather than a dead query.
//!
//! Implementations must bind the query arguments as parameters — never format
//! them into a query string.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// A single-instance recording rule row: record this channel over this exact
/// span. The program fields are copied from the guide entry the rule was
/// created from and ride along into the candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleRuleRow {
    pub channel: String,
    /// `YYYYMMDDHHMMSS`
    pub start: String,
    /// `YYYYMMDDHHMMSS`
    pub end: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

/// A recurring-timeslot rule row: record `title` on `channel` around a daily
/// start time-of-day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeslotRuleRow {
    pub channel: String,
    /// `HH:MM`
    pub start_time: String,
    pub title: String,
}

/// An all-episodes rule row: record every airing of `title` on any channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllEpisodesRuleRow {
    pub title: String,
}

/// A program-guide listing row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideRow {
    pub channel: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// `YYYYMMDDHHMMSS`
    pub start: String,
    /// `YYYYMMDDHHMMSS`
    pub end: String,
}

/// Recording-rule storage consumed by the scheduler.
pub trait RuleStore {
    fn single_rules(&self) -> Result<Vec<SingleRuleRow>>;
    fn timeslot_rules(&self) -> Result<Vec<TimeslotRuleRow>>;
    fn all_episode_rules(&self) -> Result<Vec<AllEpisodesRuleRow>>;

    /// Delete one single-instance rule, keyed by channel + exact start + exact
    /// end, both in `YYYYMMDDHHMMSS` form.
    fn delete_single_rule(&mut self, channel: &str, start: &str, end: &str) -> Result<()>;
}

/// Program-guide storage consumed by the rule expander.
///
/// Both queries take inclusive lower / exclusive upper bounds as formatted
/// store timestamps: entries whose start is at or after `start_at_or_after`
/// and whose end is before `end_before`.
pub trait GuideStore {
    /// Entries on one channel whose title equals `title`, within the bounds.
    fn timeslot_entries(
        &self,
        channel: &str,
        title: &str,
        start_at_or_after: &str,
        end_before: &str,
    ) -> Result<Vec<GuideRow>>;

    /// Entries on any channel whose title equals `title`, within the bounds.
    fn title_entries(
        &self,
        title: &str,
        start_at_or_after: &str,
        end_before: &str,
    ) -> Result<Vec<GuideRow>>;
}

/// Format a datetime in the store layout: minute precision plus a literal
/// `00` seconds suffix. Sub-minute input truncates.
pub fn format_store_timestamp(ts: NaiveDateTime) -> String {
    format!("{}00", ts.format("%Y%m%d%H%M"))
}

/// Parse a store-layout timestamp. Strict: exactly 14 digits, valid date.
pub fn parse_store_timestamp(value: &str, context: &str) -> Result<NaiveDateTime> {
    if value.len() != 14 {
        return Err(ScheduleError::MalformedTimestamp {
            context: context.to_string(),
            value: value.to_string(),
        });
    }
    NaiveDateTime::parse_from_str(value, "%Y%m%d%H%M%S").map_err(|_| {
        ScheduleError::MalformedTimestamp {
            context: context.to_string(),
            value: value.to_string(),
        }
    })
}

/// Parse a timeslot rule's `HH:MM` time-of-day column.
pub fn parse_time_of_day(value: &str, context: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| ScheduleError::MalformedTimestamp {
        context: context.to_string(),
        value: value.to_string(),
    })
}
