//! Rule expansion -- converts stored recording rules into concrete candidates.
//!
//! Each rule category resolves differently: single-instance rules carry their
//! own timing, while timeslot and all-episodes rules are resolved against the
//! program guide within a fixed two-day look-ahead window.
//!
//! Expansion never aborts on bad data. A store query failure is logged and
//! treated as zero rows; a row with a malformed timestamp is skipped and
//! reported as a per-row fault. Both show up in [`Expansion::faults`].

use chrono::{Duration, NaiveDateTime};

use crate::error::{Result, ScheduleError};
use crate::store::{
    format_store_timestamp, parse_store_timestamp, parse_time_of_day, GuideRow, GuideStore,
    RuleStore,
};
use crate::types::{Candidate, RuleKind};

/// How far ahead timeslot and all-episodes rules look into the guide.
pub const LOOKAHEAD_DAYS: i64 = 2;

/// The result of one expansion run: the candidate batch (unordered) plus any
/// per-row or per-query faults encountered along the way.
#[derive(Debug, Clone, Default)]
pub struct Expansion {
    pub candidates: Vec<Candidate>,
    pub faults: Vec<ScheduleError>,
}

/// Expand every rule in the rule store against the guide store.
///
/// `now` anchors the look-ahead window: timeslot windows open today at the
/// rule's time-of-day, all-episodes windows open at `now` itself. Candidates
/// come back unordered; the caller sorts.
pub fn expand_rules<R, G>(rules: &R, guide: &G, now: NaiveDateTime) -> Expansion
where
    R: RuleStore,
    G: GuideStore,
{
    let mut out = Expansion::default();

    expand_single(rules, &mut out);
    expand_timeslot(rules, guide, now, &mut out);
    expand_all_episodes(rules, guide, now, &mut out);

    out
}

/// Single-instance rules map one-to-one onto candidates; the rule row itself
/// carries the timing, so no guide lookup happens.
fn expand_single<R: RuleStore>(rules: &R, out: &mut Expansion) {
    let rows = rows_or_empty(rules.single_rules(), "single rules", &mut out.faults);

    for row in rows {
        let context = format!("single rule on channel {}", row.channel);
        let start = match parse_store_timestamp(&row.start, &context) {
            Ok(ts) => ts,
            Err(e) => {
                out.faults.push(e);
                continue;
            }
        };
        let end = match parse_store_timestamp(&row.end, &context) {
            Ok(ts) => ts,
            Err(e) => {
                out.faults.push(e);
                continue;
            }
        };

        out.candidates.push(Candidate {
            title: row.title,
            subtitle: row.subtitle,
            description: row.description,
            channel: row.channel,
            start,
            end,
            kind: RuleKind::Single,
            conflicting: false,
        });
    }
}

fn expand_timeslot<R, G>(rules: &R, guide: &G, now: NaiveDateTime, out: &mut Expansion)
where
    R: RuleStore,
    G: GuideStore,
{
    let rows = rows_or_empty(rules.timeslot_rules(), "timeslot rules", &mut out.faults);

    for row in rows {
        let context = format!("timeslot rule {:?} on channel {}", row.title, row.channel);
        let time_of_day = match parse_time_of_day(&row.start_time, &context) {
            Ok(t) => t,
            Err(e) => {
                out.faults.push(e);
                continue;
            }
        };

        // Window opens today at the rule's time-of-day and closes two days
        // later at the same time-of-day.
        let window_start = now.date().and_time(time_of_day);
        let window_end = window_start + Duration::days(LOOKAHEAD_DAYS);

        let entries = rows_or_empty(
            guide.timeslot_entries(
                &row.channel,
                &row.title,
                &format_store_timestamp(window_start),
                &format_store_timestamp(window_end),
            ),
            "timeslot guide query",
            &mut out.faults,
        );

        collect_guide_candidates(entries, RuleKind::Timeslot, out);
    }
}

fn expand_all_episodes<R, G>(rules: &R, guide: &G, now: NaiveDateTime, out: &mut Expansion)
where
    R: RuleStore,
    G: GuideStore,
{
    let rows = rows_or_empty(
        rules.all_episode_rules(),
        "all-episodes rules",
        &mut out.faults,
    );

    for row in rows {
        // Window opens at the current moment, minute precision.
        let window_start = now;
        let window_end = window_start + Duration::days(LOOKAHEAD_DAYS);

        let entries = rows_or_empty(
            guide.title_entries(
                &row.title,
                &format_store_timestamp(window_start),
                &format_store_timestamp(window_end),
            ),
            "all-episodes guide query",
            &mut out.faults,
        );

        collect_guide_candidates(entries, RuleKind::AllEpisodes, out);
    }
}

/// Turn guide rows into candidates. Rows with unparsable timestamps fault
/// individually; the rest of the batch keeps going.
fn collect_guide_candidates(entries: Vec<GuideRow>, kind: RuleKind, out: &mut Expansion) {
    for entry in entries {
        let context = format!("guide entry {:?} on channel {}", entry.title, entry.channel);
        let start = match parse_store_timestamp(&entry.start, &context) {
            Ok(ts) => ts,
            Err(e) => {
                out.faults.push(e);
                continue;
            }
        };
        let end = match parse_store_timestamp(&entry.end, &context) {
            Ok(ts) => ts,
            Err(e) => {
                out.faults.push(e);
                continue;
            }
        };

        out.candidates.push(Candidate {
            title: entry.title,
            subtitle: entry.subtitle,
            description: entry.description,
            channel: entry.channel,
            start,
            end,
            kind,
            conflicting: false,
        });
    }
}

/// Unwrap a store query, downgrading a failure to zero rows. The fault is
/// logged and recorded so the host can see the refresh ran on partial data.
fn rows_or_empty<T>(result: Result<Vec<T>>, what: &str, faults: &mut Vec<ScheduleError>) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(e) => {
            log::warn!("{what} query failed, continuing with zero rows: {e}");
            faults.push(e);
            Vec::new()
        }
    }
}
