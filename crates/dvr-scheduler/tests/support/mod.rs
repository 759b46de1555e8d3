//! In-memory rule and guide stores shared by the integration tests.
//!
//! Both stores filter rows the way a real backend would bind the query
//! parameters. Timestamps stay in the fixed-width store layout, so plain
//! string comparison is numeric comparison.

#![allow(dead_code)]

use dvr_scheduler::error::{Result, ScheduleError};
use dvr_scheduler::store::{
    AllEpisodesRuleRow, GuideRow, GuideStore, RuleStore, SingleRuleRow, TimeslotRuleRow,
};

/// Format a store timestamp from parts, seconds fixed at `00`.
pub fn ts(year: i32, month: u32, day: u32, hour: u32, min: u32) -> String {
    format!("{year:04}{month:02}{day:02}{hour:02}{min:02}00")
}

pub fn single_rule(
    channel: &str,
    start: &str,
    end: &str,
    title: &str,
    subtitle: &str,
    description: &str,
) -> SingleRuleRow {
    SingleRuleRow {
        channel: channel.to_string(),
        start: start.to_string(),
        end: end.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        description: description.to_string(),
    }
}

pub fn guide_row(
    channel: &str,
    title: &str,
    subtitle: &str,
    description: &str,
    start: &str,
    end: &str,
) -> GuideRow {
    GuideRow {
        channel: channel.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        description: description.to_string(),
        start: start.to_string(),
        end: end.to_string(),
    }
}

/// In-memory rule store. Records every delete call so tests can assert on
/// exactly what the scheduler issued.
#[derive(Debug, Default)]
pub struct MemRuleStore {
    pub singles: Vec<SingleRuleRow>,
    pub timeslots: Vec<TimeslotRuleRow>,
    pub all_episodes: Vec<AllEpisodesRuleRow>,
    /// (channel, start, end) of every delete_single_rule call received.
    pub deletes: Vec<(String, String, String)>,
    /// Simulate a transport failure on every query.
    pub fail_queries: bool,
    /// Simulate a transport failure on every delete.
    pub fail_deletes: bool,
}

impl MemRuleStore {
    fn check(&self) -> Result<()> {
        if self.fail_queries {
            Err(ScheduleError::StoreUnavailable(
                "rule store offline".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

impl RuleStore for MemRuleStore {
    fn single_rules(&self) -> Result<Vec<SingleRuleRow>> {
        self.check()?;
        Ok(self.singles.clone())
    }

    fn timeslot_rules(&self) -> Result<Vec<TimeslotRuleRow>> {
        self.check()?;
        Ok(self.timeslots.clone())
    }

    fn all_episode_rules(&self) -> Result<Vec<AllEpisodesRuleRow>> {
        self.check()?;
        Ok(self.all_episodes.clone())
    }

    fn delete_single_rule(&mut self, channel: &str, start: &str, end: &str) -> Result<()> {
        self.deletes
            .push((channel.to_string(), start.to_string(), end.to_string()));
        if self.fail_deletes {
            return Err(ScheduleError::StoreUnavailable(
                "rule store offline".to_string(),
            ));
        }
        self.singles
            .retain(|r| !(r.channel == channel && r.start == start && r.end == end));
        Ok(())
    }
}

/// In-memory guide store.
#[derive(Debug, Default)]
pub struct MemGuideStore {
    pub rows: Vec<GuideRow>,
    /// Simulate a transport failure on every query.
    pub fail_queries: bool,
}

impl MemGuideStore {
    fn check(&self) -> Result<()> {
        if self.fail_queries {
            Err(ScheduleError::StoreUnavailable(
                "guide store offline".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

impl GuideStore for MemGuideStore {
    fn timeslot_entries(
        &self,
        channel: &str,
        title: &str,
        start_at_or_after: &str,
        end_before: &str,
    ) -> Result<Vec<GuideRow>> {
        self.check()?;
        Ok(self
            .rows
            .iter()
            .filter(|r| {
                r.channel == channel
                    && r.title == title
                    && r.start.as_str() >= start_at_or_after
                    && r.end.as_str() < end_before
            })
            .cloned()
            .collect())
    }

    fn title_entries(
        &self,
        title: &str,
        start_at_or_after: &str,
        end_before: &str,
    ) -> Result<Vec<GuideRow>> {
        self.check()?;
        Ok(self
            .rows
            .iter()
            .filter(|r| {
                r.title == title
                    && r.start.as_str() >= start_at_or_after
                    && r.end.as_str() < end_before
            })
            .cloned()
            .collect())
    }
}
