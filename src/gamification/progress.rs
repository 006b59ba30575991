//! The progress record: points, XP, level, coins, counters and streak fields

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::TaskCategory;
use super::levels::Level;
use super::rewards::Reward;

/// Progress for one learner. Only ever mutated, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub points: u64,
    pub xp: u64,
    /// Always `Level::number_for_xp(xp)`
    pub level: u32,
    pub coins: u64,
    pub total_tasks_completed: u64,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Calendar day of the last streak-incrementing completion
    pub last_activity_date: Option<NaiveDate>,
    #[serde(default)]
    pub tasks_by_category: BTreeMap<TaskCategory, u64>,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            points: 0,
            xp: 0,
            level: 1,
            coins: 0,
            total_tasks_completed: 0,
            current_streak: 0,
            longest_streak: 0,
            last_activity_date: None,
            tasks_by_category: BTreeMap::new(),
        }
    }
}

impl ProgressRecord {
    /// Add a reward and re-derive the level
    pub fn apply_reward(&mut self, reward: Reward) {
        self.points = self.points.saturating_add(reward.points);
        self.xp = self.xp.saturating_add(reward.xp);
        self.coins = self.coins.saturating_add(reward.coins);
        self.level = Level::number_for_xp(self.xp);
    }

    /// Count one finished task in `category`
    pub fn record_task(&mut self, category: TaskCategory) {
        self.total_tasks_completed = self.total_tasks_completed.saturating_add(1);
        let count = self.tasks_by_category.entry(category).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Extend the streak by one day and keep the running maximum
    pub fn extend_streak(&mut self) {
        self.current_streak = self.current_streak.saturating_add(1);
        self.longest_streak = self.longest_streak.max(self.current_streak);
    }

    /// Number of categories with at least one completed task
    pub fn categories_practiced(&self) -> u64 {
        self.tasks_by_category.values().filter(|n| **n > 0).count() as u64
    }

    /// Repair derived fields of a record loaded from storage
    pub(crate) fn normalize(&mut self) {
        self.level = Level::number_for_xp(self.xp);
        self.longest_streak = self.longest_streak.max(self.current_streak);
    }
}
