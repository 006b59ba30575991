//! Gamification store - core progress bookkeeping
//!
//! Owns the progress record and achievement catalog, applies task
//! completions, and writes a full snapshot after every mutation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::category::TaskCategory;
use super::checker;
use super::definitions::{default_catalog, Achievement};
use super::levels::Level;
use super::progress::ProgressRecord;
use super::rewards::Reward;
use super::streaks::{is_new_day, is_streak_broken, Clock, SystemClock};
use crate::storage::{SnapshotStorage, StorageError};

/// Slot the snapshot is stored under unless configured otherwise
pub const DEFAULT_SLOT_KEY: &str = "gamification-data";

/// Everything persisted in one write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub progress_record: ProgressRecord,
    pub achievement_catalog: Vec<Achievement>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            progress_record: ProgressRecord::default(),
            achievement_catalog: default_catalog(),
        }
    }
}

/// What a single task completion produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOutcome {
    /// Task reward plus the rewards of everything unlocked by it
    pub reward: Reward,
    pub unlocked_achievements: Vec<Achievement>,
    /// The level after the completion is higher than before it
    pub level_up: bool,
}

/// Catalog overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub unlocked: usize,
    pub total: usize,
    /// Sum of rewards of entries still locked
    pub remaining_reward: Reward,
}

/// Main store for all gamification state
pub struct GamificationStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    slot_key: String,
    snapshot: Snapshot,
}

impl<S: SnapshotStorage, C: Clock> GamificationStore<S, C> {
    /// Load from the default slot and apply streak decay
    pub fn open(storage: S, clock: C) -> Self {
        Self::open_with_key(storage, clock, DEFAULT_SLOT_KEY)
    }

    /// Load from `slot_key` and apply streak decay
    pub fn open_with_key(storage: S, clock: C, slot_key: impl Into<String>) -> Self {
        let slot_key = slot_key.into();
        let snapshot = load_snapshot(&storage, &slot_key);

        let mut store = Self {
            storage,
            clock,
            slot_key,
            snapshot,
        };
        store.check_streak_status();
        store
    }

    // ========================================
    // ACCESSORS
    // ========================================

    pub fn progress(&self) -> &ProgressRecord {
        &self.snapshot.progress_record
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.snapshot.achievement_catalog
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    /// XP threshold of the level after `level`
    pub fn xp_for_next_level(level: u32) -> u64 {
        Level::xp_for_next(level)
    }

    pub fn summary(&self) -> CatalogSummary {
        let catalog = self.achievements();
        CatalogSummary {
            unlocked: catalog.iter().filter(|a| a.unlocked).count(),
            total: catalog.len(),
            remaining_reward: catalog
                .iter()
                .filter(|a| !a.unlocked)
                .map(|a| a.reward)
                .sum(),
        }
    }

    // ========================================
    // STREAK OPERATIONS
    // ========================================

    /// Reset the current streak if the last activity is two or more days old.
    ///
    /// Returns true if the streak was reset. Runs once when the store opens.
    pub fn check_streak_status(&mut self) -> bool {
        let today = self.clock.today();
        let record = &mut self.snapshot.progress_record;

        if record.current_streak == 0 || !is_streak_broken(record.last_activity_date, today) {
            return false;
        }

        info!(
            lost_streak = record.current_streak,
            last_activity = ?record.last_activity_date,
            "Streak expired"
        );
        record.current_streak = 0;
        self.persist();
        true
    }

    // ========================================
    // MAIN OPERATION
    // ========================================

    /// Record one finished learning task
    pub fn complete_task(&mut self, category: TaskCategory) -> TaskOutcome {
        let today = self.clock.today();
        let record = &mut self.snapshot.progress_record;
        let level_before = record.level;

        if is_new_day(record.last_activity_date, today) {
            record.extend_streak();
            debug!(streak = record.current_streak, "Streak extended");
        }

        let task_reward = Reward::for_task(record.current_streak);
        record.apply_reward(task_reward);
        record.record_task(category);
        record.last_activity_date = Some(today);

        let evaluation = checker::evaluate(&mut self.snapshot.achievement_catalog, record, today);
        record.apply_reward(evaluation.reward);

        for achievement in &evaluation.unlocked {
            info!(id = %achievement.id, title = %achievement.title, "Achievement unlocked");
        }

        let level_up = record.level > level_before;
        if level_up {
            info!(
                old_level = level_before,
                new_level = record.level,
                "Level up"
            );
        }

        self.persist();

        TaskOutcome {
            reward: task_reward + evaluation.reward,
            unlocked_achievements: evaluation.unlocked,
            level_up,
        }
    }

    /// Record a finished task by category name; unknown names use the default category
    pub fn complete_task_named(&mut self, category: &str) -> TaskOutcome {
        self.complete_task(TaskCategory::parse_or_default(category))
    }

    // ========================================
    // PERSISTENCE
    // ========================================

    /// Write the full snapshot to the slot
    pub fn save(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.snapshot)?;
        self.storage.write(&self.slot_key, &json)
    }

    /// Best-effort save. In-memory state stays authoritative on failure.
    fn persist(&mut self) {
        if let Err(e) = self.save() {
            warn!(slot = %self.slot_key, error = %e, "Failed to persist gamification snapshot");
        }
    }
}

/// Read and parse the snapshot, falling back to defaults on any problem
fn load_snapshot<S: SnapshotStorage>(storage: &S, slot_key: &str) -> Snapshot {
    let raw = match storage.read(slot_key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(slot = slot_key, "No snapshot found, starting fresh");
            return Snapshot::default();
        }
        Err(e) => {
            warn!(slot = slot_key, error = %e, "Failed to read snapshot, starting fresh");
            return Snapshot::default();
        }
    };

    match serde_json::from_str::<Snapshot>(&raw) {
        Ok(mut snapshot) => {
            snapshot.progress_record.normalize();
            debug!(
                slot = slot_key,
                xp = snapshot.progress_record.xp,
                achievements = snapshot.achievement_catalog.len(),
                "Loaded snapshot"
            );
            snapshot
        }
        Err(e) => {
            warn!(slot = slot_key, error = %e, "Corrupt snapshot, starting fresh");
            Snapshot::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamification::definitions::AchievementId;
    use crate::gamification::streaks::ManualClock;
    use crate::storage::MemoryStorage;
    use chrono::NaiveDate;

    fn clock() -> ManualClock {
        ManualClock::new(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap())
    }

    struct FailingStorage;

    impl SnapshotStorage for FailingStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::InvalidKey("unavailable".to_string()))
        }

        fn write(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::InvalidKey(key.to_string()))
        }
    }

    #[test]
    fn test_first_completion() {
        let mut store = GamificationStore::open(MemoryStorage::new(), clock());
        let outcome = store.complete_task(TaskCategory::Concept);

        let record = store.progress();
        assert_eq!(record.current_streak, 1);
        assert_eq!(record.longest_streak, 1);
        assert_eq!(record.xp, 16);
        assert_eq!(record.points, 11);
        assert_eq!(record.coins, 5);
        assert_eq!(record.total_tasks_completed, 1);
        assert_eq!(record.level, 1);
        assert_eq!(outcome.reward, Reward::new(11, 16, 5));
        assert!(outcome.unlocked_achievements.is_empty());
        assert!(!outcome.level_up);
    }

    #[test]
    fn test_same_day_does_not_extend_streak() {
        let mut store = GamificationStore::open(MemoryStorage::new(), clock());
        store.complete_task(TaskCategory::Quiz);
        let outcome = store.complete_task(TaskCategory::Quiz);

        assert_eq!(store.progress().current_streak, 1);
        assert_eq!(store.progress().total_tasks_completed, 2);
        assert_eq!(outcome.reward, Reward::new(11, 16, 5));
        assert_eq!(store.progress().xp, 32);
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let mut store = GamificationStore::open(MemoryStorage::new(), clock());
        assert_eq!(store.storage().write_count(), 0);
        store.complete_task(TaskCategory::Chat);
        store.complete_task(TaskCategory::Chat);
        assert_eq!(store.storage().write_count(), 2);

        let raw = store.storage().get(DEFAULT_SLOT_KEY).unwrap();
        let saved: Snapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(&saved, store.snapshot());
    }

    #[test]
    fn test_failed_persistence_is_not_fatal() {
        let mut store = GamificationStore::open(FailingStorage, clock());
        let outcome = store.complete_task(TaskCategory::Concept);
        assert_eq!(outcome.reward, Reward::new(11, 16, 5));
        assert_eq!(store.progress().total_tasks_completed, 1);
        assert!(store.save().is_err());
    }

    #[test]
    fn test_corrupt_snapshot_falls_back_to_defaults() {
        let storage = MemoryStorage::with_slot(DEFAULT_SLOT_KEY, "{not json");
        let store = GamificationStore::open(storage, clock());
        assert_eq!(store.snapshot(), &Snapshot::default());
    }

    #[test]
    fn test_unknown_category_uses_default() {
        let mut store = GamificationStore::open(MemoryStorage::new(), clock());
        let outcome = store.complete_task_named("flashcards");
        assert_eq!(outcome.reward, Reward::new(11, 16, 5));
        assert_eq!(
            store.progress().tasks_by_category.get(&TaskCategory::Concept),
            Some(&1)
        );
    }

    #[test]
    fn test_streak_resets_on_open_after_gap() {
        let clock = clock();
        let mut storage = MemoryStorage::new();
        {
            let mut store = GamificationStore::open(&mut storage, &clock);
            store.complete_task(TaskCategory::Concept);
            clock.advance_days(1);
            store.complete_task(TaskCategory::Concept);
            assert_eq!(store.progress().current_streak, 2);
        }

        clock.advance_days(2);
        let store = GamificationStore::open(&mut storage, &clock);
        assert_eq!(store.progress().current_streak, 0);
        assert_eq!(store.progress().longest_streak, 2);
        assert_eq!(store.progress().total_tasks_completed, 2);
    }

    #[test]
    fn test_level_up_reported() {
        let mut store = GamificationStore::open(MemoryStorage::new(), clock());
        store.snapshot.progress_record.apply_reward(Reward::new(0, 90, 0));
        let outcome = store.complete_task(TaskCategory::Concept);
        assert!(outcome.level_up);
        assert_eq!(store.progress().level, 2);
    }

    #[test]
    fn test_level_up_from_achievement_reward_alone() {
        let mut store = GamificationStore::open(MemoryStorage::new(), clock());
        store.snapshot.progress_record.apply_reward(Reward::new(0, 80, 0));
        store.snapshot.progress_record.total_tasks_completed = 4;

        // Task reward takes xp to 96, the fifth-task unlock adds 50
        let outcome = store.complete_task(TaskCategory::Concept);
        let ids: Vec<_> = outcome.unlocked_achievements.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![AchievementId::GettingStarted]);
        assert_eq!(store.progress().xp, 146);
        assert_eq!(store.progress().level, 2);
        assert!(outcome.level_up);
    }

    #[test]
    fn test_huge_loaded_rewards_do_not_panic() {
        let mut snapshot = Snapshot::default();
        for achievement in &mut snapshot.achievement_catalog {
            achievement.reward = Reward::new(u64::MAX / 2, u64::MAX / 2, u64::MAX / 2);
        }
        if let Some(first) = snapshot
            .achievement_catalog
            .iter_mut()
            .find(|a| a.id == AchievementId::GettingStarted)
        {
            first.max_progress = 1;
            first.reward = Reward::new(u64::MAX, u64::MAX, u64::MAX);
        }
        let storage =
            MemoryStorage::with_slot(DEFAULT_SLOT_KEY, serde_json::to_string(&snapshot).unwrap());
        let mut store = GamificationStore::open(storage, clock());

        let summary = store.summary();
        assert_eq!(summary.remaining_reward.xp, u64::MAX);

        let outcome = store.complete_task(TaskCategory::Concept);
        assert_eq!(outcome.reward.xp, u64::MAX);
        assert_eq!(store.progress().xp, u64::MAX);
        assert_eq!(store.progress().level, Level::max_level());
    }

    #[test]
    fn test_summary_counts() {
        let mut store = GamificationStore::open(MemoryStorage::new(), clock());
        let before = store.summary();
        assert_eq!(before.unlocked, 0);

        for _ in 0..5 {
            store.complete_task(TaskCategory::Concept);
        }
        let after = store.summary();
        assert_eq!(after.unlocked, 1);
        assert_eq!(after.total, before.total);
        assert!(store
            .achievements()
            .iter()
            .any(|a| a.id == AchievementId::GettingStarted && a.unlocked));
        assert_eq!(
            after.remaining_reward + Reward::new(25, 50, 10),
            before.remaining_reward
        );
    }

    #[test]
    fn test_xp_for_next_level() {
        assert_eq!(
            GamificationStore::<MemoryStorage, ManualClock>::xp_for_next_level(1),
            100
        );
        assert_eq!(
            GamificationStore::<MemoryStorage, ManualClock>::xp_for_next_level(10),
            30_000
        );
    }
}
