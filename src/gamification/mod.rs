//! Gamification system: XP, Levels, Streaks, and Achievements
//!
//! [`GamificationStore`] is the only stateful piece. Storage and the source
//! of "today" are injected, so day boundaries can be simulated in tests.
//!
//! # Usage
//!
//! ```ignore
//! let storage = JsonFileStorage::new(data_dir);
//! let mut store = GamificationStore::open(storage, SystemClock);
//!
//! let outcome = store.complete_task(TaskCategory::Quiz);
//! println!("{}", outcome.reward);
//! ```

mod category;
mod checker;
mod definitions;
mod levels;
mod progress;
mod rewards;
mod store;
mod streaks;

pub use category::TaskCategory;
pub use checker::{evaluate, progress_source, Evaluation};
pub use definitions::{
    default_catalog, Achievement, AchievementCategory, AchievementDefinition, AchievementIcon,
    AchievementId, ACHIEVEMENTS,
};
pub use levels::{Level, LevelProgress, LEVELS};
pub use progress::ProgressRecord;
pub use rewards::{streak_multiplier, streak_multiplier_tenths, Reward, MAX_MULTIPLIER_TENTHS};
pub use store::{CatalogSummary, GamificationStore, Snapshot, TaskOutcome, DEFAULT_SLOT_KEY};
pub use streaks::{day_string, days_since, is_new_day, is_streak_broken, Clock, ManualClock, SystemClock};
