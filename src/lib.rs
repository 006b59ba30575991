//! StudyQuest - gamified learning progress
//!
//! Tracks what a learner earns for finishing AI-generated learning tasks:
//! points, XP and levels, coins, daily streaks, and one-time achievements.
//!
//! ## Layout
//!
//! - [`gamification`]: the progress store and its pure rules (levels,
//!   rewards, streaks, achievement evaluation)
//! - [`storage`]: durable key-value slots the store snapshots into
//! - [`config`]: TOML configuration selecting the storage backend

pub mod config;
pub mod gamification;
pub mod storage;

pub use gamification::{GamificationStore, ProgressRecord, Reward, TaskCategory, TaskOutcome};
