//! Achievement definitions and metadata
//!
//! The catalog is seeded from these definitions once, when no snapshot
//! exists yet. After that entries are only ever mutated in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::rewards::Reward;

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    // Task count achievements
    GettingStarted,
    DedicatedStudent,
    KnowledgeSeeker,

    // Streak achievements
    OnFire,
    WeekWarrior,
    MonthlyMaster,
    Unstoppable,

    // Point achievements
    PointCollector,
    PointHoarder,

    // Skill achievements
    WellRounded,
    Polymath,

    // Special achievements
    RisingStar,
    Legend,
}

impl AchievementId {
    /// Get the string ID used in snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GettingStarted => "getting_started",
            Self::DedicatedStudent => "dedicated_student",
            Self::KnowledgeSeeker => "knowledge_seeker",
            Self::OnFire => "on_fire",
            Self::WeekWarrior => "week_warrior",
            Self::MonthlyMaster => "monthly_master",
            Self::Unstoppable => "unstoppable",
            Self::PointCollector => "point_collector",
            Self::PointHoarder => "point_hoarder",
            Self::WellRounded => "well_rounded",
            Self::Polymath => "polymath",
            Self::RisingStar => "rising_star",
            Self::Legend => "legend",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|id| id.as_str() == s)
    }

    /// Get all achievement IDs
    pub fn all() -> &'static [AchievementId] {
        &[
            Self::GettingStarted,
            Self::DedicatedStudent,
            Self::KnowledgeSeeker,
            Self::OnFire,
            Self::WeekWarrior,
            Self::MonthlyMaster,
            Self::Unstoppable,
            Self::PointCollector,
            Self::PointHoarder,
            Self::WellRounded,
            Self::Polymath,
            Self::RisingStar,
            Self::Legend,
        ]
    }
}

impl std::fmt::Display for AchievementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Achievement category. Decides which progress field an entry reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Tasks,
    Streak,
    Points,
    Skills,
    Special,
}

impl AchievementCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tasks => "Tasks",
            Self::Streak => "Streaks",
            Self::Points => "Points",
            Self::Skills => "Skills",
            Self::Special => "Special",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementIcon {
    Target,
    Book,
    Graduation,
    Flame,
    Calendar,
    Crown,
    Lightning,
    Coin,
    Gem,
    Puzzle,
    Brain,
    Star,
    Trophy,
}

impl AchievementIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Target => "🎯",
            Self::Book => "📚",
            Self::Graduation => "🎓",
            Self::Flame => "🔥",
            Self::Calendar => "📅",
            Self::Crown => "👑",
            Self::Lightning => "⚡",
            Self::Coin => "🪙",
            Self::Gem => "💎",
            Self::Puzzle => "🧩",
            Self::Brain => "🧠",
            Self::Star => "⭐",
            Self::Trophy => "🏆",
        }
    }
}

/// Static achievement definition
#[derive(Debug, Clone)]
pub struct AchievementDefinition {
    pub id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: AchievementIcon,
    pub category: AchievementCategory,
    pub max_progress: u64,
    pub reward: Reward,
    /// Streak entries with this flag read the longest streak instead of the current one
    pub tracks_longest_streak: bool,
}

/// All achievement definitions
pub static ACHIEVEMENTS: &[AchievementDefinition] = &[
    // === TASKS ===
    AchievementDefinition {
        id: AchievementId::GettingStarted,
        title: "Getting Started",
        description: "Complete 5 learning tasks",
        icon: AchievementIcon::Target,
        category: AchievementCategory::Tasks,
        max_progress: 5,
        reward: Reward::new(25, 50, 10),
        tracks_longest_streak: false,
    },
    AchievementDefinition {
        id: AchievementId::DedicatedStudent,
        title: "Dedicated Student",
        description: "Complete 25 learning tasks",
        icon: AchievementIcon::Book,
        category: AchievementCategory::Tasks,
        max_progress: 25,
        reward: Reward::new(75, 150, 30),
        tracks_longest_streak: false,
    },
    AchievementDefinition {
        id: AchievementId::KnowledgeSeeker,
        title: "Knowledge Seeker",
        description: "Complete 100 learning tasks",
        icon: AchievementIcon::Graduation,
        category: AchievementCategory::Tasks,
        max_progress: 100,
        reward: Reward::new(250, 500, 100),
        tracks_longest_streak: false,
    },
    // === STREAK ===
    AchievementDefinition {
        id: AchievementId::OnFire,
        title: "On Fire",
        description: "Maintain a 3-day streak",
        icon: AchievementIcon::Flame,
        category: AchievementCategory::Streak,
        max_progress: 3,
        reward: Reward::new(20, 30, 10),
        tracks_longest_streak: false,
    },
    AchievementDefinition {
        id: AchievementId::WeekWarrior,
        title: "Week Warrior",
        description: "Maintain a 7-day streak",
        icon: AchievementIcon::Calendar,
        category: AchievementCategory::Streak,
        max_progress: 7,
        reward: Reward::new(50, 100, 25),
        tracks_longest_streak: false,
    },
    AchievementDefinition {
        id: AchievementId::MonthlyMaster,
        title: "Monthly Master",
        description: "Maintain a 30-day streak",
        icon: AchievementIcon::Crown,
        category: AchievementCategory::Streak,
        max_progress: 30,
        reward: Reward::new(200, 400, 100),
        tracks_longest_streak: false,
    },
    AchievementDefinition {
        id: AchievementId::Unstoppable,
        title: "Unstoppable",
        description: "Reach a 14-day streak at any point",
        icon: AchievementIcon::Lightning,
        category: AchievementCategory::Streak,
        max_progress: 14,
        reward: Reward::new(100, 200, 50),
        tracks_longest_streak: true,
    },
    // === POINTS ===
    AchievementDefinition {
        id: AchievementId::PointCollector,
        title: "Point Collector",
        description: "Earn 500 points",
        icon: AchievementIcon::Coin,
        category: AchievementCategory::Points,
        max_progress: 500,
        reward: Reward::new(0, 50, 20),
        tracks_longest_streak: false,
    },
    AchievementDefinition {
        id: AchievementId::PointHoarder,
        title: "Point Hoarder",
        description: "Earn 2,500 points",
        icon: AchievementIcon::Gem,
        category: AchievementCategory::Points,
        max_progress: 2500,
        reward: Reward::new(0, 200, 50),
        tracks_longest_streak: false,
    },
    // === SKILLS ===
    AchievementDefinition {
        id: AchievementId::WellRounded,
        title: "Well-Rounded",
        description: "Complete tasks in 3 different categories",
        icon: AchievementIcon::Puzzle,
        category: AchievementCategory::Skills,
        max_progress: 3,
        reward: Reward::new(30, 60, 15),
        tracks_longest_streak: false,
    },
    AchievementDefinition {
        id: AchievementId::Polymath,
        title: "Polymath",
        description: "Complete tasks in every category",
        icon: AchievementIcon::Brain,
        category: AchievementCategory::Skills,
        max_progress: 6,
        reward: Reward::new(100, 200, 50),
        tracks_longest_streak: false,
    },
    // === SPECIAL ===
    AchievementDefinition {
        id: AchievementId::RisingStar,
        title: "Rising Star",
        description: "Reach level 5",
        icon: AchievementIcon::Star,
        category: AchievementCategory::Special,
        max_progress: 5,
        reward: Reward::new(50, 0, 50),
        tracks_longest_streak: false,
    },
    AchievementDefinition {
        id: AchievementId::Legend,
        title: "Legend",
        description: "Reach level 10",
        icon: AchievementIcon::Trophy,
        category: AchievementCategory::Special,
        max_progress: 10,
        reward: Reward::new(500, 0, 250),
        tracks_longest_streak: false,
    },
];

/// A catalog entry with its mutable unlock state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: AchievementId,
    pub title: String,
    pub description: String,
    pub icon: AchievementIcon,
    pub category: AchievementCategory,
    pub unlocked: bool,
    pub progress: u64,
    pub max_progress: u64,
    pub reward: Reward,
    #[serde(default)]
    pub tracks_longest_streak: bool,
    #[serde(default)]
    pub unlocked_on: Option<NaiveDate>,
}

impl Achievement {
    /// Fresh, locked entry for a definition
    pub fn seed(def: &AchievementDefinition) -> Self {
        Self {
            id: def.id,
            title: def.title.to_string(),
            description: def.description.to_string(),
            icon: def.icon,
            category: def.category,
            unlocked: false,
            progress: 0,
            max_progress: def.max_progress,
            reward: def.reward,
            tracks_longest_streak: def.tracks_longest_streak,
            unlocked_on: None,
        }
    }

    /// Progress as a fraction (0.0 - 1.0)
    pub fn completion(&self) -> f32 {
        if self.unlocked || self.max_progress == 0 {
            1.0
        } else {
            self.progress as f32 / self.max_progress as f32
        }
    }
}

/// The default catalog: every definition, locked, with zero progress
pub fn default_catalog() -> Vec<Achievement> {
    ACHIEVEMENTS.iter().map(Achievement::seed).collect()
}
