//! XP and Level system
//!
//! Defines level thresholds, titles, and XP calculations.

/// Level definition
#[derive(Debug, Clone)]
pub struct Level {
    pub level: u32,
    pub xp_required: u64,
    pub title: &'static str,
}

/// All level definitions (must be sorted by level)
pub static LEVELS: &[Level] = &[
    Level {
        level: 1,
        xp_required: 0,
        title: "Beginner",
    },
    Level {
        level: 2,
        xp_required: 100,
        title: "Learner",
    },
    Level {
        level: 3,
        xp_required: 250,
        title: "Student",
    },
    Level {
        level: 4,
        xp_required: 500,
        title: "Scholar",
    },
    Level {
        level: 5,
        xp_required: 1000,
        title: "Adept",
    },
    Level {
        level: 6,
        xp_required: 2000,
        title: "Expert",
    },
    Level {
        level: 7,
        xp_required: 4000,
        title: "Master",
    },
    Level {
        level: 8,
        xp_required: 8000,
        title: "Sage",
    },
    Level {
        level: 9,
        xp_required: 15000,
        title: "Luminary",
    },
    Level {
        level: 10,
        xp_required: 30000,
        title: "Legend",
    },
];

impl Level {
    /// Calculate level and title for given XP
    pub fn for_xp(xp: u64) -> &'static Level {
        LEVELS
            .iter()
            .rev()
            .find(|l| xp >= l.xp_required)
            .unwrap_or(&LEVELS[0])
    }

    /// Level number for given XP. Pegged at the max level beyond the last threshold.
    pub fn number_for_xp(xp: u64) -> u32 {
        Self::for_xp(xp).level
    }

    /// XP threshold of the level after `current_level`.
    ///
    /// At (or beyond) the max level this is the last threshold, so callers
    /// rendering "xp / next" never see a missing target.
    pub fn xp_for_next(current_level: u32) -> u64 {
        LEVELS
            .iter()
            .find(|l| l.level == current_level.saturating_add(1))
            .or_else(|| LEVELS.last())
            .map(|l| l.xp_required)
            .unwrap_or(0)
    }

    /// Get max level
    pub fn max_level() -> u32 {
        LEVELS.last().map(|l| l.level).unwrap_or(1)
    }
}

/// Where a given XP total sits inside its level
#[derive(Debug, Clone, PartialEq)]
pub struct LevelProgress {
    pub total_xp: u64,
    pub level: u32,
    pub title: &'static str,
    /// XP threshold of the current level
    pub current_level_xp: u64,
    /// XP threshold of the next level (None if max)
    pub next_level_xp: Option<u64>,
}

impl LevelProgress {
    pub fn for_xp(total_xp: u64) -> Self {
        let level_info = Level::for_xp(total_xp);
        let next_level_xp = if level_info.level >= Level::max_level() {
            None
        } else {
            Some(Level::xp_for_next(level_info.level))
        };

        Self {
            total_xp,
            level: level_info.level,
            title: level_info.title,
            current_level_xp: level_info.xp_required,
            next_level_xp,
        }
    }

    /// XP earned since reaching the current level
    pub fn xp_into_level(&self) -> u64 {
        self.total_xp - self.current_level_xp
    }

    /// XP still missing for the next level (0 at max level)
    pub fn xp_remaining(&self) -> u64 {
        self.next_level_xp
            .map(|next| next.saturating_sub(self.total_xp))
            .unwrap_or(0)
    }

    /// Calculate progress percentage to next level (0.0 - 1.0)
    pub fn progress_to_next(&self) -> f32 {
        match self.next_level_xp {
            Some(next) => {
                let xp_for_level = next - self.current_level_xp;
                if xp_for_level == 0 {
                    1.0
                } else {
                    (self.xp_into_level() as f32) / (xp_for_level as f32)
                }
            }
            None => 1.0, // Max level
        }
    }

    /// Check if at max level
    pub fn is_max_level(&self) -> bool {
        self.next_level_xp.is_none()
    }
}
