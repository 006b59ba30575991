//! Task rewards and the streak multiplier

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// A bundle of points, XP and coins granted together
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub points: u64,
    pub xp: u64,
    pub coins: u64,
}

impl Reward {
    pub const fn new(points: u64, xp: u64, coins: u64) -> Self {
        Self { points, xp, coins }
    }

    /// Reward for a single finished learning task, before the streak multiplier
    pub const TASK_BASE: Reward = Reward::new(10, 15, 5);

    /// Scale every field by `tenths / 10`, rounding down.
    ///
    /// Integer arithmetic so `floor(15 * 1.1)` is 16 and not subject to
    /// float representation error.
    pub fn scaled_tenths(self, tenths: u64) -> Self {
        Self {
            points: self.points * tenths / 10,
            xp: self.xp * tenths / 10,
            coins: self.coins * tenths / 10,
        }
    }

    /// Task reward for the given (already updated) streak length
    pub fn for_task(current_streak: u32) -> Self {
        Self::TASK_BASE.scaled_tenths(streak_multiplier_tenths(current_streak))
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl Add for Reward {
    type Output = Reward;

    fn add(self, rhs: Reward) -> Reward {
        Reward {
            points: self.points.saturating_add(rhs.points),
            xp: self.xp.saturating_add(rhs.xp),
            coins: self.coins.saturating_add(rhs.coins),
        }
    }
}

impl AddAssign for Reward {
    fn add_assign(&mut self, rhs: Reward) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for Reward {
    fn sum<I: Iterator<Item = Reward>>(iter: I) -> Self {
        iter.fold(Reward::default(), Add::add)
    }
}

impl std::fmt::Display for Reward {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "+{} points, +{} XP, +{} coins",
            self.points, self.xp, self.coins
        )
    }
}

/// Multiplier cap, in tenths (3.0x)
pub const MAX_MULTIPLIER_TENTHS: u64 = 30;

/// Streak multiplier in tenths: `min(10 + streak, 30)`, i.e. `min(1 + 0.1 * streak, 3.0)`
pub fn streak_multiplier_tenths(current_streak: u32) -> u64 {
    (10 + u64::from(current_streak)).min(MAX_MULTIPLIER_TENTHS)
}

/// Streak multiplier as a float, for display
pub fn streak_multiplier(current_streak: u32) -> f64 {
    streak_multiplier_tenths(current_streak) as f64 / 10.0
}
