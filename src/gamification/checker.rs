//! Achievement checking logic
//!
//! Evaluates locked catalog entries against a progress record.

use chrono::NaiveDate;

use super::definitions::{Achievement, AchievementCategory};
use super::progress::ProgressRecord;
use super::rewards::Reward;

/// Current value of the field an achievement tracks
pub fn progress_source(achievement: &Achievement, record: &ProgressRecord) -> u64 {
    match achievement.category {
        AchievementCategory::Tasks => record.total_tasks_completed,
        AchievementCategory::Streak if achievement.tracks_longest_streak => {
            u64::from(record.longest_streak)
        }
        AchievementCategory::Streak => u64::from(record.current_streak),
        AchievementCategory::Points => record.points,
        AchievementCategory::Skills => record.categories_practiced(),
        AchievementCategory::Special => u64::from(record.level),
    }
}

/// Result of one evaluation pass
#[derive(Debug, Clone, Default)]
pub struct Evaluation {
    /// Entries that unlocked during this pass
    pub unlocked: Vec<Achievement>,
    /// Sum of their rewards
    pub reward: Reward,
}

/// Update progress of every locked entry and unlock those that reached their target.
///
/// Unlocked entries are left untouched, so each reward is granted at most once.
pub fn evaluate(
    catalog: &mut [Achievement],
    record: &ProgressRecord,
    today: NaiveDate,
) -> Evaluation {
    let mut evaluation = Evaluation::default();

    for achievement in catalog.iter_mut().filter(|a| !a.unlocked) {
        achievement.progress = progress_source(achievement, record).min(achievement.max_progress);

        if achievement.progress >= achievement.max_progress {
            achievement.unlocked = true;
            achievement.unlocked_on = Some(today);
            evaluation.reward += achievement.reward;
            evaluation.unlocked.push(achievement.clone());
        }
    }

    evaluation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamification::category::TaskCategory;
    use crate::gamification::definitions::{default_catalog, AchievementId};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn entry(catalog: &[Achievement], id: AchievementId) -> &Achievement {
        catalog.iter().find(|a| a.id == id).unwrap()
    }

    #[test]
    fn test_nothing_unlocks_from_zero() {
        let mut catalog = default_catalog();
        let evaluation = evaluate(&mut catalog, &ProgressRecord::default(), today());
        assert!(evaluation.unlocked.is_empty());
        assert!(evaluation.reward.is_zero());
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut catalog = default_catalog();
        let record = ProgressRecord {
            total_tasks_completed: 40,
            ..Default::default()
        };
        evaluate(&mut catalog, &record, today());

        let started = entry(&catalog, AchievementId::GettingStarted);
        assert!(started.unlocked);
        assert_eq!(started.progress, 5);

        let seeker = entry(&catalog, AchievementId::KnowledgeSeeker);
        assert!(!seeker.unlocked);
        assert_eq!(seeker.progress, 40);
    }

    #[test]
    fn test_unlock_happens_once() {
        let mut catalog = default_catalog();
        let record = ProgressRecord {
            current_streak: 3,
            longest_streak: 3,
            ..Default::default()
        };

        let first = evaluate(&mut catalog, &record, today());
        assert_eq!(first.unlocked.len(), 1);
        assert_eq!(first.unlocked[0].id, AchievementId::OnFire);
        assert_eq!(first.reward, Reward::new(20, 30, 10));
        assert_eq!(first.unlocked[0].unlocked_on, Some(today()));

        let second = evaluate(&mut catalog, &record, today());
        assert!(second.unlocked.is_empty());
        assert!(second.reward.is_zero());
    }

    #[test]
    fn test_unlocked_entry_never_reverts() {
        let mut catalog = default_catalog();
        let streaking = ProgressRecord {
            current_streak: 3,
            longest_streak: 3,
            ..Default::default()
        };
        evaluate(&mut catalog, &streaking, today());

        let broken = ProgressRecord {
            current_streak: 0,
            longest_streak: 3,
            ..Default::default()
        };
        evaluate(&mut catalog, &broken, today());

        let on_fire = entry(&catalog, AchievementId::OnFire);
        assert!(on_fire.unlocked);
        assert_eq!(on_fire.progress, 3);
    }

    #[test]
    fn test_longest_streak_flag() {
        let mut catalog = default_catalog();
        let record = ProgressRecord {
            current_streak: 1,
            longest_streak: 14,
            ..Default::default()
        };
        let evaluation = evaluate(&mut catalog, &record, today());

        let ids: Vec<_> = evaluation.unlocked.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![AchievementId::Unstoppable]);
        assert_eq!(entry(&catalog, AchievementId::WeekWarrior).progress, 1);
    }

    #[test]
    fn test_skills_and_special_sources() {
        let mut record = ProgressRecord {
            level: 5,
            ..Default::default()
        };
        record.record_task(TaskCategory::Quiz);
        record.record_task(TaskCategory::Chat);
        record.record_task(TaskCategory::Interview);

        let mut catalog = default_catalog();
        let evaluation = evaluate(&mut catalog, &record, today());
        let ids: Vec<_> = evaluation.unlocked.iter().map(|a| a.id).collect();

        assert!(ids.contains(&AchievementId::WellRounded));
        assert!(ids.contains(&AchievementId::RisingStar));
        assert!(!ids.contains(&AchievementId::Polymath));
        assert_eq!(entry(&catalog, AchievementId::Polymath).progress, 3);
    }
}
