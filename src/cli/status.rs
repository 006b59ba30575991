//! Status command implementation

use anyhow::Result;

use studyquest::config::Config;
use studyquest::gamification::{day_string, streak_multiplier, LevelProgress};

use super::{open_store, progress_bar};

/// Show the current progress record
pub fn status_command(config: &Config) -> Result<()> {
    let store = open_store(config)?;
    let record = store.progress();
    let level = LevelProgress::for_xp(record.xp);
    let summary = store.summary();

    println!("Level {} - {}", level.level, level.title);
    if level.is_max_level() {
        println!("  XP: {} (max level)", record.xp);
    } else {
        println!(
            "  XP: {} {} {} to next level",
            record.xp,
            progress_bar(level.progress_to_next(), 20),
            level.xp_remaining()
        );
    }
    println!("  Points: {}", record.points);
    println!("  Coins: {}", record.coins);
    println!();
    println!("Tasks completed: {}", record.total_tasks_completed);
    for (category, count) in &record.tasks_by_category {
        println!("  {}: {}", category.label(), count);
    }
    println!();
    println!(
        "Streak: {} day(s) (best {}), multiplier x{:.1}",
        record.current_streak,
        record.longest_streak,
        streak_multiplier(record.current_streak)
    );
    match record.last_activity_date {
        Some(day) => println!("  Last activity: {}", day_string(day)),
        None => println!("  No activity yet"),
    }
    println!();
    println!("Achievements: {}/{}", summary.unlocked, summary.total);

    Ok(())
}
