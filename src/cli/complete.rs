//! Complete command implementation

use anyhow::Result;

use studyquest::config::Config;
use studyquest::gamification::TaskCategory;

use super::open_store;

/// Record one finished learning task
pub fn complete_command(config: &Config, category: Option<String>) -> Result<()> {
    let mut store = open_store(config)?;

    let category = category
        .as_deref()
        .map(TaskCategory::parse_or_default)
        .unwrap_or_default();

    let outcome = store.complete_task(category);
    let record = store.progress();

    println!("Task completed ({})", category.label());
    println!("  {}", outcome.reward);
    println!("  Streak: {} day(s)", record.current_streak);

    for achievement in &outcome.unlocked_achievements {
        println!(
            "  {} Achievement unlocked: {} ({})",
            achievement.icon.glyph(),
            achievement.title,
            achievement.reward
        );
    }

    if outcome.level_up {
        println!("  Level up! You are now level {}", record.level);
    }

    Ok(())
}
