//! Achievements command implementation

use anyhow::Result;

use studyquest::config::Config;
use studyquest::gamification::day_string;

use super::{open_store, progress_bar};

/// List the achievement catalog
pub fn achievements_command(config: &Config, unlocked_only: bool) -> Result<()> {
    let store = open_store(config)?;
    let summary = store.summary();

    println!("Achievements ({}/{}):\n", summary.unlocked, summary.total);

    for achievement in store
        .achievements()
        .iter()
        .filter(|a| !unlocked_only || a.unlocked)
    {
        println!(
            "  {} {} [{}] - {}",
            achievement.icon.glyph(),
            achievement.title,
            achievement.category.label(),
            achievement.description
        );

        match achievement.unlocked_on {
            Some(day) if achievement.unlocked => println!("    Unlocked {}", day_string(day)),
            _ if achievement.unlocked => println!("    Unlocked"),
            _ => println!(
                "    {} {}/{}  reward: {}",
                progress_bar(achievement.completion(), 10),
                achievement.progress,
                achievement.max_progress,
                achievement.reward
            ),
        }
    }

    if !unlocked_only && !summary.remaining_reward.is_zero() {
        println!("\nStill to earn: {}", summary.remaining_reward);
    }

    Ok(())
}
