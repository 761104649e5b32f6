//! Reward notification message formatting.

use github_events::PullRequestSummary;
use reward_catalog::RewardItem;

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;

/// Builds the chat message announcing a reward.
///
/// The message leads with the rarity glyph, names the pull request author
/// and the reward they caught, then links the pull request:
///
/// ```text
/// 🔵 🎉 alice caught a Pikachu for getting a PR approved!
///
/// PR: Fix bug
/// https://example.com/pr/1
/// ```
pub fn format_reward_message(pull_request: &PullRequestSummary, reward: &RewardItem) -> String {
    format!(
        "{} 🎉 {} caught a {} for getting a PR approved!\n\nPR: {}\n{}",
        reward.rarity.glyph(),
        pull_request.user.login,
        reward.name,
        pull_request.title,
        pull_request.html_url
    )
}
