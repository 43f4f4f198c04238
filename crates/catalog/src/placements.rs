//! Placement preset resolution — each preset maps to a fixed list of
//! concrete placement names.

use launchgrid_core::types::PlacementPreset;

const FEEDS_REELS: &[&str] = &[
    "facebook_feed",
    "instagram_feed",
    "facebook_reels",
    "instagram_reels",
];

const STORIES_ONLY: &[&str] = &[
    "facebook_stories",
    "instagram_stories",
    "messenger_stories",
];

const ALL_PLACEMENTS: &[&str] = &[
    "facebook_feed",
    "instagram_feed",
    "facebook_reels",
    "instagram_reels",
    "facebook_stories",
    "instagram_stories",
    "messenger_stories",
    "facebook_marketplace",
    "facebook_right_column",
    "instagram_explore",
    "audience_network_native",
];

/// Resolve a preset to its concrete placement names.
pub fn resolve_placements(preset: PlacementPreset) -> &'static [&'static str] {
    match preset {
        PlacementPreset::FeedsReels => FEEDS_REELS,
        PlacementPreset::StoriesOnly => STORIES_ONLY,
        PlacementPreset::AllPlacements => ALL_PLACEMENTS,
    }
}
