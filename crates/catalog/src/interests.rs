//! Interest taxonomy used by interest-targeted audience presets.

/// Flat interest taxonomy. Real deployments sync this from the ad
/// platform's targeting search endpoint.
pub const INTERESTS: &[&str] = &[
    "Fitness and wellness",
    "Running",
    "Yoga",
    "Cooking",
    "Food and drink",
    "Travel",
    "Adventure travel",
    "Technology",
    "Consumer electronics",
    "Video games",
    "Fashion",
    "Luxury goods",
    "Beauty",
    "Skincare",
    "Home improvement",
    "Gardening",
    "Personal finance",
    "Investing",
    "Small business",
    "Online shopping",
    "Pets",
    "Parenting",
    "Photography",
    "Music",
    "Outdoor recreation",
];

/// True when the interest name exists in the taxonomy (case-insensitive).
pub fn is_known_interest(name: &str) -> bool {
    INTERESTS.iter().any(|i| i.eq_ignore_ascii_case(name))
}
