//! Per-platform strategy estimator — how many ad sets and ads a
//! combination rule produces for a given audience/creative count.

use launchgrid_core::{LaunchError, LaunchResult};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// How audiences and creatives combine within one platform strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinationRule {
    FullFactorial,
    OneCreativePerAdSet,
    /// Reserved extension point. Documents naming it still parse, but
    /// estimation refuses until a real rule is designed.
    Custom,
}

/// Estimated output of a strategy. `advisory` marks numbers that assume
/// a positional pairing and should be presented as estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyEstimate {
    pub ad_sets: u64,
    pub ads: u64,
    pub advisory: bool,
}

/// Estimate ad-set/ad counts for a combination rule.
///
/// `one_creative_per_ad_set` pairs the nth audience with the nth
/// creative; when the counts differ the larger one wins and the result
/// is flagged advisory.
pub fn estimate(
    rule: CombinationRule,
    audiences: u32,
    creatives: u32,
) -> LaunchResult<StrategyEstimate> {
    let a = u64::from(audiences);
    let c = u64::from(creatives);

    match rule {
        CombinationRule::FullFactorial => Ok(StrategyEstimate {
            ad_sets: a,
            ads: a * c,
            advisory: false,
        }),
        CombinationRule::OneCreativePerAdSet => {
            let n = a.max(c);
            let advisory = a != c;
            if advisory {
                warn!(
                    audiences,
                    creatives, "one_creative_per_ad_set with mismatched counts; estimate only"
                );
            }
            Ok(StrategyEstimate {
                ad_sets: n,
                ads: n,
                advisory,
            })
        }
        CombinationRule::Custom => Err(LaunchError::UnsupportedRule(
            "custom combination rules are not implemented".to_string(),
        )),
    }
}
