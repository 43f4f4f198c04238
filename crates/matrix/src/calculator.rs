//! Full-factorial cardinality expansion.

use launchgrid_core::types::MatrixDimensions;
use serde::{Deserialize, Serialize};

/// Raw counts of the configured items on each axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixInput {
    pub audiences: u32,
    pub placements: u32,
    pub creatives: u32,
    pub copy_variants: u32,
}

/// Result of the expansion. `soft_limit_exceeded` is advisory; the
/// calculator never refuses a computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixCounts {
    pub ad_sets: u64,
    pub total_ads: u64,
    pub soft_limit_exceeded: bool,
}

/// Expand configured counts into ad-set/ad totals.
///
/// Every enabled audience is paired with every enabled placement to form
/// an ad set, and every ad set receives one ad per creative-per-copy
/// combination: `ad_sets = A × P`, `total_ads = ad_sets × C × V`. A
/// disabled axis contributes a factor of 1; in particular the copy axis
/// defaults to a single implicit variant when disabled.
pub fn expand(input: MatrixInput, dims: MatrixDimensions) -> MatrixCounts {
    let a = axis(dims.audiences, input.audiences);
    let p = axis(dims.placements, input.placements);
    let c = axis(dims.creatives, input.creatives);
    let v = axis(dims.copy_variants, input.copy_variants);

    // Saturate rather than overflow: counts this large are far past any
    // soft limit, and the calculator must stay total.
    let ad_sets = a.saturating_mul(p);
    let total_ads = ad_sets.saturating_mul(c).saturating_mul(v);

    MatrixCounts {
        ad_sets,
        total_ads,
        soft_limit_exceeded: total_ads > u64::from(dims.soft_limit),
    }
}

fn axis(enabled: bool, count: u32) -> u64 {
    if enabled {
        u64::from(count)
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_axes() -> MatrixDimensions {
        MatrixDimensions {
            audiences: true,
            placements: true,
            creatives: true,
            format_variants: false,
            copy_variants: true,
            soft_limit: 200,
        }
    }

    // 1. Cardinality law ----------------------------------------------------

    #[test]
    fn test_cardinality_law() {
        let counts = expand(
            MatrixInput {
                audiences: 2,
                placements: 3,
                creatives: 4,
                copy_variants: 1,
            },
            all_axes(),
        );
        assert_eq!(counts.ad_sets, 6);
        assert_eq!(counts.total_ads, 24);
    }

    #[test]
    fn test_zero_counts_yield_zero() {
        let counts = expand(MatrixInput::default(), all_axes());
        assert_eq!(counts.ad_sets, 0);
        assert_eq!(counts.total_ads, 0);
        assert!(!counts.soft_limit_exceeded);
    }

    // 2. Axis switches ------------------------------------------------------

    #[test]
    fn test_disabled_copy_axis_defaults_to_one_variant() {
        let mut dims = all_axes();
        dims.copy_variants = false;
        let counts = expand(
            MatrixInput {
                audiences: 2,
                placements: 3,
                creatives: 4,
                copy_variants: 7,
            },
            dims,
        );
        assert_eq!(counts.total_ads, 24);
    }

    #[test]
    fn test_disabled_placement_axis() {
        let mut dims = all_axes();
        dims.placements = false;
        let counts = expand(
            MatrixInput {
                audiences: 5,
                placements: 0,
                creatives: 2,
                copy_variants: 1,
            },
            dims,
        );
        assert_eq!(counts.ad_sets, 5);
        assert_eq!(counts.total_ads, 10);
    }

    // 3. Soft limit ---------------------------------------------------------

    #[test]
    fn test_soft_limit_flag() {
        let mut dims = all_axes();
        dims.soft_limit = 100;
        let counts = expand(
            MatrixInput {
                audiences: 5,
                placements: 5,
                creatives: 5,
                copy_variants: 1,
            },
            dims,
        );
        assert_eq!(counts.total_ads, 125);
        assert!(counts.soft_limit_exceeded);
    }

    #[test]
    fn test_extreme_counts_saturate_instead_of_overflowing() {
        let counts = expand(
            MatrixInput {
                audiences: u32::MAX,
                placements: u32::MAX,
                creatives: u32::MAX,
                copy_variants: 2,
            },
            all_axes(),
        );
        assert_eq!(counts.ad_sets, u64::from(u32::MAX) * u64::from(u32::MAX));
        assert_eq!(counts.total_ads, u64::MAX);
        assert!(counts.soft_limit_exceeded);
    }

    #[test]
    fn test_soft_limit_boundary_is_inclusive() {
        let mut dims = all_axes();
        dims.soft_limit = 24;
        let counts = expand(
            MatrixInput {
                audiences: 2,
                placements: 3,
                creatives: 4,
                copy_variants: 1,
            },
            dims,
        );
        assert!(!counts.soft_limit_exceeded);
    }
}
