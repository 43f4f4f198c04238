//! Percentage-based budget distribution across funnel stages.

use launchgrid_core::types::{BudgetBlock, FunnelStage};
use serde::{Deserialize, Serialize};

/// Computed amount for one enabled block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub stage: FunnelStage,
    pub label: String,
    pub percentage: f64,
    pub amount: f64,
}

/// Distribution result. The calculator reports the state of the plan and
/// never clamps or normalizes; the validation layer decides whether
/// over-allocation blocks and under-allocation warns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetDistribution {
    pub allocations: Vec<BudgetAllocation>,
    pub allocated_percent: f64,
    /// `100 - allocated_percent`; negative when over-allocated.
    pub remainder_percent: f64,
    pub over_allocated: bool,
}

/// Compute per-block amounts: `amount = total × percentage / 100`.
/// Disabled blocks are skipped and contribute nothing to the aggregate.
pub fn distribute(total_budget: f64, blocks: &[BudgetBlock]) -> BudgetDistribution {
    let mut allocations = Vec::new();
    let mut allocated_percent = 0.0;

    for block in blocks.iter().filter(|b| b.enabled) {
        allocated_percent += block.percentage;
        allocations.push(BudgetAllocation {
            stage: block.stage,
            label: block.label.clone(),
            percentage: block.percentage,
            amount: total_budget * block.percentage / 100.0,
        });
    }

    BudgetDistribution {
        allocations,
        allocated_percent,
        remainder_percent: 100.0 - allocated_percent,
        over_allocated: allocated_percent > 100.0,
    }
}
