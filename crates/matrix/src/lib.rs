//! Matrix expansion arithmetic — ad-set/ad cardinality, funnel-stage
//! budget distribution, and per-platform strategy estimation. Every
//! function here is pure and total: zero counts yield zero, never an
//! error, so the UI can recompute on every keystroke.

pub mod budget;
pub mod calculator;
pub mod strategy;

pub use budget::{distribute, BudgetDistribution};
pub use calculator::{expand, MatrixCounts, MatrixInput};
pub use strategy::{estimate, CombinationRule, StrategyEstimate};
