//! The coordinating configuration store: one owned `LiveConfig` behind
//! a bounded undo history, with reactive matrix recomputation. The pure
//! components receive snapshots by reference and never retain them.

use launchgrid_blueprint::codec::{CreativeShell, PartialConfig};
use launchgrid_core::types::{Creative, LiveConfig};
use launchgrid_core::LaunchResult;
use launchgrid_history::{History, UpdateOrigin};
use launchgrid_matrix::budget::BudgetDistribution;
use launchgrid_matrix::calculator::{self, MatrixCounts, MatrixInput};
use launchgrid_matrix::budget;
use tracing::info;

pub struct ConfigStore {
    history: History<LiveConfig>,
}

impl ConfigStore {
    pub fn new(initial: LiveConfig, max_history: usize) -> Self {
        Self {
            history: History::new(initial, max_history),
        }
    }

    pub fn config(&self) -> &LiveConfig {
        self.history.present()
    }

    /// Apply a user edit: snapshot, mutate, record. A failed mutation
    /// leaves the store untouched.
    pub fn apply<F>(&mut self, f: F) -> LaunchResult<()>
    where
        F: FnOnce(&mut LiveConfig) -> LaunchResult<()>,
    {
        let mut next = self.history.present().clone();
        f(&mut next)?;
        self.history.push(next, UpdateOrigin::User);
        Ok(())
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo().is_some()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo().is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Current ad-set/ad counts. Recomputed from scratch on every call;
    /// safe to invoke on every keystroke.
    pub fn counts(&self) -> MatrixCounts {
        let config = self.config();
        calculator::expand(
            MatrixInput {
                audiences: config.enabled_audiences() as u32,
                placements: config.placements.len() as u32,
                creatives: config.creatives.len() as u32,
                copy_variants: config.copy_variants.len() as u32,
            },
            config.dimensions,
        )
    }

    /// Current budget distribution, when a total budget is set.
    pub fn budget(&self) -> Option<BudgetDistribution> {
        let config = self.config();
        config
            .campaign
            .total_budget
            .map(|total| budget::distribute(total, &config.budget_blocks))
    }

    /// Merge an imported partial configuration into the live state as a
    /// single undoable edit. Creative shells become versionless
    /// creatives; the returned shells tell the caller which files to
    /// re-prompt the user for. The source document is never mutated.
    pub fn merge_partial(&mut self, partial: PartialConfig) -> Vec<CreativeShell> {
        let mut next = self.history.present().clone();

        if let Some(campaign) = partial.campaign {
            next.campaign = campaign;
        }
        if let Some(audiences) = partial.audiences {
            next.audiences = audiences;
        }
        if let Some(geo) = partial.geo {
            next.geo = geo;
        }
        if let Some(demographics) = partial.demographics {
            next.demographics = demographics;
        }
        if let Some(placements) = partial.placements {
            next.placements = placements;
        }
        if let Some(copy_variants) = partial.copy_variants {
            next.copy_variants = copy_variants;
        }
        if let Some(dimensions) = partial.dimensions {
            next.dimensions = dimensions;
        }
        if let Some(budget_blocks) = partial.budget_blocks {
            next.budget_blocks = budget_blocks;
        }

        let needs_reattach: Vec<CreativeShell> = partial
            .creative_shells
            .iter()
            .filter(|s| s.needs_reattach)
            .cloned()
            .collect();
        if !partial.creative_shells.is_empty() {
            next.creatives = partial
                .creative_shells
                .into_iter()
                .map(|shell| Creative {
                    id: shell.id,
                    name: shell.name,
                    format: shell.format,
                    feed_version: None,
                    story_version: None,
                })
                .collect();
        }

        info!(
            reattach = needs_reattach.len(),
            "imported blueprint merged into live configuration"
        );
        self.history.push(next, UpdateOrigin::User);
        needs_reattach
    }

    /// Discard history and start over from a new configuration.
    pub fn reset(&mut self, config: LiveConfig) {
        self.history.reset(config);
    }
}
