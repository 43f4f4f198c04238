//! Versioned blueprint documents — lossless export/import of a campaign
//! configuration as small, diffable JSON, plus the validation layer that
//! certifies documents and live configurations.

pub mod codec;
pub mod document;
pub mod validation;

pub use codec::{export, import, restore, suggested_filename, to_json, PartialConfig};
pub use document::{LaunchBlueprint, BLUEPRINT_VERSION};
pub use validation::{
    validate_blueprint, validate_launch, FieldReport, Issue, IssueKind, ValidationReport,
};
