//! Export/import between the live configuration and blueprint documents.
//!
//! Export is a deterministic field-by-field mapping that strips asset
//! references down to file names. Import parses any JSON object into the
//! tolerant document shape (malformed JSON is the only rejecting path)
//! and restores the structural/text fields it can losslessly recover;
//! binary content must be re-attached by the caller.

use chrono::Utc;
use launchgrid_core::types::{
    AudienceEntry, BlueprintMetadata, BudgetBlock, CampaignConfig, CopyVariant, CreativeFormat,
    Demographics, GeoTargeting, LiveConfig, MatrixDimensions, PlacementPreset,
};
use launchgrid_core::LaunchResult;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::document::{
    AudienceSection, CreativeSlot, LaunchBlueprint, MatrixSection, BLUEPRINT_VERSION,
};

/// A creative recovered from a blueprint: structure and file names only.
/// `needs_reattach` is always true for slots that reference files — the
/// bytes are not in the document and the user must re-upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreativeShell {
    pub id: Uuid,
    pub name: String,
    pub format: CreativeFormat,
    pub feed_file: Option<String>,
    pub story_file: Option<String>,
    pub needs_reattach: bool,
}

/// What import could recover. Each field is `None` when the document did
/// not carry that section; the caller merges present fields into the
/// live configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialConfig {
    pub campaign: Option<CampaignConfig>,
    pub audiences: Option<Vec<AudienceEntry>>,
    pub geo: Option<GeoTargeting>,
    pub demographics: Option<Demographics>,
    pub placements: Option<Vec<PlacementPreset>>,
    pub copy_variants: Option<Vec<CopyVariant>>,
    pub dimensions: Option<MatrixDimensions>,
    pub budget_blocks: Option<Vec<BudgetBlock>>,
    pub creative_shells: Vec<CreativeShell>,
}

/// Build a blueprint from the live configuration snapshot. Stamps a
/// fresh `updated_at`; preserves `created_at` when the metadata already
/// carries one.
pub fn export(config: &LiveConfig, metadata: BlueprintMetadata) -> LaunchBlueprint {
    let now = Utc::now();

    let creatives = config
        .creatives
        .iter()
        .map(|c| CreativeSlot {
            id: c.id,
            name: c.name.clone(),
            format: c.format,
            feed_file: c.feed_version.as_ref().map(|v| v.file_name.clone()),
            story_file: c.story_version.as_ref().map(|v| v.file_name.clone()),
        })
        .collect();

    info!(name = %metadata.name, "exporting blueprint");

    LaunchBlueprint {
        version: Some(BLUEPRINT_VERSION.to_string()),
        metadata: Some(BlueprintMetadata {
            name: metadata.name,
            description: metadata.description,
            created_at: Some(metadata.created_at.unwrap_or(now)),
            updated_at: Some(now),
        }),
        campaign: Some(config.campaign.clone()),
        audiences: Some(AudienceSection {
            presets: config.audiences.clone(),
            geo_locations: config.geo.clone(),
            demographics: config.demographics.clone(),
        }),
        placements: Some(config.placements.clone()),
        creatives: Some(creatives),
        copy_variants: config.copy_variants.clone(),
        matrix: Some(MatrixSection {
            dimensions: Some(config.dimensions),
            budget_blocks: config.budget_blocks.clone(),
        }),
        decode_errors: Vec::new(),
    }
}

/// Pretty-printed UTF-8 JSON, the on-disk byte contract.
pub fn to_json(blueprint: &LaunchBlueprint) -> LaunchResult<String> {
    Ok(serde_json::to_string_pretty(blueprint)?)
}

/// Derive a file name from a display name: whitespace runs collapsed to
/// hyphens, lowercased, fixed suffix.
pub fn suggested_filename(display_name: &str) -> String {
    let slug: Vec<&str> = display_name.split_whitespace().collect();
    let slug = if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug.join("-").to_lowercase()
    };
    format!("{slug}-blueprint.json")
}

/// Parse an untrusted document. Malformed JSON rejects with
/// `LaunchError::Parse`; anything that parses as JSON becomes a
/// best-effort blueprint for the validation layer to certify.
pub fn import(json: &str) -> LaunchResult<LaunchBlueprint> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok(LaunchBlueprint::from_value(value))
}

/// Map a blueprint back into a partial configuration. Only
/// structural/text fields are recovered; creative slots become shells
/// the caller must re-attach files to.
pub fn restore(blueprint: &LaunchBlueprint) -> PartialConfig {
    let creative_shells = blueprint
        .creatives
        .as_ref()
        .map(|slots| {
            slots
                .iter()
                .map(|slot| CreativeShell {
                    id: slot.id,
                    name: slot.name.clone(),
                    format: slot.format,
                    feed_file: slot.feed_file.clone(),
                    story_file: slot.story_file.clone(),
                    needs_reattach: slot.has_file_reference(),
                })
                .collect()
        })
        .unwrap_or_default();

    PartialConfig {
        campaign: blueprint.campaign.clone(),
        audiences: blueprint.audiences.as_ref().map(|a| a.presets.clone()),
        geo: blueprint
            .audiences
            .as_ref()
            .map(|a| a.geo_locations.clone()),
        demographics: blueprint
            .audiences
            .as_ref()
            .map(|a| a.demographics.clone()),
        placements: blueprint.placements.clone(),
        copy_variants: if blueprint.copy_variants.is_empty() {
            None
        } else {
            Some(blueprint.copy_variants.clone())
        },
        dimensions: blueprint.matrix.as_ref().and_then(|m| m.dimensions),
        budget_blocks: blueprint.matrix.as_ref().map(|m| m.budget_blocks.clone()),
        creative_shells,
    }
}
