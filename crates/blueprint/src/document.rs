//! The durable blueprint aggregate. Every section is optional so that an
//! untrusted document deserializes best-effort; the validation layer,
//! not the parser, decides what is missing or malformed. Creative slots
//! carry file names only — binary content never enters a blueprint.

use launchgrid_core::types::{
    AudienceEntry, BlueprintMetadata, BudgetBlock, CampaignConfig, CopyVariant, CreativeFormat,
    Demographics, GeoTargeting, MatrixDimensions, PlacementPreset,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Version written by this codec.
pub const BLUEPRINT_VERSION: &str = "1.0.0";

/// Audience section: presets plus the geo/demographic targeting shared
/// by every generated ad set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudienceSection {
    #[serde(default)]
    pub presets: Vec<AudienceEntry>,
    #[serde(default)]
    pub geo_locations: GeoTargeting,
    #[serde(default)]
    pub demographics: Demographics,
}

/// A creative reduced to its serializable shape: identity, format, and
/// uploaded file names per slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreativeSlot {
    pub id: Uuid,
    pub name: String,
    pub format: CreativeFormat,
    #[serde(default)]
    pub feed_file: Option<String>,
    #[serde(default)]
    pub story_file: Option<String>,
}

impl CreativeSlot {
    pub fn has_file_reference(&self) -> bool {
        self.feed_file.is_some() || self.story_file.is_some()
    }
}

/// Matrix section: axis switches and the funnel budget plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatrixSection {
    #[serde(default)]
    pub dimensions: Option<MatrixDimensions>,
    #[serde(default)]
    pub budget_blocks: Vec<BudgetBlock>,
}

/// The versioned, serializable snapshot of a full campaign
/// configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchBlueprint {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub metadata: Option<BlueprintMetadata>,
    #[serde(default)]
    pub campaign: Option<CampaignConfig>,
    #[serde(default)]
    pub audiences: Option<AudienceSection>,
    #[serde(default)]
    pub placements: Option<Vec<PlacementPreset>>,
    #[serde(default)]
    pub creatives: Option<Vec<CreativeSlot>>,
    #[serde(default)]
    pub copy_variants: Vec<CopyVariant>,
    #[serde(default)]
    pub matrix: Option<MatrixSection>,

    /// Sections that were present in the source JSON but failed to
    /// decode. Collected at import time, reported by validation, never
    /// serialized back out.
    #[serde(skip)]
    pub decode_errors: Vec<(String, String)>,
}

impl LaunchBlueprint {
    /// Best-effort mapping from an arbitrary JSON object. A section that
    /// is absent stays `None`; a section that is present but malformed
    /// also stays `None` and is recorded in `decode_errors`.
    pub fn from_value(value: Value) -> Self {
        let mut doc = Self::default();

        doc.version = take_section(&value, "version", &mut doc.decode_errors);
        doc.metadata = take_section(&value, "metadata", &mut doc.decode_errors);
        doc.campaign = take_section(&value, "campaign", &mut doc.decode_errors);
        doc.audiences = take_section(&value, "audiences", &mut doc.decode_errors);
        doc.placements = take_section(&value, "placements", &mut doc.decode_errors);
        doc.creatives = take_section(&value, "creatives", &mut doc.decode_errors);
        doc.copy_variants =
            take_section(&value, "copy_variants", &mut doc.decode_errors).unwrap_or_default();
        doc.matrix = take_section(&value, "matrix", &mut doc.decode_errors);

        doc
    }
}

fn take_section<T: serde::de::DeserializeOwned>(
    value: &Value,
    key: &str,
    decode_errors: &mut Vec<(String, String)>,
) -> Option<T> {
    let section = value.get(key)?;
    if section.is_null() {
        return None;
    }
    match serde_json::from_value(section.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            decode_errors.push((key.to_string(), e.to_string()));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_tolerates_missing_sections() {
        let doc = LaunchBlueprint::from_value(json!({ "version": "1.0.0" }));
        assert_eq!(doc.version.as_deref(), Some("1.0.0"));
        assert!(doc.campaign.is_none());
        assert!(doc.decode_errors.is_empty());
    }

    #[test]
    fn test_from_value_records_malformed_sections() {
        let doc = LaunchBlueprint::from_value(json!({
            "version": "1.0.0",
            "placements": ["definitely_not_a_preset"],
        }));
        assert!(doc.placements.is_none());
        assert_eq!(doc.decode_errors.len(), 1);
        assert_eq!(doc.decode_errors[0].0, "placements");
    }

    #[test]
    fn test_unknown_top_level_keys_are_ignored() {
        let doc = LaunchBlueprint::from_value(json!({
            "version": "1.0.0",
            "exported_by_tool": "some-dashboard",
        }));
        assert!(doc.decode_errors.is_empty());
    }
}
