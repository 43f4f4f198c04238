use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Campaign ───────────────────────────────────────────────────────────

/// Top-level campaign objective, mapped to a funnel stage for budgeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignObjective {
    Awareness,
    Traffic,
    Engagement,
    Leads,
    Sales,
}

impl CampaignObjective {
    /// Funnel stage this objective optimizes toward.
    pub fn funnel_stage(&self) -> FunnelStage {
        match self {
            Self::Awareness => FunnelStage::Awareness,
            Self::Traffic | Self::Engagement => FunnelStage::Consideration,
            Self::Leads | Self::Sales => FunnelStage::Conversion,
        }
    }
}

/// Event the delivery system optimizes ad sets for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationEvent {
    Impressions,
    LinkClicks,
    LandingPageViews,
    Leads,
    Purchases,
}

/// Where the budget lives: campaign level (CBO) or per ad set (ABO).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetMode {
    Cbo,
    Abo,
}

/// Campaign-level parameters. CBO requires `total_budget`; ABO requires
/// `budget_per_ad_set`. The validation layer enforces the pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignConfig {
    pub objective: CampaignObjective,
    /// Primary country code (ISO 3166-1 alpha-2).
    pub country: String,
    pub budget_mode: BudgetMode,
    pub total_budget: Option<f64>,
    pub budget_per_ad_set: Option<f64>,
    pub optimization_event: OptimizationEvent,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            objective: CampaignObjective::Traffic,
            country: "US".to_string(),
            budget_mode: BudgetMode::Cbo,
            total_budget: None,
            budget_per_ad_set: None,
            optimization_event: OptimizationEvent::LinkClicks,
        }
    }
}

/// Coarse objective bucket used for budget partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunnelStage {
    Awareness,
    Consideration,
    Conversion,
}

// ─── Audiences ──────────────────────────────────────────────────────────

/// Targeting preset. A true sum type: each variant carries exactly the
/// fields that variant needs, so an interest audience cannot exist
/// without its interest list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AudiencePreset {
    Broad {
        id: Uuid,
        name: String,
    },
    Interest {
        id: Uuid,
        name: String,
        interests: Vec<String>,
    },
    Lookalike {
        id: Uuid,
        name: String,
        source_id: String,
        /// Similarity tiers, each 1..=10 percent.
        tiers: Vec<u8>,
    },
    CustomAudience {
        id: Uuid,
        name: String,
        external_id: String,
    },
}

impl AudiencePreset {
    pub fn id(&self) -> Uuid {
        match self {
            Self::Broad { id, .. }
            | Self::Interest { id, .. }
            | Self::Lookalike { id, .. }
            | Self::CustomAudience { id, .. } => *id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Broad { name, .. }
            | Self::Interest { name, .. }
            | Self::Lookalike { name, .. }
            | Self::CustomAudience { name, .. } => name,
        }
    }
}

/// Geographic targeting. Regions and cities refine the selected
/// countries and must be catalog children of one of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoTargeting {
    pub countries: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub cities: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    All,
    Male,
    Female,
}

/// Age range bounds accepted by ad platforms.
pub const AGE_FLOOR: u8 = 13;
pub const AGE_CEILING: u8 = 65;

/// Demographic targeting. An empty language list means "all languages"
/// and is surfaced as an advisory notice, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub age_min: u8,
    pub age_max: u8,
    pub gender: Gender,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl Default for Demographics {
    fn default() -> Self {
        Self {
            age_min: 18,
            age_max: AGE_CEILING,
            gender: Gender::All,
            languages: Vec::new(),
        }
    }
}

// ─── Placements ─────────────────────────────────────────────────────────

/// Named bundle of concrete placements. The catalog resolves each preset
/// to its fixed placement-name list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementPreset {
    FeedsReels,
    StoriesOnly,
    AllPlacements,
}

// ─── Creatives ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreativeFormat {
    Image,
    Video,
}

/// Durable reference to an uploaded asset. Binary content never enters
/// the domain model; the asset store owns the bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRef {
    pub file_name: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
}

/// Which slot of a creative an asset fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionSlot {
    Feed,
    Story,
}

/// A creative with up to two placement-ratio versions. Both versions
/// share `format`: an image creative cannot carry a video story cut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creative {
    pub id: Uuid,
    pub name: String,
    pub format: CreativeFormat,
    pub feed_version: Option<AssetRef>,
    pub story_version: Option<AssetRef>,
}

impl Creative {
    pub fn has_any_version(&self) -> bool {
        self.feed_version.is_some() || self.story_version.is_some()
    }
}

// ─── Copy variants ──────────────────────────────────────────────────────

pub const HEADLINE_MAX_CHARS: usize = 40;
pub const PRIMARY_TEXT_MAX_CHARS: usize = 125;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallToAction {
    LearnMore,
    ShopNow,
    SignUp,
    Subscribe,
    GetOffer,
    ContactUs,
}

/// What a copy variant applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum CopyScope {
    All,
    PlacementKind { preset: PlacementPreset },
    Creatives { creative_ids: Vec<Uuid> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyVariant {
    pub id: Uuid,
    pub name: String,
    pub headline: String,
    pub primary_text: String,
    pub call_to_action: CallToAction,
    pub applies_to: CopyScope,
}

// ─── Matrix dimensions ──────────────────────────────────────────────────

/// Axis switches for the combinatorial expansion plus a soft ceiling on
/// total ads. A disabled axis contributes a factor of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixDimensions {
    pub audiences: bool,
    pub placements: bool,
    pub creatives: bool,
    pub format_variants: bool,
    pub copy_variants: bool,
    pub soft_limit: u32,
}

impl Default for MatrixDimensions {
    fn default() -> Self {
        Self {
            audiences: true,
            placements: true,
            creatives: true,
            format_variants: false,
            copy_variants: false,
            soft_limit: 200,
        }
    }
}

// ─── Budget plan ────────────────────────────────────────────────────────

/// One slice of the funnel budget plan. Amounts are computed by the
/// matrix calculator; this is the configured input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetBlock {
    pub stage: FunnelStage,
    pub label: String,
    pub enabled: bool,
    pub percentage: f64,
}

// ─── Live configuration ─────────────────────────────────────────────────

/// An audience preset with its participation switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudienceEntry {
    pub preset: AudiencePreset,
    pub enabled: bool,
}

/// The whole in-memory campaign configuration: the single state object
/// the builder owns and the pure components receive by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveConfig {
    pub campaign: CampaignConfig,
    pub audiences: Vec<AudienceEntry>,
    pub geo: GeoTargeting,
    pub demographics: Demographics,
    pub placements: Vec<PlacementPreset>,
    pub creatives: Vec<Creative>,
    pub copy_variants: Vec<CopyVariant>,
    pub dimensions: MatrixDimensions,
    pub budget_blocks: Vec<BudgetBlock>,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            campaign: CampaignConfig::default(),
            audiences: Vec::new(),
            geo: GeoTargeting::default(),
            demographics: Demographics::default(),
            placements: vec![PlacementPreset::FeedsReels],
            creatives: Vec::new(),
            copy_variants: Vec::new(),
            dimensions: MatrixDimensions::default(),
            budget_blocks: Vec::new(),
        }
    }
}

impl LiveConfig {
    /// Audiences currently participating in the expansion.
    pub fn enabled_audiences(&self) -> usize {
        self.audiences.iter().filter(|a| a.enabled).count()
    }
}

// ─── Export metadata ────────────────────────────────────────────────────

/// Human-facing metadata attached to a serialized blueprint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlueprintMetadata {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audience_preset_accessors() {
        let id = Uuid::new_v4();
        let preset = AudiencePreset::Interest {
            id,
            name: "Fitness fans".to_string(),
            interests: vec!["fitness".to_string(), "running".to_string()],
        };
        assert_eq!(preset.id(), id);
        assert_eq!(preset.name(), "Fitness fans");
    }

    #[test]
    fn test_objective_funnel_stage_mapping() {
        assert_eq!(
            CampaignObjective::Awareness.funnel_stage(),
            FunnelStage::Awareness
        );
        assert_eq!(
            CampaignObjective::Traffic.funnel_stage(),
            FunnelStage::Consideration
        );
        assert_eq!(
            CampaignObjective::Sales.funnel_stage(),
            FunnelStage::Conversion
        );
    }

    #[test]
    fn test_audience_preset_tagged_serialization() {
        let preset = AudiencePreset::Lookalike {
            id: Uuid::new_v4(),
            name: "LAL 1-3%".to_string(),
            source_id: "seed-1".to_string(),
            tiers: vec![1, 2, 3],
        };
        let json = serde_json::to_value(&preset).unwrap();
        assert_eq!(json["kind"], "lookalike");
        assert_eq!(json["tiers"][2], 3);
    }

    #[test]
    fn test_creative_has_any_version() {
        let mut creative = Creative {
            id: Uuid::new_v4(),
            name: "Hero".to_string(),
            format: CreativeFormat::Image,
            feed_version: None,
            story_version: None,
        };
        assert!(!creative.has_any_version());
        creative.feed_version = Some(AssetRef {
            file_name: "hero.png".to_string(),
            url: "https://assets.example.com/hero.png".to_string(),
            thumbnail_url: None,
        });
        assert!(creative.has_any_version());
    }
}
