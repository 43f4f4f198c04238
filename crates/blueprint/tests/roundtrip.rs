//! Round-trip law: export → JSON → import → restore reproduces every
//! structural/text field of the configuration. Binary asset content and
//! regenerated timestamps are excluded by design.

use launchgrid_blueprint::{codec, validation};
use launchgrid_catalog::GeoCatalog;
use launchgrid_core::config::ValidationConfig;
use launchgrid_core::types::*;
use uuid::Uuid;

fn full_config() -> LiveConfig {
    LiveConfig {
        campaign: CampaignConfig {
            objective: CampaignObjective::Sales,
            country: "GB".to_string(),
            budget_mode: BudgetMode::Abo,
            total_budget: None,
            budget_per_ad_set: Some(25.0),
            optimization_event: OptimizationEvent::Purchases,
        },
        audiences: vec![
            AudienceEntry {
                preset: AudiencePreset::Interest {
                    id: Uuid::new_v4(),
                    name: "Runners".to_string(),
                    interests: vec!["Running".to_string(), "Fitness and wellness".to_string()],
                },
                enabled: true,
            },
            AudienceEntry {
                preset: AudiencePreset::Lookalike {
                    id: Uuid::new_v4(),
                    name: "LAL purchasers".to_string(),
                    source_id: "px-123".to_string(),
                    tiers: vec![1, 3, 5],
                },
                enabled: false,
            },
        ],
        geo: GeoTargeting {
            countries: vec!["GB".to_string()],
            regions: vec!["Scotland".to_string()],
            cities: vec!["London".to_string()],
        },
        demographics: Demographics {
            age_min: 21,
            age_max: 45,
            gender: Gender::Female,
            languages: vec!["en".to_string()],
        },
        placements: vec![PlacementPreset::FeedsReels, PlacementPreset::AllPlacements],
        creatives: vec![Creative {
            id: Uuid::new_v4(),
            name: "Spring hero".to_string(),
            format: CreativeFormat::Video,
            feed_version: Some(AssetRef {
                file_name: "spring-feed.mp4".to_string(),
                url: "https://assets.example.com/spring-feed.mp4".to_string(),
                thumbnail_url: Some("https://assets.example.com/spring-feed.jpg".to_string()),
            }),
            story_version: Some(AssetRef {
                file_name: "spring-story.mp4".to_string(),
                url: "https://assets.example.com/spring-story.mp4".to_string(),
                thumbnail_url: None,
            }),
        }],
        copy_variants: vec![CopyVariant {
            id: Uuid::new_v4(),
            name: "Primary".to_string(),
            headline: "Spring drop".to_string(),
            primary_text: "Fresh styles for the season.".to_string(),
            call_to_action: CallToAction::ShopNow,
            applies_to: CopyScope::PlacementKind {
                preset: PlacementPreset::FeedsReels,
            },
        }],
        dimensions: MatrixDimensions {
            audiences: true,
            placements: true,
            creatives: true,
            format_variants: true,
            copy_variants: true,
            soft_limit: 150,
        },
        budget_blocks: vec![
            BudgetBlock {
                stage: FunnelStage::Awareness,
                label: "Prospecting".to_string(),
                enabled: true,
                percentage: 30.0,
            },
            BudgetBlock {
                stage: FunnelStage::Conversion,
                label: "Retargeting".to_string(),
                enabled: true,
                percentage: 70.0,
            },
        ],
    }
}

#[test]
fn round_trip_reproduces_structural_fields() {
    let config = full_config();
    let metadata = BlueprintMetadata {
        name: "Spring Launch".to_string(),
        description: Some("Q2 bulk launch".to_string()),
        created_at: None,
        updated_at: None,
    };

    let json = codec::to_json(&codec::export(&config, metadata)).unwrap();
    let imported = codec::import(&json).unwrap();
    assert!(imported.decode_errors.is_empty());

    let partial = codec::restore(&imported);

    assert_eq!(partial.campaign.as_ref(), Some(&config.campaign));
    assert_eq!(partial.audiences.as_ref(), Some(&config.audiences));
    assert_eq!(partial.geo.as_ref(), Some(&config.geo));
    assert_eq!(partial.demographics.as_ref(), Some(&config.demographics));
    assert_eq!(partial.placements.as_ref(), Some(&config.placements));
    assert_eq!(partial.copy_variants.as_ref(), Some(&config.copy_variants));
    assert_eq!(partial.dimensions, Some(config.dimensions));
    assert_eq!(partial.budget_blocks.as_ref(), Some(&config.budget_blocks));

    // Creatives come back as shells: identity and file names survive,
    // binary handles do not.
    assert_eq!(partial.creative_shells.len(), 1);
    let shell = &partial.creative_shells[0];
    assert_eq!(shell.id, config.creatives[0].id);
    assert_eq!(shell.feed_file.as_deref(), Some("spring-feed.mp4"));
    assert_eq!(shell.story_file.as_deref(), Some("spring-story.mp4"));
    assert!(shell.needs_reattach);
}

#[test]
fn exported_document_passes_structural_validation() {
    let config = full_config();
    let doc = codec::export(
        &config,
        BlueprintMetadata {
            name: "Spring Launch".to_string(),
            ..Default::default()
        },
    );

    let report = validation::validate_blueprint(&doc, &ValidationConfig::default());
    assert!(report.is_valid, "errors: {:?}", report.errors);
    assert!(report.migrations.is_empty());
}

#[test]
fn valid_live_config_passes_launch_validation() {
    let report = validation::validate_launch(
        &full_config(),
        &ValidationConfig::default(),
        &GeoCatalog::new(),
    );
    assert!(report.is_valid, "errors: {:?}", report.errors);
}
