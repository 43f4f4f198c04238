//! Schema and business-rule validation for blueprints and live
//! configurations. Checks accumulate — a report enumerates every
//! violated rule, never just the first. Errors block the corresponding
//! action; warnings are advisory and additive. A version mismatch alone
//! never invalidates a document.

use launchgrid_catalog::GeoCatalog;
use launchgrid_core::config::ValidationConfig;
use launchgrid_core::types::{
    AudiencePreset, BudgetMode, CreativeFormat, LiveConfig, AGE_CEILING, AGE_FLOOR,
    HEADLINE_MAX_CHARS, PRIMARY_TEXT_MAX_CHARS,
};
use launchgrid_matrix::{budget, calculator};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::{CreativeSlot, LaunchBlueprint, BLUEPRINT_VERSION};

// ─── Report types ───────────────────────────────────────────────────────

/// Kind of validation finding, independent of message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    MissingRequiredField,
    InvalidEnumValue,
    CrossFieldInconsistency,
    EmptyCollection,
    FormatMismatch,
    VersionMismatch,
}

/// One validation finding, located by a dotted field path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub path: String,
    pub message: String,
}

impl Issue {
    fn new(kind: IssueKind, path: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.to_string(),
            message: message.into(),
        }
    }
}

/// Aggregate validation result. `is_valid` reflects errors only;
/// warnings never block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub version: String,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
    pub migrations: Vec<String>,
}

impl ValidationReport {
    fn new(version: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            version: version.into(),
            errors: Vec::new(),
            warnings: Vec::new(),
            migrations: Vec::new(),
        }
    }

    fn error(&mut self, kind: IssueKind, path: &str, message: impl Into<String>) {
        self.errors.push(Issue::new(kind, path, message));
        self.is_valid = false;
    }

    fn warning(&mut self, kind: IssueKind, path: &str, message: impl Into<String>) {
        self.warnings.push(Issue::new(kind, path, message));
    }
}

/// Field-level error for form surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

/// Field-level projection of a report: `{success, formatted_errors}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldReport {
    pub success: bool,
    pub formatted_errors: Vec<FieldError>,
}

impl From<&ValidationReport> for FieldReport {
    fn from(report: &ValidationReport) -> Self {
        Self {
            success: report.is_valid,
            formatted_errors: report
                .errors
                .iter()
                .map(|i| FieldError {
                    path: i.path.clone(),
                    message: i.message.clone(),
                })
                .collect(),
        }
    }
}

// ─── Blueprint-level structural validation ──────────────────────────────

/// Validate an imported document's structure. Creative slots without any
/// file reference warn rather than error: the creative exists
/// structurally but cannot be launched until files are re-attached.
pub fn validate_blueprint(doc: &LaunchBlueprint, rules: &ValidationConfig) -> ValidationReport {
    let doc_version = doc.version.clone().unwrap_or_else(|| "unknown".to_string());
    let mut report = ValidationReport::new(doc_version);

    for (section, detail) in &doc.decode_errors {
        report.error(
            IssueKind::InvalidEnumValue,
            section,
            format!("section present but malformed: {detail}"),
        );
    }

    match &doc.version {
        None => report.error(
            IssueKind::MissingRequiredField,
            "version",
            "blueprint version is required",
        ),
        Some(version) => check_version(version, &mut report),
    }

    if doc.metadata.is_none() {
        report.error(
            IssueKind::MissingRequiredField,
            "metadata",
            "blueprint metadata is required",
        );
    }

    match &doc.campaign {
        None => report.error(
            IssueKind::MissingRequiredField,
            "campaign",
            "campaign section is required",
        ),
        Some(campaign) => check_budget_mode(
            campaign.budget_mode,
            campaign.total_budget,
            campaign.budget_per_ad_set,
            rules,
            false,
            &mut report,
        ),
    }

    match &doc.audiences {
        None => report.error(
            IssueKind::MissingRequiredField,
            "audiences",
            "audiences section is required",
        ),
        Some(audiences) => {
            if audiences.presets.is_empty() {
                report.error(
                    IssueKind::EmptyCollection,
                    "audiences.presets",
                    "at least one audience preset is required",
                );
            }
            if audiences.geo_locations.countries.is_empty() {
                report.error(
                    IssueKind::EmptyCollection,
                    "audiences.geo_locations.countries",
                    "at least one country is required",
                );
            }
        }
    }

    match &doc.placements {
        None => report.error(
            IssueKind::MissingRequiredField,
            "placements",
            "placements section is required",
        ),
        Some(placements) if placements.is_empty() => report.error(
            IssueKind::EmptyCollection,
            "placements",
            "at least one placement preset is required",
        ),
        Some(_) => {}
    }

    match &doc.creatives {
        None => report.error(
            IssueKind::MissingRequiredField,
            "creatives",
            "creatives section is required",
        ),
        Some(slots) => {
            for (i, slot) in slots.iter().enumerate() {
                if !slot.has_file_reference() {
                    report.warning(
                        IssueKind::MissingRequiredField,
                        &format!("creatives[{i}]"),
                        format!(
                            "creative '{}' has no feed or story file reference and cannot \
                             be launched until files are attached",
                            slot.name
                        ),
                    );
                }
                check_slot_extension(i, slot, &mut report);
            }
        }
    }

    debug!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "blueprint validation finished"
    );
    report
}

// ─── Live-configuration validation ──────────────────────────────────────

/// Strict pre-submit check over the live configuration. Everything a
/// launch needs must be present and consistent; violations accumulate.
pub fn validate_launch(
    config: &LiveConfig,
    rules: &ValidationConfig,
    catalog: &GeoCatalog,
) -> ValidationReport {
    let mut report = ValidationReport::new(BLUEPRINT_VERSION);

    // Cardinalities.
    if config.enabled_audiences() == 0 {
        report.error(
            IssueKind::EmptyCollection,
            "audiences",
            "at least one enabled audience is required",
        );
    }
    if config.placements.is_empty() {
        report.error(
            IssueKind::EmptyCollection,
            "placements",
            "at least one placement preset is required",
        );
    }
    if config.creatives.is_empty() {
        report.error(
            IssueKind::EmptyCollection,
            "creatives",
            "at least one creative is required",
        );
    }
    if config.dimensions.copy_variants && config.copy_variants.is_empty() {
        report.error(
            IssueKind::EmptyCollection,
            "copy_variants",
            "copy variant axis is enabled but no variants are configured",
        );
    }

    // Audience presets.
    for (i, entry) in config.audiences.iter().enumerate() {
        check_audience_preset(i, &entry.preset, &mut report);
    }

    // Creatives: at least one version each. Format consistency across
    // versions is structural (one format per creative), so only the
    // missing-version case can arise here.
    for (i, creative) in config.creatives.iter().enumerate() {
        if !creative.has_any_version() {
            report.error(
                IssueKind::MissingRequiredField,
                &format!("creatives[{i}]"),
                format!("creative '{}' needs at least one version", creative.name),
            );
        }
    }

    // Copy text limits. Variants added through the registry are checked
    // at creation, but restored blueprints inject variants directly, so
    // the limits are re-checked here.
    for (i, variant) in config.copy_variants.iter().enumerate() {
        if variant.headline.chars().count() > HEADLINE_MAX_CHARS {
            report.error(
                IssueKind::CrossFieldInconsistency,
                &format!("copy_variants[{i}].headline"),
                format!(
                    "headline of '{}' exceeds {HEADLINE_MAX_CHARS} characters",
                    variant.name
                ),
            );
        }
        if variant.primary_text.chars().count() > PRIMARY_TEXT_MAX_CHARS {
            report.error(
                IssueKind::CrossFieldInconsistency,
                &format!("copy_variants[{i}].primary_text"),
                format!(
                    "primary text of '{}' exceeds {PRIMARY_TEXT_MAX_CHARS} characters",
                    variant.name
                ),
            );
        }
    }

    // Demographics.
    let demo = &config.demographics;
    if demo.age_min < AGE_FLOOR || demo.age_max > AGE_CEILING {
        report.error(
            IssueKind::InvalidEnumValue,
            "demographics.age",
            format!("age bounds must lie within [{AGE_FLOOR}, {AGE_CEILING}]"),
        );
    }
    if demo.age_min > demo.age_max {
        report.error(
            IssueKind::CrossFieldInconsistency,
            "demographics.age_min",
            "age_min must not exceed age_max",
        );
    }
    if demo.languages.is_empty() {
        report.warning(
            IssueKind::EmptyCollection,
            "demographics.languages",
            "no languages selected; targeting all languages",
        );
    }

    // Geo.
    if config.geo.countries.is_empty() {
        report.error(
            IssueKind::EmptyCollection,
            "geo.countries",
            "at least one country is required",
        );
    }
    for country in &config.geo.countries {
        if !catalog.is_known_country(country) {
            report.error(
                IssueKind::InvalidEnumValue,
                "geo.countries",
                format!("unknown country code '{country}'"),
            );
        }
    }
    for region in &config.geo.regions {
        let belongs = config
            .geo
            .countries
            .iter()
            .any(|c| catalog.is_region_of(c, region));
        if !belongs {
            report.error(
                IssueKind::CrossFieldInconsistency,
                "geo.regions",
                format!("region '{region}' is not part of any selected country"),
            );
        }
    }
    for city in &config.geo.cities {
        let belongs = config
            .geo
            .countries
            .iter()
            .any(|c| catalog.is_city_of(c, city));
        if !belongs {
            report.error(
                IssueKind::CrossFieldInconsistency,
                "geo.cities",
                format!("city '{city}' is not part of any selected country"),
            );
        }
    }

    // Budget mode and thresholds.
    check_budget_mode(
        config.campaign.budget_mode,
        config.campaign.total_budget,
        config.campaign.budget_per_ad_set,
        rules,
        true,
        &mut report,
    );

    // Budget plan.
    if let Some(total) = config.campaign.total_budget {
        let dist = budget::distribute(total, &config.budget_blocks);
        if dist.over_allocated {
            report.error(
                IssueKind::CrossFieldInconsistency,
                "budget_blocks",
                format!(
                    "budget blocks allocate {:.1}% — more than 100%",
                    dist.allocated_percent
                ),
            );
        } else if !config.budget_blocks.is_empty() && dist.remainder_percent > 0.0 {
            report.warning(
                IssueKind::CrossFieldInconsistency,
                "budget_blocks",
                format!("{:.1}% of the budget is unallocated", dist.remainder_percent),
            );
        }
    }

    // Matrix soft limit.
    let counts = calculator::expand(
        calculator::MatrixInput {
            audiences: config.enabled_audiences() as u32,
            placements: config.placements.len() as u32,
            creatives: config.creatives.len() as u32,
            copy_variants: config.copy_variants.len() as u32,
        },
        config.dimensions,
    );
    if counts.soft_limit_exceeded {
        report.warning(
            IssueKind::CrossFieldInconsistency,
            "matrix",
            format!(
                "expansion produces {} ads, above the soft limit of {}",
                counts.total_ads, config.dimensions.soft_limit
            ),
        );
    }

    report
}

// ─── Shared checks ──────────────────────────────────────────────────────

/// Mode/field pairing and positivity are always blocking. The minimum
/// thresholds block only when `minimums_blocking` is set: a stored
/// document may carry a draft budget below the launch minimum, but a
/// launch may not.
fn check_budget_mode(
    mode: BudgetMode,
    total_budget: Option<f64>,
    budget_per_ad_set: Option<f64>,
    rules: &ValidationConfig,
    minimums_blocking: bool,
    report: &mut ValidationReport,
) {
    match mode {
        BudgetMode::Cbo => match total_budget {
            None => report.error(
                IssueKind::CrossFieldInconsistency,
                "campaign.total_budget",
                "CBO requires a total campaign budget",
            ),
            Some(total) if total <= 0.0 => report.error(
                IssueKind::CrossFieldInconsistency,
                "campaign.total_budget",
                "total budget must be positive",
            ),
            Some(total) if total < rules.min_total_budget => {
                let message = format!(
                    "total budget {total:.2} is below the minimum of {:.2}",
                    rules.min_total_budget
                );
                if minimums_blocking {
                    report.error(
                        IssueKind::CrossFieldInconsistency,
                        "campaign.total_budget",
                        message,
                    );
                } else {
                    report.warning(
                        IssueKind::CrossFieldInconsistency,
                        "campaign.total_budget",
                        message,
                    );
                }
            }
            Some(_) => {}
        },
        BudgetMode::Abo => match budget_per_ad_set {
            None => report.error(
                IssueKind::CrossFieldInconsistency,
                "campaign.budget_per_ad_set",
                "ABO requires a per-ad-set budget",
            ),
            Some(per) if per <= 0.0 => report.error(
                IssueKind::CrossFieldInconsistency,
                "campaign.budget_per_ad_set",
                "per-ad-set budget must be positive",
            ),
            Some(per) if per < rules.min_budget_per_ad_set => {
                let message = format!(
                    "per-ad-set budget {per:.2} is below the minimum of {:.2}",
                    rules.min_budget_per_ad_set
                );
                if minimums_blocking {
                    report.error(
                        IssueKind::CrossFieldInconsistency,
                        "campaign.budget_per_ad_set",
                        message,
                    );
                } else {
                    report.warning(
                        IssueKind::CrossFieldInconsistency,
                        "campaign.budget_per_ad_set",
                        message,
                    );
                }
            }
            Some(_) => {}
        },
    }
}

fn check_audience_preset(index: usize, preset: &AudiencePreset, report: &mut ValidationReport) {
    let path = format!("audiences[{index}]");
    match preset {
        AudiencePreset::Broad { .. } | AudiencePreset::CustomAudience { .. } => {}
        AudiencePreset::Interest { interests, .. } => {
            if interests.is_empty() {
                report.error(
                    IssueKind::EmptyCollection,
                    &path,
                    "interest audience needs at least one interest",
                );
            }
        }
        AudiencePreset::Lookalike { tiers, .. } => {
            if tiers.is_empty() {
                report.error(
                    IssueKind::EmptyCollection,
                    &path,
                    "lookalike audience needs at least one percentage tier",
                );
            }
            for tier in tiers {
                if !(1..=10).contains(tier) {
                    report.error(
                        IssueKind::InvalidEnumValue,
                        &path,
                        format!("lookalike tier {tier} is outside 1..=10"),
                    );
                }
            }
        }
    }
}

/// Warn when a slot's file extension contradicts its declared format.
fn check_slot_extension(index: usize, slot: &CreativeSlot, report: &mut ValidationReport) {
    for file in [&slot.feed_file, &slot.story_file].into_iter().flatten() {
        let ext = file.rsplit('.').next().unwrap_or("").to_lowercase();
        let implied = match ext.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" => Some(CreativeFormat::Image),
            "mp4" | "mov" | "webm" => Some(CreativeFormat::Video),
            _ => None,
        };
        if let Some(implied) = implied {
            if implied != slot.format {
                report.warning(
                    IssueKind::FormatMismatch,
                    &format!("creatives[{index}]"),
                    format!(
                        "file '{file}' looks like {implied:?} but the creative is declared {:?}",
                        slot.format
                    ),
                );
            }
        }
    }
}

/// Compare a document version to the codec's. Mismatch is always a
/// warning plus a migration hint, never a hard failure.
fn check_version(doc_version: &str, report: &mut ValidationReport) {
    let current = parse_version(BLUEPRINT_VERSION);
    match parse_version(doc_version) {
        None => {
            report.warning(
                IssueKind::VersionMismatch,
                "version",
                format!("unrecognized version string '{doc_version}'"),
            );
            report
                .migrations
                .push(format!("re-export to rewrite version as {BLUEPRINT_VERSION}"));
        }
        Some(doc) if Some(doc) == current => {}
        Some(doc) => {
            let relation = if Some(doc) < current { "older" } else { "newer" };
            report.warning(
                IssueKind::VersionMismatch,
                "version",
                format!(
                    "document version {doc_version} is {relation} than {BLUEPRINT_VERSION}"
                ),
            );
            report.migrations.push(format!(
                "migrate blueprint from {doc_version} to {BLUEPRINT_VERSION}"
            ));
        }
    }
}

fn parse_version(version: &str) -> Option<(u64, u64, u64)> {
    let mut parts = version.trim().splitn(3, '.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    let patch = parts.next()?.parse().ok()?;
    Some((major, minor, patch))
}
