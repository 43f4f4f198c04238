//! Id-keyed CRUD over the collections inside a live configuration.
//! Items are created with a fresh id, mutated in place by id lookup,
//! and removed by id filter. Invariant-breaking mutations are rejected
//! before any state changes.

use launchgrid_core::types::{
    AssetRef, AudienceEntry, AudiencePreset, CallToAction, CopyScope, CopyVariant, Creative,
    CreativeFormat, LiveConfig, VersionSlot, HEADLINE_MAX_CHARS, PRIMARY_TEXT_MAX_CHARS,
};
use launchgrid_core::{LaunchError, LaunchResult};
use tracing::info;
use uuid::Uuid;

/// Registry operations over the live configuration's collections.
pub trait RegistryOps {
    fn add_audience(&mut self, preset: AudiencePreset) -> Uuid;
    fn set_audience_enabled(&mut self, id: Uuid, enabled: bool) -> bool;
    fn remove_audience(&mut self, id: Uuid) -> bool;

    fn add_creative(&mut self, name: &str, format: CreativeFormat) -> Uuid;
    fn set_creative_version(
        &mut self,
        id: Uuid,
        slot: VersionSlot,
        asset: AssetRef,
        format: CreativeFormat,
    ) -> LaunchResult<()>;
    fn remove_creative(&mut self, id: Uuid) -> bool;

    fn add_copy_variant(
        &mut self,
        name: &str,
        headline: &str,
        primary_text: &str,
        call_to_action: CallToAction,
        applies_to: CopyScope,
    ) -> LaunchResult<Uuid>;
    fn remove_copy_variant(&mut self, id: Uuid) -> bool;
}

impl RegistryOps for LiveConfig {
    fn add_audience(&mut self, preset: AudiencePreset) -> Uuid {
        let id = preset.id();
        info!(audience = %preset.name(), "audience preset added");
        self.audiences.push(AudienceEntry {
            preset,
            enabled: true,
        });
        id
    }

    fn set_audience_enabled(&mut self, id: Uuid, enabled: bool) -> bool {
        match self.audiences.iter_mut().find(|a| a.preset.id() == id) {
            Some(entry) => {
                entry.enabled = enabled;
                true
            }
            None => false,
        }
    }

    fn remove_audience(&mut self, id: Uuid) -> bool {
        let before = self.audiences.len();
        self.audiences.retain(|a| a.preset.id() != id);
        self.audiences.len() < before
    }

    fn add_creative(&mut self, name: &str, format: CreativeFormat) -> Uuid {
        let id = Uuid::new_v4();
        self.creatives.push(Creative {
            id,
            name: name.to_string(),
            format,
            feed_version: None,
            story_version: None,
        });
        id
    }

    /// Attach an uploaded asset to a creative slot. Rejected before any
    /// mutation when the asset's format contradicts an already-attached
    /// version; a creative with no versions yet adopts the new format.
    fn set_creative_version(
        &mut self,
        id: Uuid,
        slot: VersionSlot,
        asset: AssetRef,
        format: CreativeFormat,
    ) -> LaunchResult<()> {
        let creative = self
            .creatives
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| LaunchError::Structural(format!("no creative with id {id}")))?;

        if creative.has_any_version() && creative.format != format {
            return Err(LaunchError::FormatConflict(format!(
                "creative '{}' is {:?}; cannot attach a {:?} version",
                creative.name, creative.format, format
            )));
        }

        creative.format = format;
        match slot {
            VersionSlot::Feed => creative.feed_version = Some(asset),
            VersionSlot::Story => creative.story_version = Some(asset),
        }
        Ok(())
    }

    fn remove_creative(&mut self, id: Uuid) -> bool {
        let before = self.creatives.len();
        self.creatives.retain(|c| c.id != id);
        self.creatives.len() < before
    }

    /// Copy text limits are enforced at creation so an over-long
    /// headline never enters the configuration.
    fn add_copy_variant(
        &mut self,
        name: &str,
        headline: &str,
        primary_text: &str,
        call_to_action: CallToAction,
        applies_to: CopyScope,
    ) -> LaunchResult<Uuid> {
        if headline.chars().count() > HEADLINE_MAX_CHARS {
            return Err(LaunchError::BusinessRule(format!(
                "headline exceeds {HEADLINE_MAX_CHARS} characters"
            )));
        }
        if primary_text.chars().count() > PRIMARY_TEXT_MAX_CHARS {
            return Err(LaunchError::BusinessRule(format!(
                "primary text exceeds {PRIMARY_TEXT_MAX_CHARS} characters"
            )));
        }

        let id = Uuid::new_v4();
        self.copy_variants.push(CopyVariant {
            id,
            name: name.to_string(),
            headline: headline.to_string(),
            primary_text: primary_text.to_string(),
            call_to_action,
            applies_to,
        });
        Ok(id)
    }

    fn remove_copy_variant(&mut self, id: Uuid) -> bool {
        let before = self.copy_variants.len();
        self.copy_variants.retain(|v| v.id != id);
        self.copy_variants.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(name: &str) -> AssetRef {
        AssetRef {
            file_name: name.to_string(),
            url: format!("memory://{name}"),
            thumbnail_url: None,
        }
    }

    // 1. Audience CRUD ------------------------------------------------------

    #[test]
    fn test_audience_add_toggle_remove() {
        let mut config = LiveConfig::default();
        let id = config.add_audience(AudiencePreset::Broad {
            id: Uuid::new_v4(),
            name: "Everyone".to_string(),
        });

        assert_eq!(config.enabled_audiences(), 1);
        assert!(config.set_audience_enabled(id, false));
        assert_eq!(config.enabled_audiences(), 0);
        assert!(config.remove_audience(id));
        assert!(!config.remove_audience(id));
    }

    // 2. Format-conflict rejection ------------------------------------------

    #[test]
    fn test_format_conflict_rejected_before_mutation() {
        let mut config = LiveConfig::default();
        let id = config.add_creative("Hero", CreativeFormat::Image);
        config
            .set_creative_version(id, VersionSlot::Feed, asset("hero.png"), CreativeFormat::Image)
            .unwrap();

        let err = config
            .set_creative_version(id, VersionSlot::Story, asset("hero.mp4"), CreativeFormat::Video)
            .unwrap_err();
        assert!(matches!(err, LaunchError::FormatConflict(_)));

        // State unchanged: still an image creative with no story version.
        let creative = &config.creatives[0];
        assert_eq!(creative.format, CreativeFormat::Image);
        assert!(creative.story_version.is_none());
    }

    #[test]
    fn test_versionless_creative_adopts_first_format() {
        let mut config = LiveConfig::default();
        let id = config.add_creative("Clip", CreativeFormat::Image);
        config
            .set_creative_version(id, VersionSlot::Feed, asset("clip.mp4"), CreativeFormat::Video)
            .unwrap();
        assert_eq!(config.creatives[0].format, CreativeFormat::Video);
    }

    // 3. Copy limits --------------------------------------------------------

    #[test]
    fn test_copy_variant_length_limits() {
        let mut config = LiveConfig::default();
        let long_headline = "x".repeat(HEADLINE_MAX_CHARS + 1);
        let err = config
            .add_copy_variant(
                "v1",
                &long_headline,
                "short",
                CallToAction::LearnMore,
                CopyScope::All,
            )
            .unwrap_err();
        assert!(matches!(err, LaunchError::BusinessRule(_)));
        assert!(config.copy_variants.is_empty());

        config
            .add_copy_variant(
                "v1",
                "Fits fine",
                "Also fits.",
                CallToAction::LearnMore,
                CopyScope::All,
            )
            .unwrap();
        assert_eq!(config.copy_variants.len(), 1);
    }
}
