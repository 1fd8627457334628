//! Human-readable trait listings and token metadata
//!
//! The only place in the crate where names are attached to trait values.

use super::record::TraitRecord;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::evolution::{rarity_band, stage_progress};
use crate::render::Compositor;
use chrono::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Number(u64),
}

/// One `trait_type` / `value` pair, as metadata consumers expect it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitAttribute {
    pub trait_type: String,
    pub value: AttributeValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_type: Option<String>,
}

impl TraitAttribute {
    fn text(trait_type: &str, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value: AttributeValue::Text(value.into()),
            display_type: None,
        }
    }

    fn number(trait_type: &str, value: u64) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value: AttributeValue::Number(value),
            display_type: None,
        }
    }

    fn displayed_as(mut self, display_type: &str) -> Self {
        self.display_type = Some(display_type.to_string());
        self
    }
}

/// Ordered attribute list for a record as it stands at `now`
pub fn describe_traits(record: &TraitRecord, now: u64) -> Result<Vec<TraitAttribute>> {
    let progress = stage_progress(record, now)?;
    let rarity = rarity_band(record);
    let genesis = if record.is_enhanced_genesis() {
        "Enhanced"
    } else {
        "Standard"
    };

    let mut attributes = vec![
        TraitAttribute::text("Core Geometry", record.core_geometry().label()),
        TraitAttribute::text("Pathway Pattern", record.pathway_pattern().label()),
        TraitAttribute::text("Particle System", record.particle_system().label()),
        TraitAttribute::number("Network Density", record.network_density().get() as u64),
        TraitAttribute::number("Mutation Intensity", record.mutation_intensity() as u64),
        TraitAttribute::text("Rarity", rarity.label()),
        TraitAttribute::number("Evolution Stage", progress.stage.number() as u64),
        TraitAttribute::text("Stage Name", progress.stage.label()),
        TraitAttribute::text("Genesis Class", genesis),
        TraitAttribute::number("Birth", record.birth_time()).displayed_as("date"),
    ];
    if let Some(at) = progress.next_stage_at {
        attributes.push(
            TraitAttribute::number("Next Evolution", record.birth_time().saturating_add(at))
                .displayed_as("date"),
        );
    }
    Ok(attributes)
}

/// Token metadata document with the reference render embedded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    pub attributes: Vec<TraitAttribute>,
}

impl TokenMetadata {
    pub fn build(record: &TraitRecord, now: u64, config: &RenderConfig) -> Result<Self> {
        let attributes = describe_traits(record, now)?;
        let document = Compositor::new(config.clone())?.render(record, now, 0)?;
        let stage = stage_progress(record, now)?.stage;
        let born = i64::try_from(record.birth_time())
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| record.birth_time().to_string());

        Ok(Self {
            name: format!("Nexus #{}", record.id()),
            description: format!(
                "A {} nexus in its {} stage, born {}. Its form is drawn from on-chain traits and evolves with age.",
                record.core_geometry().label().to_lowercase(),
                stage.label(),
                born
            ),
            image: document.data_uri(),
            attributes,
        })
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::NEXUS_AT;
    use crate::genome::RawTraitRecord;

    const BIRTH: u64 = 1_700_000_000;

    fn record() -> TraitRecord {
        TraitRecord::from_raw(RawTraitRecord {
            id: 3,
            birth_time: BIRTH,
            core_geometry: 7,
            pathway_pattern: 4,
            particle_system: 1,
            network_density: 5,
            mutation_intensity: 210,
            is_enhanced_genesis: true,
        })
        .unwrap()
    }

    fn value_of<'a>(attrs: &'a [TraitAttribute], key: &str) -> &'a AttributeValue {
        &attrs.iter().find(|a| a.trait_type == key).unwrap().value
    }

    #[test]
    fn test_describe_names() {
        let attrs = describe_traits(&record(), BIRTH).unwrap();
        assert_eq!(value_of(&attrs, "Core Geometry"), &AttributeValue::Text("Cross".into()));
        assert_eq!(value_of(&attrs, "Pathway Pattern"), &AttributeValue::Text("Wave".into()));
        assert_eq!(value_of(&attrs, "Particle System"), &AttributeValue::Text("Square".into()));
        assert_eq!(value_of(&attrs, "Network Density"), &AttributeValue::Number(5));
        assert_eq!(value_of(&attrs, "Rarity"), &AttributeValue::Text("Mythic".into()));
        assert_eq!(value_of(&attrs, "Stage Name"), &AttributeValue::Text("Spark".into()));
        assert_eq!(value_of(&attrs, "Genesis Class"), &AttributeValue::Text("Enhanced".into()));
        assert!(attrs.iter().any(|a| a.trait_type == "Next Evolution"));
    }

    #[test]
    fn test_final_stage_has_no_next() {
        let attrs = describe_traits(&record(), BIRTH + NEXUS_AT).unwrap();
        assert_eq!(value_of(&attrs, "Evolution Stage"), &AttributeValue::Number(4));
        assert!(!attrs.iter().any(|a| a.trait_type == "Next Evolution"));
    }

    #[test]
    fn test_describe_before_birth_fails() {
        assert!(describe_traits(&record(), BIRTH - 1).is_err());
    }

    #[test]
    fn test_metadata_keeps_raw_birth_beyond_calendar() {
        let far = TraitRecord::from_raw(RawTraitRecord {
            birth_time: u64::MAX,
            ..record().to_raw()
        })
        .unwrap();
        let meta = TokenMetadata::build(&far, u64::MAX, &RenderConfig::reference()).unwrap();
        assert!(meta.description.contains(&u64::MAX.to_string()));
        assert!(!meta.description.contains("1969"));
    }

    #[test]
    fn test_metadata_json() {
        let meta = TokenMetadata::build(&record(), BIRTH, &RenderConfig::reference()).unwrap();
        assert_eq!(meta.name, "Nexus #3");
        assert!(meta.image.starts_with("data:image/svg+xml;base64,"));
        assert!(meta.description.contains("2023-11-14"));
        let json = meta.to_json().unwrap();
        assert!(json.contains("\"trait_type\": \"Rarity\""));
        assert!(json.contains("\"display_type\": \"date\""));
        let back: TokenMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, meta);
    }
}
