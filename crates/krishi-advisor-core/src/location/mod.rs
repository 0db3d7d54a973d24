//! Regional feasibility for crop advice.
//!
//! Everything here is a lookup over the static tables in [`tables`]: query
//! facet extraction, unusual crop×location detection, and the
//! location-specific advice blocks the generator splices into responses.

pub mod tables;

use serde::Serialize;

use crate::models::QueryAnalysis;
pub use tables::{
    AgroclimaticZone, CropSuitability, Feasibility, LocationProfile, UnusualCombinationRule,
};
use tables::{AGROCLIMATIC_ZONES, CROPS, CROP_SUITABILITY, SEASONS, STATES, UNUSUAL_COMBINATIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuitabilityStatus {
    Excellent,
    Marginal,
    Unsuitable,
    /// No suitability data for the crop.
    Unknown,
    /// Data exists for the crop but not for this location.
    Uncertain,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suitability {
    pub status: SuitabilityStatus,
    pub message: String,
}

/// Crop and location knowledge for Indian states.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationCropAdaptation;

impl LocationCropAdaptation {
    pub fn new() -> Self {
        Self
    }

    /// Extract crop, location and season from free text.
    ///
    /// Each facet takes the first table entry found in the lowercased text
    /// and adds to the confidence: crop 0.3, location 0.3, season 0.2, and a
    /// further 0.2 when crop and location form an unusual combination.
    pub fn analyze_query(&self, text: &str) -> QueryAnalysis {
        let lower = text.to_lowercase();
        let mut analysis = QueryAnalysis::default();

        if let Some(crop) = CROPS
            .iter()
            .find(|c| lower.contains(*c) || lower.contains(&format!("{c}s")))
        {
            analysis.crop = Some(crop.to_string());
            analysis.confidence += 0.3;
        }

        if let Some(state) = STATES
            .iter()
            .find(|s| lower.contains(s.name) || lower.contains(&s.name.replace(' ', "")))
        {
            analysis.location = Some(state.name.to_string());
            analysis.confidence += 0.3;
        }

        if let Some(season) = SEASONS.iter().find(|s| lower.contains(*s)) {
            analysis.season = Some(season.to_string());
            analysis.confidence += 0.2;
        }

        if let (Some(crop), Some(location)) = (&analysis.crop, &analysis.location) {
            if let Some(key) = self.check_unusual_combination(crop, location) {
                analysis.unusual_combination = Some(key.to_string());
                analysis.confidence += 0.2;
            }
        }

        analysis.confidence = analysis.confidence.min(1.0);
        analysis
    }

    /// Key of the first rule with a pattern mentioning both `crop` and
    /// `location`.
    pub fn check_unusual_combination(&self, crop: &str, location: &str) -> Option<&'static str> {
        let crop = crop.trim().to_lowercase();
        let location = location.trim().to_lowercase();
        if crop.is_empty() || location.is_empty() {
            return None;
        }

        UNUSUAL_COMBINATIONS
            .iter()
            .find(|rule| {
                rule.patterns.iter().any(|(c, l)| {
                    let combo = format!("{c} + {l}");
                    combo.contains(&crop) && combo.contains(&location)
                })
            })
            .map(|rule| rule.key)
    }

    pub fn unusual_rule(&self, key: &str) -> Option<&'static UnusualCombinationRule> {
        UNUSUAL_COMBINATIONS.iter().find(|r| r.key == key)
    }

    pub fn location_profile(&self, location: &str) -> Option<&'static LocationProfile> {
        let location = location.trim().to_lowercase();
        STATES.iter().find(|s| s.name == location)
    }

    pub fn crop_suitability(&self, crop: &str) -> Option<&'static CropSuitability> {
        let crop = crop.trim().to_lowercase();
        CROP_SUITABILITY.iter().find(|c| c.crop == crop)
    }

    /// Climate, challenges and cropping pattern for `location`, or generic
    /// regional advice when the location is not in the tables.
    pub fn generate_location_adaptation(
        &self,
        crop: &str,
        location: &str,
        season: Option<&str>,
    ) -> String {
        let Some(profile) = self.location_profile(location) else {
            return self.generate_generic_advice(crop);
        };

        let mut out = format!(
            "\n### 🌍 Location-Specific Adaptations for {}\n\n",
            profile.name.to_uppercase()
        );
        out.push_str(&format!(
            "**Climate Considerations for {} climate:**\n",
            profile.climate
        ));
        out.push_str(&format!(
            "- Rainfall: {} (plan irrigation accordingly)\n",
            profile.rainfall
        ));
        out.push_str(&format!(
            "- Temperature: Winter {}, Summer {}\n",
            profile.temperature.winter, profile.temperature.summer
        ));
        out.push_str(&format!(
            "- Soil types: {}\n\n",
            profile.soil_types.join(", ")
        ));

        out.push_str("**Local Challenges and Solutions:**\n");
        for (i, challenge) in profile.challenges.iter().enumerate() {
            out.push_str(&format!(
                "{}. **{}**: {}\n",
                i + 1,
                challenge.replace('_', " ").to_uppercase(),
                self.solution_for_challenge(challenge, crop)
            ));
        }

        out.push_str(&format!(
            "\n**Recommended Cropping Pattern:** {}\n",
            profile.cropping_pattern
        ));
        out.push_str(&format!(
            "**Dominant Irrigation Method:** {}\n",
            profile.irrigation.replace('_', " + ")
        ));

        if let Some(note) = season.and_then(tables::season_note) {
            out.push_str(&format!(
                "**{} Season Timing:** {}\n",
                capitalize(season.unwrap_or_default()),
                note
            ));
        }
        out.push('\n');
        out
    }

    /// Advisory block for an unusual combination, or an empty string when
    /// the pairing is not flagged.
    pub fn generate_unusual_combination_advice(&self, crop: &str, location: &str) -> String {
        let Some(rule) = self
            .check_unusual_combination(crop, location)
            .and_then(|key| self.unusual_rule(key))
        else {
            return String::new();
        };

        let mut out = String::from("\n## ⚠️ Important Advisory: Unusual Crop-Location Combination\n\n");
        out.push_str(&format!("**Status**: {}\n\n", rule.feasibility.label()));

        out.push_str(&format!(
            "**Why {crop} cultivation in {location} is challenging:**\n"
        ));
        for (i, reason) in rule.reasons.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, reason));
        }

        out.push_str("\n**Recommended Alternatives:**\n");
        for (i, alt) in rule.alternatives.iter().enumerate() {
            out.push_str(&format!(
                "{}. **{}**: Much better suited for local conditions\n",
                i + 1,
                alt
            ));
        }

        if !rule.exceptions.is_empty() {
            out.push_str("\n**Possible Exception Cases:**\n");
            for (i, exception) in rule.exceptions.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", i + 1, exception));
            }
        }

        out.push_str(
            "\n**Recommendation**: Consider switching to recommended alternatives for better success and profitability.\n\n",
        );
        out
    }

    pub fn generate_generic_advice(&self, crop: &str) -> String {
        format!(
            "\n### 🌍 Regional Adaptation Guidelines\n\n\
             Since specific location wasn't mentioned, here are general regional adaptations for {crop}:\n\n\
             **For different regions:**\n\
             - **Northern Plains**: Focus on timely sowing and water management\n\
             - **Southern States**: Emphasize heat tolerance and pest management\n\
             - **Western Regions**: Priority on drought tolerance and water conservation\n\
             - **Eastern Areas**: Focus on drainage and disease management\n\
             - **Coastal Zones**: Emphasize cyclone preparedness and salinity management\n\n\
             **General Recommendation**: Specify your location for more targeted advice.\n\n"
        )
    }

    pub fn validate_crop_location(&self, crop: &str, location: &str) -> Suitability {
        let Some(data) = self.crop_suitability(crop) else {
            return Suitability {
                status: SuitabilityStatus::Unknown,
                message: "Crop data not available for detailed analysis".to_string(),
            };
        };
        let location = location.trim().to_lowercase();

        if data.suitable.contains(&location.as_str()) {
            return Suitability {
                status: SuitabilityStatus::Excellent,
                message: format!("{crop} is well-suited for {location} with ideal growing conditions"),
            };
        }
        if data.marginal.contains(&location.as_str()) {
            return Suitability {
                status: SuitabilityStatus::Marginal,
                message: format!(
                    "{crop} can be grown in {location} but with additional care and possibly lower yields"
                ),
            };
        }
        if !location.is_empty() && data.unsuitable.iter().any(|s| s.contains(&location)) {
            return Suitability {
                status: SuitabilityStatus::Unsuitable,
                message: format!(
                    "{crop} is not recommended for {location} due to unfavorable conditions"
                ),
            };
        }
        Suitability {
            status: SuitabilityStatus::Uncertain,
            message: format!(
                "Limited data available for {crop} in {location}. Consult local experts"
            ),
        }
    }

    pub fn solution_for_challenge(&self, challenge: &str, crop: &str) -> String {
        tables::challenge_solution(challenge, crop)
    }

    /// The first agro-climatic zone listing `location`.
    pub fn agroclimatic_zone(&self, location: &str) -> Option<&'static AgroclimaticZone> {
        let location = location.trim().to_lowercase().replace('_', " ");
        if location.is_empty() {
            return None;
        }
        AGROCLIMATIC_ZONES
            .iter()
            .find(|z| z.states.iter().any(|s| s.contains(&location)))
    }
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unusual_combination_keys() {
        let lca = LocationCropAdaptation::new();
        assert_eq!(
            lca.check_unusual_combination("rice", "rajasthan"),
            Some("rice_in_desert")
        );
        assert_eq!(lca.check_unusual_combination("wheat", "punjab"), None);
        assert_eq!(
            lca.check_unusual_combination("sugarcane", "rajasthan"),
            Some("sugarcane_in_arid")
        );
        assert_eq!(
            lca.check_unusual_combination("Wheat", "Kerala"),
            Some("wheat_in_humid_tropics")
        );
        assert_eq!(lca.check_unusual_combination("", "rajasthan"), None);
    }

    #[test]
    fn test_analyze_query_facets() {
        let lca = LocationCropAdaptation::new();
        let a = lca.analyze_query("How to grow wheat in Punjab during rabi?");
        assert_eq!(a.crop.as_deref(), Some("wheat"));
        assert_eq!(a.location.as_deref(), Some("punjab"));
        assert_eq!(a.season.as_deref(), Some("rabi"));
        assert!(a.unusual_combination.is_none());
        assert!((a.confidence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_analyze_query_unusual_and_spaceless_state() {
        let lca = LocationCropAdaptation::new();
        let a = lca.analyze_query("rice farming in rajasthan");
        assert_eq!(a.unusual_combination.as_deref(), Some("rice_in_desert"));
        assert!((a.confidence - 0.8).abs() < 1e-9);

        let b = lca.analyze_query("tomatoes near westbengal");
        assert_eq!(b.crop.as_deref(), Some("tomato"));
        assert_eq!(b.location.as_deref(), Some("west bengal"));
    }

    #[test]
    fn test_analyze_query_nothing_found() {
        let a = LocationCropAdaptation::new().analyze_query("hello there");
        assert_eq!(a, QueryAnalysis::default());
    }

    #[test]
    fn test_validate_crop_location_statuses() {
        let lca = LocationCropAdaptation::new();
        assert_eq!(
            lca.validate_crop_location("wheat", "punjab").status,
            SuitabilityStatus::Excellent
        );
        assert_eq!(
            lca.validate_crop_location("wheat", "bihar").status,
            SuitabilityStatus::Marginal
        );
        assert_eq!(
            lca.validate_crop_location("rice", "rajasthan").status,
            SuitabilityStatus::Unsuitable
        );
        assert_eq!(
            lca.validate_crop_location("wheat", "karnataka").status,
            SuitabilityStatus::Uncertain
        );
        assert_eq!(
            lca.validate_crop_location("maize", "punjab").status,
            SuitabilityStatus::Unknown
        );
    }

    #[test]
    fn test_location_adaptation_text() {
        let lca = LocationCropAdaptation::new();
        let text = lca.generate_location_adaptation("wheat", "punjab", Some("rabi"));
        assert!(text.contains("PUNJAB"));
        assert!(text.contains("WATER DEPLETION"));
        assert!(text.contains("drip irrigation for wheat"));
        assert!(text.contains("canal + tubewell"));
        assert!(text.contains("Rabi Season Timing"));

        let generic = lca.generate_location_adaptation("wheat", "atlantis", None);
        assert!(generic.contains("Regional Adaptation Guidelines"));
    }

    #[test]
    fn test_unusual_advice_hides_empty_exceptions() {
        let lca = LocationCropAdaptation::new();
        let rice = lca.generate_unusual_combination_advice("rice", "rajasthan");
        assert!(rice.contains("NOT RECOMMENDED"));
        assert!(rice.contains("Bajra"));
        assert!(rice.contains("Possible Exception Cases"));

        let cotton = lca.generate_unusual_combination_advice("cotton", "himachal");
        assert!(cotton.contains("NOT SUITABLE"));
        assert!(!cotton.contains("Possible Exception Cases"));

        assert!(lca
            .generate_unusual_combination_advice("wheat", "punjab")
            .is_empty());
    }

    #[test]
    fn test_solution_for_challenge_fallback() {
        let lca = LocationCropAdaptation::new();
        assert!(lca
            .solution_for_challenge("salinity", "rice")
            .contains("gypsum"));
        assert!(lca
            .solution_for_challenge("locusts", "rice")
            .contains("extension services"));
    }

    #[test]
    fn test_agroclimatic_zone() {
        let lca = LocationCropAdaptation::new();
        assert_eq!(lca.agroclimatic_zone("rajasthan").unwrap().key, "zone_2_hot_arid");
        assert_eq!(lca.agroclimatic_zone("west_bengal").unwrap().key, "zone_4_humid_subtropical");
        assert!(lca.agroclimatic_zone("atlantis").is_none());
        assert!(lca.agroclimatic_zone("").is_none());
    }
}
