//! Static regional reference data.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TemperatureRange {
    pub winter: &'static str,
    pub summer: &'static str,
}

/// Climate, soil and cropping profile of one state.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LocationProfile {
    pub name: &'static str,
    pub climate: &'static str,
    pub rainfall: &'static str,
    pub temperature: TemperatureRange,
    pub soil_types: &'static [&'static str],
    pub major_crops: &'static [&'static str],
    pub irrigation: &'static str,
    pub cropping_pattern: &'static str,
    pub challenges: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct IdealConditions {
    pub rainfall: &'static str,
    pub temperature: &'static str,
    pub soil_types: &'static [&'static str],
    pub water_requirement: &'static str,
    pub season: &'static str,
}

/// Where a crop grows well, poorly, or not at all.
///
/// `unsuitable` holds region descriptors such as `rajasthan_desert`; a
/// location is unsuitable when it is a substring of one of them.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CropSuitability {
    pub crop: &'static str,
    pub ideal: IdealConditions,
    pub suitable: &'static [&'static str],
    pub marginal: &'static [&'static str],
    pub unsuitable: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feasibility {
    NotRecommended,
    HighlyChallenging,
    Challenging,
    NotSuitable,
}

impl Feasibility {
    pub fn label(&self) -> &'static str {
        match self {
            Feasibility::NotRecommended => "NOT RECOMMENDED",
            Feasibility::HighlyChallenging => "HIGHLY CHALLENGING",
            Feasibility::Challenging => "CHALLENGING",
            Feasibility::NotSuitable => "NOT SUITABLE",
        }
    }
}

/// A crop×location pairing flagged as agronomically infeasible.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UnusualCombinationRule {
    pub key: &'static str,
    /// `(crop, location)` pairs, matched by substring.
    pub patterns: &'static [(&'static str, &'static str)],
    pub feasibility: Feasibility,
    pub reasons: &'static [&'static str],
    pub alternatives: &'static [&'static str],
    /// Empty when there is no workable exception.
    pub exceptions: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AgroclimaticZone {
    pub key: &'static str,
    pub states: &'static [&'static str],
    pub characteristics: &'static str,
    pub suitable_crops: &'static [&'static str],
    pub challenges: &'static [&'static str],
}

pub const CROPS: &[&str] = &[
    "rice", "wheat", "cotton", "sugarcane", "maize", "bajra", "jowar", "tomato", "onion", "potato",
];

pub const SEASONS: &[&str] = &["kharif", "rabi", "summer", "monsoon", "winter"];

pub static STATES: &[LocationProfile] = &[
    LocationProfile {
        name: "punjab",
        climate: "semi-arid",
        rainfall: "400-700mm",
        temperature: TemperatureRange { winter: "5-20°C", summer: "25-45°C" },
        soil_types: &["alluvial", "sandy_loam"],
        major_crops: &["wheat", "rice", "cotton", "sugarcane", "maize"],
        irrigation: "canal_tubewell",
        cropping_pattern: "rice-wheat",
        challenges: &["water_depletion", "soil_degradation", "stubble_burning"],
    },
    LocationProfile {
        name: "haryana",
        climate: "semi-arid",
        rainfall: "350-650mm",
        temperature: TemperatureRange { winter: "3-18°C", summer: "25-48°C" },
        soil_types: &["alluvial", "sandy"],
        major_crops: &["wheat", "rice", "cotton", "bajra", "mustard"],
        irrigation: "canal_tubewell",
        cropping_pattern: "rice-wheat",
        challenges: &["groundwater_depletion", "salinity", "heat_stress"],
    },
    LocationProfile {
        name: "rajasthan",
        climate: "arid_semi-arid",
        rainfall: "100-600mm",
        temperature: TemperatureRange { winter: "5-25°C", summer: "30-50°C" },
        soil_types: &["sandy", "sandy_loam", "saline"],
        major_crops: &["bajra", "jowar", "wheat", "mustard", "guar"],
        irrigation: "tubewell_limited",
        cropping_pattern: "drought_tolerant",
        challenges: &["water_scarcity", "sand_storms", "extreme_heat"],
    },
    LocationProfile {
        name: "uttar pradesh",
        climate: "subtropical",
        rainfall: "600-1200mm",
        temperature: TemperatureRange { winter: "5-25°C", summer: "25-45°C" },
        soil_types: &["alluvial", "clayey_loam"],
        major_crops: &["wheat", "rice", "sugarcane", "potato", "pulses"],
        irrigation: "canal_tubewell_pond",
        cropping_pattern: "rice-wheat-sugarcane",
        challenges: &["waterlogging", "pest_pressure", "fragmented_holdings"],
    },
    LocationProfile {
        name: "bihar",
        climate: "subtropical",
        rainfall: "1000-1400mm",
        temperature: TemperatureRange { winter: "8-25°C", summer: "25-45°C" },
        soil_types: &["alluvial", "clayey"],
        major_crops: &["rice", "wheat", "maize", "pulses", "jute"],
        irrigation: "canal_pond_flood",
        cropping_pattern: "rice-wheat",
        challenges: &["flooding", "drainage", "soil_fertility"],
    },
    LocationProfile {
        name: "west bengal",
        climate: "humid_subtropical",
        rainfall: "1400-2500mm",
        temperature: TemperatureRange { winter: "10-28°C", summer: "25-40°C" },
        soil_types: &["alluvial", "laterite", "clayey"],
        major_crops: &["rice", "jute", "tea", "potato", "vegetables"],
        irrigation: "natural_rainfall",
        cropping_pattern: "rice-rice-potato",
        challenges: &["cyclones", "high_humidity", "pest_disease"],
    },
    LocationProfile {
        name: "maharashtra",
        climate: "tropical_semi-arid",
        rainfall: "400-3000mm",
        temperature: TemperatureRange { winter: "12-30°C", summer: "25-45°C" },
        soil_types: &["black_soil", "red_soil", "alluvial"],
        major_crops: &["cotton", "sugarcane", "soybean", "wheat", "rice"],
        irrigation: "rainfed_canal_drip",
        cropping_pattern: "cotton-wheat_soybean-wheat",
        challenges: &["erratic_rainfall", "drought", "pest_resistance"],
    },
    LocationProfile {
        name: "karnataka",
        climate: "tropical_monsoon",
        rainfall: "500-3000mm",
        temperature: TemperatureRange { winter: "15-32°C", summer: "22-40°C" },
        soil_types: &["red_soil", "black_soil", "laterite"],
        major_crops: &["rice", "ragi", "cotton", "sugarcane", "coffee"],
        irrigation: "canal_tank_borewell",
        cropping_pattern: "kharif-rabi-summer",
        challenges: &["water_disputes", "climate_variability", "coffee_pest"],
    },
    LocationProfile {
        name: "andhra pradesh",
        climate: "tropical",
        rainfall: "600-1200mm",
        temperature: TemperatureRange { winter: "18-30°C", summer: "28-45°C" },
        soil_types: &["red_soil", "black_soil", "alluvial"],
        major_crops: &["rice", "cotton", "groundnut", "chili", "turmeric"],
        irrigation: "canal_tank_borewell",
        cropping_pattern: "rice-pulse_cotton-chickpea",
        challenges: &["cyclones", "salinity", "groundwater_depletion"],
    },
    LocationProfile {
        name: "tamil nadu",
        climate: "tropical",
        rainfall: "800-1200mm",
        temperature: TemperatureRange { winter: "20-30°C", summer: "28-42°C" },
        soil_types: &["red_soil", "black_soil", "alluvial"],
        major_crops: &["rice", "cotton", "sugarcane", "groundnut", "banana"],
        irrigation: "tank_canal_borewell",
        cropping_pattern: "rice-rice_cotton-pulse",
        challenges: &["water_scarcity", "salinity", "pest_resistance"],
    },
];

pub static CROP_SUITABILITY: &[CropSuitability] = &[
    CropSuitability {
        crop: "rice",
        ideal: IdealConditions {
            rainfall: "1000-2000mm",
            temperature: "20-35°C",
            soil_types: &["clayey", "alluvial"],
            water_requirement: "high",
            season: "kharif",
        },
        suitable: &["west bengal", "andhra pradesh", "tamil nadu", "punjab", "haryana", "uttar pradesh"],
        marginal: &["bihar", "odisha", "chhattisgarh"],
        unsuitable: &["rajasthan_desert", "gujarat_kutch", "ladakh"],
    },
    CropSuitability {
        crop: "wheat",
        ideal: IdealConditions {
            rainfall: "300-750mm",
            temperature: "10-25°C",
            soil_types: &["alluvial", "black_soil"],
            water_requirement: "moderate",
            season: "rabi",
        },
        suitable: &["punjab", "haryana", "uttar pradesh", "madhya pradesh", "rajasthan"],
        marginal: &["bihar", "west bengal", "maharashtra"],
        unsuitable: &["kerala", "tamil_nadu_coastal", "assam"],
    },
    CropSuitability {
        crop: "cotton",
        ideal: IdealConditions {
            rainfall: "500-1000mm",
            temperature: "20-35°C",
            soil_types: &["black_soil", "alluvial"],
            water_requirement: "moderate_high",
            season: "kharif",
        },
        suitable: &["maharashtra", "gujarat", "andhra pradesh", "karnataka", "punjab"],
        marginal: &["haryana", "rajasthan", "odisha"],
        unsuitable: &["himachal pradesh", "uttarakhand", "assam"],
    },
    CropSuitability {
        crop: "sugarcane",
        ideal: IdealConditions {
            rainfall: "1000-1500mm",
            temperature: "20-35°C",
            soil_types: &["alluvial", "black_soil"],
            water_requirement: "very_high",
            season: "annual",
        },
        suitable: &["uttar pradesh", "maharashtra", "karnataka", "tamil nadu"],
        marginal: &["punjab", "haryana", "bihar"],
        unsuitable: &["rajasthan", "himachal pradesh", "jharkhand"],
    },
    CropSuitability {
        crop: "bajra",
        ideal: IdealConditions {
            rainfall: "250-600mm",
            temperature: "25-35°C",
            soil_types: &["sandy", "sandy_loam"],
            water_requirement: "low",
            season: "kharif",
        },
        suitable: &["rajasthan", "gujarat", "haryana", "maharashtra"],
        marginal: &["punjab", "karnataka", "andhra pradesh"],
        unsuitable: &["kerala", "west bengal", "assam"],
    },
    CropSuitability {
        crop: "tomato",
        ideal: IdealConditions {
            rainfall: "600-1000mm",
            temperature: "18-27°C",
            soil_types: &["well_drained_loam"],
            water_requirement: "moderate",
            season: "rabi_summer",
        },
        suitable: &["karnataka", "andhra pradesh", "maharashtra", "odisha"],
        marginal: &["punjab", "haryana", "uttar pradesh"],
        unsuitable: &["rajasthan_desert", "assam_flood_prone"],
    },
    CropSuitability {
        crop: "onion",
        ideal: IdealConditions {
            rainfall: "600-1000mm",
            temperature: "15-25°C",
            soil_types: &["well_drained_sandy_loam"],
            water_requirement: "moderate",
            season: "rabi",
        },
        suitable: &["maharashtra", "karnataka", "gujarat", "andhra pradesh"],
        marginal: &["rajasthan", "madhya pradesh"],
        unsuitable: &["assam", "himachal pradesh"],
    },
];

pub static AGROCLIMATIC_ZONES: &[AgroclimaticZone] = &[
    AgroclimaticZone {
        key: "zone_1_cold_arid",
        states: &["jammu kashmir", "himachal pradesh", "uttarakhand"],
        characteristics: "Cold, low rainfall, high altitude",
        suitable_crops: &["apple", "barley", "peas", "potato"],
        challenges: &["frost", "short_season", "transportation"],
    },
    AgroclimaticZone {
        key: "zone_2_hot_arid",
        states: &["rajasthan", "gujarat"],
        characteristics: "Hot, very low rainfall, sandy soil",
        suitable_crops: &["bajra", "jowar", "guar", "desert_beans"],
        challenges: &["extreme_heat", "water_scarcity", "sand_storms"],
    },
    AgroclimaticZone {
        key: "zone_3_semi_arid",
        states: &["punjab", "haryana", "western uttar pradesh"],
        characteristics: "Moderate rainfall, extreme temperatures",
        suitable_crops: &["wheat", "rice", "cotton", "mustard"],
        challenges: &["groundwater_depletion", "salinity"],
    },
    AgroclimaticZone {
        key: "zone_4_humid_subtropical",
        states: &["eastern uttar pradesh", "bihar", "west bengal"],
        characteristics: "High rainfall, humid, fertile soil",
        suitable_crops: &["rice", "jute", "wheat", "vegetables"],
        challenges: &["waterlogging", "disease_pressure"],
    },
    AgroclimaticZone {
        key: "zone_5_coastal",
        states: &["kerala", "coastal karnataka", "goa"],
        characteristics: "High rainfall, humid, laterite soil",
        suitable_crops: &["coconut", "rice", "spices", "cashew"],
        challenges: &["cyclones", "soil_acidity", "pest_pressure"],
    },
];

pub static UNUSUAL_COMBINATIONS: &[UnusualCombinationRule] = &[
    UnusualCombinationRule {
        key: "rice_in_desert",
        patterns: &[("rice", "rajasthan"), ("rice", "thar desert"), ("paddy", "arid")],
        feasibility: Feasibility::NotRecommended,
        reasons: &[
            "Extremely high water requirement",
            "Unsuitable climate",
            "Economic unfeasibility",
        ],
        alternatives: &["Bajra", "Jowar", "Guar", "Desert beans"],
        exceptions: &["With drip irrigation and saline water treatment (experimental only)"],
    },
    UnusualCombinationRule {
        key: "sugarcane_in_arid",
        patterns: &[("sugarcane", "rajasthan"), ("sugarcane", "desert"), ("sugarcane", "low water")],
        feasibility: Feasibility::HighlyChallenging,
        reasons: &[
            "Very high water requirement (2500mm)",
            "Low profitability",
            "Environmental concerns",
        ],
        alternatives: &["Sweet sorghum", "Sugar beet (winter)", "Stevia"],
        exceptions: &["Micro-irrigation with adequate water source"],
    },
    UnusualCombinationRule {
        key: "wheat_in_humid_tropics",
        patterns: &[("wheat", "kerala"), ("wheat", "coastal areas"), ("wheat", "high humidity")],
        feasibility: Feasibility::Challenging,
        reasons: &[
            "High humidity promotes diseases",
            "Lack of winter chill",
            "Poor grain quality",
        ],
        alternatives: &["Rice", "Maize", "Millets"],
        exceptions: &["Hill areas with cooler temperatures"],
    },
    UnusualCombinationRule {
        key: "cotton_in_high_altitude",
        patterns: &[("cotton", "hills"), ("cotton", "cold areas"), ("cotton", "himachal")],
        feasibility: Feasibility::NotSuitable,
        reasons: &[
            "Requires long warm season",
            "Frost damage",
            "Poor fiber development",
        ],
        alternatives: &["Wool production", "Temperate fruits", "Vegetables"],
        exceptions: &[],
    },
];

/// Standard remedy for a named regional challenge.
pub fn challenge_solution(challenge: &str, crop: &str) -> String {
    let text = match challenge {
        "water_depletion" => {
            return format!(
                "Use drip irrigation for {crop}, practice water conservation techniques, rainwater harvesting"
            )
        }
        "soil_degradation" => "Add organic matter, balanced fertilization, crop rotation including legumes",
        "stubble_burning" => "Use crop residue management techniques, happy seeder for direct sowing",
        "groundwater_depletion" => "Shift to less water-intensive crops, improve irrigation efficiency",
        "salinity" => "Use salt-tolerant varieties, gypsum application, improved drainage",
        "heat_stress" => "Choose heat-tolerant varieties, provide shade during critical growth stages",
        "water_scarcity" => "Drought-tolerant varieties, mulching, efficient irrigation scheduling",
        "sand_storms" => "Wind barriers, soil binding crops, protective structures",
        "extreme_heat" => "Heat-tolerant varieties, protective irrigation, shade management",
        "waterlogging" => "Improved drainage, raised bed cultivation, waterlogging-tolerant varieties",
        "pest_pressure" => "IPM practices, resistant varieties, biological control agents",
        "fragmented_holdings" => "Cooperative farming, contract farming, shared machinery",
        "flooding" => "Flood-tolerant varieties, improved drainage, early warning systems",
        "drainage" => "Subsurface drainage, raised beds, proper field leveling",
        "soil_fertility" => "Soil testing, balanced nutrition, organic matter addition",
        "cyclones" => "Wind-resistant varieties, protective structures, crop insurance",
        "high_humidity" => "Proper ventilation, disease-resistant varieties, fungicide scheduling",
        "pest_disease" => "Regular monitoring, preventive sprays, resistant varieties",
        "erratic_rainfall" => "Drought-tolerant varieties, rainwater harvesting, crop insurance",
        "drought" => "Drought management practices, deficit irrigation, drought-tolerant crops",
        "pest_resistance" => "Integrated pest management, rotation of chemicals, biocontrol",
        "climate_variability" => {
            "Climate-resilient varieties, diversified cropping, weather-based advisories"
        }
        _ => "Consult local agricultural extension services for specific solutions",
    };
    text.to_string()
}

/// Timing note for a named season.
pub fn season_note(season: &str) -> Option<&'static str> {
    match season {
        "kharif" | "monsoon" => Some(
            "Sow with the onset of the monsoon (June-July) and harvest in September-October; plan drainage for heavy spells.",
        ),
        "rabi" | "winter" => Some(
            "Sow from October to December on residual moisture and harvest in March-April; protect against frost in January.",
        ),
        "summer" => Some(
            "Grow short-duration zaid crops between March and June; assured irrigation is essential.",
        ),
        _ => None,
    }
}
