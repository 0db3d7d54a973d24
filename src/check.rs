//! `krishi check`: crop/location suitability report.

use anyhow::{bail, Result};
use serde::Serialize;

use krishi_advisor_core::location::{Suitability, SuitabilityStatus};
use krishi_advisor_core::LocationCropAdaptation;

use crate::advisor::print_envelope;

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub crop: String,
    pub location: String,
    pub suitability: Suitability,
    pub unusual_combination: Option<&'static str>,
    pub agroclimatic_zone: Option<&'static str>,
    pub advice: String,
}

pub fn build_report(crop: &str, location: &str) -> CheckReport {
    let rules = LocationCropAdaptation::new();
    let crop = crop.trim().to_lowercase();
    let location = location.trim().to_lowercase();

    let unusual = rules.check_unusual_combination(&crop, &location);
    let advice = match unusual {
        Some(_) => rules.generate_unusual_combination_advice(&crop, &location),
        None => rules.generate_location_adaptation(&crop, &location, None),
    };

    CheckReport {
        suitability: rules.validate_crop_location(&crop, &location),
        unusual_combination: unusual,
        agroclimatic_zone: rules.agroclimatic_zone(&location).map(|z| z.key),
        advice,
        crop,
        location,
    }
}

pub fn run_check(crop: &str, location: &str, json: bool) -> Result<()> {
    if crop.trim().is_empty() || location.trim().is_empty() {
        bail!("Both crop and location are required");
    }
    let report = build_report(crop, location);

    if json {
        return print_envelope(report);
    }

    let status = match report.suitability.status {
        SuitabilityStatus::Excellent => "excellent",
        SuitabilityStatus::Marginal => "marginal",
        SuitabilityStatus::Unsuitable => "unsuitable",
        SuitabilityStatus::Unknown => "unknown",
        SuitabilityStatus::Uncertain => "uncertain",
    };
    println!("Crop:        {}", report.crop);
    println!("Location:    {}", report.location);
    println!("Suitability: {} ({})", status, report.suitability.message);
    if let Some(zone) = report.agroclimatic_zone {
        println!("Zone:        {zone}");
    }
    if let Some(key) = report.unusual_combination {
        println!("Unusual:     {key}");
    }
    println!();
    println!("{}", report.advice.trim());
    Ok(())
}
