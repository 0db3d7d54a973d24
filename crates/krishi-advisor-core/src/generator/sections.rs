//! Template sections for assembled responses.
//!
//! Every builder returns a markdown block that starts and ends with a blank
//! line, so blocks can be concatenated in any order.

use crate::models::RagResult;

/// Agronomic reference figures for a crop.
pub(crate) struct CropProfile {
    pub crop: &'static str,
    pub season: &'static str,
    pub soil_preparation: &'static str,
    pub seed_rate: &'static str,
    pub spacing: &'static str,
    pub water: &'static str,
    pub critical_stages: &'static str,
    pub nutrients: &'static str,
    pub pests: &'static [&'static str],
    pub diseases: &'static [&'static str],
}

static CROP_PROFILES: &[CropProfile] = &[
    CropProfile {
        crop: "rice",
        season: "Kharif, nursery in June and transplanting in July",
        soil_preparation: "Two to three ploughings, puddling to cut percolation, then levelling",
        seed_rate: "15-20 kg/ha for transplanting, 5 kg/ha under SRI",
        spacing: "20 x 15 cm transplanted, 25 x 25 cm under SRI",
        water: "1200-1500 mm over the season",
        critical_stages: "Tillering, panicle initiation, flowering and grain filling",
        nutrients: "120:60:60 kg/ha N:P:K with zinc sulphate 25 kg/ha where deficient",
        pests: &["Stem borer", "Leaf folder", "Brown planthopper"],
        diseases: &["Blast", "Sheath blight", "Bacterial leaf blight"],
    },
    CropProfile {
        crop: "wheat",
        season: "Rabi, sown 1-20 November in the north-western plains",
        soil_preparation: "Two ploughings to a fine tilth with a levelled seedbed",
        seed_rate: "100 kg/ha timely, 125 kg/ha for late sowing",
        spacing: "Rows 20-22 cm apart, seed 4-5 cm deep",
        water: "400-500 mm in 5-6 irrigations",
        critical_stages: "Crown root initiation (21 DAS), jointing, flowering and milk stage",
        nutrients: "120:60:40 kg/ha N:P:K irrigated, half that under rainfed conditions",
        pests: &["Aphid", "Termite", "Pink stem borer"],
        diseases: &["Yellow rust", "Brown rust", "Karnal bunt"],
    },
    CropProfile {
        crop: "cotton",
        season: "Kharif, sown April-May under irrigation or with the monsoon",
        soil_preparation: "Deep ploughing once in three years, ridges on heavy soils",
        seed_rate: "1.5-2 kg/ha for Bt hybrids",
        spacing: "90-100 x 60 cm for hybrids",
        water: "700-1200 mm depending on rainfall",
        critical_stages: "Square formation, flowering and boll development",
        nutrients: "150:60:60 kg/ha N:P:K for hybrids, nitrogen split in three doses",
        pests: &["Pink bollworm", "Whitefly", "Jassid"],
        diseases: &["Leaf curl virus", "Root rot", "Boll rot"],
    },
    CropProfile {
        crop: "tomato",
        season: "Rabi and summer, nursery of 25-30 days",
        soil_preparation: "Well-drained loam, raised beds in heavy soils",
        seed_rate: "400-500 g/ha for open-pollinated varieties, 150-200 g/ha for hybrids",
        spacing: "60 x 45 cm determinate, 75 x 60 cm staked indeterminate",
        water: "600-800 mm, best given through drip",
        critical_stages: "Flowering and fruit set",
        nutrients: "120:80:60 kg/ha N:P:K plus calcium to prevent blossom end rot",
        pests: &["Fruit borer", "Whitefly", "Leaf miner"],
        diseases: &["Early blight", "Late blight", "Leaf curl virus"],
    },
    CropProfile {
        crop: "onion",
        season: "Rabi, transplanting 45-50 day old seedlings in December-January",
        soil_preparation: "Fine, friable sandy loam on flat beds",
        seed_rate: "8-10 kg/ha in the nursery",
        spacing: "15 x 10 cm",
        water: "350-550 mm in frequent light irrigations",
        critical_stages: "Bulb initiation and bulb development",
        nutrients: "100:50:50 kg/ha N:P:K with sulphur 30 kg/ha",
        pests: &["Thrips", "Onion maggot"],
        diseases: &["Purple blotch", "Stemphylium blight"],
    },
];

pub(crate) fn crop_profile(name: &str) -> Option<&'static CropProfile> {
    let name = name.to_lowercase();
    CROP_PROFILES.iter().find(|p| name.contains(p.crop))
}

struct Symptom {
    cues: &'static [&'static str],
    diagnosis: &'static str,
    action: &'static str,
}

static SYMPTOMS: &[Symptom] = &[
    Symptom {
        cues: &["yellow", "pale", "chlorosis"],
        diagnosis: "Nitrogen Deficiency",
        action: "Yellowing that starts on the older, lower leaves points to nitrogen deficiency. \
                 Top-dress 25-30 kg urea per acre before the next irrigation, or spray a 2% urea \
                 solution for a quick green-up. If the youngest leaves yellow first, suspect iron \
                 or sulphur instead and confirm with a soil test.",
    },
    Symptom {
        cues: &["purple", "reddish"],
        diagnosis: "Phosphorus Deficiency",
        action: "Purple or reddish leaves with poor root growth indicate phosphorus shortage. \
                 Apply 50 kg DAP per acre at the next opportunity and use PSB culture with the \
                 following crop.",
    },
    Symptom {
        cues: &["brown edges", "scorch", "burnt", "leaf margins"],
        diagnosis: "Potassium Deficiency",
        action: "Browning along leaf margins and weak stems suggest potassium deficiency. \
                 Apply 40 kg MOP per acre and avoid excess nitrogen.",
    },
    Symptom {
        cues: &["white patches", "white streaks", "khaira"],
        diagnosis: "Zinc Deficiency",
        action: "Pale or white streaks between veins on middle leaves usually mean zinc \
                 deficiency. Spray 0.5% zinc sulphate with 0.25% lime and apply 10 kg zinc \
                 sulphate per acre at the next sowing.",
    },
    Symptom {
        cues: &["wilt", "drooping", "wilting"],
        diagnosis: "Water Stress or Root Disease",
        action: "Wilting in moist soil points to root rot or wilt disease; in dry soil it is \
                 water stress. Check the roots, irrigate lightly if dry, and drench with \
                 carbendazim 1 g/litre where roots are brown and rotten.",
    },
    Symptom {
        cues: &["holes", "eaten", "caterpillar"],
        diagnosis: "Chewing Insect Damage",
        action: "Holes in leaves or fruit come from caterpillars or beetles. Scout in the early \
                 morning, install pheromone traps, and spray neem oil 3% or a recommended \
                 insecticide once damage crosses the economic threshold.",
    },
    Symptom {
        cues: &["curl", "curling", "sticky"],
        diagnosis: "Sucking Pests or Leaf Curl Virus",
        action: "Curled, sticky leaves indicate aphids, whitefly or thrips, which also spread \
                 leaf curl virus. Use yellow sticky traps, remove infected plants, and spray \
                 imidacloprid 0.5 ml/litre if the population keeps rising.",
    },
    Symptom {
        cues: &["spots", "blight", "lesions"],
        diagnosis: "Fungal Leaf Disease",
        action: "Spots or lesions on leaves are usually fungal. Remove badly affected leaves, \
                 avoid overhead irrigation, and spray mancozeb 2.5 g/litre at 10 day intervals.",
    },
];

pub(crate) fn introduction(topic: &str) -> String {
    format!(
        r#"
# 🌾 Comprehensive Guide: {topic}

Thank you for your question about **{topic}**. Farmers across the country ask about this every season, so this guide walks through it from the ground up: the principles that decide success, the field operations in order, the problems you are most likely to meet, and the money involved.

## 📋 Table of Contents
1. Understanding the Fundamentals
2. Step-by-Step Implementation Guide
3. Problem Identification and Solutions
4. Best Practices from Successful Farmers
5. Economic Analysis and Profitability
6. Seasonal Calendar and Timing
7. Required Resources and Tools
8. Government Support and Schemes
9. Summary, Quick Reference and FAQ
10. Expert Tips and Recommendations

---

## 🎯 Why This Matters for Your Farm

Getting {topic} right affects yield, input cost and the price you receive. The practices below apply whether you farm two acres or twenty. They combine research from the agricultural universities with methods that working farmers have tested in their own fields, so adapt the numbers to your soil test and local conditions rather than treating them as fixed rules.

"#
    )
}

/// Matched knowledge-base answers, or nothing when there are none.
pub(crate) fn knowledge_insights(rag_results: &[RagResult]) -> String {
    if rag_results.is_empty() {
        return String::new();
    }

    let mut out = String::from("\n## 📖 Insights from the Knowledge Base\n\n");
    for (i, result) in rag_results.iter().enumerate() {
        let category = result
            .category
            .map(|c| c.as_str().replace('_', " "))
            .unwrap_or_else(|| "general".to_string());
        out.push_str(&format!(
            "### Answer {} ({}, match {:.0}%)\n\n{}\n\n",
            i + 1,
            category,
            result.similarity_score * 100.0,
            result.solution.trim()
        ));
    }
    out
}

pub(crate) fn fundamentals(topic: &str, profile: Option<&CropProfile>) -> String {
    let mut out = format!(
        r#"
## 1. 📚 Understanding the Fundamentals

### What You Need to Know First

{topic} depends on a handful of factors that you can measure and manage. Knowing them lets you judge any recommendation, including the ones in this guide.

### A. Scientific Principles

- **Temperature**: Each crop has a range in which it grows and sets grain or fruit well. Rice prefers 20-35°C while wheat does best at 15-25°C. Sowing outside the window exposes flowering to heat or cold, which costs more yield than almost any other mistake.

- **Soil Reaction**: Soil pH controls how much of the applied fertilizer plants can take up. Between pH 6.5 and 7.5 nitrogen, phosphorus and potassium are most available. Outside that band nutrients stay locked in the soil even when the soil test shows plenty.

- **Water at the Right Time**: A short dry spell at flowering or grain filling can cut yield by a third, while the same stress during vegetative growth often does little harm. Irrigation should follow crop stages rather than the calendar.

### B. Traditional Wisdom

- **Crop Rotation**: Following a cereal with a legume returns 30-40 kg of nitrogen per hectare through root nodules and breaks pest cycles that build up under continuous cropping.

- **Mixed and Inter-cropping**: Growing pigeon pea between cotton rows or mustard along wheat borders spreads risk, feeds beneficial insects and uses space the main crop leaves empty.

### C. Modern Practice

- **Soil-Test-Based Nutrition**: Fertilizing to a soil test instead of a blanket dose typically saves 15-20% of fertilizer cost with the same or better yield.

- **Improved Varieties**: Current varieties from the state agricultural universities yield 20-40% more than old local seed and often carry resistance to the main diseases of the region.

- **Digital Advisory**: Weather alerts, mandi prices on eNAM and photo-based disease diagnosis are all available on a basic smartphone.

"#
    );

    if let Some(p) = profile {
        out.push_str(&format!(
            "### D. {} at a Glance\n\n\
             | Parameter | Recommendation |\n\
             |-----------|----------------|\n\
             | Season | {} |\n\
             | Land preparation | {} |\n\
             | Seed rate | {} |\n\
             | Spacing | {} |\n\
             | Water requirement | {} |\n\
             | Critical stages | {} |\n\
             | Nutrients | {} |\n\n\
             **Major pests:** {}\n\n\
             **Major diseases:** {}\n\n",
            capitalize(p.crop),
            p.season,
            p.soil_preparation,
            p.seed_rate,
            p.spacing,
            p.water,
            p.critical_stages,
            p.nutrients,
            p.pests.join(", "),
            p.diseases.join(", ")
        ));
    }
    out
}

/// Diagnosis for the first symptom mentioned in `query`.
pub(crate) fn symptom_diagnosis(query: &str, crop: &str) -> Option<String> {
    let lower = query.to_lowercase();
    let symptom = SYMPTOMS
        .iter()
        .find(|s| s.cues.iter().any(|cue| lower.contains(cue)))?;

    Some(format!(
        "\n## 🔍 Symptom Diagnosis: Likely {}\n\n\
         Based on what you describe in your {} field, the most likely cause is **{}**.\n\n\
         **Recommended action:** {}\n\n\
         Confirm the diagnosis by comparing several plants across the field. A problem that \
         follows irrigation channels or low spots is usually water related, while one spread \
         evenly across the field is more often nutritional.\n\n",
        symptom.diagnosis,
        crop,
        symptom.diagnosis.to_lowercase(),
        symptom.action
    ))
}

pub(crate) fn implementation(topic: &str) -> String {
    format!(
        r#"
## 2. 🛠️ Step-by-Step Implementation Guide

### Phase 1: Preparation (Weeks 1-2)

Here is the order of field operations for {topic}:

**Week 1: Assessment and Planning**
- Walk the whole field and mark patches that differ in soil colour, texture or wetness. They may need separate treatment.
- Take soil samples from 15-20 spots, mix them and send a composite sample to the nearest soil testing laboratory. The test costs a few hundred rupees and routinely saves thousands in fertilizer.
- Write down the previous crop, the weeds you saw last season and any areas where water stood after rain.

**Week 2: Field Preparation**
- Plough to 15-20 cm to bury weeds and residue and open up the soil.
- Leave the clods to weather for two or three days so sun and birds can deal with soil pests.
- Work the soil to a crumbly tilth with a cultivator or rotavator.
- Level the field with a plank or laser leveller so water spreads evenly.

### Phase 2: Establishment (Weeks 3-5)

- Buy certified seed from a government agency or a licensed dealer and keep the bill.
- Treat seed with carbendazim 2 g/kg or Trichoderma 4 g/kg, then with the right biofertilizer.
- Sow at the recommended spacing. Crowded plants invite disease and sparse stands waste land.
- Give a light irrigation three to five days after sowing if the soil is dry, and fill gaps within ten days.
- Remove the first flush of weeds while they are small.

### Phase 3: Active Growth (Weeks 6-10)

- Scout the field twice a week, checking leaf undersides, stem bases and roots.
- Apply the first nitrogen top-dressing 25-30 days after sowing.
- Put up pheromone traps and yellow sticky traps to track pest build-up before it becomes damage.

"#
    )
}

pub(crate) fn problems_and_solutions(topic: &str) -> String {
    format!(
        r#"
## 3. 🔧 Common Problems and Detailed Solutions

### Problem 1: Poor Germination

**Symptoms**: Patchy emergence, gaps in rows, seedlings collapsing soon after they appear.

**Likely causes**:
- Old or badly stored seed with low vigour
- A hard surface crust or waterlogged seedbed
- Soil too cold or too hot at sowing
- Termites, ants or birds taking seed

**What to do**:
1. Test germination by placing 100 seeds on damp paper for a week. Below 80% means buying fresh seed.
2. Break the crust gently with a rake and re-sow gaps within ten days.
3. Next season store seed in airtight bins with dry neem leaves and sow only when the soil is warm enough.

### Problem 2: Nutrient Deficiency

| Nutrient | What you see | Quick fix |
|----------|--------------|-----------|
| Nitrogen | Older leaves yellow from the tip, thin stems | 2% urea spray, then urea top-dressing |
| Phosphorus | Purple tint, weak roots, late maturity | DAP 50 kg/acre or PSB culture |
| Potassium | Brown, scorched leaf edges, lodging | MOP 40 kg/acre |
| Zinc | Pale streaks between veins, stunting | Zinc sulphate 0.5% spray |
| Iron | Youngest leaves yellow with green veins | Ferrous sulphate 0.5% spray |

### Problem 3: Pest and Disease Outbreaks in {topic}

- Identify the pest before spraying; many insects in the field are harmless or helpful.
- Spray only once the economic threshold is crossed, and rotate chemical groups to slow resistance.
- Remove and destroy plants with virus symptoms early so they do not become a source for the rest of the field.

"#
    )
}

pub(crate) fn best_practices() -> String {
    String::from(
        r#"
## 4. 🌟 Best Practices from Successful Farmers

### Case Study 1: A Five-Acre Farm in Punjab

One grower raised wheat yield from 18 to 25 quintals per acre over three seasons by testing soil every year and cutting fertilizer where it was not needed, laser levelling to reduce irrigation time by a third, and combining pheromone traps with need-based spraying. Selling through a cooperative after a short storage period added about ₹200 per quintal.

**Key learning**: Keep records. Every field behaves differently and only your own notes show what works in yours.

### Case Study 2: A Women's Farmer Group in Maharashtra

Ten members pooled twenty acres of marginal land into vegetable production. Buying inputs together cut costs by a fifth, drip irrigation under the state subsidy stretched scarce water, and selling graded, packed produce directly in the city brought noticeably better prices. Income per acre roughly tripled within two years.

### Habits That Successful Farmers Share

1. **Record keeping**: Operations, costs and yields written down for every plot.
2. **Continuous learning**: Regular visits to KVK field days and demonstrations.
3. **Diversification**: Most land under the main crop, some under a second crop, and a small area for trying something new.
4. **Cooperation**: Membership in a farmer group or FPO for buying, selling and sharing machinery.
5. **One change per season**: Adopting a single new variety, practice or tool at a time so its effect is clear.

"#,
    )
}

pub(crate) fn economics(topic: &str) -> String {
    format!(
        r#"
## 5. 💰 Economic Analysis and Profitability

### Cost Comparison for {topic}

| Item | Conventional | Improved | Difference |
|------|--------------|----------|------------|
| Land preparation | ₹3,500/acre | ₹4,500/acre | +₹1,000 |
| Seed | ₹2,500/acre | ₹3,500/acre | +₹1,000 |
| Fertilizer and manure | ₹6,000/acre | ₹5,000/acre | -₹1,000 |
| Plant protection | ₹3,000/acre | ₹2,000/acre | -₹1,000 |
| Irrigation | ₹2,000/acre | ₹1,500/acre | -₹500 |
| Labour | ₹8,000/acre | ₹7,000/acre | -₹1,000 |
| **Total** | **₹25,000/acre** | **₹23,500/acre** | **-₹1,500** |

### Returns

| Scenario | Yield | Price per quintal | Gross return | Net profit |
|----------|-------|-------------------|--------------|------------|
| Conventional | 18 q/acre | ₹2,000 | ₹36,000 | ₹11,000 |
| Improved | 24 q/acre | ₹2,100 | ₹50,400 | ₹26,900 |
| Best case | 28 q/acre | ₹2,200 | ₹61,600 | ₹38,100 |

Better grain quality under improved practice usually fetches a slightly higher price.

### Managing Risk

- Weather can swing yield by a third in either direction, and prices move by ₹200-400 per quintal within a season.
- Crop insurance under PMFBY, a contract with an assured buyer, and storage with warehouse receipt financing all reduce the chance of a loss year.

"#
    )
}

pub(crate) fn seasonal_calendar() -> String {
    String::from(
        r#"
## 6. 📅 Seasonal Calendar and Critical Timings

### Month-by-Month Activities

**June: Before the Monsoon**
- Repair bunds and clean drainage channels
- Buy inputs early and service machinery
- Follow the forecast closely to time sowing

**July: Kharif Sowing**
- Sow after 60-80 mm of rain has fallen over a few days
- Fill gaps and finish the first weeding
- Watch for early pests in humid weather

**August: Active Growth**
- Second weeding and earthing up in row crops
- Scout weekly and spray only above threshold
- Keep drains open during heavy rain

**September: Flowering**
- Final nitrogen dose and micronutrient sprays
- Protect the crop from any water stress

**October-November: Maturity and Harvest**
- Harvest at physiological maturity, around 14-16% grain moisture
- Dry to below 12% moisture before storage
- Prepare land for the rabi crop without delay

### Reading the Weather

- **Below 500 mm rainfall**: Prefer short-duration, drought-tolerant varieties.
- **500-750 mm**: Standard varieties with protective irrigation.
- **Above 750 mm**: Put drainage and disease management first.

"#,
    )
}

pub(crate) fn resources() -> String {
    String::from(
        r#"
## 7. 🔨 Required Resources and Tools

### Basic Equipment
1. **Soil testing kit** (₹2,000-5,000) for pH and quick nutrient checks
2. **Knapsack sprayer** (₹2,000-8,000) with the right nozzle for each chemical
3. **Moisture meter** (₹500-1,500) to schedule irrigation
4. **Airtight storage bins** for seed and grain

### Worthwhile Investments
1. **Drip irrigation** (about ₹25,000 per acre, roughly half covered by subsidy)
2. **Mulching film** for vegetables to save water and suppress weeds
3. **Custom hiring** of tractors and seed drills instead of buying outright

### Where to Get Help
- **Krishi Vigyan Kendra**: Free soil testing, training and field demonstrations
- **State agricultural university**: Variety recommendations and expert visits
- **Cooperative societies**: Fertilizer and credit at member rates

### Checking Input Quality
- Seed: germination above 85%, physical purity above 98%, and a valid test date on the label
- Fertilizer: sealed bags, recent manufacture date, and a bill from a licensed dealer

"#,
    )
}

pub(crate) fn government_schemes() -> String {
    String::from(
        r#"
## 8. 🏛️ Government Support and Schemes

**1. PM-Kisan Samman Nidhi**
- ₹6,000 a year in three instalments for land-holding farmer families
- Register at pmkisan.gov.in or a Common Service Centre with Aadhaar, bank and land details

**2. Soil Health Card**
- Free soil testing with crop-wise fertilizer recommendations every two years

**3. PM Fasal Bima Yojana**
- Premium of 2% for kharif and 1.5% for rabi food crops
- Report localised losses within 72 hours

**4. Kisan Credit Card**
- Short-term crop loans at 7% interest, 4% with prompt repayment

**5. Irrigation and Mechanisation Subsidies**
- 55-90% subsidy on drip and sprinkler systems depending on category and state
- 40-50% subsidy on many implements, plus custom hiring centres

**6. Market Support**
- Minimum Support Price procurement for notified crops
- eNAM for online bidding across mandis with direct payment

### Keep These Documents Ready
1. Aadhaar card linked to your mobile number
2. Land records
3. Bank passbook for direct benefit transfer

"#,
    )
}

pub(crate) fn conclusion(topic: &str, query: &str) -> String {
    format!(
        r#"
## 9. 📝 Summary and Key Takeaways

### What Matters Most for {topic}

1. **Soil first**: Test, add organic matter and correct pH. This alone can lift yields by a fifth.
2. **Timing**: Sowing, fertilizer and spraying all work best at the right crop stage.
3. **Quality inputs**: Certified seed and genuine fertilizer repay their extra cost several times over.
4. **Water discipline**: Irrigate by crop stage and soil moisture, not by habit.
5. **Keep learning**: A couple of hours a week with the KVK, a farmer group or a good app compounds over the years.

### Your Next 30 Days

For your question "{query}", here is a simple plan:

- **Week 1**: Assess the field, send soil samples and contact the local KVK.
- **Week 2**: Buy inputs according to the test results and write a cultivation plan.
- **Week 3**: Prepare the field and start a daily record book.
- **Week 4**: Carry out the operations above and adjust to what you observe.

"#
    )
}

pub(crate) fn quick_reference() -> String {
    String::from(
        r#"
## 10. 📊 Quick Reference Guide

| Parameter | Recommendation | When | Warning sign |
|-----------|----------------|------|--------------|
| **Seed rate** | As per variety | Before sowing | Thin stand if too low |
| **Plant population** | Recommended spacing | 15 DAS | Yield loss if sparse |
| **First irrigation** | 3-5 DAS if dry | Establishment | Crusting if delayed |
| **Nitrogen** | Split in 2-3 doses | 30 and 60 DAS | Yellow older leaves |
| **Weed control** | Before 30 DAS | Critical period | Heavy yield loss |
| **Harvest** | 14-16% moisture | Maturity | Shattering if late |

### Helplines
- Kisan Call Centre: 1800-180-1551
- Crop insurance: contact your bank branch or the PMFBY portal
- Mandi prices: agmarknet.gov.in

### Troubleshooting
1. **Yellow leaves?** Older leaves first suggests nitrogen; young leaves first suggests iron.
2. **Poor growth?** Check the roots. Damaged roots mean a soil-borne problem; healthy roots mean nutrition.
3. **Pests?** Below threshold, keep monitoring. Above it, identify the pest and act.

"#,
    )
}

pub(crate) fn faq() -> String {
    String::from(
        r#"
## 11. ❓ Frequently Asked Questions

### Q1: What if I cannot afford every recommended input?

Spend first on good seed, then on balanced fertilizer, then on irrigation at flowering. Farmyard manure, compost and biofertilizers can replace part of the chemical fertilizer.

### Q2: Does this advice fit my area?

Check the numbers with your local KVK or agriculture office, try new practices on a small plot first, and keep notes so you build your own recommendations over time.

### Q3: How do I cope with unpredictable weather?

Use weather advisories on your phone, prefer varieties with wide adaptation, keep drains open and insure the crop.

### Q4: How can I get a better price?

Clean and grade the produce, sell through an FPO, compare mandi prices on eNAM and avoid distress sales right at harvest.

"#,
    )
}

pub(crate) fn expert_tips() -> String {
    String::from(
        r#"
## 12. 💡 Expert Tips

1. **Focus on the few operations that matter most**: Variety choice, sowing date, care at flowering and harvest timing decide most of the yield.
2. **Walk the field daily**: Thirty minutes of observation catches problems while they are still cheap to fix.
3. **Scout at the right hour**: Many pests are most active in the evening, while beneficial insects are easiest to see in the morning.
4. **Track prices**: Three years of price records reveal the seasonal pattern for your crop and mandi.

### Emerging Technology
- **Drone spraying** services reduce chemical and water use for plant protection.
- **Soil moisture sensors** let you irrigate only when the crop needs it.
- **Photo-based diagnosis** apps identify many diseases from a single leaf picture.

---

Farming is both science and craft. Use this guide as a starting point, test what fits your land, and share what works with your neighbours.

🌾 **Happy farming and a bountiful harvest!** 🌾

"#,
    )
}

/// Short general guidance appended to an unusual-combination advisory.
pub(crate) fn basic_guidance(crop: &str) -> String {
    format!(
        r#"
## 🌾 Basic Agricultural Guidance

If you still plan to grow {crop}, or are choosing a replacement, these principles apply everywhere:

### General Crop Management
1. **Soil health**: Start with a soil test and build organic matter.
2. **Water management**: Match the crop to the water you can reliably supply.
3. **Integrated pest management**: Combine resistant varieties, field hygiene and need-based sprays.
4. **Market planning**: Grow what local buyers want and check prices before sowing.
5. **Climate fit**: Pick varieties bred for your region.

### Alternative Approaches
- Protected cultivation can make a difficult crop possible on a small scale.
- Contract farming with an assured buyer reduces the risk of trying a new crop.

For crops better suited to your area, talk to your local Krishi Vigyan Kendra.

"#
    )
}

pub(crate) fn capitalize(s: &str) -> String {
    crate::location::capitalize(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_crop_profile_lookup() {
        assert_eq!(crop_profile("Wheat").unwrap().crop, "wheat");
        assert!(crop_profile("Farming Practices").is_none());
    }

    #[test]
    fn test_symptom_diagnosis_yellow_leaves() {
        let text = symptom_diagnosis("My wheat crop has yellow leaves", "wheat").unwrap();
        assert!(text.contains("Nitrogen Deficiency"));
        assert!(text.contains("urea"));
        assert!(symptom_diagnosis("when to sow wheat", "wheat").is_none());
    }

    #[test]
    fn test_knowledge_insights() {
        assert!(knowledge_insights(&[]).is_empty());
        let rag = RagResult {
            similarity_score: 0.72,
            category: Some(Category::PestControl),
            crop: "general".into(),
            problem: "bollworm".into(),
            solution: "Install pheromone traps.".into(),
            original_id: Some("cotton_bollworm".into()),
        };
        let text = knowledge_insights(&[rag]);
        assert!(text.contains("pest control, match 72%"));
        assert!(text.contains("Install pheromone traps."));
    }

    #[test]
    fn test_fundamentals_includes_profile_table() {
        let text = fundamentals("Rice", crop_profile("rice"));
        assert!(text.contains("Rice at a Glance"));
        assert!(text.contains("Brown planthopper"));
        assert!(!fundamentals("Soil", None).contains("at a Glance"));
    }
}
