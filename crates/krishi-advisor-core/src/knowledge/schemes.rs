//! Government support schemes that are always present in the knowledge base.

use crate::models::{Category, KnowledgeEntry};

const SCHEME_CONFIDENCE: f64 = 0.95;

fn scheme(id: &str, question: &str, keywords: &[&str], answer: &str) -> KnowledgeEntry {
    KnowledgeEntry {
        id: id.to_string(),
        question: question.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        answer: answer.to_string(),
        category: Category::GovernmentSchemes,
        confidence: SCHEME_CONFIDENCE,
        language: "english".to_string(),
        added_at: None,
    }
}

pub(crate) fn government_schemes() -> Vec<KnowledgeEntry> {
    vec![
        scheme(
            "pmkisan_info",
            "What is the PM-Kisan Samman Nidhi scheme?",
            &[
                "pm-kisan",
                "pm kisan",
                "pradhan mantri kisan",
                "samman nidhi",
                "direct cash transfer",
                "6000 rupees",
                "income support",
            ],
            "**PM-Kisan Samman Nidhi**\n\n\
             Income support of Rs 6,000 a year paid straight into the bank account of every \
             land-holding farmer family, in three instalments of Rs 2,000.\n\n\
             **Eligibility:** land records in the family's name; Aadhaar linked to the bank account.\n\n\
             **How to register:**\n\
             1. Visit pmkisan.gov.in or the nearest Common Service Centre\n\
             2. Enter Aadhaar, bank details and land records\n\
             3. Complete e-KYC (OTP or biometric)\n\
             4. Track instalments under Beneficiary Status",
        ),
        scheme(
            "fasal_bima_info",
            "How does PM Fasal Bima Yojana crop insurance work?",
            &[
                "fasal bima",
                "crop insurance",
                "pmfby",
                "crop loss",
                "insurance claim",
                "natural disaster",
            ],
            "**Pradhan Mantri Fasal Bima Yojana (PMFBY)**\n\n\
             Insurance against yield loss from drought, flood, hail, pests and disease, from \
             sowing through post-harvest drying in the field.\n\n\
             **Farmer premium:**\n\
             - Kharif food and oilseed crops: 2% of sum insured\n\
             - Rabi food and oilseed crops: 1.5%\n\
             - Annual commercial and horticultural crops: 5%\n\n\
             **Claims:** report localised loss within 72 hours on the Crop Insurance app, \
             helpline 14447 or through the bank branch.",
        ),
        scheme(
            "kcc_info",
            "How do I get a Kisan Credit Card loan?",
            &[
                "kisan credit card",
                "kcc",
                "credit card",
                "farm loan",
                "crop loan",
                "agricultural loan",
            ],
            "**Kisan Credit Card (KCC)**\n\n\
             Revolving short-term credit for cultivation, post-harvest and allied activities.\n\n\
             - Loans up to Rs 1.6 lakh without collateral\n\
             - 7% interest, falling to 4% with prompt repayment\n\
             - Repayment aligned to the harvest; card valid for 5 years\n\n\
             **Documents:** Aadhaar, land records or tenancy proof, passport photo. \
             Apply at any bank branch or through the PM-Kisan portal.",
        ),
        scheme(
            "msp_info",
            "What is the Minimum Support Price (MSP)?",
            &[
                "msp",
                "minimum support price",
                "procurement",
                "mandi price",
                "government purchase",
            ],
            "**Minimum Support Price (MSP)**\n\n\
             The price at which government agencies buy notified crops, announced before each \
             sowing season for 22 mandated crops.\n\n\
             - Cereals: paddy, wheat, maize, jowar, bajra, ragi\n\
             - Pulses: gram, tur, moong, urad, masur\n\
             - Oilseeds: groundnut, mustard, soybean, sunflower\n\
             - Commercial: cotton, jute, copra\n\n\
             Register on the state procurement portal before harvest and bring produce that \
             meets the fair average quality norms to the designated centre.",
        ),
    ]
}
