use crate::models::Language;

/// Apology and referral text used when a response cannot be assembled.
/// Hindi has its own text; every other language falls back to English.
pub(crate) fn error_fallback(query: &str, language: Language) -> String {
    match language {
        Language::Hi => format!(
            r#"
# 🌾 कृषि सलाह सेवा

क्षमा करें, आपके प्रश्न का विस्तृत उत्तर तैयार करते समय समस्या आई: "{query}"

## 📞 अन्य सहायता

1. **कृषि विज्ञान केंद्र**: अपने नजदीकी केवीके से संपर्क करें
2. **राज्य कृषि विश्वविद्यालय**: अपने राज्य के विशेषज्ञों से सलाह लें
3. **किसान कॉल सेंटर**: 1800-180-1551 पर निःशुल्क कॉल करें

कृपया अपनी फसल, स्थान और समस्या के बारे में अधिक जानकारी के साथ फिर से पूछें।
"#
        ),
        _ => format!(
            r#"
# 🌾 Agricultural Advisory Service

Sorry, something went wrong while preparing a detailed answer to your question: "{query}"

## 📞 Other Places to Get Help

1. **Krishi Vigyan Kendra**: Contact your nearest KVK
2. **State Agricultural University**: Ask the experts in your state
3. **Kisan Call Centre**: Call 1800-180-1551 free of charge

## 🔄 Try Again

Rephrase your question with more detail, for example:
- Your state or district
- The crop you are growing
- The current season
- The exact problem you see in the field
"#
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_selection() {
        assert!(error_fallback("q", Language::En).contains("Agricultural Advisory Service"));
        assert!(error_fallback("q", Language::Hi).contains("कृषि सलाह सेवा"));
        assert!(error_fallback("q", Language::Pa).contains("Agricultural Advisory Service"));
        assert!(error_fallback("", Language::Ur).contains("\"\""));
    }
}
