// Fixed {en, ru, az} display strings
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
    Az,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Az => "az",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "ru" => Some(Language::Ru),
            "az" => Some(Language::Az),
            _ => None,
        }
    }
}

/// A display string for every supported language.
///
/// Adding a language means extending every label in lockstep; there is no
/// fallback chain, so [`Label::get`] returns `None` for unknown codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Label {
    pub en: &'static str,
    pub ru: &'static str,
    pub az: &'static str,
}

impl Label {
    pub const fn new(en: &'static str, ru: &'static str, az: &'static str) -> Self {
        Self { en, ru, az }
    }

    pub fn text(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en,
            Language::Ru => self.ru,
            Language::Az => self.az,
        }
    }

    pub fn get(&self, code: &str) -> Option<&'static str> {
        Language::from_code(code).map(|lang| self.text(lang))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: Label = Label::new("Stable", "Стабильно", "Sabit");

    #[test]
    fn get_returns_known_codes() {
        assert_eq!(SAMPLE.get("en"), Some("Stable"));
        assert_eq!(SAMPLE.get("ru"), Some("Стабильно"));
        assert_eq!(SAMPLE.get("az"), Some("Sabit"));
    }

    #[test]
    fn code_round_trips() {
        for lang in [Language::En, Language::Ru, Language::Az] {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn get_has_no_fallback_for_unknown_codes() {
        assert_eq!(SAMPLE.get("de"), None);
        assert_eq!(SAMPLE.get("EN"), None);
    }

    #[test]
    fn serializes_as_code_map() {
        let json = serde_json::to_value(SAMPLE).unwrap();
        assert_eq!(json["en"], "Stable");
        assert_eq!(json["az"], "Sabit");
    }
}
