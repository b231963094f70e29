//! Report labels in English (en) and French (fr)
//!
//! "auto" picks the language from the system locale.

mod en;
mod fr;

use std::collections::HashMap;

/// Label lookup for one language
pub struct I18n {
    current_lang: String,
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the specified language
    pub fn new(lang: &str) -> Self {
        let mut i18n = Self {
            current_lang: String::new(),
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language; unsupported codes fall back to English
    pub fn set_language(&mut self, lang: &str) {
        let lang = if lang == "auto" {
            detect_system_language()
        } else {
            supported_language(lang)
        };

        self.translations = match lang {
            "fr" => fr::get_translations(),
            _ => en::get_translations(),
        };
        self.current_lang = lang.to_string();

        log::debug!("Report language set to: {}", self.current_lang);
    }

    /// Label for `key`, or the key itself when untranslated
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    pub fn current_language(&self) -> &str {
        &self.current_lang
    }
}

fn detect_system_language() -> &'static str {
    let lang_env = std::env::var("LANG")
        .or_else(|_| std::env::var("LC_ALL"))
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .unwrap_or_else(|_| "en".to_string());

    supported_language(locale_language(&lang_env))
}

/// Language part of a locale string ("fr_FR.UTF-8" -> "fr")
fn locale_language(locale: &str) -> &str {
    locale
        .split(['_', '.', '-'])
        .next()
        .unwrap_or("en")
}

fn supported_language(code: &str) -> &'static str {
    match code.to_ascii_lowercase().as_str() {
        "fr" => "fr",
        _ => "en",
    }
}
