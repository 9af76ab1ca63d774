//! Country display name to ISO 3166-1 alpha-2 code lookup.

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

mod table;

/// Language the feed spells country names in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[default]
    #[serde(rename = "ru")]
    Russian,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Country {
    alpha2: &'static str,
    en: &'static str,
    ru: &'static str,
}

impl Country {
    fn name(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.en,
            Language::Russian => self.ru,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CountryResolver {
    language: Language,
}

impl CountryResolver {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Exact, case-sensitive match against the reference table.
    ///
    /// An unknown name is logged and yields `None`; callers store the
    /// location without a code rather than failing.
    pub fn alpha2(&self, country: &str) -> Option<&'static str> {
        debug!(country, language = %self.language, "Resolving country code");

        let code = table::COUNTRIES
            .iter()
            .find(|c| c.name(self.language) == country)
            .map(|c| c.alpha2);

        if code.is_none() {
            error!(country, language = %self.language, "Unknown country name");
        }
        code
    }
}
