//! Language regimes for complaint text
//!
//! Complaints arrive in Bengali script, in English, or in code-mixed
//! "Banglish" (romanized Bengali, often interleaved with English words).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Sentence-ending punctuation in any regime, including the Bengali dari
pub const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?', '।'];

/// Identified language regime of a text span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[serde(rename = "bn")]
    Bengali,
    #[serde(rename = "en")]
    English,
    /// Code-mixed Banglish
    #[serde(rename = "mixed")]
    Mixed,
    /// Nothing detectable (empty, digits or symbols only)
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl Language {
    /// Short code used in stored analysis records
    pub fn code(&self) -> &'static str {
        match self {
            Self::Bengali => "bn",
            Self::English => "en",
            Self::Mixed => "mixed",
            Self::Unknown => "unknown",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bengali => "Bengali (বাংলা)",
            Self::English => "English",
            Self::Mixed => "Banglish (Mixed)",
            Self::Unknown => "Unknown",
        }
    }

    /// Regimes an analyzer can report
    pub fn all() -> [Language; 4] {
        [Self::Bengali, Self::English, Self::Mixed, Self::Unknown]
    }

    /// Parse from string (case-insensitive)
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bn" | "ben" | "bengali" | "bangla" => Some(Self::Bengali),
            "en" | "eng" | "english" => Some(Self::English),
            "mixed" | "banglish" => Some(Self::Mixed),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| Error::UnknownLabel {
            kind: "language",
            value: s.to_string(),
        })
    }
}

/// Writing systems the identifier distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// Bengali Unicode block (U+0980..U+09FF)
    Bengali,
    /// ASCII letters
    Latin,
    Other,
}

impl Script {
    /// Map a character to its script
    pub fn of(c: char) -> Self {
        match c as u32 {
            0x0980..=0x09FF => Script::Bengali,
            _ if c.is_ascii_alphabetic() => Script::Latin,
            _ => Script::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Language::Bengali.code(), "bn");
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Mixed.code(), "mixed");
        assert_eq!(Language::Unknown.code(), "unknown");
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Mixed).unwrap();
        assert_eq!(json, "\"mixed\"");
        let lang: Language = serde_json::from_str("\"bn\"").unwrap();
        assert_eq!(lang, Language::Bengali);
    }

    #[test]
    fn test_from_str_loose() {
        assert_eq!(Language::from_str_loose("Bangla"), Some(Language::Bengali));
        assert_eq!(Language::from_str_loose(" EN "), Some(Language::English));
        assert_eq!(Language::from_str_loose("banglish"), Some(Language::Mixed));
        assert_eq!(Language::from_str_loose("hindi"), None);
        assert!("klingon".parse::<Language>().is_err());
    }

    #[test]
    fn test_all_regimes_and_names() {
        let codes: Vec<_> = Language::all().iter().map(Language::code).collect();
        assert_eq!(codes, ["bn", "en", "mixed", "unknown"]);
        assert_eq!(Language::Mixed.name(), "Banglish (Mixed)");
    }

    #[test]
    fn test_script_of() {
        assert_eq!(Script::of('অ'), Script::Bengali);
        assert_eq!(Script::of('০'), Script::Bengali);
        assert_eq!(Script::of('a'), Script::Latin);
        assert_eq!(Script::of('Z'), Script::Latin);
        assert_eq!(Script::of('é'), Script::Other);
        assert_eq!(Script::of('न'), Script::Other);
    }
}
