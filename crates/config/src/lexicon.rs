//! Lexicon Store
//!
//! Static word tables consumed by the language identifier, the Banglish
//! normalizer and every keyword scorer. Built once at startup, then shared
//! read-only. Optional files can extend the Banglish map or replace keyword
//! tables; any problem with those files is fatal.
//!
//! All entries are stored lower-cased and NFC-normalized, the same form the
//! text normalizer produces, so scorers can match with plain substring
//! search.

use complaint_triage_core::Category;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Errors raised while loading lexicon files
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Lexicon file not found at {path}: {message}")]
    FileNotFound { path: String, message: String },

    #[error("Failed to parse lexicon {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid entry in lexicon {path}: {message}")]
    InvalidEntry { path: String, message: String },
}

/// Where to find optional lexicon files, the `lexicon` settings section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconSource {
    /// Flat Banglish -> Bengali map, extends the built-in one
    #[serde(default)]
    pub banglish_path: Option<PathBuf>,
    /// Keyword tables, each present table replaces the built-in one
    #[serde(default)]
    pub keywords_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityKeywords {
    pub urgent: Vec<String>,
    /// Health and safety terms
    pub high: Vec<String>,
}

impl Default for PriorityKeywords {
    fn default() -> Self {
        Self {
            urgent: owned(URGENT),
            high: owned(HIGH_PRIORITY),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityKeywords {
    pub critical: Vec<String>,
    pub major: Vec<String>,
    pub moderate: Vec<String>,
}

impl Default for SeverityKeywords {
    fn default() -> Self {
        Self {
            critical: owned(CRITICAL),
            major: owned(MAJOR),
            moderate: owned(MODERATE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentKeywords {
    pub negative: Vec<String>,
    pub positive: Vec<String>,
}

impl Default for SentimentKeywords {
    fn default() -> Self {
        Self {
            negative: owned(NEGATIVE),
            positive: owned(POSITIVE),
        }
    }
}

/// Every keyword table. Tables missing from a keywords file keep their
/// built-in contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordTables {
    pub categories: BTreeMap<Category, Vec<String>>,
    pub priority: PriorityKeywords,
    pub severity: SeverityKeywords,
    pub health_impact: Vec<String>,
    pub financial_loss: Vec<String>,
    pub sentiment: SentimentKeywords,
    pub spam: Vec<String>,
    /// Shop/product/price vocabulary that marks a real complaint
    pub context: Vec<String>,
    pub stop_words: Vec<String>,
}

impl Default for KeywordTables {
    fn default() -> Self {
        let categories = CATEGORY_KEYWORDS
            .iter()
            .map(|(category, words)| (*category, owned(words)))
            .collect();

        Self {
            categories,
            priority: PriorityKeywords::default(),
            severity: SeverityKeywords::default(),
            health_impact: owned(HEALTH_IMPACT),
            financial_loss: owned(FINANCIAL_LOSS),
            sentiment: SentimentKeywords::default(),
            spam: owned(SPAM),
            context: owned(CONTEXT),
            stop_words: owned(STOP_WORDS),
        }
    }
}

impl KeywordTables {
    fn lists_mut(&mut self) -> Vec<(String, &mut Vec<String>)> {
        let mut lists: Vec<(String, &mut Vec<String>)> = self
            .categories
            .iter_mut()
            .map(|(category, words)| (format!("categories.{}", category.id()), words))
            .collect();
        lists.push(("priority.urgent".into(), &mut self.priority.urgent));
        lists.push(("priority.high".into(), &mut self.priority.high));
        lists.push(("severity.critical".into(), &mut self.severity.critical));
        lists.push(("severity.major".into(), &mut self.severity.major));
        lists.push(("severity.moderate".into(), &mut self.severity.moderate));
        lists.push(("health_impact".into(), &mut self.health_impact));
        lists.push(("financial_loss".into(), &mut self.financial_loss));
        lists.push(("sentiment.negative".into(), &mut self.sentiment.negative));
        lists.push(("sentiment.positive".into(), &mut self.sentiment.positive));
        lists.push(("spam".into(), &mut self.spam));
        lists.push(("context".into(), &mut self.context));
        lists.push(("stop_words".into(), &mut self.stop_words));
        lists
    }

    /// Rewrite every entry into canonical form
    fn canonicalize(&mut self) {
        for (_, words) in self.lists_mut() {
            for word in words.iter_mut() {
                *word = canonical(word);
            }
        }
    }

    fn reject_empty(&mut self, origin: &str) -> Result<(), LexiconError> {
        for (table, words) in self.lists_mut() {
            if words.iter().any(|w| w.is_empty()) {
                return Err(LexiconError::InvalidEntry {
                    path: origin.to_string(),
                    message: format!("empty keyword in table '{}'", table),
                });
            }
        }
        Ok(())
    }
}

/// Immutable word tables shared by the whole pipeline
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Ordered so fuzzy lookups break ties the same way every run
    banglish: BTreeMap<String, String>,
    keywords: KeywordTables,
    stop_words: HashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// Built-in tables only
    pub fn builtin() -> Self {
        let banglish = BANGLISH
            .iter()
            .map(|(latin, bengali)| (canonical(latin), bengali.nfc().collect::<String>()))
            .collect();

        let mut keywords = KeywordTables::default();
        keywords.canonicalize();

        Self::assemble(banglish, keywords)
    }

    /// Built-in tables extended by the configured files
    pub fn from_source(source: &LexiconSource) -> Result<Self, LexiconError> {
        let mut lexicon = Self::builtin();
        if let Some(path) = &source.banglish_path {
            lexicon = lexicon.with_banglish_file(path)?;
        }
        if let Some(path) = &source.keywords_path {
            lexicon = lexicon.with_keywords_file(path)?;
        }
        Ok(lexicon)
    }

    /// Merge a flat Banglish -> Bengali map over the current one
    pub fn with_banglish_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let entries: BTreeMap<String, String> = parse_file(path)?;

        for (key, value) in &entries {
            let key_canon = canonical(key);
            let value_canon: String = value.trim().nfc().collect();
            if key_canon.is_empty() || value_canon.is_empty() {
                return Err(LexiconError::InvalidEntry {
                    path: origin,
                    message: format!("empty key or value for entry '{}'", key),
                });
            }
            if key_canon.chars().any(char::is_whitespace) {
                return Err(LexiconError::InvalidEntry {
                    path: origin,
                    message: format!("key '{}' must be a single word", key),
                });
            }
            self.banglish.insert(key_canon, value_canon);
        }

        if entries.is_empty() {
            tracing::warn!(path = %origin, "Banglish lexicon file has no entries");
        }
        tracing::info!(
            path = %origin,
            loaded = entries.len(),
            total = self.banglish.len(),
            "Loaded Banglish lexicon"
        );
        Ok(self)
    }

    /// Replace keyword tables with those present in a YAML/JSON file
    pub fn with_keywords_file<P: AsRef<Path>>(self, path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let mut keywords: KeywordTables = parse_file(path)?;
        keywords.canonicalize();
        keywords.reject_empty(&origin)?;

        tracing::info!(
            path = %origin,
            categories = keywords.categories.len(),
            "Loaded keyword tables"
        );
        Ok(Self::assemble(self.banglish, keywords))
    }

    fn assemble(banglish: BTreeMap<String, String>, keywords: KeywordTables) -> Self {
        let stop_words = keywords.stop_words.iter().cloned().collect();
        Self {
            banglish,
            keywords,
            stop_words,
        }
    }

    /// Exact Banglish lookup, `word` must already be lower-cased
    pub fn translate_word(&self, word: &str) -> Option<&str> {
        self.banglish.get(word).map(String::as_str)
    }

    pub fn is_banglish_marker(&self, word: &str) -> bool {
        self.banglish.contains_key(word)
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Banglish map entries in key order
    pub fn banglish_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.banglish.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn banglish_len(&self) -> usize {
        self.banglish.len()
    }

    pub fn keywords(&self) -> &KeywordTables {
        &self.keywords
    }

    /// Keywords for one category, empty for `Other` or a table without it
    pub fn category_keywords(&self, category: Category) -> &[String] {
        self.keywords
            .categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Lower-case, trim and NFC-normalize a lexicon entry
pub fn canonical(word: &str) -> String {
    word.trim().to_lowercase().nfc().collect()
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn parse_file<T: DeserializeOwned>(path: &Path) -> Result<T, LexiconError> {
    let origin = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| LexiconError::FileNotFound {
        path: origin.clone(),
        message: e.to_string(),
    })?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        serde_json::from_str(&content).map_err(|e| LexiconError::ParseError {
            path: origin,
            message: e.to_string(),
        })
    } else {
        serde_yaml::from_str(&content).map_err(|e| LexiconError::ParseError {
            path: origin,
            message: e.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Built-in tables
// ---------------------------------------------------------------------------

const BANGLISH: &[(&str, &str)] = &[
    // pronouns and determiners
    ("ami", "আমি"),
    ("amar", "আমার"),
    ("amake", "আমাকে"),
    ("amra", "আমরা"),
    ("amader", "আমাদের"),
    ("tumi", "তুমি"),
    ("tomar", "তোমার"),
    ("apni", "আপনি"),
    ("apnar", "আপনার"),
    ("apnara", "আপনারা"),
    ("se", "সে"),
    ("tar", "তার"),
    ("tara", "তারা"),
    ("tader", "তাদের"),
    ("ei", "এই"),
    ("oi", "ওই"),
    ("eta", "এটা"),
    ("ota", "ওটা"),
    ("eita", "এইটা"),
    ("sei", "সেই"),
    ("ekhane", "এখানে"),
    ("okhane", "ওখানে"),
    ("kothay", "কোথায়"),
    ("ki", "কি"),
    ("keno", "কেন"),
    ("kobe", "কবে"),
    ("kivabe", "কিভাবে"),
    ("koto", "কত"),
    ("kew", "কেউ"),
    ("kichu", "কিছু"),
    ("sob", "সব"),
    ("shob", "সব"),
    // quantifiers and connectives
    ("onek", "অনেক"),
    ("khub", "খুব"),
    ("beshi", "বেশি"),
    ("besi", "বেশি"),
    ("kom", "কম"),
    ("ar", "আর"),
    ("o", "ও"),
    ("ebong", "এবং"),
    ("kintu", "কিন্তু"),
    ("jodi", "যদি"),
    ("tai", "তাই"),
    ("tobe", "তবে"),
    ("na", "না"),
    ("nai", "নাই"),
    ("nei", "নেই"),
    ("theke", "থেকে"),
    ("kache", "কাছে"),
    ("jonno", "জন্য"),
    ("diye", "দিয়ে"),
    // verbs
    ("hoy", "হয়"),
    ("hoyeche", "হয়েছে"),
    ("hoise", "হইছে"),
    ("hobe", "হবে"),
    ("chilo", "ছিল"),
    ("ache", "আছে"),
    ("achhe", "আছে"),
    ("dite", "দিতে"),
    ("dilo", "দিলো"),
    ("diyeche", "দিয়েছে"),
    ("dicche", "দিচ্ছে"),
    ("niche", "নিয়েছে"),
    ("nilo", "নিলো"),
    ("nite", "নিতে"),
    ("niyeche", "নিয়েছে"),
    ("kinechi", "কিনেছি"),
    ("kinlam", "কিনলাম"),
    ("kinsi", "কিনছি"),
    ("kini", "কিনি"),
    ("kena", "কেনা"),
    ("kinte", "কিনতে"),
    ("bikri", "বিক্রি"),
    ("kheye", "খেয়ে"),
    ("khete", "খেতে"),
    ("kheyechi", "খেয়েছি"),
    ("chai", "চাই"),
    ("korbo", "করবো"),
    ("korte", "করতে"),
    ("kore", "করে"),
    ("korse", "করছে"),
    ("koreche", "করেছে"),
    ("korlo", "করলো"),
    ("korun", "করুন"),
    ("bolchi", "বলছি"),
    ("bollo", "বললো"),
    ("dekhun", "দেখুন"),
    ("dekhlam", "দেখলাম"),
    ("pelam", "পেলাম"),
    ("paini", "পাইনি"),
    ("hocche", "হচ্ছে"),
    ("lagbe", "লাগবে"),
    ("thokaise", "ঠকাইছে"),
    ("thokiyeche", "ঠকিয়েছে"),
    // shop and product vocabulary
    ("dokan", "দোকান"),
    ("dokane", "দোকানে"),
    ("dokaner", "দোকানের"),
    ("dokandar", "দোকানদার"),
    ("shop", "দোকান"),
    ("shopkeeper", "দোকানদার"),
    ("product", "পণ্য"),
    ("ponno", "পণ্য"),
    ("jinis", "জিনিস"),
    ("jinish", "জিনিস"),
    ("dam", "দাম"),
    ("daam", "দাম"),
    ("taka", "টাকা"),
    ("poisa", "পয়সা"),
    ("ferot", "ফেরত"),
    ("ojon", "ওজন"),
    ("wojon", "ওজন"),
    ("poriman", "পরিমাণ"),
    ("packet", "প্যাকেট"),
    ("meyad", "মেয়াদ"),
    ("mayad", "মেয়াদ"),
    ("khabar", "খাবার"),
    ("chal", "চাল"),
    ("tel", "তেল"),
    ("dudh", "দুধ"),
    ("mach", "মাছ"),
    ("mangsho", "মাংস"),
    ("murgi", "মুরগি"),
    ("chini", "চিনি"),
    ("lobon", "লবণ"),
    ("ata", "আটা"),
    ("pani", "পানি"),
    ("service", "সেবা"),
    ("sheba", "সেবা"),
    ("seba", "সেবা"),
    ("complaint", "অভিযোগ"),
    ("obhijog", "অভিযোগ"),
    ("ovijog", "অভিযোগ"),
    // quality, health and fraud
    ("kharap", "খারাপ"),
    ("valo", "ভালো"),
    ("bhalo", "ভালো"),
    ("baje", "বাজে"),
    ("pocha", "পচা"),
    ("nosto", "নষ্ট"),
    ("noshto", "নষ্ট"),
    ("bhanga", "ভাঙা"),
    ("vanga", "ভাঙা"),
    ("osustho", "অসুস্থ"),
    ("asustho", "অসুস্থ"),
    ("osukh", "অসুখ"),
    ("pete", "পেটে"),
    ("betha", "ব্যথা"),
    ("bomi", "বমি"),
    ("daktar", "ডাক্তার"),
    ("haspatal", "হাসপাতাল"),
    ("baccha", "বাচ্চা"),
    ("bacca", "বাচ্চা"),
    ("shishu", "শিশু"),
    ("protarona", "প্রতারণা"),
    ("thokano", "ঠকানো"),
    ("vejal", "ভেজাল"),
    ("bhejal", "ভেজাল"),
    ("nokol", "নকল"),
    ("bhul", "ভুল"),
    ("vul", "ভুল"),
    ("thik", "ঠিক"),
    // people and behaviour
    ("manush", "মানুষ"),
    ("lok", "লোক"),
    ("bhai", "ভাই"),
    ("vai", "ভাই"),
    ("malik", "মালিক"),
    ("kormochari", "কর্মচারী"),
    ("byabohar", "ব্যবহার"),
    ("bebohar", "ব্যবহার"),
    ("acoron", "আচরণ"),
    // time and urgency
    ("druto", "দ্রুত"),
    ("taratari", "তাড়াতাড়ি"),
    ("joruri", "জরুরি"),
    ("jaldi", "জলদি"),
    ("ekhoni", "এখনই"),
    ("aj", "আজ"),
    ("ajke", "আজকে"),
    ("gotokal", "গতকাল"),
    ("shomoy", "সময়"),
    ("somoy", "সময়"),
    // feelings
    ("dhonnobad", "ধন্যবাদ"),
    ("khushi", "খুশি"),
    ("kosto", "কষ্ট"),
    ("khoti", "ক্ষতি"),
    ("boro", "বড়"),
    ("choto", "ছোট"),
    ("notun", "নতুন"),
    ("purono", "পুরনো"),
];

const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::PriceIssues,
        &["দাম", "price", "মূল্য", "টাকা", "expensive", "costly", "overcharged"],
    ),
    (
        Category::QualityIssues,
        &["মান", "quality", "খারাপ", "bad", "নষ্ট", "damaged", "পচা", "rotten"],
    ),
    (
        Category::WeightQuantity,
        &["ওজন", "weight", "কম", "less", "পরিমাণ", "quantity"],
    ),
    (
        Category::ExpiredProducts,
        &["মেয়াদ", "expired", "expire", "তারিখ", "date"],
    ),
    (
        Category::HealthIssues,
        &["স্বাস্থ্য", "health", "অসুস্থ", "sick", "বিষক্রিয়া", "poison"],
    ),
    (
        Category::Packaging,
        &["প্যাকেট", "packet", "packaging", "বক্স", "box", "seal"],
    ),
    (
        Category::Service,
        &["service", "পরিষেবা", "ব্যবহার", "আচরণ", "behavior", "rude"],
    ),
    (
        Category::Fraud,
        &["প্রতারণা", "fraud", "ঠকানো", "cheat", "জাল", "fake"],
    ),
];

const URGENT: &[&str] = &[
    "জরুরি",
    "urgent",
    "জলদি",
    "তাড়াতাড়ি",
    "immediately",
    "এখনই",
    "দ্রুত",
    "emergency",
];

const HIGH_PRIORITY: &[&str] = &[
    "স্বাস্থ্য",
    "health",
    "বিষক্রিয়া",
    "poison",
    "মেয়াদ উত্তীর্ণ",
    "expired",
    "খাদ্য",
    "food",
    "ওষুধ",
    "medicine",
    "শিশু",
    "child",
    "বাচ্চা",
];

const CRITICAL: &[&str] = &[
    "বিষক্রিয়া",
    "poison",
    "হাসপাতাল",
    "hospital",
    "মৃত্যু",
    "death",
    "অসুস্থ",
    "sick",
    "গুরুতর",
    "serious",
    "বিপজ্জনক",
    "dangerous",
];

const MAJOR: &[&str] = &[
    "নষ্ট",
    "damaged",
    "পচা",
    "rotten",
    "মেয়াদোত্তীর্ণ",
    "expired",
    "প্রতারণা",
    "fraud",
    "ভেজাল",
    "adulterated",
    "নকল",
    "fake",
];

const MODERATE: &[&str] = &[
    "খারাপ",
    "bad",
    "ভুল",
    "wrong",
    "দেরি",
    "late",
    "বেশি দাম",
    "overpriced",
    "ওজন কম",
    "rude",
];

const HEALTH_IMPACT: &[&str] = &[
    "অসুস্থ",
    "sick",
    "বমি",
    "vomit",
    "ডায়রিয়া",
    "diarrhea",
    "পেট ব্যথা",
    "stomach",
    "হাসপাতাল",
    "hospital",
    "বিষক্রিয়া",
    "poisoning",
    "এলার্জি",
    "allergy",
];

const FINANCIAL_LOSS: &[&str] = &[
    "টাকা",
    "taka",
    "money",
    "ক্ষতি",
    "loss",
    "ফেরত",
    "refund",
    "overcharged",
];

const NEGATIVE: &[&str] = &[
    "খারাপ",
    "bad",
    "ভয়ানক",
    "terrible",
    "নষ্ট",
    "damaged",
    "রাগ",
    "angry",
    "ক্ষতি",
    "loss",
    "প্রতারণা",
    "fraud",
    "বাজে",
    "worst",
    "হতাশ",
    "disappointed",
    "kharap",
];

const POSITIVE: &[&str] = &[
    "ভালো",
    "good",
    "সন্তুষ্ট",
    "satisfied",
    "ধন্যবাদ",
    "thanks",
    "thank you",
    "great",
    "valo",
];

const SPAM: &[&str] = &[
    "পুরস্কার",
    "prize",
    "win",
    "free",
    "ফ্রি",
    "লটারি",
    "lottery",
    "click here",
    "এখানে ক্লিক",
    "offer",
    "অফার",
];

const CONTEXT: &[&str] = &[
    "দোকান",
    "shop",
    "store",
    "পণ্য",
    "product",
    "বিক্রেতা",
    "seller",
    "কিনেছি",
    "bought",
    "purchased",
    "দাম",
    "price",
    "পরিমাণ",
    "quantity",
    "ওজন",
    "weight",
    "dokan",
    "kinechi",
];

const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "you", "your", "he", "him", "his", "she",
    "her", "it", "its", "they", "them", "their", "what", "which", "who", "whom", "this", "that",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "can", "will", "just", "should", "now",
];
