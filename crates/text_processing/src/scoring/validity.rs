//! "Is this a real complaint?"
//!
//! Validity accumulates independent weak evidence. Gibberish and spam
//! signals subtract, shop/product vocabulary and well-formed sentences add.

use complaint_triage_core::{
    Confidence, Features, Language, ValidityResult, SENTENCE_TERMINATORS,
};

use super::{clamp_score, keyword_hits, ScoringEngine};
use crate::language::tokenize;

const LATIN_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

impl ScoringEngine {
    pub fn score_validity(&self, text: &str, features: &Features) -> ValidityResult {
        let lower = text.to_lowercase();
        let tokens = tokenize(text);
        let mut score = 1.0;
        let mut reasons = Vec::new();

        if features.repeated_char_ratio > 0.15 {
            score -= 0.6;
            reasons.push("Excessive repeated characters".to_string());
        }

        if features.consonant_clusters > 2 {
            score -= 0.5;
            reasons.push(format!(
                "Unpronounceable consonant clusters ({})",
                features.consonant_clusters
            ));
        }

        if features.space_ratio < 0.08 && features.char_count > 20 {
            score -= 0.5;
            reasons.push("Too few spaces for natural text".to_string());
        }

        if features.avg_word_length < 2.5 || features.avg_word_length > 15.0 {
            score -= 0.4;
            reasons.push(format!(
                "Unusual average word length ({:.1})",
                features.avg_word_length
            ));
        }

        if features.is_latin_only() && features.char_count > 10 && latin_vowel_fraction(text) < 0.2
        {
            score -= 0.5;
            reasons.push("Too few vowels for English or Banglish".to_string());
        }

        if features.has_bengali && features.vowel_ratio < 0.05 {
            score -= 0.4;
            reasons.push("Too few Bengali vowel signs".to_string());
        }

        if features.language == Language::Unknown && features.word_count > 3 {
            score -= 0.4;
            reasons.push("Language could not be identified".to_string());
        }

        if features.language == Language::English
            && features.word_count > 4
            && !tokens.iter().any(|t| self.lexicon.is_stop_word(t))
        {
            score -= 0.25;
            reasons.push("No common English words".to_string());
        }

        let vowelless = tokens.iter().filter(|t| is_vowelless_word(t)).count();
        if vowelless > 0 {
            score -= 0.2 * vowelless as f64;
            reasons.push(format!("Words without vowels ({})", vowelless));
        }

        let spam = keyword_hits(&lower, &self.lexicon.keywords().spam);
        if spam > 0 {
            score -= 0.3 * spam as f64;
            reasons.push(format!("Spam keywords detected ({})", spam));
        }

        if features.is_short {
            score -= 0.3;
            reasons.push("Text too short".to_string());
        }

        if features.exclamation_count > 5 {
            score -= 0.2;
            reasons.push("Excessive exclamation marks".to_string());
        }

        if features.capital_ratio > 0.6 && features.char_count > 20 {
            score -= 0.2;
            reasons.push("Mostly capital letters".to_string());
        }

        let context = keyword_hits(&lower, &self.lexicon.keywords().context);
        if context > 0 {
            score += (0.1 * context as f64).min(0.3);
            reasons.push(format!("Mentions shop or product context ({})", context));
        }

        if text.contains(SENTENCE_TERMINATORS) && features.word_count > 5 {
            score += 0.1;
            reasons.push("Well-formed sentences".to_string());
        }

        let score = clamp_score(score, 0.0, 1.0);

        ValidityResult {
            score,
            is_valid: self.config.is_valid(score),
            is_gibberish: self.config.is_gibberish(score),
            reasons,
            confidence: Confidence::from_score_distance(score),
        }
    }
}

/// Latin vowels over Latin letters, 1.0 when there are no Latin letters
fn latin_vowel_fraction(text: &str) -> f64 {
    let mut letters = 0usize;
    let mut vowels = 0usize;
    for c in text.chars().filter(char::is_ascii_alphabetic) {
        letters += 1;
        if LATIN_VOWELS.contains(&c.to_ascii_lowercase()) {
            vowels += 1;
        }
    }
    if letters == 0 {
        1.0
    } else {
        vowels as f64 / letters as f64
    }
}

/// A Latin word longer than two letters with no vowel at all
fn is_vowelless_word(token: &str) -> bool {
    token.len() > 2
        && token.chars().all(|c| c.is_ascii_alphabetic())
        && !token.contains(LATIN_VOWELS)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{engine, features};
    use super::*;

    fn validity(text: &str) -> ValidityResult {
        engine().score_validity(text, &features(text))
    }

    /// Features that trip no validity rule on their own
    fn clean_features() -> Features {
        Features {
            language: Language::Bengali,
            word_count: 5,
            char_count: 30,
            space_ratio: 0.2,
            avg_word_length: 5.0,
            ..Features::default()
        }
    }

    fn score_with(text: &str, features: Features) -> f64 {
        engine().score_validity(text, &features).score
    }

    #[test]
    fn test_real_complaints_are_valid() {
        let english = validity(
            "I bought rice from this shop yesterday and it was rotten. I want a refund.",
        );
        assert!(english.is_valid, "{:?}", english);
        assert!(!english.is_gibberish);

        let bengali = validity("এই দোকান ভুল দাম নিয়েছে। আমি ৫০০ টাকা বেশি দিয়েছি।");
        assert!(bengali.is_valid, "{:?}", bengali);

        let banglish = validity("Ami ei shop theke kharap product kinechi. Dam o beshi niche.");
        assert!(banglish.is_valid, "{:?}", banglish);
        assert_eq!(banglish.score, 1.0);
    }

    #[test]
    fn test_spam_is_invalid() {
        let result = validity("WIN A FREE PRIZE CLICK HERE NOW! অফার পুরস্কার লটারি");
        assert!(!result.is_valid);
        assert!(result.reasons.iter().any(|r| r.starts_with("Spam keywords")));
    }

    #[test]
    fn test_keyboard_mash_is_gibberish() {
        let result = validity("aaaa bbbb cccc dddd eeee ffff gggg");
        assert!(result.is_gibberish);
        assert!(!result.is_valid);
        assert_eq!(result.confidence, Confidence::High);

        let result = validity("rdghhf xhvv dgg dv cvc x xc f fv fv fg fv");
        assert!(result.is_gibberish);
    }

    #[test]
    fn test_empty_text_is_invalid() {
        let result = validity("");
        assert!(!result.is_valid);
        assert!((0.0..=1.0).contains(&result.score));
    }

    #[test]
    fn test_flags_follow_score() {
        for text in ["", "ok", "dokan kharap", "The rice was bad and the shop was rude."] {
            let r = validity(text);
            assert_eq!(r.is_valid, r.score >= 0.6);
            assert_eq!(r.is_gibberish, r.score < 0.4);
        }
    }

    #[test]
    fn test_clean_features_score_full() {
        let result = engine().score_validity("", &clean_features());
        assert_eq!(result.score, 1.0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_exclamation_threshold() {
        let at = Features {
            exclamation_count: 5,
            ..clean_features()
        };
        let over = Features {
            exclamation_count: 6,
            ..clean_features()
        };
        assert_eq!(score_with("", at), 1.0);
        assert_eq!(score_with("", over), 0.8);
    }

    #[test]
    fn test_capital_ratio_threshold() {
        let at = Features {
            capital_ratio: 0.6,
            ..clean_features()
        };
        let over = Features {
            capital_ratio: 0.61,
            ..clean_features()
        };
        let short = Features {
            capital_ratio: 0.9,
            char_count: 20,
            ..clean_features()
        };
        assert_eq!(score_with("", at), 1.0);
        assert_eq!(score_with("", over), 0.8);
        assert_eq!(score_with("", short), 1.0);
    }

    #[test]
    fn test_unknown_language_threshold() {
        let at = Features {
            language: Language::Unknown,
            word_count: 3,
            ..clean_features()
        };
        let over = Features {
            language: Language::Unknown,
            word_count: 4,
            ..clean_features()
        };
        assert_eq!(score_with("", at), 1.0);
        assert_eq!(score_with("", over), 0.6);
    }

    #[test]
    fn test_english_without_stop_words_threshold() {
        let at = Features {
            language: Language::English,
            word_count: 4,
            ..clean_features()
        };
        let over = Features {
            language: Language::English,
            word_count: 5,
            ..clean_features()
        };
        assert_eq!(score_with("", at), 1.0);
        assert_eq!(score_with("", over.clone()), 0.75);
        assert_eq!(score_with("the rice went off today", over), 1.0);
    }

    #[test]
    fn test_average_word_length_bounds() {
        for (avg, expected) in [(2.5, 1.0), (2.4, 0.6), (15.0, 1.0), (15.1, 0.6)] {
            let f = Features {
                avg_word_length: avg,
                ..clean_features()
            };
            assert_eq!(score_with("", f), expected, "avg_word_length {}", avg);
        }
    }

    #[test]
    fn test_bengali_vowel_sign_threshold() {
        let at = Features {
            has_bengali: true,
            vowel_ratio: 0.05,
            ..clean_features()
        };
        let under = Features {
            has_bengali: true,
            vowel_ratio: 0.04,
            ..clean_features()
        };
        let latin = Features {
            has_bengali: false,
            vowel_ratio: 0.0,
            ..clean_features()
        };
        assert_eq!(score_with("", at), 1.0);
        assert_eq!(score_with("", under), 0.6);
        assert_eq!(score_with("", latin), 1.0);
    }

    #[test]
    fn test_context_bonus_is_capped() {
        // short (-0.3) and shouting (-0.2) leave room to see the bonus
        let base = Features {
            is_short: true,
            exclamation_count: 6,
            ..clean_features()
        };
        let cases = [
            ("", 0.5),
            ("shop", 0.6),
            ("shop store", 0.7),
            ("shop store product", 0.8),
            ("shop store product seller", 0.8),
        ];
        for (text, expected) in cases {
            assert_eq!(score_with(text, base.clone()), expected, "{:?}", text);
        }
    }

    #[test]
    fn test_digits_only_text() {
        let result = validity("12 34 56 78 90");
        assert_eq!(result.score, 0.2);
        assert!(result.is_gibberish);
        assert!(result
            .reasons
            .iter()
            .any(|r| r == "Language could not be identified"));
        assert!(!result.reasons.iter().any(|r| r == "Text too short"));
    }

    #[test]
    fn test_vowel_helpers() {
        assert!(is_vowelless_word("xhvv"));
        assert!(!is_vowelless_word("dv"));
        assert!(!is_vowelless_word("rhythm"));
        assert!(!is_vowelless_word("দাম"));
        assert_eq!(latin_vowel_fraction("দাম"), 1.0);
        assert!((latin_vowel_fraction("abcd") - 0.25).abs() < 1e-9);
    }
}
