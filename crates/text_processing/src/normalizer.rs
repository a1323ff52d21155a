//! Text normalization
//!
//! Every scorer reads normalizer output, never raw text. Steps run in a
//! fixed order so a second pass changes nothing:
//!
//! 1. emoji -> space-separated `:english_name:` tokens
//! 2. collapse runs of `!`, `?`, `.`
//! 3. strip URLs and email addresses
//! 4. collapse whitespace, trim
//! 5. Bengali digits -> ASCII, NFC for Bengali vowel signs
//!
//! URLs are stripped after punctuation collapses: `www!.shop` only becomes
//! `www.shop` in step 2 and must not survive to a second pass.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:https?://|www\.)\S+").unwrap());
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+").unwrap());
static PUNCT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[!?.]{2,}").unwrap());

/// Normalize complaint text. Total and idempotent.
pub fn normalize(text: &str) -> String {
    let text = demojize(text);
    let text = collapse_punctuation(&text);
    let text = URL_PATTERN.replace_all(&text, " ");
    let text = EMAIL_PATTERN.replace_all(&text, " ");
    let text = collapse_whitespace(&text);
    canonicalize_bengali(&text)
}

/// Replace every emoji grapheme with its English name, e.g. `:thumbs_up:`,
/// padded with spaces so each emoji is a word of its own
pub fn demojize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for grapheme in text.graphemes(true) {
        if grapheme.is_ascii() {
            out.push_str(grapheme);
            continue;
        }
        match emojis::get(grapheme) {
            Some(emoji) => {
                out.push_str(" :");
                out.push_str(&emoji_token(emoji.name()));
                out.push_str(": ");
            }
            None => out.push_str(grapheme),
        }
    }
    out
}

/// Normalized text without the `:name:` tokens left by [`demojize`]
pub fn without_emoji_names(cleaned: &str) -> String {
    cleaned
        .split_whitespace()
        .filter(|word| !is_emoji_name(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_emoji_name(word: &str) -> bool {
    word.len() > 2
        && word
            .strip_prefix(':')
            .and_then(|w| w.strip_suffix(':'))
            .is_some_and(|name| {
                !name.is_empty()
                    && name
                        .chars()
                        .all(|c| c == '_' || c.is_ascii_digit() || c.is_lowercase())
            })
}

/// "face with tears of joy" -> "face_with_tears_of_joy"
fn emoji_token(name: &str) -> String {
    let mut token = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() {
            token.extend(c.to_lowercase());
        } else if !token.ends_with('_') {
            token.push('_');
        }
    }
    token.trim_matches('_').to_string()
}

/// Each run of 2+ `!?.` keeps only its last character
fn collapse_punctuation(text: &str) -> String {
    PUNCT_RUN
        .replace_all(text, |caps: &regex::Captures| {
            caps[0].chars().last().map(String::from).unwrap_or_default()
        })
        .into_owned()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Bengali digits to ASCII, then NFC so each vowel sign has one encoding
fn canonicalize_bengali(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '০'..='৯' => char::from(b'0' + (c as u32 - '০' as u32) as u8),
            _ => c,
        })
        .nfc()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_urls_and_emails() {
        assert_eq!(
            normalize("see https://example.com/x?y=1 and www.shop.com now"),
            "see and now"
        );
        assert_eq!(normalize("mail me at someone@example.com please"), "mail me at please");
    }

    #[test]
    fn test_collapses_punctuation() {
        assert_eq!(normalize("Why?!?! So bad!!!"), "Why! So bad!");
        assert_eq!(normalize("wait..."), "wait.");
        assert_eq!(normalize("ok. fine"), "ok. fine");
    }

    #[test]
    fn test_collapsed_punctuation_cannot_form_urls() {
        assert_eq!(normalize("go www!.shop now"), "go now");
        assert_eq!(normalize(&normalize("go www!.shop now")), "go now");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  too \t many\n\nspaces  "), "too many spaces");
    }

    #[test]
    fn test_bengali_digits() {
        assert_eq!(normalize("৫০০ টাকা"), "500 টাকা");
        assert_eq!(normalize("১২৩৪৫৬৭৮৯০"), "1234567890");
    }

    #[test]
    fn test_vowel_sign_canonical_form() {
        // ো written as its two-part sequence composes to U+09CB
        let decomposed = "দ\u{09C7}\u{09BE}কান";
        assert_eq!(normalize(decomposed), "দ\u{09CB}কান");
    }

    #[test]
    fn test_demojize() {
        assert_eq!(normalize("bad 👎"), "bad :thumbs_down:");
        assert_eq!(normalize("bad👎👎"), "bad :thumbs_down: :thumbs_down:");
        assert_eq!(demojize("no emoji here"), "no emoji here");
        assert_eq!(demojize("বাংলা"), "বাংলা");
    }

    #[test]
    fn test_without_emoji_names() {
        let cleaned = normalize("খুব খারাপ পণ্য😡😡 ok");
        assert_eq!(without_emoji_names(&cleaned), normalize("খুব খারাপ পণ্য ok"));
        assert_eq!(without_emoji_names("a :: b :Name: c"), "a :: b :Name: c");
        assert_eq!(without_emoji_names(""), "");
    }

    #[test]
    fn test_idempotent_on_samples() {
        let samples = [
            "জরুরি!!! আমার বাচ্চা অসুস্থ... ৩ দিন",
            "WIN A FREE PRIZE CLICK HERE NOW!!! অফার",
            "visit http://spam.example now 😡😡",
            "",
            "   ",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }
}
