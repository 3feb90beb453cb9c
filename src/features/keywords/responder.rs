//! Keyword-driven answers to free-text questions
//!
//! A static decision table: the first rule whose keyword groups all match
//! the lowercased input wins. Each group is satisfied by any one of its
//! alternatives (Ukrainian stems first, English aliases after).
//!
//! Ukrainian stems match anywhere in the text so inflected forms still hit.
//! English aliases only match as whole words (optionally plural), so
//! "download" or "legal" do not trigger the load or flexion rules.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::features::rehab::phases::ACUTE_LAST_DAY;

pub const FLEXION_RESTRICTED_ANSWER: &str =
    "🔒 Наразі дозволено згинати до 30–40°, пасивно. Не більше без дозволу!";
pub const FLEXION_EXTENDED_ANSWER: &str = "✅ Можна обережно згинати до 90°, якщо немає болю.";
pub const ANTICOAGULANT_ANSWER: &str = "💊 Ксарелто слід приймати 1 таб/день до 28.07.2025.";
pub const LOAD_ANSWER: &str =
    "🚫 Осьове навантаження на ліву ногу заборонене до 1.5 місяця після операції.";
pub const CONTACT_ANSWER: &str = "📞 Зв’язок з реабілітологом: +380672727910";
pub const FALLBACK_ANSWER: &str =
    "❓ Не впевнений у відповіді. Надішли /status або конкретне питання (напр. «чи можна навантаження?»)";

/// What a matched rule answers with
#[derive(Debug, Clone, Copy)]
enum Answer {
    /// Depends on whether the acute phase is still running
    ByPhase {
        acute: &'static str,
        later: &'static str,
    },
    Fixed(&'static str),
}

impl Answer {
    fn resolve(self, day: i64) -> &'static str {
        match self {
            Answer::ByPhase { acute, later } => {
                if day <= ACUTE_LAST_DAY {
                    acute
                } else {
                    later
                }
            }
            Answer::Fixed(text) => text,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct KeywordRule {
    name: &'static str,
    /// Every group must match; a group matches if any alternative is present
    groups: &'static [&'static [&'static str]],
    answer: Answer,
}

impl KeywordRule {
    fn matches(&self, lowered: &str) -> bool {
        self.groups
            .iter()
            .all(|alternatives| alternatives.iter().any(|kw| keyword_present(lowered, kw)))
    }
}

/// Whole-word patterns for the ASCII aliases, compiled once
static ALIAS_PATTERNS: OnceLock<HashMap<&'static str, Regex>> = OnceLock::new();

fn alias_patterns() -> &'static HashMap<&'static str, Regex> {
    ALIAS_PATTERNS.get_or_init(|| {
        RULES
            .iter()
            .flat_map(|rule| rule.groups.iter())
            .flat_map(|alternatives| alternatives.iter())
            .filter(|kw| kw.is_ascii())
            .filter_map(|kw| {
                let pattern = format!(r"\b{}s?\b", regex::escape(kw));
                Regex::new(&pattern).ok().map(|re| (*kw, re))
            })
            .collect()
    })
}

fn keyword_present(lowered: &str, keyword: &str) -> bool {
    if keyword.is_ascii() {
        alias_patterns()
            .get(keyword)
            .is_some_and(|re| re.is_match(lowered))
    } else {
        lowered.contains(keyword)
    }
}

/// Rules in precedence order
const RULES: &[KeywordRule] = &[
    KeywordRule {
        name: "flexion",
        groups: &[&["згинати", "bend"], &["ногу", "leg"]],
        answer: Answer::ByPhase {
            acute: FLEXION_RESTRICTED_ANSWER,
            later: FLEXION_EXTENDED_ANSWER,
        },
    },
    KeywordRule {
        name: "anticoagulant",
        groups: &[&["ксарелто", "xarelto"]],
        answer: Answer::Fixed(ANTICOAGULANT_ANSWER),
    },
    KeywordRule {
        name: "load",
        groups: &[&["навантаження", "load", "weight"]],
        answer: Answer::Fixed(LOAD_ANSWER),
    },
    KeywordRule {
        name: "contact",
        groups: &[&["контакт", "contact"]],
        answer: Answer::Fixed(CONTACT_ANSWER),
    },
];

/// Name of the rule that would answer `text`, if any
pub fn matched_rule(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.name)
}

/// Answer a free-text question for the given day number
///
/// Total and deterministic: unmatched input gets [`FALLBACK_ANSWER`].
pub fn respond(text: &str, day: i64) -> &'static str {
    let lowered = text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.answer.resolve(day))
        .unwrap_or(FALLBACK_ANSWER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flexion_depends_on_phase() {
        assert_eq!(respond("can I bend my leg", 5), FLEXION_RESTRICTED_ANSWER);
        assert_eq!(respond("can I bend my leg", 14), FLEXION_RESTRICTED_ANSWER);
        assert_eq!(respond("can I bend my leg", 15), FLEXION_EXTENDED_ANSWER);
        assert_eq!(respond("can I bend my leg", 20), FLEXION_EXTENDED_ANSWER);
        assert_eq!(respond("Чи можна згинати ногу?", 3), FLEXION_RESTRICTED_ANSWER);
        assert!(FLEXION_EXTENDED_ANSWER.contains("90°"));
        assert!(FLEXION_RESTRICTED_ANSWER.contains("30–40°"));
    }

    #[test]
    fn test_flexion_before_surgery_is_restricted() {
        assert_eq!(respond("згинати ногу", -4), FLEXION_RESTRICTED_ANSWER);
    }

    #[test]
    fn test_flexion_needs_both_keywords() {
        assert_eq!(respond("можна згинати?", 5), FALLBACK_ANSWER);
        assert_eq!(respond("my leg hurts", 5), FALLBACK_ANSWER);
    }

    #[test]
    fn test_flexion_wins_over_anticoagulant() {
        let text = "чи можна згинати ногу після ксарелто";
        assert_eq!(matched_rule(text), Some("flexion"));
        assert_eq!(respond(text, 5), FLEXION_RESTRICTED_ANSWER);
        assert_eq!(respond(text, 25), FLEXION_EXTENDED_ANSWER);
    }

    #[test]
    fn test_rule_order_for_remaining_rules() {
        assert_eq!(respond("ксарелто і навантаження", 5), ANTICOAGULANT_ANSWER);
        assert_eq!(respond("навантаження, контакт", 5), LOAD_ANSWER);
        assert_eq!(respond("ℹ️ Контакт з реабілітологом", 5), CONTACT_ANSWER);
    }

    #[test]
    fn test_case_insensitive() {
        for day in [-1, 5, 20, 40] {
            assert_eq!(respond("КСАРЕЛТО", day), respond("ксарелто", day));
            assert_eq!(respond("КСАРЕЛТО", day), ANTICOAGULANT_ANSWER);
            assert_eq!(respond("CAN I BEND MY LEG", day), respond("can i bend my leg", day));
        }
    }

    #[test]
    fn test_deterministic() {
        let inputs = ["", "hello", "xarelto?", "weight bearing", "Контакт"];
        for text in inputs {
            for day in [0, 10, 30] {
                assert_eq!(respond(text, day), respond(text, day));
            }
        }
    }

    #[test]
    fn test_english_aliases_match_whole_words_only() {
        for text in [
            "how do I download the app",
            "upload failed",
            "my college has a legal bending rule",
            "this is a weighty matter",
            "contactless payment",
        ] {
            assert_eq!(respond(text, 5), FALLBACK_ANSWER, "{text}");
            assert_eq!(matched_rule(text), None, "{text}");
        }

        assert_eq!(respond("how much weight can I put on it", 5), LOAD_ANSWER);
        assert_eq!(respond("Can I bend my legs?", 20), FLEXION_EXTENDED_ANSWER);
        assert_eq!(respond("contact please", 5), CONTACT_ANSWER);
    }

    #[test]
    fn test_ukrainian_stems_match_inside_words() {
        assert_eq!(respond("яке навантаження дозволене?", 5), LOAD_ANSWER);
        assert_eq!(respond("ксарелтовий курс", 5), ANTICOAGULANT_ANSWER);
    }

    #[test]
    fn test_fallback_exact() {
        assert_eq!(respond("what's the weather", 7), FALLBACK_ANSWER);
        assert_eq!(respond("", 7), FALLBACK_ANSWER);
        assert_eq!(matched_rule("what's the weather"), None);
    }
}
