//! The ordered reply table.

use super::ChatError;
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

/// Built-in rules in priority order: earlier entries win.
const BUILTIN_RULES: &[(&str, &[&str])] = &[
    (r"(hi|hello|hey|hola)", &["Hello!", "Hi there!", "Hey!"]),
    (
        r"how are you",
        &[
            "I'm just a program, but I'm functioning well!",
            "All systems go!",
        ],
    ),
    (r"your name", &["I'm ChatBot 1.0", "You can call me CB!"]),
    (
        r"bye|goodbye",
        &["Goodbye!", "See you later!", "Bye! Have a great day!"],
    ),
    (
        r"weather",
        &[
            "I don't have weather access right now",
            "You might want to check a weather app!",
        ],
    ),
    (r"thank(s| you)", &["You're welcome!", "My pleasure!", "Anytime!"]),
];

/// Replies used when no rule matches.
const BUILTIN_FALLBACK: &[&str] = &[
    "I'm not sure I understand",
    "Could you rephrase that?",
    "Interesting tell me more",
];

lazy_static! {
    static ref BUILTIN: RuleSet = RuleSet {
        rules: BUILTIN_RULES
            .iter()
            .map(|(pattern, replies)| Rule {
                pattern: Regex::new(pattern).unwrap(),
                replies: owned_replies(replies),
            })
            .collect(),
        fallback: owned_replies(BUILTIN_FALLBACK),
    };
}

fn owned_replies(replies: &[&str]) -> Vec<String> {
    replies.iter().map(|r| r.to_string()).collect()
}

/// A pattern and the replies it can produce.
#[derive(Clone, Debug)]
pub struct Rule {
    pattern: Regex,
    replies: Vec<String>,
}

impl Rule {
    /// Compile a rule. The reply list must not be empty.
    ///
    /// Matching ignores case, since input is lowercased before lookup.
    pub fn new(pattern: &str, replies: Vec<String>) -> Result<Self, ChatError> {
        if replies.is_empty() {
            return Err(ChatError::NoReplies {
                pattern: pattern.to_string(),
            });
        }

        let compiled = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| ChatError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            pattern: compiled,
            replies,
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replies(&self) -> &[String] {
        &self.replies
    }

    /// Whether the pattern matches anywhere in `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Rules in priority order plus the catch-all replies.
#[derive(Clone, Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
    fallback: Vec<String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>, fallback: Vec<String>) -> Result<Self, ChatError> {
        if fallback.is_empty() {
            return Err(ChatError::EmptyFallback);
        }
        Ok(Self { rules, fallback })
    }

    /// The built-in greeting/small-talk table.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Put `rules` ahead of the existing ones, keeping their relative order.
    pub fn prepend(mut self, mut rules: Vec<Rule>) -> Self {
        rules.append(&mut self.rules);
        self.rules = rules;
        self
    }

    /// Replace the catch-all replies.
    pub fn with_fallback(mut self, fallback: Vec<String>) -> Result<Self, ChatError> {
        if fallback.is_empty() {
            return Err(ChatError::EmptyFallback);
        }
        self.fallback = fallback;
        Ok(self)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback(&self) -> &[String] {
        &self.fallback
    }

    /// The first rule matching `text`, scanning in priority order.
    pub fn find(&self, text: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order_preserved() {
        let rules = RuleSet::builtin();
        let patterns: Vec<&str> = rules.rules().iter().map(Rule::pattern).collect();
        assert_eq!(
            patterns,
            vec![
                "(hi|hello|hey|hola)",
                "how are you",
                "your name",
                "bye|goodbye",
                "weather",
                "thank(s| you)",
            ]
        );
        assert_eq!(rules.fallback().len(), 3);
    }

    #[test]
    fn test_first_match_wins() {
        let rules = RuleSet::builtin();
        // Matches both the greeting and "how are you"; the greeting is first.
        let rule = rules.find("hey, how are you").unwrap();
        assert_eq!(rule.pattern(), "(hi|hello|hey|hola)");

        let rule = rules.find("what is your name").unwrap();
        assert_eq!(rule.pattern(), "your name");
    }

    #[test]
    fn test_unmatched_uses_fallback() {
        let rules = RuleSet::builtin();
        assert!(rules.find("asdkjasd").is_none());
        assert!(rules.find("").is_none());
    }

    #[test]
    fn test_prepended_rules_take_priority() {
        let custom = Rule::new("hello", vec!["Howdy!".to_string()]).unwrap();
        let rules = RuleSet::builtin().prepend(vec![custom]);
        let rule = rules.find("hello there").unwrap();
        assert_eq!(rule.replies(), ["Howdy!".to_string()]);
        assert_eq!(rules.rules().len(), BUILTIN_RULES.len() + 1);
    }

    #[test]
    fn test_pattern_case_ignored() {
        let rule = Rule::new("Coffee", vec!["cup".to_string()]).unwrap();
        assert_eq!(rule.pattern(), "Coffee");
        assert!(rule.matches("coffee please"));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = Rule::new("(unclosed", vec!["x".to_string()]).unwrap_err();
        assert!(matches!(err, ChatError::InvalidPattern { .. }));
    }

    #[test]
    fn test_empty_replies_rejected() {
        let err = Rule::new("coffee", Vec::new()).unwrap_err();
        assert!(matches!(err, ChatError::NoReplies { .. }));
    }

    #[test]
    fn test_empty_fallback_rejected() {
        assert!(matches!(
            RuleSet::new(Vec::new(), Vec::new()),
            Err(ChatError::EmptyFallback)
        ));
        assert!(RuleSet::builtin().with_fallback(Vec::new()).is_err());
    }
}
