//! Picks a reply for a line of user text.

use super::RuleSet;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Replies to free text using an ordered [`RuleSet`].
#[derive(Debug)]
pub struct Responder {
    rules: RuleSet,
    rng: StdRng,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(RuleSet::builtin())
    }
}

impl Responder {
    /// Create a responder with an OS-seeded random source.
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a responder whose reply choices are reproducible.
    pub fn with_seed(rules: RuleSet, seed: u64) -> Self {
        Self {
            rules,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Lowercase and trim user input before matching.
    pub fn normalize(text: &str) -> String {
        text.trim().to_lowercase()
    }

    /// Pick a reply for `text`.
    ///
    /// The first rule matching the normalized text supplies the candidates;
    /// without a match the fallback replies are used, so there is always an
    /// answer.
    pub fn respond(&mut self, text: &str) -> &str {
        let normalized = Self::normalize(text);

        let replies = match self.rules.find(&normalized) {
            Some(rule) => {
                tracing::debug!(pattern = rule.pattern(), "rule matched");
                rule.replies()
            }
            None => {
                tracing::debug!("no rule matched, using fallback");
                self.rules.fallback()
            }
        };

        // Rule sets reject empty reply lists, so a choice always exists.
        replies
            .choose(&mut self.rng)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Rule;

    fn seeded() -> Responder {
        Responder::with_seed(RuleSet::builtin(), 7)
    }

    #[test]
    fn test_greeting() {
        let mut responder = seeded();
        for _ in 0..20 {
            let reply = responder.respond("hello");
            assert!(["Hello!", "Hi there!", "Hey!"].contains(&reply));
        }
    }

    #[test]
    fn test_input_is_normalized() {
        let mut responder = seeded();
        let reply = responder.respond("   HOW ARE YOU?  ").to_string();
        assert!(
            [
                "I'm just a program, but I'm functioning well!",
                "All systems go!"
            ]
            .contains(&reply.as_str())
        );
    }

    #[test]
    fn test_unmatched_input_uses_fallback() {
        let mut responder = seeded();
        let fallback = responder.rules().fallback().to_vec();
        for input in ["asdkjasd", "", "   "] {
            let reply = responder.respond(input).to_string();
            assert!(fallback.contains(&reply), "unexpected reply {reply:?}");
        }
    }

    #[test]
    fn test_thanks_variants() {
        let mut responder = seeded();
        let expected = ["You're welcome!", "My pleasure!", "Anytime!"];
        assert!(expected.contains(&responder.respond("thanks")));
        assert!(expected.contains(&responder.respond("Thank you!")));
    }

    #[test]
    fn test_same_seed_same_replies() {
        let mut a = seeded();
        let mut b = seeded();
        for input in ["hi", "bye", "weather?", "???", "your name"] {
            assert_eq!(a.respond(input).to_string(), b.respond(input).to_string());
        }
    }

    #[test]
    fn test_every_reply_reachable() {
        let mut responder = seeded();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(responder.respond("hey").to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_single_reply_rule() {
        let rule = Rule::new("ping", vec!["pong".to_string()]).unwrap();
        let rules = RuleSet::builtin().prepend(vec![rule]);
        let mut responder = Responder::with_seed(rules, 1);
        assert_eq!(responder.respond("PING"), "pong");
    }
}
