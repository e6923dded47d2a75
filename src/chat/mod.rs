//! Pattern-matching chat responder.
//!
//! Replies are picked from an ordered table of regular-expression rules:
//! the first rule matching the normalized input wins, and a catch-all set
//! of fallback replies answers everything else.

mod responder;
mod rules;
mod session;

pub use responder::Responder;
pub use rules::{Rule, RuleSet};
pub use session::{Session, SessionOptions};

use thiserror::Error;

/// Errors raised while building a rule set.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("rule {pattern:?} has no replies")]
    NoReplies { pattern: String },
    #[error("fallback reply list is empty")]
    EmptyFallback,
}
