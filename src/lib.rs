//! pocketkit: a terminal keypad calculator and a pattern-matching chat responder.

pub mod calculator;
pub mod chat;
pub mod config;
pub mod ui;
