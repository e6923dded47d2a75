//! Interactive console loop around a [`Responder`].

use super::Responder;
use std::io::{self, BufRead, Write};

/// Text and exit words for a chat session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    /// Prefix for the bot's lines.
    pub bot_name: String,
    /// Prompt shown before each user line.
    pub user_prompt: String,
    pub greeting: String,
    pub farewell: String,
    /// Lines (case-insensitive) that end the session instead of getting a reply.
    pub exit_words: Vec<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            bot_name: "ChatBot".to_string(),
            user_prompt: "You".to_string(),
            greeting: "Hello! Type something to start chatting (type 'quit' to exit)".to_string(),
            farewell: "Goodbye! Thanks for chatting!".to_string(),
            exit_words: vec!["exit".to_string(), "quit".to_string(), "bye".to_string()],
        }
    }
}

/// A chat session reading lines from any input and writing replies to any output.
#[derive(Debug)]
pub struct Session {
    responder: Responder,
    options: SessionOptions,
}

impl Session {
    pub fn new(responder: Responder, options: SessionOptions) -> Self {
        Self { responder, options }
    }

    /// Whether `line` is one of the exit words.
    pub fn is_exit(&self, line: &str) -> bool {
        let line = line.trim();
        self.options
            .exit_words
            .iter()
            .any(|word| word.eq_ignore_ascii_case(line))
    }

    /// Run until an exit word or end of input.
    ///
    /// Returns the number of replies given.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<usize> {
        tracing::info!("chat session started");
        self.say(&mut output, &self.options.greeting)?;

        let mut replies = 0;
        let mut buf = Vec::new();
        loop {
            write!(output, "{}: ", self.options.user_prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                // End of input: finish the prompt line before saying goodbye.
                writeln!(output)?;
                break;
            }

            // Undecodable bytes still get an answer.
            let line = String::from_utf8_lossy(&buf);
            if self.is_exit(&line) {
                break;
            }

            let reply = self.responder.respond(&line).to_string();
            self.say(&mut output, &reply)?;
            replies += 1;
        }

        self.say(&mut output, &self.options.farewell)?;
        tracing::info!(replies, "chat session ended");
        Ok(replies)
    }

    fn say<W: Write>(&self, output: &mut W, text: &str) -> io::Result<()> {
        writeln!(output, "{}: {}", self.options.bot_name, text)
    }
}
