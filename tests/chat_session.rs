//! End-to-end chat sessions over in-memory input and output.

use pocketkit::chat::{Responder, RuleSet, Session, SessionOptions};
use pocketkit::config::PocketConfig;
use std::io::{Cursor, Write};

const GREETING: &str = "ChatBot: Hello! Type something to start chatting (type 'quit' to exit)";
const FAREWELL: &str = "ChatBot: Goodbye! Thanks for chatting!";

fn run_session(session: &mut Session, input: &str) -> (Vec<String>, usize) {
    let mut out = Vec::new();
    let replies = session.run(Cursor::new(input), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    (text.lines().map(str::to_string).collect(), replies)
}

fn builtin_session(seed: u64) -> Session {
    Session::new(
        Responder::with_seed(RuleSet::builtin(), seed),
        SessionOptions::default(),
    )
}

/// The reply text of each `ChatBot:` line after the greeting.
fn bot_replies(lines: &[String]) -> Vec<&str> {
    lines
        .iter()
        .skip(1)
        .filter_map(|line| line.rsplit_once("ChatBot: ").map(|(_, reply)| reply))
        .collect()
}

#[test]
fn test_greeting_reply_and_quit() {
    let (lines, replies) = run_session(&mut builtin_session(1), "hello\nquit\n");

    assert_eq!(replies, 1);
    assert_eq!(lines.first().map(String::as_str), Some(GREETING));
    // The farewell follows the prompt the exit word was typed at.
    assert_eq!(lines.last().map(String::as_str), Some(format!("You: {FAREWELL}").as_str()));

    let bot = bot_replies(&lines);
    assert_eq!(bot.len(), 2);
    assert!(["Hello!", "Hi there!", "Hey!"].contains(&bot[0]));
}

#[test]
fn test_unknown_input_gets_fallback() {
    let (lines, replies) = run_session(&mut builtin_session(2), "asdkjasd\nexit\n");

    assert_eq!(replies, 1);
    let bot = bot_replies(&lines);
    assert!(
        [
            "I'm not sure I understand",
            "Could you rephrase that?",
            "Interesting tell me more",
        ]
        .contains(&bot[0])
    );
}

#[test]
fn test_exit_words_are_case_insensitive() {
    for word in ["QUIT", "Bye", "  exit  "] {
        let (lines, replies) = run_session(&mut builtin_session(3), &format!("{word}\nhello\n"));
        assert_eq!(replies, 0, "{word:?} should end the session");
        assert_eq!(lines.len(), 2);
    }
}

#[test]
fn test_goodbye_is_a_reply_not_an_exit() {
    let (lines, replies) = run_session(&mut builtin_session(4), "goodbye\nquit\n");

    assert_eq!(replies, 1);
    let bot = bot_replies(&lines);
    assert!(["Goodbye!", "See you later!", "Bye! Have a great day!"].contains(&bot[0]));
}

#[test]
fn test_end_of_input_says_farewell() {
    let (lines, replies) = run_session(&mut builtin_session(5), "how are you\n");

    assert_eq!(replies, 1);
    assert_eq!(lines.last().map(String::as_str), Some(FAREWELL));
}

#[test]
fn test_undecodable_line_does_not_end_session() {
    let mut out = Vec::new();
    let replies = builtin_session(6)
        .run(Cursor::new(&b"hello\n\xff\xfe\nhello\nquit\n"[..]), &mut out)
        .unwrap();
    assert_eq!(replies, 3);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    assert_eq!(bot_replies(&lines).len(), 4);
    assert!(text.ends_with(&format!("You: {FAREWELL}\n")));
}

#[test]
fn test_same_seed_same_transcript() {
    let input = "hi\nthanks\nweather?\nwhat is your name\nquit\n";
    let first = run_session(&mut builtin_session(42), input);
    let second = run_session(&mut builtin_session(42), input);
    assert_eq!(first, second);
}

#[test]
fn test_configured_session() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[chat]
bot_name = "Pip"
user_prompt = "Me"
greeting = "Ahoy"
farewell = "Fair winds"
exit_words = ["stop"]
fallback = ["Say again?"]

[[chat.rules]]
pattern = "hello"
replies = ["Ahoy there"]
"#
    )
    .unwrap();

    let config = PocketConfig::load(Some(file.path())).unwrap();
    let responder = Responder::with_seed(config.chat.rule_set().unwrap(), 0);
    let mut session = Session::new(responder, config.chat.session_options());

    let (lines, replies) = run_session(&mut session, "hello\nzzz\nquit\nstop\n");
    assert_eq!(replies, 3);
    assert_eq!(
        lines,
        vec![
            "Pip: Ahoy",
            "Me: Pip: Ahoy there",
            "Me: Pip: Say again?",
            "Me: Pip: Say again?",
            "Me: Pip: Fair winds",
        ]
    );
}
