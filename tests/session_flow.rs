//! End-to-end terminal sessions.

use aether_terminal::session::Submission;
use aether_terminal::{CommandResult, Interpreter, Sender, Tab, TerminalConfig, TerminalSession};
use chrono::{DateTime, FixedOffset};

fn session() -> TerminalSession {
    let mut session = TerminalSession::default();
    session.open();
    session
}

fn new_year() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2025-01-01T00:00:00+00:00").unwrap()
}

#[test]
fn typical_session() {
    let mut session = session();
    assert_eq!(
        session.welcome(),
        "Welcome to Aether Terminal. Type 'help' for available commands."
    );

    session.submit("help");
    session.submit("cd");
    session.submit("open /assessments");

    let entries: Vec<_> = session.history().iter().collect();
    assert_eq!(entries.len(), 3);
    assert!(entries[0].is_system);
    assert!(entries[1].is_error);
    assert_eq!(
        entries[1].output.as_deref(),
        Some("cd: missing directory argument")
    );
    assert_eq!(
        entries[2].output.as_deref(),
        Some("Navigating to /assessments...")
    );
    assert_eq!(session.route(), "/assessments");
}

#[test]
fn chat_tab_routes_to_assistant() {
    let mut session = session();
    session.submit("chat");
    assert_eq!(session.active_tab(), Tab::Chat);

    let Some(Submission::Chat(reply)) = session.submit("tell me about transformers") else {
        panic!("expected a chat reply");
    };
    assert_eq!(reply.sender, Sender::Bot);
    assert!(reply.text.starts_with("Transformers are a powerful architecture"));

    let senders: Vec<_> = session.messages().iter().map(|m| m.sender).collect();
    assert_eq!(senders, vec![Sender::User, Sender::Bot]);
    // Chat text never reaches the interpreter.
    assert_eq!(session.history().len(), 1);
}

#[test]
fn back_to_terminal_tab() {
    let mut session = session();
    session.submit("chat");
    session.set_active_tab(Tab::Terminal);
    assert_eq!(
        session.submit("pwd"),
        Some(Submission::Command(CommandResult::system("/home/project")))
    );
}

#[test]
fn exit_then_reopen_keeps_history() {
    let mut session = session();
    session.submit("echo still here");
    session.submit("exit");
    assert!(!session.is_open());
    assert_eq!(session.submit("pwd"), None);

    session.open();
    assert_eq!(session.history().len(), 2);
    assert_eq!(
        session.history().get(0).and_then(|e| e.output.as_deref()),
        Some("still here")
    );
}

#[test]
fn date_uses_session_interpreter() {
    let mut session =
        TerminalSession::default().with_interpreter(Interpreter::default().with_clock(new_year));
    session.open();
    assert_eq!(
        session.submit("date"),
        Some(Submission::Command(CommandResult::system(
            "Wed Jan 01 2025 00:00:00 GMT+0000"
        )))
    );
}

#[test]
fn configured_session() {
    let config = TerminalConfig::from_toml_str(
        r#"
working_dir = "/home/learner"
listing = ["notebooks/", "README.md"]
welcome = "hi"
"#,
    )
    .unwrap();
    let mut session = TerminalSession::new(&config);
    session.open();

    assert_eq!(session.welcome(), "hi");
    assert_eq!(
        session.submit("pwd"),
        Some(Submission::Command(CommandResult::system("/home/learner")))
    );
    assert_eq!(
        session.submit("ls"),
        Some(Submission::Command(CommandResult::system(
            "notebooks/\nREADME.md"
        )))
    );
}
