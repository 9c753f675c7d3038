use super::*;
use crate::admin::AdminCredentials;
use crate::storage::MemoryStorage;

fn words(line: &str) -> Vec<String> {
    split_args(line).unwrap()
}

// =============================================================================
// split_args
// =============================================================================

#[test]
fn split_plain_words() {
    assert_eq!(words("  vote   3 "), ["vote", "3"]);
    assert!(words("   ").is_empty());
}

#[test]
fn split_respects_quotes() {
    assert_eq!(
        words(r#"create --title "Dark mode" --content 'it''s late'"#),
        ["create", "--title", "Dark mode", "--content", "its late"]
    );
    assert_eq!(words(r#"search "" x"#), ["search", "", "x"]);
}

#[test]
fn split_handles_escapes() {
    assert_eq!(words(r#"a\ b "say \"hi\"" 'raw\n'"#), ["a b", "say \"hi\"", "raw\\n"]);
}

#[test]
fn split_rejects_unclosed_quote_and_dangling_escape() {
    assert_eq!(split_args("show \"1"), Err(SplitError::UnterminatedQuote('"')));
    assert_eq!(split_args("show 1\\"), Err(SplitError::TrailingEscape));
}

// =============================================================================
// parse_line
// =============================================================================

#[test]
fn parse_line_recognises_exit_and_blank() {
    assert_eq!(parse_line(""), ShellLine::Blank);
    assert_eq!(parse_line("exit"), ShellLine::Exit);
    assert_eq!(parse_line("  quit "), ShellLine::Exit);
}

#[test]
fn parse_line_builds_commands() {
    assert_eq!(parse_line("vote 3"), ShellLine::Run(Command::Vote { id: "3".into() }));
    assert_eq!(parse_line("logout"), ShellLine::Run(Command::Logout));
}

#[test]
fn parse_line_reports_bad_input() {
    let ShellLine::Message(msg) = parse_line("frobnicate") else {
        panic!("expected message");
    };
    assert!(msg.contains("frobnicate"));

    let ShellLine::Message(msg) = parse_line("show 'x") else {
        panic!("expected message");
    };
    assert_eq!(msg, "error: unterminated ' quote");
}

// =============================================================================
// run
// =============================================================================

async fn drive(script: &str, events: &[SessionEvent]) -> (String, Arc<Mutex<App<MemoryStorage>>>) {
    let app = Arc::new(Mutex::new(App::open(MemoryStorage::new(), AdminCredentials::default())));
    let (tx, rx) = mpsc::channel(8);
    for event in events {
        tx.send(*event).await.unwrap();
    }
    drop(tx);

    let mut out = Vec::new();
    run(Arc::clone(&app), script.as_bytes(), &mut out, rx).await.unwrap();
    (String::from_utf8(out).unwrap(), app)
}

#[tokio::test]
async fn run_continues_after_errors_and_stops_at_exit() {
    let script = "vote 3\n\nbogus\nshow nope\ndelete 1\nexit\nvote 3\n";
    let (out, app) = drive(script, &[]).await;

    assert!(out.contains("vote recorded; 3 now has 46 votes"));
    assert!(out.contains("error: feedback not found: nope"));
    assert!(out.contains("error: admin login required"));
    // Nothing after `exit` ran.
    assert_eq!(app.lock().await.board().get("3").map(|f| f.votes), Some(46));
}

#[tokio::test]
async fn run_ends_at_eof() {
    let (out, app) = drive("login --username admin --password admin123!\nresolve 3", &[]).await;
    assert!(out.contains("logged in; session expires"));
    assert!(out.contains("resolved 3"));
    assert!(!app.lock().await.board().get("3").unwrap().is_active());
}

#[tokio::test]
async fn run_prints_session_notices() {
    let (out, _app) = drive("whoami\n", &[SessionEvent::Expired]).await;
    assert!(out.contains(SessionEvent::Expired.message()));
}
