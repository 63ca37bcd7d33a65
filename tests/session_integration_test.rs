//! End-to-end tests for the session controller: command parsing, edit
//! validation, recompute/render cycling and saving.

use approx::assert_abs_diff_eq;
use ohmlab::applet::{self, KvlApplet, Outcome, Phase, QuantitiesApplet, Session, SignalApplet};
use ohmlab::error::OhmlabError;
use ohmlab::ir::Command;
use ohmlab::parser::parse_command;
use ohmlab::stats::Stats;
use std::io::Cursor;

fn set(key: &str, value: &str) -> Command {
    Command::Set {
        key: key.to_string(),
        value: value.to_string(),
    }
}

/// Run a scripted session and return (stdout, messages).
fn script<A: applet::Applet>(session: &mut Session<A>, lines: &str, stats: Option<&mut Stats>) -> (String, String) {
    let mut input = Cursor::new(lines.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut messages = Vec::new();
    applet::run(session, &mut input, &mut out, &mut messages, stats).expect("session failed");
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(messages).unwrap(),
    )
}

// ── Controller ────────────────────────────────────────────────────

#[test]
fn test_edit_recomputes_and_renders() {
    let mut session = Session::new(KvlApplet::default(), std::env::temp_dir());
    let before = session.figure().clone();
    let outcome = session.handle(&set("vs", "24"), None).unwrap();
    assert_eq!(outcome, Outcome::Rendered);
    assert_eq!(session.phase(), Phase::Idle);
    assert_abs_diff_eq!(session.output().current, 24.0 / 450.0, epsilon = 1e-12);
    assert_ne!(session.figure(), &before);
}

#[test]
fn test_rejected_edit_leaves_outputs() {
    let mut session = Session::new(KvlApplet::default(), std::env::temp_dir());
    let output = session.output().clone();
    let figure = session.figure().clone();

    let err = session.handle(&set("r2", "9000"), None).unwrap_err();
    assert!(matches!(err, OhmlabError::Range { .. }));
    let err = session.handle(&set("r2", "ten"), None).unwrap_err();
    assert!(matches!(err, OhmlabError::Parse(_)));
    let err = session.handle(&set("r9", "10"), None).unwrap_err();
    assert!(matches!(err, OhmlabError::UnknownKey(_)));

    assert_eq!(session.output(), &output);
    assert_eq!(session.figure(), &figure);
}

#[test]
fn test_reset_restores_defaults() {
    let mut session = Session::new(SignalApplet::default(), std::env::temp_dir());
    session.handle(&set("x1", "1 1 1 1"), None).unwrap();
    assert_eq!(session.output().n.len(), 4);
    session.handle(&Command::Reset, None).unwrap();
    assert_eq!(session.output().add, vec![6.0, 10.0, 9.0]);
}

#[test]
fn test_stats_counts() {
    let mut stats = Stats::new();
    let mut session = Session::new(KvlApplet::default(), std::env::temp_dir());
    session.handle(&set("r1", "120"), Some(&mut stats)).unwrap();
    let _ = session.handle(&set("r1", "5"), Some(&mut stats));
    session.handle(&Command::Show, Some(&mut stats)).unwrap();
    assert_eq!(stats.edits_applied, 1);
    assert_eq!(stats.edits_rejected, 1);
    assert_eq!(stats.recomputes, 2);
    assert_eq!(stats.renders, 2);
}

#[test]
fn test_save_writes_fixed_name() {
    let dir = std::env::temp_dir().join(format!("ohmlab-save-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let session = Session::new(KvlApplet::default(), &dir);
    let path = session.save().unwrap();
    assert_eq!(path, dir.join("kvl_series_loop.png"));
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    let (w, h) = (session.figure().image.width(), session.figure().image.height());
    let decoded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (w, h));
    assert_eq!(&decoded, &session.figure().image);
    // second save overwrites
    session.save().unwrap();
    std::fs::remove_dir_all(&dir).unwrap();
}

// ── Scripted sessions ─────────────────────────────────────────────

#[test]
fn test_scripted_quantities_session() {
    let mut session = Session::new(QuantitiesApplet::default(), std::env::temp_dir());
    let (out, messages) = script(
        &mut session,
        "# comment\n\nCharge = -3\nElectric Field E = 2, 1\ntoggle scalars\nCharge = 500\nbogus line\nquit\nCharge = 1\n",
        None,
    );
    let force = session.output();
    assert_abs_diff_eq!(force.force.x, -6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(force.force.y, -3.0, epsilon = 1e-12);
    assert!(!session.applet().state.scalar_table_visible);
    assert!(out.contains("Scalar table hidden"));
    assert_eq!(messages.lines().count(), 2);
    assert!(messages.contains("Range error"));
}

#[test]
fn test_scripted_help_lists_keys() {
    let mut session = Session::new(KvlApplet::default(), std::env::temp_dir());
    let (out, messages) = script(&mut session, "help\n", None);
    assert!(out.contains("Editable inputs"));
    assert!(out.contains("r3"));
    assert!(messages.is_empty());
}

#[test]
fn test_command_parsing() {
    assert_eq!(parse_command("  SAVE ").unwrap(), Some(Command::Save));
    assert_eq!(parse_command("exit").unwrap(), Some(Command::Quit));
    assert_eq!(parse_command("# x").unwrap(), None);
    assert_eq!(
        parse_command("Electric Field E = 3, -2").unwrap(),
        Some(set("Electric Field E", "3, -2"))
    );
    assert_eq!(
        parse_command("toggle vectors").unwrap(),
        Some(Command::Toggle("vectors".to_string()))
    );
    assert!(parse_command("= 5").is_err());
    assert!(parse_command("r1 220").is_err());
}
