// Scripted end-to-end sessions over in-memory I/O.

use std::io::Cursor;

use console_calc_config::AppConfig;
use console_calc_repl::text::{help_text, BANNER, USAGE};
use console_calc_repl::Session;

fn quiet_config() -> AppConfig {
    AppConfig {
        prompt: String::from("> "),
        show_banner: false,
        show_timestamps: false,
        ..AppConfig::default()
    }
}

fn run_script(config: AppConfig, script: &str) -> (String, f64) {
    let mut session = Session::new(config, Cursor::new(script.as_bytes().to_vec()), Vec::new());
    session.run().unwrap();
    let value = session.history().value();
    let out = String::from_utf8(session.into_output()).unwrap();
    (out, value)
}

/// Strips prompts so assertions only see responses.
fn responses(out: &str) -> Vec<String> {
    out.lines()
        .map(|l| l.trim_start_matches("> ").to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

#[test]
fn test_undo_redo_scenario() {
    let script = "+ 5\n* 3\nundo\nundo\nredo\n- 2\nredo\nval\nexit\n";
    let (out, value) = run_script(quiet_config(), script);

    assert_eq!(value, 3.0);
    assert_eq!(
        responses(&out),
        vec![
            "OK. Value = 5",
            "OK. Value = 15",
            "Undid Mul 3. Value = 5",
            "Undid Add 5. Value = 0",
            "Redid Add 5. Value = 5",
            "OK. Value = 3",
            "Nothing to redo.",
            "Value = 3",
            "Bye!",
        ]
    );
}

#[test]
fn test_history_listing() {
    let script = "add 1\nmul 4\nclear\nhist\nexit\n";
    let (out, _) = run_script(quiet_config(), script);

    let expected = "History (most recent first):\n- Clear\n- Mul 4\n- Add 1\n";
    assert!(out.contains(expected), "output was:\n{out}");
}

#[test]
fn test_empty_history_and_nothing_to_undo() {
    let (out, value) = run_script(quiet_config(), "hist\nundo\nredo\nquit\n");
    assert_eq!(value, 0.0);
    assert_eq!(
        responses(&out),
        vec!["(history empty)", "Nothing to undo.", "Nothing to redo.", "Bye!"]
    );
}

#[test]
fn test_errors_do_not_end_session() {
    let script = "+ 10\n/ 0\nsub\nmul two\nnope\nval\nexit\n";
    let (out, value) = run_script(quiet_config(), script);

    assert_eq!(value, 10.0);
    let lines = responses(&out);
    assert_eq!(lines[1], "Error: division by zero");
    assert_eq!(lines[2], "Error: missing operand");
    assert_eq!(lines[3], USAGE);
    assert_eq!(lines[4], "Error: invalid number 'two'");
    assert_eq!(lines[6], "Unknown command 'nope'. Type 'help'.");
    assert_eq!(lines[7], "Value = 10");
}

#[test]
fn test_end_of_input_ends_session() {
    let (out, value) = run_script(quiet_config(), "+ 2\n+ 3");
    assert_eq!(value, 5.0);
    assert!(out.ends_with("> \nBye!\n"));
}

#[test]
fn test_clear_then_undo_restores_value() {
    let (out, value) = run_script(quiet_config(), "+ 0.1\n+ 0.2\nclear\nundo\nexit\n");
    assert_eq!(value, 0.1 + 0.2);
    assert!(out.contains("Cleared. Value = 0"));
}

#[test]
fn test_banner_and_help() {
    let config = AppConfig {
        show_banner: true,
        ..quiet_config()
    };
    let (out, _) = run_script(config, "help\nexit\n");
    assert!(out.starts_with(BANNER));
    assert!(out.contains(help_text()));
}

#[test]
fn test_custom_prompt() {
    let config = AppConfig {
        prompt: String::from("calc$ "),
        ..quiet_config()
    };
    let (out, _) = run_script(config, "exit\n");
    assert_eq!(out, "calc$ Bye!\n");
}

#[test]
fn test_history_display_cap_and_timestamps() {
    let config = AppConfig {
        show_timestamps: true,
        timestamp_format: String::from("%Y"),
        max_history_display: 1,
        ..quiet_config()
    };
    let (out, _) = run_script(config, "+ 1\n+ 2\nhist\nexit\n");
    let year = rendered_year(&out);
    assert!(out.contains(&format!("- Add 2 [{year}]\n... (1 older)\n")));
}

// Pulls the rendered year back out of the log line instead of calling the
// clock again, so the test can't straddle a year boundary.
fn rendered_year(out: &str) -> String {
    let start = out.find("- Add 2 [").expect("entry") + "- Add 2 [".len();
    out[start..start + 4].to_string()
}
