//! Integration tests for the dayplan menus
//!
//! Each test drives the full application over a scripted input stream and
//! inspects the rendered output.

use dayplan_cli::{App, Console, ConsoleError};
use std::io::Cursor;

/// Run the app against a scripted stdin; returns the run result and
/// everything that was printed
fn run_script(script: &str) -> (anyhow::Result<()>, String) {
    run_script_with_seed(script, None)
}

fn run_script_with_seed(script: &str, seed: Option<&str>) -> (anyhow::Result<()>, String) {
    let mut output = Vec::new();
    let result = {
        let console = Console::new(Cursor::new(script.as_bytes().to_vec()), &mut output);
        let mut app = App::new(console, false);
        if let Some(content) = seed {
            app.preload(dayplan_config::parse_seed(content).unwrap());
        }
        app.run()
    };
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn add_event_across_midnight_reports_on_time() {
    // Add "Night shift" 23:00:00 -> 04:00:00, planned 5:00:00, then view
    // the full schedule and statistics
    let script = "\
1
1
Night shift
23 0 0
4 0 0
5 0 0

0
6
1

2

0
0
";
    let (result, output) = run_script(script);
    result.unwrap();

    assert!(output.contains("Event added!"));
    // Rollover: (04:00:00 - 23:00:00) + 24h = 05:00:00
    assert!(output.contains("Planned: 5:00:00 | Actual: 5:00:00"));
    assert!(output.contains("Difference: 0:00:00 (on time)"));
    assert!(output.contains("Events in schedule: 1"));
    // start + end + planned + adopted difference copy
    assert!(output.contains("Time values constructed: 4"));
}

#[test]
fn interval_between_events_wraps_midnight() {
    let script = "\
1
1
Evening
20 0 0
23 0 0
3 0 0

1
Breakfast
8 0 0
8 30 0
0 30 0

0
6
3
1
2

0
0
";
    let (result, output) = run_script(script);
    result.unwrap();

    // 23:00 today to 08:00 tomorrow
    assert!(output.contains("Interval: 9:00:00"));
}

#[test]
fn postfix_increment_returns_prior_state() {
    let script = "\
1
1
Demo
10 0 0
11 0 0
1 0 0

0
2
1
2

0
0
";
    let (result, output) = run_script(script);
    result.unwrap();

    assert!(output.contains("Returned (pre-increment) value: 10:00:00"));
    assert!(output.contains("Stored value now: 10:00:01"));
}

#[test]
fn division_by_zero_is_reported_not_applied() {
    let script = "\
1
1
Demo
1 0 0
2 0 0
1 0 0

0
3
1
4
0

0
0
";
    let (result, output) = run_script(script);
    result.unwrap();

    assert!(output.contains("Division by zero ignored; time unchanged."));
}

#[test]
fn malformed_menu_input_recovers() {
    let script = "\
abc

0
";
    let (result, output) = run_script(script);
    result.unwrap();

    assert!(output.contains("Invalid input! Enter a number."));
    assert!(output.contains("Exiting."));
}

#[test]
fn closed_input_winds_down() {
    let (result, _) = run_script("");
    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConsoleError>(),
        Some(ConsoleError::Closed)
    ));
}

#[test]
fn seeded_schedule_counts_preloaded_times() {
    let seed = r#"
        config_version = 1

        [[events]]
        name = "Standup"
        start = "9:00:00"
        end = "9:15:00"
        planned = "0:15:00"

        [[events]]
        name = "Lunch"
        start = "12:00:00"
        end = "12:45:00"
        planned = "0:45:00"
    "#;

    let script = "\
6
2

0
0
";
    let (result, output) = run_script_with_seed(script, Some(seed));
    result.unwrap();

    assert!(output.contains("Events in schedule: 2"));
    // Three adopted times per preloaded event
    assert!(output.contains("Time values constructed: 6"));
}
