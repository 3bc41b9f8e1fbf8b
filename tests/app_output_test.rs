use chrono::NaiveDate;
use demo_app::domain::ports::ConfigProvider;
use demo_app::{calculator, Application, DefaultConfig, FixedClock, SystemClock};
use regex::Regex;

struct ShortWordsConfig;

impl ConfigProvider for ShortWordsConfig {
    fn version(&self) -> &str {
        "2.0.0-test"
    }

    fn items(&self) -> &[&'static str] {
        &["Fig", "Kiwi", "Tangerine"]
    }

    fn min_item_length(&self) -> usize {
        3
    }

    fn operands(&self) -> (i32, i32) {
        (-3, 3)
    }
}

#[test]
fn test_output_with_system_clock() {
    let app = Application::new(DefaultConfig, SystemClock);
    let mut out = Vec::new();
    let report = app.run(&mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "Application starting...");
    assert_eq!(lines[1], "Version: 1.0.0");

    let timestamp = Regex::new(r"^Current time: \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").unwrap();
    assert!(timestamp.is_match(lines[2]), "unexpected time line: {}", lines[2]);
    assert_eq!(lines[2], format!("Current time: {}", report.timestamp));

    assert_eq!(
        &lines[3..],
        &[
            "",
            "Processing items...",
            "Processed items:",
            "- BANANA",
            "- CHERRY",
            "- ELDERBERRY",
            "",
            "Calculation result: 12",
            "Application completed.",
        ]
    );
}

#[test]
fn test_custom_config_provider() {
    let clock = FixedClock::new(
        NaiveDate::from_ymd_opt(1999, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap(),
    );
    let app = Application::new(ShortWordsConfig, clock);
    let mut out = Vec::new();
    let report = app.run(&mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("Version: 2.0.0-test\n"));
    assert!(output.contains("Current time: 1999-12-31 23:59:59\n"));
    assert!(output.contains("Processed items:\n- KIWI\n- TANGERINE\n"));
    assert!(!output.contains("FIG"));
    assert!(output.contains("Calculation result: 0\n"));
    assert_eq!(report.calculation, 0);
}

#[test]
fn test_repeated_runs_are_identical() {
    let clock = FixedClock::new(
        NaiveDate::from_ymd_opt(2023, 7, 4)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    );
    let app = Application::new(DefaultConfig, clock);

    let mut first = Vec::new();
    let mut second = Vec::new();
    app.run(&mut first).unwrap();
    app.run(&mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_calculator_public_api() {
    assert_eq!(calculator::add(5, 7), 12);
    assert_eq!(calculator::subtract(10, 4), 6);
}
