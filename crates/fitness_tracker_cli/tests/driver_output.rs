use fitness_tracker_cli::{Config, DEFAULT_PACKAGES, OutputFormat, Package, RunReport, run};
use fitness_tracker_core::UNKNOWN_CODE_MESSAGE;

fn run_with(packages: &[Package<'_>], output: OutputFormat) -> (Vec<String>, RunReport) {
    let config = Config {
        output,
        ..Config::default()
    };
    let mut out = Vec::new();
    let report = run(packages, &config, &mut out).expect("run");
    let text = String::from_utf8(out).expect("utf8");
    (text.lines().map(str::to_string).collect(), report)
}

#[test]
fn default_packages_match_reference_output() {
    let (lines, _) = run_with(&DEFAULT_PACKAGES, OutputFormat::Text);
    assert_eq!(
        lines,
        vec![
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
            "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
        ]
    );
}

#[test]
fn unknown_code_prints_only_the_diagnostic() {
    let packages = [
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("XYZ", &[1.0, 2.0, 3.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ];
    let (lines, report) = run_with(&packages, OutputFormat::Text);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Тип тренировки: Running;"));
    assert_eq!(lines[1], UNKNOWN_CODE_MESSAGE);
    assert!(lines[2].starts_with("Тип тренировки: SportsWalking;"));
    assert_eq!(
        report,
        RunReport {
            printed: 2,
            unknown: 1,
            invalid: 0
        }
    );
}

#[test]
fn malformed_packages_are_skipped_silently() {
    let packages = [
        Package::new("RUN", &[15000.0, 1.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 0.0]),
        Package::new("SWM", &[720.0, -1.0, 80.0, 25.0, 40.0]),
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ];
    let (lines, report) = run_with(&packages, OutputFormat::Text);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Тип тренировки: Swimming;"));
    assert_eq!(report.invalid, 3);
    assert_eq!(report.printed, 1);
}

#[test]
fn json_output_emits_one_object_per_line() {
    let packages = [
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("XYZ", &[1.0]),
    ];
    let (lines, report) = run_with(&packages, OutputFormat::Json);
    assert_eq!(lines.len(), 2);

    let summary: serde_json::Value = serde_json::from_str(&lines[0]).expect("json summary");
    assert_eq!(summary["training_type"], "Running");
    let calories = summary["calories"].as_f64().expect("calories");
    assert!((calories - 699.75).abs() < 1e-9);

    let unknown: serde_json::Value = serde_json::from_str(&lines[1]).expect("json diagnostic");
    assert_eq!(unknown["code"], "XYZ");
    assert_eq!(unknown["error"], UNKNOWN_CODE_MESSAGE);
    assert_eq!(report.unknown, 1);
}

#[test]
fn write_failures_surface_as_errors() {
    struct Broken;
    impl std::io::Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
    let res = run(&DEFAULT_PACKAGES, &Config::default(), &mut Broken);
    assert!(matches!(res, Err(fitness_tracker_cli::CliError::Io(_))));
}
