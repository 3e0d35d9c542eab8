//! Library integration tests.

use daykit::DaykitError;
use std::fs;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = DaykitError::UnresolvedVariable {
        name: "part3".into(),
    };
    assert!(err.to_string().contains("${part3}"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> daykit::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use daykit::cli::{Cli, Commands};

    let cli = Cli::parse_from(["daykit", "check", "--format", "json", "--fail-fast"]);

    if let Commands::Check(args) = cli.command {
        assert_eq!(args.format, "json");
        assert!(args.fail_fast);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn config_loads_from_project() {
    use daykit::config::load_config;

    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(".daykit")).unwrap();
    fs::write(
        temp.path().join(".daykit/config.yml"),
        "layout:\n  unit_prefix: puzzle\n  pad_width: 3\n",
    )
    .unwrap();

    let config = load_config(temp.path(), None).unwrap();

    assert_eq!(config.layout.unit_prefix, "puzzle");
    assert_eq!(config.layout.pad_width, 3);
}

#[test]
fn scaffold_then_report_then_check() {
    use daykit::checker::ConsistencyChecker;
    use daykit::config::DaykitConfig;
    use daykit::report::{Part, PartCapture, PartRunner, ReportGenerator, RunStatus};
    use daykit::scaffold::{ActivationOutcome, RegistrationOutcome, Scaffolder};
    use daykit::unit::Unit;
    use std::time::Duration;

    struct Answers;

    impl PartRunner for Answers {
        fn run(&self, _unit: &Unit, part: Part) -> daykit::Result<PartCapture> {
            Ok(PartCapture {
                part,
                output: format!("answer {}", part),
                status: RunStatus::Success,
                duration: Duration::ZERO,
            })
        }
    }

    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("lib/solution/src")).unwrap();
    fs::create_dir_all(root.join("bin/aoc2022/src")).unwrap();
    fs::write(root.join("lib/solution/src/lib.rs"), "//pub mod day02;\n").unwrap();
    fs::write(
        root.join("bin/aoc2022/src/main.rs"),
        "Day::Day02 => Box::new(aoc::MissingSolution::new()),\n",
    )
    .unwrap();

    let config = DaykitConfig::default();
    let unit = Unit::for_layout(2, &config.layout);

    let report = Scaffolder::new(root, &config).scaffold(&unit).unwrap();
    assert_eq!(report.aggregator, ActivationOutcome::Activated);
    assert_eq!(report.dispatcher, RegistrationOutcome::Registered);

    let summary = ConsistencyChecker::new(root, &config).check().unwrap();
    assert_eq!(summary.missing.len(), 1);
    assert_eq!(summary.missing[0].day, Some(2));

    let outcome = ReportGenerator::new(root, &config)
        .generate(&unit, &Answers)
        .unwrap();
    assert!(outcome.written);

    let summary = ConsistencyChecker::new(root, &config).check().unwrap();
    assert!(summary.is_ok());
}

#[test]
fn cargo_toml_has_release_profile() {
    let cargo_toml = include_str!("../Cargo.toml");
    assert!(cargo_toml.contains("[profile.release]"));
    assert!(cargo_toml.contains("lto = true"));
    assert!(cargo_toml.contains("strip = true"));
}
