//! Tests for config loading and config-driven logger assembly.

use fanlog::{Config, Error, Logger, OutputConfig};
use std::fs;
use tempfile::TempDir;

fn load(dir: &TempDir, toml: &str) -> Result<Config, Error> {
    let path = dir.path().join("fanlog.toml");
    fs::write(&path, toml).unwrap();
    Config::load_from(&path)
}

#[test]
fn empty_source_yields_console_only() {
    let tmp_dir = TempDir::new().unwrap();
    let config = load(&tmp_dir, "").unwrap();

    let logger = Logger::from_config(&config).unwrap();
    assert_eq!(logger.output_count(), 1);
}

#[test]
fn full_output_section_yields_three_outputs() {
    let tmp_dir = TempDir::new().unwrap();
    let toml = format!(
        r#"
[output]
console = true
file = "{dir}/app.log"
html = "{dir}/report.html"
"#,
        dir = tmp_dir.path().display()
    );
    let config = load(&tmp_dir, &toml).unwrap();

    let logger = Logger::from_config(&config).unwrap();
    assert_eq!(logger.output_count(), 3);

    logger.log("info", "fan out").unwrap().wait().unwrap();
    let log_content = fs::read_to_string(tmp_dir.path().join("app.log")).unwrap();
    let html_content = fs::read_to_string(tmp_dir.path().join("report.html")).unwrap();
    assert!(log_content.contains("] info: fan out"));
    assert!(html_content.contains("<span>: fan out</span>"));
}

#[test]
fn output_section_without_console_skips_it() {
    let tmp_dir = TempDir::new().unwrap();
    let toml = format!(
        "[output]\nfile = \"{}/only.log\"\n",
        tmp_dir.path().display()
    );
    let config = load(&tmp_dir, &toml).unwrap();

    let logger = Logger::from_config(&config).unwrap();
    assert_eq!(logger.output_count(), 1);
}

#[test]
fn unknown_keys_are_ignored() {
    let tmp_dir = TempDir::new().unwrap();
    let toml = r#"
theme = "dark"

[output]
console = true
webhook = "https://example.invalid/logs"
"#;
    let config = load(&tmp_dir, toml).unwrap();

    let logger = Logger::from_config(&config).unwrap();
    assert_eq!(logger.output_count(), 1);
}

#[test]
fn custom_levels_travel_through_config() {
    let tmp_dir = TempDir::new().unwrap();
    let toml = format!(
        "[levels]\nship = \"orange\"\n\n[output]\nfile = \"{}/ship.log\"\n",
        tmp_dir.path().display()
    );
    let config = load(&tmp_dir, &toml).unwrap();

    let logger = Logger::from_config(&config).unwrap();
    logger.log("ship", "away").unwrap().wait().unwrap();
    assert!(matches!(
        logger.log("info", "replaced"),
        Err(Error::UnknownLevel(_))
    ));
}

#[test]
fn syntax_error_is_a_parse_error() {
    let tmp_dir = TempDir::new().unwrap();
    let err = load(&tmp_dir, "output = [unbalanced").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let tmp_dir = TempDir::new().unwrap();
    let err = Config::load_from(&tmp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn programmatic_output_config_builds() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config {
        levels: None,
        output: Some(OutputConfig {
            console: false,
            file: Some(tmp_dir.path().join("direct.log").display().to_string()),
            html: None,
        }),
    };

    let logger = Logger::from_config(&config).unwrap();
    assert_eq!(logger.output_count(), 1);
}

#[test]
fn invalid_destination_fails_the_whole_factory_call() {
    let config = Config {
        levels: None,
        output: Some(OutputConfig {
            console: true,
            file: Some("metrics.csv".to_string()),
            html: None,
        }),
    };

    assert!(matches!(
        Logger::from_config(&config),
        Err(Error::InvalidDestination { .. })
    ));
}
