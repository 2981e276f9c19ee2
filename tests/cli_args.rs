use clap::Parser;
use colocate::cli::{CliArgs, LogLevel};
use colocate::config::default_config_path;
use colocate::logging::env_filter;

#[test]
fn defaults_to_colocate_toml() {
    let args = CliArgs::try_parse_from(["colocate"]).unwrap();
    assert_eq!(args.config, "Colocate.toml");
    assert_eq!(default_config_path().to_str(), Some(args.config.as_str()));
    assert!(!args.describe);
    assert!(args.log_level.is_none());
}

#[test]
fn parses_all_flags() {
    let args = CliArgs::try_parse_from([
        "colocate",
        "--config",
        "demos/web-stack.toml",
        "--describe",
        "--log-level",
        "debug",
    ])
    .unwrap();

    assert_eq!(args.config, "demos/web-stack.toml");
    assert!(args.describe);
    assert!(matches!(args.log_level, Some(LogLevel::Debug)));
}

#[test]
fn rejects_unknown_log_level() {
    assert!(CliArgs::try_parse_from(["colocate", "--log-level", "loud"]).is_err());
}

#[test]
fn cli_level_becomes_filter_directive() {
    assert_eq!(LogLevel::Warn.as_str(), "warn");
    assert_eq!(env_filter(Some(LogLevel::Trace)).to_string(), "trace");
    assert_eq!(env_filter(Some(LogLevel::Error)).to_string(), "error");
}
