//! CLI parse tests.

use super::{Cli, CliCommand, SourceArgs};
use clap::Parser;
use std::io::Write;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_url() {
    match parse(&["redir", "url", "/rick/data", "morty/data"]) {
        CliCommand::Url { source, paths } => {
            assert!(source.config.is_none());
            assert!(source.baseurl.is_none());
            assert_eq!(paths, vec!["/rick/data", "morty/data"]);
        }
        _ => panic!("expected Url"),
    }
}

#[test]
fn cli_parse_url_with_baseurl() {
    match parse(&[
        "redir",
        "url",
        "--baseurl",
        "https://example.com/path/",
        "blob",
    ]) {
        CliCommand::Url { source, paths } => {
            assert_eq!(source.baseurl.as_deref(), Some("https://example.com/path/"));
            assert_eq!(paths, vec!["blob"]);
        }
        _ => panic!("expected Url"),
    }
}

#[test]
fn cli_parse_url_requires_path() {
    assert!(Cli::try_parse_from(["redir", "url"]).is_err());
}

#[test]
fn cli_parse_check_json_with_config() {
    match parse(&["redir", "check", "--config", "/tmp/redir.toml", "--json"]) {
        CliCommand::Check { source, json } => {
            assert!(json);
            assert_eq!(
                source.config.as_deref(),
                Some(std::path::Path::new("/tmp/redir.toml"))
            );
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_config_path() {
    match parse(&["redir", "config-path"]) {
        CliCommand::ConfigPath => {}
        _ => panic!("expected ConfigPath"),
    }
}

#[test]
fn build_middleware_from_baseurl_flag() {
    let source = SourceArgs {
        config: None,
        baseurl: Some("https://example.com:5443".to_string()),
    };
    let m = super::commands::build_middleware(&source).unwrap();
    assert_eq!(m.host(), "example.com:5443");
    assert_eq!(
        m.redirect_url(None, "/rick/data").unwrap(),
        "https://example.com:5443/rick/data"
    );
}

#[test]
fn build_middleware_reports_missing_scheme() {
    let source = SourceArgs {
        config: None,
        baseurl: Some("example.com".to_string()),
    };
    let err = super::commands::build_middleware(&source).unwrap_err();
    assert_eq!(err.to_string(), "no scheme specified for redirect baseurl");
}

#[test]
fn build_middleware_from_config_without_section() {
    let f = tempfile::NamedTempFile::new().unwrap();
    let source = SourceArgs {
        config: Some(f.path().to_path_buf()),
        baseurl: None,
    };
    let err = super::commands::build_middleware(&source).unwrap_err();
    assert_eq!(err.to_string(), "no baseurl provided");
}

#[test]
fn build_middleware_flag_overrides_config() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(b"[middleware.redirect]\nbaseurl = \"http://origin.example.com\"\n")
        .unwrap();
    f.flush().unwrap();
    let source = SourceArgs {
        config: Some(f.path().to_path_buf()),
        baseurl: Some("https://cdn.example.com/path".to_string()),
    };
    let m = super::commands::build_middleware(&source).unwrap();
    assert_eq!(
        m.redirect_url(None, "morty/data").unwrap(),
        "https://cdn.example.com/path/morty/data"
    );
}

#[test]
fn check_json_reports_parsed_base_url() {
    let source = SourceArgs {
        config: None,
        baseurl: Some("https://example.com:443/path/".to_string()),
    };
    let m = super::commands::build_middleware(&source).unwrap();
    let out = super::commands::render_check(&m, true).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["scheme"], "https");
    assert_eq!(v["host"], "example.com:443");
    assert_eq!(v["base_path"], "/path/");
    assert_eq!(v.as_object().unwrap().len(), 3);
}

#[test]
fn check_text_lists_each_component() {
    let source = SourceArgs {
        config: None,
        baseurl: Some("http://example.com".to_string()),
    };
    let m = super::commands::build_middleware(&source).unwrap();
    let out = super::commands::render_check(&m, false).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("SCHEME") && lines[0].ends_with("http"));
    assert!(lines[1].ends_with("example.com"));
    assert_eq!(lines[2].trim_end(), "BASE PATH");
}
