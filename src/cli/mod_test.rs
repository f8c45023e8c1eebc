//! Tests for CLI parsing and server assembly.

use std::env;
use std::io::Write;

use clap::Parser;
use serial_test::serial;
use tempfile::NamedTempFile;

use super::{AppError, Cli, Transport, build_server};
use crate::config::{ConfigError, ConfigLayer, Settings, WorkspacesBlob};

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["clickup-mcp"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_transport_and_bind_flags() {
    let cli = parse(&["--transport", "http", "--host", "0.0.0.0", "--port", "9000"]);

    assert_eq!(cli.transport, Transport::Http);
    assert_eq!(cli.host.to_string(), "0.0.0.0");
    assert_eq!(cli.port, 9000);
}

#[test]
fn test_document_support_bare_flag_means_true() {
    assert_eq!(parse(&["--document-support"]).document_support, Some(true));
    assert_eq!(
        parse(&["--document-support", "false"]).document_support,
        Some(false)
    );
}

#[test]
fn test_unknown_transport_is_rejected() {
    assert!(Cli::try_parse_from(["clickup-mcp", "--transport", "carrier-pigeon"]).is_err());
}

#[test]
fn test_flags_override_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "api_key: pk_file\nteam_id: 42\ndisabled_tools: [delete_task]\ndocument_support: true"
    )
    .unwrap();

    let cli = parse(&[
        "--config",
        file.path().to_str().unwrap(),
        "--api-key",
        "pk_flag",
        "--disabled-tools",
        "delete_goal, delete_list",
    ]);
    let settings = cli.settings().unwrap();

    assert_eq!(settings.credentials.api_key.as_deref(), Some("pk_flag"));
    assert_eq!(settings.credentials.team_id.as_deref(), Some("42"));
    assert_eq!(
        settings.disabled_tools,
        vec!["delete_goal".to_string(), "delete_list".to_string()]
    );
    assert!(settings.document_support);
}

#[test]
fn test_missing_config_file_fails_settings() {
    let cli = parse(&["--config", "/nonexistent/clickup-mcp.yaml"]);

    assert!(matches!(cli.settings(), Err(ConfigError::File { .. })));
}

#[test]
#[serial]
fn test_workspaces_env_var_is_read_as_json_blob() {
    unsafe {
        env::set_var(
            "CLICKUP_WORKSPACES",
            r#"{"default":"a","workspaces":{"a":{"token":"pk_a","teamId":"1"}}}"#,
        );
    }

    let settings = parse(&[]).settings().unwrap();

    unsafe {
        env::remove_var("CLICKUP_WORKSPACES");
    }

    assert!(matches!(
        settings.credentials.workspaces,
        Some(WorkspacesBlob::Json(_))
    ));
}

#[test]
fn test_build_server_without_credentials_fails() {
    let err = build_server(Settings::from(ConfigLayer::default())).unwrap_err();

    assert!(matches!(
        err,
        AppError::Config(ConfigError::MissingCredentials { .. })
    ));
}

#[test]
fn test_build_server_applies_visibility_and_document_gate() {
    let settings = Settings::from(ConfigLayer {
        api_key: Some("pk_test".to_string()),
        team_id: Some("123".to_string()),
        disabled_tools: Some(crate::config::ToolList::Csv("delete_task".to_string())),
        ..Default::default()
    });

    let server = build_server(settings).unwrap();
    let names = server.tool_names();

    assert!(!names.contains(&"delete_task".to_string()));
    assert!(!names.contains(&"list_documents".to_string()));
    assert!(names.contains(&"get_task".to_string()));
    assert_eq!(server.dispatcher().registry().list_keys(), vec!["default"]);
}
