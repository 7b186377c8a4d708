use anyhow::Result;
use domain_checker::utils::validation::Validate;
use domain_checker::{CheckerError, ModelSettings, SettingOverrides, TomlConfig};
use tempfile::TempDir;

/// 設定檔 + 環境變數 + 命令列覆寫
#[test]
fn test_config_file_with_env_key() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("domain-checker.toml");
    std::fs::write(
        &config_path,
        r#"
[gemini]
api_key = "${DOMAIN_CHECKER_IT_KEY}"
model = "gemini-2.5-pro"
endpoint = "http://127.0.0.1:9999"

[output]
json = true
"#,
    )?;

    std::env::set_var("DOMAIN_CHECKER_IT_KEY", "env-secret");
    let file = TomlConfig::from_file(&config_path)?;
    std::env::remove_var("DOMAIN_CHECKER_IT_KEY");

    file.validate()?;
    assert!(file.json_output());

    let settings = ModelSettings::resolve(
        SettingOverrides {
            model: Some("gemini-2.5-flash".to_string()),
            ..Default::default()
        },
        None,
        Some(&file),
    )?;

    assert_eq!(settings.api_key, "env-secret");
    assert_eq!(settings.model, "gemini-2.5-flash");
    assert_eq!(settings.endpoint, "http://127.0.0.1:9999");
    Ok(())
}

#[test]
fn test_bad_endpoint_override_rejected() {
    let err = ModelSettings::resolve(
        SettingOverrides {
            api_key: Some("k".to_string()),
            endpoint: Some("ftp://models.example.com".to_string()),
            ..Default::default()
        },
        None,
        None,
    )
    .unwrap_err();

    assert!(matches!(err, CheckerError::InvalidConfigValueError { ref field, .. } if field == "endpoint"));
    assert_eq!(
        err.recovery_suggestion(),
        "Check the command line flags and the config file"
    );
}
