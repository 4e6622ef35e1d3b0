use std::error::Error;
use std::io::Write;
use std::path::Path;

use pcmd::config::{
    load_from_path, load_with_fs, parse_config, validate_config, CommandSpec, ConfigFormat,
    ConfigWarning,
};
use pcmd::errors::PcmdError;
use pcmd::fs::mock::MockFileSystem;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn yaml_list_loads_in_file_order() -> TestResult {
    let mut file = tempfile::Builder::new().suffix(".yml").tempfile()?;
    write!(
        file,
        r#"
- name: web
  command: npm run dev
- name: api
  command: "cargo run -- --port 8080 | tee api.log"
"#
    )?;

    let cfg = load_from_path(file.path())?;

    assert_eq!(
        cfg.commands,
        vec![
            CommandSpec::new("web", "npm run dev"),
            CommandSpec::new("api", "cargo run -- --port 8080 | tee api.log"),
        ]
    );
    Ok(())
}

#[test]
fn toml_extension_selects_toml_layout() -> TestResult {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    write!(
        file,
        r#"
[[command]]
name = "a"
command = "echo a"

[[command]]
name = "b"
command = "echo b"
"#
    )?;

    let cfg = load_from_path(file.path())?;
    let names: Vec<&str> = cfg.commands.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
    Ok(())
}

#[test]
fn format_is_chosen_by_extension() {
    assert_eq!(ConfigFormat::from_path(Path::new("pcmd.yml")), ConfigFormat::Yaml);
    assert_eq!(ConfigFormat::from_path(Path::new("pcmd.yaml")), ConfigFormat::Yaml);
    assert_eq!(ConfigFormat::from_path(Path::new("pcmd")), ConfigFormat::Yaml);
    assert_eq!(ConfigFormat::from_path(Path::new("conf/pcmd.TOML")), ConfigFormat::Toml);
}

#[test]
fn empty_or_null_yaml_is_an_empty_list() -> TestResult {
    assert!(parse_config("", ConfigFormat::Yaml)?.is_empty());
    assert!(parse_config("   \n", ConfigFormat::Yaml)?.is_empty());
    assert!(parse_config("~\n", ConfigFormat::Yaml)?.is_empty());
    assert!(parse_config("[]", ConfigFormat::Yaml)?.is_empty());
    Ok(())
}

#[test]
fn missing_file_is_a_read_error_naming_the_path() {
    let fs = MockFileSystem::new();

    let result = load_with_fs(&fs, "pcmd.yml");

    match result {
        Err(PcmdError::ConfigRead { path, message }) => {
            assert_eq!(path, Path::new("pcmd.yml"));
            assert!(message.contains("not found"), "message: {message}");
        }
        other => panic!("expected ConfigRead error, got: {:?}", other),
    }
}

#[test]
fn entry_missing_command_is_a_parse_error() {
    let fs = MockFileSystem::new();
    fs.add_file("pcmd.yml", "- name: web\n");

    let result = load_with_fs(&fs, "pcmd.yml");

    assert!(
        matches!(result, Err(PcmdError::YamlError(_))),
        "expected YamlError, got: {:?}",
        result
    );
}

#[test]
fn mapping_instead_of_list_is_a_parse_error() {
    let result = parse_config("name: web\ncommand: ls\n", ConfigFormat::Yaml);
    assert!(matches!(result, Err(PcmdError::YamlError(_))));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let result = parse_config("[[command]\nname = ", ConfigFormat::Toml);
    assert!(matches!(result, Err(PcmdError::TomlError(_))));
}

#[test]
fn validation_flags_duplicates_and_blanks_without_failing() -> TestResult {
    let cfg = parse_config(
        r#"
- name: web
  command: echo 1
- name: web
  command: echo 2
- name: web
  command: echo 3
- name: " "
  command: echo 4
- name: idle
  command: ""
"#,
        ConfigFormat::Yaml,
    )?;

    let warnings = validate_config(&cfg);

    assert_eq!(
        warnings,
        vec![
            ConfigWarning::DuplicateName("web".into()),
            ConfigWarning::BlankName(3),
            ConfigWarning::BlankCommand("idle".into()),
        ]
    );
    assert_eq!(cfg.len(), 5);
    Ok(())
}

#[test]
fn clean_config_has_no_warnings() -> TestResult {
    let cfg = parse_config("- name: a\n  command: echo a\n", ConfigFormat::Yaml)?;
    assert!(validate_config(&cfg).is_empty());
    Ok(())
}
