use super::*;
use tempfile::tempdir;

const MINIMAL: &str = "\
- name: Project
  children: [Module]
- name: Module
";

#[test]
fn explicit_argument_wins_over_env() {
    let dir = tempdir().unwrap();
    let cwd = dir.path();

    let path = resolve_config_path(cwd, Some("custom.yaml"), Some("/etc/other.yaml"), None);
    assert_eq!(path, cwd.join("custom.yaml"));
}

#[test]
fn env_value_used_without_argument() {
    let dir = tempdir().unwrap();
    let cwd = dir.path();
    let abs = cwd.join("from_env.yaml");
    let raw = abs.to_string_lossy().to_string();

    let path = resolve_config_path(cwd, None, Some(&raw), None);
    assert_eq!(path, abs);
}

#[test]
fn blank_argument_and_env_are_ignored() {
    let dir = tempdir().unwrap();
    let cwd = dir.path();

    let path = resolve_config_path(cwd, Some("  "), Some(""), None);
    assert_eq!(path, cwd.join(CONFIG_FILE_NAME));
}

#[test]
fn executable_dir_used_when_it_has_a_config() {
    let dir = tempdir().unwrap();
    let cwd = dir.path().join("cwd");
    let exe_dir = dir.path().join("bin");
    std::fs::create_dir_all(&cwd).unwrap();
    std::fs::create_dir_all(&exe_dir).unwrap();
    std::fs::write(exe_dir.join(CONFIG_FILE_NAME), MINIMAL).unwrap();

    let path = resolve_config_path(&cwd, None, None, Some(&exe_dir));
    assert_eq!(path, exe_dir.join(CONFIG_FILE_NAME));
}

#[test]
fn falls_back_to_cwd_when_executable_dir_has_no_config() {
    let dir = tempdir().unwrap();
    let cwd = dir.path().join("cwd");
    let exe_dir = dir.path().join("bin");
    std::fs::create_dir_all(&cwd).unwrap();
    std::fs::create_dir_all(&exe_dir).unwrap();

    let path = resolve_config_path(&cwd, None, None, Some(&exe_dir));
    assert_eq!(path, cwd.join(CONFIG_FILE_NAME));
}

#[test]
fn load_schema_reads_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, MINIMAL).unwrap();

    let schema = load_schema(&path).unwrap();
    assert_eq!(schema.names().collect::<Vec<_>>(), vec!["Project", "Module"]);
    assert_eq!(schema.allowed_children("Project"), vec!["Module".to_string()]);
}

#[test]
fn load_schema_reports_missing_file_with_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.yaml");

    let err = load_schema(&path).unwrap_err();
    match &err {
        ConfigError::Io { path: reported, source } => {
            assert_eq!(reported, &path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("missing.yaml"));
}

#[test]
fn load_schema_surfaces_parse_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "- name: [unclosed\n").unwrap();

    assert!(matches!(load_schema(&path), Err(ConfigError::Parse(_))));
}
