use super::*;

const CONFIG: &str = r#"
- type: folder
  name: Project
  description: Top level project
  light_ico: icons/project-light.svg
  dark_ico: icons/project-dark.svg
  children:
    - Module
    - name: Service
    - Ghost
  properties:
    owner:
      type: input
      value: alice
    stage:
      type: dropdown
      value: [draft, review, final]
    archived:
      type: checkbox
      value: true
    base:
      type: nav
      value: Module
- type: folder
  name: Module
  description: A module
  children: []
- type: folder
  name: Service
"#;

#[test]
fn test_load_keeps_file_order_and_metadata() {
    let schema = Schema::from_yaml_str(CONFIG).unwrap();
    let names: Vec<&str> = schema.names().collect();
    assert_eq!(names, vec!["Project", "Module", "Service"]);

    let project = schema.get("Project").unwrap();
    assert_eq!(project.description, "Top level project");
    assert_eq!(project.icon_light, "icons/project-light.svg");
    assert_eq!(project.icon_dark, "icons/project-dark.svg");
    assert_eq!(project.allowed_children(), ["Module", "Service", "Ghost"]);
}

#[test]
fn test_properties_are_typed_and_ordered() {
    let schema = Schema::from_yaml_str(CONFIG).unwrap();
    let props = schema.get("Project").unwrap().properties().unwrap();

    let keys: Vec<&str> = props.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["owner", "stage", "archived", "base"]);
    assert_eq!(props.get("owner"), Some(&FieldSpec::Input("alice".into())));
    assert_eq!(
        props.get("stage"),
        Some(&FieldSpec::Dropdown(vec![
            "draft".into(),
            "review".into(),
            "final".into()
        ]))
    );
    assert_eq!(props.get("archived"), Some(&FieldSpec::Checkbox(true)));
    assert_eq!(props.get("base"), Some(&FieldSpec::Reference("Module".into())));
}

#[test]
fn test_type_without_properties_has_no_schema() {
    let schema = Schema::from_yaml_str(CONFIG).unwrap();
    assert!(schema.get("Module").unwrap().properties().is_none());
}

#[test]
fn test_allowed_children_drops_unknown_types() {
    let schema = Schema::from_yaml_str(CONFIG).unwrap();
    assert_eq!(schema.allowed_children("Project"), vec!["Module", "Service"]);
    assert!(schema.allowed_children("Module").is_empty());
    assert!(schema.allowed_children("Nope").is_empty());
}

#[test]
fn test_root_type_prefers_flag_then_project_name() {
    let schema = Schema::from_yaml_str(CONFIG).unwrap();
    assert_eq!(schema.root_type().name, "Project");

    let flagged = Schema::from_yaml_str(
        "- name: Project\n- name: Workspace\n  root: true\n",
    )
    .unwrap();
    assert_eq!(flagged.root_type().name, "Workspace");

    let fallback = Schema::from_yaml_str("- name: Area\n- name: Room\n").unwrap();
    assert_eq!(fallback.root_type().name, "Area");
}

#[test]
fn test_missing_value_uses_kind_default() {
    let schema = Schema::from_yaml_str(
        "- name: A\n  properties:\n    a: {type: input}\n    b: {type: checkbox}\n    c: {type: dropdown}\n    d: {type: input, value: 42}\n",
    )
    .unwrap();
    let props = schema.get("A").unwrap().properties().unwrap();
    assert_eq!(props.get("a"), Some(&FieldSpec::Input(String::new())));
    assert_eq!(props.get("b"), Some(&FieldSpec::Checkbox(false)));
    assert_eq!(props.get("c"), Some(&FieldSpec::Dropdown(Vec::new())));
    assert_eq!(props.get("d"), Some(&FieldSpec::Input("42".into())));
}

#[test]
fn test_empty_properties_mapping_is_an_empty_schema() {
    let schema = Schema::from_yaml_str("- name: A\n  properties: {}\n").unwrap();
    let props = schema.get("A").unwrap().properties().unwrap();
    assert!(props.is_empty());
}

#[test]
fn test_rejects_duplicate_type_names() {
    let err = Schema::from_yaml_str("- name: A\n- name: A\n").unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateType(ref n) if n == "A"));
}

#[test]
fn test_rejects_missing_name() {
    let err = Schema::from_yaml_str("- name: A\n- description: nameless\n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingField {
            index: 1,
            field: "name"
        }
    ));
}

#[test]
fn test_rejects_unknown_field_kind() {
    let err = Schema::from_yaml_str("- name: A\n  properties:\n    x: {type: slider, value: 3}\n")
        .unwrap_err();
    match err {
        ConfigError::InvalidField {
            type_name, field, ..
        } => {
            assert_eq!(type_name, "A");
            assert_eq!(field, "x");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_rejects_wrongly_shaped_values() {
    assert!(matches!(
        Schema::from_yaml_str("- name: A\n  properties:\n    x: {type: checkbox, value: yes please}\n"),
        Err(ConfigError::InvalidField { .. })
    ));
    assert!(matches!(
        Schema::from_yaml_str("- name: A\n  properties:\n    x: {type: dropdown, value: one}\n"),
        Err(ConfigError::InvalidField { .. })
    ));
    assert!(matches!(
        Schema::from_yaml_str("- name: A\n  properties:\n    x: plain\n"),
        Err(ConfigError::InvalidField { .. })
    ));
}

#[test]
fn test_rejects_structurally_invalid_documents() {
    assert!(matches!(
        Schema::from_yaml_str("name: A\n"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        Schema::from_yaml_str("- [1, 2]\n"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(Schema::from_yaml_str("[]"), Err(ConfigError::Empty)));
    assert!(matches!(
        Schema::from_yaml_str("- name: A\n  children: {broken"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_lookup_reports_unknown_type() {
    let schema = Schema::from_yaml_str(CONFIG).unwrap();
    assert!(schema.lookup("Module").is_ok());
    let err = schema.lookup("Nope").unwrap_err();
    assert_eq!(err.type_name, "Nope");
    assert_eq!(err.to_string(), "unknown folder type `Nope`");
}
