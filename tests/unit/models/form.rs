use super::*;

fn sample_properties() -> Properties {
    Properties::new(vec![
        ("owner".into(), FieldSpec::Input("alice".into())),
        (
            "stage".into(),
            FieldSpec::Dropdown(vec!["A".into(), "B".into(), "C".into()]),
        ),
        ("archived".into(), FieldSpec::Checkbox(false)),
        ("base".into(), FieldSpec::Reference("Module".into())),
    ])
}

#[test]
fn test_render_maps_each_field_kind() {
    let doc = render(Some(&sample_properties()));
    assert_eq!(doc.len(), 4);

    let keys: Vec<&str> = doc.fields().iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["owner", "stage", "archived", "base"]);

    assert_eq!(
        doc.field("owner").unwrap().control,
        FormControl::Text {
            value: "alice".into()
        }
    );
    assert_eq!(
        doc.field("stage").unwrap().control,
        FormControl::Select {
            options: vec!["A".into(), "B".into(), "C".into()],
            selected: None
        }
    );
    assert_eq!(
        doc.field("archived").unwrap().control,
        FormControl::Toggle { checked: false }
    );
    assert_eq!(
        doc.field("base").unwrap().control,
        FormControl::Reference {
            value: "Module".into()
        }
    );
}

#[test]
fn test_render_without_schema_is_empty() {
    assert!(render(None).is_empty());
    assert!(render(Some(&Properties::default())).is_empty());
    assert_eq!(render(None), FormDocument::empty());
}

#[test]
fn test_select_shows_first_option_until_chosen() {
    let doc = render(Some(&sample_properties()));
    assert_eq!(doc.display_value("stage").as_deref(), Some("A"));
}

#[test]
fn test_update_applies_in_place_to_one_field() {
    let mut doc = render(Some(&sample_properties()));
    let before = doc.clone();

    let changed = doc.apply(&PanelMessage::Update {
        key: "stage".into(),
        value: "B".into(),
    });

    assert!(changed);
    assert_eq!(doc.display_value("stage").as_deref(), Some("B"));
    for key in ["owner", "archived", "base"] {
        assert_eq!(doc.field(key), before.field(key));
    }
}

#[test]
fn test_update_rejects_values_the_field_cannot_show() {
    let mut doc = render(Some(&sample_properties()));
    let before = doc.clone();

    assert!(!doc.apply(&PanelMessage::Update {
        key: "stage".into(),
        value: "Z".into(),
    }));
    assert!(!doc.apply(&PanelMessage::Update {
        key: "archived".into(),
        value: "maybe".into(),
    }));
    assert!(!doc.apply(&PanelMessage::Update {
        key: "missing".into(),
        value: "x".into(),
    }));
    assert!(!doc.apply(&PanelMessage::Search { key: "base".into() }));
    assert_eq!(doc, before);
}

#[test]
fn test_update_text_reference_and_toggle() {
    let mut doc = render(Some(&sample_properties()));

    assert!(doc.apply(&PanelMessage::Update {
        key: "owner".into(),
        value: "bob".into(),
    }));
    assert!(doc.apply(&PanelMessage::Update {
        key: "base".into(),
        value: "Service".into(),
    }));
    assert!(doc.apply(&PanelMessage::Update {
        key: "archived".into(),
        value: "true".into(),
    }));

    assert_eq!(doc.display_value("owner").as_deref(), Some("bob"));
    assert_eq!(doc.display_value("base").as_deref(), Some("Service"));
    assert_eq!(doc.display_value("archived").as_deref(), Some("true"));

    assert!(!doc.apply(&PanelMessage::Update {
        key: "owner".into(),
        value: "bob".into(),
    }));
}

#[test]
fn test_search_candidates_by_field_kind() {
    let doc = render(Some(&sample_properties()));
    let types = ["Project", "Module"];

    assert_eq!(
        doc.field("stage").unwrap().search_candidates(types),
        Some(vec!["A".to_string(), "B".to_string(), "C".to_string()])
    );
    assert_eq!(
        doc.field("base").unwrap().search_candidates(types),
        Some(vec!["Project".to_string(), "Module".to_string()])
    );
    assert_eq!(doc.field("owner").unwrap().search_candidates(types), None);
    assert!(!doc.field("archived").unwrap().is_searchable());
}

#[test]
fn test_panel_messages_use_command_tag() {
    let search = PanelMessage::from_json(r#"{"command":"search","key":"base"}"#).unwrap();
    assert_eq!(search, PanelMessage::Search { key: "base".into() });

    let navigate = PanelMessage::from_json(r#"{"command":"navigate","key":"base"}"#).unwrap();
    assert_eq!(navigate, PanelMessage::Search { key: "base".into() });

    let update = PanelMessage::Update {
        key: "stage".into(),
        value: "B".into(),
    };
    assert_eq!(
        update.to_json().unwrap(),
        r#"{"command":"update","key":"stage","value":"B"}"#
    );
    assert!(PanelMessage::from_json(r#"{"command":"explode"}"#).is_err());
}

#[test]
fn test_html_has_controls_and_search_trigger() {
    let html = render(Some(&sample_properties())).to_html();

    assert!(html.starts_with("<html><body>"));
    assert!(html.ends_with("</body></html>"));
    assert!(html.contains(r#"<input type="text" id="owner" name="owner" value="alice"><br>"#));
    assert!(html.contains(r#"<option value="A" selected>A</option><option value="B">B</option>"#));
    assert!(html.contains(r#"<input type="checkbox" id="archived" name="archived"><br>"#));
    assert!(html.contains(r#"value="Module" readonly>"#));
    assert!(html.contains(r#"data-search-key="base""#));
    assert!(html.contains("postMessage({ command: 'search'"));
}

#[test]
fn test_html_escapes_values() {
    let props = Properties::new(vec![(
        "note".into(),
        FieldSpec::Input("<b>\"hi\" & bye</b>".into()),
    )]);
    let html = render(Some(&props)).to_html();
    assert!(html.contains("value=\"&lt;b&gt;&quot;hi&quot; &amp; bye&lt;/b&gt;\""));
    assert!(!html.contains("<b>"));
}

#[test]
fn test_empty_document_html_has_no_fields() {
    let html = FormDocument::empty().to_html();
    assert!(!html.contains("<label"));
    assert!(!html.contains("<input"));
}
