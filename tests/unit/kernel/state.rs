use super::*;
use crate::models::{render_form, FieldSpec, FolderNode, Properties};

fn node(label: &str) -> FolderNode {
    let mut node = FolderNode::new(label, "Module");
    node.icon_light = format!("{label}-light.svg");
    node.icon_dark = format!("{label}-dark.svg");
    node
}

/// root
/// ├── a
/// │   └── a1
/// └── b
fn sample_tree() -> (FolderTree, [NodeId; 4]) {
    let mut tree = FolderTree::new();
    let root = tree.add_item(node("root"), None).unwrap();
    let a = tree.add_item(node("a"), Some(root)).unwrap();
    let a1 = tree.add_item(node("a1"), Some(a)).unwrap();
    let b = tree.add_item(node("b"), Some(root)).unwrap();
    (tree, [root, a, a1, b])
}

fn labels(view: &ProjectViewState) -> Vec<&str> {
    view.rows.iter().map(|r| r.label.as_str()).collect()
}

#[test]
fn rows_start_collapsed() {
    let (mut tree, [root, ..]) = sample_tree();
    let view = ProjectViewState::new(&mut tree, IconVariant::Dark);

    assert_eq!(labels(&view), vec!["root"]);
    assert_eq!(view.rows[0].id, root);
    assert!(view.rows[0].has_children);
    assert!(!view.rows[0].is_expanded);
}

#[test]
fn expand_shows_children_in_insertion_order() {
    let (mut tree, [root, a, ..]) = sample_tree();
    let mut view = ProjectViewState::new(&mut tree, IconVariant::Dark);

    assert!(view.expand(&tree, root));
    assert_eq!(labels(&view), vec!["root", "a", "b"]);
    assert_eq!(view.rows[1].depth, 1);

    assert!(view.expand(&tree, a));
    assert_eq!(labels(&view), vec!["root", "a", "a1", "b"]);
    assert_eq!(view.rows[2].depth, 2);
    assert!(!view.rows[2].has_children);

    assert!(!view.expand(&tree, a));
}

#[test]
fn collapse_hides_descendants_but_keeps_their_expand_state() {
    let (mut tree, [root, a, ..]) = sample_tree();
    let mut view = ProjectViewState::new(&mut tree, IconVariant::Dark);
    view.expand(&tree, root);
    view.expand(&tree, a);

    assert!(view.collapse(&tree, root));
    assert_eq!(labels(&view), vec!["root"]);
    assert!(!view.collapse(&tree, root));

    view.expand(&tree, root);
    assert_eq!(labels(&view), vec!["root", "a", "a1", "b"]);
}

#[test]
fn sync_picks_up_tree_changes_once() {
    let (mut tree, [root, ..]) = sample_tree();
    let mut view = ProjectViewState::new(&mut tree, IconVariant::Dark);
    view.expand(&tree, root);

    assert!(!view.sync(&tree));

    tree.add_item(node("c"), Some(root)).unwrap();
    assert!(view.sync(&tree));
    assert_eq!(labels(&view), vec!["root", "a", "b", "c"]);
    assert!(!view.sync(&tree));
}

#[test]
fn icon_variant_picks_icon() {
    let (mut tree, _) = sample_tree();
    let dark = ProjectViewState::new(&mut tree, IconVariant::Dark);
    let light = ProjectViewState::new(&mut tree, IconVariant::Light);

    assert_eq!(dark.rows[0].icon, "root-dark.svg");
    assert_eq!(light.rows[0].icon, "root-light.svg");
}

#[test]
fn icon_variant_parses_env_values() {
    assert_eq!(IconVariant::parse("Light"), Some(IconVariant::Light));
    assert_eq!(IconVariant::parse(" dark "), Some(IconVariant::Dark));
    assert_eq!(IconVariant::parse("sepia"), None);
    assert_eq!(IconVariant::default(), IconVariant::Dark);
}

#[test]
fn move_selection_walks_visible_rows() {
    let (mut tree, [root, a, _, b]) = sample_tree();
    let mut view = ProjectViewState::new(&mut tree, IconVariant::Dark);
    view.expand(&tree, root);

    assert_eq!(view.move_selection(1), Some(root));
    assert_eq!(view.move_selection(1), Some(a));
    assert_eq!(view.move_selection(5), Some(b));
    assert_eq!(view.move_selection(1), None);
    assert_eq!(view.move_selection(-10), Some(root));
    assert_eq!(view.selected(), Some(root));
}

#[test]
fn select_reports_only_changes() {
    let (mut tree, [root, ..]) = sample_tree();
    let mut view = ProjectViewState::new(&mut tree, IconVariant::Dark);

    assert!(view.select(root));
    assert!(!view.select(root));
    assert_eq!(view.selected_row(), Some(0));
}

#[test]
fn selection_survives_collapse_of_its_ancestor() {
    let (mut tree, [root, a, a1, _]) = sample_tree();
    let mut view = ProjectViewState::new(&mut tree, IconVariant::Dark);
    view.expand(&tree, root);
    view.expand(&tree, a);
    view.select(a1);

    view.collapse(&tree, root);
    assert_eq!(view.selected(), Some(a1));
    assert_eq!(view.selected_row(), None);
}

#[test]
fn reveal_expands_ancestors() {
    let (mut tree, [root, a, a1, _]) = sample_tree();
    let mut view = ProjectViewState::new(&mut tree, IconVariant::Dark);

    assert!(view.reveal(&tree, a));
    assert!(view.is_expanded(root));
    assert!(view.is_expanded(a));
    assert!(labels(&view).contains(&"a1"));
    assert!(view.row_id(2) == Some(a1));

    assert!(!view.reveal(&tree, a));
}

#[test]
fn scroll_is_clamped_to_rows() {
    let mut tree = FolderTree::new();
    let root = tree.add_item(node("root"), None).unwrap();
    for i in 0..20 {
        tree.add_item(node(&format!("n{i}")), Some(root)).unwrap();
    }
    let mut view = ProjectViewState::new(&mut tree, IconVariant::Dark);
    view.expand(&tree, root);
    view.set_view_height(5);

    assert!(view.scroll(100));
    assert_eq!(view.scroll_offset, 21 - 5);
    assert!(!view.scroll(1));
    assert!(view.scroll(-100));
    assert_eq!(view.scroll_offset, 0);
}

#[test]
fn moving_selection_keeps_it_visible() {
    let mut tree = FolderTree::new();
    let root = tree.add_item(node("root"), None).unwrap();
    for i in 0..20 {
        tree.add_item(node(&format!("n{i}")), Some(root)).unwrap();
    }
    let mut view = ProjectViewState::new(&mut tree, IconVariant::Dark);
    view.expand(&tree, root);
    view.set_view_height(5);

    for _ in 0..8 {
        view.move_selection(1);
    }
    let row = view.selected_row().unwrap();
    assert!(row >= view.scroll_offset && row < view.scroll_offset + 5);
}

#[test]
fn panel_show_bumps_revision_and_clamps_focus() {
    let props = Properties::new(vec![
        ("a".to_string(), FieldSpec::Input(String::new())),
        ("b".to_string(), FieldSpec::Checkbox(false)),
    ]);
    let (_, [root, a, ..]) = sample_tree();
    let mut panel = PanelState::new();
    assert_eq!(panel.revision(), 0);
    assert_eq!(panel.title, "Properties");

    panel.show(root, "Properties: root".to_string(), render_form(Some(&props)));
    assert_eq!(panel.revision(), 1);
    assert_eq!(panel.node(), Some(root));
    assert!(panel.move_focus(1));
    assert_eq!(panel.focused().map(|f| f.key.as_str()), Some("b"));
    assert!(!panel.move_focus(1));

    panel.show(a, "Properties: a".to_string(), FormDocument::empty());
    assert_eq!(panel.revision(), 2);
    assert_eq!(panel.focused_field, 0);
    assert!(panel.focused().is_none());
    assert!(!panel.move_focus(1));
}

fn many_fields(count: usize) -> FormDocument {
    let fields = (0..count)
        .map(|i| (format!("f{i}"), FieldSpec::Input(String::new())))
        .collect();
    render_form(Some(&Properties::new(fields)))
}

#[test]
fn panel_scroll_follows_focus() {
    let (_, [root, a, ..]) = sample_tree();
    let mut panel = PanelState::new();
    panel.show(root, "Properties: root".to_string(), many_fields(8));
    assert!(panel.set_view_height(3));

    assert!(panel.move_focus(4));
    assert_eq!(panel.focused_field, 4);
    assert_eq!(panel.scroll_offset, 2);
    assert_eq!(panel.field_at_row(2), Some(4));

    assert!(panel.focus_field(7));
    assert_eq!(panel.scroll_offset, 5);
    assert_eq!(panel.field_at_row(3), None);

    assert!(panel.move_focus(-7));
    assert_eq!(panel.scroll_offset, 0);

    assert!(!panel.focus_field(8));
    assert!(panel.focus_field(6));

    // A shorter document pulls focus and scroll back in range.
    panel.show(a, "Properties: a".to_string(), many_fields(2));
    assert_eq!(panel.focused_field, 1);
    assert_eq!(panel.scroll_offset, 0);
}

#[test]
fn panel_view_height_change_keeps_focus_visible() {
    let (_, [root, ..]) = sample_tree();
    let mut panel = PanelState::new();
    panel.show(root, "Properties: root".to_string(), many_fields(6));
    panel.focus_field(5);
    assert_eq!(panel.scroll_offset, 0);

    assert!(panel.set_view_height(2));
    assert_eq!(panel.scroll_offset, 4);
    assert!(!panel.set_view_height(2));
}

#[test]
fn quick_pick_filters_case_insensitively() {
    let mut pick = QuickPickState {
        items: vec!["Module".into(), "Service".into(), "Model".into()],
        ..QuickPickState::default()
    };
    assert_eq!(pick.filtered(), vec!["Module", "Service", "Model"]);

    pick.filter = "MOD".into();
    assert_eq!(pick.filtered(), vec!["Module", "Model"]);
    pick.selected = 1;
    assert_eq!(pick.current(), Some("Model"));

    pick.filter = "xyz".into();
    assert_eq!(pick.current(), None);

    pick.reset();
    assert!(pick.items.is_empty());
}

#[test]
fn prompt_open_tracks_both_dialogs() {
    let mut ui = UiState::default();
    assert!(!ui.prompt_open());
    ui.quick_pick.visible = true;
    assert!(ui.prompt_open());
    ui.quick_pick.reset();
    ui.input_dialog.visible = true;
    assert!(ui.prompt_open());
}
