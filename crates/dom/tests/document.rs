use plate_dom::{
    BoundaryPoint, Document, DomError, DomTree, NodeSnapshot, SelectionHost, SelectionRange,
};

fn fixture(html: &str) -> (Document, plate_dom::NodeId) {
    let mut doc = Document::new();
    let div = doc.create_element("div");
    let body = doc.body();
    doc.append_child(body, div).unwrap();
    doc.set_inner_html(div, html).unwrap();
    (doc, div)
}

#[test]
fn insert_after_moves_node_behind_target() {
    let (mut doc, div) = fixture("<p>a</p><p>b</p><p>c</p>");
    let a = doc.child_at(div, 0).unwrap();
    let b = doc.child_at(div, 1).unwrap();

    doc.insert_after(a, b).unwrap();
    assert_eq!(doc.inner_html(div), "<p>b</p><p>a</p><p>c</p>");

    let c = doc.child_at(div, 2).unwrap();
    doc.insert_after(b, c).unwrap();
    assert_eq!(doc.inner_html(div), "<p>a</p><p>c</p><p>b</p>");
    assert_eq!(doc.last_child(div), Some(b));
}

#[test]
fn insert_into_text_is_a_hierarchy_error() {
    let (mut doc, div) = fixture("<p>a</p>");
    let p = doc.first_child(div).unwrap();
    let text = doc.first_child(p).unwrap();
    let extra = doc.create_element("span");

    let err = doc.append_child(text, extra).unwrap_err();
    assert!(matches!(err, DomError::HierarchyRequest(_)));
}

#[test]
fn insert_ancestor_into_descendant_is_a_hierarchy_error() {
    let (mut doc, div) = fixture("<blockquote><p>a</p></blockquote>");
    let quote = doc.first_child(div).unwrap();
    let p = doc.first_child(quote).unwrap();

    let err = doc.append_child(p, quote).unwrap_err();
    assert!(matches!(err, DomError::HierarchyRequest(_)));
    assert_eq!(doc.inner_html(div), "<blockquote><p>a</p></blockquote>");
}

#[test]
fn foreign_reference_and_child_are_not_found() {
    let (mut doc, div) = fixture("<p>a</p><p>b</p>");
    let a = doc.child_at(div, 0).unwrap();
    let text = doc.first_child(a).unwrap();
    let extra = doc.create_element("p");

    let err = doc.insert_before(div, extra, Some(text)).unwrap_err();
    assert!(matches!(err, DomError::NotFound));

    let err = doc.remove_child(div, text).unwrap_err();
    assert!(matches!(err, DomError::NotFound));
}

#[test]
fn remove_child_detaches_but_keeps_node_usable() {
    let (mut doc, div) = fixture("<p>a</p><p>b</p>");
    let a = doc.child_at(div, 0).unwrap();

    doc.remove_child(div, a).unwrap();
    assert_eq!(doc.inner_html(div), "<p>b</p>");
    assert_eq!(doc.parent(a), None);
    assert!(!doc.is_removed(a));

    doc.append_child(div, a).unwrap();
    assert_eq!(doc.inner_html(div), "<p>b</p><p>a</p>");
}

#[test]
fn clone_shallow_copies_tag_and_attributes_only() {
    let (mut doc, div) = fixture(r#"<blockquote class="q" cite="x"><p>a</p></blockquote>"#);
    let quote = doc.first_child(div).unwrap();

    let copy = doc.clone_shallow(quote).unwrap();

    assert_eq!(doc.child_count(copy), 0);
    assert_eq!(doc.parent(copy), None);
    assert_eq!(doc.attribute(copy, "class"), Some("q"));
    assert_eq!(doc.outer_html(copy), r#"<blockquote cite="x" class="q"></blockquote>"#);
}

#[test]
fn closest_and_contains_walk_ancestors() {
    let (doc, div) = fixture("<blockquote><p><b>a</b></p></blockquote>");
    let quote = doc.first_child(div).unwrap();
    let p = doc.first_child(quote).unwrap();
    let bold = doc.first_child(p).unwrap();
    let text = doc.first_child(bold).unwrap();

    assert_eq!(
        doc.closest(text, |d, n| d.has_tag(n, "BLOCKQUOTE"), true),
        Some(quote)
    );
    assert_eq!(doc.closest(p, |d, n| d.has_tag(n, "p"), true), Some(p));
    assert_eq!(doc.closest(p, |d, n| d.has_tag(n, "p"), false), None);
    assert!(doc.contains(quote, text));
    assert!(doc.contains(text, text));
    assert!(!doc.contains(text, quote));
    assert_eq!(doc.root_of(text), doc.body());
}

#[test]
fn index_and_length_queries() {
    let (doc, div) = fixture("<p>hello</p><p>wörld</p><p></p>");
    let second = doc.child_at(div, 1).unwrap();
    let text = doc.first_child(second).unwrap();

    assert_eq!(doc.index_of(second), 1);
    assert_eq!(doc.node_length(div), 3);
    assert_eq!(doc.node_length(text), "wörld".len());
    assert_eq!(doc.child_at(div, 3), None);
}

#[test]
fn snapshot_round_trips_through_json() {
    let (doc, div) = fixture(r#"<blockquote data-k="v"><p>a</p><p>b &amp; c</p></blockquote>"#);
    let snapshot = doc.snapshot(div).unwrap();

    let json = snapshot.to_json_pretty().unwrap();
    let parsed = NodeSnapshot::from_json_str(&json).unwrap();
    assert_eq!(parsed, snapshot);

    let mut other = Document::new();
    let body = other.body();
    let copy = other.append_snapshot(body, &parsed).unwrap();
    assert_eq!(other.inner_html(copy), doc.inner_html(div));
}

#[test]
fn snapshot_builders_produce_expected_markup() {
    let mut doc = Document::new();
    let body = doc.body();
    let quote = NodeSnapshot::blockquote(vec![
        NodeSnapshot::paragraph("one"),
        NodeSnapshot::element("H2", vec![NodeSnapshot::text("two")]),
    ]);

    doc.append_snapshot(body, &quote).unwrap();

    assert_eq!(
        doc.inner_html(body),
        "<blockquote><p>one</p><h2>two</h2></blockquote>"
    );
}

#[test]
fn selection_host_stores_active_range() {
    let (mut doc, div) = fixture("<p>hello</p>");
    let p = doc.first_child(div).unwrap();
    let text = doc.first_child(p).unwrap();
    assert_eq!(doc.selection(), None);

    let range = SelectionRange::new(
        &doc,
        BoundaryPoint::new(text, 1),
        BoundaryPoint::new(text, 3),
    )
    .unwrap();
    doc.set_selection(Some(range));
    assert_eq!(doc.selection(), Some(range));

    doc.set_selection(None);
    assert_eq!(doc.selection(), None);
}

#[test]
fn attribute_and_text_setters() {
    let (mut doc, div) = fixture("<p>a</p>");
    let p = doc.first_child(div).unwrap();
    let text = doc.first_child(p).unwrap();

    doc.set_attribute(p, "Class", "lead").unwrap();
    doc.set_text(text, "b<c").unwrap();
    assert_eq!(doc.inner_html(div), r#"<p class="lead">b&lt;c</p>"#);

    assert!(doc.set_attribute(text, "class", "x").is_err());
    assert!(doc.set_text(p, "x").is_err());
}
