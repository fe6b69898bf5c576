mod common;

use common::{fixture, node_at, select};
use plate_dom::{BoundaryPoint, SelectionHost, SelectionRange};
use plate_outdent::{Command, CommandError, OutdentCommand};

#[test]
fn state_is_true_for_caret_inside_blockquote() {
    let (mut doc, div) = fixture("<blockquote><p>hello</p></blockquote><p>world!</p>");
    let hello = node_at(&doc, div, &[0, 0, 0]);
    select(&mut doc, (hello, 1), (hello, 1));

    let outdent = OutdentCommand::new(&mut doc);
    assert!(outdent.query_state(None).unwrap());
}

#[test]
fn state_is_false_outside_blockquote() {
    let (mut doc, div) = fixture("<blockquote><p>hello</p></blockquote><p>world!</p>");
    let world = node_at(&doc, div, &[1, 0]);
    select(&mut doc, (world, 0), (world, 3));

    let outdent = OutdentCommand::new(&mut doc);
    assert!(!outdent.query_state(None).unwrap());
}

#[test]
fn state_requires_every_leaf_to_be_quoted() {
    let (mut doc, div) = fixture("<blockquote><p>a</p></blockquote><p>b</p>");
    let a = node_at(&doc, div, &[0, 0, 0]);
    let b = node_at(&doc, div, &[1, 0]);
    select(&mut doc, (a, 0), (b, 1));

    let outdent = OutdentCommand::new(&mut doc);
    assert!(!outdent.query_state(None).unwrap());
}

#[test]
fn state_accepts_leaves_from_different_blockquotes() {
    let (mut doc, div) =
        fixture("<blockquote><p>a</p></blockquote><blockquote><p>b</p></blockquote>");
    let a = node_at(&doc, div, &[0, 0, 0]);
    let b = node_at(&doc, div, &[1, 0, 0]);
    select(&mut doc, (a, 0), (b, 1));

    let outdent = OutdentCommand::new(&mut doc);
    assert!(outdent.query_state(None).unwrap());
}

#[test]
fn state_of_range_without_leaves_uses_start_container() {
    let (mut doc, div) = fixture("<blockquote><p>a</p><p>b</p></blockquote><p>c</p><p>d</p>");
    let quoted_a = node_at(&doc, div, &[0, 0]);
    let quoted_b = node_at(&doc, div, &[0, 1]);
    let plain_c = node_at(&doc, div, &[1]);
    let plain_d = node_at(&doc, div, &[2]);

    let inside = SelectionRange::new(
        &doc,
        BoundaryPoint::new(quoted_a, 1),
        BoundaryPoint::new(quoted_b, 0),
    )
    .unwrap();
    let outside = SelectionRange::new(
        &doc,
        BoundaryPoint::new(plain_c, 1),
        BoundaryPoint::new(plain_d, 0),
    )
    .unwrap();

    let outdent = OutdentCommand::new(&mut doc);
    assert!(outdent.query_state(Some(&inside)).unwrap());
    assert!(!outdent.query_state(Some(&outside)).unwrap());
}

#[test]
fn state_without_selection_is_an_error() {
    let (mut doc, _div) = fixture("<blockquote><p>a</p></blockquote>");

    let outdent = OutdentCommand::new(&mut doc);
    assert!(matches!(
        outdent.query_state(None),
        Err(CommandError::NoSelection)
    ));
}

#[test]
fn enabled_follows_range_availability() {
    let (mut doc, div) = fixture("<p>plain</p>");
    let plain = node_at(&doc, div, &[0, 0]);
    let explicit = SelectionRange::collapsed(plain, 2);

    {
        let outdent = OutdentCommand::new(&mut doc);
        assert!(!outdent.query_enabled(None));
        assert!(outdent.query_enabled(Some(&explicit)));
    }

    select(&mut doc, (plain, 0), (plain, 0));
    let outdent = OutdentCommand::new(&mut doc);
    assert!(outdent.query_enabled(None));
}

#[test]
fn execute_outside_blockquote_changes_nothing() {
    let html = "<p>hello</p><p>world!</p>";
    let (mut doc, div) = fixture(html);
    let hello = node_at(&doc, div, &[0, 0]);
    select(&mut doc, (hello, 1), (hello, 3));
    let before = doc.selection();

    let mut outdent = OutdentCommand::new(&mut doc);
    assert!(!outdent.query_state(None).unwrap());
    outdent.execute(None, None).unwrap();

    assert_eq!(doc.inner_html(div), html);
    assert_eq!(doc.selection(), before);
}

#[test]
fn state_clears_once_outermost_level_is_removed() {
    let (mut doc, div) = fixture("<blockquote><blockquote><p>deep</p></blockquote></blockquote>");
    let deep = node_at(&doc, div, &[0, 0, 0, 0]);
    select(&mut doc, (deep, 2), (deep, 2));

    let mut outdent = OutdentCommand::new(&mut doc);
    outdent.execute(None, None).unwrap();
    assert!(outdent.query_state(None).unwrap());
    outdent.execute(None, None).unwrap();
    assert!(!outdent.query_state(None).unwrap());

    assert_eq!(doc.inner_html(div), "<p>deep</p>");
    assert_eq!(
        doc.selection().unwrap().start(),
        BoundaryPoint::new(deep, 2)
    );
}

#[test]
fn partly_quoted_selection_is_not_outdented() {
    let html = "<p>x</p><blockquote><p>y</p></blockquote>";
    let (mut doc, div) = fixture(html);
    let x = node_at(&doc, div, &[0, 0]);
    let y = node_at(&doc, div, &[1, 0, 0]);
    select(&mut doc, (x, 0), (y, 1));
    let before = doc.selection();

    let mut outdent = OutdentCommand::new(&mut doc);
    assert!(!outdent.query_state(None).unwrap());
    outdent.execute(None, None).unwrap();

    assert_eq!(doc.inner_html(div), html);
    assert_eq!(doc.selection(), before);
}
