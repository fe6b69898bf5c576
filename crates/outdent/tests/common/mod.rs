#![allow(dead_code)]

use plate_dom::{BoundaryPoint, Document, DomTree, NodeId, SelectionHost, SelectionRange};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A document whose body holds one `div` filled with `html`.
pub fn fixture(html: &str) -> (Document, NodeId) {
    init_logging();
    let mut doc = Document::new();
    let div = doc.create_element("div");
    doc.set_attribute(div, "contenteditable", "true").unwrap();
    let body = doc.body();
    doc.append_child(body, div).unwrap();
    doc.set_inner_html(div, html).unwrap();
    (doc, div)
}

/// Follows child indices from `node`.
pub fn node_at(doc: &Document, node: NodeId, path: &[usize]) -> NodeId {
    path.iter().fold(node, |current, &ix| {
        doc.child_at(current, ix)
            .unwrap_or_else(|| panic!("no child {ix} below {current:?}"))
    })
}

pub fn select(doc: &mut Document, start: (NodeId, usize), end: (NodeId, usize)) {
    let range = SelectionRange::new(
        &*doc,
        BoundaryPoint::new(start.0, start.1),
        BoundaryPoint::new(end.0, end.1),
    )
    .unwrap();
    doc.set_selection(Some(range));
}

/// Text covered by a range whose boundaries sit in text nodes.
pub fn selected_text(doc: &Document, range: &SelectionRange<NodeId>) -> String {
    let (start, end) = (range.start(), range.end());
    let start_text = doc.text(start.container).expect("start in text");
    if start.container == end.container {
        return start_text[start.offset..end.offset].to_string();
    }

    let mut out = start_text[start.offset..].to_string();
    for leaf in plate_dom::range_leaves(doc, range) {
        if leaf == start.container || leaf == end.container {
            continue;
        }
        out.push_str(doc.text(leaf).unwrap_or_default());
    }
    let end_text = doc.text(end.container).expect("end in text");
    out.push_str(&end_text[..end.offset]);
    out
}
