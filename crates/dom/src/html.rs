use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, QualName, local_name, namespace_url, ns, parse_fragment};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::snapshot::{Attrs, ElementSnapshot, NodeSnapshot};

pub(crate) const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub(crate) fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

pub(crate) fn parse_body_fragment(html: &str) -> Vec<NodeSnapshot> {
    let context = QualName::new(None, ns!(html), local_name!("body"));
    let dom = parse_fragment(RcDom::default(), ParseOpts::default(), context, vec![]).one(html);
    for error in &dom.errors {
        log::debug!("recovered from html parse error: {error}");
    }

    // The fragment lands below a synthetic <html> root.
    let children = dom.document.children.borrow();
    children
        .iter()
        .flat_map(|root| root.children.borrow().clone())
        .filter_map(|node| to_snapshot(&node))
        .collect()
}

fn to_snapshot(node: &Handle) -> Option<NodeSnapshot> {
    match &node.data {
        NodeData::Text { contents } => Some(NodeSnapshot::text(contents.borrow().to_string())),
        NodeData::Element { name, attrs, .. } => {
            let attrs: Attrs = attrs
                .borrow()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect();
            let children = node
                .children
                .borrow()
                .iter()
                .filter_map(to_snapshot)
                .collect();
            Some(NodeSnapshot::Element(ElementSnapshot {
                tag: name.local.to_string(),
                attrs,
                children,
            }))
        }
        _ => None,
    }
}

pub(crate) fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}

pub(crate) fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}
