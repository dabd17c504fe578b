//! HTML snapshot parsing and traversal using html5ever.
//!
//! The embedder hands the core a serialized snapshot of the answer subtree
//! (never a live tree). Parsing produces an [`RcDom`] owned exclusively by the
//! current pipeline invocation, so removing citation nodes here can never
//! touch the page the snapshot came from.

use std::rc::Rc;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

pub mod role_map;

pub use role_map::{element_role, NodeRole};

/// Parse an HTML snapshot into an owned DOM tree.
///
/// Accepts fragments as well as full documents; html5ever synthesizes the
/// missing `html`/`body` structure around fragment input.
pub fn parse_snapshot(html: &str) -> RcDom {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };

    parse_document(RcDom::default(), opts)
        .from_utf8()
        .one(html.as_bytes())
}

/// Get the lowercase element name of a node, if it is an element.
pub fn element_name(handle: &Handle) -> Option<&str> {
    match handle.data {
        NodeData::Element { ref name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Get the first element with the given local name.
pub fn find_first_element(handle: &Handle, name: &str) -> Option<Handle> {
    if element_name(handle) == Some(name) {
        return Some(handle.clone());
    }

    for child in handle.children.borrow().iter() {
        if let Some(found) = find_first_element(child, name) {
            return Some(found);
        }
    }

    None
}

/// Find all elements whose local name is one of `names`, in document order.
pub fn find_elements(handle: &Handle, names: &[&str]) -> Vec<Handle> {
    let mut results = Vec::new();
    find_elements_recursive(handle, names, &mut results);
    results
}

fn find_elements_recursive(handle: &Handle, names: &[&str], results: &mut Vec<Handle>) {
    if let Some(name) = element_name(handle) {
        if names.contains(&name) {
            results.push(handle.clone());
        }
    }

    for child in handle.children.borrow().iter() {
        find_elements_recursive(child, names, results);
    }
}

/// Get the first element (in document order) matching a predicate.
pub fn find_first(handle: &Handle, pred: &dyn Fn(&Handle) -> bool) -> Option<Handle> {
    if matches!(handle.data, NodeData::Element { .. }) && pred(handle) {
        return Some(handle.clone());
    }

    for child in handle.children.borrow().iter() {
        if let Some(found) = find_first(child, pred) {
            return Some(found);
        }
    }

    None
}

/// The `body` element of a parsed snapshot.
pub fn body(dom: &RcDom) -> Option<Handle> {
    find_first_element(&dom.document, "body")
}

/// Get text content from a node, ignoring tags.
pub fn text_content(handle: &Handle) -> String {
    let mut text = String::new();
    text_recursive(handle, &mut text);
    text
}

fn text_recursive(handle: &Handle, text: &mut String) {
    match handle.data {
        NodeData::Text { ref contents } => {
            text.push_str(&contents.borrow());
        }
        NodeData::Element { .. } | NodeData::Document => {
            for child in handle.children.borrow().iter() {
                text_recursive(child, text);
            }
        }
        _ => {}
    }
}

/// Get an attribute value from an element.
pub fn get_attribute(handle: &Handle, attr_name: &str) -> Option<String> {
    if let NodeData::Element { ref attrs, .. } = handle.data {
        for attr in attrs.borrow().iter() {
            if attr.name.local.as_ref() == attr_name {
                return Some(attr.value.to_string());
            }
        }
    }
    None
}

/// Whether an element carries `class_name` in its `class` attribute.
pub fn has_class(handle: &Handle, class_name: &str) -> bool {
    get_attribute(handle, "class")
        .map(|classes| classes.split_whitespace().any(|c| c == class_name))
        .unwrap_or(false)
}

/// Recursively remove all descendant elements matching a predicate.
///
/// Mutates the owned parse tree only; the page DOM the snapshot was taken
/// from is unreachable from here.
pub fn remove_matching(handle: &Handle, pred: &dyn Fn(&Handle) -> bool) {
    let to_remove: Vec<Handle> = handle
        .children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Element { .. }) && pred(child))
        .cloned()
        .collect();

    for node in to_remove {
        handle
            .children
            .borrow_mut()
            .retain(|c| !Rc::ptr_eq(c, &node));
    }

    for child in handle.children.borrow().iter() {
        remove_matching(child, pred);
    }
}
