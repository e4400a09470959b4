//! Mutable HTML document
//!
//! A thin layer over `kuchikiki` giving the binder optional lookups
//! (`find`, `find_all`) and the handful of writes it needs: text, inner
//! markup, attributes, classes and inline style properties.
//!
//! Lookups behave like `querySelector`: selectors match against the whole
//! document but only descendants of the scope are returned. An invalid
//! selector is treated as a miss.

use kuchikiki::traits::*;
use kuchikiki::NodeRef;

/// A parsed HTML document
pub struct Document {
    root: NodeRef,
}

impl Document {
    /// Parse a full HTML document
    pub fn parse(html: &str) -> Self {
        Self {
            root: kuchikiki::parse_html().one(html),
        }
    }

    /// The document node, usable as a lookup scope
    pub fn root(&self) -> &NodeRef {
        &self.root
    }

    /// Serialize the document back to HTML
    pub fn to_html(&self) -> String {
        self.root.to_string()
    }

    /// Set the document title, creating `<title>` in `<head>` when missing.
    /// Returns false when the document has neither.
    pub fn set_title(&self, title: &str) -> bool {
        if let Some(node) = find(&self.root, "title") {
            set_text(&node, title);
            return true;
        }

        let Some(head) = find(&self.root, "head") else {
            return false;
        };
        for node in parse_fragment("<title></title>") {
            set_text(&node, title);
            head.append(node);
        }
        true
    }
}

/// First descendant of `scope` matching `selector`
pub fn find(scope: &NodeRef, selector: &str) -> Option<NodeRef> {
    scope
        .descendants()
        .select(selector)
        .ok()?
        .next()
        .map(|el| el.as_node().clone())
}

/// Every descendant of `scope` matching `selector`, in document order
pub fn find_all(scope: &NodeRef, selector: &str) -> Vec<NodeRef> {
    match scope.descendants().select(selector) {
        Ok(matches) => matches.map(|el| el.as_node().clone()).collect(),
        Err(()) => Vec::new(),
    }
}

/// Element children of `node`
pub fn child_elements(node: &NodeRef) -> Vec<NodeRef> {
    node.children()
        .filter(|child| child.as_element().is_some())
        .collect()
}

/// Text content of `node` and its descendants
pub fn text(node: &NodeRef) -> String {
    node.text_contents()
}

/// Replace the children of `node` with a single text node
pub fn set_text(node: &NodeRef, value: &str) {
    clear(node);
    if !value.is_empty() {
        node.append(NodeRef::new_text(value));
    }
}

/// Replace the children of `node` with parsed markup
pub fn set_inner_html(node: &NodeRef, markup: &str) {
    clear(node);
    for child in parse_fragment(markup) {
        node.append(child);
    }
}

/// Serialize the children of `node`
pub fn inner_html(node: &NodeRef) -> String {
    node.children().map(|child| child.to_string()).collect()
}

/// Parse body-level markup into detached nodes
pub fn parse_fragment(markup: &str) -> Vec<NodeRef> {
    let doc = kuchikiki::parse_html().one(format!(
        "<!DOCTYPE html><html><head></head><body>{}</body></html>",
        markup
    ));
    let Some(body) = find(&doc, "body") else {
        return Vec::new();
    };

    let children: Vec<NodeRef> = body.children().collect();
    for child in &children {
        child.detach();
    }
    children
}

/// Detach every child of `node`
pub fn clear(node: &NodeRef) {
    let children: Vec<NodeRef> = node.children().collect();
    for child in children {
        child.detach();
    }
}

/// Remove `node` from its parent
pub fn remove(node: &NodeRef) {
    node.detach();
}

pub fn append(parent: &NodeRef, child: NodeRef) {
    parent.append(child);
}

/// Insert `child` before the first child of `parent`
pub fn prepend(parent: &NodeRef, child: NodeRef) {
    parent.prepend(child);
}

pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
    let element = node.as_element()?;
    let attributes = element.attributes.borrow();
    attributes.get(name).map(str::to_string)
}

pub fn set_attr(node: &NodeRef, name: &str, value: &str) {
    if let Some(element) = node.as_element() {
        element
            .attributes
            .borrow_mut()
            .insert(name, value.to_string());
    }
}

/// Whitespace-separated classes of `node`
pub fn classes(node: &NodeRef) -> Vec<String> {
    attr(node, "class")
        .map(|value| value.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

pub fn has_class(node: &NodeRef, class: &str) -> bool {
    classes(node).iter().any(|c| c == class)
}

/// Overwrite the whole class list
pub fn set_class_name(node: &NodeRef, value: &str) {
    set_attr(node, "class", value);
}

/// Add `class` unless already present; empty names are ignored
pub fn add_class(node: &NodeRef, class: &str) {
    let mut list = classes(node);
    let added: Vec<&str> = class
        .split_whitespace()
        .filter(|c| !list.iter().any(|existing| existing == c))
        .collect();
    if added.is_empty() {
        return;
    }
    list.extend(added.into_iter().map(str::to_string));
    set_attr(node, "class", &list.join(" "));
}

pub fn remove_class(node: &NodeRef, class: &str) {
    let list = classes(node);
    if !list.iter().any(|c| c == class) {
        return;
    }
    let kept: Vec<String> = list.into_iter().filter(|c| c != class).collect();
    set_attr(node, "class", &kept.join(" "));
}

pub fn toggle_class(node: &NodeRef, class: &str, on: bool) {
    if on {
        add_class(node, class);
    } else {
        remove_class(node, class);
    }
}

/// Set one inline style property, keeping the others
pub fn set_style(node: &NodeRef, property: &str, value: &str) {
    let current = attr(node, "style").unwrap_or_default();
    let mut declarations: Vec<(String, String)> = current
        .split(';')
        .filter_map(|decl| {
            let (name, value) = decl.split_once(':')?;
            Some((name.trim().to_string(), value.trim().to_string()))
        })
        .filter(|(name, _)| !name.is_empty())
        .collect();

    match declarations
        .iter_mut()
        .find(|(name, _)| name.eq_ignore_ascii_case(property))
    {
        Some(existing) => existing.1 = value.to_string(),
        None => declarations.push((property.to_string(), value.to_string())),
    }

    let style = declarations
        .iter()
        .map(|(name, value)| format!("{}: {};", name, value))
        .collect::<Vec<_>>()
        .join(" ");
    set_attr(node, "style", &style);
}
