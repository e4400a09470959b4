//! Apply-if-present field writes
//!
//! Every write resolves its target with an optional lookup and is skipped
//! silently when the target is missing. Writes that land are counted so
//! the section can report what it touched.

use kuchikiki::NodeRef;

use super::report::SectionReport;
use crate::content::SectionHeading;
use crate::dom;
use crate::helpers;

pub(crate) struct Fields {
    name: &'static str,
    nodes: usize,
    writes: usize,
}

impl Fields {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            nodes: 0,
            writes: 0,
        }
    }

    /// Pair the i-th node matching `selector` with the i-th data entry.
    /// Surplus entries and surplus nodes are both left out.
    pub fn each<'d, T>(
        &mut self,
        scope: &NodeRef,
        selector: &str,
        data: &'d [T],
    ) -> Vec<(NodeRef, &'d T)> {
        let pairs: Vec<_> = dom::find_all(scope, selector)
            .into_iter()
            .zip(data)
            .collect();
        self.nodes += pairs.len();
        pairs
    }

    /// Count a structural change made directly on the tree
    pub fn touch(&mut self) {
        self.writes += 1;
    }

    pub fn bound(&mut self) {
        self.nodes += 1;
    }

    pub fn text(&mut self, scope: &NodeRef, selector: &str, value: &str) {
        if let Some(node) = dom::find(scope, selector) {
            self.set_text(&node, value);
        }
    }

    pub fn markup(&mut self, scope: &NodeRef, selector: &str, markup: &str) {
        if let Some(node) = dom::find(scope, selector) {
            dom::set_inner_html(&node, markup);
            self.writes += 1;
        }
    }

    pub fn attr(&mut self, scope: &NodeRef, selector: &str, name: &str, value: &str) {
        if let Some(node) = dom::find(scope, selector) {
            self.set_attr(&node, name, value);
        }
    }

    pub fn class_name(&mut self, scope: &NodeRef, selector: &str, value: &str) {
        if let Some(node) = dom::find(scope, selector) {
            dom::set_class_name(&node, value);
            self.writes += 1;
        }
    }

    pub fn set_text(&mut self, node: &NodeRef, value: &str) {
        dom::set_text(node, value);
        self.writes += 1;
    }

    pub fn set_attr(&mut self, node: &NodeRef, name: &str, value: &str) {
        dom::set_attr(node, name, value);
        self.writes += 1;
    }

    pub fn set_style(&mut self, node: &NodeRef, property: &str, value: &str) {
        dom::set_style(node, property, value);
        self.writes += 1;
    }

    pub fn add_class(&mut self, node: &NodeRef, class: &str) {
        dom::add_class(node, class);
        self.writes += 1;
    }

    pub fn toggle_class(&mut self, node: &NodeRef, class: &str, on: bool) {
        dom::toggle_class(node, class, on);
        self.writes += 1;
    }

    /// `<h2>` title and two-part subtitle of `#id .section-title`
    pub fn heading(&mut self, scope: &NodeRef, section: &str, heading: &SectionHeading) {
        self.text(
            scope,
            &format!("{} .section-title h2", section),
            &heading.title,
        );
        self.markup(
            scope,
            &format!("{} .section-title p", section),
            &helpers::section_subtitle(&heading.subtitle, &heading.highlight),
        );
    }

    pub fn finish(self) -> SectionReport {
        SectionReport {
            name: self.name,
            nodes: self.nodes,
            writes: self.writes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    #[test]
    fn test_missing_targets_are_skipped() {
        let doc = Document::parse("<html><body><h3>Keep</h3></body></html>");
        let mut fields = Fields::new("test");
        fields.text(doc.root(), "h4", "nope");
        fields.markup(doc.root(), "#none p", "<b>x</b>");
        fields.attr(doc.root(), "img", "src", "x.png");
        fields.class_name(doc.root(), "i", "bi");

        let report = fields.finish();
        assert_eq!(report.writes, 0);
        assert!(doc.to_html().contains("<h3>Keep</h3>"));
    }

    #[test]
    fn test_each_binds_min_of_nodes_and_data() {
        let doc = Document::parse("<ul><li>a</li><li>b</li><li>c</li></ul>");
        let mut fields = Fields::new("test");

        let data = ["x", "y"];
        assert_eq!(fields.each(doc.root(), "li", &data).len(), 2);

        let data = ["x", "y", "z", "w"];
        assert_eq!(fields.each(doc.root(), "li", &data).len(), 3);

        assert_eq!(fields.finish().nodes, 5);
    }
}
