//! Binding report

use std::fmt;

/// What one section binder did to the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReport {
    pub name: &'static str,
    /// Repeating nodes bound to a data entry
    pub nodes: usize,
    /// Individual field writes (text, markup, attribute, class, structure)
    pub writes: usize,
}

/// Per-section results of one `apply`
#[derive(Debug, Clone, Default)]
pub struct BindReport {
    sections: Vec<SectionReport>,
}

impl BindReport {
    pub fn push(&mut self, section: SectionReport) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[SectionReport] {
        &self.sections
    }

    /// Report for a section by name
    pub fn section(&self, name: &str) -> Option<&SectionReport> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Repeating nodes bound in `name`, zero for unknown sections
    pub fn nodes(&self, name: &str) -> usize {
        self.section(name).map(|s| s.nodes).unwrap_or(0)
    }

    pub fn total_writes(&self) -> usize {
        self.sections.iter().map(|s| s.writes).sum()
    }
}

impl fmt::Display for BindReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(
                f,
                "  {:<18} {:>3} nodes {:>4} writes",
                section.name, section.nodes, section.writes
            )?;
        }
        write!(f, "  {:<18} {:>15} writes", "total", self.total_writes())
    }
}
