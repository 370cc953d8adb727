use super::{Paragraph, ParagraphClass, Surface, TableRow};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
struct Element {
    text: String,
    value: String,
    checked: bool,
    visible: bool,
    paragraphs: Vec<Paragraph>,
    rows: Vec<TableRow>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            text: String::new(),
            value: String::new(),
            checked: false,
            visible: true,
            paragraphs: Vec::new(),
            rows: Vec::new(),
        }
    }
}

/// In-memory document of id-addressable elements.
///
/// Elements spring into existence on first write; reading an unknown id yields
/// the defaults of an empty, visible element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    elements: BTreeMap<String, Element>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    fn element_mut(&mut self, id: &str) -> &mut Element {
        self.elements.entry(id.to_string()).or_default()
    }

    pub fn text(&self, id: &str) -> &str {
        self.elements.get(id).map(|e| e.text.as_str()).unwrap_or("")
    }

    pub fn value(&self, id: &str) -> &str {
        self.elements.get(id).map(|e| e.value.as_str()).unwrap_or("")
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.elements.get(id).is_some_and(|e| e.checked)
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.elements.get(id).map_or(true, |e| e.visible)
    }

    pub fn paragraphs(&self, id: &str) -> &[Paragraph] {
        self.elements
            .get(id)
            .map(|e| e.paragraphs.as_slice())
            .unwrap_or(&[])
    }

    pub fn rows(&self, id: &str) -> &[TableRow] {
        self.elements
            .get(id)
            .map(|e| e.rows.as_slice())
            .unwrap_or(&[])
    }

    /// Non-empty `*-error` labels, ordered by id.
    pub fn error_labels(&self) -> Vec<(&str, &str)> {
        self.elements
            .iter()
            .filter(|(id, e)| id.ends_with("-error") && !e.text.is_empty())
            .map(|(id, e)| (id.as_str(), e.text.as_str()))
            .collect()
    }
}

impl Surface for Page {
    fn set_text(&mut self, id: &str, text: &str) {
        self.element_mut(id).text = text.to_string();
    }

    fn set_visible(&mut self, id: &str, visible: bool) {
        self.element_mut(id).visible = visible;
    }

    fn set_value(&mut self, id: &str, value: &str) {
        self.element_mut(id).value = value.to_string();
    }

    fn set_checked(&mut self, id: &str, checked: bool) {
        self.element_mut(id).checked = checked;
    }

    fn clear_children(&mut self, id: &str) {
        let element = self.element_mut(id);
        element.paragraphs.clear();
        element.rows.clear();
    }

    fn append_paragraph(&mut self, id: &str, paragraph: Paragraph) {
        self.element_mut(id).paragraphs.push(paragraph);
    }

    fn has_paragraph(&self, id: &str, class: ParagraphClass) -> bool {
        self.paragraphs(id).iter().any(|p| p.class == class)
    }

    fn remove_paragraphs(&mut self, id: &str, class: ParagraphClass) {
        self.element_mut(id).paragraphs.retain(|p| p.class != class);
    }

    fn append_row(&mut self, id: &str, row: TableRow) {
        self.element_mut(id).rows.push(row);
    }
}
