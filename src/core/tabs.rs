//! Mutually exclusive tab panels

use crate::core::content::{Block, Renderable};
use crate::core::html::HtmlWriter;
use crate::core::style::StyleConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub label: String,
    pub blocks: Vec<Block>,
}

/// Fixed set of panels of which exactly one is visible.
#[derive(Debug, Clone, PartialEq)]
pub struct TabGroup {
    id: String,
    tabs: Vec<Tab>,
    selected: usize,
}

impl TabGroup {
    pub fn new(id: impl Into<String>, tabs: Vec<Tab>) -> Self {
        Self {
            id: id.into(),
            tabs,
            selected: 0,
        }
    }

    /// Select panel `index`; out-of-range indices select the last panel.
    pub fn select(mut self, index: usize) -> Self {
        self.selected = index.min(self.tabs.len().saturating_sub(1));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        if self.tabs.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.selected() == Some(index)
    }

    pub fn visible_panels(&self) -> Vec<usize> {
        (0..self.tabs.len()).filter(|i| self.is_visible(*i)).collect()
    }

    fn tab_id(&self, index: usize) -> String {
        format!("{}-tab-{}", self.id, index)
    }

    fn panel_id(&self, index: usize) -> String {
        format!("{}-panel-{}", self.id, index)
    }
}

impl Renderable for TabGroup {
    fn render(&self, out: &mut HtmlWriter, style: &StyleConfig) {
        let class = out.class("tabs");
        out.open("div", &[("class", class.as_str()), ("id", self.id.as_str())]);

        let list_class = out.class("tab-list");
        out.open("div", &[("class", list_class.as_str()), ("role", "tablist")]);
        let tab_class = out.class("tab");
        for (index, tab) in self.tabs.iter().enumerate() {
            let tab_id = self.tab_id(index);
            let panel_id = self.panel_id(index);
            let selected = if self.is_visible(index) { "true" } else { "false" };
            out.text(
                "button",
                &[
                    ("type", "button"),
                    ("class", tab_class.as_str()),
                    ("role", "tab"),
                    ("id", tab_id.as_str()),
                    ("aria-controls", panel_id.as_str()),
                    ("aria-selected", selected),
                ],
                &tab.label,
            );
        }
        out.close("div");

        let panel_class = out.class("tab-panel");
        for (index, tab) in self.tabs.iter().enumerate() {
            let tab_id = self.tab_id(index);
            let panel_id = self.panel_id(index);
            let mut attrs = vec![
                ("class", panel_class.as_str()),
                ("role", "tabpanel"),
                ("id", panel_id.as_str()),
                ("aria-labelledby", tab_id.as_str()),
            ];
            if !self.is_visible(index) {
                attrs.push(("hidden", ""));
            }
            out.open("div", &attrs);
            for block in &tab.blocks {
                block.render(out, style);
            }
            out.close("div");
        }

        out.close("div");
    }
}

/// Client-side switching between panels of every tab group on the page.
pub const TAB_SCRIPT: &str = r#"document.querySelectorAll('[role="tablist"]').forEach(function (list) {
  list.addEventListener('click', function (event) {
    var tab = event.target.closest('[role="tab"]');
    if (!tab) { return; }
    list.querySelectorAll('[role="tab"]').forEach(function (other) {
      var on = other === tab;
      other.setAttribute('aria-selected', on ? 'true' : 'false');
      document.getElementById(other.getAttribute('aria-controls')).hidden = !on;
    });
  });
});"#;
