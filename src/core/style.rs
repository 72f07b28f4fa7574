//! Immutable theme passed into the renderer

use crate::domain::model::TimelineCategory;
use serde::{Deserialize, Serialize};

/// Colours, fonts and output switches for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub accent_color: String,
    pub background_color: String,
    pub surface_color: String,
    pub text_color: String,
    pub muted_color: String,
    pub font_family: String,
    /// Card corner radius in pixels
    pub card_radius: u32,
    pub current_color: String,
    pub past_color: String,
    pub education_color: String,
    /// Prefix for CSS class names (e.g., "pf-" for "pf-card")
    pub class_prefix: Option<String>,
    pub pretty_print: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            accent_color: "#ff4b4b".to_string(),
            background_color: "#ffffff".to_string(),
            surface_color: "#f0f2f6".to_string(),
            text_color: "#31333f".to_string(),
            muted_color: "#808495".to_string(),
            font_family: "\"Source Sans Pro\", sans-serif".to_string(),
            card_radius: 8,
            current_color: "#2e86de".to_string(),
            past_color: "#10ac84".to_string(),
            education_color: "#f39c12".to_string(),
            class_prefix: Some("pf-".to_string()),
            pretty_print: true,
        }
    }
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accent_color(mut self, color: impl Into<String>) -> Self {
        self.accent_color = color.into();
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    pub fn category_color(&self, category: TimelineCategory) -> &str {
        match category {
            TimelineCategory::Current => &self.current_color,
            TimelineCategory::Past => &self.past_color,
            TimelineCategory::Education => &self.education_color,
        }
    }

    pub fn prefix(&self) -> &str {
        self.class_prefix.as_deref().unwrap_or_default()
    }

    /// Stylesheet for the page: custom properties on `:root` plus layout rules.
    pub fn stylesheet(&self) -> String {
        let p = self.prefix();
        let mut css = String::from(":root {\n");
        let vars = [
            ("accent", self.accent_color.as_str()),
            ("background", self.background_color.as_str()),
            ("surface", self.surface_color.as_str()),
            ("text", self.text_color.as_str()),
            ("muted", self.muted_color.as_str()),
            ("font-family", self.font_family.as_str()),
        ];
        for (token, value) in vars {
            css.push_str(&format!("  --{}: {};\n", token, value));
        }
        css.push_str(&format!("  --radius: {}px;\n", self.card_radius));
        for category in TimelineCategory::ALL {
            css.push_str(&format!(
                "  --cat-{}: {};\n",
                category.css_class(),
                self.category_color(category)
            ));
        }
        css.push_str("}\n");

        css.push_str(&format!(
            "body {{ margin: 0; font-family: var(--font-family); color: var(--text); background: var(--background); }}
.{p}layout {{ display: flex; min-height: 100vh; }}
.{p}sidebar {{ width: 300px; padding: 2rem 1.5rem; background: var(--surface); box-sizing: border-box; }}
.{p}main {{ flex: 1; max-width: 960px; margin: 0 auto; padding: 2rem 3rem; }}
.{p}section {{ padding: 1.5rem 0; border-bottom: 1px solid var(--surface); }}
.{p}caption, .{p}placeholder {{ color: var(--muted); font-size: 0.9rem; }}
.{p}placeholder {{ font-style: italic; }}
.{p}badge {{ display: inline-block; padding: 0.15rem 0.6rem; margin: 0.15rem; border-radius: 1rem; background: var(--background); font-size: 0.85rem; }}
.{p}gallery {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 1.5rem; }}
.{p}card {{ padding: 1.25rem; border-radius: var(--radius); background: var(--surface); }}
.{p}button {{ display: inline-block; padding: 0.5rem 1rem; border-radius: var(--radius); border: 1px solid var(--accent); color: var(--accent); background: none; text-decoration: none; cursor: pointer; }}
.{p}avatar {{ width: 250px; max-width: 100%; border-radius: var(--radius); }}
.{p}timeline svg {{ width: 100%; height: auto; }}
.{p}bar-current {{ fill: var(--cat-current); }}
.{p}bar-past {{ fill: var(--cat-past); }}
.{p}bar-education {{ fill: var(--cat-education); }}
.{p}tab-list {{ display: flex; gap: 0.5rem; border-bottom: 1px solid var(--surface); }}
.{p}tab {{ padding: 0.5rem 1rem; border: none; background: none; cursor: pointer; }}
.{p}tab[aria-selected=\"true\"] {{ color: var(--accent); border-bottom: 2px solid var(--accent); }}
.{p}form input, .{p}form textarea {{ width: 100%; padding: 0.75rem; margin: 0.4rem 0; border: 1px solid var(--muted); border-radius: var(--radius); box-sizing: border-box; font-family: inherit; }}
.{p}form textarea {{ min-height: 150px; }}
"
        ));
        css
    }
}
