//! Tagged content model for page sections

use crate::core::form::ContactForm;
use crate::core::html::{escape_script_json, HtmlWriter};
use crate::core::style::StyleConfig;
use crate::core::tabs::TabGroup;
use crate::core::timeline::TimelineChart;
use crate::domain::model::{Animation, AnimationSlotKind, Asset};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Anything that can write itself into the page.
pub trait Renderable {
    fn render(&self, out: &mut HtmlWriter, style: &StyleConfig);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Subtitle,
    Heading,
    Body,
    Caption,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub style: TextStyle,
    pub text: String,
}

impl TextBlock {
    pub fn new(style: TextStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }
}

impl Renderable for TextBlock {
    fn render(&self, out: &mut HtmlWriter, _style: &StyleConfig) {
        match self.style {
            TextStyle::Title => out.text("h1", &[], &self.text),
            TextStyle::Subtitle => out.text("h2", &[], &self.text),
            TextStyle::Heading => out.text("h3", &[], &self.text),
            TextStyle::Body => out.text("p", &[], &self.text),
            TextStyle::Caption => {
                let class = out.class("caption");
                out.text("p", &[("class", class.as_str())], &self.text)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub label: String,
}

impl Renderable for Badge {
    fn render(&self, out: &mut HtmlWriter, _style: &StyleConfig) {
        let class = out.class("badge");
        out.text("span", &[("class", class.as_str())], &self.label);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkList {
    pub links: Vec<Link>,
}

impl Renderable for LinkList {
    fn render(&self, out: &mut HtmlWriter, _style: &StyleConfig) {
        if self.links.is_empty() {
            return;
        }
        let class = out.class("links");
        out.open("ul", &[("class", class.as_str())]);
        for link in &self.links {
            out.open("li", &[]);
            out.text(
                "a",
                &[("href", link.url.as_str()), ("rel", "noopener")],
                &link.label,
            );
            out.close("li");
        }
        out.close("ul");
    }
}

/// Project card: title, description, tags, a launch link and an optional
/// collapsible feature list.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub link: Option<Link>,
    pub features: Vec<String>,
}

impl Renderable for Card {
    fn render(&self, out: &mut HtmlWriter, style: &StyleConfig) {
        let class = out.class("card");
        out.open("article", &[("class", class.as_str())]);
        out.text("h3", &[], &self.title);
        out.text("p", &[], &self.body);
        if !self.tags.is_empty() {
            let tags_class = out.class("tags");
            out.open("div", &[("class", tags_class.as_str())]);
            for tag in &self.tags {
                Badge { label: tag.clone() }.render(out, style);
            }
            out.close("div");
        }
        if let Some(link) = &self.link {
            let button = out.class("button");
            out.text(
                "a",
                &[
                    ("class", button.as_str()),
                    ("href", link.url.as_str()),
                    ("target", "_blank"),
                    ("rel", "noopener"),
                ],
                &link.label,
            );
        }
        if !self.features.is_empty() {
            out.open("details", &[]);
            out.text("summary", &[], "See Key Features");
            out.open("ul", &[]);
            for feature in &self.features {
                out.text("li", &[], feature);
            }
            out.close("ul");
            out.close("details");
        }
        out.close("article");
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BulletList {
    pub items: Vec<String>,
}

impl Renderable for BulletList {
    fn render(&self, out: &mut HtmlWriter, _style: &StyleConfig) {
        if self.items.is_empty() {
            return;
        }
        out.open("ul", &[]);
        for item in &self.items {
            out.text("li", &[], item);
        }
        out.close("ul");
    }
}

/// Grid of project cards.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    pub cards: Vec<Card>,
}

impl Renderable for Gallery {
    fn render(&self, out: &mut HtmlWriter, style: &StyleConfig) {
        let class = out.class("gallery");
        out.open("div", &[("class", class.as_str())]);
        for card in &self.cards {
            card.render(out, style);
        }
        out.close("div");
    }
}

fn data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageBlock {
    pub alt: String,
    pub src: String,
}

impl ImageBlock {
    pub fn from_asset(asset: &Asset, alt: impl Into<String>) -> Self {
        Self {
            alt: alt.into(),
            src: data_uri(&asset.mime_type, &asset.bytes),
        }
    }
}

impl Renderable for ImageBlock {
    fn render(&self, out: &mut HtmlWriter, _style: &StyleConfig) {
        let class = out.class("avatar");
        out.void(
            "img",
            &[
                ("class", class.as_str()),
                ("src", self.src.as_str()),
                ("alt", self.alt.as_str()),
            ],
        );
    }
}

/// File download button with the file embedded in the link.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadBlock {
    pub label: String,
    pub file_name: String,
    pub href: String,
}

impl DownloadBlock {
    pub fn from_asset(asset: &Asset, label: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            file_name: file_name.into(),
            href: data_uri("application/octet-stream", &asset.bytes),
        }
    }
}

impl Renderable for DownloadBlock {
    fn render(&self, out: &mut HtmlWriter, _style: &StyleConfig) {
        let class = out.class("button");
        out.text(
            "a",
            &[
                ("class", class.as_str()),
                ("href", self.href.as_str()),
                ("download", self.file_name.as_str()),
            ],
            &self.label,
        );
    }
}

/// Decorative Lottie animation. The payload is embedded as JSON and played
/// client side.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationBlock {
    pub slot: AnimationSlotKind,
    pub height: u32,
    pub payload: serde_json::Value,
}

impl From<&Animation> for AnimationBlock {
    fn from(animation: &Animation) -> Self {
        Self {
            slot: animation.slot,
            height: animation.height,
            payload: animation.payload.clone(),
        }
    }
}

impl AnimationBlock {
    pub fn element_id(&self, out: &HtmlWriter) -> String {
        let slot = match self.slot {
            AnimationSlotKind::Hero => "hero",
            AnimationSlotKind::Projects => "projects",
            AnimationSlotKind::Contact => "contact",
        };
        out.class(&format!("anim-{}", slot))
    }
}

impl Renderable for AnimationBlock {
    fn render(&self, out: &mut HtmlWriter, _style: &StyleConfig) {
        let id = self.element_id(out);
        let data_id = format!("{}-data", id);
        let class = out.class("animation");
        let height = format!("height: {}px", self.height);
        out.open(
            "div",
            &[
                ("class", class.as_str()),
                ("id", id.as_str()),
                ("style", height.as_str()),
                ("data-animation", data_id.as_str()),
            ],
        );
        out.close("div");
        out.raw(&format!(
            "<script type=\"application/json\" id=\"{}\">{}</script>",
            data_id,
            escape_script_json(&self.payload.to_string())
        ));
    }
}

/// Stand-in for content that could not be loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub message: String,
}

impl Placeholder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Renderable for Placeholder {
    fn render(&self, out: &mut HtmlWriter, _style: &StyleConfig) {
        let class = out.class("placeholder");
        out.text("p", &[("class", class.as_str())], &self.message);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    TextBlock(TextBlock),
    Badge(Badge),
    Card(Card),
    Gallery(Gallery),
    TimelineChart(TimelineChart),
    TabGroup(TabGroup),
    Form(ContactForm),
    Image(ImageBlock),
    Download(DownloadBlock),
    Animation(AnimationBlock),
    Placeholder(Placeholder),
    LinkList(LinkList),
    BulletList(BulletList),
    Divider,
}

impl Block {
    pub fn text(style: TextStyle, text: impl Into<String>) -> Self {
        Block::TextBlock(TextBlock::new(style, text))
    }

    pub fn placeholder(message: impl Into<String>) -> Self {
        Block::Placeholder(Placeholder::new(message))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Block::TextBlock(_) => "text",
            Block::Badge(_) => "badge",
            Block::Card(_) => "card",
            Block::Gallery(_) => "gallery",
            Block::TimelineChart(_) => "timeline",
            Block::TabGroup(_) => "tabs",
            Block::Form(_) => "form",
            Block::Image(_) => "image",
            Block::Download(_) => "download",
            Block::Animation(_) => "animation",
            Block::Placeholder(_) => "placeholder",
            Block::LinkList(_) => "links",
            Block::BulletList(_) => "list",
            Block::Divider => "divider",
        }
    }
}

impl Renderable for Block {
    fn render(&self, out: &mut HtmlWriter, style: &StyleConfig) {
        match self {
            Block::TextBlock(b) => b.render(out, style),
            Block::Badge(b) => b.render(out, style),
            Block::Card(b) => b.render(out, style),
            Block::Gallery(b) => b.render(out, style),
            Block::TimelineChart(b) => b.render(out, style),
            Block::TabGroup(b) => b.render(out, style),
            Block::Form(b) => b.render(out, style),
            Block::Image(b) => b.render(out, style),
            Block::Download(b) => b.render(out, style),
            Block::Animation(b) => b.render(out, style),
            Block::Placeholder(b) => b.render(out, style),
            Block::LinkList(b) => b.render(out, style),
            Block::BulletList(b) => b.render(out, style),
            Block::Divider => out.void("hr", &[]),
        }
    }
}
