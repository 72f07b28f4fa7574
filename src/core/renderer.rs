//! Page composition and HTML emission

use crate::core::content::{
    Badge, Block, BulletList, Card, DownloadBlock, Gallery, ImageBlock, Link, LinkList,
    Renderable, TextStyle,
};
use crate::core::form::ContactForm;
use crate::core::html::{escape, HtmlWriter};
use crate::core::style::StyleConfig;
use crate::core::tabs::{Tab, TabGroup, TAB_SCRIPT};
use crate::core::timeline::TimelineChart;
use crate::core::ContentProvider;
use crate::domain::model::{Animation, AnimationSlotKind, Asset};
use chrono::NaiveDate;

const LOTTIE_SCRIPT_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/lottie-web/5.12.2/lottie.min.js";

const LOTTIE_INIT_SCRIPT: &str = r#"document.querySelectorAll('[data-animation]').forEach(function (el) {
  var data = JSON.parse(document.getElementById(el.dataset.animation).textContent);
  lottie.loadAnimation({ container: el, renderer: 'svg', loop: true, autoplay: true, animationData: data });
});"#;

pub const IMAGE_PLACEHOLDER: &str = "Add a profile picture to show it here";
pub const RESUME_PLACEHOLDER: &str = "Resume not available right now";

/// The six page regions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Profile,
    Hero,
    Projects,
    Timeline,
    Experience,
    Contact,
}

impl SectionKind {
    pub const ORDER: [SectionKind; 6] = [
        SectionKind::Profile,
        SectionKind::Hero,
        SectionKind::Projects,
        SectionKind::Timeline,
        SectionKind::Experience,
        SectionKind::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SectionKind::Profile => "profile",
            SectionKind::Hero => "hero",
            SectionKind::Projects => "projects",
            SectionKind::Timeline => "timeline",
            SectionKind::Experience => "experience",
            SectionKind::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageSection {
    pub kind: SectionKind,
    pub heading: Option<String>,
    pub blocks: Vec<Block>,
}

impl PageSection {
    fn new(kind: SectionKind, heading: Option<&str>) -> Self {
        Self {
            kind,
            heading: heading.map(str::to_string),
            blocks: vec![],
        }
    }

    pub fn has_block(&self, kind: &str) -> bool {
        self.blocks.iter().any(|b| b.kind() == kind)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: String,
    pub icon: Option<String>,
    pub sections: Vec<PageSection>,
}

impl Page {
    pub fn section(&self, kind: SectionKind) -> Option<&PageSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    fn any_block(&self, kind: &str) -> bool {
        self.sections.iter().any(|s| s.has_block(kind))
    }
}

/// Optional inputs gathered for one render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resources {
    pub profile_image: Option<Asset>,
    pub resume: Option<Asset>,
    pub animations: Vec<Animation>,
}

impl Resources {
    fn animation(&self, slot: AnimationSlotKind) -> Option<&Animation> {
        self.animations.iter().find(|a| a.slot == slot)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Experience tab shown initially
    pub selected_tab: usize,
    /// Date used to close ongoing experience entries; defaults to the local date
    pub today: Option<NaiveDate>,
}

pub struct PageRenderer {
    style: StyleConfig,
}

impl PageRenderer {
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Assemble the page model. Missing resources become placeholders or
    /// omitted slots; composition itself cannot fail.
    pub fn compose<C: ContentProvider + ?Sized>(
        &self,
        content: &C,
        resources: &Resources,
        options: &RenderOptions,
    ) -> Page {
        let today = options
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let sections = SectionKind::ORDER
            .iter()
            .map(|kind| match kind {
                SectionKind::Profile => self.profile_section(content, resources),
                SectionKind::Hero => self.hero_section(content, resources),
                SectionKind::Projects => self.projects_section(content, resources),
                SectionKind::Timeline => self.timeline_section(content, today),
                SectionKind::Experience => self.experience_section(content, options),
                SectionKind::Contact => self.contact_section(content, resources),
            })
            .collect();

        Page {
            title: content.page_title().to_string(),
            icon: content.page_icon().map(str::to_string),
            sections,
        }
    }

    fn profile_section<C: ContentProvider + ?Sized>(
        &self,
        content: &C,
        resources: &Resources,
    ) -> PageSection {
        let profile = content.profile();
        let mut section = PageSection::new(SectionKind::Profile, None);

        section.blocks.push(match &resources.profile_image {
            Some(image) => Block::Image(ImageBlock::from_asset(image, profile.name.clone())),
            None => Block::placeholder(IMAGE_PLACEHOLDER),
        });
        section
            .blocks
            .push(Block::text(TextStyle::Heading, profile.name.clone()));
        section
            .blocks
            .push(Block::text(TextStyle::Body, format!("📍 {}", profile.location)));
        section
            .blocks
            .push(Block::text(TextStyle::Body, format!("📧 {}", profile.email)));

        section.blocks.push(match &resources.resume {
            Some(resume) => Block::Download(DownloadBlock::from_asset(
                resume,
                "📄 Download Resume",
                content.assets().resume_file_name(),
            )),
            None => Block::placeholder(RESUME_PLACEHOLDER),
        });

        section.blocks.push(Block::Divider);
        if !profile.skills.is_empty() {
            section
                .blocks
                .push(Block::text(TextStyle::Caption, "Skills"));
            for skill in &profile.skills {
                section.blocks.push(Block::Badge(Badge {
                    label: skill.clone(),
                }));
            }
        }
        section.blocks.push(Block::LinkList(LinkList {
            links: profile
                .social_links
                .iter()
                .map(|l| Link {
                    label: l.label.clone(),
                    url: l.url.clone(),
                })
                .collect(),
        }));
        section
    }

    fn hero_section<C: ContentProvider + ?Sized>(
        &self,
        content: &C,
        resources: &Resources,
    ) -> PageSection {
        let profile = content.profile();
        let first_name = profile
            .name
            .split_whitespace()
            .next()
            .unwrap_or(&profile.name);
        let mut section = PageSection::new(SectionKind::Hero, None);
        section.blocks.push(Block::text(
            TextStyle::Title,
            format!("Hi, I'm {}! 👋", first_name),
        ));
        section
            .blocks
            .push(Block::text(TextStyle::Subtitle, profile.headline.clone()));
        for paragraph in &profile.intro {
            section
                .blocks
                .push(Block::text(TextStyle::Body, paragraph.clone()));
        }
        if let Some(animation) = resources.animation(AnimationSlotKind::Hero) {
            section.blocks.push(Block::Animation(animation.into()));
        }
        section
    }

    fn projects_section<C: ContentProvider + ?Sized>(
        &self,
        content: &C,
        resources: &Resources,
    ) -> PageSection {
        let mut section = PageSection::new(SectionKind::Projects, Some("💻 Interactive Projects"));
        if let Some(animation) = resources.animation(AnimationSlotKind::Projects) {
            section.blocks.push(Block::Animation(animation.into()));
        }
        let cards = content
            .projects()
            .iter()
            .map(|p| Card {
                title: p.title.clone(),
                body: p.description.clone(),
                tags: p.tags.clone(),
                link: Some(Link {
                    label: p
                        .launch_label
                        .clone()
                        .unwrap_or_else(|| "View Project 🚀".to_string()),
                    url: p.link.clone(),
                }),
                features: p.features.clone(),
            })
            .collect::<Vec<_>>();
        if cards.is_empty() {
            section.blocks.push(Block::placeholder("Projects coming soon"));
        } else {
            section.blocks.push(Block::Gallery(Gallery { cards }));
        }
        section
    }

    fn timeline_section<C: ContentProvider + ?Sized>(
        &self,
        content: &C,
        today: NaiveDate,
    ) -> PageSection {
        let mut section = PageSection::new(SectionKind::Timeline, Some("📅 Career Timeline"));
        section.blocks.push(Block::TimelineChart(TimelineChart::from_experience(
            content.experience(),
            today,
        )));
        section
    }

    fn experience_section<C: ContentProvider + ?Sized>(
        &self,
        content: &C,
        options: &RenderOptions,
    ) -> PageSection {
        let mut section =
            PageSection::new(SectionKind::Experience, Some("📚 Experience & Education"));
        let tabs = content
            .experience()
            .iter()
            .map(|exp| {
                let mut blocks = vec![
                    Block::text(TextStyle::Heading, format!("{} | {}", exp.role, exp.organization)),
                    Block::text(TextStyle::Caption, exp.period_label()),
                ];
                if let Some(summary) = &exp.summary {
                    blocks.push(Block::text(TextStyle::Body, summary.clone()));
                }
                blocks.push(Block::BulletList(BulletList {
                    items: exp.highlights.clone(),
                }));
                Tab {
                    label: exp.organization.clone(),
                    blocks,
                }
            })
            .collect::<Vec<_>>();

        if tabs.is_empty() {
            section.blocks.push(Block::placeholder("No experience listed yet"));
        } else {
            let id = self.style.prefix().to_string() + "experience-tabs";
            section.blocks.push(Block::TabGroup(
                TabGroup::new(id, tabs).select(options.selected_tab),
            ));
        }
        section
    }

    fn contact_section<C: ContentProvider + ?Sized>(
        &self,
        content: &C,
        resources: &Resources,
    ) -> PageSection {
        let contact = content.contact();
        let heading = contact.heading.as_deref().unwrap_or("📬 Get In Touch");
        let mut section = PageSection::new(SectionKind::Contact, Some(heading));
        if let Some(animation) = resources.animation(AnimationSlotKind::Contact) {
            section.blocks.push(Block::Animation(animation.into()));
        }
        section
            .blocks
            .push(Block::Form(ContactForm::from_settings(contact)));
        section
    }

    /// Emit the page as a standalone HTML document.
    pub fn render_html(&self, page: &Page) -> String {
        let style = &self.style;
        let mut out = HtmlWriter::new(style.class_prefix.as_deref(), style.pretty_print);

        out.raw("<!DOCTYPE html>");
        out.open("html", &[("lang", "en")]);
        out.open("head", &[]);
        out.void("meta", &[("charset", "utf-8")]);
        out.void(
            "meta",
            &[
                ("name", "viewport"),
                ("content", "width=device-width, initial-scale=1"),
            ],
        );
        out.text("title", &[], &page.title);
        if let Some(icon) = &page.icon {
            let href = icon_data_uri(icon);
            out.void("link", &[("rel", "icon"), ("href", href.as_str())]);
        }
        out.open("style", &[]);
        for line in style.stylesheet().lines() {
            out.raw(line);
        }
        out.close("style");
        out.close("head");

        out.open("body", &[]);
        let layout = out.class("layout");
        out.open("div", &[("class", layout.as_str())]);

        if let Some(profile) = page.section(SectionKind::Profile) {
            let sidebar = out.class("sidebar");
            out.open("aside", &[("class", sidebar.as_str()), ("id", profile.kind.id())]);
            self.render_blocks(&mut out, profile);
            out.close("aside");
        }

        let main = out.class("main");
        out.open("main", &[("class", main.as_str())]);
        let section_class = out.class("section");
        for section in page
            .sections
            .iter()
            .filter(|s| s.kind != SectionKind::Profile)
        {
            out.open(
                "section",
                &[("class", section_class.as_str()), ("id", section.kind.id())],
            );
            if let Some(heading) = &section.heading {
                out.text("h2", &[], heading);
            }
            self.render_blocks(&mut out, section);
            out.close("section");
        }
        out.close("main");
        out.close("div");

        if page.any_block("tabs") {
            out.open("script", &[]);
            for line in TAB_SCRIPT.lines() {
                out.raw(line);
            }
            out.close("script");
        }
        if page.any_block("animation") {
            out.open("script", &[("src", LOTTIE_SCRIPT_URL)]);
            out.close("script");
            out.open("script", &[]);
            for line in LOTTIE_INIT_SCRIPT.lines() {
                out.raw(line);
            }
            out.close("script");
        }

        out.close("body");
        out.close("html");
        out.finish()
    }

    fn render_blocks(&self, out: &mut HtmlWriter, section: &PageSection) {
        for block in &section.blocks {
            block.render(out, &self.style);
        }
    }
}

/// Emoji favicon as an SVG data URI. The SVG body is percent-encoded so `#`
/// and `%` in the icon stay part of the data.
fn icon_data_uri(icon: &str) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>{}</text></svg>",
        escape(icon)
    );
    let encoded: String = url::form_urlencoded::byte_serialize(svg.as_bytes()).collect();
    // form encoding writes spaces as '+'; a data URI needs %20
    format!("data:image/svg+xml,{}", encoded.replace('+', "%20"))
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new(StyleConfig::default())
    }
}
