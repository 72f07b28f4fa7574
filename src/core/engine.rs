use crate::core::assets::load_optional;
use crate::core::renderer::{Page, PageRenderer, RenderOptions, Resources};
use crate::core::{AnimationSource, AssetSource, ContentProvider};
use crate::domain::model::Animation;
use futures::future::join_all;

const DEFAULT_ANIMATION_HEIGHT: u32 = 300;

#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub page: Page,
    pub html: String,
}

/// Gathers optional resources and renders the page. Every render starts
/// from scratch; nothing is cached between calls.
pub struct PageEngine<A: AssetSource, F: AnimationSource> {
    assets: A,
    animations: F,
    renderer: PageRenderer,
}

impl<A: AssetSource, F: AnimationSource> PageEngine<A, F> {
    pub fn new(assets: A, animations: F, renderer: PageRenderer) -> Self {
        Self {
            assets,
            animations,
            renderer,
        }
    }

    pub fn renderer(&self) -> &PageRenderer {
        &self.renderer
    }

    /// Load local assets and fetch animation payloads concurrently.
    pub async fn gather<C: ContentProvider + ?Sized>(&self, content: &C) -> Resources {
        let refs = content.assets();
        let (profile_image, resume, animations) = tokio::join!(
            load_optional(&self.assets, refs.profile_image.as_deref()),
            load_optional(&self.assets, refs.resume.as_deref()),
            self.fetch_animations(content),
        );
        Resources {
            profile_image,
            resume,
            animations,
        }
    }

    async fn fetch_animations<C: ContentProvider + ?Sized>(&self, content: &C) -> Vec<Animation> {
        let fetches = content.animations().iter().map(|slot| async move {
            self.animations.fetch(&slot.url).await.map(|payload| Animation {
                slot: slot.slot,
                height: slot.height.unwrap_or(DEFAULT_ANIMATION_HEIGHT),
                payload,
            })
        });
        join_all(fetches).await.into_iter().flatten().collect()
    }

    pub async fn render<C: ContentProvider + ?Sized>(
        &self,
        content: &C,
        options: &RenderOptions,
    ) -> RenderedPage {
        tracing::debug!("Rendering page '{}'", content.page_title());
        let resources = self.gather(content).await;
        if resources.profile_image.is_none() || resources.resume.is_none() {
            tracing::debug!("Rendering with placeholder assets");
        }
        let page = self.renderer.compose(content, &resources, options);
        let html = self.renderer.render_html(&page);
        tracing::info!(
            "Rendered page ({} bytes, {} animation(s))",
            html.len(),
            resources.animations.len()
        );
        RenderedPage { page, html }
    }
}
