pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpAnimationSource, LocalAssets};
pub use config::SiteConfig;
pub use core::{
    engine::{PageEngine, RenderedPage},
    renderer::{Page, PageRenderer, RenderOptions, SectionKind},
    style::StyleConfig,
};
pub use utils::error::{PageError, Result};
