pub mod assets;
pub mod content;
pub mod engine;
pub mod form;
pub mod html;
pub mod renderer;
pub mod style;
pub mod tabs;
pub mod timeline;

pub use crate::domain::model::{Animation, Asset, Experience, Profile, Project};
pub use crate::domain::ports::{AnimationSource, AssetSource, ContentProvider};
pub use crate::utils::error::Result;
