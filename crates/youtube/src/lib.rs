mod client;
mod error;
pub mod models;
mod search;
mod videos;

pub use client::YoutubeClient;
pub use error::YoutubeError;
pub use models::{
    ListResponse, NestedResourceId, ResourceId, Snippet, Statistics, Thumbnail, Thumbnails,
    VideoItem,
};
pub use search::SearchParams;
pub use videos::PopularParams;

pub type Result<T> = std::result::Result<T, YoutubeError>;
