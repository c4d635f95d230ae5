pub mod activity;
pub mod feed;

pub use feed::{format_statistics, render, render_statistics, FeedConfig, FeedRenderer};
