//! Configuration section definitions.

mod build;
mod feed;
mod site;

pub use build::{BuildSectionConfig, ListingConfig};
pub use feed::{FeedConfig, FeedFormat};
pub use site::{NavEntry, SiteInfoConfig, SiteSectionConfig};
