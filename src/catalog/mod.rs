// Portfolio catalog module.
// Provides the content types and the loaders for local, remote, and bundled catalogs.

pub mod source;
pub mod types;

pub use source::{CatalogSource, LoadedCatalog, load};
pub use types::{Catalog, MediaCategory, MediaItem, Place, Project};
