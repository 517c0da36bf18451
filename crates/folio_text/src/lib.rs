pub mod case;
mod error;
pub mod hash;
pub mod html;
pub mod search;
pub mod slug;
pub mod truncate;

pub use error::{Error, Result};
pub use search::{SearchOptions, SearchPattern, SearchPatternBuilder, searchify};
pub use slug::{SlugOptions, slug, slugify, sortify};
pub use truncate::{TruncateOptions, Truncator, truncate, truncate_display};
