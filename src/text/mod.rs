pub mod case;
pub mod slug;
pub mod truncate;
pub mod words;

pub use case::capitalize;
pub use slug::{is_valid_slug, slugify};
pub use truncate::{truncate, try_truncate, TruncateError, DEFAULT_SUFFIX};
pub use words::count_words;
