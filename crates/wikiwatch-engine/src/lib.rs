pub mod autolink;
pub mod links;
pub mod markup;
pub mod runs;
pub mod site;
pub mod snapshot;

// Re-export key types for easier usage
pub use autolink::{AutoLinker, LinkMatch, auto_link};
pub use links::title_from_href;
pub use markup::parse_markup;
pub use runs::{Link, RunStyle, TextRun, visible_text};
pub use site::{SiteError, WikiSite};
