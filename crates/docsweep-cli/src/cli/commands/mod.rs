//! CLI command handlers, one file per command.

mod check_anchors;
mod check_links;
mod clean_html;
mod clean_md;
mod completions;

pub use check_anchors::run_check_anchors;
pub use check_links::{run_check_links, CheckLinksArgs};
pub use clean_html::run_clean_html;
pub use clean_md::run_clean_md;
pub use completions::{run_completions, run_man};
