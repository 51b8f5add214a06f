//! Pure mrkdwn generation from Markdown tokens.
//!
//! - [`render`]: the single pass over a token stream
//! - [`format_header`]: header emphasis rules
//! - [`format_table`]: pipe tables as aligned, fenced text
//!
//! ## Design Notes
//!
//! Slack's mrkdwn dialect is much smaller than Markdown:
//!
//! - **Emphasis**: bold is `*x*` and italic is `_x_`. Headers have no
//!   equivalent, so they become bold lines.
//! - **Tables**: not supported. Columns are padded and wrapped in a code
//!   fence so the monospace font keeps them aligned.
//! - **Quoted lists**: a bullet inside a block quote becomes `•` and loses its
//!   original indentation.
//! - **Numbered lists**: numbers are emitted exactly as written. Counters per
//!   indent level track the expected next number and restart when anything
//!   other than a numbered item or paragraph appears at that level.

mod emphasis;
mod render;
mod table;

pub use emphasis::{Emphasis, detect_emphasis, format_header};
pub use render::render;
pub use table::format_table;
