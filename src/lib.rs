//! # md2slack
//!
//! Render parsed Markdown tokens as Slack mrkdwn.
//!
//! Parsing Markdown is left to an external lexer. This crate takes its flat
//! token stream and produces text ready to post as a Slack message: bold
//! headers, numbered and bulleted lists, quoted lines and tables laid out in
//! a code fence.
//!
//! ## Quick Start
//!
//! ```
//! use md2slack::{Token, render};
//!
//! let tokens = vec![
//!     Token::header("Release notes", "**Release notes**"),
//!     Token::paragraph("Two fixes this week:"),
//!     Token::numbered(1, "Faster startup"),
//!     Token::numbered(2, "Fewer crashes"),
//!     Token::block_quote(1, "- thanks to everyone who reported bugs"),
//! ];
//!
//! assert_eq!(
//!     render(&tokens),
//!     "*Release notes*\nTwo fixes this week:\n1. Faster startup\n2. Fewer crashes\n\
//!      > • thanks to everyone who reported bugs"
//! );
//! ```
//!
//! ## Lexer Output
//!
//! With the `json` feature, the lexer's JSON records can be loaded directly:
//!
//! ```
//! # #[cfg(feature = "json")]
//! # {
//! let json = r#"[{"type": "HEADER", "value": "Title", "raw": "***Title***"}]"#;
//! let tokens = md2slack::tokens_from_json(json).unwrap();
//! assert_eq!(md2slack::render(&tokens), "*_Title_*");
//! # }
//! ```

pub mod error;
pub mod slack;
pub mod token;

pub use error::{Error, Result};
pub use slack::{format_table, render};
#[cfg(feature = "json")]
pub use token::tokens_from_json;
pub use token::{RawField, Token, TokenKind, TokenRecord};
