//! Core token → mrkdwn rendering.
//!
//! A single forward pass over the token stream. Each token produces one
//! output entry; entries are joined with newlines at the end. The only state
//! carried between tokens is the numbered-list counters, which live in the
//! render context and die with it.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::token::{Token, TokenKind};

use super::emphasis::format_header;
use super::table::format_table;

/// A `-` or `*` bullet at the start of a quoted line.
static QUOTED_BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([-*])\s+(.*)").unwrap());

/// Glyph used for list items flattened into block quotes.
const QUOTE_BULLET: char = '•';

/// Next expected ordinal for numbered lists, keyed by indent level.
#[derive(Debug, Clone, Default)]
struct ListCounters {
    next: HashMap<usize, u64>,
}

impl ListCounters {
    fn reset(&mut self, indent: usize) {
        self.next.remove(&indent);
    }

    fn expected(&self, indent: usize) -> u64 {
        self.next.get(&indent).copied().unwrap_or(1)
    }

    fn advance(&mut self, indent: usize, number: u64) {
        self.next.insert(indent, number.saturating_add(1));
    }
}

/// Context for one render call.
struct RenderContext {
    output: Vec<String>,
    counters: ListCounters,
}

impl RenderContext {
    fn new() -> Self {
        Self {
            output: Vec::new(),
            counters: ListCounters::default(),
        }
    }

    /// Render all tokens, consuming the context.
    fn render(mut self, tokens: &[Token]) -> String {
        for token in tokens {
            self.update_counters(token);
            let entry = self.format_token(token);
            self.output.push(entry);
        }
        self.output.join("\n")
    }

    /// Numbering restarts at an indent once anything other than a numbered
    /// item or a paragraph appears there.
    fn update_counters(&mut self, token: &Token) {
        if !token.kind.keeps_numbering() {
            self.counters.reset(token.indent);
        }
    }

    fn format_token(&mut self, token: &Token) -> String {
        let indent = " ".repeat(token.indent);

        match &token.kind {
            TokenKind::HorizontalRule | TokenKind::ParagraphBreak => "\n".to_string(),

            TokenKind::Paragraph { value } => format!("{}{}", indent, value),

            TokenKind::CodeBlock { value } => value.clone(),

            TokenKind::Table { value } => format!("{}\n", format_table(value)),

            TokenKind::BlockQuote { value, level } => {
                let prefix = ">".repeat(*level);
                match QUOTED_BULLET_RE.captures(value) {
                    Some(caps) => {
                        let content = caps.get(2).map_or("", |m| m.as_str());
                        format!("{} {} {}", prefix, QUOTE_BULLET, content)
                    }
                    None => format!("{} {}{}", prefix, indent, value),
                }
            }

            TokenKind::Header { value, raw } => {
                format!("{}{}", indent, format_header(raw, value))
            }

            TokenKind::NumberedList { value, number } => {
                let expected = self.counters.expected(token.indent);
                if *number != expected {
                    tracing::trace!(
                        indent = token.indent,
                        expected,
                        number,
                        "numbered item out of sequence"
                    );
                }
                self.counters.advance(token.indent, *number);
                format!("{}{}. {}", indent, number, value)
            }

            TokenKind::LetteredList { value, bullet }
            | TokenKind::UnorderedList { value, bullet } => {
                format!("{}{} {}", indent, bullet, value)
            }

            TokenKind::Other { name, value } => {
                tracing::trace!(kind = %name, "no rule for token kind, passing value through");
                format!("{}{}", indent, value)
            }
        }
    }
}

/// Render a token stream as Slack mrkdwn.
///
/// This is the main entry point. Every call starts from fresh list
/// counters, so rendering the same tokens twice gives the same text.
///
/// # Examples
///
/// ```
/// use md2slack::{Token, render};
///
/// let tokens = vec![
///     Token::header("Plan", "**Plan**"),
///     Token::numbered(1, "Draft"),
///     Token::numbered(2, "Review"),
///     Token::unordered("-", "optional").with_indent(2),
/// ];
/// assert_eq!(render(&tokens), "*Plan*\n1. Draft\n2. Review\n  - optional");
/// ```
pub fn render(tokens: &[Token]) -> String {
    tracing::debug!(tokens = tokens.len(), "rendering token stream");
    RenderContext::new().render(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counters_after(tokens: &[Token]) -> ListCounters {
        let mut ctx = RenderContext::new();
        for token in tokens {
            ctx.update_counters(token);
            ctx.format_token(token);
        }
        ctx.counters
    }

    #[test]
    fn test_paragraph_indent() {
        let tokens = vec![Token::paragraph("a"), Token::paragraph("b").with_indent(3)];
        assert_eq!(render(&tokens), "a\n   b");
    }

    #[test]
    fn test_rule_and_break_entries() {
        let tokens = vec![
            Token::paragraph("a"),
            Token::hrule(),
            Token::paragraph("b"),
            Token::paragraph_break(),
            Token::paragraph("c"),
        ];
        assert_eq!(render(&tokens), "a\n\n\nb\n\n\nc");
    }

    #[test]
    fn test_code_block_ignores_indent() {
        let tokens = vec![Token::code_block("```\nlet x = 1;\n```").with_indent(4)];
        assert_eq!(render(&tokens), "```\nlet x = 1;\n```");
    }

    #[test]
    fn test_table_gets_trailing_blank_line() {
        let tokens = vec![Token::table("| a | b |"), Token::paragraph("after")];
        assert_eq!(render(&tokens), "```\na | b\n```\n\nafter");
    }

    #[test]
    fn test_block_quote_plain() {
        let tokens = vec![Token::block_quote(1, "quoted").with_indent(2)];
        assert_eq!(render(&tokens), ">   quoted");
    }

    #[test]
    fn test_block_quote_bullet_is_flattened() {
        let tokens = vec![
            Token::block_quote(2, "- sub item"),
            Token::block_quote(1, "   * star item").with_indent(4),
        ];
        assert_eq!(render(&tokens), ">> • sub item\n> • star item");
    }

    #[test]
    fn test_block_quote_bullet_after_unicode_space() {
        let tokens = vec![Token::block_quote(1, "-\u{a0}item")];
        assert_eq!(render(&tokens), "> • item");
    }

    #[test]
    fn test_block_quote_dash_without_space_is_plain() {
        let tokens = vec![Token::block_quote(1, "-not a bullet")];
        assert_eq!(render(&tokens), "> -not a bullet");
    }

    #[test]
    fn test_header_indent() {
        let tokens = vec![Token::header("Title", "*Title*").with_indent(2)];
        assert_eq!(render(&tokens), "  *_Title_*");
    }

    #[test]
    fn test_numbered_uses_own_number() {
        let tokens = vec![Token::numbered(1, "a"), Token::numbered(7, "b")];
        assert_eq!(render(&tokens), "1. a\n7. b");
    }

    #[test]
    fn test_lettered_and_unordered_bullets() {
        let tokens = vec![
            Token::lettered("a)", "first"),
            Token::unordered("-", "dash").with_indent(2),
        ];
        assert_eq!(render(&tokens), "a) first\n  - dash");
    }

    #[test]
    fn test_unknown_kind_passes_through() {
        let tokens = vec![Token::other("SETEXT_HEADER", "Title").with_indent(1)];
        assert_eq!(render(&tokens), " Title");
    }

    #[test]
    fn test_counter_advances_past_number() {
        let counters = counters_after(&[Token::numbered(1, "a"), Token::numbered(5, "b")]);
        assert_eq!(counters.expected(0), 6);
    }

    #[test]
    fn test_paragraphs_keep_numbering() {
        let counters = counters_after(&[
            Token::numbered(2, "a"),
            Token::paragraph("p"),
            Token::paragraph_break(),
        ]);
        assert_eq!(counters.expected(0), 3);
    }

    #[test]
    fn test_other_kinds_reset_numbering_at_their_indent() {
        let counters = counters_after(&[
            Token::numbered(2, "outer"),
            Token::numbered(4, "inner").with_indent(2),
            Token::unordered("-", "bullet").with_indent(2),
        ]);
        assert_eq!(counters.expected(0), 3);
        assert_eq!(counters.expected(2), 1);

        let counters = counters_after(&[Token::numbered(2, "a"), Token::header("H", "")]);
        assert_eq!(counters.expected(0), 1);
    }

    #[test]
    fn test_empty_stream() {
        assert_eq!(render(&[]), "");
    }
}
