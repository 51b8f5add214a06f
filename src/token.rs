//! Token model for parsed Markdown.
//!
//! Tokens arrive from an external lexer as loose records ([`TokenRecord`]) in
//! which fields are present only for certain kinds. [`Token`] is the checked
//! form: every [`TokenKind`] variant carries exactly the fields its kind needs.

use crate::error::{Error, Result};

/// A single parsed Markdown unit.
///
/// Nesting is flat: the only structural information is `indent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Nesting depth in spaces.
    pub indent: usize,
    pub kind: TokenKind,
}

/// Kind-specific token payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    HorizontalRule,
    Paragraph { value: String },
    ParagraphBreak,
    /// Already fenced code, emitted as-is.
    CodeBlock { value: String },
    /// Raw pipe-table markup.
    Table { value: String },
    BlockQuote { value: String, level: usize },
    /// `raw` is the header text before emphasis markers were stripped.
    Header { value: String, raw: String },
    NumberedList { value: String, number: u64 },
    LetteredList { value: String, bullet: String },
    UnorderedList { value: String, bullet: String },
    /// Any kind the renderer has no rule for.
    Other { name: String, value: String },
}

impl TokenKind {
    /// The lexer's type name for this kind.
    pub fn name(&self) -> &str {
        match self {
            TokenKind::HorizontalRule => "HRULE",
            TokenKind::Paragraph { .. } => "PARAGRAPH",
            TokenKind::ParagraphBreak => "PARAGRAPH_BREAK",
            TokenKind::CodeBlock { .. } => "CODE_BLOCK",
            TokenKind::Table { .. } => "TABLE",
            TokenKind::BlockQuote { .. } => "BLOCK_QUOTE",
            TokenKind::Header { .. } => "HEADER",
            TokenKind::NumberedList { .. } => "NUMBERED_LIST",
            TokenKind::LetteredList { .. } => "LETTERED_LIST",
            TokenKind::UnorderedList { .. } => "UNORDERED_LIST",
            TokenKind::Other { name, .. } => name,
        }
    }

    /// Whether numbered-list continuity survives this token at its indent.
    pub fn keeps_numbering(&self) -> bool {
        matches!(
            self,
            TokenKind::NumberedList { .. } | TokenKind::Paragraph { .. } | TokenKind::ParagraphBreak
        )
    }
}

impl Token {
    /// Create a token at indent 0.
    pub fn new(kind: TokenKind) -> Self {
        Self { indent: 0, kind }
    }

    /// Set the indent level.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn hrule() -> Self {
        Self::new(TokenKind::HorizontalRule)
    }

    pub fn paragraph(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Paragraph {
            value: value.into(),
        })
    }

    pub fn paragraph_break() -> Self {
        Self::new(TokenKind::ParagraphBreak)
    }

    pub fn code_block(value: impl Into<String>) -> Self {
        Self::new(TokenKind::CodeBlock {
            value: value.into(),
        })
    }

    pub fn table(markup: impl Into<String>) -> Self {
        Self::new(TokenKind::Table {
            value: markup.into(),
        })
    }

    pub fn block_quote(level: usize, value: impl Into<String>) -> Self {
        Self::new(TokenKind::BlockQuote {
            value: value.into(),
            level,
        })
    }

    pub fn header(value: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::new(TokenKind::Header {
            value: value.into(),
            raw: raw.into(),
        })
    }

    pub fn numbered(number: u64, value: impl Into<String>) -> Self {
        Self::new(TokenKind::NumberedList {
            value: value.into(),
            number,
        })
    }

    pub fn lettered(bullet: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(TokenKind::LetteredList {
            value: value.into(),
            bullet: bullet.into(),
        })
    }

    pub fn unordered(bullet: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(TokenKind::UnorderedList {
            value: value.into(),
            bullet: bullet.into(),
        })
    }

    pub fn other(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(TokenKind::Other {
            name: name.into(),
            value: value.into(),
        })
    }
}

/// The `raw` field as the lexer emits it.
///
/// Headers carry their original text; code blocks carry a `true` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(untagged))]
pub enum RawField {
    Text(String),
    Flag(bool),
}

/// A token as produced by the lexer, before per-kind field checks.
///
/// Unknown fields are ignored and a missing `indent` means 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct TokenRecord {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub indent: usize,
    pub value: Option<String>,
    pub raw: Option<RawField>,
    pub level: Option<usize>,
    pub number: Option<u64>,
    pub bullet: Option<String>,
}

fn require<T>(field: Option<T>, kind: &str, name: &'static str) -> Result<T> {
    field.ok_or_else(|| Error::MissingField {
        kind: kind.to_string(),
        field: name,
    })
}

impl TryFrom<TokenRecord> for Token {
    type Error = Error;

    fn try_from(record: TokenRecord) -> Result<Self> {
        let TokenRecord {
            kind,
            indent,
            value,
            raw,
            level,
            number,
            bullet,
        } = record;

        let token_kind = match kind.as_str() {
            "HRULE" => TokenKind::HorizontalRule,
            "PARAGRAPH_BREAK" => TokenKind::ParagraphBreak,
            "PARAGRAPH" => TokenKind::Paragraph {
                value: require(value, &kind, "value")?,
            },
            "CODE_BLOCK" => TokenKind::CodeBlock {
                value: require(value, &kind, "value")?,
            },
            "TABLE" => TokenKind::Table {
                value: require(value, &kind, "value")?,
            },
            "BLOCK_QUOTE" => TokenKind::BlockQuote {
                value: require(value, &kind, "value")?,
                level: require(level, &kind, "level")?,
            },
            "HEADER" => TokenKind::Header {
                value: require(value, &kind, "value")?,
                raw: match raw {
                    Some(RawField::Text(text)) => text,
                    _ => String::new(),
                },
            },
            "NUMBERED_LIST" => TokenKind::NumberedList {
                value: require(value, &kind, "value")?,
                number: require(number, &kind, "number")?,
            },
            "LETTERED_LIST" => TokenKind::LetteredList {
                value: require(value, &kind, "value")?,
                bullet: require(bullet, &kind, "bullet")?,
            },
            "UNORDERED_LIST" => TokenKind::UnorderedList {
                value: require(value, &kind, "value")?,
                bullet: require(bullet, &kind, "bullet")?,
            },
            _ => TokenKind::Other {
                value: require(value, &kind, "value")?,
                name: kind.clone(),
            },
        };

        Ok(Token {
            indent,
            kind: token_kind,
        })
    }
}

/// Parse a JSON array of lexer token records.
///
/// # Examples
///
/// ```
/// let tokens = md2slack::tokens_from_json(
///     r#"[{"type": "PARAGRAPH", "value": "hi", "indent": 2}]"#,
/// ).unwrap();
/// assert_eq!(tokens, vec![md2slack::Token::paragraph("hi").with_indent(2)]);
/// ```
#[cfg(feature = "json")]
pub fn tokens_from_json(json: &str) -> Result<Vec<Token>> {
    let records: Vec<TokenRecord> = serde_json::from_str(json)?;
    records.into_iter().map(Token::try_from).collect()
}
