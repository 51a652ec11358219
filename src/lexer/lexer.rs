use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{errors::errors::{Error, ErrorImpl}, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).expect("token patterns are valid regular expressions"),
        handler,
    }
}

lazy_static! {
    // Order matters: two-character operators come before their one-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        pattern("^[0-9]+", integer_handler),
        pattern("^\\s+", skip_handler),
        pattern("^\"(?:[^\"\\\\]|\\\\.)*\"", string_handler),
        pattern("^//.*", skip_handler),
        pattern("^\\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        pattern("^\\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        pattern("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        pattern("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        pattern("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        pattern("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        pattern("^==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        pattern("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        pattern("^!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        pattern("^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        pattern("^<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        pattern("^>", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        pattern("^\\.", MK_DEFAULT_HANDLER!(TokenKind::Dot, ".")),
        pattern("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        pattern("^:", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        pattern("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        pattern("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern("^-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        pattern("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        pattern("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn integer_handler(lexer: &mut Lexer, matched: &str) {
    lexer.push(MK_TOKEN!(TokenKind::Integer, matched));
    lexer.advance_n(matched.len());
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());
}

fn string_handler(lexer: &mut Lexer, matched: &str) {
    let inner = &matched[1..matched.len() - 1];

    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek().copied() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            _ => {
                // Unknown escape, keep the backslash
                result.push(ch);
                continue;
            }
        }
        chars.next();
    }

    lexer.push(MK_TOKEN!(TokenKind::String, result));
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.push(MK_TOKEN!(kind, matched));
    lexer.advance_n(matched.len());
}

/// Turns source text into a token vector terminated by an `EOF` token.
pub fn tokenize(source: impl Into<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source.into());

    while !lex.at_eof() {
        let found = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|m| (pattern.handler, m.as_str().to_string()))
        });

        match found {
            Some((handler, matched)) => handler(&mut lex, &matched),
            None => {
                let token = lex
                    .remainder()
                    .chars()
                    .next()
                    .map(String::from)
                    .unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken {
                        token: token.clone(),
                    },
                    MK_TOKEN!(TokenKind::Illegal, token),
                ));
            }
        }
    }

    lex.push(Token::eof());
    trace!(count = lex.tokens.len(), "tokenized source");
    Ok(lex.tokens)
}
