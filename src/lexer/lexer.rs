use std::rc::Rc;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{Position, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every pattern is anchored, so a match always starts at the lexer position.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: pattern("^\\s+"), handler: skip_handler },
        RegexPattern { regex: pattern("^\\{[^}]*\\}"), handler: skip_handler },
        RegexPattern { regex: pattern("^[a-zA-Z]+"), handler: symbol_handler },
        RegexPattern { regex: pattern("^[0-9]+"), handler: number_handler },
        RegexPattern { regex: pattern("^:="), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, ":=") },
        RegexPattern { regex: pattern("^="), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "=") },
        RegexPattern { regex: pattern("^<"), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: pattern("^\\+"), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: pattern("^-"), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: pattern("^\\*"), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: pattern("^/"), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: pattern("^\\("), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: pattern("^\\)"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: pattern("^;"), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
    ];
}

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("invalid scanner pattern")
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position(self.line, Rc::clone(&self.file))
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn count_lines(&mut self, text: &str) {
        self.line += text.matches('\n').count() as u32;
    }
}

fn matched_text(lexer: &Lexer, regex: &Regex) -> String {
    regex
        .find(lexer.remainder())
        .map(|found| found.as_str().to_string())
        .unwrap_or_default()
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_text(lexer, regex);
    lexer.count_lines(&matched);
    lexer.advance_n(matched.len());
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_text(lexer, regex);
    let position = lexer.position();

    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Number, matched, position));
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_text(lexer, regex);
    let position = lexer.position();
    let kind = RESERVED_LOOKUP
        .get(matched.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(kind, matched, position));
}

fn error_handler(lexer: &mut Lexer) {
    let Some(unknown) = lexer.remainder().chars().next() else {
        return;
    };
    let position = lexer.position();

    debug!("Unrecognised character {:?} at line {}", unknown, position.line());

    lexer.advance_n(unknown.len_utf8());
    lexer.push(MK_TOKEN!(TokenKind::Error, unknown.to_string(), position));
}

/// Scans `source` into tokens, ending with a single `EOF` token.
///
/// Scanning never fails: characters no pattern accepts become `Error`
/// tokens so the parser can report them where they occur.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let handler = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match handler {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex),
            None => error_handler(&mut lex),
        }
    }

    let position = lex.position();
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), position));

    debug!("Scanned {} tokens from {}", lex.tokens.len(), lex.file);
    lex.tokens
}
