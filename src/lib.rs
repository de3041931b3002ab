#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A source line number together with the name of the file it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn line(&self) -> u32 {
        self.0
    }
}

/// Returns the text of the 1-based `line` of `source`, without its line terminator.
pub fn get_source_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.trim_end_matches('\r'))
}


/// Renders a diagnostic with the offending source line beneath it.
///
/// ```text
/// Syntax error at line 2: unexpected token -> ;
/// -> sample.tny
///   |
/// 2 | write ;
///   |
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let line_string = position.line().to_string();
    let padding = line_string.len() + 2;

    let mut rendered = String::new();
    rendered.push_str(&error.to_string());
    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        rendered.push_str(&format!(" ({})", tip));
    }
    rendered.push('\n');
    rendered.push_str(&format!("-> {}\n", position.1));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    if let Some(line_text) = get_source_line(source, position.line()) {
        rendered.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
    }
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    rendered
}
