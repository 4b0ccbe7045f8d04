//! Route pattern compilation.
//!
//! # Responsibilities
//! - Split a pattern into literal spans and dynamic markers
//! - Compile the pieces into an anchored matcher once, at registration
//! - Extract positional captures from a request path
//!
//! # Design Decisions
//! - A dynamic marker is `(` + one or more non-`)` characters + `)`; the text inside
//!   is documentation only and never becomes a parameter name
//! - Each marker captures exactly one non-empty path segment
//! - Every other character matches verbatim (regex metacharacters are escaped)
//! - Stray parentheses make the whole pattern dead instead of failing startup

use regex::Regex;

/// Capture used in place of every dynamic marker.
const SEGMENT_CAPTURE: &str = "([^/]+)";

/// A piece of a tokenized route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text matched verbatim.
    Literal(&'a str),
    /// Placeholder matching one path segment.
    Dynamic,
}

/// Splits a pattern into literal spans and dynamic markers, leftmost first.
pub fn tokenize(pattern: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = pattern;
    let mut cursor = 0;

    while let Some(open) = rest[cursor..].find('(').map(|i| cursor + i) {
        let after = &rest[open + 1..];
        match after.find(')') {
            Some(close) if close > 0 => {
                if open > 0 {
                    tokens.push(Token::Literal(&rest[..open]));
                }
                tokens.push(Token::Dynamic);
                rest = &after[close + 1..];
                cursor = 0;
            }
            // `()` or a `(` with no closing paren stays literal
            _ => cursor = open + 1,
        }
    }

    if !rest.is_empty() {
        tokens.push(Token::Literal(rest));
    }
    tokens
}

/// Compiled matcher for a single route pattern.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    regex: Option<Regex>,
    dynamic_segments: usize,
}

impl PathMatcher {
    /// Compile a pattern. Never fails: malformed patterns yield a dead matcher.
    pub fn compile(pattern: &str) -> Self {
        let tokens = tokenize(pattern);
        let dynamic_segments = tokens.iter().filter(|t| **t == Token::Dynamic).count();

        let stray_paren = tokens.iter().any(|t| match t {
            Token::Literal(text) => text.contains(['(', ')']),
            Token::Dynamic => false,
        });
        if stray_paren {
            tracing::warn!(pattern = %pattern, "Pattern has unbalanced markers and will never match");
            return Self { regex: None, dynamic_segments };
        }

        let mut source = String::with_capacity(pattern.len() + 2);
        source.push('^');
        for token in &tokens {
            match token {
                Token::Literal(text) => source.push_str(&regex::escape(text)),
                Token::Dynamic => source.push_str(SEGMENT_CAPTURE),
            }
        }
        source.push('$');

        match Regex::new(&source) {
            Ok(regex) => Self { regex: Some(regex), dynamic_segments },
            Err(e) => {
                tracing::warn!(pattern = %pattern, error = %e, "Pattern failed to compile and will never match");
                Self { regex: None, dynamic_segments }
            }
        }
    }

    /// Match the full path, returning the captured segments in pattern order.
    pub fn captures(&self, path: &str) -> Option<Vec<String>> {
        let caps = self.regex.as_ref()?.captures(path)?;
        Some(
            caps.iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str().to_string())
                .collect(),
        )
    }

    /// Number of dynamic markers in the pattern.
    pub fn dynamic_segments(&self) -> usize {
        self.dynamic_segments
    }

    /// True when the pattern can never match anything.
    pub fn is_dead(&self) -> bool {
        self.regex.is_none()
    }
}
