use std::str::FromStr;

use tracing::debug;

use crate::error::{PatternError, Result};

const GLYPHS: [char; 6] = ['?', '*', '[', ']', '{', '}'];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(char),
    /// `?`
    AnyChar,
    /// `*`
    AnyRun,
    /// `[...]`
    Set { negated: bool, items: Vec<SetItem> },
    /// `{a,b,c}`
    Alternatives(Vec<Vec<char>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetItem {
    Single(char),
    Range(char, char),
}

impl SetItem {
    fn contains(self, c: char) -> bool {
        match self {
            SetItem::Single(s) => s == c,
            SetItem::Range(lo, hi) => lo <= c && c <= hi,
        }
    }
}

/// A compiled OSC address pattern.
///
/// `?`, `*` and `[...]` never match `/`, so they stay within one path
/// segment. A `{...}` alternative is compared literally and may itself
/// contain `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressPattern {
    source: String,
    tokens: Vec<Token>,
}

impl AddressPattern {
    /// Compile a pattern.
    pub fn parse(pattern: &str) -> Result<Self> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut tokens = Vec::with_capacity(chars.len());
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                '?' => {
                    tokens.push(Token::AnyChar);
                    i += 1;
                }
                '*' => {
                    if tokens.last() != Some(&Token::AnyRun) {
                        tokens.push(Token::AnyRun);
                    }
                    i += 1;
                }
                '[' => {
                    let (token, next) = parse_set(&chars, i)?;
                    tokens.push(token);
                    i = next;
                }
                '{' => {
                    let (token, next) = parse_alternatives(&chars, i)?;
                    tokens.push(token);
                    i = next;
                }
                c => {
                    tokens.push(Token::Literal(c));
                    i += 1;
                }
            }
        }

        Ok(Self {
            source: pattern.to_string(),
            tokens,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True if the pattern has no wildcard glyphs and only matches itself.
    pub fn is_literal(&self) -> bool {
        self.tokens.iter().all(|t| matches!(t, Token::Literal(_)))
    }

    /// Match a whole address against this pattern.
    ///
    /// Runs in `O(pattern × address)` steps: the set of reachable address
    /// offsets is advanced one token at a time, so there is no backtracking.
    pub fn matches(&self, address: &str) -> bool {
        let text: Vec<char> = address.chars().collect();
        let n = text.len();
        let mut reach = vec![false; n + 1];
        reach[0] = true;

        for token in &self.tokens {
            let mut next = vec![false; n + 1];
            if *token == Token::AnyRun {
                // One sweep: a run extends from any reachable offset up to the next '/'.
                let mut active = false;
                for j in 0..=n {
                    active |= reach[j];
                    next[j] = active;
                    if j < n && text[j] == '/' {
                        active = false;
                    }
                }
            }
            for j in (0..=n).filter(|&j| reach[j]) {
                match token {
                    Token::Literal(c) => {
                        if text.get(j) == Some(c) {
                            next[j + 1] = true;
                        }
                    }
                    Token::AnyChar => {
                        if matches!(text.get(j), Some(&c) if c != '/') {
                            next[j + 1] = true;
                        }
                    }
                    Token::AnyRun => {}
                    Token::Set { negated, items } => {
                        if let Some(&c) = text.get(j) {
                            let listed = items.iter().any(|item| item.contains(c));
                            if c != '/' && listed != *negated {
                                next[j + 1] = true;
                            }
                        }
                    }
                    Token::Alternatives(alts) => {
                        for alt in alts {
                            if text[j..].starts_with(alt) {
                                next[j + alt.len()] = true;
                            }
                        }
                    }
                }
            }

            if !next.contains(&true) {
                return false;
            }
            reach = next;
        }

        reach[n]
    }
}

impl FromStr for AddressPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for AddressPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

fn parse_set(chars: &[char], start: usize) -> Result<(Token, usize)> {
    let mut i = start + 1;
    let negated = chars.get(i) == Some(&'!');
    if negated {
        i += 1;
    }

    let mut items = Vec::new();
    loop {
        match chars.get(i) {
            None => return Err(PatternError::UnclosedSet(start)),
            Some(']') => {
                i += 1;
                break;
            }
            Some(&c) => match (chars.get(i + 1), chars.get(i + 2)) {
                (Some('-'), Some(&hi)) if hi != ']' => {
                    items.push(SetItem::Range(c.min(hi), c.max(hi)));
                    i += 3;
                }
                _ => {
                    items.push(SetItem::Single(c));
                    i += 1;
                }
            },
        }
    }

    if items.is_empty() {
        return Err(PatternError::EmptySet(start));
    }
    Ok((Token::Set { negated, items }, i))
}

fn parse_alternatives(chars: &[char], start: usize) -> Result<(Token, usize)> {
    let mut alts = Vec::new();
    let mut current = Vec::new();
    let mut i = start + 1;

    loop {
        match chars.get(i) {
            None => return Err(PatternError::UnclosedGroup(start)),
            Some('}') => {
                alts.push(current);
                return Ok((Token::Alternatives(alts), i + 1));
            }
            Some(',') => alts.push(std::mem::take(&mut current)),
            Some('{') | Some('[') => return Err(PatternError::NestedGroup(i)),
            Some(&c) => current.push(c),
        }
        i += 1;
    }
}

/// Match `candidate` against `pattern`.
///
/// Malformed patterns never match.
pub fn matches(pattern: &str, candidate: &str) -> bool {
    match AddressPattern::parse(pattern) {
        Ok(compiled) => compiled.matches(candidate),
        Err(err) => {
            debug!(pattern, error = %err, "malformed address pattern");
            false
        }
    }
}

/// True if `address` contains any pattern glyph.
pub fn has_wildcards(address: &str) -> bool {
    address.contains(GLYPHS)
}
