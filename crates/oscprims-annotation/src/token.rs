//! Splitting annotation text into an address and argument tokens.

use oscprims_types::{validate_address, TypeTag};

use crate::config::AnnotationStyle;
use crate::error::{AnnotationError, Result};

/// Argument text with its optional `(tag)` suffix removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Payload<'a> {
    Bare(&'a str),
    /// Quotes stripped and escapes resolved.
    Quoted(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub payload: Payload<'a>,
    pub tag: Option<TypeTag>,
}

/// Split `text` into a validated address and its parsed argument tokens.
pub(crate) fn tokenize(text: &str, style: AnnotationStyle) -> Result<(&str, Vec<Token<'_>>)> {
    let (address, rest) = match text.split_once(style.address_separator()) {
        Some((address, rest)) => (address, Some(rest)),
        None => (text, None),
    };
    validate_address(address)?;

    let tokens = match rest {
        Some(rest) => split_args(rest, style)?
            .into_iter()
            .map(parse_token)
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };
    Ok((address, tokens))
}

/// Split on the argument separator outside double quotes.
///
/// Space runs count as one separator in the `spaces` style. In the
/// `equalsComma` style every comma separates, so empty tokens are errors.
fn split_args(rest: &str, style: AnnotationStyle) -> Result<Vec<&str>> {
    let separator = style.argument_separator();
    let mut tokens = Vec::new();

    let mut start = 0;
    let mut in_quote = false;
    let mut escaped = false;
    for (i, c) in rest.char_indices() {
        if in_quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_quote = false;
            }
        } else if c == '"' {
            in_quote = true;
        } else if c == separator {
            push_token(&rest[start..i], &mut tokens, style)?;
            start = i + separator.len_utf8();
        }
    }

    if in_quote {
        return Err(AnnotationError::UnbalancedQuote);
    }
    push_token(&rest[start..], &mut tokens, style)?;
    Ok(tokens)
}

fn push_token<'a>(token: &'a str, tokens: &mut Vec<&'a str>, style: AnnotationStyle) -> Result<()> {
    if !token.is_empty() {
        tokens.push(token);
    } else if style == AnnotationStyle::EqualsComma {
        return Err(AnnotationError::EmptyToken(tokens.len()));
    }
    Ok(())
}

fn parse_token(raw: &str) -> Result<Token<'_>> {
    let (payload, tag) = split_tag(raw)?;
    let payload = match unquote(payload)? {
        Some(text) => Payload::Quoted(text),
        None => Payload::Bare(payload),
    };
    Ok(Token { payload, tag })
}

/// Separate a trailing `(x)` suffix. Any single character in the parens
/// counts as a suffix, so an unknown one is an error.
fn split_tag(raw: &str) -> Result<(&str, Option<TypeTag>)> {
    if let Some(inner) = raw.strip_suffix(')') {
        let mut rev = inner.char_indices().rev();
        if let (Some((_, tag)), Some((open, '('))) = (rev.next(), rev.next()) {
            let tag = TypeTag::from_char(tag).ok_or(AnnotationError::UnknownTag(tag))?;
            return Ok((&raw[..open], Some(tag)));
        }
    }
    Ok((raw, None))
}

/// Resolve a quoted payload. `Ok(None)` means the payload is bare.
fn unquote(payload: &str) -> Result<Option<String>> {
    let Some(body) = payload.strip_prefix('"') else {
        if payload.contains('"') {
            return Err(AnnotationError::StrayQuote(payload.to_string()));
        }
        return Ok(None);
    };

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped @ ('"' | '\\')) => out.push(escaped),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => return Err(AnnotationError::UnbalancedQuote),
            },
            '"' if chars.as_str().is_empty() => return Ok(Some(out)),
            '"' => return Err(AnnotationError::StrayQuote(payload.to_string())),
            c => out.push(c),
        }
    }
    Err(AnnotationError::UnbalancedQuote)
}
