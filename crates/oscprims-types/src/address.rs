//! Address invariants shared by every surface that builds a message.

use crate::error::{AddressError, Result};

/// Check that `address` is usable as a message address.
///
/// An address is non-empty, starts with `/`, and contains no whitespace, no
/// `=` and no NUL. A `,` is only allowed inside a `{...}` alternative group, where it
/// separates the alternatives of a pattern.
pub fn validate_address(address: &str) -> Result<()> {
    if address.is_empty() {
        return Err(AddressError::Empty);
    }
    if !address.starts_with('/') {
        return Err(AddressError::MissingLeadingSlash(address.to_string()));
    }

    let mut in_group = false;
    for ch in address.chars() {
        match ch {
            '\0' => return Err(AddressError::Nul(address.to_string())),
            c if c.is_whitespace() => return Err(AddressError::Whitespace(address.to_string())),
            '=' => return Err(AddressError::Equals(address.to_string())),
            '{' => in_group = true,
            '}' => in_group = false,
            ',' if !in_group => return Err(AddressError::Comma(address.to_string())),
            _ => {}
        }
    }

    Ok(())
}
