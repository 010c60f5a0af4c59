//! Identifier-to-phrase conversion.
//!
//! Tool results carry field names in whatever convention the upstream API
//! uses - camelCase, PascalCase, snake_case, kebab-case, often with
//! embedded acronyms. These functions turn any of them into a
//! space-separated, capitalized phrase suitable for the rendered output.

/// Convert an identifier into a space-separated, capitalized phrase.
///
/// Separator runs (`_`, `-`, whitespace) collapse to a single space, the
/// first letter of every word is uppercased, and runs of uppercase letters
/// stay together as acronyms. Re-humanizing a humanized phrase returns it
/// unchanged, so output can safely be displayed and fed back in.
///
/// ## Examples
///
/// ```
/// use toolfmt_core::humanize;
///
/// assert_eq!(humanize("propertyName"), "Property Name");
/// assert_eq!(humanize("propertyNameSDK"), "Property Name SDK");
/// assert_eq!(humanize("property_name"), "Property Name");
/// assert_eq!(humanize("property-name-SDK"), "Property Name SDK");
/// assert_eq!(humanize("PropertyName"), "Property Name");
/// ```
#[must_use]
pub fn humanize(identifier: &str) -> String {
    capitalize_words(&split_separators(identifier))
}

/// Humanize then uppercase.
///
/// This is the form used for section titles above a rendered block:
/// `humanize_title("giftCard")` is `"GIFT CARD"`.
#[must_use]
pub fn humanize_title(title: &str) -> String {
    humanize(title).to_uppercase()
}

/// Replace every maximal run of `_`, `-`, and whitespace with a single
/// space, trimming the ends.
fn split_separators(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;
    for c in input.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            // Leading separators are dropped rather than deferred.
            if !out.is_empty() {
                pending_space = true;
            }
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }
    out
}

/// Single forward scan that uppercases word-initial characters and inserts
/// a word boundary before each uppercase run so acronyms survive intact.
fn capitalize_words(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 8);
    let mut i = 0;
    while i < chars.len() {
        let Some(&c) = chars.get(i) else { break };
        if c == ' ' {
            out.push(' ');
            i += 1;
        } else if c.is_uppercase() {
            // New word or acronym: ensure a boundary, then consume the
            // whole uppercase run verbatim.
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
            out.push(c);
            i += 1;
            while let Some(&next) = chars.get(i) {
                if !next.is_uppercase() {
                    break;
                }
                out.push(next);
                i += 1;
            }
        } else {
            // Word-initial lowercase letters (start of output, or right
            // after a space) get uppercased; digits are unaffected by
            // to_uppercase and pass through.
            if out.is_empty() || out.ends_with(' ') {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            i += 1;
        }
    }
    out
}
