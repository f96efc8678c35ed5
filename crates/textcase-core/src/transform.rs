//! The four case transforms.
//!
//! Every function here is total: any `&str` (including `""`) maps to a
//! `String` without failing. Case mapping uses the full Unicode tables from
//! `str::to_lowercase` / `char::to_uppercase`, so a single character may
//! expand to several (`ß` uppercases to `SS`).
//!
//! Word-initial letters are uppercased, not titlecased: std has no
//! titlecase mapping, so digraphs like `ǆ` become `Ǆ` rather than `ǅ`.

/// All characters lowercased.
pub fn lowercase(input: &str) -> String {
    input.to_lowercase()
}

/// All characters uppercased.
pub fn uppercase(input: &str) -> String {
    input.to_uppercase()
}

/// Split on whitespace, lowercase the first word, capitalise the first
/// letter of every following word, and join with no separator.
///
/// ```
/// use textcase_core::transform::camel_case;
///
/// assert_eq!(camel_case("hello world"), "helloWorld");
/// assert_eq!(camel_case("  Make   it CAMEL "), "makeItCAMEL");
/// ```
pub fn camel_case(input: &str) -> String {
    let mut words = input.split_whitespace();
    let mut out = String::with_capacity(input.len());

    if let Some(first) = words.next() {
        out.push_str(&first.to_lowercase());
    }
    for word in words {
        out.push_str(&capitalise_first(word));
    }

    out
}

/// Capitalise the first letter of each word. Everything else, including
/// the whitespace between words, is left as it was.
///
/// ```
/// use textcase_core::transform::capitalise_case;
///
/// assert_eq!(capitalise_case("hello world"), "Hello World");
/// assert_eq!(capitalise_case("hello\tmcDonald"), "Hello\tMcDonald");
/// ```
pub fn capitalise_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.chars() {
        if c.is_whitespace() {
            out.push(c);
            at_word_start = true;
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }

    out
}

fn capitalise_first(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase())
        .into_iter()
        .flatten()
        .chain(chars)
        .collect()
}
