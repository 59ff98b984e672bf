//! Flat scanner over the inner text of an interpolation.
//!
//! This is not a lexer for the full expression grammar: it only knows enough
//! to cut the text into identifier-like spots and to find the source
//! collection of a `for` comprehension.

/// Opening interpolation marker.
pub const MARKER_OPEN: &str = "${";
/// Doubled opening marker, closed by `}}`.
pub const MARKER_OPEN_DOUBLE: &str = "${{";

/// Multi-character operators that separate spots.
const OPERATOR_DELIMITERS: [&str; 2] = ["&&", "||"];

/// Single-character delimiters. `{`, `}` and `$` cover strings that hold more
/// than one `${...}` segment.
const CHAR_DELIMITERS: [char; 16] = [
    '(', ',', ')', ' ', '!', '-', '*', '/', '%', '>', '<', '=', '?', '{', '}', '$',
];

/// Returns the text between the outer interpolation markers.
///
/// Assumes `input` starts with `${`. Strips three leading characters and two
/// trailing ones when the marker is doubled, otherwise two and one.
pub fn strip_markers(input: &str) -> &str {
    let (prefix, suffix_chars) = if input.starts_with(MARKER_OPEN_DOUBLE) {
        (MARKER_OPEN_DOUBLE.len(), 2)
    } else {
        (MARKER_OPEN.len(), 1)
    };

    let end = input
        .char_indices()
        .rev()
        .nth(suffix_chars - 1)
        .map(|(idx, _)| idx)
        .unwrap_or(0);

    if end <= prefix {
        return "";
    }
    &input[prefix..end]
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Byte offset of the first standalone occurrence of `word` at or after `from`.
fn find_word(text: &str, word: &str, from: usize) -> Option<usize> {
    let mut search_from = from;
    while let Some(rel) = text[search_from..].find(word) {
        let at = search_from + rel;
        let after = at + word.len();
        let bounded_before = text[..at]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let bounded_after = text[after..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));
        if bounded_before && bounded_after {
            return Some(at);
        }
        search_from = after;
    }
    None
}

/// Narrows a `for` comprehension to its source collection expression.
///
/// For `[for k, v in var.users : v.role]` this returns `" var.users "`. Loop
/// variables and the projection after `:` never hold entity references that
/// need resolving. Text that is not a comprehension is returned unchanged.
pub fn comprehension_source(expr: &str) -> &str {
    let Some(for_at) = find_word(expr, "for", 0) else {
        return expr;
    };
    let Some(in_at) = find_word(expr, "in", for_at + 3) else {
        return expr;
    };
    let source_start = in_at + 2;
    match expr[source_start..].find(':') {
        Some(rel) => &expr[source_start..source_start + rel],
        None => expr,
    }
}

/// Splits an expression into candidate spots on operator and punctuation
/// delimiters. Empty spots are dropped.
pub fn candidate_spots(expr: &str) -> Vec<&str> {
    let mut spots = Vec::new();
    let mut spot_start = 0;
    let mut idx = 0;

    while idx < expr.len() {
        let rest = &expr[idx..];
        let operator = OPERATOR_DELIMITERS.iter().find(|op| rest.starts_with(**op));
        let delimiter_len = if let Some(op) = operator {
            op.len()
        } else {
            match rest.chars().next() {
                Some(c) if CHAR_DELIMITERS.contains(&c) => c.len_utf8(),
                Some(c) => {
                    idx += c.len_utf8();
                    continue;
                }
                None => break,
            }
        };

        if idx > spot_start {
            spots.push(&expr[spot_start..idx]);
        }
        idx += delimiter_len;
        spot_start = idx;
    }

    if expr.len() > spot_start {
        spots.push(&expr[spot_start..]);
    }
    spots
}

/// Whether a spot looks like an entity reference.
///
/// Plain literals, dangling property accesses, spreads, and the `count` and
/// `each` loop meta-variables are rejected.
pub fn is_reference_candidate(spot: &str) -> bool {
    spot.contains('.')
        && !spot.starts_with('.')
        && !spot.ends_with("...")
        && !spot.starts_with("count.")
        && !spot.starts_with("each.")
}
