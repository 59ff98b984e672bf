use crate::catalog::NodeKind;
use crate::types::Reference;

/// Splits text into words on non-alphanumeric runs and case boundaries.
///
/// `vpc_idOutput` becomes `["vpc", "id", "Output"]`; `HTTPServer` becomes
/// `["HTTP", "Server"]`. Only ASCII letters and digits survive.
fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();
            let lower_to_upper = prev.is_ascii_lowercase() || prev.is_ascii_digit();
            let acronym_end =
                prev.is_ascii_uppercase() && next.is_some_and(|n| n.is_ascii_lowercase());
            if (lower_to_upper || acronym_end) && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Converts text to camelCase.
///
/// The first word is lowercased and later words are capitalized. A later
/// word that starts with a digit keeps a `_` separator so `foo_1bar` does not
/// collapse into `foo1bar`.
pub fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for (index, word) in split_words(input).iter().enumerate() {
        if index == 0 {
            out.push_str(&word.to_ascii_lowercase());
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if first.is_ascii_digit() {
                out.push('_');
            }
            out.push(first.to_ascii_uppercase());
            out.push_str(&chars.as_str().to_ascii_lowercase());
        }
    }
    out
}

/// Returns the identifier a reference becomes in generated code.
///
/// Variables, locals and modules are named after their declared name alone;
/// resources and data sources combine their first two segments, since their
/// declared names are only unique per type.
pub fn variable_name(reference: &Reference) -> String {
    let mut segments = reference.referencee.full.split('.');
    let first = segments.next().unwrap_or_default();
    let second = segments.next().unwrap_or_default();

    let named_by_declaration = NodeKind::from_str(first)
        .is_some_and(|kind| kind.is_named_by_declaration());

    if named_by_declaration {
        camel_case(second)
    } else {
        camel_case(&format!("{first}_{second}"))
    }
}
