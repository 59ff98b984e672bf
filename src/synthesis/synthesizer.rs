use tracing::{debug, warn};

use crate::config::DiscardPolicy;
use crate::errors::{HclExprError, Result};
use crate::extraction::lexer::{MARKER_OPEN, MARKER_OPEN_DOUBLE};
use crate::naming::{camel_case, variable_name};
use crate::types::{Expression, Reference, TemplateElement};

/// Suffix given to module outputs on the generated module object.
const MODULE_OUTPUT_SUFFIX: &str = "Output";

/// Builds the member-access chain for one reference.
///
/// The base is the reference's variable name; every segment after the
/// declared name becomes a camel-cased property. The first property of a
/// module reference names an output and is suffixed with `Output`.
pub fn member_chain(reference: &Reference) -> Expression {
    let segments = reference.segments();
    let is_module = segments.first() == Some(&"module");
    let base = Expression::identifier(variable_name(reference));

    segments
        .iter()
        .skip(2)
        .enumerate()
        .fold(base, |object, (index, segment)| {
            let property = if index == 0 && is_module {
                camel_case(&format!("{segment}{MODULE_OUTPUT_SUFFIX}"))
            } else {
                camel_case(segment)
            };
            Expression::member(object, property)
        })
}

/// Interpolation marker pair used by an input string.
#[derive(Debug, Clone, Copy)]
struct Markers {
    open: &'static str,
    close: &'static str,
}

impl Markers {
    fn for_input(input: &str) -> Self {
        if input.starts_with(MARKER_OPEN_DOUBLE) {
            Markers {
                open: MARKER_OPEN_DOUBLE,
                close: "}}",
            }
        } else {
            Markers {
                open: MARKER_OPEN,
                close: "}",
            }
        }
    }

    /// Removes the opening marker from text before the first reference.
    ///
    /// The marker sits right before the reference in `prefix-${var.x}` but
    /// at the very start in `${max(var.x, var.y)}`; the last one is removed.
    fn trim_leading(&self, segment: &str) -> String {
        match segment.rfind(self.open) {
            Some(at) => remove_span(segment, at, self.open.len()),
            None => segment.to_string(),
        }
    }

    /// Removes the closing marker from text after the last reference.
    ///
    /// Covers `${var.x}-suffix` as well as `${max(var.x, var.y)}-suffix`.
    fn trim_trailing(&self, segment: &str) -> String {
        match segment.rfind(self.close) {
            Some(at) => remove_span(segment, at, self.close.len()),
            None => segment.to_string(),
        }
    }

    /// Removes the marker closing the previous reference and the one opening
    /// the next from text between two references.
    fn trim_between(&self, segment: &str) -> String {
        let without_close = match segment.find(self.close) {
            Some(at) => remove_span(segment, at, self.close.len()),
            None => segment.to_string(),
        };
        self.trim_leading(&without_close)
    }
}

fn remove_span(text: &str, at: usize, len: usize) -> String {
    format!("{}{}", &text[..at], &text[at + len..])
}

/// Returns the text around a lone reference that its member chain drops,
/// or `None` when the reference fills the whole interpolation.
fn discarded_text(input: &str, reference: &Reference) -> Option<String> {
    let markers = Markers::for_input(input);
    let before = markers.trim_leading(input.get(..reference.start).unwrap_or_default());
    let after = markers.trim_trailing(input.get(reference.end..).unwrap_or_default());

    if before.is_empty() && after.is_empty() {
        None
    } else {
        Some(format!("{before}{after}"))
    }
}

/// Builds a template from references already sorted by `start`.
fn template(input: &str, refs: &[Reference]) -> Expression {
    let markers = Markers::for_input(input);
    let mut quasis = Vec::with_capacity(refs.len() + 1);
    let mut expressions = Vec::with_capacity(refs.len());
    let mut last_end = 0;

    for (index, reference) in refs.iter().enumerate() {
        // Overlapping spans yield an empty segment rather than a panic.
        let segment = input.get(last_end..reference.start).unwrap_or_default();
        let raw = if index == 0 {
            markers.trim_leading(segment)
        } else {
            markers.trim_between(segment)
        };
        quasis.push(TemplateElement { raw, tail: false });
        expressions.push(member_chain(reference));
        last_end = last_end.max(reference.end);
    }

    let trailing = input.get(last_end..).unwrap_or_default();
    quasis.push(TemplateElement {
        raw: markers.trim_trailing(trailing),
        tail: true,
    });

    Expression::Template {
        quasis,
        expressions,
    }
}

/// Sorts the references by position and builds the expression.
///
/// Also returns the text a lone reference drops, so callers can apply their
/// [`DiscardPolicy`] to it.
fn build(input: &str, refs: &[Reference]) -> (Expression, Option<String>) {
    let mut sorted = refs.to_vec();
    sorted.sort_by_key(|r| r.start);

    match sorted.as_slice() {
        [] => (Expression::string_literal(input), None),
        [single] => (member_chain(single), discarded_text(input, single)),
        many => (template(input, many), None),
    }
}

/// Combines an interpolation string and its references into one expression,
/// applying a [`DiscardPolicy`] to text a lone reference cannot carry.
#[derive(Debug, Clone, Copy, Default)]
pub struct Synthesizer {
    policy: DiscardPolicy,
}

impl Synthesizer {
    pub fn new(policy: DiscardPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> DiscardPolicy {
        self.policy
    }

    /// Synthesizes the expression for `input`.
    ///
    /// - no references: the input as a string literal;
    /// - one reference: its member chain;
    /// - several: a template alternating literal segments and member chains,
    ///   ordered by position.
    ///
    /// Only fails under [`DiscardPolicy::Error`].
    pub fn synthesize(&self, input: &str, refs: &[Reference]) -> Result<Expression> {
        let (expr, discarded) = build(input, refs);
        if let Some(discarded) = discarded {
            if self.policy == DiscardPolicy::Error {
                return Err(HclExprError::DiscardedText {
                    expression: input.to_string(),
                    discarded,
                });
            }
            report_discarded(self.policy, input, &discarded);
        }
        Ok(expr)
    }
}

/// Emits the event for text dropped around a lone reference.
fn report_discarded(policy: DiscardPolicy, input: &str, discarded: &str) {
    match policy {
        DiscardPolicy::Ignore => {
            debug!(input, discarded, "dropping text around single reference");
        }
        DiscardPolicy::Warn => {
            warn!(input, discarded, "dropping text around single reference");
        }
        DiscardPolicy::Error => {}
    }
}

/// Synthesizes an expression for `input` from its references.
///
/// Text dropped around a lone reference is reported with a warning event.
pub fn synthesize(input: &str, refs: &[Reference]) -> Expression {
    let (expr, discarded) = build(input, refs);
    if let Some(discarded) = discarded {
        report_discarded(DiscardPolicy::Warn, input, &discarded);
    }
    expr
}
