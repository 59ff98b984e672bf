/// Expression synthesis.
///
/// Turns an interpolation string and its resolved references into a string
/// literal, a member-access chain, or a template expression.
mod synthesizer;

pub use synthesizer::{member_chain, synthesize, Synthesizer};
