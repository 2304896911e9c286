//! Small helpers shared by the tokenizer and the sub-parsers.

/// Trait extension utility for [`str`].
pub trait StrExtension {
    /// Returns the string cut at the first `;` terminator and trimmed of surrounding whitespace.
    fn until_terminator(&self) -> &Self;
}

impl StrExtension for str {
    fn until_terminator(&self) -> &Self {
        self.split_once(';').map_or(self, |(head, _)| head).trim()
    }
}

/// Parses a count written either as an integer (`12`) or as an integral decimal (`12.000`).
pub(crate) fn parse_count(value: &str) -> Option<u32> {
    value.parse().ok().or_else(|| {
        let float: f64 = value.parse().ok()?;
        (float >= 0.0 && float.fract() == 0.0 && float <= f64::from(u32::MAX)).then_some(float as u32)
    })
}
