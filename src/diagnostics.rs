//! Fancy diagnostics support using `ariadne`.
//!
//! This module converts warnings carrying a [`SourceRangeMixin`] span (`LexWarningWithRange`,
//! `ParseWarningWithRange` and the aggregated [`SmWarning`]) into `ariadne::Report`s. The spans are byte
//! offsets into the source text, so ariadne computes rows and columns on its own.
//!
//! # Usage Example
//!
//! ```rust
//! use stepchart_rs::{diagnostics::emit_sm_warnings, sm::parse_sm};
//!
//! let source = "#TITLE:Test;\n#ARTIST:Composer;\n#INVALID:command;\n";
//! let output = parse_sm(source).unwrap();
//!
//! // Output all warnings
//! emit_sm_warnings("test.sm", source, &output.warnings);
//! ```
//!
//! [`SourceRangeMixin`]: crate::sm::command::mixin::SourceRangeMixin

use std::ops::Range;

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::sm::{SmWarning, lex::LexWarningWithRange, parse::ParseWarningWithRange};

/// Simple source container that holds the filename and source text.
///
/// # Usage Example
///
/// ```rust
/// use stepchart_rs::diagnostics::SimpleSource;
///
/// let source_text = "#TITLE:test;\n#ARTIST:composer;\n";
/// let source = SimpleSource::new("test.sm", source_text);
///
/// assert_eq!(source.text(), source_text);
/// assert_eq!(source.name(), "test.sm");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SimpleSource<'a> {
    name: &'a str,
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// A report labelled with the source name and a byte span.
pub type SmReport<'a> = Report<'a, (String, Range<usize>)>;

/// Trait for converting positioned warnings to `ariadne::Report`.
pub trait ToAriadne {
    /// Convert the warning to an ariadne Report against `src`.
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> SmReport<'a>;
}

/// Builds a warning report with one colored label over `range`.
#[must_use]
pub fn build_report<'a>(
    src: &SimpleSource<'a>,
    range: Range<usize>,
    title: &str,
    label_message: impl ToString,
    color: Color,
) -> SmReport<'a> {
    let filename = src.name().to_string();
    Report::build(ReportKind::Warning, (filename.clone(), range.clone()))
        .with_message(title)
        .with_label(
            Label::new((filename, range))
                .with_message(label_message.to_string())
                .with_color(color),
        )
        .finish()
}

impl ToAriadne for LexWarningWithRange {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> SmReport<'a> {
        build_report(
            src,
            self.range(),
            "lex",
            self.content(),
            Color::Yellow,
        )
    }
}

impl ToAriadne for ParseWarningWithRange {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> SmReport<'a> {
        build_report(
            src,
            self.range(),
            "parse",
            self.content(),
            Color::Blue,
        )
    }
}

impl ToAriadne for SmWarning {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> SmReport<'a> {
        match self {
            Self::Lex(warning) => warning.to_report(src),
            Self::Parse(warning) => warning.to_report(src),
        }
    }
}

/// Renders every warning to stderr.
///
/// # Parameters
/// * `name` - Name of the source file, used for display in diagnostic information
/// * `source` - Complete source text the warnings were produced from
/// * `warnings` - List of warnings to display
pub fn emit_sm_warnings<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a SmWarning>,
) {
    let simple = SimpleSource::new(name, source);
    let ariadne_source = Source::from(source);
    for warning in warnings {
        let report = warning.to_report(&simple);
        if let Err(err) = report.eprint((name.to_string(), ariadne_source.clone())) {
            log::error!("failed to render a diagnostic: {err}");
        }
    }
}

/// Collects the reports of every warning without printing them.
#[must_use]
pub fn collect_sm_reports<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a SmWarning>,
) -> Vec<SmReport<'a>> {
    let simple = SimpleSource::new(name, source);
    warnings
        .into_iter()
        .map(|warning| warning.to_report(&simple))
        .collect()
}
