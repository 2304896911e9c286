//! Building a [`Song`] from tags.
//!
//! Raw [String] == [lex] ==> [`SongTag`]s (in [`LexOutput`]) == [parse] ==> [`Song`] (in
//! [`ParseOutput`])
//!
//! Every tag is routed through a fixed marker table (see [`dispatch`]) to the field or sub-parser owning
//! it. A tag that cannot be understood only yields a [`ParseWarning`], so parsing always produces a song.
//!
//! [lex]: crate::sm::lex
//! [parse]: crate::sm::parse
//! [`LexOutput`]: crate::sm::lex::LexOutput

pub mod dispatch;
mod metadata;
pub mod notes;
pub mod prompt;
pub mod steps;
pub mod timing;

use std::ops::Range;

use thiserror::Error;

use crate::sm::{
    command::{
        mixin::{SourceRangeMixin, SourceRangeMixinExt},
        steps_type::StepsTypeRegistry,
    },
    lex::tag::{SongTag, TagWithRange},
    model::Song,
};

/// A recoverable anomaly found while building the song. The offending field, segment or tag is skipped
/// or defaulted.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseWarning {
    /// The marker is not known, so the tag was ignored.
    #[error("unknown tag `{0}`, ignoring")]
    UnknownTag(String),
    /// The tag has no value to read.
    #[error("tag `{0}` has no value")]
    MissingValue(String),
    /// The value is not a valid number.
    #[error("`{value}` is not a valid number for `{marker}`")]
    InvalidNumber {
        /// The marker of the tag.
        marker: String,
        /// The offending value.
        value: String,
    },
    /// The value is not a valid `H:M:S` time, so the field was set to 0 seconds.
    #[error("`{value}` is not a valid time for `{marker}`, using 0 seconds")]
    InvalidTime {
        /// The marker of the tag.
        marker: String,
        /// The offending value, components joined by `:`.
        value: String,
    },
    /// The `SELECTABLE` literal is not known.
    #[error("`{0}` is not a valid visibility, expected `YES`, `NO` or `ROULETTE`")]
    UnknownVisibility(String),
    /// A timeline list entry is not an `offset=value` pair, so it was skipped.
    #[error("the expression `{expression}` in `{marker}` is not an `offset=value` pair, skipping it")]
    MalformedSegment {
        /// The marker of the tag.
        marker: String,
        /// The offending list entry.
        expression: String,
    },
    /// A timeline list entry has an invalid offset, so it was skipped.
    #[error("the offset `{value}` in `{marker}` is not valid, skipping it")]
    InvalidSegmentOffset {
        /// The marker of the tag.
        marker: String,
        /// The offending offset.
        value: String,
    },
    /// A timeline list entry has an invalid magnitude, so it was skipped.
    #[error("the value `{value}` in `{marker}` is not valid, skipping it")]
    InvalidSegmentValue {
        /// The marker of the tag.
        marker: String,
        /// The offending magnitude.
        value: String,
    },
    /// An alias tag was ignored because the canonical tag is also present.
    #[error("`{marker}` is ignored because `{by}` is present")]
    SupersededTag {
        /// The ignored marker.
        marker: String,
        /// The marker taking precedence.
        by: String,
    },
    /// A chart tag has too few values, so no chart was added.
    #[error("chart tag has {found} values but at least {required} are required")]
    TooFewChartValues {
        /// The number of values found.
        found: usize,
        /// The number of values required.
        required: usize,
    },
    /// The step type is not registered, so the fallback type was used.
    #[error("unknown step type `{0}`")]
    UnknownStepsType(String),
    /// The difficulty label is not known, so the easy tier was used.
    #[error("unknown difficulty `{0}`, using easy")]
    UnknownDifficulty(String),
    /// The meter is not an integer, so it was left at 0.
    #[error("meter `{0}` is not an integer")]
    InvalidMeter(String),
    /// The radar list does not have the required number of scalars, so radar values are absent.
    #[error("radar values need {expected} scalars but {found} were found")]
    RadarValueCount {
        /// The number of scalars required.
        expected: usize,
        /// The number of scalars found.
        found: usize,
    },
    /// A radar scalar is not a number, so radar values are absent.
    #[error("radar value `{0}` is not a number")]
    InvalidRadarValue(String),
    /// A note row is not as wide as the step type, so it was padded or truncated.
    #[error("row {row} of measure {measure} has {found} tracks but {expected} were expected")]
    NoteRowWidth {
        /// The 0-based measure.
        measure: usize,
        /// The 0-based row in the measure.
        row: usize,
        /// The track count of the step type.
        expected: usize,
        /// The number of symbols found.
        found: usize,
    },
    /// A note grid character is not known, so it was read as empty.
    #[error("unknown note symbol `{0}`")]
    UnknownNoteSymbol(char),
}

/// A parse warning with the span of the tag it was found in.
pub type ParseWarningWithRange = SourceRangeMixin<ParseWarning>;

/// Song parse output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct ParseOutput {
    /// The output song.
    pub song: Song,
    /// Warnings that occurred during parsing.
    pub parse_warnings: Vec<ParseWarningWithRange>,
}

/// The state shared by the handlers while one tag is processed.
///
/// The handlers in [`dispatch`], [`steps`], [`notes`] and [`timing`] record their warnings here. Set
/// the span of the tag being handled with [`ParseContext::set_span`] and take the warnings out with
/// [`ParseContext::into_warnings`].
#[derive(Debug)]
pub struct ParseContext<'r> {
    registry: StepsTypeRegistry<'r>,
    span: Range<usize>,
    warnings: Vec<ParseWarningWithRange>,
}

impl<'r> ParseContext<'r> {
    /// Creates a context resolving step types against `registry`.
    #[must_use]
    pub const fn new(registry: StepsTypeRegistry<'r>) -> Self {
        Self {
            registry,
            span: 0..0,
            warnings: Vec::new(),
        }
    }

    /// Returns the step type registry of this parse.
    #[must_use]
    pub const fn registry(&self) -> StepsTypeRegistry<'r> {
        self.registry
    }

    /// Sets the span that subsequent warnings are attached to.
    pub fn set_span(&mut self, span: Range<usize>) {
        self.span = span;
    }

    /// Takes the recorded warnings out.
    #[must_use]
    pub fn into_warnings(self) -> Vec<ParseWarningWithRange> {
        self.warnings
    }

    /// Records a warning against the tag being processed.
    pub fn warn(&mut self, warning: ParseWarning) {
        log::warn!("{warning}");
        self.warnings
            .push(warning.into_wrapper_range(self.span.clone()));
    }
}

impl Song {
    /// Builds a song from tags, resolving step types against `registry`.
    pub fn from_tags<'a>(
        tags: impl IntoIterator<Item = &'a TagWithRange>,
        registry: StepsTypeRegistry<'_>,
    ) -> ParseOutput {
        let tags: Vec<&TagWithRange> = tags.into_iter().collect();
        let has_stops = tags
            .iter()
            .any(|tag| tag.content().marker == dispatch::STOPS);

        let mut song = Self::default();
        let mut ctx = ParseContext::new(registry);
        for tag in tags {
            ctx.set_span(tag.range());
            let content: &SongTag = tag.content();
            log::trace!("dispatching tag #{}", content.marker);
            if has_stops && content.marker == dispatch::FREEZE {
                ctx.warn(ParseWarning::SupersededTag {
                    marker: dispatch::FREEZE.into(),
                    by: dispatch::STOPS.into(),
                });
                continue;
            }
            match dispatch::handler_for(&content.marker) {
                Some(handler) => handler.apply(&mut song, content, &mut ctx),
                None => ctx.warn(ParseWarning::UnknownTag(content.marker.clone())),
            }
        }

        ParseOutput {
            song,
            parse_warnings: ctx.into_warnings(),
        }
    }
}
