//! The parser module of the SM/DWI family stepchart format.
//!
//! This module consists of two phases: tokenizing and tag parsing.
//!
//! `lex` module splits the source text into `#MARKER:value...;` tags, dropping `//` comments and
//! settling duplicated tags through a [`Prompter`].
//!
//! `parse` module routes every tag through a fixed marker table into a [`Song`]: metadata, the
//! tempo/stop timeline and the note charts.
//!
//! `command` module provides the argument types shared by both phases, such as [`RowIndex`] and the
//! step type registry.
//!
//! In detail, our policies are:
//!
//! - Support only UTF-8 (as required `&str` to input).
//! - Never abort on malformed content. Anomalies become warnings next to a song.
//! - Keep timeline segments in file order. Sorting is up to the consumer.
//!
//! [`RowIndex`]: command::time::RowIndex

pub mod command;
pub mod lex;
pub mod model;
pub mod parse;
pub mod prelude;

use thiserror::Error;

use self::{
    command::steps_type::StepsTypeRegistry,
    lex::{LexOutput, LexWarningWithRange, cursor::OutOfRange},
    model::Song,
    parse::{
        ParseOutput, ParseWarningWithRange,
        prompt::{AlwaysWarnAndUseOlder, Prompter},
    },
};

/// An error that aborts the whole parse. These are contract violations, not content anomalies.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SmError {
    /// The source was empty or whitespace only.
    #[error("the song file is empty")]
    EmptyInput,
    /// The cursor was driven outside the source.
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),
    /// Strict parsing was requested and the parse produced warnings.
    #[error("the song file has {} warnings", .0.len())]
    Strict(Vec<SmWarning>),
}

/// A recoverable anomaly found while parsing.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmWarning {
    /// A warning from the tokenizer.
    #[error("Warn: lex: {0}")]
    Lex(#[from] LexWarningWithRange),
    /// A warning from the tag parser.
    #[error("Warn: parse: {0}")]
    Parse(#[from] ParseWarningWithRange),
}

/// Output of parsing a stepchart file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct SmOutput {
    /// The parsed song.
    pub song: Song,
    /// Warnings that occurred during parsing, lexing ones first.
    pub warnings: Vec<SmWarning>,
}

impl SmOutput {
    /// Returns the song only if no warning occurred.
    ///
    /// # Errors
    ///
    /// Returns [`SmError::Strict`] with every warning otherwise.
    pub fn into_strict(self) -> Result<Song, SmError> {
        if self.warnings.is_empty() {
            Ok(self.song)
        } else {
            Err(SmError::Strict(self.warnings))
        }
    }
}

/// The settings of one parse.
#[derive(Debug, Clone, Copy)]
pub struct ParseConfig<'r, P> {
    registry: StepsTypeRegistry<'r>,
    prompter: P,
    skip_comments: bool,
}

/// Returns the default settings: the built-in step types, [`AlwaysWarnAndUseOlder`] on duplicated
/// tags and `//` comments skipped.
#[must_use]
pub const fn default_config() -> ParseConfig<'static, AlwaysWarnAndUseOlder> {
    ParseConfig {
        registry: StepsTypeRegistry::builtin(),
        prompter: AlwaysWarnAndUseOlder,
        skip_comments: true,
    }
}

impl<'r, P> ParseConfig<'r, P> {
    /// Replaces the step type registry.
    #[must_use]
    pub fn with_registry<'n>(self, registry: StepsTypeRegistry<'n>) -> ParseConfig<'n, P> {
        ParseConfig {
            registry,
            prompter: self.prompter,
            skip_comments: self.skip_comments,
        }
    }

    /// Replaces the duplicated tag prompter.
    #[must_use]
    pub fn with_prompter<Q: Prompter>(self, prompter: Q) -> ParseConfig<'r, Q> {
        ParseConfig {
            registry: self.registry,
            prompter,
            skip_comments: self.skip_comments,
        }
    }

    /// Sets whether `//` comments are skipped.
    #[must_use]
    pub fn with_comment_skipping(self, skip_comments: bool) -> Self {
        Self {
            skip_comments,
            ..self
        }
    }

    /// Returns the step type registry.
    #[must_use]
    pub const fn registry(&self) -> StepsTypeRegistry<'r> {
        self.registry
    }
}

impl Default for ParseConfig<'static, AlwaysWarnAndUseOlder> {
    fn default() -> Self {
        default_config()
    }
}

/// Parses a stepchart file with [`default_config`].
///
/// # Example
///
/// ```
/// use stepchart_rs::sm::{SmOutput, parse_sm};
///
/// let source = "#TITLE:Max 300;\n#SELECTABLE:ROULETTE;\n#ARTIST:Ω;";
/// let SmOutput { song, warnings } = parse_sm(source).unwrap();
/// println!("Title: {}", song.title);
/// println!("Warnings: {:?}", warnings);
/// ```
///
/// # Errors
///
/// Returns [`SmError::EmptyInput`] if `source` is empty or whitespace only.
pub fn parse_sm(source: &str) -> Result<SmOutput, SmError> {
    parse_sm_with_config(source, default_config())
}

/// Parses a stepchart file with the given settings.
///
/// A step of [`parse_sm`]
///
/// # Errors
///
/// Returns [`SmError::EmptyInput`] if `source` is empty or whitespace only.
pub fn parse_sm_with_config<P: Prompter>(
    source: &str,
    config: ParseConfig<'_, P>,
) -> Result<SmOutput, SmError> {
    let LexOutput { tags, lex_warnings } =
        lex::parse_tags_with(source, config.skip_comments, &config.prompter)?;
    log::info!("tokenized {} tags", tags.len());

    let ParseOutput {
        song,
        parse_warnings,
    } = Song::from_tags(&tags, config.registry);
    log::info!(
        "parsed song `{}` with {} charts, {} warnings",
        song.title,
        song.steps.len(),
        lex_warnings.len() + parse_warnings.len()
    );

    let warnings = lex_warnings
        .into_iter()
        .map(SmWarning::Lex)
        .chain(parse_warnings.into_iter().map(SmWarning::Parse))
        .collect();
    Ok(SmOutput { song, warnings })
}
