//! Tag tokenizer of the stepchart format.
//!
//! Raw [String] == [lex] ==> [`SongTag`]s (in [`LexOutput`]) == [parse] ==> [`Song`] (in
//! [`ParseOutput`])
//!
//! The tokenizer skips to the first `#`, then repeatedly reads a marker up to the next `:` or `#` and
//! every `:`-prefixed value after it. `//` comments are dropped by the [`Cursor`] so they never reach
//! the tags. A non-chart marker seen twice is handed to the [`Prompter`].
//!
//! [lex]: crate::sm::lex
//! [parse]: crate::sm::parse
//! [`Song`]: crate::sm::model::Song
//! [`ParseOutput`]: crate::sm::parse::ParseOutput

pub mod cursor;
pub mod tag;

use std::collections::HashMap;

use thiserror::Error;

use crate::sm::{
    SmError,
    command::mixin::{SourceRangeMixin, SourceRangeMixinExt},
    parse::prompt::{AlwaysWarnAndUseOlder, Prompter, TagDuplication},
};

use self::{
    cursor::{Cursor, OutOfRange},
    tag::{SongTag, TagWithRange},
};

/// A warning occurred on tokenizing.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexWarning {
    /// A non-chart tag appeared more than once.
    #[error("the song file contains a duplicate `{marker}` tag")]
    DuplicateTag {
        /// The upper-cased marker of the tag.
        marker: String,
    },
}

/// A lex warning with the span of the offending tag.
pub type LexWarningWithRange = SourceRangeMixin<LexWarning>;

/// Lex parsing results, includes tags and warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LexOutput {
    /// The tags in file order, at most one per non-chart marker.
    pub tags: Vec<TagWithRange>,
    /// Warnings that occurred during tokenizing.
    pub lex_warnings: Vec<LexWarningWithRange>,
}

/// Tokenizes the source text into tags, skipping comments and warning on duplicated tags.
///
/// # Errors
///
/// Returns [`SmError::EmptyInput`] if `source` is empty or whitespace only.
pub fn parse_tags(source: &str) -> Result<LexOutput, SmError> {
    parse_tags_with(source, true, AlwaysWarnAndUseOlder)
}

/// Tokenizes the source text into tags with the given comment handling and duplication prompter.
///
/// # Errors
///
/// Returns [`SmError::EmptyInput`] if `source` is empty or whitespace only, or
/// [`SmError::OutOfRange`] if the cursor is driven outside the source.
pub fn parse_tags_with(
    source: &str,
    skip_comments: bool,
    prompter: impl Prompter,
) -> Result<LexOutput, SmError> {
    if source.trim().is_empty() {
        return Err(SmError::EmptyInput);
    }
    log::trace!("tokenizing song file contents of:\n{source}");

    let mut cursor = Cursor::new(source).with_comment_skipping(skip_comments);
    let mut tags: Vec<TagWithRange> = vec![];
    let mut kept_at: HashMap<String, usize> = HashMap::new();
    let mut lex_warnings = vec![];

    cursor.read_until(&['#']);
    while !cursor.is_end() {
        let start = cursor.index();
        cursor.skip(1)?;
        let raw_marker = cursor.read_until(&[':', '#']);
        let marker = SongTag::from_raw(&raw_marker, vec![]).marker;

        let older = if SongTag::is_chart_marker(&marker) {
            None
        } else {
            kept_at.get(&marker).copied()
        };
        let Some(older_idx) = older else {
            let values = read_values(&mut cursor)?;
            let tag = SongTag::from_raw(&raw_marker, values);
            log::trace!("read tag #{} with {} values", tag.marker, tag.values.len());
            if !tag.is_chart() {
                kept_at.insert(tag.marker.clone(), tags.len());
            }
            tags.push(tag.into_wrapper_range(start..cursor.index()));
            continue;
        };

        let older_values = tags
            .get(older_idx)
            .map_or(&[][..], |tag| tag.content().values.as_slice());
        let workaround = prompter.handle_tag_duplication(TagDuplication {
            marker: &marker,
            older: older_values,
        });
        if workaround.uses_newer() {
            let values = read_values(&mut cursor)?;
            let tag = SongTag::from_raw(&raw_marker, values);
            if let Some(slot) = tags.get_mut(older_idx) {
                *slot = tag.into_wrapper_range(start..cursor.index());
            }
        } else if cursor.peek_next().is_some_and(|c| c != '#') {
            cursor.read_until(&['#']);
        }
        if workaround.warns() {
            log::warn!("The song file contains a duplicate '{marker}' tag in it, ignoring.");
            lex_warnings.push(
                LexWarning::DuplicateTag { marker }.into_wrapper_range(start..cursor.index()),
            );
        }
    }

    Ok(LexOutput { tags, lex_warnings })
}

fn read_values(cursor: &mut Cursor<'_>) -> Result<Vec<String>, OutOfRange> {
    let mut values = vec![];
    while cursor.peek_next() == Some(':') {
        cursor.skip(1)?;
        values.push(cursor.read_until(&[':', '#']));
    }
    Ok(values)
}
