//! Prelude module for the stepchart parser.
//!
//! `use stepchart_rs::sm::prelude::*;` imports every public type of the parser at once.

#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{SimpleSource, ToAriadne, collect_sm_reports, emit_sm_warnings};

pub use super::{
    ParseConfig, SmError, SmOutput, SmWarning,
    command::{
        DisplayBpm, SongVisibility, StepsDifficulty,
        mixin::{SourceRangeMixin, SourceRangeMixinExt},
        steps_type::{StepsType, StepsTypeEntry, StepsTypeRegistry},
        time::{ROWS_PER_BEAT, ROWS_PER_MEASURE, RowIndex, convert_offset_to_row},
    },
    default_config,
    lex::{
        LexOutput, LexWarning, LexWarningWithRange,
        cursor::{Cursor, OutOfRange},
        parse_tags, parse_tags_with,
        tag::{SongTag, TagWithRange},
    },
    model::{
        Song,
        notes::{Measure, NoteRow, NoteSymbol, PlacedNote, StepsNoteData},
        steps::{Steps, StepsRadarValues},
        timing::{SongBpmSegment, SongStopSegment, SongTimingInfo},
    },
    parse::{
        ParseOutput, ParseWarning, ParseWarningWithRange,
        prompt::{
            AlwaysUseNewer, AlwaysUseOlder, AlwaysWarnAndUseNewer, AlwaysWarnAndUseOlder,
            DuplicationWorkaround, Prompter, TagDuplication,
        },
    },
    parse_sm, parse_sm_with_config,
};
