//! The marker table routing every recognized tag to the field or sub-parser owning it.
//!
//! | Marker | Handler |
//! |---|---|
//! | `TITLE`, `SUBTITLE`, `ARTIST`, `TITLETRANSLIT`, `SUBTITLETRANSLIT`, `ARTISTTRANSLIT`, `GENRE`, `CREDIT` | text |
//! | `BANNER`, `BACKGROUND`, `LYRICSPATH`, `CDTITLE`, `MUSIC` | path |
//! | `MUSICLENGTH`, `FIRSTBEAT`, `LASTBEAT` | float |
//! | `HASMUSIC`, `HASBANNER` | integer as flag |
//! | `SAMPLESTART`, `SAMPLELENGTH` | `H:M:S` time |
//! | `SELECTABLE` | visibility |
//! | `DISPLAYBPM` | display BPM policy |
//! | `OFFSET`, `BPMS`, `STOPS`, `FREEZE` | timeline |
//! | `NOTES`, `NOTES2` | chart |
//! | `MUSICBYTES` | ignored |

use std::path::PathBuf;

use crate::sm::{lex::tag::SongTag, model::Song};

use super::{ParseContext, metadata, steps, timing};

/// The canonical stop marker.
pub const STOPS: &str = "STOPS";
/// The legacy alias of [`STOPS`].
pub const FREEZE: &str = "FREEZE";

/// What to do with the values of a recognized tag.
#[derive(Clone, Copy)]
pub enum Handler {
    /// Assign the first value to a text field.
    Text(fn(&mut Song) -> &mut String),
    /// Assign the first value to a path field.
    Path(fn(&mut Song) -> &mut PathBuf),
    /// Parse the first value as a float.
    Float(fn(&mut Song) -> &mut f64),
    /// Parse the first value as an integer, nonzero meaning `true`.
    Flag(fn(&mut Song) -> &mut bool),
    /// Parse the values as the components of an `H:M:S` time into seconds.
    Time(fn(&mut Song) -> &mut f64),
    /// Parse a `SELECTABLE` literal.
    Visibility,
    /// Parse a `DISPLAYBPM` policy.
    DisplayBpm,
    /// Parse the first beat offset.
    Offset,
    /// Parse tempo changes.
    Bpms,
    /// Parse stops.
    Stops,
    /// Parse a chart.
    Chart,
    /// Recognized but carries nothing for the song.
    Ignore,
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Text(_) => "Text",
            Self::Path(_) => "Path",
            Self::Float(_) => "Float",
            Self::Flag(_) => "Flag",
            Self::Time(_) => "Time",
            Self::Visibility => "Visibility",
            Self::DisplayBpm => "DisplayBpm",
            Self::Offset => "Offset",
            Self::Bpms => "Bpms",
            Self::Stops => "Stops",
            Self::Chart => "Chart",
            Self::Ignore => "Ignore",
        };
        f.write_str(name)
    }
}

const HANDLERS: &[(&str, Handler)] = &[
    ("TITLE", Handler::Text(|song| &mut song.title)),
    ("SUBTITLE", Handler::Text(|song| &mut song.subtitle)),
    ("ARTIST", Handler::Text(|song| &mut song.artist)),
    ("TITLETRANSLIT", Handler::Text(|song| &mut song.title_translit)),
    (
        "SUBTITLETRANSLIT",
        Handler::Text(|song| &mut song.subtitle_translit),
    ),
    ("ARTISTTRANSLIT", Handler::Text(|song| &mut song.artist_translit)),
    ("GENRE", Handler::Text(|song| &mut song.genre)),
    ("CREDIT", Handler::Text(|song| &mut song.credit)),
    ("BANNER", Handler::Path(|song| &mut song.banner)),
    ("BACKGROUND", Handler::Path(|song| &mut song.background)),
    ("LYRICSPATH", Handler::Path(|song| &mut song.lyrics)),
    ("CDTITLE", Handler::Path(|song| &mut song.cd_title)),
    ("MUSIC", Handler::Path(|song| &mut song.music)),
    (
        "MUSICLENGTH",
        Handler::Float(|song| &mut song.music_length_seconds),
    ),
    ("FIRSTBEAT", Handler::Float(|song| &mut song.first_beat_seconds)),
    ("LASTBEAT", Handler::Float(|song| &mut song.last_beat_seconds)),
    ("HASMUSIC", Handler::Flag(|song| &mut song.has_music)),
    ("HASBANNER", Handler::Flag(|song| &mut song.has_banner)),
    (
        "SAMPLESTART",
        Handler::Time(|song| &mut song.sample_start_seconds),
    ),
    (
        "SAMPLELENGTH",
        Handler::Time(|song| &mut song.sample_length_seconds),
    ),
    ("SELECTABLE", Handler::Visibility),
    ("DISPLAYBPM", Handler::DisplayBpm),
    ("OFFSET", Handler::Offset),
    ("BPMS", Handler::Bpms),
    (STOPS, Handler::Stops),
    (FREEZE, Handler::Stops),
    ("NOTES", Handler::Chart),
    ("NOTES2", Handler::Chart),
    ("MUSICBYTES", Handler::Ignore),
];

/// Returns the handler of an upper-cased marker, or `None` if the marker is not recognized.
#[must_use]
pub fn handler_for(marker: &str) -> Option<Handler> {
    HANDLERS
        .iter()
        .find(|(known, _)| *known == marker)
        .map(|&(_, handler)| handler)
}

/// Iterates the recognized markers in table order.
pub fn recognized_markers() -> impl Iterator<Item = &'static str> {
    HANDLERS.iter().map(|&(marker, _)| marker)
}

impl Handler {
    /// Applies the tag to the song, recording warnings in `ctx`.
    pub fn apply(self, song: &mut Song, tag: &SongTag, ctx: &mut ParseContext<'_>) {
        match self {
            Self::Text(field) => metadata::assign_text(field(song), tag, ctx),
            Self::Path(field) => metadata::assign_path(field(song), tag, ctx),
            Self::Float(field) => metadata::assign_float(field(song), tag, ctx),
            Self::Flag(field) => metadata::assign_flag(field(song), tag, ctx),
            Self::Time(field) => metadata::assign_time(field(song), tag, ctx),
            Self::Visibility => metadata::assign_visibility(&mut song.visibility, tag, ctx),
            Self::DisplayBpm => metadata::assign_display_bpm(&mut song.display_bpm, tag, ctx),
            Self::Offset => timing::parse_offset(&mut song.timing, tag, ctx),
            Self::Bpms => timing::parse_bpms(&mut song.timing, tag, ctx),
            Self::Stops => timing::parse_stops(&mut song.timing, tag, ctx),
            Self::Chart => {
                if let Some(steps) = steps::parse_steps(tag, ctx) {
                    song.steps.push(steps);
                }
            }
            Self::Ignore => {}
        }
    }
}
