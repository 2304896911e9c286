//! The song model built from a stepchart file.

pub mod notes;
pub mod steps;
pub mod timing;

use std::path::PathBuf;

use crate::sm::command::{DisplayBpm, SongVisibility};

use self::{steps::Steps, timing::SongTimingInfo};

/// A song: its metadata, its timeline and every chart of the file.
///
/// Fields whose tag did not appear keep their default value.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Song {
    /// `TITLE`
    pub title: String,
    /// `SUBTITLE`
    pub subtitle: String,
    /// `ARTIST`
    pub artist: String,
    /// `TITLETRANSLIT`, the transliterated title.
    pub title_translit: String,
    /// `SUBTITLETRANSLIT`, the transliterated subtitle.
    pub subtitle_translit: String,
    /// `ARTISTTRANSLIT`, the transliterated artist.
    pub artist_translit: String,
    /// `GENRE`
    pub genre: String,
    /// `CREDIT`, who made the charts.
    pub credit: String,
    /// `BANNER`, path to the banner image.
    pub banner: PathBuf,
    /// `BACKGROUND`, path to the background image.
    pub background: PathBuf,
    /// `LYRICSPATH`, path to the lyrics file.
    pub lyrics: PathBuf,
    /// `CDTITLE`, path to the CD title image.
    pub cd_title: PathBuf,
    /// `MUSIC`, path to the music file.
    pub music: PathBuf,
    /// `MUSICLENGTH`, in seconds.
    pub music_length_seconds: f64,
    /// `FIRSTBEAT`, offset of the first beat in seconds.
    pub first_beat_seconds: f64,
    /// `LASTBEAT`, offset of the last beat in seconds.
    pub last_beat_seconds: f64,
    /// `HASMUSIC`
    pub has_music: bool,
    /// `HASBANNER`
    pub has_banner: bool,
    /// `SAMPLESTART`, where the preview starts in seconds.
    pub sample_start_seconds: f64,
    /// `SAMPLELENGTH`, how long the preview plays in seconds.
    pub sample_length_seconds: f64,
    /// `DISPLAYBPM`
    pub display_bpm: DisplayBpm,
    /// `SELECTABLE`
    pub visibility: SongVisibility,
    /// `NOTES`/`NOTES2`, in file order.
    pub steps: Vec<Steps>,
    /// `OFFSET`, `BPMS` and `STOPS`/`FREEZE`.
    pub timing: SongTimingInfo,
}
