//! The SM/DWI family stepchart format parser.
//!
//! A stepchart file is a sequence of `#MARKER:value:value...;` tags. This crate turns such text into a
//! [`sm::model::Song`]: its metadata, its tempo/stop timeline and its note charts. Parsing is best-effort,
//! so malformed tags only yield warnings next to the song and never abort the whole parse.
//!
//! ```
//! use stepchart_rs::sm::{SmOutput, parse_sm};
//!
//! let source = "#TITLE:Butterfly;\n#BPMS:0.000=135.000;\n";
//! let SmOutput { song, warnings } = parse_sm(source).expect("source is not empty");
//! assert_eq!(song.title, "Butterfly");
//! assert_eq!(song.timing.bpm_segments.len(), 1);
//! assert!(warnings.is_empty());
//! ```
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "diagnostics")]
#[cfg_attr(docsrs, doc(cfg(feature = "diagnostics")))]
pub mod diagnostics;
pub mod sm;
pub mod util;

pub use sm::{
    ParseConfig, SmError, SmOutput, SmWarning, default_config, parse_sm, parse_sm_with_config,
};
