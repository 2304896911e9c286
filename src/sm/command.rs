//! Definitions of tag argument data.
//!
//! Structures in this module are used by the tokenizer, the sub-parsers and the output models.

pub mod mixin;
pub mod steps_type;
pub mod time;

/// The difficulty tier of a chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepsDifficulty {
    /// The beginner tier.
    Beginner,
    /// The easy tier (Basic, Light).
    #[default]
    Easy,
    /// The medium tier (Trick, Another, Standard, Normal).
    Medium,
    /// The hard tier (Maniac, SSR, Heavy, Crazy).
    Hard,
    /// The challenge tier (SManiac, Expert, Oni).
    Challenge,
}

impl StepsDifficulty {
    /// Maps a difficulty label to its tier, case-insensitively. Labels from older releases map onto the
    /// tier that replaced them.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Some(match label.trim().to_ascii_lowercase().as_str() {
            "beginner" => Self::Beginner,
            "easy" | "basic" | "light" => Self::Easy,
            "medium" | "trick" | "another" | "standard" | "normal" | "difficult" => Self::Medium,
            "hard" | "maniac" | "ssr" | "heavy" | "crazy" => Self::Hard,
            "challenge" | "smaniac" | "expert" | "oni" => Self::Challenge,
            _ => return None,
        })
    }

    /// Returns whether a chart description marks the chart as a challenge chart regardless of its label.
    ///
    /// Charts once labeled `SManiac` or `Challenge` in their description were filed under the hard tier.
    #[must_use]
    pub fn description_forces_challenge(description: &str) -> bool {
        let description = description.trim();
        description.eq_ignore_ascii_case("smaniac") || description.eq_ignore_ascii_case("challenge")
    }
}

/// Whether the song is offered on the song selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SongVisibility {
    /// Always selectable.
    #[default]
    Visible,
    /// Hidden from selection.
    Hidden,
    /// Only reachable through roulette.
    RouletteOnly,
}

impl SongVisibility {
    /// Parses the `SELECTABLE` literals `YES`, `NO` and `ROULETTE`. The literals are case-sensitive.
    #[must_use]
    pub fn from_literal(literal: &str) -> Option<Self> {
        match literal {
            "YES" => Some(Self::Visible),
            "NO" => Some(Self::Hidden),
            "ROULETTE" => Some(Self::RouletteOnly),
            _ => None,
        }
    }
}

/// How the BPM of the song is shown on the song selection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayBpm {
    /// No policy was given, so the actual BPM should be shown.
    #[default]
    Unspecified,
    /// A fixed value or range. `min == max` for a single value.
    Specified {
        /// The lower bound shown.
        min: f64,
        /// The upper bound shown.
        max: f64,
    },
    /// Randomly cycling values.
    Random,
}
