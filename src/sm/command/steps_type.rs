//! Step types (game-mode layouts) and the registry resolving their names.
//!
//! The built-in registry is an ordered table from the lower-cased step type name to its track count. The
//! position of a name in this table equals the discriminant of the [`StepsType`] it resolves to, so the
//! table order must follow the enum order.

/// A game-mode layout of a chart, which decides how many tracks a note row has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(usize)]
pub enum StepsType {
    /// Dance single, 4 panels.
    #[default]
    DanceSingle,
    /// Dance double, 8 panels.
    DanceDouble,
    /// Dance couple, 4 panels for each of two players.
    DanceCouple,
    /// Dance solo, 6 panels.
    DanceSolo,
    /// Pump single, 5 panels.
    PumpSingle,
    /// Pump half double, the 6 central panels of a double pad.
    PumpHalfDouble,
    /// Pump double, 10 panels.
    PumpDouble,
    /// Pump couple, 5 panels for each of two players.
    PumpCouple,
    /// EZ2 single.
    Ez2Single,
    /// EZ2 double.
    Ez2Double,
    /// EZ2 real.
    Ez2Real,
    /// Para Para Paradise single.
    ParaSingle,
    /// Para Para Paradise versus.
    ParaVersus,
    /// DS3DDX single.
    Ds3DdxSingle,
    /// beatmania single, 5 keys and a turntable.
    BeatmaniaSingle5,
    /// beatmania double, 5 keys and a turntable per side.
    BeatmaniaDouble5,
    /// beatmania single, 7 keys and a turntable.
    BeatmaniaSingle7,
    /// beatmania double, 7 keys and a turntable per side.
    BeatmaniaDouble7,
    /// Maniax single.
    ManiaxSingle,
    /// Maniax double.
    ManiaxDouble,
    /// Techno single, 4 panels.
    TechnoSingle4,
    /// Techno single, 5 panels.
    TechnoSingle5,
    /// Techno single, 8 panels.
    TechnoSingle8,
    /// Techno double, 4 panels per side.
    TechnoDouble4,
    /// Techno double, 5 panels per side.
    TechnoDouble5,
    /// Pop'n music, 5 buttons.
    PnmFive,
    /// Pop'n music, 9 buttons.
    PnmNine,
    /// Cabinet lights.
    CabinetLights,
}

impl StepsType {
    /// All the step types in declaration order.
    pub const ALL: [Self; 28] = [
        Self::DanceSingle,
        Self::DanceDouble,
        Self::DanceCouple,
        Self::DanceSolo,
        Self::PumpSingle,
        Self::PumpHalfDouble,
        Self::PumpDouble,
        Self::PumpCouple,
        Self::Ez2Single,
        Self::Ez2Double,
        Self::Ez2Real,
        Self::ParaSingle,
        Self::ParaVersus,
        Self::Ds3DdxSingle,
        Self::BeatmaniaSingle5,
        Self::BeatmaniaDouble5,
        Self::BeatmaniaSingle7,
        Self::BeatmaniaDouble7,
        Self::ManiaxSingle,
        Self::ManiaxDouble,
        Self::TechnoSingle4,
        Self::TechnoSingle5,
        Self::TechnoSingle8,
        Self::TechnoDouble4,
        Self::TechnoDouble5,
        Self::PnmFive,
        Self::PnmNine,
        Self::CabinetLights,
    ];

    /// Returns the ordinal of this step type, its position in the built-in registry.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Returns the step type at `ordinal`, if any.
    #[must_use]
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }
}

/// An entry of [`StepsTypeRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepsTypeEntry {
    /// The lower-cased name written in chart files, e.g. `dance-single`.
    pub name: &'static str,
    /// The step type the name resolves to.
    pub steps_type: StepsType,
    /// The number of tracks in a note row.
    pub track_count: usize,
}

impl StepsTypeEntry {
    /// Creates a new entry.
    #[must_use]
    pub const fn new(name: &'static str, steps_type: StepsType, track_count: usize) -> Self {
        Self {
            name,
            steps_type,
            track_count,
        }
    }
}

const BUILTIN_ENTRIES: [StepsTypeEntry; 28] = [
    StepsTypeEntry::new("dance-single", StepsType::DanceSingle, 4),
    StepsTypeEntry::new("dance-double", StepsType::DanceDouble, 8),
    StepsTypeEntry::new("dance-couple", StepsType::DanceCouple, 8),
    StepsTypeEntry::new("dance-solo", StepsType::DanceSolo, 6),
    StepsTypeEntry::new("pump-single", StepsType::PumpSingle, 5),
    StepsTypeEntry::new("pump-halfdouble", StepsType::PumpHalfDouble, 6),
    StepsTypeEntry::new("pump-double", StepsType::PumpDouble, 10),
    StepsTypeEntry::new("pump-couple", StepsType::PumpCouple, 10),
    StepsTypeEntry::new("ez2-single", StepsType::Ez2Single, 5),
    StepsTypeEntry::new("ez2-double", StepsType::Ez2Double, 10),
    StepsTypeEntry::new("ez2-real", StepsType::Ez2Real, 7),
    StepsTypeEntry::new("para-single", StepsType::ParaSingle, 5),
    StepsTypeEntry::new("para-versus", StepsType::ParaVersus, 10),
    StepsTypeEntry::new("ds3ddx-single", StepsType::Ds3DdxSingle, 8),
    StepsTypeEntry::new("bm-single5", StepsType::BeatmaniaSingle5, 6),
    StepsTypeEntry::new("bm-double5", StepsType::BeatmaniaDouble5, 12),
    StepsTypeEntry::new("bm-single7", StepsType::BeatmaniaSingle7, 8),
    StepsTypeEntry::new("bm-double7", StepsType::BeatmaniaDouble7, 16),
    StepsTypeEntry::new("maniax-single", StepsType::ManiaxSingle, 4),
    StepsTypeEntry::new("maniax-double", StepsType::ManiaxDouble, 8),
    StepsTypeEntry::new("techno-single4", StepsType::TechnoSingle4, 4),
    StepsTypeEntry::new("techno-single5", StepsType::TechnoSingle5, 5),
    StepsTypeEntry::new("techno-single8", StepsType::TechnoSingle8, 8),
    StepsTypeEntry::new("techno-double4", StepsType::TechnoDouble4, 8),
    StepsTypeEntry::new("techno-double5", StepsType::TechnoDouble5, 10),
    StepsTypeEntry::new("pnm-five", StepsType::PnmFive, 5),
    StepsTypeEntry::new("pnm-nine", StepsType::PnmNine, 9),
    StepsTypeEntry::new("lights-cabinet", StepsType::CabinetLights, 6),
];

/// Legacy names that are rewritten before looking up the registry.
const LEGACY_ALIASES: [(&str, &str); 2] = [("ez2-single-hard", "ez2-single"), ("para", "para-single")];

/// An ordered, read-only mapping from step type names to their step types and track counts.
///
/// [`StepsTypeRegistry::builtin`] covers the known layouts. Another registry can be built with
/// [`StepsTypeRegistry::new`] and passed through [`crate::sm::ParseConfig::with_registry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepsTypeRegistry<'a> {
    entries: &'a [StepsTypeEntry],
}

impl Default for StepsTypeRegistry<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> StepsTypeRegistry<'a> {
    /// Creates a registry over `entries`. Names must be lower-cased.
    #[must_use]
    pub const fn new(entries: &'a [StepsTypeEntry]) -> Self {
        Self { entries }
    }

    /// Returns the registry of the built-in step types.
    #[must_use]
    pub const fn builtin() -> StepsTypeRegistry<'static> {
        StepsTypeRegistry {
            entries: &BUILTIN_ENTRIES,
        }
    }

    /// Resolves a step type name, case-insensitively and through the legacy aliases.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&'a StepsTypeEntry> {
        let lowered = name.trim().to_ascii_lowercase();
        let canonical = LEGACY_ALIASES
            .iter()
            .find(|(legacy, _)| *legacy == lowered)
            .map_or(lowered.as_str(), |(_, canonical)| canonical);
        self.entries.iter().find(|entry| entry.name == canonical)
    }

    /// Returns the entry of `steps_type`, if registered.
    #[must_use]
    pub fn entry_of(&self, steps_type: StepsType) -> Option<&'a StepsTypeEntry> {
        self.entries
            .iter()
            .find(|entry| entry.steps_type == steps_type)
    }

    /// Returns the track count of `steps_type`, if registered.
    #[must_use]
    pub fn track_count(&self, steps_type: StepsType) -> Option<usize> {
        self.entry_of(steps_type).map(|entry| entry.track_count)
    }

    /// Returns the name of `steps_type`, if registered.
    #[must_use]
    pub fn name_of(&self, steps_type: StepsType) -> Option<&'static str> {
        self.entry_of(steps_type).map(|entry| entry.name)
    }

    /// Returns the entry used when a chart names an unknown step type.
    ///
    /// This is the entry of [`StepsType::DanceSingle`], or the first entry if that is not registered.
    #[must_use]
    pub fn fallback(&self) -> Option<&'a StepsTypeEntry> {
        self.entry_of(StepsType::default())
            .or_else(|| self.entries.first())
    }

    /// Iterates the entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'a StepsTypeEntry> + 'a {
        self.entries.iter()
    }

    /// Returns the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the registry has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
