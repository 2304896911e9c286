//! Prompting interface and utilities.
//!
//! An object implementing [`Prompter`] is consulted by the tokenizer whenever a non-chart tag appears a
//! second time. It decides which occurrence survives and whether a warning is recorded.

/// A second occurrence of a non-chart tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct TagDuplication<'a> {
    /// The upper-cased marker of the tag.
    pub marker: &'a str,
    /// The values of the occurrence already kept.
    pub older: &'a [String],
}

/// A choice to handle a duplicated tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DuplicationWorkaround {
    /// Keep the existing one silently.
    UseOlder,
    /// Replace it with the incoming one silently.
    UseNewer,
    /// Keep the existing one and record a warning.
    WarnAndUseOlder,
    /// Replace it with the incoming one and record a warning.
    WarnAndUseNewer,
}

impl DuplicationWorkaround {
    /// Returns whether a warning should be recorded.
    #[must_use]
    pub const fn warns(self) -> bool {
        matches!(self, Self::WarnAndUseOlder | Self::WarnAndUseNewer)
    }

    /// Returns whether the incoming occurrence replaces the existing one.
    #[must_use]
    pub const fn uses_newer(self) -> bool {
        matches!(self, Self::UseNewer | Self::WarnAndUseNewer)
    }
}

/// An interface to decide how duplicated tags are handled.
pub trait Prompter {
    /// Determines a [`DuplicationWorkaround`] for a duplicated tag.
    fn handle_tag_duplication(&self, duplication: TagDuplication<'_>) -> DuplicationWorkaround;
}

impl<P: Prompter + ?Sized> Prompter for &P {
    fn handle_tag_duplication(&self, duplication: TagDuplication<'_>) -> DuplicationWorkaround {
        (**self).handle_tag_duplication(duplication)
    }
}

/// The strategy that always keeps older ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlwaysUseOlder;

impl Prompter for AlwaysUseOlder {
    fn handle_tag_duplication(&self, _: TagDuplication<'_>) -> DuplicationWorkaround {
        DuplicationWorkaround::UseOlder
    }
}

/// The strategy that always takes newer ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlwaysUseNewer;

impl Prompter for AlwaysUseNewer {
    fn handle_tag_duplication(&self, _: TagDuplication<'_>) -> DuplicationWorkaround {
        DuplicationWorkaround::UseNewer
    }
}

/// The strategy that always warns and keeps older ones. This is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlwaysWarnAndUseOlder;

impl Prompter for AlwaysWarnAndUseOlder {
    fn handle_tag_duplication(&self, _: TagDuplication<'_>) -> DuplicationWorkaround {
        DuplicationWorkaround::WarnAndUseOlder
    }
}

/// The strategy that always warns and takes newer ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlwaysWarnAndUseNewer;

impl Prompter for AlwaysWarnAndUseNewer {
    fn handle_tag_duplication(&self, _: TagDuplication<'_>) -> DuplicationWorkaround {
        DuplicationWorkaround::WarnAndUseNewer
    }
}
