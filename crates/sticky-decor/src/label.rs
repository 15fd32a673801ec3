//! Section labels.

use crate::classifier::GroupSize;
use crate::layout::Orientation;
use crate::model::ItemProvider;
use sticky_core::ConfigError;

/// Produces the text drawn for a section.
///
/// Implementations must be pure: a decoration pass may ask for the same
/// label several times in one frame.
pub trait SectionContent {
    fn label_for(&self, position: usize) -> Option<String>;
}

impl<F: Fn(usize) -> Option<String>> SectionContent for F {
    fn label_for(&self, position: usize) -> Option<String> {
        self(position)
    }
}

/// Labels a row by the bucket of its value.
///
/// Forward lists label a section by its upper bound
/// (`floor((value + 1) / group) * group`) and reversed lists by their lower
/// bound (`floor(value / group) * group`). Each stays consistent with the
/// group a section boundary sits next to in that orientation.
pub struct SectionLabeler<P> {
    items: P,
    group: GroupSize,
    delta: i64,
    suffix: String,
}

impl<P: ItemProvider> SectionLabeler<P> {
    pub fn new(items: P, group_size: i64, orientation: Orientation) -> Result<Self, ConfigError> {
        let delta = match orientation {
            Orientation::Forward => 1,
            Orientation::Reverse => 0,
        };
        Ok(Self {
            items,
            group: GroupSize::new(group_size)?,
            delta,
            suffix: "th".to_string(),
        })
    }

    pub fn forward(items: P, group_size: i64) -> Result<Self, ConfigError> {
        Self::new(items, group_size, Orientation::Forward)
    }

    pub fn reverse(items: P, group_size: i64) -> Result<Self, ConfigError> {
        Self::new(items, group_size, Orientation::Reverse)
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn bucket(&self, position: usize) -> Option<i64> {
        let value = self.items.value(position)?;
        self.group.bucket(value, self.delta)
    }
}

impl<P: ItemProvider> SectionContent for SectionLabeler<P> {
    fn label_for(&self, position: usize) -> Option<String> {
        self.bucket(position)
            .map(|bucket| format!("{bucket}{}", self.suffix))
    }
}

/// Labels a row with its own value. Section rows built by the generators
/// already carry their bucket.
pub struct ValueLabel<P> {
    items: P,
    suffix: String,
}

impl<P: ItemProvider> ValueLabel<P> {
    pub fn new(items: P) -> Self {
        Self {
            items,
            suffix: "th".to_string(),
        }
    }
}

impl<P: ItemProvider> SectionContent for ValueLabel<P> {
    fn label_for(&self, position: usize) -> Option<String> {
        self.items
            .value(position)
            .map(|v| format!("{v}{}", self.suffix))
    }
}
