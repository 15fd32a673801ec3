//! Which rows start a section.

use crate::layout::Orientation;
use crate::model::ItemProvider;
use sticky_core::ConfigError;

/// Validated, strictly positive group size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupSize(i64);

impl GroupSize {
    pub fn new(size: i64) -> Result<Self, ConfigError> {
        if size <= 0 {
            return Err(ConfigError::NonPositiveGroupSize(size));
        }
        Ok(Self(size))
    }

    pub fn get(self) -> i64 {
        self.0
    }

    /// True when `value` is the last value of its group. `i64::MAX` closes
    /// nothing.
    pub fn closes_group(self, value: i64) -> bool {
        value
            .checked_add(1)
            .is_some_and(|next| next.rem_euclid(self.0) == 0)
    }

    /// `floor((value + delta) / size) * size`, or `None` past the `i64` range.
    pub fn bucket(self, value: i64, delta: i64) -> Option<i64> {
        value
            .checked_add(delta)?
            .div_euclid(self.0)
            .checked_mul(self.0)
    }
}

/// Decides whether a position starts a section. Out-of-range positions
/// never do.
pub trait SectionCondition {
    fn is_section_start(&self, position: usize) -> bool;
}

impl<F: Fn(usize) -> bool> SectionCondition for F {
    fn is_section_start(&self, position: usize) -> bool {
        self(position)
    }
}

/// Section starts derived from row values and a group size.
///
/// Forward lists start a section at position 0 and at every row whose value
/// closes a group, so the header for the next group is already known when
/// that group's first row comes into view. Reversed lists drop position 0
/// and instead always end on the last position, because the flipped layout
/// terminates sections at the tail.
pub struct SectionBoundaries<P> {
    items: P,
    group: GroupSize,
    orientation: Orientation,
}

impl<P: ItemProvider> SectionBoundaries<P> {
    pub fn new(items: P, group_size: i64, orientation: Orientation) -> Result<Self, ConfigError> {
        let group = GroupSize::new(group_size)?;
        log::debug!("section boundaries: group={group_size} orientation={orientation:?}");
        Ok(Self {
            items,
            group,
            orientation,
        })
    }

    pub fn forward(items: P, group_size: i64) -> Result<Self, ConfigError> {
        Self::new(items, group_size, Orientation::Forward)
    }

    pub fn reverse(items: P, group_size: i64) -> Result<Self, ConfigError> {
        Self::new(items, group_size, Orientation::Reverse)
    }

    pub fn group(&self) -> GroupSize {
        self.group
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn items(&self) -> &P {
        &self.items
    }
}

impl<P: ItemProvider> SectionCondition for SectionBoundaries<P> {
    fn is_section_start(&self, position: usize) -> bool {
        let len = self.items.len();
        let Some(value) = self.items.value(position) else {
            return false;
        };
        match self.orientation {
            Orientation::Forward => position == 0 || self.group.closes_group(value),
            Orientation::Reverse => {
                (position != 0 && self.group.closes_group(value)) || position + 1 == len
            }
        }
    }
}

/// Section starts are the rows the host marked as section rows.
pub struct SectionItems<P>(pub P);

impl<P: ItemProvider> SectionCondition for SectionItems<P> {
    fn is_section_start(&self, position: usize) -> bool {
        self.0.is_section(position)
    }
}
