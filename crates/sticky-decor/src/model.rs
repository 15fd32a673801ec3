//! List data as the decorations see it.
//!
//! Rows belong to the host; decorations only read them through
//! [`ItemProvider`]. The generators build the demo lists: plain rows valued
//! `1..=count`, optionally with section rows mixed in.

use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Plain,
    /// A row that is itself a section header (the header-row variant).
    Section,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    pub value: i64,
    pub kind: ItemKind,
}

impl Item {
    pub fn plain(value: i64) -> Self {
        Self {
            value,
            kind: ItemKind::Plain,
        }
    }

    pub fn section(value: i64) -> Self {
        Self {
            value,
            kind: ItemKind::Section,
        }
    }

    pub fn is_section(&self) -> bool {
        self.kind == ItemKind::Section
    }
}

/// Read-only positional access to the host's rows.
pub trait ItemProvider {
    fn len(&self) -> usize;

    fn get(&self, position: usize) -> Option<Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn value(&self, position: usize) -> Option<i64> {
        self.get(position).map(|it| it.value)
    }

    fn is_section(&self, position: usize) -> bool {
        self.get(position).is_some_and(|it| it.is_section())
    }
}

impl ItemProvider for [Item] {
    fn len(&self) -> usize {
        <[Item]>::len(self)
    }
    fn get(&self, position: usize) -> Option<Item> {
        <[Item]>::get(self, position).copied()
    }
}

impl ItemProvider for Vec<Item> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }
    fn get(&self, position: usize) -> Option<Item> {
        self.as_slice().get(position).copied()
    }
}

impl<P: ItemProvider + ?Sized> ItemProvider for &P {
    fn len(&self) -> usize {
        (**self).len()
    }
    fn get(&self, position: usize) -> Option<Item> {
        (**self).get(position)
    }
}

impl<P: ItemProvider + ?Sized> ItemProvider for Rc<P> {
    fn len(&self) -> usize {
        (**self).len()
    }
    fn get(&self, position: usize) -> Option<Item> {
        (**self).get(position)
    }
}

/// Plain rows valued `1..=count`.
pub fn generate_items(count: usize) -> Vec<Item> {
    (0..count).map(|i| Item::plain(i as i64 + 1)).collect()
}

/// Plain rows valued `1..=count` with a section row in front of every
/// group. The section row carries its group's upper bucket
/// (`((v + 1) / group) * group`).
pub fn generate_items_with_sections(count: usize, group: i64) -> Vec<Item> {
    let mut list = Vec::with_capacity(count + count / group.max(1) as usize + 1);
    for v in 0..count as i64 {
        if v == 0 || (v + 1).rem_euclid(group) == 0 {
            list.push(Item::section((v + 1).div_euclid(group) * group));
        }
        list.push(Item::plain(v + 1));
    }
    list
}

/// Reverse-layout counterpart of [`generate_items_with_sections`]: section
/// rows follow their group (they are drawn above it once the list is
/// flipped) and carry the lower bucket (`(v / group) * group`). The last
/// group is always closed by a section row.
pub fn generate_items_with_sections_reverse(count: usize, group: i64) -> Vec<Item> {
    let count = count as i64;
    let mut list = Vec::with_capacity(count as usize + count as usize / group.max(1) as usize + 1);
    for v in 0..count {
        if v != 0 && (v + 1).rem_euclid(group) == 0 && v != count - 1 {
            list.push(Item::section(v.div_euclid(group) * group));
        }
        list.push(Item::plain(v + 1));
        if v == count - 1 {
            list.push(Item::section(v.div_euclid(group) * group));
        }
    }
    list
}
