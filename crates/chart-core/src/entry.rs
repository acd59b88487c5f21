// File: crates/chart-core/src/entry.rs
// Summary: Entry model (one labeled data point) and the entry set acting as selection controller.
// Notes:
// - `selected` is only changed through `EntrySet`, which keeps at most one entry selected.

use chrono::NaiveDate;
use log::warn;

use crate::color::Color;
use crate::error::ChartError;

#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub value: f64,
    pub label: Option<String>,
    pub value_label: Option<String>,
    pub annotation_label: Option<String>,
    pub annotation_heading_label: Option<String>,
    pub color: Color,
    pub text_color: Color,
    selected: bool,
}

impl Entry {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            label: None,
            value_label: None,
            annotation_label: None,
            annotation_heading_label: None,
            color: Color::BLACK,
            text_color: Color::GRAY,
            selected: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_value_label(mut self, label: impl Into<String>) -> Self {
        self.value_label = Some(label.into());
        self
    }

    /// Callout text shown when the entry is selected: the amount line and its heading.
    pub fn with_annotation(mut self, amount: impl Into<String>, heading: impl Into<String>) -> Self {
        self.annotation_label = Some(amount.into());
        self.annotation_heading_label = Some(heading.into());
        self
    }

    /// Sets the callout heading to the covered period, e.g. `3/14 - 7/14`.
    pub fn with_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.annotation_heading_label =
            Some(format!("{} - {}", start.format("%-m/%-d"), end.format("%-m/%-d")));
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Initial selection state; normalized by `EntrySet::new`.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn is_selected(&self) -> bool { self.selected }

    pub fn has_label(&self) -> bool { non_empty(&self.label) }
    pub fn has_value_label(&self) -> bool { non_empty(&self.value_label) }
}

fn non_empty(s: &Option<String>) -> bool {
    s.as_deref().is_some_and(|s| !s.is_empty())
}

/// Ordered entries owned by a chart. Positions on the x axis follow this order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntrySet {
    entries: Vec<Entry>,
}

impl EntrySet {
    /// Takes ownership of `entries`; if more than one arrives selected only the first stays selected.
    pub fn new(mut entries: Vec<Entry>) -> Self {
        let mut seen = false;
        let mut dropped = 0usize;
        for e in entries.iter_mut().filter(|e| e.selected) {
            if seen {
                e.selected = false;
                dropped += 1;
            }
            seen = true;
        }
        if dropped > 0 {
            warn!("{} extra selected entries were deselected; keeping the first", dropped);
        }
        Self { entries }
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn as_slice(&self) -> &[Entry] { &self.entries }
    pub fn get(&self, index: usize) -> Option<&Entry> { self.entries.get(index) }
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> { self.entries.iter() }

    pub fn selected(&self) -> Option<usize> {
        self.entries.iter().position(|e| e.selected)
    }

    /// Exclusive toggle: flips the entry at `index` and forces every other entry off.
    /// Returns the new state of the toggled entry.
    pub fn apply_selection(&mut self, index: usize) -> Result<bool, ChartError> {
        let len = self.entries.len();
        if index >= len {
            return Err(ChartError::EntryOutOfRange { index, len });
        }
        for (i, e) in self.entries.iter_mut().enumerate() {
            e.selected = if i == index { !e.selected } else { false };
        }
        Ok(self.entries[index].selected)
    }

    /// Selects exactly `index`, or nothing for `None`.
    pub fn select(&mut self, index: Option<usize>) -> Result<(), ChartError> {
        let len = self.entries.len();
        if let Some(i) = index.filter(|&i| i >= len) {
            return Err(ChartError::EntryOutOfRange { index: i, len });
        }
        for (i, e) in self.entries.iter_mut().enumerate() {
            e.selected = Some(i) == index;
        }
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        for e in &mut self.entries {
            e.selected = false;
        }
    }
}

impl From<Vec<Entry>> for EntrySet {
    fn from(entries: Vec<Entry>) -> Self { Self::new(entries) }
}

impl<'a> IntoIterator for &'a EntrySet {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;
    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}
