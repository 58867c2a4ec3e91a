//! Ordinal bank → color mapping

use crate::feed::BankId;
use plotters::style::RGBColor;
use std::collections::HashMap;

/// Ten-color categorical palette, assigned in order of first appearance
pub const CATEGORY10: [RGBColor; 10] = [
    RGBColor(31, 119, 180),  // Blue
    RGBColor(255, 127, 14),  // Orange
    RGBColor(44, 160, 44),   // Green
    RGBColor(214, 39, 40),   // Red
    RGBColor(148, 103, 189), // Purple
    RGBColor(140, 86, 75),   // Brown
    RGBColor(227, 119, 194), // Pink
    RGBColor(127, 127, 127), // Grey
    RGBColor(188, 189, 34),  // Olive
    RGBColor(23, 190, 207),  // Cyan
];

/// Maps bank identifiers to stable display colors.
///
/// Unknown banks get the next palette slot on first lookup, so a color never
/// changes once handed out. The palette wraps after ten banks.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    assigned: HashMap<BankId, usize>,
    next: usize,
}

impl ColorMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-assign colors in the given order
    pub fn with_banks<'a>(banks: impl IntoIterator<Item = &'a BankId>) -> Self {
        let mut map = Self::new();
        for bank in banks {
            map.assign(bank);
        }
        map
    }

    /// Color for a bank, assigning one if needed
    pub fn assign(&mut self, bank: &BankId) -> RGBColor {
        let slot = match self.assigned.get(bank) {
            Some(&slot) => slot,
            None => {
                let slot = self.next;
                self.assigned.insert(bank.clone(), slot);
                self.next += 1;
                slot
            }
        };
        CATEGORY10[slot % CATEGORY10.len()]
    }

    /// Color for a bank already known to the map
    pub fn color_of(&self, bank: &BankId) -> RGBColor {
        let slot = self.assigned.get(bank).copied().unwrap_or(0);
        CATEGORY10[slot % CATEGORY10.len()]
    }

    /// `#rrggbb` form of a bank's color
    pub fn hex_of(&self, bank: &BankId) -> String {
        let RGBColor(r, g, b) = self.color_of(bank);
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}
