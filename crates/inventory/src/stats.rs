//! Aggregate figures over an inventory snapshot.

use serde::Serialize;

use crate::category::Category;
use crate::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Summary of an inventory (all zero for an empty one).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total_items: usize,
    pub average_quality: f64,
    pub average_sell_in: f64,
    /// Categories in order of first appearance.
    pub items_by_category: Vec<CategoryCount>,
    pub legendary_count: usize,
    pub expired_count: usize,
}

impl InventoryStats {
    pub fn from_items(items: &[Item]) -> Self {
        let mut by_category: Vec<CategoryCount> = Vec::new();
        let mut quality_sum: i64 = 0;
        let mut sell_in_sum: i64 = 0;
        let mut legendary_count = 0;
        let mut expired_count = 0;

        for item in items {
            quality_sum += i64::from(item.quality());
            sell_in_sum += i64::from(item.sell_in());

            let category = item.category();
            match by_category.iter_mut().find(|c| c.category == category) {
                Some(entry) => entry.count += 1,
                None => by_category.push(CategoryCount { category, count: 1 }),
            }

            if item.is_legendary() {
                legendary_count += 1;
            }
            if item.is_expired() {
                expired_count += 1;
            }
        }

        let average = |sum: i64| {
            if items.is_empty() {
                0.0
            } else {
                sum as f64 / items.len() as f64
            }
        };

        Self {
            total_items: items.len(),
            average_quality: average(quality_sum),
            average_sell_in: average(sell_in_sum),
            items_by_category: by_category,
            legendary_count,
            expired_count,
        }
    }
}
