use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::category::{Category, ItemKind, ItemName};

/// Lowest quality any item may have.
pub const MIN_QUALITY: i32 = 0;
/// Highest quality a non-legendary item may have.
pub const MAX_QUALITY: i32 = 50;
/// The fixed quality of every legendary item.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Plain `(name, sellIn, quality)` record as exchanged with inventory sources
/// and sinks. Turning it into an [`Item`] validates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

/// Entity: Item.
///
/// The name (and therefore the category) is immutable; `sell_in` and
/// `quality` only change through the mutators below, which keep the quality
/// invariants intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: ItemName,
    sell_in: i32,
    quality: i32,
}

impl Item {
    /// Validate and create an item.
    pub fn new(name: impl AsRef<str>, sell_in: i32, quality: i32) -> DomainResult<Self> {
        let name = ItemName::new(name)?;
        Self::ensure_initial_quality(&name, quality)?;
        Ok(Self {
            name,
            sell_in,
            quality,
        })
    }

    fn ensure_initial_quality(name: &ItemName, quality: i32) -> DomainResult<()> {
        if quality < MIN_QUALITY {
            return Err(DomainError::validation("quality cannot be negative"));
        }
        if name.is_legendary() {
            if quality != LEGENDARY_QUALITY {
                return Err(DomainError::validation(format!(
                    "legendary items must have quality {LEGENDARY_QUALITY}, got {quality}"
                )));
            }
        } else if quality > MAX_QUALITY {
            return Err(DomainError::validation(format!(
                "quality must be between {MIN_QUALITY} and {MAX_QUALITY} for non-legendary items, got {quality}"
            )));
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn item_name(&self) -> &ItemName {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.name.category()
    }

    pub fn kind(&self) -> ItemKind {
        self.name.kind()
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn is_legendary(&self) -> bool {
        self.name.is_legendary()
    }

    /// Past the sell-by date.
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }

    pub fn can_increase_quality(&self) -> bool {
        !self.is_legendary() && self.quality < MAX_QUALITY
    }

    pub fn can_decrease_quality(&self) -> bool {
        !self.is_legendary() && self.quality > MIN_QUALITY
    }

    fn ensure_mutable(&self) -> DomainResult<()> {
        if self.is_legendary() {
            return Err(DomainError::legendary_immutable(self.name()));
        }
        Ok(())
    }

    fn ensure_step(amount: i32) -> DomainResult<()> {
        if amount < 0 {
            return Err(DomainError::validation(format!(
                "quality step must be non-negative, got {amount}"
            )));
        }
        Ok(())
    }

    /// Raise quality by `amount`. Never clamps: exceeding the maximum is an error.
    pub fn increase_quality(&mut self, amount: i32) -> DomainResult<()> {
        self.ensure_mutable()?;
        Self::ensure_step(amount)?;

        let next = i64::from(self.quality) + i64::from(amount);
        if next > i64::from(MAX_QUALITY) {
            return Err(DomainError::QualityOverflow {
                name: self.name().to_string(),
                quality: self.quality,
                amount,
            });
        }
        self.quality += amount;
        Ok(())
    }

    /// Lower quality by `amount`. Never clamps: dropping below zero is an error.
    pub fn decrease_quality(&mut self, amount: i32) -> DomainResult<()> {
        self.ensure_mutable()?;
        Self::ensure_step(amount)?;

        let next = i64::from(self.quality) - i64::from(amount);
        if next < i64::from(MIN_QUALITY) {
            return Err(DomainError::QualityUnderflow {
                name: self.name().to_string(),
                quality: self.quality,
                amount,
            });
        }
        self.quality -= amount;
        Ok(())
    }

    /// Collapse quality to zero regardless of its current value.
    pub fn set_quality_to_zero(&mut self) -> DomainResult<()> {
        self.ensure_mutable()?;
        self.quality = MIN_QUALITY;
        Ok(())
    }

    /// One day closer to (or further past) the sell-by date. Legendary items
    /// never age.
    pub fn advance_sell_in(&mut self) {
        if self.is_legendary() {
            return;
        }
        self.sell_in = self.sell_in.saturating_sub(1);
    }
}

impl TryFrom<ItemRecord> for Item {
    type Error = DomainError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        Item::new(record.name, record.sell_in, record.quality)
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self {
            name: item.name.to_string(),
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
