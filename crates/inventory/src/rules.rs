//! Per-category quality update rules.
//!
//! Every rule except [`LegendaryItemRule`] runs the same three phases for one
//! time unit:
//!
//! ```text
//! 1. adjust quality for the current day
//! 2. advance sell_in
//! 3. correct quality if the item is now expired
//! ```
//!
//! Each quality step is guarded by `can_increase_quality` /
//! `can_decrease_quality`, so reaching a bound just skips the step. The
//! item's own checks still reject anything the guard lets through.

use gildedrose_core::DomainResult;

use crate::category::Category;
use crate::item::Item;

/// Conjured items degrade this much per step.
pub const CONJURED_DEGRADATION: i32 = 2;

/// Backstage-style bonus kicks in below these `sell_in` values (checked
/// before the day's `sell_in` advance).
pub const FIRST_BONUS_THRESHOLD: i32 = 11;
pub const SECOND_BONUS_THRESHOLD: i32 = 6;

/// State transition for one time unit of a single category.
///
/// Rules are stateless; one instance can serve any number of items.
pub trait QualityUpdateRule: Send + Sync + core::fmt::Debug {
    /// Category this rule is registered under.
    fn category(&self) -> Category;

    /// Advance `item` by one time unit.
    fn update(&self, item: &mut Item) -> DomainResult<()>;
}

fn degrade(item: &mut Item, step: i32) -> DomainResult<()> {
    if item.can_decrease_quality() {
        item.decrease_quality(step)?;
    }
    Ok(())
}

fn improve(item: &mut Item) -> DomainResult<()> {
    if item.can_increase_quality() {
        item.increase_quality(1)?;
    }
    Ok(())
}

/// Loses 1 quality per day, 2 once expired.
#[derive(Debug, Default, Clone, Copy)]
pub struct NormalItemRule;

impl QualityUpdateRule for NormalItemRule {
    fn category(&self) -> Category {
        Category::Normal
    }

    fn update(&self, item: &mut Item) -> DomainResult<()> {
        degrade(item, 1)?;
        item.advance_sell_in();
        if item.is_expired() {
            degrade(item, 1)?;
        }
        Ok(())
    }
}

/// Never changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct LegendaryItemRule;

impl QualityUpdateRule for LegendaryItemRule {
    fn category(&self) -> Category {
        Category::Legendary
    }

    fn update(&self, _item: &mut Item) -> DomainResult<()> {
        Ok(())
    }
}

/// Gains 1 quality per day, 2 once expired, capped at the maximum.
#[derive(Debug, Default, Clone, Copy)]
pub struct AgingItemRule;

impl QualityUpdateRule for AgingItemRule {
    fn category(&self) -> Category {
        Category::Aging
    }

    fn update(&self, item: &mut Item) -> DomainResult<()> {
        improve(item)?;
        item.advance_sell_in();
        if item.is_expired() {
            improve(item)?;
        }
        Ok(())
    }
}

/// Gains 1, 2 or 3 quality per day as the date approaches; worthless once it
/// has passed.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeSensitiveItemRule;

impl QualityUpdateRule for TimeSensitiveItemRule {
    fn category(&self) -> Category {
        Category::TimeSensitive
    }

    fn update(&self, item: &mut Item) -> DomainResult<()> {
        if item.can_increase_quality() {
            item.increase_quality(1)?;

            if item.sell_in() < FIRST_BONUS_THRESHOLD {
                improve(item)?;
            }
            if item.sell_in() < SECOND_BONUS_THRESHOLD {
                improve(item)?;
            }
        }

        item.advance_sell_in();

        if item.is_expired() {
            item.set_quality_to_zero()?;
        }
        Ok(())
    }
}

/// Degrades twice as fast as a normal item.
///
/// Each step is a single decrease of [`CONJURED_DEGRADATION`]. The guard only
/// checks that quality is above zero, so an odd quality left at 1 fails the
/// step with `QualityUnderflow` instead of being clamped.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConjuredItemRule;

impl QualityUpdateRule for ConjuredItemRule {
    fn category(&self) -> Category {
        Category::Conjured
    }

    fn update(&self, item: &mut Item) -> DomainResult<()> {
        degrade(item, CONJURED_DEGRADATION)?;
        item.advance_sell_in();
        if item.is_expired() {
            degrade(item, CONJURED_DEGRADATION)?;
        }
        Ok(())
    }
}
