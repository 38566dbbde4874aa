//! Routes items to the update rule of their category.

use std::collections::HashMap;

use gildedrose_core::{DomainError, DomainResult};

use crate::category::Category;
use crate::item::Item;
use crate::rules::{
    AgingItemRule, ConjuredItemRule, LegendaryItemRule, NormalItemRule, QualityUpdateRule,
    TimeSensitiveItemRule,
};

/// Category → rule registry that advances items by one time unit.
///
/// Build it once at startup and pass it to whoever needs it. It holds no
/// mutable state, so a shared reference is all callers need.
#[derive(Debug)]
pub struct QualityUpdateDispatcher {
    rules: HashMap<Category, Box<dyn QualityUpdateRule>>,
}

impl QualityUpdateDispatcher {
    /// Empty registry: every update fails with `UnknownCategory` until rules
    /// are registered.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Registry with the built-in rule for every category.
    pub fn with_default_rules() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(NormalItemRule);
        dispatcher.register(LegendaryItemRule);
        dispatcher.register(AgingItemRule);
        dispatcher.register(TimeSensitiveItemRule);
        dispatcher.register(ConjuredItemRule);
        dispatcher
    }

    /// Register `rule` under its category, replacing any previous rule.
    pub fn register<R>(&mut self, rule: R) -> &mut Self
    where
        R: QualityUpdateRule + 'static,
    {
        self.rules.insert(rule.category(), Box::new(rule));
        self
    }

    pub fn has_rule(&self, category: Category) -> bool {
        self.rules.contains_key(&category)
    }

    /// Advance a single item by one time unit.
    pub fn update_item(&self, item: &mut Item) -> DomainResult<()> {
        let category = item.category();
        let rule = self
            .rules
            .get(&category)
            .ok_or_else(|| DomainError::unknown_category(category))?;
        rule.update(item)
    }

    /// Advance every item, in order, by one time unit.
    ///
    /// Fail-fast: the first error aborts the batch and names the offending
    /// item. Items before it stay updated.
    pub fn update_all<'a>(&self, items: &'a mut [Item]) -> DomainResult<&'a mut [Item]> {
        for (index, item) in items.iter_mut().enumerate() {
            self.update_item(item)
                .map_err(|e| e.at_item(index, item.name()))?;
        }
        Ok(items)
    }
}

impl Default for QualityUpdateDispatcher {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
