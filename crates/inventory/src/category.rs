//! Item classification: category taxonomy, known item kinds, and the
//! `ItemName` value object that binds a name to its detected category.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, ValueObject};

/// Category governing how an item ages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Normal,
    Legendary,
    Aging,
    TimeSensitive,
    Conjured,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Normal,
        Category::Legendary,
        Category::Aging,
        Category::TimeSensitive,
        Category::Conjured,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Normal => "NORMAL",
            Category::Legendary => "LEGENDARY",
            Category::Aging => "AGING",
            Category::TimeSensitive => "TIME_SENSITIVE",
            Category::Conjured => "CONJURED",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::validation(format!("unknown category: {wanted}")))
    }
}

/// Concrete item type recognised by the classifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    Normal,
    Sulfuras,
    AgedBrie,
    BackstagePasses,
    Conjured,
}

impl ItemKind {
    /// Canonical display name of the kind.
    pub fn display_name(self) -> &'static str {
        match self {
            ItemKind::Normal => "Normal Item",
            ItemKind::Sulfuras => "Sulfuras, Hand of Ragnaros",
            ItemKind::AgedBrie => "Aged Brie",
            ItemKind::BackstagePasses => "Backstage passes to a TAFKAL80ETC concert",
            ItemKind::Conjured => "Conjured",
        }
    }
}

impl core::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One row of the classification table.
#[derive(Debug)]
pub struct ClassifierEntry {
    pub kind: ItemKind,
    pub category: Category,
    pub keywords: &'static [&'static str],
}

/// Ordered classification table. First entry with a matching keyword wins.
///
/// A new category is one more row here plus a rule registered with the
/// dispatcher.
pub const CLASSIFIER_TABLE: &[ClassifierEntry] = &[
    ClassifierEntry {
        kind: ItemKind::Sulfuras,
        category: Category::Legendary,
        keywords: &["Sulfuras"],
    },
    ClassifierEntry {
        kind: ItemKind::AgedBrie,
        category: Category::Aging,
        keywords: &["Aged Brie"],
    },
    ClassifierEntry {
        kind: ItemKind::BackstagePasses,
        category: Category::TimeSensitive,
        keywords: &["Backstage passes"],
    },
    ClassifierEntry {
        kind: ItemKind::Conjured,
        category: Category::Conjured,
        keywords: &["Conjured"],
    },
];

fn detect(trimmed: &str) -> (ItemKind, Category) {
    CLASSIFIER_TABLE
        .iter()
        .find(|entry| entry.keywords.iter().any(|kw| trimmed.contains(kw)))
        .map(|entry| (entry.kind, entry.category))
        .unwrap_or((ItemKind::Normal, Category::Normal))
}

fn non_empty_trimmed(name: &str) -> DomainResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyName);
    }
    Ok(trimmed)
}

/// Classify a free-text item name (trimmed, case-sensitive substring match).
pub fn classify(name: &str) -> DomainResult<Category> {
    non_empty_trimmed(name).map(|trimmed| detect(trimmed).1)
}

/// Item name value object: trimmed, non-empty, with its detected kind and
/// category fixed at construction.
#[derive(Debug, Clone)]
pub struct ItemName {
    value: String,
    kind: ItemKind,
    category: Category,
}

impl ItemName {
    pub fn new(name: impl AsRef<str>) -> DomainResult<Self> {
        let trimmed = non_empty_trimmed(name.as_ref())?;
        let (kind, category) = detect(trimmed);
        Ok(Self {
            value: trimmed.to_string(),
            kind,
            category,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_legendary(&self) -> bool {
        self.category == Category::Legendary
    }

    pub fn is_aging(&self) -> bool {
        self.category == Category::Aging
    }

    pub fn is_time_sensitive(&self) -> bool {
        self.category == Category::TimeSensitive
    }

    pub fn is_conjured(&self) -> bool {
        self.category == Category::Conjured
    }

    pub fn is_normal(&self) -> bool {
        self.category == Category::Normal
    }
}

// Kind and category derive from `value`, so comparing `value` is enough.
impl PartialEq for ItemName {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for ItemName {}

impl ValueObject for ItemName {}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for ItemName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_legendary_from_sulfuras_keyword() {
        let name = ItemName::new("Sulfuras, Hand of Ragnaros").unwrap();
        assert_eq!(name.category(), Category::Legendary);
        assert_eq!(name.kind(), ItemKind::Sulfuras);
        assert!(name.is_legendary());
        assert!(!name.is_normal());

        assert!(ItemName::new("Sulfuras").unwrap().is_legendary());
    }

    #[test]
    fn detects_aging_time_sensitive_and_conjured() {
        let brie = ItemName::new("Aged Brie").unwrap();
        assert!(brie.is_aging());
        assert_eq!(brie.kind(), ItemKind::AgedBrie);

        let passes = ItemName::new("Backstage passes to a TAFKAL80ETC concert").unwrap();
        assert!(passes.is_time_sensitive());
        assert_eq!(passes.kind(), ItemKind::BackstagePasses);

        let cake = ItemName::new("Conjured Mana Cake").unwrap();
        assert!(cake.is_conjured());
        assert_eq!(cake.kind(), ItemKind::Conjured);
    }

    #[test]
    fn unknown_names_default_to_normal() {
        for name in ["+5 Dexterity Vest", "Elixir of the Mongoose", "Aged Milk", "Cheese"] {
            assert_eq!(classify(name).unwrap(), Category::Normal, "{name}");
            assert_eq!(ItemName::new(name).unwrap().kind(), ItemKind::Normal);
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(classify("aged brie").unwrap(), Category::Normal);
        assert_eq!(classify("SULFURAS").unwrap(), Category::Normal);
        assert_eq!(classify("conjured").unwrap(), Category::Normal);
        assert_eq!(classify("backstage passes").unwrap(), Category::Normal);
    }

    #[test]
    fn name_is_trimmed_before_matching() {
        let name = ItemName::new("   Aged Brie  ").unwrap();
        assert_eq!(name.as_str(), "Aged Brie");
        assert!(name.is_aging());
        assert_eq!(classify("\tConjured\n").unwrap(), Category::Conjured);
    }

    #[test]
    fn empty_names_are_rejected() {
        assert_eq!(classify("").unwrap_err(), DomainError::EmptyName);
        assert_eq!(classify("   ").unwrap_err(), DomainError::EmptyName);
        assert_eq!(ItemName::new("\t\n").unwrap_err(), DomainError::EmptyName);
    }

    #[test]
    fn first_table_entry_wins_on_multiple_matches() {
        assert_eq!(classify("Conjured Sulfuras").unwrap(), Category::Legendary);
        assert_eq!(classify("Conjured Aged Brie").unwrap(), Category::Aging);
    }

    #[test]
    fn names_compare_by_trimmed_value() {
        assert_eq!(ItemName::new(" Aged Brie").unwrap(), ItemName::new("Aged Brie ").unwrap());
        assert_ne!(ItemName::new("Aged Brie").unwrap(), ItemName::new("Cheese").unwrap());
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("time_sensitive".parse::<Category>().unwrap(), Category::TimeSensitive);
        assert_eq!("LEGENDARY".parse::<Category>().unwrap(), Category::Legendary);
        assert!("ancient".parse::<Category>().unwrap_err().is_validation());
    }

    #[test]
    fn category_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&Category::TimeSensitive).unwrap();
        assert_eq!(json, "\"TIME_SENSITIVE\"");
    }
}
