//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Two classes of failure live here:
/// - **validation**: bad input handed to a constructor. Callers reject the
///   record and keep going.
/// - **defect**: a rule tried to break an item invariant. These indicate a bug
///   in the rule table and are never clamped or retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An item name was empty or whitespace-only.
    #[error("validation failed: item name cannot be empty")]
    EmptyName,

    /// A value failed validation (e.g. out-of-range quality).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A rule attempted to mutate a legendary item.
    #[error("cannot modify quality of legendary item '{name}'")]
    LegendaryImmutable { name: String },

    /// A quality increase would exceed the upper bound.
    #[error("quality of '{name}' cannot exceed the maximum (quality: {quality}, increase: {amount})")]
    QualityOverflow { name: String, quality: i32, amount: i32 },

    /// A quality decrease would drop below zero.
    #[error("quality of '{name}' cannot be negative (quality: {quality}, decrease: {amount})")]
    QualityUnderflow { name: String, quality: i32, amount: i32 },

    /// No update rule is registered for a category.
    #[error("no update rule registered for category {0}")]
    UnknownCategory(String),

    /// A batch update failed on a specific item.
    #[error("update failed for item #{index} '{name}': {source}")]
    ItemUpdate {
        index: usize,
        name: String,
        #[source]
        source: Box<DomainError>,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn legendary_immutable(name: impl Into<String>) -> Self {
        Self::LegendaryImmutable { name: name.into() }
    }

    pub fn unknown_category(category: impl core::fmt::Display) -> Self {
        Self::UnknownCategory(category.to_string())
    }

    /// Wrap an error with the position and name of the item it occurred on.
    pub fn at_item(self, index: usize, name: impl Into<String>) -> Self {
        Self::ItemUpdate {
            index,
            name: name.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with any batch context stripped.
    pub fn root(&self) -> &DomainError {
        match self {
            Self::ItemUpdate { source, .. } => source.root(),
            other => other,
        }
    }

    /// Bad input: recoverable by rejecting the record.
    pub fn is_validation(&self) -> bool {
        matches!(self.root(), Self::EmptyName | Self::Validation(_))
    }

    /// Programming defect: should never occur with a correct rule table.
    pub fn is_defect(&self) -> bool {
        !self.is_validation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_not_defects() {
        assert!(DomainError::EmptyName.is_validation());
        assert!(DomainError::validation("quality cannot be negative").is_validation());
        assert!(!DomainError::EmptyName.is_defect());
    }

    #[test]
    fn rule_failures_are_defects() {
        let errs = [
            DomainError::legendary_immutable("Sulfuras"),
            DomainError::QualityOverflow { name: "x".into(), quality: 50, amount: 1 },
            DomainError::QualityUnderflow { name: "x".into(), quality: 0, amount: 1 },
            DomainError::unknown_category("NORMAL"),
        ];
        for e in errs {
            assert!(e.is_defect(), "{e:?} should be a defect");
        }
    }

    #[test]
    fn at_item_keeps_class_and_identifies_item() {
        let err = DomainError::legendary_immutable("Sulfuras").at_item(3, "Sulfuras");
        assert!(err.is_defect());
        assert_eq!(err.root(), &DomainError::legendary_immutable("Sulfuras"));

        let msg = err.to_string();
        assert!(msg.contains("#3"));
        assert!(msg.contains("Sulfuras"));
    }
}
