//! Inventory file import.
//!
//! Format: one record per line, `Name,ItemType,SellIn,Quality`. `ItemType` is
//! informational only; the category is always derived from `Name`. Blank lines
//! are skipped, and line numbers in errors are 1-based.

use std::path::{Path, PathBuf};

use thiserror::Error;

use gildedrose_core::DomainError;
use gildedrose_inventory::Item;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read inventory file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `content` is kept for server-side logs and left out of the message.
    #[error("line {line}: invalid inventory line format (expected: Name,ItemType,SellIn,Quality)")]
    Format { line: usize, content: String },

    #[error("line {line}: SellIn and Quality must be integers")]
    InvalidNumber { line: usize, content: String },

    #[error("inventory file {} is outside the import directory", .path.display())]
    OutsideImportRoot { path: PathBuf },

    #[error("line {line}: {source}")]
    InvalidItem {
        line: usize,
        #[source]
        source: DomainError,
    },
}

impl ImportError {
    /// 1-based line of the offending record, if the error is about a record.
    pub fn line(&self) -> Option<usize> {
        match self {
            ImportError::Io { .. } | ImportError::OutsideImportRoot { .. } => None,
            ImportError::Format { line, .. }
            | ImportError::InvalidNumber { line, .. }
            | ImportError::InvalidItem { line, .. } => Some(*line),
        }
    }
}

fn parse_line(line: usize, content: &str) -> Result<Item, ImportError> {
    let parts: Vec<&str> = content.split(',').collect();
    let [name, _item_type, sell_in, quality] = parts.as_slice() else {
        return Err(ImportError::Format {
            line,
            content: content.to_string(),
        });
    };

    let invalid_number = || ImportError::InvalidNumber {
        line,
        content: content.to_string(),
    };
    let sell_in: i32 = sell_in.trim().parse().map_err(|_| invalid_number())?;
    let quality: i32 = quality.trim().parse().map_err(|_| invalid_number())?;

    Item::new(name, sell_in, quality).map_err(|source| ImportError::InvalidItem { line, source })
}

/// Parse inventory text. The first malformed record aborts the import.
pub fn parse_inventory(content: &str) -> Result<Vec<Item>, ImportError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(idx, l)| parse_line(idx + 1, l.trim_end_matches('\r')))
        .collect()
}

/// Read and parse an inventory file.
pub fn load_inventory_file(path: impl AsRef<Path>) -> Result<Vec<Item>, ImportError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let items = parse_inventory(&content)?;
    tracing::debug!(path = %path.display(), count = items.len(), "parsed inventory file");
    Ok(items)
}

/// Resolve `requested` against `root` and make sure the result stays inside it.
///
/// Relative paths are taken from `root`. Symlinks and `..` are resolved before
/// the check, so neither can escape the directory.
pub fn confine_to_root(root: &Path, requested: &Path) -> Result<PathBuf, ImportError> {
    let root = root.canonicalize().map_err(|source| ImportError::Io {
        path: root.to_path_buf(),
        source,
    })?;
    let candidate = root.join(requested);
    let outside = || ImportError::OutsideImportRoot {
        path: requested.to_path_buf(),
    };

    match candidate.canonicalize() {
        Ok(resolved) if resolved.starts_with(&root) => Ok(resolved),
        Ok(_) => Err(outside()),
        // Missing file: only report it as such when its directory is inside `root`.
        Err(source) => match candidate.parent().map(Path::canonicalize) {
            Some(Ok(dir)) if dir.starts_with(&root) => Err(ImportError::Io {
                path: requested.to_path_buf(),
                source,
            }),
            _ => Err(outside()),
        },
    }
}

const SAMPLE_INVENTORY: &[(&str, i32, i32)] = &[
    ("Sword", 30, 50),
    ("Axe", 40, 50),
    ("Halberd", 60, 40),
    ("Aged Brie", 50, 10),
    ("Aged Milk", 20, 20),
    ("Mutton", 10, 10),
    ("Sulfuras, Hand of Ragnaros", 80, 80),
    ("Backstage passes to a TAFKAL80ETC concert", 20, 10),
    ("Backstage passes to a TAFKAL80ETC concert", 10, 10),
    ("Conjured", 15, 50),
    ("Conjured", 20, 50),
    ("Conjured", 20, 40),
    ("Cheese", 5, 5),
    ("Potion of Healing", 10, 10),
    ("Bag of Holding", 10, 50),
    ("Backstage passes to a TAFKAL80ETC concert", 15, 20),
    ("Elixir of the Mongoose", 5, 7),
    ("+5 Dexterity Vest", 10, 20),
    ("Full Plate Mail", 50, 50),
    ("Wooden Shield", 10, 30),
];

/// Built-in demo inventory used when no inventory file is available.
pub fn sample_inventory() -> Vec<Item> {
    SAMPLE_INVENTORY
        .iter()
        .filter_map(|&(name, sell_in, quality)| match Item::new(name, sell_in, quality) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(name, sell_in, quality, error = %e, "skipping invalid sample item");
                None
            }
        })
        .collect()
}
