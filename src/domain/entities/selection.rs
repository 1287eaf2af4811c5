use super::CatalogEntry;
use std::fmt;

/// Catalog entries picked in one menu turn, in the order they were typed.
///
/// Repeated indices stay repeated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<CatalogEntry>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn package_ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.package_id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CatalogEntry> for Selection {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    NotANumber,
    OutOfRange { index: usize, count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidToken {
    pub token: String,
    pub reason: InvalidReason,
}

impl fmt::Display for InvalidToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            InvalidReason::NotANumber if self.token.is_empty() => {
                write!(f, "empty entry ignored")
            }
            InvalidReason::NotANumber => write!(f, "'{}' is not a number", self.token),
            InvalidReason::OutOfRange { index, count } => {
                write!(f, "{} is not a valid choice (1-{})", index, count)
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParsedSelection {
    pub selection: Selection,
    pub invalid: Vec<InvalidToken>,
}
