use crate::domain::error::HostError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub display_name: String,
    pub package_id: String,
}

impl CatalogEntry {
    pub fn new(display_name: impl Into<String>, package_id: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            package_id: package_id.into(),
        }
    }
}

/// Applications offered by the software menu, in display order.
///
/// The position of an entry is what the user types, so the order given to
/// [`Catalog::new`] is kept as is and never sorted.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, HostError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.display_name.trim().is_empty() || entry.package_id.trim().is_empty() {
                return Err(HostError::InvalidCatalog(format!(
                    "entry '{}' ({}) has an empty field",
                    entry.display_name, entry.package_id
                )));
            }
            if !seen.insert(entry.display_name.as_str()) {
                return Err(HostError::InvalidCatalog(format!(
                    "duplicate application name '{}'",
                    entry.display_name
                )));
            }
        }

        Ok(Self { entries })
    }

    pub fn builtin() -> Self {
        let entries = [
            ("Google Chrome", "googlechrome"),
            ("Mozilla Firefox", "firefox"),
            ("VLC Media Player", "vlc"),
            ("7-Zip", "7zip"),
            ("Notepad++", "notepadplusplus"),
            ("Adobe Acrobat Reader", "adobereader"),
            ("Zoom", "zoom"),
            ("Microsoft Teams", "microsoft-teams"),
            ("TeamViewer", "teamviewer"),
            ("Java Runtime", "javaruntime"),
        ]
        .into_iter()
        .map(|(name, id)| CatalogEntry::new(name, id))
        .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Resolves a 1-based menu index.
    pub fn lookup_by_index(&self, index: usize) -> Option<&CatalogEntry> {
        index.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
