use crate::domain::entities::{
    Catalog, InvalidReason, InvalidToken, ParsedSelection, Selection,
};

/// Turns text such as `"1, 3, 7"` into catalog entries.
///
/// Bad tokens are collected as diagnostics and never abort the rest of the
/// input. Order and repeats are preserved.
pub struct SelectionParser {
    delimiter: String,
}

impl SelectionParser {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    pub fn parse(&self, input: &str, catalog: &Catalog) -> ParsedSelection {
        let input = input.trim();
        if input.is_empty() {
            return ParsedSelection::default();
        }

        let mut selection = Selection::new();
        let mut invalid = Vec::new();

        for raw in input.split(self.delimiter.as_str()) {
            let token = raw.trim();
            let index = match token.parse::<usize>() {
                Ok(index) => index,
                Err(_) => {
                    invalid.push(InvalidToken {
                        token: token.to_string(),
                        reason: InvalidReason::NotANumber,
                    });
                    continue;
                }
            };

            match catalog.lookup_by_index(index) {
                Some(entry) => selection.push(entry.clone()),
                None => invalid.push(InvalidToken {
                    token: token.to_string(),
                    reason: InvalidReason::OutOfRange {
                        index,
                        count: catalog.len(),
                    },
                }),
            }
        }

        tracing::debug!(
            "Parsed selection '{}': {} valid, {} invalid",
            input,
            selection.len(),
            invalid.len()
        );

        ParsedSelection { selection, invalid }
    }
}

impl Default for SelectionParser {
    fn default() -> Self {
        Self::new(",")
    }
}
