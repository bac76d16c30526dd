use std::fmt;

use indexmap::{map::Entry, IndexMap};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionEntry {
    pub symbol: String,
    pub line: usize,
    pub offset: usize,
    /// Declared here with `EXTERN`, defined by another module.
    pub external: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageEntry {
    pub symbol: String,
    pub line: usize,
    pub offset: usize,
}

/// Table key of a symbol. Symbols ignore ASCII case, like mnemonics.
pub(crate) fn symbol_key(symbol: &str) -> String {
    symbol.to_ascii_uppercase()
}

/// Labels defined by one module, keyed by upper-cased name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DefinitionTable {
    definitions: IndexMap<String, DefinitionEntry>,
}

impl DefinitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition unless the symbol is already defined.
    ///
    /// On a clash the table is left unchanged and the existing entry is returned.
    pub(crate) fn add(&mut self, entry: DefinitionEntry) -> Result<(), &DefinitionEntry> {
        match self.definitions.entry(symbol_key(&entry.symbol)) {
            Entry::Occupied(existing) => Err(existing.into_mut()),
            Entry::Vacant(slot) => {
                slot.insert(entry);
                Ok(())
            }
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&DefinitionEntry> {
        self.definitions.get(&symbol_key(symbol))
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.definitions.contains_key(&symbol_key(symbol))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DefinitionEntry> {
        self.definitions.values()
    }
}

impl fmt::Display for DefinitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.iter() {
            write!(f, "{} {}:{}", entry.symbol, entry.line, entry.offset)?;
            if entry.external {
                write!(f, " extern")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Every place a module references a symbol, grouped by symbol in line order.
///
/// Spellings that differ only in case share one key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UsageTable {
    usages: IndexMap<String, Vec<UsageEntry>>,
}

impl UsageTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, entry: UsageEntry) {
        self.usages
            .entry(symbol_key(&entry.symbol))
            .or_default()
            .push(entry);
    }

    pub fn get(&self, symbol: &str) -> &[UsageEntry] {
        self.usages
            .get(&symbol_key(symbol))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.usages.contains_key(&symbol_key(symbol))
    }

    /// Number of distinct symbols referenced.
    pub fn len(&self) -> usize {
        self.usages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.usages.is_empty()
    }

    /// Symbols by table key, with their usages.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[UsageEntry])> {
        self.usages
            .iter()
            .map(|(symbol, entries)| (symbol.as_str(), entries.as_slice()))
    }
}

impl fmt::Display for UsageTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, entries) in self.iter() {
            let symbol = entries.first().map_or(key, |e| e.symbol.as_str());
            write!(f, "{}", symbol)?;
            for entry in entries {
                write!(f, " {}:{}", entry.line, entry.offset)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
