use indexmap::IndexMap;
use serde::Serialize;

/// Symbol addresses, once a pass has assigned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AddressTable {
    addresses: IndexMap<String, usize>,
}

impl AddressTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, symbol: String, address: usize) {
        self.addresses.insert(symbol, address);
    }

    pub fn get(&self, symbol: &str) -> Option<usize> {
        self.addresses.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Move every symbol past a data section of `offset` words placed in
    /// front of it.
    pub fn adjust_for_data_section(&mut self, offset: usize) {
        for address in self.addresses.values_mut() {
            *address += offset;
        }
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for AddressTable {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        Self {
            addresses: iter
                .into_iter()
                .map(|(symbol, address)| (symbol.into(), address))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjust_data_section() {
        let mut table = [("label1", 1), ("label2", 2), ("label3", 3), ("label4", 4)]
            .into_iter()
            .collect::<AddressTable>();

        table.adjust_for_data_section(8);

        let expected = [("label1", 9), ("label2", 10), ("label3", 11), ("label4", 12)]
            .into_iter()
            .collect::<AddressTable>();
        assert_eq!(table, expected);
    }

    #[test]
    fn zero_offset_changes_nothing() {
        let mut table = AddressTable::new();
        table.add("N".to_owned(), 14);
        table.adjust_for_data_section(0);
        assert_eq!(table.get("N"), Some(14));
        assert_eq!(table.get("M"), None);
    }
}
