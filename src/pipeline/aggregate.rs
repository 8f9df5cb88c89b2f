//! Directory Grouping
//!
//! Buckets transformed records by their target directory. Buckets are
//! created on first use and keep insertion order, which downstream sorting
//! relies on for modules without a rank keyword in their name.

use std::collections::BTreeMap;

use crate::types::ModuleRecord;

#[derive(Debug, Default)]
pub struct DirectoryGroups {
    groups: BTreeMap<String, Vec<ModuleRecord>>,
}

impl DirectoryGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a record under its own target directory
    pub fn insert(&mut self, record: ModuleRecord) {
        self.groups
            .entry(record.target_directory.clone())
            .or_default()
            .push(record);
    }

    pub fn get(&self, dir: &str) -> Option<&[ModuleRecord]> {
        self.groups.get(dir).map(Vec::as_slice)
    }

    /// Iterate buckets in directory order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ModuleRecord])> {
        self.groups
            .iter()
            .map(|(dir, records)| (dir.as_str(), records.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order_within_bucket() {
        let mut groups = DirectoryGroups::new();
        groups.insert(ModuleRecord::new("Zeta", "core"));
        groups.insert(ModuleRecord::new("Alpha", "core"));
        groups.insert(ModuleRecord::new("Solo", "util"));

        let core = groups.get("core").unwrap();
        assert_eq!(core[0].module_name, "Zeta");
        assert_eq!(core[1].module_name, "Alpha");
        assert_eq!(groups.get("util").unwrap().len(), 1);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_unresolved_records_share_the_empty_bucket() {
        let mut groups = DirectoryGroups::new();
        groups.insert(ModuleRecord::new("Lost", ""));
        groups.insert(ModuleRecord::new("AlsoLost", ""));

        assert_eq!(groups.get("").unwrap().len(), 2);
    }
}
