use super::itemset::Itemset;
use super::report::SupportReport;
use std::collections::HashMap;

/// Frequent itemsets mapped to their support.
#[derive(Debug, Clone)]
pub struct SupportTable<T> {
    supports: HashMap<Itemset<T>, f64>,
}

/// All frequent itemsets of one size, with supports aligned by index.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentLevel<T> {
    pub itemset_size: usize,
    itemsets: Vec<Itemset<T>>,
    supports: Vec<f64>,
}

impl<T: std::hash::Hash + Eq> SupportTable<T> {
    pub fn new() -> Self {
        Self { supports: HashMap::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { supports: HashMap::with_capacity(capacity) }
    }

    pub fn insert(&mut self, itemset: Itemset<T>, support: f64) -> Option<f64> {
        self.supports.insert(itemset, support)
    }

    pub fn get(&self, itemset: &Itemset<T>) -> Option<f64> {
        self.supports.get(itemset).copied()
    }

    pub fn contains(&self, itemset: &Itemset<T>) -> bool {
        self.supports.contains_key(itemset)
    }

    /// Merges `other` into `self`; entries of `other` win on collision.
    pub fn extend(&mut self, other: SupportTable<T>) {
        self.supports.extend(other.supports);
    }
}

impl<T> SupportTable<T> {
    pub fn len(&self) -> usize {
        self.supports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supports.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset<T>, f64)> {
        self.supports.iter().map(|(itemset, &support)| (itemset, support))
    }

    pub fn itemsets(&self) -> impl Iterator<Item = &Itemset<T>> {
        self.supports.keys()
    }

    /// Size of the largest itemset, 0 when empty.
    pub fn max_level(&self) -> usize {
        self.supports.keys().map(Itemset::len).max().unwrap_or(0)
    }

    pub fn into_inner(self) -> HashMap<Itemset<T>, f64> {
        self.supports
    }
}

impl<T: Ord + Clone> SupportTable<T> {
    /// Groups the table by itemset size. Index `k - 1` holds the size `k`
    /// level; levels are sorted by items so the output is deterministic.
    pub fn levels(&self) -> Vec<FrequentLevel<T>> {
        let mut levels: Vec<FrequentLevel<T>> = Vec::new();

        let mut entries: Vec<(&Itemset<T>, f64)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        for (itemset, support) in entries {
            let size = itemset.len();
            if size == 0 {
                continue;
            }
            while levels.len() < size {
                levels.push(FrequentLevel::new(levels.len() + 1));
            }
            levels[size - 1].add_itemset_with_support(itemset.clone(), support);
        }

        levels
    }

    pub fn into_report(self) -> SupportReport<T> {
        SupportReport::from_table(self)
    }
}

impl<T: std::hash::Hash + Eq> PartialEq for SupportTable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.supports == other.supports
    }
}

impl<T: std::hash::Hash + Eq> Default for SupportTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::hash::Hash + Eq> FromIterator<(Itemset<T>, f64)> for SupportTable<T> {
    fn from_iter<I: IntoIterator<Item = (Itemset<T>, f64)>>(iter: I) -> Self {
        Self { supports: iter.into_iter().collect() }
    }
}

impl<T> IntoIterator for SupportTable<T> {
    type Item = (Itemset<T>, f64);
    type IntoIter = std::collections::hash_map::IntoIter<Itemset<T>, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.supports.into_iter()
    }
}

impl<T> FrequentLevel<T> {
    pub fn new(itemset_size: usize) -> Self {
        Self { itemset_size, itemsets: Vec::new(), supports: Vec::new() }
    }

    pub fn add_itemset_with_support(&mut self, itemset: Itemset<T>, support: f64) -> usize {
        debug_assert_eq!(itemset.len(), self.itemset_size);
        self.itemsets.push(itemset);
        self.supports.push(support);
        self.itemsets.len() - 1
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &Itemset<T> {
        &self.itemsets[idx]
    }

    pub fn support(&self, idx: usize) -> f64 {
        self.supports[idx]
    }

    pub fn supports(&self) -> &[f64] {
        &self.supports
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &Itemset<T>> {
        self.itemsets.iter()
    }
}
