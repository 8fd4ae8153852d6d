use super::itemset::Itemset;
use std::collections::HashSet;
use std::hash::Hash;

/// Collects one singleton itemset per distinct item, in first-seen order.
pub fn build_base_itemsets<T, Tx>(transactions: &[Tx]) -> Vec<Itemset<T>>
where
    T: Ord + Hash + Clone,
    Tx: AsRef<[T]>,
{
    let mut seen: HashSet<&T> = HashSet::new();
    let mut base_items = Vec::new();

    for transaction in transactions {
        for item in transaction.as_ref() {
            if seen.insert(item) {
                base_items.push(Itemset::singleton(item.clone()));
            }
        }
    }

    base_items
}
