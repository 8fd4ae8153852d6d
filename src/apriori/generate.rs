use super::itemset::Itemset;
use std::collections::HashSet;
use std::hash::Hash;

/// Join step: the distinct unions of every unordered pair of `itemsets`,
/// in the order they are first produced.
///
/// Pairs that share fewer than `k - 1` items produce unions larger than
/// `k + 1`. They are kept; the following scan validates them like any
/// other candidate.
pub fn generate_candidates<T>(itemsets: &[Itemset<T>]) -> Vec<Itemset<T>>
where
    T: Ord + Hash + Clone,
{
    let mut seen: HashSet<Itemset<T>> = HashSet::new();
    let mut new_sets = Vec::new();

    for (index, item) in itemsets.iter().enumerate() {
        for next_item in &itemsets[index + 1..] {
            let union_set = item.union(next_item);
            if !seen.contains(&union_set) {
                seen.insert(union_set.clone());
                new_sets.push(union_set);
            }
        }
    }

    new_sets
}

/// Drops `k + 1` sized candidates that have a `k` sized subset missing
/// from `frequent`, where `k` is the smallest itemset size in `frequent`.
///
/// `frequent` must hold every frequent itemset of size `k` (the survivors
/// of a scan do). Such candidates cannot be frequent, so the scan would
/// reject them anyway. Larger candidates are left alone.
pub fn prune_candidates<T>(candidates: Vec<Itemset<T>>, frequent: &[Itemset<T>]) -> Vec<Itemset<T>>
where
    T: Ord + Hash + Clone,
{
    let Some(level) = frequent.iter().map(Itemset::len).min() else {
        return Vec::new();
    };
    let frequent: HashSet<&Itemset<T>> = frequent.iter().filter(|s| s.len() == level).collect();

    candidates
        .into_iter()
        .filter(|candidate| {
            candidate.len() != level + 1
                || candidate
                    .subsets_without_one()
                    .all(|subset| frequent.contains(&subset))
        })
        .collect()
}
