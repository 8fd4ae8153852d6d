use super::itemset::Itemset;
use super::storage::SupportTable;
use rayon::prelude::*;
use std::hash::Hash;

/// Survivors of one scan, in candidate order, with their supports.
#[derive(Debug, Clone)]
pub struct ScanOutcome<T> {
    pub survivors: Vec<Itemset<T>>,
    pub supports: SupportTable<T>,
}

impl<T: Hash + Eq> ScanOutcome<T> {
    pub fn empty() -> Self {
        Self { survivors: Vec::new(), supports: SupportTable::new() }
    }
}

impl<T> ScanOutcome<T> {
    pub fn is_empty(&self) -> bool {
        self.survivors.is_empty()
    }
}

/// Turns raw transactions into sorted itemsets so membership tests are a
/// merge walk. Duplicate items inside a transaction collapse.
pub fn normalize_transactions<T, Tx>(transactions: &[Tx]) -> Vec<Itemset<T>>
where
    T: Ord + Clone,
    Tx: AsRef<[T]>,
{
    transactions
        .iter()
        .map(|transaction| Itemset::from(transaction.as_ref()))
        .collect()
}

fn count_occurrences<T: Ord>(candidate: &Itemset<T>, transactions: &[Itemset<T>]) -> usize {
    transactions
        .iter()
        .filter(|transaction| candidate.is_subset(transaction))
        .count()
}

/// Computes the support of every candidate and keeps those with
/// `support >= min_support`.
pub fn scan_itemsets<T>(
    transactions: &[Itemset<T>],
    candidates: &[Itemset<T>],
    min_support: f64,
) -> ScanOutcome<T>
where
    T: Ord + Hash + Clone,
{
    if candidates.is_empty() || transactions.is_empty() {
        return ScanOutcome::empty();
    }

    let counts: Vec<usize> = candidates
        .iter()
        .map(|candidate| count_occurrences(candidate, transactions))
        .collect();

    select_survivors(candidates, &counts, transactions.len(), min_support)
}

/// Same as [`scan_itemsets`], counting candidates on the rayon pool.
pub fn scan_itemsets_parallel<T>(
    transactions: &[Itemset<T>],
    candidates: &[Itemset<T>],
    min_support: f64,
) -> ScanOutcome<T>
where
    T: Ord + Hash + Clone + Send + Sync,
{
    if candidates.is_empty() || transactions.is_empty() {
        return ScanOutcome::empty();
    }

    let counts: Vec<usize> = candidates
        .par_iter()
        .map(|candidate| count_occurrences(candidate, transactions))
        .collect();

    select_survivors(candidates, &counts, transactions.len(), min_support)
}

fn select_survivors<T>(
    candidates: &[Itemset<T>],
    counts: &[usize],
    num_transactions: usize,
    min_support: f64,
) -> ScanOutcome<T>
where
    T: Ord + Hash + Clone,
{
    let length = num_transactions as f64;
    let mut outcome = ScanOutcome::empty();

    for (candidate, &count) in candidates.iter().zip(counts) {
        // Candidates never seen in any transaction are dropped even when
        // min_support <= 0.
        if count == 0 {
            continue;
        }
        let support = count as f64 / length;
        if support >= min_support {
            outcome.survivors.push(candidate.clone());
            outcome.supports.insert(candidate.clone(), support);
        }
    }

    outcome
}
