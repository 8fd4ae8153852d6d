use super::base::build_base_itemsets;
use super::config::{AprioriConfig, DEFAULT_MIN_SUPPORT};
use super::generate::{generate_candidates, prune_candidates};
use super::itemset::Itemset;
use super::scan::{normalize_transactions, scan_itemsets, scan_itemsets_parallel, ScanOutcome};
use super::storage::SupportTable;
use crate::error::AprioriResult;
use std::hash::Hash;
use tracing::{debug, info, warn};

/// Where the level-wise search currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Init,
    Scanning { level: usize },
    Generating { level: usize },
    Done,
}

/// Level-wise frequent itemset miner.
///
/// With `min_support <= 0` every combination that occurs in some
/// transaction is frequent, so the search visits the whole lattice below
/// the largest transaction. That is exponential in the transaction size.
#[derive(Debug, Clone, Default)]
pub struct Apriori {
    config: AprioriConfig,
}

impl Apriori {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AprioriConfig) -> Self {
        Self { config }
    }

    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.config.min_support = min_support;
        self
    }

    pub fn config(&self) -> &AprioriConfig {
        &self.config
    }

    /// Mines every itemset whose support reaches the configured threshold.
    pub fn mine<T, Tx>(&self, transactions: &[Tx]) -> AprioriResult<SupportTable<T>>
    where
        T: Ord + Hash + Clone + Send + Sync,
        Tx: AsRef<[T]>,
    {
        self.config.validate()?;
        Ok(self.run(transactions))
    }

    fn run<T, Tx>(&self, transactions: &[Tx]) -> SupportTable<T>
    where
        T: Ord + Hash + Clone + Send + Sync,
        Tx: AsRef<[T]>,
    {
        let min_support = self.config.min_support;
        if min_support <= 0.0 {
            warn!(min_support, "non-positive minimum support, every occurring combination is frequent");
        }

        let mut phase = SearchPhase::Init;
        let mut itemsets_support = SupportTable::new();

        if transactions.is_empty() {
            debug!("no transactions, nothing to mine");
            return itemsets_support;
        }

        let baskets = normalize_transactions(transactions);
        let mut candidates = build_base_itemsets(transactions);
        let num_items = candidates.len();
        let mut remaining: Vec<Itemset<T>> = Vec::new();

        loop {
            phase = match phase {
                SearchPhase::Init => SearchPhase::Scanning { level: 1 },
                SearchPhase::Scanning { level } => {
                    let outcome = self.scan(&baskets, &candidates, min_support);
                    debug!(
                        level,
                        candidates = candidates.len(),
                        survivors = outcome.survivors.len(),
                        "scanned level"
                    );

                    let ScanOutcome { survivors, supports } = outcome;
                    itemsets_support.extend(supports);
                    remaining = survivors;

                    if remaining.is_empty() || level >= num_items {
                        SearchPhase::Done
                    } else {
                        SearchPhase::Generating { level }
                    }
                }
                SearchPhase::Generating { level } => {
                    let mut new_sets = generate_candidates(&remaining);
                    if self.config.subset_pruning {
                        let generated = new_sets.len();
                        new_sets = prune_candidates(new_sets, &remaining);
                        debug!(level, generated, kept = new_sets.len(), "pruned candidates");
                    }
                    candidates = new_sets;
                    SearchPhase::Scanning { level: level + 1 }
                }
                SearchPhase::Done => break,
            };
        }

        info!(
            transactions = transactions.len(),
            frequent = itemsets_support.len(),
            max_level = itemsets_support.max_level(),
            "apriori finished"
        );

        itemsets_support
    }

    fn scan<T>(&self, baskets: &[Itemset<T>], candidates: &[Itemset<T>], min_support: f64) -> ScanOutcome<T>
    where
        T: Ord + Hash + Clone + Send + Sync,
    {
        if self.config.parallel {
            scan_itemsets_parallel(baskets, candidates, min_support)
        } else {
            scan_itemsets(baskets, candidates, min_support)
        }
    }
}

/// Mines `transactions` with the given threshold.
///
/// Thresholds outside [0, 1] are accepted: above 1 nothing is frequent,
/// at or below 0 everything that occurs is.
pub fn mine<T, Tx>(transactions: &[Tx], min_support: f64) -> SupportTable<T>
where
    T: Ord + Hash + Clone + Send + Sync,
    Tx: AsRef<[T]>,
{
    Apriori::with_config(AprioriConfig::new(min_support)).run(transactions)
}

/// [`mine`] with a minimum support of 0.01.
pub fn mine_default<T, Tx>(transactions: &[Tx]) -> SupportTable<T>
where
    T: Ord + Hash + Clone + Send + Sync,
    Tx: AsRef<[T]>,
{
    mine(transactions, DEFAULT_MIN_SUPPORT)
}
