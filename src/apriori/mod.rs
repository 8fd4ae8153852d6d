pub mod base;
pub mod config;
pub mod driver;
pub mod duplicate;
pub mod generate;
pub mod itemset;
pub mod report;
pub mod scan;
pub mod storage;

pub use base::build_base_itemsets;
pub use config::{AprioriConfig, DEFAULT_MIN_SUPPORT};
pub use driver::{mine, mine_default, Apriori, SearchPhase};
pub use duplicate::duplicate_transactions;
pub use generate::{generate_candidates, prune_candidates};
pub use itemset::Itemset;
pub use report::{ReportRow, SupportReport};
pub use scan::{normalize_transactions, scan_itemsets, scan_itemsets_parallel, ScanOutcome};
pub use storage::{FrequentLevel, SupportTable};
