use levelwise::apriori::{mine, Apriori, AprioriConfig, Itemset};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn transactions_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(0u8..8, 0..6), 0..24)
}

fn exact_support(itemset: &Itemset<u8>, transactions: &[Vec<u8>]) -> f64 {
    let hits = transactions
        .iter()
        .filter(|transaction| itemset.iter().all(|item| transaction.contains(item)))
        .count();
    hits as f64 / transactions.len() as f64
}

proptest! {
    #[test]
    fn supports_are_exact_and_above_threshold(
        transactions in transactions_strategy(),
        min_support in 0.05f64..1.0,
    ) {
        let supports = mine(&transactions, min_support);
        for (itemset, support) in supports.iter() {
            prop_assert_eq!(support, exact_support(itemset, &transactions));
            prop_assert!(support >= min_support);
        }
    }

    #[test]
    fn support_is_monotonic(
        transactions in transactions_strategy(),
        min_support in 0.05f64..1.0,
    ) {
        let supports = mine(&transactions, min_support);
        for (a, support_a) in supports.iter() {
            for (b, support_b) in supports.iter() {
                if a.is_subset(b) {
                    prop_assert!(support_b <= support_a);
                }
            }
        }
    }

    #[test]
    fn mining_is_idempotent(
        transactions in transactions_strategy(),
        min_support in 0.0f64..1.0,
    ) {
        prop_assert_eq!(mine(&transactions, min_support), mine(&transactions, min_support));
    }

    #[test]
    fn singletons_match_item_frequencies(
        transactions in transactions_strategy(),
        min_support in 0.05f64..1.0,
    ) {
        let supports = mine(&transactions, min_support);

        let mined: BTreeSet<u8> = supports
            .itemsets()
            .filter(|itemset| itemset.len() == 1)
            .map(|itemset| itemset.items()[0])
            .collect();
        let expected: BTreeSet<u8> = transactions
            .iter()
            .flatten()
            .copied()
            .filter(|&item| exact_support(&Itemset::singleton(item), &transactions) >= min_support)
            .collect();

        prop_assert_eq!(mined, expected);
    }

    #[test]
    fn levels_bounded_by_distinct_items(
        transactions in transactions_strategy(),
        min_support in 0.0f64..1.0,
    ) {
        let distinct: BTreeSet<u8> = transactions.iter().flatten().copied().collect();
        let supports = mine(&transactions, min_support);
        prop_assert!(supports.max_level() <= distinct.len());
    }

    #[test]
    fn every_frequent_itemset_is_found(
        transactions in prop::collection::vec(prop::collection::vec(0u8..5, 0..5), 1..16),
        min_support in 0.1f64..1.0,
    ) {
        let supports = mine(&transactions, min_support);

        // brute force over every subset of the 5-item universe
        for mask in 1u32..32 {
            let itemset: Itemset<u8> = (0u8..5).filter(|bit| mask & (1 << bit) != 0).collect();
            let support = exact_support(&itemset, &transactions);
            prop_assert_eq!(supports.contains(&itemset), support >= min_support && support > 0.0);
        }
    }

    #[test]
    fn configuration_does_not_change_result(
        transactions in transactions_strategy(),
        min_support in 0.05f64..1.0,
    ) {
        let baseline = mine(&transactions, min_support);
        let config = AprioriConfig::new(min_support)
            .with_parallel(false)
            .with_subset_pruning(true);
        let pruned = Apriori::with_config(config).mine(&transactions).unwrap();
        prop_assert_eq!(pruned, baseline);
    }
}
