use super::itemset::Itemset;
use super::storage::SupportTable;
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow<T> {
    pub index: usize,
    pub itemset: Itemset<T>,
    pub support: f64,
}

/// Frequent itemsets ordered by descending support.
///
/// Ties are ordered by itemset size, then by items, so two reports built
/// from equal tables are identical.
#[derive(Debug, Clone, PartialEq)]
pub struct SupportReport<T> {
    rows: Vec<ReportRow<T>>,
}

impl<T: Ord> SupportReport<T> {
    pub fn from_table(table: SupportTable<T>) -> Self {
        let mut entries: Vec<(Itemset<T>, f64)> = table.into_iter().collect();
        entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.len().cmp(&b.0.len()))
                .then_with(|| a.0.cmp(&b.0))
        });

        let rows = entries
            .into_iter()
            .enumerate()
            .map(|(index, (itemset, support))| ReportRow { index, itemset, support })
            .collect();

        Self { rows }
    }
}

impl<T> SupportReport<T> {
    pub fn rows(&self) -> &[ReportRow<T>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReportRow<T>> {
        self.rows.iter()
    }
}

impl<T: fmt::Display> fmt::Display for SupportReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.rows.iter().map(|row| row.itemset.to_string()).collect();
        let width = cells.iter().map(String::len).max().unwrap_or(0).max("itemsets".len());
        let index_width = self.rows.len().saturating_sub(1).to_string().len();

        writeln!(f, "{:>iw$}  {:<w$}  support", "", "itemsets", iw = index_width, w = width)?;
        for (row, cell) in self.rows.iter().zip(&cells) {
            writeln!(
                f,
                "{:>iw$}  {:<w$}  {:.6}",
                row.index,
                cell,
                row.support,
                iw = index_width,
                w = width
            )?;
        }
        Ok(())
    }
}
