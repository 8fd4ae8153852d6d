//! Level-wise frequent itemset mining with the Apriori algorithm.
//!
//! ```
//! use levelwise::apriori::{mine, Itemset};
//!
//! let transactions = vec![vec!["a", "b"], vec!["a", "b", "c"], vec!["a"], vec!["b", "c"]];
//! let supports = mine(&transactions, 0.5);
//!
//! assert_eq!(supports.get(&Itemset::from(vec!["a", "b"])), Some(0.5));
//! assert!(!supports.contains(&Itemset::from(vec!["a", "c"])));
//! ```

pub mod apriori;
pub mod error;

pub use apriori::{mine, mine_default, Apriori, AprioriConfig, Itemset, SupportReport, SupportTable};
pub use error::{AprioriError, AprioriResult};

#[cfg(feature = "python")]
mod python {
    use crate::apriori::{Apriori, AprioriConfig, DEFAULT_MIN_SUPPORT};
    use crate::error::AprioriError;
    use numpy::ndarray::{Array1, Array2, ArrayView2};
    use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray2};
    use pyo3::prelude::*;

    /// Row `i` of a dense 0/1 matrix becomes the items `j` with a non-zero cell.
    fn matrix_to_transactions(transactions: ArrayView2<i32>) -> Vec<Vec<usize>> {
        let num_transactions = transactions.shape()[0];
        let num_items = transactions.shape()[1];

        (0..num_transactions)
            .map(|i| (0..num_items).filter(|&j| transactions[[i, j]] != 0).collect())
            .collect()
    }

    fn to_py_err(err: AprioriError) -> PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }

    #[pyfunction]
    #[pyo3(name = "apriori", signature = (transactions, min_support = DEFAULT_MIN_SUPPORT))]
    fn apriori_py<'py>(
        py: Python<'py>,
        transactions: PyReadonlyArray2<'py, i32>,
        min_support: f64,
    ) -> PyResult<Vec<(Bound<'py, PyArray2<usize>>, Bound<'py, PyArray1<f64>>)>> {
        let transaction_list = matrix_to_transactions(transactions.as_array());
        let miner = Apriori::with_config(AprioriConfig::new(min_support));
        let supports = py
            .allow_threads(|| miner.mine(&transaction_list))
            .map_err(to_py_err)?;

        let mut result = Vec::new();

        for level in supports.levels() {
            if level.is_empty() {
                continue;
            }

            let itemset_size = level.itemset_size;
            let num_itemsets = level.len();
            let data: Vec<usize> = level
                .iter_itemsets()
                .flat_map(|itemset| itemset.iter().copied())
                .collect();
            let actual = data.len();

            let array = Array2::from_shape_vec((num_itemsets, itemset_size), data).map_err(|_| {
                to_py_err(AprioriError::ShapeMismatch {
                    expected: format!("({}, {})", num_itemsets, itemset_size),
                    actual,
                })
            })?;
            let supports = Array1::from_vec(level.supports().to_vec());

            result.push((array.into_pyarray(py), supports.into_pyarray(py)));
        }

        Ok(result)
    }

    #[pymodule]
    fn levelwise(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(apriori_py, m)?)?;
        Ok(())
    }
}
