/// Takes the first `number` transactions and appends them `iters` more
/// times, e.g. to grow a small sample into a benchmark input.
pub fn duplicate_transactions<T, Tx>(data: &[Tx], number: usize, iters: usize) -> Vec<Vec<T>>
where
    T: Clone,
    Tx: AsRef<[T]>,
{
    let sample = &data[..number.min(data.len())];
    let mut txns = Vec::with_capacity(sample.len() * (iters + 1));

    for _ in 0..=iters {
        txns.extend(sample.iter().map(|transaction| transaction.as_ref().to_vec()));
    }

    txns
}
