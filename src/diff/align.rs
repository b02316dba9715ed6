/// One output row of a side-by-side alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignedLine {
    /// Both sides carried the same non-empty text.
    Unified(String),
    Paired(String, String),
}

/// Pair `left[i]` with `right[i]` for every index of the longer sequence.
///
/// A side that runs out contributes empty strings. With `unify_identical`, a
/// non-empty left line equal to its right counterpart becomes a single
/// `Unified` row. No reordering or subsequence matching is attempted.
pub fn align<L, R>(left: &[L], right: &[R], unify_identical: bool) -> Vec<AlignedLine>
where
    L: AsRef<str>,
    R: AsRef<str>,
{
    let n = left.len().max(right.len());
    (0..n)
        .map(|i| {
            let l = left.get(i).map(AsRef::as_ref).unwrap_or("");
            let r = right.get(i).map(AsRef::as_ref).unwrap_or("");
            if unify_identical && !l.is_empty() && l == r {
                AlignedLine::Unified(l.to_string())
            } else {
                AlignedLine::Paired(l.to_string(), r.to_string())
            }
        })
        .collect()
}
