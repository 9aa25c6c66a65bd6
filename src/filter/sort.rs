use std::collections::HashSet;

/// Sort `values` case-insensitively. The sort is stable, so strings that fold
/// to the same lowercase form keep their input order.
pub fn sort_case_insensitive(values: &mut [String]) {
    values.sort_by_cached_key(|s| s.to_lowercase());
}

/// Drop repeated values from an already sorted list, keeping the first
/// occurrence of each exact string.
///
/// Exact duplicates are contiguous after the sort unless case variants of the
/// same word interleave (`rock`, `Rock`, `rock`); keeping first occurrences
/// handles both shapes.
pub fn dedup_sorted(values: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(values.len());
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

/// The distinct values of `values`, sorted case-insensitively.
pub fn distinct_sorted<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut list: Vec<String> = values.into_iter().map(Into::into).collect();
    sort_case_insensitive(&mut list);
    dedup_sorted(list)
}
