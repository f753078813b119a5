//! Field selection for backup

use std::collections::HashSet;

/// Lower-case every entry of an ignore list so lookups are case-insensitive
pub fn ignore_set<S: AsRef<str>>(ignored: &[S]) -> HashSet<String> {
    ignored
        .iter()
        .map(|s| AsRef::<str>::as_ref(s).to_lowercase())
        .collect()
}

/// Indices of the fields eligible for backup, in field order.
///
/// The field at `title_index` is always excluded, whatever its name. Any
/// other field is excluded when its lower-cased name is in `ignored`, which
/// must already be lower-cased (see [`ignore_set`]).
pub fn select<N>(field_names: &[N], ignored: &HashSet<String>, title_index: usize) -> Vec<usize>
where
    N: AsRef<str>,
{
    let mut eligible = Vec::new();
    for (i, name) in field_names.iter().enumerate() {
        if i == title_index {
            continue;
        }
        let name: &str = name.as_ref();
        if !ignored.contains(&name.to_lowercase()) {
            eligible.push(i);
        }
    }
    eligible
}
