// Collection editing - the single mutation primitive for child sequences
// Every track/part/note edit goes through here, so any change to a project is
// expressible as "replace this subtree with a new value"

/// Build a new sequence with one element appended, replaced or removed.
///
/// - `index` absent, `new_item` present: append.
/// - both present: replace the element at `index`.
/// - `index` present, `new_item` absent: remove the element at `index`.
/// - both absent: no-op.
///
/// An out-of-range index leaves the sequence unchanged, matching the
/// treat-stale-indices-as-no-op rule used throughout the engine. The input is
/// never mutated.
pub fn edit<T: Clone>(items: &[T], index: Option<usize>, new_item: Option<T>) -> Vec<T> {
    match (index, new_item) {
        (Some(index), Some(new_item)) => items
            .iter()
            .enumerate()
            .map(|(i, old)| if i == index { new_item.clone() } else { old.clone() })
            .collect(),
        (Some(index), None) => items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, item)| item.clone())
            .collect(),
        (None, Some(new_item)) => {
            let mut out = items.to_vec();
            out.push(new_item);
            out
        }
        (None, None) => items.to_vec(),
    }
}
