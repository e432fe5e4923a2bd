//! Pure reorder functions for the section order and for entries within a list.
//!
//! Both follow the same array-move contract: the moving item is removed from
//! its index and reinserted at the target's index, shifting everything in
//! between by one. Unknown ids or `moving == target` return the input unchanged.

use uuid::Uuid;

use crate::models::{Entry, SectionId, SectionOrder};

/// Generic array-move keyed by identity rather than position.
pub fn move_by_key<T, K, F>(items: &[T], key: F, moving: &K, target: &K) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    if moving == target {
        return items.to_vec();
    }
    let from = items.iter().position(|i| key(i) == *moving);
    let to = items.iter().position(|i| key(i) == *target);

    let (Some(from), Some(to)) = (from, to) else {
        return items.to_vec();
    };

    let mut out = items.to_vec();
    let item = out.remove(from);
    out.insert(to, item);
    out
}

pub fn reorder(order: &SectionOrder, moving: SectionId, target: SectionId) -> SectionOrder {
    SectionOrder(move_by_key(order.ids(), |id| *id, &moving, &target))
}

/// Moves an entry by id. Entry contents and ids are untouched.
pub fn reorder_entries<T: Entry>(entries: &[T], moving: Uuid, target: Uuid) -> Vec<T> {
    move_by_key(entries, |e| e.id(), &moving, &target)
}
