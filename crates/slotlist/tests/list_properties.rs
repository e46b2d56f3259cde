//! # List Property Tests
//!
//! Behavioural guarantees of the array-backed list:
//!
//! 1. **Capacity**: a full list refuses inserts without changing state
//! 2. **Recycling**: released cells come back most-recent-first
//! 3. **Ordering, search, cursor, clear** semantics
//!
//! Run with: cargo test -p slotlist --test list_properties

use slotlist::{ArenaError, ArrayLinkedList, CellIndex, ListError};

fn values(list: &ArrayLinkedList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

#[test]
fn test_capacity_invariant() {
    let mut list = ArrayLinkedList::new(3).unwrap();
    for value in 0..3 {
        if value % 2 == 0 {
            list.add_last(value).unwrap();
        } else {
            list.add_first(value).unwrap();
        }
    }
    assert_eq!(list.len(), list.capacity());

    let before = values(&list);
    let head = list.head();
    let current = list.current();

    assert_eq!(
        list.add_first(99),
        Err(ListError::Arena(ArenaError::CapacityExhausted { capacity: 3 }))
    );
    assert_eq!(
        list.add_last(99),
        Err(ListError::Arena(ArenaError::CapacityExhausted { capacity: 3 }))
    );

    assert_eq!(values(&list), before);
    assert_eq!(list.head(), head);
    assert_eq!(list.current(), current);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_lifo_recycling() {
    let mut list = ArrayLinkedList::new(4).unwrap();
    let a = list.add_last(1).unwrap();
    let b = list.add_last(2).unwrap();
    list.add_last(3).unwrap();

    list.remove(a).unwrap();
    list.remove(b).unwrap();

    assert_eq!(list.add_last(4).unwrap(), b);
    assert_eq!(list.add_last(5).unwrap(), a);
    assert_eq!(values(&list), vec![3, 4, 5]);
}

#[test]
fn test_order_preservation() {
    let mut list = ArrayLinkedList::new(8).unwrap();
    list.add_last("x1").unwrap();
    list.add_last("x2").unwrap();
    list.add_last("x3").unwrap();

    let collected: Vec<&str> = list.iter().copied().collect();
    assert_eq!(collected, vec!["x1", "x2", "x3"]);
}

#[test]
fn test_add_first_remove_first_duality() {
    let mut list = ArrayLinkedList::new(4).unwrap();
    list.try_extend([1, 2]).unwrap();

    let head = list.head();
    let count = list.len();

    let added = list.add_first(0).unwrap();
    assert_eq!(list.remove_first(), Some(0));

    assert_eq!(list.head(), head);
    assert_eq!(list.len(), count);
    // The freed cell is the very next one handed out
    assert_eq!(list.add_last(3).unwrap(), added);
}

#[test]
fn test_search_correctness() {
    let mut list = ArrayLinkedList::new(4).unwrap();
    list.add_last('a').unwrap();
    let b = list.add_last('b').unwrap();
    list.add_last('c').unwrap();

    assert_eq!(list.search(&'b'), Ok(1));
    assert_eq!(list.current(), Some(b));

    assert_eq!(list.search(&'z'), Err(ListError::NotFound));
    assert_eq!(list.current(), Some(b));
}

#[test]
fn test_cursor_advance() {
    let mut list = ArrayLinkedList::new(2).unwrap();
    let a = list.add_last('a').unwrap();
    let b = list.add_last('b').unwrap();
    list.search(&'a').unwrap();
    assert_eq!(list.current(), Some(a));

    assert!(list.advance_cursor());
    assert_eq!(list.current(), Some(b));
    assert!(!list.advance_cursor());
    assert_eq!(list.current(), Some(b));
}

#[test]
fn test_clear_idempotence() {
    let mut list: ArrayLinkedList<i32> = ArrayLinkedList::new(3).unwrap();
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.free_count(), 0);

    list.try_extend([1, 2, 3]).unwrap();
    list.clear();
    assert_eq!(list.len(), 0);
    assert!(list.head().is_none());
    assert!(list.current().is_none());

    // Every cell is reusable
    assert_eq!(list.try_extend([4, 5, 6]), Ok(3));
    assert!(list.is_full());
}

#[test]
fn test_capacity_four_scenario() {
    let mut list = ArrayLinkedList::new(4).unwrap();
    list.add_last(10).unwrap();
    list.add_last(20).unwrap();
    list.add_last(30).unwrap();
    assert_eq!(list.len(), 3);

    let twenty = list.index_of(&20).unwrap();
    assert_eq!(list.remove(twenty), Ok(20));
    assert_eq!(values(&list), vec![10, 30]);
    assert_eq!(list.len(), 2);

    list.add_last(40).unwrap();
    list.add_last(50).unwrap();
    assert_eq!(list.len(), 4);

    let err = list.add_last(60).unwrap_err();
    assert!(err.is_capacity_exhausted());
    assert_eq!(values(&list), vec![10, 30, 40, 50]);
}

#[test]
fn test_remove_unknown_index_is_not_found() {
    let mut list = ArrayLinkedList::new(4).unwrap();
    list.try_extend([1, 2]).unwrap();
    let cursor = list.current();

    assert_eq!(list.remove(CellIndex::new(2)), Err(ListError::NotFound));
    assert_eq!(list.remove(CellIndex::new(usize::MAX)), Err(ListError::NotFound));

    assert_eq!(values(&list), vec![1, 2]);
    assert_eq!(list.current(), cursor);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_removal_cursor_lands_on_predecessor() {
    let mut list = ArrayLinkedList::new(5).unwrap();
    list.try_extend([1, 2, 3, 4]).unwrap();

    let three = list.index_of(&3).unwrap();
    list.remove(three).unwrap();
    assert_eq!(list.current_value(), Some(&2));

    list.remove_last();
    assert_eq!(list.current_value(), Some(&2));

    list.remove_first();
    assert_eq!(list.current_value(), Some(&2));
    assert_eq!(list.current(), list.head());
}

#[test]
fn test_owned_payloads_move_out() {
    let mut list = ArrayLinkedList::new(2).unwrap();
    list.add_last(String::from("left")).unwrap();
    let right = list.add_last(String::from("right")).unwrap();

    assert_eq!(list.remove(right), Ok(String::from("right")));
    assert_eq!(list.remove_first(), Some(String::from("left")));
    assert!(list.dump().slots().all(|slot| slot.payload.is_none()));
}

#[test]
fn test_contains_follows_search_cursor() {
    let mut list = ArrayLinkedList::new(4).unwrap();
    list.try_extend([1, 2, 3]).unwrap();
    assert_eq!(list.current_value(), Some(&3));

    assert!(list.contains(&1));
    assert_eq!(list.current_value(), Some(&1));

    assert!(!list.contains(&9));
    assert_eq!(list.current_value(), Some(&1));
}

#[test]
fn test_full_list_hands_refused_value_back() {
    let mut list = ArrayLinkedList::new(1).unwrap();
    list.try_add_last(vec![1u8]).unwrap();
    let before = list.head();

    assert_eq!(list.try_add_last(vec![2u8]), Err(vec![2u8]));
    assert_eq!(list.try_add_first(vec![3u8]), Err(vec![3u8]));
    assert_eq!(list.head(), before);
    assert_eq!(list.len(), 1);
}
