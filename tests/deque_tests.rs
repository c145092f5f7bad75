#![cfg(feature = "deque")]
//! Integration tests for Deque.
//!
//! These tests exercise the public deque API the way a consuming
//! application would: through opaque shared element handles.

use rstest::rstest;
use tagdeque::ReferenceCounter;
use tagdeque::deque::{self, Deque};

type Handle = ReferenceCounter<String>;

fn handle(text: &str) -> Handle {
    ReferenceCounter::new(text.to_string())
}

fn handles(deque: &Deque<Handle>) -> Vec<&str> {
    deque.iter().map(|element| element.as_str()).collect()
}

// =============================================================================
// Scenario: push right, reverse, pop left
// =============================================================================

#[rstest]
fn test_push_reverse_pop_scenario() {
    let mut deque: Deque<i32> = Deque::new();
    deque.push_right(1).push_right(2).push_right(3);
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

    deque.reverse();
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);

    assert_eq!(deque.pop_left(), Some(3));
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
    assert_eq!(deque.len(), 2);
}

// =============================================================================
// Empty state
// =============================================================================

#[rstest]
#[case::from_left(true)]
#[case::from_right(false)]
fn test_popping_last_element_empties_deque(#[case] from_left: bool) {
    let mut deque: Deque<Handle> = Deque::new();
    let only = handle("only");
    deque.push_right(ReferenceCounter::clone(&only));

    let popped = if from_left {
        deque.pop_left()
    } else {
        deque.pop_right()
    };

    assert!(ReferenceCounter::ptr_eq(&popped.unwrap(), &only));
    assert_eq!(deque.len(), 0);
    assert_eq!(deque.peek_left(), None);
    assert_eq!(deque.peek_right(), None);
    assert!(deque.is_well_linked());
}

#[rstest]
fn test_empty_deque_is_reusable() {
    let mut deque: Deque<i32> = Deque::new();
    deque.push_left(1);
    deque.pop_right();
    deque.push_right(2).push_left(1);
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert!(deque.is_well_linked());
}

// =============================================================================
// Absent elements
// =============================================================================

#[rstest]
fn test_absent_element_push_is_silently_dropped() {
    let mut deque: Deque<Handle> = Deque::new();
    deque.push_left(handle("a"));
    deque.push_left(None);
    deque.push_right(None);
    deque.push_right(Some(handle("b")));

    assert_eq!(deque.len(), 2);
    assert_eq!(handles(&deque), vec!["a", "b"]);
}

// =============================================================================
// Identity of elements
// =============================================================================

#[rstest]
fn test_peek_and_pop_return_same_handle() {
    let mut deque: Deque<Handle> = ["x", "y", "z"].into_iter().map(handle).collect();

    let peeked = ReferenceCounter::clone(deque.peek_left().unwrap());
    let popped = deque.pop_left().unwrap();
    assert!(ReferenceCounter::ptr_eq(&peeked, &popped));

    let peeked = ReferenceCounter::clone(deque.peek_right().unwrap());
    let popped = deque.pop_right().unwrap();
    assert!(ReferenceCounter::ptr_eq(&peeked, &popped));
}

#[rstest]
fn test_shallow_copy_aliases_elements() {
    let mut original: Deque<Handle> = ["a", "b", "c"].into_iter().map(handle).collect();
    let copy = original.copy();

    for (left, right) in original.iter().zip(copy.iter()) {
        assert!(ReferenceCounter::ptr_eq(left, right));
        assert_eq!(ReferenceCounter::strong_count(left), 2);
    }

    original.pop_left();
    original.push_right(handle("d"));

    assert_eq!(handles(&copy), vec!["a", "b", "c"]);
    assert_eq!(copy.len(), 3);
}

#[rstest]
fn test_deep_copy_duplicates_elements() {
    let original: Deque<Handle> = ["a", "b"].into_iter().map(handle).collect();
    let copy = original.copy_with(|element| ReferenceCounter::new(element.to_uppercase()));

    assert_eq!(handles(&copy), vec!["A", "B"]);
    for element in &original {
        assert_eq!(ReferenceCounter::strong_count(element), 1);
    }
}

#[rstest]
fn test_reverse_swaps_payloads_only() {
    let mut deque: Deque<Handle> = ["a", "b", "c", "d", "e"].into_iter().map(handle).collect();
    let middle = ReferenceCounter::clone(deque.iter().nth(2).unwrap());

    deque.reverse();

    assert_eq!(handles(&deque), vec!["e", "d", "c", "b", "a"]);
    assert!(ReferenceCounter::ptr_eq(deque.iter().nth(2).unwrap(), &middle));
    assert!(deque.is_well_linked());
}

// =============================================================================
// Absent deques
// =============================================================================

#[rstest]
fn test_absent_deque_operations_are_benign() {
    assert_eq!(deque::count::<Handle>(None), 0);
    assert!(deque::peek_left::<Handle>(None).is_none());
    assert!(deque::peek_right::<Handle>(None).is_none());
    assert!(deque::push_left::<Handle>(None, handle("a")).is_none());
    assert!(deque::push_right::<Handle>(None, handle("a")).is_none());
    assert!(deque::pop_left::<Handle>(None).is_none());
    assert!(deque::pop_right::<Handle>(None).is_none());
    assert!(deque::reverse::<Handle>(None).is_none());

    let copy = deque::copy::<Handle>(None);
    assert!(copy.is_empty());
    assert!(copy.is_well_linked());
}

#[rstest]
fn test_free_functions_on_present_deque() {
    let mut present: Deque<i32> = Deque::new();
    deque::push_right(deque::push_right(Some(&mut present), 1), 2);
    deque::reverse(Some(&mut present));

    assert_eq!(deque::count(Some(&present)), 2);
    assert_eq!(deque::peek_left(Some(&present)), Some(&2));
    assert_eq!(deque::pop_right(Some(&mut present)), Some(1));

    let copy = deque::copy(Some(&present));
    assert_eq!(copy, present);
}

// =============================================================================
// Nesting
// =============================================================================

#[rstest]
fn test_deque_of_deques() {
    let inner: Deque<i32> = (1..=3).collect();
    let mut outer: Deque<ReferenceCounter<Deque<i32>>> = Deque::new();
    let shared = ReferenceCounter::new(inner);
    outer
        .push_right(ReferenceCounter::clone(&shared))
        .push_left(ReferenceCounter::clone(&shared));

    assert_eq!(outer.len(), 2);
    assert_eq!(outer.peek_left().map(|deque| deque.len()), Some(3));
    assert_eq!(ReferenceCounter::strong_count(&shared), 3);
}
