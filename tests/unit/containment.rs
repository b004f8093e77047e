//! Contiguous-subsequence search.

use veritas::{contains_sequence, SequenceSearch};

#[test]
fn empty_needle_is_found_at_zero() {
    assert_eq!(
        contains_sequence(&[1, 2, 3], &[]),
        SequenceSearch::Found { start: 0 }
    );
    assert_eq!(
        contains_sequence::<i32>(&[], &[]),
        SequenceSearch::Found { start: 0 }
    );
}

#[test]
fn singleton_needle() {
    assert_eq!(
        contains_sequence(&[1], &[1]),
        SequenceSearch::Found { start: 0 }
    );
    assert_eq!(contains_sequence(&[1], &[2]), SequenceSearch::NotFound);
}

#[test]
fn needle_at_start() {
    assert_eq!(
        contains_sequence(&[1, 2, 3], &[1, 2]),
        SequenceSearch::Found { start: 0 }
    );
}

#[test]
fn needle_at_end() {
    assert_eq!(
        contains_sequence(&[1, 2, 3], &[2, 3]),
        SequenceSearch::Found { start: 1 }
    );
}

#[test]
fn needle_equal_to_haystack() {
    assert_eq!(
        contains_sequence(&[1, 2, 3], &[1, 2, 3]),
        SequenceSearch::Found { start: 0 }
    );
}

#[test]
fn many_false_starts_are_tolerated() {
    // Partial matches at 0 and 3 die before completing; the full match
    // starts at 4.
    assert_eq!(
        contains_sequence(&[1, 1, 2, 1, 1, 2, 3, 4], &[1, 2, 3]),
        SequenceSearch::Found { start: 4 }
    );
}

#[test]
fn needle_longer_than_haystack_is_not_found() {
    assert_eq!(
        contains_sequence(&[1, 2, 3], &[1, 2, 3, 4]),
        SequenceSearch::NotFound
    );
    assert_eq!(contains_sequence::<i32>(&[], &[1]), SequenceSearch::NotFound);
}

#[test]
fn non_contiguous_match_is_not_found() {
    // All needle elements appear, but never as an unbroken run.
    assert_eq!(
        contains_sequence(&[1, 2, 2, 3], &[1, 2, 3]),
        SequenceSearch::NotFound
    );
}

#[test]
fn first_of_several_matches_is_reported() {
    assert_eq!(
        contains_sequence(&[0, 0, 0], &[0, 0]),
        SequenceSearch::Found { start: 0 }
    );
}

#[test]
fn equality_not_ordering_drives_the_match() {
    assert_eq!(
        contains_sequence(&["b", "a"], &["b", "a"]),
        SequenceSearch::Found { start: 0 }
    );
}
