use splay_seq::{SeqError, SplaySeq};
use splay_seq_util::next_permutation;

fn seq(values: &[i64]) -> SplaySeq<i64> {
    SplaySeq::from(values)
}

#[test]
fn concrete_scenario_matrix() {
    let mut s = SplaySeq::new();
    for (k, v) in [3, 1, 4, 1, 5].into_iter().enumerate() {
        s.insert_at(k, v).unwrap();
    }
    assert_eq!(s.to_vec(), vec![3, 1, 4, 1, 5]);

    s.insert_at(2, 9).unwrap();
    assert_eq!(s.to_vec(), vec![3, 1, 9, 4, 1, 5]);

    s.range_add(1, 4, 10).unwrap();
    assert_eq!(s.to_vec(), vec![3, 11, 19, 14, 1, 5]);

    assert_eq!(s.range_sum(0, 6), Ok(53));

    assert_eq!(s.erase_at(0), Ok(3));
    assert_eq!(s.to_vec(), vec![11, 19, 14, 1, 5]);
    assert_eq!(s.len(), 5);
    s.validate().unwrap();
}

#[test]
fn out_of_range_leaves_sequence_unchanged_matrix() {
    let mut s = seq(&[1, 2, 3]);
    let before = s.to_vec();

    assert_eq!(
        s.insert_at(4, 0),
        Err(SeqError::IndexOutOfRange { start: 4, end: 4, len: 3 })
    );
    assert_eq!(
        s.erase_at(3),
        Err(SeqError::IndexOutOfRange { start: 3, end: 4, len: 3 })
    );
    assert!(s.get(3).is_err());
    assert!(s.set(3, 1).is_err());
    assert_eq!(
        s.range_sum(2, 4),
        Err(SeqError::IndexOutOfRange { start: 2, end: 4, len: 3 })
    );
    assert!(s.range_sum(2, 1).is_err());
    assert!(s.range_assign(0, 4, 1).is_err());
    assert!(s.range_add(1, 0, 1).is_err());
    assert!(s.reverse_range(0, 9).is_err());
    assert!(s.next_permutation_in_range(0, 4).is_err());
    assert!(s.prev_permutation_in_range(3, 2).is_err());

    assert_eq!(s.to_vec(), before);
    s.validate().unwrap();
}

#[test]
fn assign_then_add_composes_matrix() {
    let mut s = seq(&[5, 6, 7, 8, 9, 10]);
    s.range_assign(1, 5, 4).unwrap();
    s.range_add(1, 5, 3).unwrap();
    assert_eq!(s.to_vec(), vec![5, 7, 7, 7, 7, 10]);
    assert_eq!(s.range_sum(1, 5), Ok(28));

    // Overlapping updates that never get visited in between.
    s.range_add(0, 6, 1).unwrap();
    s.range_assign(2, 4, -2).unwrap();
    s.range_add(3, 6, 10).unwrap();
    assert_eq!(s.range_sum(0, 6), Ok(6 + 8 - 2 + 8 + 18 + 21));
    assert_eq!(s.to_vec(), vec![6, 8, -2, 8, 18, 21]);
    s.validate().unwrap();
}

#[test]
fn empty_ranges_are_noops_matrix() {
    let mut s = seq(&[1, 2, 3]);
    assert_eq!(s.range_sum(1, 1), Ok(0));
    s.range_assign(2, 2, 100).unwrap();
    s.range_add(0, 0, 100).unwrap();
    s.reverse_range(3, 3).unwrap();
    assert_eq!(s.next_permutation_in_range(1, 1), Ok(false));
    assert_eq!(s.prev_permutation_in_range(0, 1), Ok(false));
    assert_eq!(s.to_vec(), vec![1, 2, 3]);
    s.validate().unwrap();
}

#[test]
fn get_set_and_push_matrix() {
    let mut s: SplaySeq<i32> = SplaySeq::with_capacity(8);
    s.push_back(2);
    s.push_back(3);
    s.push_front(1);
    assert_eq!(s.get(0), Ok(1));
    assert_eq!(s.get(2), Ok(3));
    s.set(1, 20).unwrap();
    assert_eq!(s.to_vec(), vec![1, 20, 3]);
    assert_eq!(s.sum(), 24);

    s.extend([4, 5, 6]);
    assert_eq!(s.len(), 6);
    assert_eq!(s.to_vec(), vec![1, 20, 3, 4, 5, 6]);
    s.validate().unwrap();
}

#[test]
fn reverse_range_matrix() {
    let mut s = seq(&[0, 1, 2, 3, 4, 5, 6, 7]);
    s.reverse_range(2, 6).unwrap();
    assert_eq!(s.to_vec(), vec![0, 1, 5, 4, 3, 2, 6, 7]);
    s.reverse_range(0, 8).unwrap();
    assert_eq!(s.to_vec(), vec![7, 6, 2, 3, 4, 5, 1, 0]);
    s.range_add(0, 3, 100).unwrap();
    s.reverse_range(1, 5).unwrap();
    assert_eq!(s.to_vec(), vec![107, 4, 3, 102, 106, 5, 1, 0]);
    assert_eq!(s.get(3), Ok(102));
    assert_eq!(s.range_sum(1, 4), Ok(109));
    s.validate().unwrap();
}

#[test]
fn next_permutation_matches_reference_matrix() {
    let mut s = seq(&[9, 1, 2, 3, 4, 9]);
    let mut reference = vec![1, 2, 3, 4];
    for _ in 0..24 {
        let expected = next_permutation(&mut reference);
        assert_eq!(s.next_permutation_in_range(1, 5), Ok(expected));
        let got = s.to_vec();
        assert_eq!(&got[1..5], &reference[..]);
        assert_eq!((got[0], got[5]), (9, 9));
        s.validate().unwrap();
    }
    assert_eq!(s.to_vec(), vec![9, 1, 2, 3, 4, 9]);
}

#[test]
fn decreasing_range_wraps_to_increasing_matrix() {
    let mut s = seq(&[5, 4, 3, 2, 1]);
    assert_eq!(s.next_permutation_in_range(0, 5), Ok(false));
    assert_eq!(s.to_vec(), vec![1, 2, 3, 4, 5]);
    assert_eq!(s.prev_permutation_in_range(0, 5), Ok(false));
    assert_eq!(s.to_vec(), vec![5, 4, 3, 2, 1]);
    s.validate().unwrap();
}

#[test]
fn prev_permutation_undoes_next_matrix() {
    let mut s = seq(&[3, 1, 4, 1, 5, 9, 2, 6]);
    let original = s.to_vec();
    for _ in 0..10 {
        s.next_permutation_in_range(2, 8).unwrap();
    }
    for _ in 0..10 {
        s.prev_permutation_in_range(2, 8).unwrap();
    }
    assert_eq!(s.to_vec(), original);
    s.validate().unwrap();
}

#[test]
fn permutation_with_duplicates_matrix() {
    let mut s = seq(&[2, 1, 1, 2]);
    let mut reference = s.to_vec();
    for _ in 0..12 {
        let expected = next_permutation(&mut reference);
        assert_eq!(s.next_permutation_in_range(0, 4), Ok(expected));
        assert_eq!(s.to_vec(), reference);
    }
    s.validate().unwrap();
}

#[test]
fn permutation_after_lazy_updates_matrix() {
    let mut s = seq(&[1, 2, 3, 4, 5, 6]);
    s.reverse_range(0, 6).unwrap();
    s.range_add(0, 3, 10).unwrap();
    // [16, 15, 14, 3, 2, 1]
    let mut reference = s.to_vec();
    for _ in 0..30 {
        let expected = next_permutation(&mut reference[1..5]);
        assert_eq!(s.next_permutation_in_range(1, 5), Ok(expected));
        assert_eq!(s.to_vec(), reference);
    }
    assert_eq!(s.range_sum(0, 6), Ok(51));
    s.validate().unwrap();
}

#[test]
fn debug_and_iter_matrix() {
    let s: SplaySeq<i64> = (1..=4).collect();
    assert_eq!(format!("{s:?}"), "[1, 2, 3, 4]");
    assert_eq!(s.iter().len(), 4);
    let doubled: Vec<i64> = (&s).into_iter().map(|v| v * 2).collect();
    assert_eq!(doubled, vec![2, 4, 6, 8]);
}

#[test]
fn narrow_element_bounds_matrix() {
    let mut s: SplaySeq<i8> = vec![0; 128].into();
    s.range_assign(0, 128, -1).unwrap();
    assert_eq!(s.sum(), i8::MIN);
    assert_eq!(s.range_sum(0, 128), Ok(i8::MIN));
    s.validate().unwrap();

    let mut s: SplaySeq<i8> = vec![0; 128].into();
    s.range_add(0, 128, -1).unwrap();
    assert_eq!(s.sum(), i8::MIN);
    assert_eq!(s.range_sum(64, 128), Ok(-64));
    s.validate().unwrap();

    let mut s: SplaySeq<u8> = vec![0; 255].into();
    s.range_assign(0, 255, 1).unwrap();
    assert_eq!(s.sum(), u8::MAX);
    s.validate().unwrap();

    let mut s: SplaySeq<i16> = vec![0; 32768].into();
    s.range_add(0, 32768, -1).unwrap();
    assert_eq!(s.sum(), i16::MIN);
    assert_eq!(s.range_sum(16384, 32768), Ok(-16384));
    s.validate().unwrap();
}
