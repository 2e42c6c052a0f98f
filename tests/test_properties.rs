// Property tests for pipeline stages
// Author: Gabriel Demetrios Lafis

use proptest::prelude::*;

use rust_pipe_combinators::processing::{
    drop, filter, fold, iota, map, reverse, take, ProcessingError, StageKind,
};

fn sequences() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000i64..1_000, 0..64)
}

proptest! {
    #[test]
    fn filter_removes_exactly_matching(s in sequences(), k in 1i64..7) {
        let kept = (s.clone() | filter(|e: &i64| e % k == 0)).unwrap();

        prop_assert!(kept.len() <= s.len());
        prop_assert!(kept.iter().all(|e| e % k != 0));

        let expected: Vec<i64> = s.into_iter().filter(|e| e % k != 0).collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn map_preserves_length_and_positions(s in sequences()) {
        let mapped = (s.clone() | map(|e: i64| e * 3 - 1)).unwrap();

        prop_assert_eq!(mapped.len(), s.len());
        for (i, e) in s.iter().enumerate() {
            prop_assert_eq!(mapped[i], e * 3 - 1);
        }
    }

    #[test]
    fn fold_plus_is_sum(s in sequences()) {
        let total = (s.clone() | fold(0, |acc: i64, e: i64| acc + e)).unwrap();
        prop_assert_eq!(total, s.iter().sum::<i64>());
    }

    #[test]
    fn iota_counts_from_zero(n in 0i64..256) {
        let values = (n | iota()).unwrap();

        prop_assert_eq!(values.len() as i64, n);
        for (i, e) in values.iter().enumerate() {
            prop_assert_eq!(*e, i as i64);
        }
    }

    #[test]
    fn iota_rejects_negative(n in i64::MIN..0) {
        let err = (n | iota()).unwrap_err();
        prop_assert_eq!(err.stage(), Some(StageKind::Iota));
    }

    #[test]
    fn reverse_is_involution(s in sequences()) {
        prop_assert_eq!((s.clone() | reverse() | reverse()).unwrap(), s);
    }

    #[test]
    fn take_and_drop_boundaries(s in sequences()) {
        let len = s.len();

        prop_assert!((s.clone() | take(0)).unwrap().is_empty());
        prop_assert_eq!((s.clone() | take(len)).unwrap(), s.clone());
        prop_assert_eq!((s.clone() | drop(0)).unwrap(), s.clone());
        prop_assert!((s | drop(len)).unwrap().is_empty());
    }

    #[test]
    fn take_then_drop_partitions(s in sequences(), cut in 0usize..64) {
        let cut = cut.min(s.len());
        let mut front = (s.clone() | take(cut)).unwrap();
        let back = (s.clone() | drop(cut)).unwrap();

        prop_assert_eq!(front.len() + back.len(), s.len());
        front.extend(back);
        prop_assert_eq!(front, s);
    }

    #[test]
    fn take_past_end_is_error(s in sequences(), extra in 1usize..16) {
        let count = s.len() + extra;
        let length = s.len();

        prop_assert_eq!(
            s.clone() | take(count),
            Err(ProcessingError::OutOfRange { stage: StageKind::Take, count, length })
        );
        prop_assert_eq!(
            s | drop(count),
            Err(ProcessingError::OutOfRange { stage: StageKind::Drop, count, length })
        );
    }
}
