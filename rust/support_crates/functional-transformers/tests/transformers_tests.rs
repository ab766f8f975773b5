use functional_common::ErrorKind;
use functional_testkit::{
    data_gen::{RandomPredicate, random_nested, random_sized_sequence},
    probe::CallRecorder,
};
use functional_transformers::{
    TransformersExt, flatten, flatten_transform, reject, select, transform, try_flatten_transform,
};

const ROUNDS: u64 = 200;

fn for_each_seed(mut f: impl FnMut(&mut fastrand::Rng)) {
    for seed in 0..ROUNDS {
        let mut rng = fastrand::Rng::with_seed(2985745485 + seed);
        f(&mut rng);
    }
}

#[test]
fn test_transform_identity() {
    for_each_seed(|rng| {
        let seq = random_sized_sequence(rng, 0..64, -100..100);
        assert_eq!(transform(Some(seq.clone()), |x| x).unwrap(), seq);
    });
}

#[test]
fn test_transform_preserves_length() {
    for_each_seed(|rng| {
        let seq = random_sized_sequence(rng, 0..64, -100..100);
        let res = transform(Some(&seq), |x| x.to_string()).unwrap();
        assert_eq!(res.len(), seq.len());
    });
}

#[test]
fn test_transform_is_singleton_flatten_transform() {
    for_each_seed(|rng| {
        let seq = random_sized_sequence(rng, 0..64, -1000..1000);
        let f = |x: &i64| x * 3 - 1;
        assert_eq!(
            transform(Some(&seq), f).unwrap(),
            flatten_transform(Some(&seq), |x| vec![f(x)]).unwrap()
        );
    });
}

#[test]
fn test_select_reject_partition() {
    for_each_seed(|rng| {
        let seq = random_sized_sequence(rng, 0..64, -50..50);
        let predicate = RandomPredicate::generate(rng);

        let selected = select(Some(seq.clone()), |x| predicate.test(x)).unwrap();
        let rejected = reject(Some(seq.clone()), |x| predicate.test(x)).unwrap();
        assert_eq!(
            selected.len() + rejected.len(),
            seq.len(),
            "predicate {predicate:?}"
        );

        // Merging both partitions back by predicate outcome reproduces the input.
        let mut selected = selected.into_iter();
        let mut rejected = rejected.into_iter();
        let merged: Vec<i64> = seq
            .iter()
            .filter_map(|x| {
                if predicate.test(x) {
                    selected.next()
                } else {
                    rejected.next()
                }
            })
            .collect();
        assert_eq!(merged, seq, "predicate {predicate:?}");
        assert!(selected.next().is_none());
        assert!(rejected.next().is_none());
    });
}

#[test]
fn test_select_order_with_duplicates() {
    let res = select(Some(vec![5, 3, 5, 2, 5]), |&x| x == 5).unwrap();
    assert_eq!(res, vec![5, 5, 5]);

    for_each_seed(|rng| {
        let seq = random_sized_sequence(rng, 0..64, 0..3);
        let expected: Vec<i64> = seq.iter().copied().filter(|&x| x != 1).collect();
        assert_eq!(reject(Some(seq), |&x| x == 1).unwrap(), expected);
    });
}

#[test]
fn test_flatten_concatenates_in_order() {
    assert!(flatten(Some(vec![Vec::<i32>::new()])).unwrap().is_empty());
    assert_eq!(
        flatten(Some(vec![vec![1], vec![2, 3], vec![], vec![4, 5]])).unwrap(),
        vec![1, 2, 3, 4, 5]
    );

    for_each_seed(|rng| {
        let nested = random_nested(rng, 16, 6, -10..10);
        let expected: Vec<i64> = nested.iter().flatten().copied().collect();
        assert_eq!(flatten(Some(nested)).unwrap(), expected);
    });
}

#[test]
fn test_transformer_called_once_per_element_in_order() {
    for_each_seed(|rng| {
        let seq = random_sized_sequence(rng, 0..32, -5..5);
        let recorder = CallRecorder::new();
        let res =
            flatten_transform(Some(seq.clone()), recorder.wrap(|x: i64| vec![x; 2])).unwrap();
        assert_eq!(recorder.calls(), seq);
        assert_eq!(res.len(), seq.len() * 2);
    });
}

#[test]
fn test_absent_base_invokes_nothing() {
    let recorder = CallRecorder::<i64>::new();

    let err = flatten_transform(None::<Vec<i64>>, recorder.wrap(|x| vec![x])).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidArgument { name, .. } if name == "base"));
    assert!(transform(None::<Vec<i64>>, recorder.wrap(|x| x)).is_err());
    assert!(
        select(None::<Vec<i64>>, |&x| {
            recorder.record(x);
            true
        })
        .is_err()
    );
    assert!(
        reject(None::<Vec<i64>>, |&x| {
            recorder.record(x);
            true
        })
        .is_err()
    );
    assert!(flatten(None::<Vec<Vec<i64>>>).is_err());

    assert_eq!(recorder.count(), 0);
}

#[derive(Debug, PartialEq)]
enum ElementError {
    Bad(i64),
    Missing,
}

impl From<functional_common::Error> for ElementError {
    fn from(_: functional_common::Error) -> Self {
        ElementError::Missing
    }
}

#[test]
fn test_try_flatten_transform_aborts_on_error() {
    let recorder = CallRecorder::new();
    let res: Result<Vec<i64>, ElementError> = try_flatten_transform(
        Some(vec![1, 2, 3, 4]),
        recorder.wrap(|x: i64| {
            if x == 3 {
                Err(ElementError::Bad(x))
            } else {
                Ok(vec![x])
            }
        }),
    );
    assert_eq!(res, Err(ElementError::Bad(3)));
    assert_eq!(recorder.calls(), vec![1, 2, 3]);

    let res: Result<Vec<i64>, ElementError> =
        try_flatten_transform(None::<Vec<i64>>, recorder.wrap(|x: i64| Ok(vec![x])));
    assert_eq!(res, Err(ElementError::Missing));
    assert_eq!(recorder.count(), 3);
}

#[test]
fn test_end_to_end_examples() {
    let odd_squares = flatten_transform(Some(1..=5), |x| {
        if x % 2 == 1 { vec![x * x] } else { vec![] }
    })
    .unwrap();
    assert_eq!(odd_squares, vec![1, 9, 25]);
    assert_eq!(transform(Some(1..=5), |x| x * x).unwrap(), vec![1, 4, 9, 16, 25]);
    assert_eq!(select(Some(1..=5), |x| x % 2 == 1).unwrap(), vec![1, 3, 5]);
    assert_eq!(reject(Some(1..=5), |x| x % 2 == 1).unwrap(), vec![2, 4]);

    assert_eq!((1..=5).select(|x| x % 2 == 1), vec![1, 3, 5]);
    assert_eq!((1..=5).reject(|x| x % 2 == 1), vec![2, 4]);
}
