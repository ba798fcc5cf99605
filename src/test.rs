use alloc::string::String;
use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;

use crate::*;

#[test]
fn input_display() {
    assert_eq!(Input::El(7).to_string(), "el(7)");
    assert_eq!(Input::chunk(vec![1]).unwrap().to_string(), "chunk(1)");
    assert_eq!(
        Input::chunk(vec!["a", "b", "c"]).unwrap().to_string(),
        "chunk(a, b, c)"
    );
    assert_eq!(Input::<u8>::End.to_string(), "end");
}

#[test]
fn input_chunk_is_never_empty() {
    assert_eq!(Input::<i32>::chunk(Vec::new()), None);
    assert_eq!(NonEmpty::<i32>::from_vec(Vec::new()), None);
    let items = NonEmpty::from_vec(vec![4, 5]).unwrap();
    assert_eq!(items.first(), &4);
    assert_eq!(items.len(), 2);
}

#[test]
fn input_len_and_elements() {
    assert_eq!(Input::El('x').len(), 1);
    assert_eq!(Input::chunk(vec![1, 2, 3]).unwrap().len(), 3);
    assert_eq!(Input::<i32>::End.len(), 0);
    assert!(Input::<i32>::End.is_end());
    let elements: Vec<_> = Input::chunk(vec![1, 2]).unwrap().into_iter().collect();
    assert_eq!(elements, vec![1, 2]);
    assert_eq!(Input::<i32>::End.into_iter().count(), 0);
}

#[test]
fn input_map_keeps_shape() {
    assert_eq!(Input::El(1).map(|x| x * 10), Input::El(10));
    assert_eq!(
        Input::chunk(vec![1, 2]).unwrap().map(|x| x * 10),
        Input::chunk(vec![10, 20]).unwrap()
    );
    assert_eq!(Input::<i32>::End.map(|x| x * 10), Input::End);
}

#[test]
fn feeding_a_done_step_is_a_no_op() {
    let done: Step<i32, Option<i32>, Head> = Step::Done(Some(5), Some(Input::El(9)));
    let Id(again) = done.clone().feed::<Identity>(Input::El(1));
    assert_eq!(again, done);
    let Id(again) = again.feed::<Identity>(Input::End);
    assert_eq!(again, done);
}

#[test]
fn step_accessors() {
    let cont: Step<i32, Vec<i32>, Take<i32>> = Step::Cont(take(1));
    assert!(!cont.is_done());
    assert!(cont.into_cont().is_some());
    let done: Step<i32, i32, Head> = Step::done(3);
    assert!(done.is_done());
    assert_eq!(done.into_done(), Some((3, None)));
}

#[test]
fn head_leaves_rest_of_chunk() {
    let Id(step) = Step::Cont(head()).feed::<Identity>(Input::chunk(vec![1, 2, 3]).unwrap());
    assert_eq!(step.into_done(), Some((Some(1), Input::chunk(vec![2, 3]))));
}

#[test]
fn head_of_single_element_chunk_leaves_nothing() {
    let Id(step) = Step::Cont(head()).feed::<Identity>(Input::chunk(vec![1]).unwrap());
    assert_eq!(step.into_done(), Some((Some(1), None)));
}

#[test]
fn head_of_end() {
    let Id(step) = Step::Cont(head()).feed::<Identity>(Input::<i32>::End);
    assert_eq!(step.into_done(), Some((None, Some(Input::End))));
}

#[test]
fn take_splits_chunk() {
    let Id(step) = Step::Cont(take(2)).feed::<Identity>(Input::chunk(vec![1, 2, 3]).unwrap());
    assert_eq!(step.into_done(), Some((vec![1, 2], Input::chunk(vec![3]))));
}

#[test]
fn take_exact_chunk_leaves_nothing() {
    let Id(step) = Step::Cont(take(3)).feed::<Identity>(Input::chunk(vec![1, 2, 3]).unwrap());
    assert_eq!(step.into_done(), Some((vec![1, 2, 3], None)));
}

#[test]
fn take_zero_leaves_first_input() {
    let Id(step) = Step::Cont(take(0)).feed::<Identity>(Input::El(1));
    assert_eq!(step.into_done(), Some((vec![], Some(Input::El(1)))));
}

#[test]
fn take_finishes_on_nth_element_without_more_input() {
    let Id(step) = Step::Cont(take(1)).feed::<Identity>(Input::El('a'));
    assert_eq!(step.into_done(), Some((vec!['a'], None)));
}

#[test]
fn take_zero_starts_done() {
    let start: Step<i32, Vec<i32>, Take<i32>> =
        Iteratee::<Identity, i32>::start(take(0));
    assert_eq!(start.into_done(), Some((vec![], None)));
}

#[test]
fn take_zero_runs_no_source_effect() {
    let logged = enum_vec::<Writer<i32>, _>(vec![1, 2, 3])
        .flat_map_m(|x| Logged::tell(x, x))
        .run(take(0));
    assert_eq!(logged.into_parts(), (vec![], vec![]));
}

#[test]
fn take_zero_never_sees_failing_source() {
    let result = enum_vec::<Fallible<&str>, i32>(vec![1])
        .flat_map_m(|_| Err::<i32, _>("boom"))
        .run(take(0));
    assert_eq!(result, Ok(vec![]));
}

#[test]
fn take_more_than_available() {
    assert_eq!(enum_vec::<Identity, _>(vec![1, 2]).run(take(5)), Id(vec![1, 2]));
}

#[test]
fn collect_accepts_chunks() {
    assert_eq!(
        enum_chunks::<Identity, _>(vec![1, 2, 3, 4], 3).run(collect()),
        Id(vec![1, 2, 3, 4])
    );
}

#[test]
fn enum_chunks_zero_size_feeds_single_elements() {
    assert_eq!(
        enum_chunks::<Identity, _>(vec![1, 2], 0).run(take(1)),
        Id(vec![1])
    );
}

#[test]
fn fold_in_order() {
    let digits = enum_vec::<Identity, _>(vec![1, 2, 3]);
    assert_eq!(digits.run(fold(0, |acc, x: i32| acc * 10 + x)), Id(123));
}

#[test]
fn fold_m_short_circuits() {
    let mut calls = 0;
    let sum = enum_vec::<Optional, u8>(vec![200, 100, 1]).run(fold_m(0, |acc: u8, x| {
        calls += 1;
        acc.checked_add(x)
    }));
    assert_eq!(sum, None);
    assert_eq!(calls, 2);
}

#[test]
fn fold_m_over_chunk_sequences_each_element() {
    let logged = enum_chunks(vec![1, 2, 3], 3).run(fold_m(0, |acc: i32, x: i32| {
        Logged::tell(x, acc + x)
    }));
    assert_eq!(logged.into_parts(), (vec![1, 2, 3], 6));
}

#[test]
fn run_stops_source_effects_once_done() {
    let logged = enum_vec::<Writer<i32>, _>(vec![1, 2, 3, 4])
        .flat_map_m(|x| Logged::tell(x, x))
        .run(take(2));
    assert_eq!(logged.into_parts(), (vec![1, 2], vec![1, 2]));
}

#[test]
fn append_does_not_run_second_when_done() {
    let first = lift_to_enumerator(Logged::tell("first", 1));
    let second = lift_to_enumerator(Logged::tell("second", 2));
    let logged = first.append(second).run(head());
    assert_eq!(logged.into_parts(), (vec!["first"], Some(1)));
}

#[test]
fn append_runs_both_in_order() {
    let first = lift_to_enumerator(Logged::tell("first", 1));
    let second = lift_to_enumerator(Logged::tell("second", 2));
    let logged = first.append(second).to_vec();
    assert_eq!(logged.into_parts(), (vec!["first", "second"], vec![1, 2]));
}

#[test]
fn prepend_does_not_run_rest_when_done() {
    let rest = lift_to_enumerator(Logged::tell("rest", 2));
    let logged = rest.prepend(1).run(head());
    assert_eq!(logged.into_parts(), (vec![], Some(1)));
}

#[test]
fn lift_does_not_run_effect_for_done_step() {
    let lifted = lift_to_enumerator(Logged::tell("effect", 1));
    let done: Step<i32, Option<i32>, Head> = Step::done(Some(0));
    let logged = lifted.apply(done);
    assert_eq!(logged.into_parts(), (vec![], Step::done(Some(0))));
}

#[test]
fn iterate_m_runs_one_step_per_element() {
    let logged = iterate_m(1, |n| Logged::tell(n, n * 3)).run(take(4));
    assert_eq!(logged.into_parts(), (vec![1, 3, 9], vec![1, 3, 9, 27]));
}

#[test]
fn iterate_until_m_stops_on_none() {
    let logged = iterate_until_m(1, |n| {
        Logged::tell(n, if n < 3 { Some(n + 1) } else { None })
    })
    .to_vec();
    assert_eq!(logged.into_parts(), (vec![1, 2, 3], vec![1, 2, 3]));
}

#[test]
fn fallible_source_stops_at_first_error() {
    let mut seen = Vec::new();
    let result = enum_vec(vec![1, 2, 3, 4])
        .flat_map_m(|x| {
            seen.push(x);
            if x == 2 { Err(String::from("two")) } else { Ok(x) }
        })
        .to_vec();
    assert_eq!(result, Err(String::from("two")));
    assert_eq!(seen, vec![1, 2]);
}

#[test]
fn map_is_only_called_for_fed_elements() {
    let mut calls = 0;
    let Id(taken) = repeat::<Identity, _>(1)
        .map(|x| {
            calls += 1;
            x
        })
        .run(take(3));
    assert_eq!(taken, vec![1, 1, 1]);
    assert_eq!(calls, 3);
}

#[test]
fn map_transforms_whole_chunk_at_once() {
    let mut calls = 0;
    let Id(first) = enum_chunks::<Identity, _>(vec![1, 2, 3, 4], 3)
        .map(|x| {
            calls += 1;
            x * 2
        })
        .run(head());
    assert_eq!(first, Some(2));
    assert_eq!(calls, 3);
}

#[test]
fn flat_map_stops_inside_inner_enumerator() {
    let mut made = 0;
    let Id(taken) = iterate::<Identity, _, _>(0, |n| n + 1)
        .flat_map(|n| {
            made += 1;
            repeat(n).map(|x| x * 100)
        })
        .run(take(2));
    assert_eq!(taken, vec![0, 0]);
    assert_eq!(made, 1);
}

#[test]
fn flat_map_over_chunks() {
    enum_chunks::<Identity, _>(vec![1, 2, 3], 2)
        .flat_map(|n| enum_vec(vec![n, -n]))
        .assert_emits(&[1, -1, 2, -2, 3, -3]);
}

#[test]
fn reduced_of_empty_is_init() {
    empty::<Identity, i32>()
        .reduced(10, |acc, x| acc + x)
        .assert_emits(&[10]);
}

#[test]
fn reduced_does_not_drain_source_for_done_step() {
    let reduced = iterate::<Identity, _, _>(0, |n| n + 1).reduced(0, |acc, x| acc + x);
    let done: Step<i32, Option<i32>, Head> = Step::done(None);
    assert_eq!(reduced.apply(done), Id(Step::done(None)));
}

#[test]
fn reduced_m_fails_with_step() {
    let result = enum_vec::<Fallible<String>, _>(vec![1, 2, 3])
        .reduced_m(0, |acc: i32, x| {
            if x == 3 { Err(String::from("three")) } else { Ok(acc + x) }
        })
        .to_vec();
    assert_eq!(result, Err(String::from("three")));
}

#[test]
fn bind_m_skips_calls_after_none() {
    let mut calls = 0;
    let Id(bound) = enum_vec::<Identity, _>(vec![1, 2, 3]).bind_m(|n| {
        calls += 1;
        if n == 2 { None } else { Some(enum_one(n)) }
    });
    assert!(bound.is_none());
    assert_eq!(calls, 2);
}

#[test]
fn concat_of_nothing_is_empty() {
    concat(Vec::<EnumOne<Identity, i32>>::new()).assert_empty();
}

#[test]
fn within_fixes_effect() {
    let result = enum_vec(vec!['a']).within::<Fallible<()>>().to_vec();
    assert_eq!(result, Ok(vec!['a']));
}

#[test]
fn identity_tail_rec_is_stack_safe() {
    let Id(total) = enum_stream::<Identity, _>(0..1_000_000u64).run(fold(0, |a, x: u64| a + x));
    assert_eq!(total, 499_999_500_000);
}

#[test]
fn writer_tail_rec_is_stack_safe() {
    let logged = repeat::<Writer<()>, _>(1u32)
        .flat_map_m(|x| Logged::tell((), x))
        .run(take(200_000));
    let (log, taken) = logged.into_parts();
    assert_eq!(log.len(), 200_000);
    assert_eq!(taken.len(), 200_000);
}

struct Stubborn;

impl<F: Effect> Iteratee<F, i32> for Stubborn {
    type Output = ();
    fn feed(self, _: Input<i32>) -> Of<F, Step<i32, (), Self>> {
        F::pure(Step::Cont(Stubborn))
    }
}

#[test]
#[should_panic(expected = "iteratee did not finish at the end of the stream")]
fn run_panics_if_iteratee_ignores_end() {
    let _ = enum_vec::<Identity, _>(vec![1]).run(Stubborn);
}

#[test]
fn assert_emits_passes() {
    enum_vec::<Identity, _>(vec![1, 2]).assert_emits(&[1, 2]);
}

#[test]
#[should_panic(expected = "expected the enumerator to produce")]
fn assert_emits_fails() {
    enum_vec::<Identity, _>(vec![1, 2]).assert_emits(&[2, 1]);
}

#[test]
#[should_panic(expected = "expected the enumerator to be empty")]
fn assert_empty_fails_on_infinite() {
    repeat::<Identity, _>(0).assert_empty();
}
