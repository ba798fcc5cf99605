// Property tests for the algebraic laws enumerators obey.
//
// Two synchronous enumerators are considered equal when they produce the same
// elements, which is what `to_vec()` observes. For effectful enumerators, the
// log of a `Writer` is compared too, so that the order and number of effects
// are part of the law.

use std::collections::LinkedList;

use cocoenum::*;
use quickcheck::QuickCheck;

fn check<A: quickcheck::Testable>(prop: A) {
    QuickCheck::new().tests(500).quickcheck(prop);
}

fn produced<S: Enumerator<Effect = Identity>>(src: S) -> Vec<S::Item> {
    src.to_vec().into_inner()
}

fn src(xs: Vec<i32>) -> EnumIter<Identity, std::vec::IntoIter<i32>> {
    enum_vec(xs)
}

// Two arbitrary continuations for the monad laws: one that changes the
// number of elements, one that changes their values.
fn f(x: i32) -> EnumIter<Identity, std::vec::IntoIter<i32>> {
    enum_vec(vec![x; x.rem_euclid(3) as usize])
}

fn g(x: i32) -> EnumIter<Identity, std::vec::IntoIter<i32>> {
    enum_vec(vec![x.wrapping_mul(2), x.wrapping_add(1)])
}

#[test]
fn prop_to_vec_round_trips() {
    fn p(xs: Vec<i32>) -> bool {
        produced(src(xs.clone())) == xs
    }
    check(p as fn(Vec<i32>) -> bool);
}

#[test]
fn prop_enum_list_round_trips() {
    fn p(xs: Vec<i32>) -> bool {
        let list: LinkedList<i32> = xs.iter().copied().collect();
        produced(enum_list::<Identity, _>(list)) == xs
    }
    check(p as fn(Vec<i32>) -> bool);
}

#[test]
fn prop_enum_stream_round_trips() {
    fn p(xs: Vec<i32>) -> bool {
        produced(enum_stream::<Identity, _>(xs.clone())) == xs
    }
    check(p as fn(Vec<i32>) -> bool);
}

#[test]
fn prop_enum_chunks_produces_same_elements() {
    fn p(xs: Vec<i32>, size: u8) -> bool {
        produced(enum_chunks::<Identity, _>(xs.clone(), size as usize)) == xs
    }
    check(p as fn(Vec<i32>, u8) -> bool);
}

#[test]
fn prop_enum_indexed_seq_is_clamped_slice() {
    fn p(xs: Vec<i32>, start: u8, count: u8) -> bool {
        let (start, end) = (start as usize, start as usize + count as usize);
        let lo = start.min(xs.len());
        let hi = end.min(xs.len());
        produced(enum_indexed_seq::<Identity, _>(&xs, start, end)) == xs[lo..hi]
    }
    check(p as fn(Vec<i32>, u8, u8) -> bool);
}

#[test]
fn prop_enum_indexed_seq_inverted_range_is_empty() {
    fn p(xs: Vec<i32>, end: u8, gap: u8) -> bool {
        let end = end as usize;
        let start = end + gap as usize + 1;
        produced(enum_indexed_seq::<Identity, _>(&xs, start, end)).is_empty()
    }
    check(p as fn(Vec<i32>, u8, u8) -> bool);
}

#[test]
fn prop_take_is_prefix() {
    fn p(xs: Vec<i32>, n: u8) -> bool {
        let n = n as usize;
        let Id(taken) = src(xs.clone()).run(take(n));
        taken == xs[..n.min(xs.len())]
    }
    check(p as fn(Vec<i32>, u8) -> bool);
}

#[test]
fn prop_take_bounds_repeat() {
    fn p(value: i32, n: u8) -> bool {
        let n = n as usize;
        repeat::<Identity, _>(value).run(take(n)) == Id(vec![value; n])
    }
    check(p as fn(i32, u8) -> bool);
}

#[test]
fn prop_take_bounds_iterate() {
    fn p(seed: i32, n: u8) -> bool {
        let n = n as usize;
        let Id(taken) =
            iterate::<Identity, _, _>(seed, |x: i32| x.wrapping_add(1)).run(take(n));
        let expected: Vec<i32> =
            (0..n).map(|i| seed.wrapping_add(i as i32)).collect();
        taken == expected
    }
    check(p as fn(i32, u8) -> bool);
}

#[test]
fn prop_append_empty_left_identity() {
    fn p(xs: Vec<i32>) -> bool {
        produced(empty().append(src(xs.clone()))) == xs
    }
    check(p as fn(Vec<i32>) -> bool);
}

#[test]
fn prop_append_empty_right_identity() {
    fn p(xs: Vec<i32>) -> bool {
        produced(src(xs.clone()).append(empty())) == xs
    }
    check(p as fn(Vec<i32>) -> bool);
}

#[test]
fn prop_append_is_associative() {
    fn p(xs: Vec<i32>, ys: Vec<i32>, zs: Vec<i32>) -> bool {
        let left = src(xs.clone())
            .append(src(ys.clone()))
            .append(src(zs.clone()));
        let right = src(xs.clone()).append(src(ys.clone()).append(src(zs.clone())));
        let concatenated: Vec<i32> = [xs, ys, zs].concat();
        produced(left) == concatenated && produced(right) == concatenated
    }
    check(p as fn(Vec<i32>, Vec<i32>, Vec<i32>) -> bool);
}

#[test]
fn prop_append_sequences_effects() {
    fn p(xs: Vec<i32>, ys: Vec<i32>) -> bool {
        let logging = |x: i32| Logged::tell(x, x);
        let both = enum_vec(xs.clone())
            .flat_map_m(logging)
            .append(enum_vec(ys.clone()).flat_map_m(logging));
        let (log, items) = both.to_vec().into_parts();
        let expected = [xs, ys].concat();
        log == expected && items == expected
    }
    check(p as fn(Vec<i32>, Vec<i32>) -> bool);
}

#[test]
fn prop_prepend_is_append_of_one() {
    fn p(x: i32, xs: Vec<i32>) -> bool {
        produced(src(xs.clone()).prepend(x))
            == produced(enum_one(x).append(src(xs)))
    }
    check(p as fn(i32, Vec<i32>) -> bool);
}

#[test]
fn prop_flat_map_left_identity() {
    fn p(x: i32) -> bool {
        produced(enum_one::<Identity, _>(x).flat_map(f)) == produced(f(x))
    }
    check(p as fn(i32) -> bool);
}

#[test]
fn prop_flat_map_right_identity() {
    fn p(xs: Vec<i32>) -> bool {
        produced(src(xs.clone()).flat_map(enum_one)) == xs
    }
    check(p as fn(Vec<i32>) -> bool);
}

#[test]
fn prop_flat_map_is_associative() {
    fn p(xs: Vec<i32>) -> bool {
        let left = src(xs.clone()).flat_map(f).flat_map(g);
        let right = src(xs).flat_map(|x| f(x).flat_map(g));
        produced(left) == produced(right)
    }
    check(p as fn(Vec<i32>) -> bool);
}

#[test]
fn prop_map_composes() {
    fn p(xs: Vec<i32>) -> bool {
        let twice = src(xs.clone())
            .map(|x| x.wrapping_mul(3))
            .map(|x| x.wrapping_sub(7));
        let once = src(xs).map(|x| x.wrapping_mul(3).wrapping_sub(7));
        produced(twice) == produced(once)
    }
    check(p as fn(Vec<i32>) -> bool);
}

#[test]
fn prop_map_is_flat_map_of_enum_one() {
    fn p(xs: Vec<i32>) -> bool {
        produced(src(xs.clone()).map(|x| x ^ 1))
            == produced(src(xs).flat_map(|x| enum_one(x ^ 1)))
    }
    check(p as fn(Vec<i32>) -> bool);
}

#[test]
fn prop_reduced_is_fold() {
    fn p(xs: Vec<i32>) -> bool {
        let total = xs.iter().fold(0i64, |acc, &x| acc + x as i64);
        produced(src(xs).reduced(0i64, |acc, x| acc + x as i64)) == vec![total]
    }
    check(p as fn(Vec<i32>) -> bool);
}

#[test]
fn prop_effects_stop_with_take() {
    fn p(xs: Vec<i32>, n: u8) -> bool {
        let n = n as usize % 9;
        let (log, taken) = enum_vec(xs.clone())
            .flat_map_m(|x| Logged::tell(x, x))
            .run(take(n))
            .into_parts();
        let prefix = &xs[..n.min(xs.len())];
        log == prefix && taken == prefix
    }
    check(p as fn(Vec<i32>, u8) -> bool);
}

#[test]
fn prop_bind_m_some_concatenates() {
    fn p(xs: Vec<i32>) -> bool {
        let Id(bound) = src(xs.clone()).bind_m(|x| Some(f(x)));
        let expected = produced(src(xs).flat_map(f));
        bound.map(produced) == Some(expected)
    }
    check(p as fn(Vec<i32>) -> bool);
}

#[test]
fn prop_bind_m_none_if_any_none() {
    fn p(xs: Vec<i32>) -> bool {
        let Id(bound) = src(xs.clone())
            .bind_m(|x| if x < 0 { None } else { Some(enum_one(x)) });
        bound.is_some() == xs.iter().all(|&x| x >= 0)
    }
    check(p as fn(Vec<i32>) -> bool);
}
