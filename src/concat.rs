use alloc::vec::Vec;
use core::ops::ControlFlow;

use ControlFlow::{Break, Continue};

use crate::effect::Effect;
use crate::effect::Of;
use crate::enumerator::Enumerator;
use crate::iteratee::Iteratee;
use crate::step::Step;

#[derive(Clone)]
pub struct Concat<N>(Vec<N>);

impl<N: Enumerator> Enumerator for Concat<N> {
    type Effect = N::Effect;
    type Item = N::Item;

    fn apply<K>(
        self,
        step: Step<N::Item, K::Output, K>,
    ) -> Of<N::Effect, Step<N::Item, K::Output, K>>
    where
        K: Iteratee<N::Effect, N::Item>,
    {
        let Self(parts) = self;
        N::Effect::tail_rec::<_, Step<N::Item, K::Output, K>, _>(
            (step, parts.into_iter()),
            |(step, mut parts)| match step {
                Step::Cont(k) => match parts.next() {
                    Some(part) => N::Effect::map(
                        part.apply(Step::Cont(k)),
                        move |step| Continue((step, parts)),
                    ),
                    None => N::Effect::pure(Break(Step::Cont(k))),
                },
                done => N::Effect::pure(Break(done)),
            },
        )
    }
}

/// Creates an enumerator that produces the elements of each of `parts` in
/// turn.
///
/// This is `append()` folded over a list whose length is only known at run
/// time, starting from `empty()`. It is what `Enumerator::bind_m()` produces.
///
/// ```rust
/// use cocoenum::{EnumeratorAssertions, Identity, concat, enum_vec};
///
/// concat(vec![
///     enum_vec::<Identity, _>(vec![1, 2]),
///     enum_vec(vec![]),
///     enum_vec(vec![3]),
/// ])
/// .assert_emits(&[1, 2, 3]);
/// ```
pub fn concat<N: Enumerator>(parts: Vec<N>) -> Concat<N> {
    Concat(parts)
}
