use core::ops::ControlFlow;

use ControlFlow::{Break, Continue};

use crate::effect::Effect;
use crate::effect::Of;
use crate::enumerator::Enumerator;
use crate::input::Input;
use crate::iteratee::Iteratee;
use crate::step::Step;

#[derive(Clone)]
pub struct FlatMap<S, G> {
    src: S,
    f: G,
}

impl<S, G> FlatMap<S, G> {
    pub(crate) fn new(src: S, f: G) -> Self {
        FlatMap { src, f }
    }
}

impl<S, G, N> Enumerator for FlatMap<S, G>
where
    S: Enumerator,
    G: FnMut(S::Item) -> N,
    N: Enumerator<Effect = S::Effect>,
{
    type Effect = S::Effect;
    type Item = N::Item;

    fn apply<K>(
        self,
        step: Step<N::Item, K::Output, K>,
    ) -> Of<S::Effect, Step<N::Item, K::Output, K>>
    where
        K: Iteratee<S::Effect, N::Item>,
    {
        let Self { src, f } = self;
        match step {
            Step::Cont(k) => S::Effect::map(
                src.apply(Step::Cont(FlatMapInput { k, f })),
                |outer| match outer {
                    Step::Cont(FlatMapInput { k, .. }) => Step::Cont(k),
                    Step::Done(inner, _) => inner,
                },
            ),
            done => S::Effect::pure(done),
        }
    }
}

/// Sits between the outer source and the downstream iteratee `k`, and drives
/// `k` with the inner enumerator made from each outer element. It finishes,
/// with the downstream step as its result, as soon as `k` does, which stops
/// the outer source too.
struct FlatMapInput<K, G> {
    k: K,
    f: G,
}

impl<F, E, K, G, N> Iteratee<F, E> for FlatMapInput<K, G>
where
    F: Effect,
    K: Iteratee<F, N::Item>,
    G: FnMut(E) -> N,
    N: Enumerator<Effect = F>,
{
    type Output = Step<N::Item, K::Output, K>;

    fn feed(self, input: Input<E>) -> Of<F, Step<E, Self::Output, Self>> {
        let Self { k, f } = self;
        if input.is_end() {
            return F::pure(Step::Done(Step::Cont(k), Some(Input::End)));
        }
        // A chunk stands for its elements fed one by one, so each element's
        // inner enumerator runs to completion before the next one is made.
        let mut items = input.into_iter();
        let inner = F::tail_rec::<_, (Self::Output, G), _>(
            (Step::Cont(k), f),
            move |(step, mut f)| match step {
                Step::Cont(k) => match items.next() {
                    Some(e) => F::map(f(e).apply(Step::Cont(k)), move |step| {
                        Continue((step, f))
                    }),
                    None => F::pure(Break((Step::Cont(k), f))),
                },
                done => F::pure(Break((done, f))),
            },
        );
        F::map(inner, |(step, f)| match step {
            Step::Cont(k) => Step::Cont(FlatMapInput { k, f }),
            done => Step::Done(done, None),
        })
    }
}
