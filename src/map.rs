use crate::effect::Effect;
use crate::effect::Of;
use crate::enumerator::Enumerator;
use crate::input::Input;
use crate::iteratee::Iteratee;
use crate::step::Step;

#[derive(Clone)]
pub struct Map<S, G> {
    src: S,
    f: G,
}

impl<S, G> Map<S, G> {
    pub(crate) fn new(src: S, f: G) -> Self {
        Map { src, f }
    }
}

impl<S, G, E2> Enumerator for Map<S, G>
where
    S: Enumerator,
    G: FnMut(S::Item) -> E2,
{
    type Effect = S::Effect;
    type Item = E2;

    fn apply<K>(
        self,
        step: Step<E2, K::Output, K>,
    ) -> Of<S::Effect, Step<E2, K::Output, K>>
    where
        K: Iteratee<S::Effect, E2>,
    {
        let Self { src, f } = self;
        match step {
            Step::Cont(k) => S::Effect::map(
                src.apply(Step::Cont(MapInput { k, f })),
                MapInput::into_inner,
            ),
            done => S::Effect::pure(done),
        }
    }
}

/// Sits between the source and the downstream iteratee `k`, transforming each
/// input on its way through. It finishes, with the downstream step as its
/// result, as soon as `k` does.
struct MapInput<K, G> {
    k: K,
    f: G,
}

impl<K, G> MapInput<K, G> {
    fn into_inner<E, E2, A>(
        outer: Step<E, Step<E2, A, K>, Self>,
    ) -> Step<E2, A, K> {
        match outer {
            Step::Cont(MapInput { k, .. }) => Step::Cont(k),
            Step::Done(inner, _) => inner,
        }
    }
}

impl<F, E, E2, K, G> Iteratee<F, E> for MapInput<K, G>
where
    F: Effect,
    K: Iteratee<F, E2>,
    G: FnMut(E) -> E2,
{
    type Output = Step<E2, K::Output, K>;

    fn feed(self, input: Input<E>) -> Of<F, Step<E, Self::Output, Self>> {
        let Self { k, mut f } = self;
        if input.is_end() {
            // The end of the stream is the caller's to signal downstream.
            return F::pure(Step::Done(Step::Cont(k), Some(Input::End)));
        }
        F::map(k.feed(input.map(&mut f)), move |step| match step {
            Step::Cont(k) => Step::Cont(MapInput { k, f }),
            done => Step::Done(done, None),
        })
    }
}
