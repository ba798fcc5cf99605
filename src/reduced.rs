use crate::effect::Effect;
use crate::effect::Lifted;
use crate::effect::Of;
use crate::enumerator::Enumerator;
use crate::fold::fold;
use crate::fold::fold_m;
use crate::input::Input;
use crate::iteratee::Iteratee;
use crate::step::Step;

#[derive(Clone)]
pub struct Reduced<S, Acc, G> {
    src: S,
    init: Acc,
    f: G,
}

impl<S, Acc, G> Reduced<S, Acc, G> {
    pub(crate) fn new(src: S, init: Acc, f: G) -> Self {
        Reduced { src, init, f }
    }
}

impl<S, Acc, G> Enumerator for Reduced<S, Acc, G>
where
    S: Enumerator,
    G: FnMut(Acc, S::Item) -> Acc,
{
    type Effect = S::Effect;
    type Item = Acc;

    fn apply<K>(
        self,
        step: Step<Acc, K::Output, K>,
    ) -> Of<S::Effect, Step<Acc, K::Output, K>>
    where
        K: Iteratee<S::Effect, Acc>,
    {
        match step {
            Step::Cont(k) => {
                let Self { src, init, f } = self;
                S::Effect::bind(src.run(fold(init, f)), move |acc| {
                    k.feed(Input::El(acc))
                })
            }
            done => S::Effect::pure(done),
        }
    }
}

#[derive(Clone)]
pub struct ReducedM<S, Acc, G> {
    src: S,
    init: Acc,
    f: G,
}

impl<S, Acc, G> ReducedM<S, Acc, G> {
    pub(crate) fn new(src: S, init: Acc, f: G) -> Self {
        ReducedM { src, init, f }
    }
}

impl<S, Acc, G, M> Enumerator for ReducedM<S, Acc, G>
where
    S: Enumerator,
    G: FnMut(Acc, S::Item) -> M,
    M: Lifted<Effect = S::Effect, Value = Acc>,
{
    type Effect = S::Effect;
    type Item = Acc;

    fn apply<K>(
        self,
        step: Step<Acc, K::Output, K>,
    ) -> Of<S::Effect, Step<Acc, K::Output, K>>
    where
        K: Iteratee<S::Effect, Acc>,
    {
        match step {
            Step::Cont(k) => {
                let Self { src, init, f } = self;
                S::Effect::bind(src.run(fold_m(init, f)), move |acc| {
                    k.feed(Input::El(acc))
                })
            }
            done => S::Effect::pure(done),
        }
    }
}
