use crate::effect::Effect;
use crate::effect::Of;
use crate::enumerator::Enumerator;
use crate::iteratee::Iteratee;
use crate::step::Step;

#[derive(Clone)]
pub struct Append<A, B> {
    first: A,
    second: B,
}

impl<A, B> Append<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Append { first, second }
    }
}

impl<A, B> Enumerator for Append<A, B>
where
    A: Enumerator,
    B: Enumerator<Effect = A::Effect, Item = A::Item>,
{
    type Effect = A::Effect;
    type Item = A::Item;

    fn apply<K>(
        self,
        step: Step<A::Item, K::Output, K>,
    ) -> Of<A::Effect, Step<A::Item, K::Output, K>>
    where
        K: Iteratee<A::Effect, A::Item>,
    {
        let Self { first, second } = self;
        A::Effect::bind(first.apply(step), move |step| match step {
            Step::Cont(_) => second.apply(step),
            done => A::Effect::pure(done),
        })
    }
}
