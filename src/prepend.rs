use crate::effect::Effect;
use crate::effect::Of;
use crate::enumerator::Enumerator;
use crate::input::Input;
use crate::iteratee::Iteratee;
use crate::step::Step;

#[derive(Clone)]
pub struct Prepend<S: Enumerator> {
    value: S::Item,
    rest: S,
}

impl<S: Enumerator> Prepend<S> {
    pub(crate) fn new(value: S::Item, rest: S) -> Self {
        Prepend { value, rest }
    }
}

impl<S: Enumerator> Enumerator for Prepend<S> {
    type Effect = S::Effect;
    type Item = S::Item;

    fn apply<K>(
        self,
        step: Step<S::Item, K::Output, K>,
    ) -> Of<S::Effect, Step<S::Item, K::Output, K>>
    where
        K: Iteratee<S::Effect, S::Item>,
    {
        let Self { value, rest } = self;
        let fed = step.feed::<S::Effect>(Input::El(value));
        S::Effect::bind(fed, move |step| match step {
            Step::Cont(_) => rest.apply(step),
            done => S::Effect::pure(done),
        })
    }
}
