use core::marker::PhantomData;

use crate::effect::Effect;
use crate::effect::Of;
use crate::enumerator::Enumerator;
use crate::input::Input;
use crate::iteratee::Iteratee;
use crate::step::Step;
use crate::unfold::unfold;

pub struct Repeat<F, E> {
    value: E,
    _phantom: PhantomData<fn() -> F>,
}

impl<F, E: Clone> Clone for Repeat<F, E> {
    fn clone(&self) -> Self {
        repeat(self.value.clone())
    }
}

impl<F: Effect, E: Clone> Enumerator for Repeat<F, E> {
    type Effect = F;
    type Item = E;

    fn apply<K>(self, step: Step<E, K::Output, K>) -> Of<F, Step<E, K::Output, K>>
    where
        K: Iteratee<F, E>,
    {
        unfold::<F, _, _, _, _>(step, self.value, |value: E| {
            F::pure(Some((Input::El(value.clone()), value)))
        })
    }
}

/// Creates an infinite enumerator that produces `value` forever.
///
/// Running it only finishes if the iteratee does.
///
/// ```rust
/// use cocoenum::{Enumerator, Id, Identity, repeat, take};
///
/// assert_eq!(repeat::<Identity, _>(0).run(take(3)), Id(vec![0, 0, 0]));
/// ```
pub fn repeat<F, E: Clone>(value: E) -> Repeat<F, E> {
    Repeat {
        value,
        _phantom: PhantomData,
    }
}
