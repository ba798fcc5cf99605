use core::marker::PhantomData;

use crate::effect::Effect;
use crate::effect::Of;
use crate::enumerator::Enumerator;
use crate::input::Input;
use crate::iteratee::Iteratee;
use crate::step::Step;

pub struct EnumOne<F, E> {
    value: E,
    _phantom: PhantomData<fn() -> F>,
}

impl<F, E: Clone> Clone for EnumOne<F, E> {
    fn clone(&self) -> Self {
        enum_one(self.value.clone())
    }
}

impl<F: Effect, E> Enumerator for EnumOne<F, E> {
    type Effect = F;
    type Item = E;

    fn apply<K>(self, step: Step<E, K::Output, K>) -> Of<F, Step<E, K::Output, K>>
    where
        K: Iteratee<F, E>,
    {
        step.feed::<F>(Input::El(self.value))
    }
}

/// Creates an enumerator with exactly one element.
///
/// `enum_one()` is the unit for `Enumerator::flat_map()`.
///
/// ```rust
/// use cocoenum::{EnumeratorAssertions, Identity, enum_one};
///
/// enum_one::<Identity, _>("only").assert_emits(&["only"]);
/// ```
pub fn enum_one<F, E>(value: E) -> EnumOne<F, E> {
    EnumOne {
        value,
        _phantom: PhantomData,
    }
}
