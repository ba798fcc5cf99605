use core::marker::PhantomData;

use crate::effect::Effect;
use crate::effect::Of;
use crate::enumerator::Enumerator;
use crate::iteratee::Iteratee;
use crate::step::Step;

pub struct Empty<F, E>(PhantomData<fn() -> (F, E)>);

impl<F, E> Clone for Empty<F, E> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<F: Effect, E> Enumerator for Empty<F, E> {
    type Effect = F;
    type Item = E;

    fn apply<K>(self, step: Step<E, K::Output, K>) -> Of<F, Step<E, K::Output, K>>
    where
        K: Iteratee<F, E>,
    {
        F::pure(step)
    }
}

/// Creates an enumerator with no elements. Running it feeds the iteratee
/// nothing but `Input::End`.
///
/// `empty()` is the identity for `Enumerator::append()`.
///
/// ```rust
/// use cocoenum::{Enumerator, EnumeratorAssertions, Identity, empty, enum_one};
///
/// empty::<Identity, i32>().assert_empty();
/// empty().append(enum_one::<Identity, _>(1)).assert_emits(&[1]);
/// ```
pub fn empty<F, E>() -> Empty<F, E> {
    Empty(PhantomData)
}
