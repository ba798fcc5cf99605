use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::effect::Effect;
use crate::effect::Of;
use crate::enumerator::Enumerator;
use crate::input::Input;
use crate::iteratee::Iteratee;
use crate::step::Step;
use crate::unfold::unfold;

pub struct EnumChunks<F, E> {
    items: Vec<E>,
    size: usize,
    _phantom: PhantomData<fn() -> F>,
}

impl<F, E: Clone> Clone for EnumChunks<F, E> {
    fn clone(&self) -> Self {
        enum_chunks(self.items.clone(), self.size)
    }
}

impl<F: Effect, E> Enumerator for EnumChunks<F, E> {
    type Effect = F;
    type Item = E;

    fn apply<K>(self, step: Step<E, K::Output, K>) -> Of<F, Step<E, K::Output, K>>
    where
        K: Iteratee<F, E>,
    {
        let Self { items, size, .. } = self;
        unfold::<F, _, _, _, _>(step, items.into_iter(), move |mut items| {
            let batch: Vec<E> = items.by_ref().take(size).collect();
            F::pure(Input::chunk(batch).map(|chunk| (chunk, items)))
        })
    }
}

/// Creates an enumerator over the elements of a `Vec` that feeds them in
/// batches of up to `size` elements, as `Input::Chunk`s. A `size` of zero is
/// treated as one.
///
/// Iteratees see the same elements in the same order as with `enum_vec()`,
/// in fewer steps.
///
/// ```rust
/// use cocoenum::{Enumerator, Id, Identity, enum_chunks, take};
///
/// let chunked = enum_chunks::<Identity, _>(vec![1, 2, 3, 4, 5], 2);
/// assert_eq!(chunked.clone().to_vec(), Id(vec![1, 2, 3, 4, 5]));
/// assert_eq!(chunked.run(take(3)), Id(vec![1, 2, 3]));
/// ```
pub fn enum_chunks<F, E>(items: Vec<E>, size: usize) -> EnumChunks<F, E> {
    EnumChunks {
        items,
        size: size.max(1),
        _phantom: PhantomData,
    }
}
