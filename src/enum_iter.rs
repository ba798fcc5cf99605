use alloc::collections::LinkedList;
use alloc::vec::Vec;
use core::iter::Cloned;
use core::marker::PhantomData;
use core::slice;

use crate::effect::Effect;
use crate::effect::Of;
use crate::enumerator::Enumerator;
use crate::input::Input;
use crate::iteratee::Iteratee;
use crate::step::Step;
use crate::unfold::unfold;

pub struct EnumIter<F, I> {
    iter: I,
    _phantom: PhantomData<fn() -> F>,
}

impl<F, I: Clone> Clone for EnumIter<F, I> {
    fn clone(&self) -> Self {
        EnumIter::new(self.iter.clone())
    }
}

impl<F, I> EnumIter<F, I> {
    fn new(iter: I) -> Self {
        EnumIter {
            iter,
            _phantom: PhantomData,
        }
    }
}

impl<F: Effect, I: Iterator> Enumerator for EnumIter<F, I> {
    type Effect = F;
    type Item = I::Item;

    fn apply<K>(
        self,
        step: Step<I::Item, K::Output, K>,
    ) -> Of<F, Step<I::Item, K::Output, K>>
    where
        K: Iteratee<F, I::Item>,
    {
        unfold::<F, _, _, _, _>(step, self.iter, |mut iter: I| {
            F::pure(iter.next().map(|e| (Input::El(e), iter)))
        })
    }
}

/// Creates an enumerator over the elements of a `Vec`, in order.
///
/// ```rust
/// use cocoenum::{Enumerator, Id, Identity, enum_vec};
///
/// assert_eq!(enum_vec::<Identity, _>(vec![3, 1, 4]).to_vec(), Id(vec![3, 1, 4]));
/// ```
pub fn enum_vec<F, E>(items: Vec<E>) -> EnumIter<F, alloc::vec::IntoIter<E>> {
    EnumIter::new(items.into_iter())
}

/// Creates an enumerator over the elements of a `LinkedList`, in order.
pub fn enum_list<F, E>(
    items: LinkedList<E>,
) -> EnumIter<F, alloc::collections::linked_list::IntoIter<E>> {
    EnumIter::new(items.into_iter())
}

/// Creates an enumerator over anything iterable, in order.
///
/// The iterator is advanced lazily, one element per input, and only while
/// the iteratee wants more, so it may be infinite.
///
/// ```rust
/// use cocoenum::{Enumerator, Id, Identity, enum_stream, take};
///
/// let squares = (1..).map(|n: u64| n * n);
/// assert_eq!(enum_stream::<Identity, _>(squares).run(take(4)), Id(vec![1, 4, 9, 16]));
/// ```
pub fn enum_stream<F, I>(items: I) -> EnumIter<F, I::IntoIter>
where
    I: IntoIterator,
{
    EnumIter::new(items.into_iter())
}

/// Creates an enumerator over the elements of `items` with indices in
/// `start..end`.
///
/// Both bounds are clamped to `items.len()`, so a range that runs past the end
/// of the slice is cut short, and an empty or inverted range produces no
/// elements at all. Elements are cloned out of the slice as they are fed.
///
/// ```rust
/// use cocoenum::{EnumeratorAssertions, Identity, enum_indexed_seq};
///
/// let xs = [10, 20, 30, 40];
/// enum_indexed_seq::<Identity, _>(&xs, 1, 3).assert_emits(&[20, 30]);
/// enum_indexed_seq::<Identity, _>(&xs, 2, 99).assert_emits(&[30, 40]);
/// enum_indexed_seq::<Identity, _>(&xs, 3, 1).assert_empty();
/// ```
pub fn enum_indexed_seq<F, E: Clone>(
    items: &[E],
    start: usize,
    end: usize,
) -> EnumIter<F, Cloned<slice::Iter<'_, E>>> {
    let start = start.min(items.len());
    let end = end.clamp(start, items.len());
    EnumIter::new(items[start..end].iter().cloned())
}
