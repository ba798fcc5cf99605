use alloc::vec::Vec;

use crate::effect::Effect;
use crate::effect::Of;
use crate::input::Input;
use crate::iteratee::Iteratee;
use crate::step::Step;

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Collect<E>(Vec<E>);

impl<F: Effect, E> Iteratee<F, E> for Collect<E> {
    type Output = Vec<E>;
    fn feed(self, input: Input<E>) -> Of<F, Step<E, Vec<E>, Self>> {
        let Self(mut items) = self;
        F::pure(match input {
            Input::End => Step::Done(items, Some(Input::End)),
            input => {
                items.extend(input);
                Step::Cont(Self(items))
            }
        })
    }
}

/// An iteratee that collects every element it is fed, in order, and finishes
/// with all of them at the end of the stream.
///
/// This is what `Enumerator::to_vec()` runs. It never finishes early, so it
/// never returns when driven by an infinite source.
///
/// ```rust
/// use cocoenum::{Enumerator, Id, Identity, collect, enum_vec};
///
/// let Id(items) = enum_vec::<Identity, _>(vec![3, 1, 4]).run(collect());
/// assert_eq!(items, vec![3, 1, 4]);
/// ```
pub fn collect<E>() -> Collect<E> {
    Collect(Vec::new())
}
