use alloc::vec::Vec;

use crate::effect::Effect;
use crate::effect::Of;
use crate::input::Input;
use crate::iteratee::Iteratee;
use crate::step::Step;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Head;

impl<F: Effect, E> Iteratee<F, E> for Head {
    type Output = Option<E>;
    fn feed(self, input: Input<E>) -> Of<F, Step<E, Option<E>, Self>> {
        F::pure(match input {
            Input::El(e) => Step::Done(Some(e), None),
            Input::Chunk(items) => {
                let mut items = items.into_vec().into_iter();
                let first = items.next();
                Step::Done(first, Input::chunk(items.collect::<Vec<_>>()))
            }
            Input::End => Step::Done(None, Some(Input::End)),
        })
    }
}

/// An iteratee that finishes with the first element it is fed, or `None` if
/// the stream is empty.
///
/// It finishes on the very first input, so it can be driven by infinite
/// sources. The rest of a chunk is kept as leftover input.
///
/// ```rust
/// use cocoenum::{Enumerator, Id, Identity, head, repeat};
///
/// assert_eq!(repeat::<Identity, _>(7).run(head()), Id(Some(7)));
/// ```
pub fn head() -> Head {
    Head
}
