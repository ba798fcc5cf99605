use alloc::vec::Vec;

use crate::effect::Effect;
use crate::effect::Of;
use crate::input::Input;
use crate::iteratee::Iteratee;
use crate::step::Step;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Take<E> {
    remaining: usize,
    taken: Vec<E>,
}

impl<F: Effect, E> Iteratee<F, E> for Take<E> {
    type Output = Vec<E>;

    fn start(self) -> Step<E, Vec<E>, Self> {
        if self.remaining == 0 {
            Step::done(self.taken)
        } else {
            Step::Cont(self)
        }
    }

    fn feed(self, input: Input<E>) -> Of<F, Step<E, Vec<E>, Self>> {
        use Step::{Cont, Done};
        let Self {
            mut remaining,
            mut taken,
        } = self;
        F::pure(match input {
            Input::End => Done(taken, Some(Input::End)),
            input if remaining == 0 => Done(taken, Some(input)),
            Input::El(e) => {
                taken.push(e);
                remaining -= 1;
                if remaining == 0 {
                    Done(taken, None)
                } else {
                    Cont(Self { remaining, taken })
                }
            }
            Input::Chunk(items) => {
                let mut items = items.into_vec();
                if items.len() >= remaining {
                    let rest = items.split_off(remaining);
                    taken.extend(items);
                    Done(taken, Input::chunk(rest))
                } else {
                    remaining -= items.len();
                    taken.extend(items);
                    Cont(Self { remaining, taken })
                }
            }
        })
    }
}

/// An iteratee that collects the first `n` elements it is fed.
///
/// It finishes as soon as it has received the `n`th element, without waiting
/// for another input, which is what lets it bound an infinite source. If the
/// stream ends first, it finishes with however many elements it got.
/// `take(0)` is finished before it starts, so running it pulls nothing from
/// the source.
///
/// ```rust
/// use cocoenum::{Enumerator, Id, Identity, iterate, take};
///
/// let Id(evens) = iterate::<Identity, _, _>(0, |n| n + 2).run(take(4));
/// assert_eq!(evens, vec![0, 2, 4, 6]);
/// ```
pub fn take<E>(n: usize) -> Take<E> {
    Take {
        remaining: n,
        taken: Vec::with_capacity(n.min(64)),
    }
}
