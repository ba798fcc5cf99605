// The drive loop shared by every source enumerator.
//
// A source is described by a state `S` and a `pull` function that turns the
// state into the next unit of input plus the next state, or `None` once the
// source is exhausted. `pull` is only ever called while the iteratee is still
// continuing, so a finished iteratee stops the source before it does any more
// work, and an infinite source can be driven by a bounded iteratee.

use core::ops::ControlFlow;

use ControlFlow::{Break, Continue};

use crate::effect::Effect;
use crate::effect::Of;
use crate::input::Input;
use crate::iteratee::Iteratee;
use crate::step::Step;

pub(crate) fn unfold<F, E, K, S, P>(
    step: Step<E, K::Output, K>,
    seed: S,
    mut pull: P,
) -> Of<F, Step<E, K::Output, K>>
where
    F: Effect,
    K: Iteratee<F, E>,
    P: FnMut(S) -> Of<F, Option<(Input<E>, S)>>,
{
    F::tail_rec::<_, Step<E, K::Output, K>, _>(
        (step, seed),
        move |(step, state)| match step {
            Step::Cont(k) => F::bind(pull(state), move |next| match next {
                Some((input, state)) => {
                    F::map(k.feed(input), move |step| Continue((step, state)))
                }
                None => {
                    tracing::trace!(target: "cocoenum", "source exhausted");
                    F::pure(Break(Step::Cont(k)))
                }
            }),
            done => {
                tracing::trace!(
                    target: "cocoenum",
                    "iteratee done; abandoning source"
                );
                F::pure(Break(done))
            }
        },
    )
}

/// Where a generated sequence stands: the seed has not been emitted yet, or
/// `Last` was the most recently emitted element.
pub(crate) enum Cursor<E> {
    Seed(E),
    Last(E),
}
