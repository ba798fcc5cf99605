use crate::effect::Effect;
use crate::effect::Of;
use crate::input::Input;
use crate::iteratee::Iteratee;

/// The state of an iteratee between two inputs.
///
///   * `Cont(k)`: the iteratee `k` wants more input.
///   * `Done(a, leftover)`: the iteratee finished with the result `a`.
///     `leftover` holds whatever part of the last input it did not consume,
///     e.g. the tail of a chunk that arrived when only its head was needed.
///
/// The consumer is the one that suspends here: an enumerator feeds it, looks
/// at the step it hands back, and only keeps going on `Cont`.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Step<E, A, K> {
    Cont(K),
    Done(A, Option<Input<E>>),
}

use Step::{Cont, Done};

impl<E, A, K> Step<E, A, K> {
    /// A finished step with nothing left over.
    pub fn done(result: A) -> Self {
        Done(result, None)
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Done(_, _))
    }

    /// Returns the result and leftover input, if the step is `Done`.
    pub fn into_done(self) -> Option<(A, Option<Input<E>>)> {
        match self {
            Cont(_) => None,
            Done(a, leftover) => Some((a, leftover)),
        }
    }

    /// Returns the continuing iteratee, if the step is `Cont`.
    pub fn into_cont(self) -> Option<K> {
        match self {
            Cont(k) => Some(k),
            Done(_, _) => None,
        }
    }

    /// Feeds `input` to the iteratee if it is still continuing.
    ///
    /// Feeding a `Done` step is a no-op that yields the same `Done` step
    /// again, leftover included. The combinators rely on this when a
    /// downstream iteratee finishes in the middle of an `append()`.
    ///
    /// ```rust
    /// use cocoenum::{Id, Identity, Input, Step, head};
    ///
    /// let step = Step::Cont(head());
    /// let Id(step) = step.feed::<Identity>(Input::El(1));
    /// assert_eq!(step.clone().into_done(), Some((Some(1), None)));
    /// let Id(again) = step.clone().feed::<Identity>(Input::El(2));
    /// assert_eq!(again.into_done(), Some((Some(1), None)));
    /// ```
    pub fn feed<F>(self, input: Input<E>) -> Of<F, Self>
    where
        F: Effect,
        K: Iteratee<F, E, Output = A>,
    {
        match self {
            Cont(k) => k.feed(input),
            done => F::pure(done),
        }
    }
}
