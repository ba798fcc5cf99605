use crate::effect::Effect;
use crate::effect::Of;
use crate::input::Input;
use crate::step::Step;

/// A consumer that is fed `Input<E>` signals one at a time and eventually
/// finishes with a value of type `Output`, performing its steps in the effect
/// context `F`.
///
/// `feed()` consumes the iteratee and only hands back a new one inside
/// `Step::Cont`. A finished iteratee therefore cannot be fed again by
/// construction; `Step::feed()` provides the "feeding a finished iteratee is a
/// no-op" behavior on top.
///
/// An iteratee must answer `Input::End` with `Step::Done`. There is nothing
/// left to feed after the end of the stream, so `Enumerator::run()` panics if
/// an iteratee keeps going.
///
/// Most iteratees don't care which effect they run in and implement the trait
/// for every `F: Effect`, as `collect()` does:
///
/// ```rust
/// use cocoenum::{Effect, Input, Iteratee, Of, Step};
///
/// struct Count(usize);
///
/// impl<F: Effect, E> Iteratee<F, E> for Count {
///     type Output = usize;
///     fn feed(self, input: Input<E>) -> Of<F, Step<E, usize, Self>> {
///         let Count(n) = self;
///         F::pure(match input {
///             Input::End => Step::Done(n, Some(Input::End)),
///             input => Step::Cont(Count(n + input.len())),
///         })
///     }
/// }
/// ```
pub trait Iteratee<F: Effect, E>: Sized {
    type Output;

    /// The state the iteratee is in before it has been fed anything.
    ///
    /// Most iteratees want input right away, which is the default. One that
    /// already knows its result, like `take(0)`, returns `Step::Done` here, and
    /// `Enumerator::run()` then never touches the source.
    fn start(self) -> Step<E, Self::Output, Self> {
        Step::Cont(self)
    }

    /// Consumes one input signal and returns the next state of the
    /// iteratee, inside the effect context.
    fn feed(self, input: Input<E>) -> Of<F, Step<E, Self::Output, Self>>;
}
