use core::ops::ControlFlow;

use crate::effect::Effect;
use crate::effect::Lifted;
use crate::effect::Of;
use crate::input::Input;
use crate::iteratee::Iteratee;
use crate::step::Step;

#[derive(Clone)]
pub struct Fold<Acc, G> {
    acc: Acc,
    f: G,
}

impl<F, E, Acc, G> Iteratee<F, E> for Fold<Acc, G>
where
    F: Effect,
    G: FnMut(Acc, E) -> Acc,
{
    type Output = Acc;
    fn feed(self, input: Input<E>) -> Of<F, Step<E, Acc, Self>> {
        let Self { acc, mut f } = self;
        F::pure(match input {
            Input::End => Step::Done(acc, Some(Input::End)),
            input => {
                let acc = input.into_iter().fold(acc, &mut f);
                Step::Cont(Self { acc, f })
            }
        })
    }
}

/// An iteratee that left-folds every element into `init` with `f` and
/// finishes with the accumulator at the end of the stream.
///
/// ```rust
/// use cocoenum::{Enumerator, Id, Identity, enum_vec, fold};
///
/// let sum = enum_vec::<Identity, _>(vec![1, 2, 3])
///     .run(fold(0, |acc, x: i32| acc + x));
/// assert_eq!(sum, Id(6));
/// ```
pub fn fold<Acc, E, G>(init: Acc, f: G) -> Fold<Acc, G>
where
    G: FnMut(Acc, E) -> Acc,
{
    Fold { acc: init, f }
}

#[derive(Clone)]
pub struct FoldM<Acc, G> {
    acc: Acc,
    f: G,
}

impl<F, E, Acc, G, M> Iteratee<F, E> for FoldM<Acc, G>
where
    F: Effect,
    G: FnMut(Acc, E) -> M,
    M: Lifted<Effect = F, Value = Acc>,
{
    type Output = Acc;
    fn feed(self, input: Input<E>) -> Of<F, Step<E, Acc, Self>> {
        use ControlFlow::{Break, Continue};
        let Self { acc, f } = self;
        if input.is_end() {
            return F::pure(Step::Done(acc, Some(Input::End)));
        }
        // Each element's fold step must complete before the next one starts.
        let mut items = input.into_iter();
        F::tail_rec::<_, Step<E, Acc, Self>, _>((acc, f), move |(acc, mut f)| {
            match items.next() {
                Some(e) => F::map(f(acc, e).into_effect(), move |acc| {
                    Continue((acc, f))
                }),
                None => F::pure(Break(Step::Cont(FoldM { acc, f }))),
            }
        })
    }
}

/// Like `fold()`, but every fold step is itself an effect, sequenced in the
/// order the elements arrive.
///
/// ```rust
/// use cocoenum::{Enumerator, Optional, enum_vec, fold_m};
///
/// let checked_sum = |acc: u8, x: u8| acc.checked_add(x);
/// let sum = enum_vec::<Optional, _>(vec![1, 2, 3]).run(fold_m(0, checked_sum));
/// assert_eq!(sum, Some(6));
/// let overflow =
///     enum_vec::<Optional, _>(vec![200, 100]).run(fold_m(0, checked_sum));
/// assert_eq!(overflow, None);
/// ```
pub fn fold_m<Acc, E, G, M>(init: Acc, f: G) -> FoldM<Acc, G>
where
    G: FnMut(Acc, E) -> M,
    M: Lifted<Value = Acc>,
{
    FoldM { acc: init, f }
}
