use crate::effect::Effect;
use crate::effect::Lifted;
use crate::effect::Of;
use crate::enumerator::Enumerator;
use crate::input::Input;
use crate::iteratee::Iteratee;
use crate::step::Step;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Lift<M>(M);

impl<M: Lifted> Enumerator for Lift<M> {
    type Effect = M::Effect;
    type Item = M::Value;

    fn apply<K>(
        self,
        step: Step<M::Value, K::Output, K>,
    ) -> Of<M::Effect, Step<M::Value, K::Output, K>>
    where
        K: Iteratee<M::Effect, M::Value>,
    {
        let Self(m) = self;
        match step {
            Step::Cont(k) => M::Effect::bind(m.into_effect(), move |value| {
                k.feed(Input::El(value))
            }),
            done => M::Effect::pure(done),
        }
    }
}

/// Creates an enumerator with one element: the value inside `m`, once the
/// effect that produces it has completed.
///
/// The effect only runs when the enumerator is driven by an iteratee that
/// still wants input.
///
/// ```rust
/// use cocoenum::{Enumerator, lift_to_enumerator};
///
/// assert_eq!(lift_to_enumerator(Some(5)).to_vec(), Some(vec![5]));
/// assert_eq!(lift_to_enumerator(None::<i32>).to_vec(), None);
/// ```
pub fn lift_to_enumerator<M: Lifted>(m: M) -> Lift<M> {
    Lift(m)
}

/// Implemented by values that can be turned into an enumerator.
///
/// Every value already inside an effect context (anything `Lifted`, like
/// `Option<T>` or `Result<T, E>`) becomes a one-element enumerator, the same
/// one `lift_to_enumerator()` makes.
///
/// ```rust
/// use cocoenum::{Enumerator, IntoEnumerator};
///
/// let one = Ok::<_, String>("one").into_enumerator();
/// assert_eq!(one.to_vec(), Ok(vec!["one"]));
/// ```
pub trait IntoEnumerator {
    type IntoEnumerator: Enumerator;
    fn into_enumerator(self) -> Self::IntoEnumerator;
}

impl<M: Lifted> IntoEnumerator for M {
    type IntoEnumerator = Lift<M>;
    fn into_enumerator(self) -> Self::IntoEnumerator {
        lift_to_enumerator(self)
    }
}
