use core::marker::PhantomData;

use crate::effect::Effect;
use crate::effect::Lifted;
use crate::effect::Of;
use crate::enumerator::Enumerator;
use crate::input::Input;
use crate::iteratee::Iteratee;
use crate::step::Step;
use crate::unfold::Cursor;
use crate::unfold::unfold;

// All four generators share one shape: emit the seed, then keep deriving the
// next element from the last one. The next element is only derived when the
// iteratee asks for it, so `f` never runs ahead of the drive.

pub struct Iterate<F, E, G> {
    seed: E,
    f: G,
    _phantom: PhantomData<fn() -> F>,
}

impl<F, E: Clone, G: Clone> Clone for Iterate<F, E, G> {
    fn clone(&self) -> Self {
        Iterate {
            seed: self.seed.clone(),
            f: self.f.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<F, E, G> Enumerator for Iterate<F, E, G>
where
    F: Effect,
    E: Clone,
    G: FnMut(E) -> E,
{
    type Effect = F;
    type Item = E;

    fn apply<K>(self, step: Step<E, K::Output, K>) -> Of<F, Step<E, K::Output, K>>
    where
        K: Iteratee<F, E>,
    {
        let Self { seed, mut f, .. } = self;
        unfold::<F, _, _, _, _>(step, Cursor::Seed(seed), move |cursor| {
            let next = match cursor {
                Cursor::Seed(seed) => seed,
                Cursor::Last(last) => f(last),
            };
            F::pure(Some((Input::El(next.clone()), Cursor::Last(next))))
        })
    }
}

/// Creates an infinite enumerator that produces `seed`, `f(seed)`,
/// `f(f(seed))`, and so on.
///
/// ```rust
/// use cocoenum::{Enumerator, Id, Identity, iterate, take};
///
/// let powers = iterate::<Identity, _, _>(1, |n| n * 2);
/// assert_eq!(powers.run(take(5)), Id(vec![1, 2, 4, 8, 16]));
/// ```
pub fn iterate<F, E, G>(seed: E, f: G) -> Iterate<F, E, G>
where
    E: Clone,
    G: FnMut(E) -> E,
{
    Iterate {
        seed,
        f,
        _phantom: PhantomData,
    }
}

#[derive(Clone)]
pub struct IterateM<E, G> {
    seed: E,
    f: G,
}

impl<E, G, M> Enumerator for IterateM<E, G>
where
    E: Clone,
    G: FnMut(E) -> M,
    M: Lifted<Value = E>,
{
    type Effect = M::Effect;
    type Item = E;

    fn apply<K>(
        self,
        step: Step<E, K::Output, K>,
    ) -> Of<M::Effect, Step<E, K::Output, K>>
    where
        K: Iteratee<M::Effect, E>,
    {
        let Self { seed, mut f } = self;
        unfold::<M::Effect, _, _, _, _>(
            step,
            Cursor::Seed(seed),
            move |cursor| match cursor {
                Cursor::Seed(seed) => M::Effect::pure(Some((
                    Input::El(seed.clone()),
                    Cursor::Last(seed),
                ))),
                Cursor::Last(last) => {
                    M::Effect::map(f(last).into_effect(), |next: E| {
                        Some((Input::El(next.clone()), Cursor::Last(next)))
                    })
                }
            },
        )
    }
}

/// Like `iterate()`, but each successive element is computed by an effect.
///
/// Each call to `f` only starts after the previous element's effect has
/// completed and that element has been fed to the iteratee. The effect
/// context is the one `f` returns.
///
/// ```rust
/// use cocoenum::{Enumerator, Logged, iterate_m, take};
///
/// let counted = iterate_m(0, |n| Logged::tell(n, n + 1)).run(take(3));
/// // Only the two steps needed for three elements ran.
/// assert_eq!(counted.into_parts(), (vec![0, 1], vec![0, 1, 2]));
/// ```
pub fn iterate_m<E, G, M>(seed: E, f: G) -> IterateM<E, G>
where
    E: Clone,
    G: FnMut(E) -> M,
    M: Lifted<Value = E>,
{
    IterateM { seed, f }
}

pub struct IterateUntil<F, E, G> {
    seed: E,
    f: G,
    _phantom: PhantomData<fn() -> F>,
}

impl<F, E: Clone, G: Clone> Clone for IterateUntil<F, E, G> {
    fn clone(&self) -> Self {
        IterateUntil {
            seed: self.seed.clone(),
            f: self.f.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<F, E, G> Enumerator for IterateUntil<F, E, G>
where
    F: Effect,
    E: Clone,
    G: FnMut(E) -> Option<E>,
{
    type Effect = F;
    type Item = E;

    fn apply<K>(self, step: Step<E, K::Output, K>) -> Of<F, Step<E, K::Output, K>>
    where
        K: Iteratee<F, E>,
    {
        let Self { seed, mut f, .. } = self;
        unfold::<F, _, _, _, _>(step, Cursor::Seed(seed), move |cursor| {
            let next = match cursor {
                Cursor::Seed(seed) => Some(seed),
                Cursor::Last(last) => f(last),
            };
            F::pure(next.map(|next| (Input::El(next.clone()), Cursor::Last(next))))
        })
    }
}

/// Creates an enumerator that produces `seed`, then keeps producing whatever
/// `f` returns for the last element, until `f` returns `None`.
///
/// The element for which `f` returned `None` has already been produced, so
/// it is the last one.
///
/// ```rust
/// use cocoenum::{EnumeratorAssertions, Identity, iterate_until};
///
/// iterate_until::<Identity, _, _>(0, |i| if i == 3 { None } else { Some(i + 1) })
///     .assert_emits(&[0, 1, 2, 3]);
/// ```
pub fn iterate_until<F, E, G>(seed: E, f: G) -> IterateUntil<F, E, G>
where
    E: Clone,
    G: FnMut(E) -> Option<E>,
{
    IterateUntil {
        seed,
        f,
        _phantom: PhantomData,
    }
}

#[derive(Clone)]
pub struct IterateUntilM<E, G> {
    seed: E,
    f: G,
}

impl<E, G, M> Enumerator for IterateUntilM<E, G>
where
    E: Clone,
    G: FnMut(E) -> M,
    M: Lifted<Value = Option<E>>,
{
    type Effect = M::Effect;
    type Item = E;

    fn apply<K>(
        self,
        step: Step<E, K::Output, K>,
    ) -> Of<M::Effect, Step<E, K::Output, K>>
    where
        K: Iteratee<M::Effect, E>,
    {
        let Self { seed, mut f } = self;
        unfold::<M::Effect, _, _, _, _>(
            step,
            Cursor::Seed(seed),
            move |cursor| match cursor {
                Cursor::Seed(seed) => M::Effect::pure(Some((
                    Input::El(seed.clone()),
                    Cursor::Last(seed),
                ))),
                Cursor::Last(last) => {
                    M::Effect::map(f(last).into_effect(), |next: Option<E>| {
                        next.map(|next| {
                            (Input::El(next.clone()), Cursor::Last(next))
                        })
                    })
                }
            },
        )
    }
}

/// Like `iterate_until()`, but `f` computes the next element (or the end) by
/// an effect, one step at a time.
///
/// ```rust
/// use cocoenum::{Enumerator, iterate_until_m};
///
/// let countdown = iterate_until_m(3u32, |n| Ok::<_, String>(n.checked_sub(1)));
/// assert_eq!(countdown.to_vec(), Ok(vec![3, 2, 1, 0]));
/// ```
pub fn iterate_until_m<E, G, M>(seed: E, f: G) -> IterateUntilM<E, G>
where
    E: Clone,
    G: FnMut(E) -> M,
    M: Lifted<Value = Option<E>>,
{
    IterateUntilM { seed, f }
}
