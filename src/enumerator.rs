use alloc::vec::Vec;

use crate::append::Append;
use crate::collect::collect;
use crate::concat::Concat;
use crate::concat::concat;
use crate::effect::Effect;
use crate::effect::Lifted;
use crate::effect::Of;
use crate::flat_map::FlatMap;
use crate::fold::fold;
use crate::input::Input;
use crate::iteratee::Iteratee;
use crate::lift::lift_to_enumerator;
use crate::map::Map;
use crate::metaprogramming::Is;
use crate::prepend::Prepend;
use crate::reduced::Reduced;
use crate::reduced::ReducedM;
use crate::step::Step;

/// A producer of a (possibly infinite) sequence of `Item`s that drives an
/// iteratee, performing its steps in the effect context `Effect`.
///
/// An enumerator has no observable behavior other than what it does to the
/// iteratee it is given. `apply()` feeds the iteratee everything the
/// enumerator has, one `Input` at a time, and hands back the iteratee's state
/// without signaling the end of the stream, so that another enumerator can
/// keep feeding it (this is what `append()` does). `run()` is `apply()`
/// followed by `Input::End`.
///
/// Every implementation of `apply()` upholds the same protocol:
///
///   * If the step it is given is already `Done`, it returns that step as is,
///     without doing any work or performing any effect.
///   * After each input it checks the iteratee's new state, and stops as soon
///     as the iteratee is `Done`. No further elements are fetched from the
///     source, and no further effects are performed. This is what lets
///     infinite sources like `repeat()` and `iterate()` drive bounded
///     iteratees like `take()`.
///   * Inputs are fed in exactly the order they are produced, one at a time.
///
/// Enumerators are consumed by the methods that drive them. To drive the same
/// enumerator more than once, clone it first.
///
/// # Examples
///
/// ```rust
/// use cocoenum::Enumerator;
/// use cocoenum::Id;
/// use cocoenum::Identity;
/// use cocoenum::enum_vec;
///
/// let digits = enum_vec::<Identity, _>(vec![3, 1, 4]);
/// assert_eq!(digits.clone().to_vec(), Id(vec![3, 1, 4]));
/// assert_eq!(digits.map(|x| x + 1).to_vec(), Id(vec![4, 2, 5]));
/// ```
pub trait Enumerator: Sized {
    /// The effect context every step of a drive runs in.
    type Effect: Effect;

    /// The type of the elements this enumerator produces.
    type Item;

    /// Feeds this enumerator's elements to the iteratee in `step`, returning
    /// its state afterwards. `Input::End` is not fed.
    fn apply<K>(
        self,
        step: Step<Self::Item, K::Output, K>,
    ) -> Of<Self::Effect, Step<Self::Item, K::Output, K>>
    where
        K: Iteratee<Self::Effect, Self::Item>;

    /// Drives `iteratee` with every element of this enumerator, then with
    /// `Input::End`, and returns its result.
    ///
    /// If the iteratee finishes before the enumerator runs out, `run()` stops
    /// right there and returns the result. An iteratee whose `start()` is
    /// already `Done` gets nothing at all from the source.
    ///
    /// # Panics
    ///
    /// Panics if the iteratee is still continuing after it has been fed
    /// `Input::End`, as it has no result to return.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cocoenum::Enumerator;
    /// use cocoenum::Id;
    /// use cocoenum::Identity;
    /// use cocoenum::repeat;
    /// use cocoenum::take;
    ///
    /// assert_eq!(repeat::<Identity, _>('x').run(take(3)), Id(vec!['x'; 3]));
    /// ```
    fn run<K>(self, iteratee: K) -> Of<Self::Effect, K::Output>
    where
        K: Iteratee<Self::Effect, Self::Item>,
    {
        Self::Effect::bind::<_, K::Output, _>(
            self.apply(iteratee.start()),
            |step| match step {
                Step::Done(result, _) => Self::Effect::pure(result),
                Step::Cont(k) => {
                    tracing::trace!(target: "cocoenum", "feeding end of stream");
                    Self::Effect::map(k.feed(Input::End), |step| match step {
                        Step::Done(result, _) => result,
                        Step::Cont(_) => panic!(
                            "iteratee did not finish at the end of the stream"
                        ),
                    })
                }
            },
        )
    }

    /// Collects every element into a `Vec`, in order.
    ///
    /// This never returns for an infinite enumerator.
    fn to_vec(self) -> Of<Self::Effect, Vec<Self::Item>> {
        self.run(collect())
    }

    /// Fixes the effect type to a specific type.
    ///
    /// The source constructors are generic over the effect, and the compiler
    /// can't always tell which one is meant. This has no runtime overhead; it
    /// returns `self`.
    ///
    /// ```rust
    /// use cocoenum::Enumerator;
    /// use cocoenum::Optional;
    /// use cocoenum::enum_vec;
    ///
    /// assert_eq!(enum_vec(vec![1, 2]).within::<Optional>().to_vec(), Some(vec![1, 2]));
    /// ```
    fn within<F2>(self) -> Self
    where
        F2: Is<Type = Self::Effect>,
    {
        self
    }

    /// Creates an enumerator that produces `value` and then every element of
    /// this one.
    ///
    /// If the iteratee finishes on `value`, this enumerator is never driven.
    ///
    /// ```rust
    /// use cocoenum::{Enumerator, EnumeratorAssertions, Identity, enum_vec};
    ///
    /// enum_vec::<Identity, _>(vec![2, 3]).prepend(1).assert_emits(&[1, 2, 3]);
    /// ```
    fn prepend(self, value: Self::Item) -> Prepend<Self> {
        Prepend::new(value, self)
    }

    /// Creates an enumerator that produces every element of this one, then
    /// every element of `other`.
    ///
    /// If the iteratee finishes while this enumerator is driving it, `other`
    /// is never driven, so none of its effects are performed.
    ///
    /// `append()` and `empty()` form a monoid: `empty()` is an identity on
    /// either side, and `append()` is associative.
    ///
    /// ```rust
    /// use cocoenum::{Enumerator, EnumeratorAssertions, Identity, enum_one};
    ///
    /// enum_one::<Identity, _>(1)
    ///     .append(enum_one(2))
    ///     .append(enum_one(3))
    ///     .assert_emits(&[1, 2, 3]);
    /// ```
    fn append<B>(self, other: B) -> Append<Self, B>
    where
        B: Enumerator<Effect = Self::Effect, Item = Self::Item>,
    {
        Append::new(self, other)
    }

    /// Calls `f` on each element, producing the results instead.
    ///
    /// Compare to `Iterator::map()`. The number, order, and termination of
    /// the elements are unchanged. `f` is called once per element of every
    /// input that reaches the iteratee: a single element only when it is fed,
    /// but a whole `Chunk` at once, before the iteratee sees any of it.
    fn map<E2, G>(self, f: G) -> Map<Self, G>
    where
        G: FnMut(Self::Item) -> E2,
    {
        Map::new(self, f)
    }

    /// Replaces each element with all the elements of the enumerator `f`
    /// returns for it, concatenated in order.
    ///
    /// This is the monadic bind for enumerators, with `enum_one()` as its
    /// unit. If the iteratee finishes in the middle of one of the inner
    /// enumerators, the whole pipeline stops: nothing more is drawn from that
    /// inner enumerator, from this one, or from any later inner enumerator.
    ///
    /// ```rust
    /// use cocoenum::{Enumerator, EnumeratorAssertions, Identity, enum_vec};
    ///
    /// enum_vec::<Identity, _>(vec![1, 2, 3])
    ///     .flat_map(|n| enum_vec(vec![n; n]))
    ///     .assert_emits(&[1, 2, 2, 3, 3, 3]);
    /// ```
    fn flat_map<N, G>(self, f: G) -> FlatMap<Self, G>
    where
        G: FnMut(Self::Item) -> N,
        N: Enumerator<Effect = Self::Effect>,
    {
        FlatMap::new(self, f)
    }

    /// Like `map()`, but `f` returns its result inside the effect context, and
    /// each result is completed before it is fed onward. The effects run one
    /// at a time, in the order of the elements.
    ///
    /// ```rust
    /// use cocoenum::{Enumerator, Optional, enum_vec};
    ///
    /// let halves = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
    /// let ok = enum_vec::<Optional, _>(vec![2, 4]).flat_map_m(halves);
    /// assert_eq!(ok.to_vec(), Some(vec![1, 2]));
    /// let odd = enum_vec::<Optional, _>(vec![2, 3, 4]).flat_map_m(halves);
    /// assert_eq!(odd.to_vec(), None);
    /// ```
    fn flat_map_m<M, G>(
        self,
        mut f: G,
    ) -> impl Enumerator<Effect = Self::Effect, Item = M::Value>
    where
        G: FnMut(Self::Item) -> M,
        M: Lifted<Effect = Self::Effect>,
    {
        self.flat_map(move |e| lift_to_enumerator(f(e)))
    }

    /// Completes each element, which is itself a suspended value in the
    /// effect context, and feeds the value onward.
    ///
    /// This is `flat_map_m()` with the identity function.
    ///
    /// ```rust
    /// use cocoenum::{Enumerator, Fallible, enum_vec};
    ///
    /// let results: Vec<Result<i32, &str>> = vec![Ok(1), Err("boom"), Ok(3)];
    /// assert_eq!(enum_vec::<Fallible<&str>, _>(results).flatten().to_vec(), Err("boom"));
    /// ```
    fn flatten(
        self,
    ) -> impl Enumerator<Effect = Self::Effect, Item = <Self::Item as Lifted>::Value>
    where
        Self::Item: Lifted<Effect = Self::Effect>,
    {
        self.flat_map(lift_to_enumerator::<Self::Item>)
    }

    /// Applies `f` to every element, where `f` returns an enumerator inside a
    /// second, independent context (such as `Option`), and combines the
    /// results left to right in that context.
    ///
    /// The second context's `bind()` decides how the per-element results
    /// combine. For `Option`, the combined result is present only if every
    /// call to `f` returned `Some`, and after the first `None`, `f` is not
    /// called again. The enumerator inside the combined result produces the
    /// elements of every per-element enumerator, in order.
    ///
    /// The source is always driven to the end, in this enumerator's own
    /// effect context, which is why the whole result is wrapped in it.
    ///
    /// ```rust
    /// use cocoenum::{Enumerator, EnumeratorAssertions, Id, Identity, enum_vec};
    ///
    /// let Id(pairs) = enum_vec::<Identity, _>(vec![1, 2])
    ///     .bind_m(|n| Some(enum_vec(vec![n, n * 10])));
    /// pairs.unwrap().assert_emits(&[1, 10, 2, 20]);
    ///
    /// let Id(none) = enum_vec::<Identity, _>(vec![1, 2])
    ///     .bind_m(|n| if n > 1 { None } else { Some(enum_vec(vec![n])) });
    /// assert!(none.is_none());
    /// ```
    #[allow(clippy::type_complexity)]
    fn bind_m<M, N, G>(
        self,
        mut f: G,
    ) -> Of<Self::Effect, Of<M::Effect, Concat<N>>>
    where
        G: FnMut(Self::Item) -> M,
        M: Lifted<Value = N>,
        N: Enumerator<Effect = Self::Effect>,
    {
        let parts = self.run(fold(
            M::Effect::pure(Vec::<N>::new()),
            move |acc, e| {
                M::Effect::bind::<Vec<N>, Vec<N>, _>(acc, |mut parts| {
                    M::Effect::map::<N, Vec<N>, _>(
                        f(e).into_effect(),
                        move |part| {
                            parts.push(part);
                            parts
                        },
                    )
                })
            },
        ));
        Self::Effect::map(parts, |parts| {
            M::Effect::map::<Vec<N>, Concat<N>, _>(parts, concat)
        })
    }

    /// Creates an enumerator with exactly one element: the left fold of all
    /// of this enumerator's elements into `init` with `f`.
    ///
    /// This enumerator is drained completely before the fold is fed onward,
    /// so `reduced()` never finishes on an infinite enumerator.
    ///
    /// ```rust
    /// use cocoenum::{Enumerator, EnumeratorAssertions, Identity, enum_vec};
    ///
    /// enum_vec::<Identity, _>(vec![1, 2, 3])
    ///     .reduced(Vec::new(), |mut acc, x| {
    ///         acc.push(x);
    ///         acc
    ///     })
    ///     .assert_emits(&[vec![1, 2, 3]]);
    /// ```
    fn reduced<Acc, G>(self, init: Acc, f: G) -> Reduced<Self, Acc, G>
    where
        G: FnMut(Acc, Self::Item) -> Acc,
    {
        Reduced::new(self, init, f)
    }

    /// Like `reduced()`, but every fold step is an effect, sequenced in the
    /// order of the elements.
    ///
    /// ```rust
    /// use cocoenum::{Enumerator, Optional, enum_vec};
    ///
    /// let sum = enum_vec::<Optional, u8>(vec![100, 100])
    ///     .reduced_m(0, |acc: u8, x| acc.checked_add(x));
    /// assert_eq!(sum.to_vec(), Some(vec![200]));
    /// ```
    fn reduced_m<M, G>(self, init: M::Value, f: G) -> ReducedM<Self, M::Value, G>
    where
        G: FnMut(M::Value, Self::Item) -> M,
        M: Lifted<Effect = Self::Effect>,
    {
        ReducedM::new(self, init, f)
    }
}
