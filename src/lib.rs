//! The `cocoenum` crate implements enumerators and iteratees: push-based
//! streams whose every step may perform an effect, where the effect itself is
//! a type parameter.
//!
//! An *enumerator* is a producer of a (possibly infinite) sequence of
//! elements. It has no `next()` method. Instead, it is handed a consumer, an
//! *iteratee*, and drives it by pushing elements at it one at a time, until
//! either the enumerator runs out or the iteratee says it is done.
//!
//! In this crate, the core traits look like:
//!
//! ```rust
//! # use cocoenum::{Effect, Input, Of, Step};
//! pub trait Iteratee<F: Effect, E>: Sized {
//!     type Output;
//!     fn start(self) -> Step<E, Self::Output, Self> {
//!         Step::Cont(self)
//!     }
//!     fn feed(self, input: Input<E>) -> Of<F, Step<E, Self::Output, Self>>;
//! }
//!
//! pub trait Enumerator: Sized {
//!     type Effect: Effect;
//!     type Item;
//!     fn apply<K>(
//!         self,
//!         step: Step<Self::Item, K::Output, K>,
//!     ) -> Of<Self::Effect, Step<Self::Item, K::Output, K>>
//!     where
//!         K: Iteratee<Self::Effect, Self::Item>;
//! }
//! ```
//!
//! The `Input` an iteratee is fed is one of:
//!
//!   * `El(e)`: a single element,
//!   * `Chunk(es)`: a non-empty batch of elements,
//!   * `End`: the end of the stream.
//!
//! And the `Step` it hands back is either `Cont(k)`, a new iteratee that wants
//! more input, or `Done(result, leftover)`.
//!
//! Note the following differences from `Iterator`:
//!
//!   * Control is inverted. The enumerator owns the loop, so a resource it
//!     holds (a file, a socket, a cursor) stays under its control for the
//!     whole drive, and the consumer never has to remember to close it.
//!   * Every step happens inside an effect context `F`, which is chosen by
//!     the caller. The same `enum_vec()` runs synchronously with `Identity`,
//!     can be cut short by a `None` with `Optional`, by an `Err` with
//!     `Fallible`, or can record what happened with `Writer`.
//!   * The consumer decides when to stop. As soon as an iteratee is `Done`,
//!     the enumerator driving it stops, and no more elements are produced or
//!     effects performed. This is what makes infinite sources like `repeat()`
//!     and `iterate()` useful.
//!
//! The `Enumerator` trait provides a number of default combinators that
//! should feel familiar to anyone working with `Iterator`, for example:
//!
//!   * `map` to transform each element with an `FnMut`
//!   * `flat_map` to replace each element with an enumerator's elements
//!   * `append` and `prepend` to concatenate
//!   * `reduced` to fold the whole stream into a single element
//!
//! # Examples
//!
//! ## Collecting a stream
//!
//! ```rust
//! use cocoenum::{Enumerator, Id, Identity, enum_vec};
//!
//! let doubled = enum_vec::<Identity, _>(vec![3, 1, 4]).map(|x| x * 2);
//! assert_eq!(doubled.to_vec(), Id(vec![6, 2, 8]));
//! ```
//!
//! The effect can't be inferred from a bare `vec![...]`, which is why the
//! constructor is given `Identity` explicitly. `Enumerator::within()` does
//! the same after the fact.
//!
//! ## Bounding an infinite source
//!
//! ```rust
//! use cocoenum::{Enumerator, Id, Identity, head, iterate, take};
//!
//! let naturals = iterate::<Identity, _, _>(0u64, |n| n + 1);
//! assert_eq!(naturals.clone().run(take(3)), Id(vec![0, 1, 2]));
//! assert_eq!(naturals.run(head()), Id(Some(0)));
//! ```
//!
//! ## Effects stop with the iteratee
//!
//! With the `Writer` effect, every step can add to a log, which makes it
//! easy to see which steps ran:
//!
//! ```rust
//! use cocoenum::{Enumerator, Logged, head, iterate_m};
//!
//! let fetched = iterate_m(1, |page| Logged::tell(page, page + 1))
//!     .append(iterate_m(100, |page| Logged::tell(page, page + 1)));
//! let (log, first) = fetched.run(head()).into_parts();
//! assert_eq!(first, Some(1));
//! assert!(log.is_empty());
//! ```
//!
//! Here the first element is the seed, which takes no step to produce, and
//! once `head()` has it, neither the rest of the first source nor any of the
//! second one is ever asked for anything.
//!
//! ## Failing part way through
//!
//! ```rust
//! use cocoenum::{Enumerator, enum_vec};
//!
//! let parse = |s: &str| s.parse::<i32>().map_err(|_| s.to_owned());
//! let ok = enum_vec(vec!["1", "2"]).flat_map_m(parse).to_vec();
//! assert_eq!(ok, Ok(vec![1, 2]));
//! let bad = enum_vec(vec!["1", "x", "3"]).flat_map_m(parse).to_vec();
//! assert_eq!(bad, Err("x".to_owned()));
//! ```
//!
//! ## Writing an iteratee
//!
//! Iteratees are state machines that consume themselves on every input. Most
//! don't care about the effect they run in:
//!
//! ```rust
//! use cocoenum::{Effect, Enumerator, Id, Identity, Input, Iteratee, Of, Step};
//! use cocoenum::enum_chunks;
//!
//! /// Finishes with the sum of the first element of every input.
//! struct SumFirsts(i32);
//!
//! impl<F: Effect> Iteratee<F, i32> for SumFirsts {
//!     type Output = i32;
//!     fn feed(self, input: Input<i32>) -> Of<F, Step<i32, i32, Self>> {
//!         let SumFirsts(sum) = self;
//!         F::pure(match input {
//!             Input::El(x) => Step::Cont(SumFirsts(sum + x)),
//!             Input::Chunk(xs) => Step::Cont(SumFirsts(sum + xs.first())),
//!             Input::End => Step::Done(sum, Some(Input::End)),
//!         })
//!     }
//! }
//!
//! let chunked = enum_chunks::<Identity, _>(vec![1, 2, 3, 4, 5], 2);
//! assert_eq!(chunked.run(SumFirsts(0)), Id(1 + 3 + 5));
//! ```
//!
//! Well-behaved iteratees treat a `Chunk` exactly like its elements fed one
//! by one. This one deliberately doesn't, to show that the batching is
//! visible to them.
//!
//! # Theory
//!
//! Enumerators of a given effect and element type form a *monoid* under
//! `append()`, with `empty()` as the identity:
//!
//!   * `empty().append(e)` produces exactly what `e` produces,
//!   * `e.append(empty())` produces exactly what `e` produces,
//!   * `a.append(b).append(c)` produces what `a.append(b.append(c))` does.
//!
//! They are also a *monad* over the element type, with `enum_one()` as
//! `return` and `flat_map()` as `bind`:
//!
//!   * `enum_one(x).flat_map(f)` produces what `f(x)` produces,
//!   * `e.flat_map(enum_one)` produces what `e` produces,
//!   * `e.flat_map(f).flat_map(g)` produces what
//!     `e.flat_map(|x| f(x).flat_map(g))` produces.
//!
//! The `Effect` trait is what a monad looks like without higher-kinded types:
//! a marker type with a generic associated type `Of<T>` naming the type
//! constructor, and `pure()` and `bind()` as associated functions.
//! `Effect::tail_rec()` is the extra ingredient that lets a drive over an
//! arbitrarily long source run in constant stack space, as a loop rather
//! than as a chain of nested `bind()` calls.
//!
//! The `Lifted` trait goes the other way, from a value such as `Option<T>`
//! back to its marker type (`Optional`), so that closures passed to
//! combinators like `flat_map_m()` can return ordinary types.
//!
//! # FAQ
//!
//! ## Why can't I call `next()` on an enumerator?
//!
//! Because it doesn't have one. An enumerator is not a cursor into a
//! sequence; it is a loop that is waiting for a body. Pulling elements one at
//! a time would give the control flow (and with it, resource lifetimes) back
//! to the consumer, which is exactly what enumerators are designed not to do.
//! `run()` with `head()` or `take()` is the closest thing.
//!
//! ## Why does `feed()` consume `self`?
//!
//! For the same reason that the enumerator never feeds a finished iteratee:
//! once an iteratee returns `Done`, there is no iteratee left to feed. The
//! type system enforces it, because `Done` does not carry one.
//!
//! ## What happens if an iteratee doesn't finish at the end of the stream?
//!
//! `Enumerator::run()` panics. An iteratee that is still asking for input
//! after `Input::End` has no result to give, and that is a bug in the
//! iteratee, not a condition the caller can recover from.
//!
//! ## Is there an asynchronous effect?
//!
//! Not in this crate. `Effect` is a plain trait, so one can be implemented
//! over boxed futures outside of it, but the crate itself only depends on
//! `alloc`.

// Enumerators only need an allocator, for chunks and collected results.
//
// Tests for integrations with standard library APIs should be put in the
// integration tests in the `tests/` folder.
#![no_std]

extern crate alloc;

mod append;
mod assertions;
mod collect;
mod concat;
mod effect;
mod empty;
mod enum_chunks;
mod enum_iter;
mod enum_one;
mod enumerator;
mod flat_map;
mod fold;
mod head;
mod input;
mod iterate;
mod iteratee;
mod lift;
mod map;
mod metaprogramming;
mod prepend;
mod reduced;
mod repeat;
mod step;
mod take;
mod unfold;

pub use append::Append;
pub use assertions::EnumeratorAssertions;
pub use collect::Collect;
pub use collect::collect;
pub use concat::Concat;
pub use concat::concat;
pub use effect::Effect;
pub use effect::Fallible;
pub use effect::Id;
pub use effect::Identity;
pub use effect::Lifted;
pub use effect::Logged;
pub use effect::Of;
pub use effect::Optional;
pub use effect::Writer;
pub use empty::Empty;
pub use empty::empty;
pub use enum_chunks::EnumChunks;
pub use enum_chunks::enum_chunks;
pub use enum_iter::EnumIter;
pub use enum_iter::enum_indexed_seq;
pub use enum_iter::enum_list;
pub use enum_iter::enum_stream;
pub use enum_iter::enum_vec;
pub use enum_one::EnumOne;
pub use enum_one::enum_one;
pub use enumerator::Enumerator;
pub use flat_map::FlatMap;
pub use fold::Fold;
pub use fold::FoldM;
pub use fold::fold;
pub use fold::fold_m;
pub use head::Head;
pub use head::head;
pub use input::Input;
pub use input::NonEmpty;
pub use iterate::Iterate;
pub use iterate::IterateM;
pub use iterate::IterateUntil;
pub use iterate::IterateUntilM;
pub use iterate::iterate;
pub use iterate::iterate_m;
pub use iterate::iterate_until;
pub use iterate::iterate_until_m;
pub use iteratee::Iteratee;
pub use lift::IntoEnumerator;
pub use lift::Lift;
pub use lift::lift_to_enumerator;
pub use map::Map;
pub use prepend::Prepend;
pub use reduced::Reduced;
pub use reduced::ReducedM;
pub use repeat::Repeat;
pub use repeat::repeat;
pub use step::Step;
pub use take::Take;
pub use take::take;

#[cfg(test)]
mod test;
