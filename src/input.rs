use alloc::vec::Vec;
use core::fmt;

use either::Either;
use either::Either::{Left, Right};

/// An ordered batch of elements that is statically known to hold at least one
/// element.
///
/// The only way to build one is through `from_vec()` (which rejects empty
/// vectors) or `singleton()`, so an `Input::Chunk` can never be empty.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub struct NonEmpty<E>(Vec<E>);

impl<E> NonEmpty<E> {
    pub fn from_vec(items: Vec<E>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(NonEmpty(items))
        }
    }

    pub fn singleton(item: E) -> Self {
        let mut items = Vec::with_capacity(1);
        items.push(item);
        NonEmpty(items)
    }

    pub fn first(&self) -> &E {
        &self.0[0]
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<E> {
        self.0
    }

    /// Transforms every element, keeping the batch non-empty.
    pub fn map<E2, F>(self, f: F) -> NonEmpty<E2>
    where
        F: FnMut(E) -> E2,
    {
        NonEmpty(self.0.into_iter().map(f).collect())
    }
}

impl<E> IntoIterator for NonEmpty<E> {
    type Item = E;
    type IntoIter = alloc::vec::IntoIter<E>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A signal sent from an enumerator to the iteratee it drives.
///
///   * `El(e)`: exactly one element.
///   * `Chunk(es)`: a non-empty batch of elements. Feeding a chunk means the
///     same thing as feeding each of its elements in order as `El`s; it only
///     saves steps.
///   * `End`: the source is exhausted.
///
/// The `Display` rendering is part of the contract: `el(x)`, `chunk(a, b, c)`
/// and `end`.
///
/// ```rust
/// use cocoenum::Input;
///
/// assert_eq!(Input::El(1).to_string(), "el(1)");
/// assert_eq!(Input::chunk(vec![1, 2, 3]).unwrap().to_string(), "chunk(1, 2, 3)");
/// assert_eq!(Input::<i32>::End.to_string(), "end");
/// assert_eq!(Input::<i32>::chunk(vec![]), None);
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub enum Input<E> {
    El(E),
    Chunk(NonEmpty<E>),
    End,
}

use Input::{Chunk, El, End};

impl<E> Input<E> {
    /// Builds a `Chunk` from a batch, or returns `None` if the batch is empty,
    /// because an empty batch must be sent as no input at all.
    pub fn chunk(items: Vec<E>) -> Option<Self> {
        NonEmpty::from_vec(items).map(Chunk)
    }

    /// The number of elements carried: 1 for `El`, the batch size for
    /// `Chunk`, 0 for `End`.
    pub fn len(&self) -> usize {
        match self {
            El(_) => 1,
            Chunk(items) => items.len(),
            End => 0,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, End)
    }

    /// Transforms every element carried by the input, keeping its shape.
    pub fn map<E2, F>(self, mut f: F) -> Input<E2>
    where
        F: FnMut(E) -> E2,
    {
        match self {
            El(e) => El(f(e)),
            Chunk(items) => Chunk(items.map(f)),
            End => End,
        }
    }
}

/// Iterates over the elements carried by the input, in order. `End` carries
/// none.
impl<E> IntoIterator for Input<E> {
    type Item = E;
    type IntoIter =
        Either<core::option::IntoIter<E>, alloc::vec::IntoIter<E>>;
    fn into_iter(self) -> Self::IntoIter {
        match self {
            El(e) => Left(Some(e).into_iter()),
            Chunk(items) => Right(items.into_iter()),
            End => Left(None.into_iter()),
        }
    }
}

impl<E: fmt::Display> fmt::Display for Input<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            El(e) => write!(f, "el({e})"),
            Chunk(items) => {
                f.write_str("chunk(")?;
                for (i, e) in items.as_slice().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{e}")?;
                }
                f.write_str(")")
            }
            End => f.write_str("end"),
        }
    }
}
