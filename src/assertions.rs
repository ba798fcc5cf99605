use core::fmt::Debug;

use crate::effect::Id;
use crate::effect::Identity;
use crate::enumerator::Enumerator;
use crate::head::head;

/// Extension trait providing assertion methods for testing synchronous
/// enumerators.
///
/// This trait is separate from [`Enumerator`] to keep the core trait focused
/// on essential operations. Import this trait in your tests to access
/// assertion methods:
///
/// ```rust
/// use cocoenum::EnumeratorAssertions;
/// use cocoenum::Identity;
/// use cocoenum::enum_indexed_seq;
///
/// let letters = ['a', 'b', 'c', 'd'];
/// enum_indexed_seq::<Identity, _>(&letters, 1, 3).assert_emits(&['b', 'c']);
/// enum_indexed_seq::<Identity, _>(&letters, 3, 1).assert_empty();
/// ```
pub trait EnumeratorAssertions: Enumerator<Effect = Identity> {
    /// Drives the enumerator to the end and asserts that it produced exactly
    /// `expected`, in order.
    fn assert_emits(self, expected: &[Self::Item])
    where
        Self::Item: PartialEq + Debug,
    {
        let Id(actual) = self.to_vec();
        assert_eq!(
            actual.as_slice(),
            expected,
            "expected the enumerator to produce {expected:?}, got {actual:?}"
        );
    }

    /// Asserts that the enumerator produces no elements at all.
    ///
    /// Only the first element is ever requested, so this also works on
    /// infinite enumerators (and fails on them).
    fn assert_empty(self)
    where
        Self::Item: Debug,
    {
        if let Id(Some(first)) = self.run(head()) {
            panic!("expected the enumerator to be empty, got {first:?} first");
        }
    }
}

/// Blanket implementation of [`EnumeratorAssertions`] for all synchronous
/// enumerators.
impl<T> EnumeratorAssertions for T where T: Enumerator<Effect = Identity> {}
