use alloc::vec::Vec;
use core::marker::PhantomData;
use core::ops::ControlFlow;

use ControlFlow::{Break, Continue};

/// Shorthand for the type of a `T` suspended in the effect context `F`.
pub type Of<F, T> = <F as Effect>::Of<T>;

/// An effect context that enumerators and iteratees sequence their steps in.
///
/// Rust has no higher-kinded types, so an `Effect` is a marker type whose
/// generic associated type `Of<T>` names the type constructor. For example,
/// `Optional::Of<T>` is `Option<T>` and `Identity::Of<T>` is `Id<T>`.
///
/// The capability is exactly what the drive protocol needs: `pure()` to
/// suspend a plain value, `bind()` to sequence one step after another, and
/// `tail_rec()` to run a loop whose every iteration is itself a step. The last
/// one lets drive loops over very long (or infinite) sources run in constant
/// stack space for strict effects, where a chain of nested `bind()` calls
/// would not.
///
/// Implementations must satisfy the monad laws for `pure()` and `bind()`, and
/// `tail_rec(s, f)` must behave like the recursive definition that binds
/// `f(s)` and recurs on `Continue`.
pub trait Effect: Sized {
    type Of<T>;

    /// Suspends a plain value without performing any effect.
    fn pure<T>(value: T) -> Self::Of<T>;

    /// Sequences `f` after `fa`, feeding it the value `fa` produces.
    fn bind<A, B, G>(fa: Self::Of<A>, f: G) -> Self::Of<B>
    where
        G: FnOnce(A) -> Self::Of<B>;

    /// Transforms the value inside `fa` with a plain function.
    fn map<A, B, G>(fa: Self::Of<A>, f: G) -> Self::Of<B>
    where
        G: FnOnce(A) -> B,
    {
        Self::bind(fa, move |a| Self::pure(f(a)))
    }

    /// Runs `step` on `init`, and then on every state it returns with
    /// `Continue`, until it returns `Break`.
    fn tail_rec<S, B, G>(init: S, step: G) -> Self::Of<B>
    where
        G: FnMut(S) -> Self::Of<ControlFlow<B, S>>;
}

/// A value that already lives inside some effect context.
///
/// This is the bridge that lets closures return ordinary types like
/// `Option<T>` or `Result<T, E>` where an effectful value is expected, without
/// the caller naming the `Effect` marker: the marker is recovered from the
/// value's type.
///
/// ```rust
/// use cocoenum::Lifted;
/// use cocoenum::Optional;
///
/// fn effect_of<M: Lifted<Effect = Optional>>(m: M) -> Option<M::Value> {
///     m.into_effect()
/// }
///
/// assert_eq!(effect_of(Some(3)), Some(3));
/// ```
pub trait Lifted: Sized {
    type Effect: Effect;
    type Value;
    fn into_effect(self) -> Of<Self::Effect, Self::Value>;
}

/// The identity functor's value type: a value with no effect at all.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Default)]
pub struct Id<T>(pub T);

impl<T> Id<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// The synchronous effect: every step completes immediately.
pub enum Identity {}

impl Effect for Identity {
    type Of<T> = Id<T>;

    fn pure<T>(value: T) -> Self::Of<T> {
        Id(value)
    }

    fn bind<A, B, G>(fa: Self::Of<A>, f: G) -> Self::Of<B>
    where
        G: FnOnce(A) -> Self::Of<B>,
    {
        let Id(a) = fa;
        f(a)
    }

    fn tail_rec<S, B, G>(init: S, mut step: G) -> Self::Of<B>
    where
        G: FnMut(S) -> Self::Of<ControlFlow<B, S>>,
    {
        let mut state = init;
        loop {
            let Id(flow) = step(state);
            match flow {
                Continue(next) => state = next,
                Break(b) => return Id(b),
            }
        }
    }
}

impl<T> Lifted for Id<T> {
    type Effect = Identity;
    type Value = T;
    fn into_effect(self) -> Of<Identity, T> {
        self
    }
}

/// The optional effect: a step may produce no value, which short-circuits
/// every step sequenced after it.
pub enum Optional {}

impl Effect for Optional {
    type Of<T> = Option<T>;

    fn pure<T>(value: T) -> Self::Of<T> {
        Some(value)
    }

    fn bind<A, B, G>(fa: Self::Of<A>, f: G) -> Self::Of<B>
    where
        G: FnOnce(A) -> Self::Of<B>,
    {
        fa.and_then(f)
    }

    fn tail_rec<S, B, G>(init: S, mut step: G) -> Self::Of<B>
    where
        G: FnMut(S) -> Self::Of<ControlFlow<B, S>>,
    {
        let mut state = init;
        loop {
            match step(state)? {
                Continue(next) => state = next,
                Break(b) => return Some(b),
            }
        }
    }
}

impl<T> Lifted for Option<T> {
    type Effect = Optional;
    type Value = T;
    fn into_effect(self) -> Of<Optional, T> {
        self
    }
}

/// The failable effect: a step may fail with an `Er`, and the first failure is
/// propagated without running any later step.
pub struct Fallible<Er>(PhantomData<fn() -> Er>);

impl<Er> Effect for Fallible<Er> {
    type Of<T> = Result<T, Er>;

    fn pure<T>(value: T) -> Self::Of<T> {
        Ok(value)
    }

    fn bind<A, B, G>(fa: Self::Of<A>, f: G) -> Self::Of<B>
    where
        G: FnOnce(A) -> Self::Of<B>,
    {
        fa.and_then(f)
    }

    fn tail_rec<S, B, G>(init: S, mut step: G) -> Self::Of<B>
    where
        G: FnMut(S) -> Self::Of<ControlFlow<B, S>>,
    {
        let mut state = init;
        loop {
            match step(state)? {
                Continue(next) => state = next,
                Break(b) => return Ok(b),
            }
        }
    }
}

impl<T, Er> Lifted for Result<T, Er> {
    type Effect = Fallible<Er>;
    type Value = T;
    fn into_effect(self) -> Of<Fallible<Er>, T> {
        self
    }
}

/// A value paired with the log entries written while computing it.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Logged<L, T> {
    pub log: Vec<L>,
    pub value: T,
}

impl<L, T> Logged<L, T> {
    /// A value with an empty log.
    pub fn new(value: T) -> Self {
        Logged {
            log: Vec::new(),
            value,
        }
    }

    /// A value with a single log entry.
    pub fn tell(entry: L, value: T) -> Self {
        let mut log = Vec::with_capacity(1);
        log.push(entry);
        Logged { log, value }
    }

    pub fn into_parts(self) -> (Vec<L>, T) {
        (self.log, self.value)
    }
}

/// The writer effect: each step may append entries to a log, and sequencing
/// concatenates the logs in the order the steps ran.
///
/// This makes the order (and the absence) of effects directly observable,
/// which is how the crate's own tests check that a finished iteratee stops a
/// source from doing any more work.
pub struct Writer<L>(PhantomData<fn() -> L>);

impl<L> Effect for Writer<L> {
    type Of<T> = Logged<L, T>;

    fn pure<T>(value: T) -> Self::Of<T> {
        Logged::new(value)
    }

    fn bind<A, B, G>(fa: Self::Of<A>, f: G) -> Self::Of<B>
    where
        G: FnOnce(A) -> Self::Of<B>,
    {
        let Logged { mut log, value } = fa;
        let Logged { log: more, value } = f(value);
        log.extend(more);
        Logged { log, value }
    }

    fn tail_rec<S, B, G>(init: S, mut step: G) -> Self::Of<B>
    where
        G: FnMut(S) -> Self::Of<ControlFlow<B, S>>,
    {
        let mut log = Vec::new();
        let mut state = init;
        loop {
            let Logged { log: more, value } = step(state);
            log.extend(more);
            match value {
                Continue(next) => state = next,
                Break(b) => return Logged { log, value: b },
            }
        }
    }
}

impl<L, T> Lifted for Logged<L, T> {
    type Effect = Writer<L>;
    type Value = T;
    fn into_effect(self) -> Of<Writer<L>, T> {
        self
    }
}
