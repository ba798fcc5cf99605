/// A trait implemented by all types, where `Self::Type` is `Self`.
///
/// This is used in trait bounds in generic functions to specify that a
/// generic type parameter is the same as another, effectively aiding type
/// inference.
///
/// The source constructors, like `enum_vec()`, produce enumerators that are
/// generic over their effect. When nothing downstream pins the effect down,
/// `Enumerator::within()` uses `Is` to let the caller name it after the fact:
/// `enum_vec(xs).within::<Optional>()` is an enumerator whose `Effect` is
/// `Optional`, because the bound `Optional: Is<Type = Self::Effect>` can only
/// hold if `Self::Effect` is `Optional`.
pub trait Is {
    type Type;
}

impl<T> Is for T {
    type Type = T;
}
