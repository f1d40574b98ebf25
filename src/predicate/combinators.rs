//! The predicate trait and its logical combinators

/// A check over a parsed field value.
///
/// Closures `Fn(&T) -> bool` are predicates, so ad-hoc rules need no new type.
///
/// # Example
///
/// ```rust
/// use formbind::predicate::*;
///
/// let even = |n: &i64| n % 2 == 0;
/// let rule = gt(0).and(even);
/// assert!(rule.check(&4));
/// assert!(!rule.check(&3));
/// assert!(!rule.check(&-2));
/// ```
pub trait Predicate<T: ?Sized> {
    /// True if `value` passes.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Method-style combinators for every [`Predicate`].
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Both predicates must pass.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Either predicate must pass.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// Both predicates must pass.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// Either predicate must pass.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// Inverts a predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}
