//! Stateless higher-order combinators: composition and partial application.

use crate::outcome::Outcome;

/// `compose(f, g)(x) == g(f(x))`.
///
/// # Examples
///
/// ```
/// use fpat_core::compose::compose;
///
/// let add_then_double = compose(|x: i32| x + 1, |x: i32| x * 2);
/// assert_eq!(add_then_double(4), 10);
/// ```
pub fn compose<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |x: A| g(f(x))
}

/// Compose two railway steps; `g` only runs when `f` succeeds.
pub fn compose_result<A, B, C, E>(
    f: impl Fn(A) -> Outcome<B, E>,
    g: impl Fn(B) -> Outcome<C, E>,
) -> impl Fn(A) -> Outcome<C, E> {
    move |x: A| f(x).bind(&g)
}

/// Fold a list of same-typed steps into one function, applied left to right.
pub fn compose_all<T>(steps: Vec<Box<dyn Fn(T) -> T>>) -> impl Fn(T) -> T {
    move |x: T| steps.iter().fold(x, |acc, step| step(acc))
}

/// Fix the first argument of a two-argument function.
///
/// # Examples
///
/// ```
/// use fpat_core::compose::partial;
///
/// let greet = partial(|greeting: &str, name: &str| format!("{greeting}, {name}!"), "Hello");
/// assert_eq!(greet("Ada"), "Hello, Ada!");
/// ```
pub fn partial<A: Clone, B, C>(f: impl Fn(A, B) -> C, fixed: A) -> impl Fn(B) -> C {
    move |b: B| f(fixed.clone(), b)
}

/// Fix the first argument of a three-argument function.
pub fn partial3<A: Clone, B, C, D>(f: impl Fn(A, B, C) -> D, fixed: A) -> impl Fn(B, C) -> D {
    move |b: B, c: C| f(fixed.clone(), b, c)
}

/// Turn `f(a, b)` into `f(a)(b)`.
pub fn curry<A, B, C, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
where
    A: Clone + 'static,
    B: 'static,
    C: 'static,
    F: Fn(A, B) -> C + Clone + 'static,
{
    move |a: A| -> Box<dyn Fn(B) -> C> {
        let f = f.clone();
        Box::new(move |b: B| f(a.clone(), b))
    }
}

/// Apply `f` to `value`; reads left to right in a pipeline.
pub fn pipe<A, B>(value: A, f: impl FnOnce(A) -> B) -> B {
    f(value)
}
