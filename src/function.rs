// Copyright 2025 Cowboy AI, LLC.

//! Generic function-transformation utilities
//!
//! This module provides the small functional toolkit the combinators in
//! [`crate::booleans`] are assembled from: composition, currying, and
//! argument flipping, plus the `identity`/`constant`/`apply` helpers.
//!
//! # Mathematical Foundation
//!
//! Given `f: B -> C` and `g: A -> B`, composition is right-to-left:
//!
//! ```text
//! compose(f, g)(a) = f(g(a))
//! ```
//!
//! Currying transforms a multi-argument function into a chain of
//! single-argument functions, each returning the next:
//!
//! ```text
//! curry(f)(a)(b) = f(a, b)
//! ```
//!
//! # Laws
//!
//! 1. Associativity: `compose(f, compose(g, h)) ≡ compose(compose(f, g), h)`
//! 2. Left Identity: `compose(identity, f) ≡ f`
//! 3. Right Identity: `compose(f, identity) ≡ f`
//! 4. Flip Involution: `flip(flip(f)) ≡ f`

/// A boxed single-argument continuation, the tail of a curried chain.
///
/// Rust cannot express `impl Fn(A) -> impl Fn(B) -> C` directly, so the
/// inner steps of a curried function are boxed. Only the first step of a
/// chain stays unboxed.
pub type Curried<A, B> = Box<dyn Fn(A) -> B>;

/// The identity function: returns its argument unchanged.
pub fn identity<A>(a: A) -> A {
    a
}

/// Create a function that ignores its argument and always returns `b`.
pub fn constant<A, B>(b: B) -> impl Fn(A) -> B
where
    B: Clone,
{
    move |_| b.clone()
}

/// Apply a function to an argument.
///
/// Useful as the explicit elimination form when a combinator chain ends
/// in a function value.
pub fn apply<A, B>(f: impl Fn(A) -> B, a: A) -> B {
    f(a)
}

/// Compose two functions right-to-left: `compose(f, g)(a) = f(g(a))`.
pub fn compose<A, B, C>(f: impl Fn(B) -> C, g: impl Fn(A) -> B) -> impl Fn(A) -> C {
    move |a| f(g(a))
}

/// Compose a unary function after a binary one:
/// `compose2(f, g)(a, b) = f(g(a, b))`.
///
/// This is the transformation that derives `nor` from `or`, `nimp` from
/// `implies`, and `iff` from `xor`.
pub fn compose2<A, B, C, D>(f: impl Fn(C) -> D, g: impl Fn(A, B) -> C) -> impl Fn(A, B) -> D {
    move |a, b| f(g(a, b))
}

/// Swap the arguments of a binary function: `flip(f)(b, a) = f(a, b)`.
pub fn flip<A, B, C>(f: impl Fn(A, B) -> C) -> impl Fn(B, A) -> C {
    move |b, a| f(a, b)
}

/// Flip a curried two-step function: `flip_curried(f)(b)(a) = f(a)(b)`.
pub fn flip_curried<A, B, C, F, G>(f: F) -> impl Fn(B) -> Curried<A, C>
where
    F: Fn(A) -> G + Clone + 'static,
    G: Fn(B) -> C,
    A: 'static,
    B: Clone + 'static,
    C: 'static,
{
    move |b: B| {
        let f = f.clone();
        Box::new(move |a: A| f(a)(b.clone()))
    }
}

/// Curry a binary function into a two-step chain:
/// `curry(f)(a)(b) = f(a, b)`.
pub fn curry<A, B, C, F>(f: F) -> impl Fn(A) -> Curried<B, C>
where
    F: Fn(A, B) -> C + Clone + 'static,
    A: Clone + 'static,
    B: 'static,
    C: 'static,
{
    move |a: A| {
        let f = f.clone();
        Box::new(move |b: B| f(a.clone(), b))
    }
}

/// Curry a ternary function into a three-step chain:
/// `curry3(f)(a)(b)(c) = f(a, b, c)`.
pub fn curry3<A, B, C, D, F>(f: F) -> impl Fn(A) -> Curried<B, Curried<C, D>>
where
    F: Fn(A, B, C) -> D + Clone + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    D: 'static,
{
    move |a: A| {
        let f = f.clone();
        let a_outer = a.clone();
        Box::new(move |b: B| {
            let f = f.clone();
            let a = a_outer.clone();
            Box::new(move |c: C| f(a.clone(), b.clone(), c)) as Curried<C, D>
        })
    }
}

/// Uncurry a two-step chain back into a binary function:
/// `uncurry(f)(a, b) = f(a)(b)`.
pub fn uncurry<A, B, C, F, G>(f: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> G,
    G: Fn(B) -> C,
{
    move |a, b| f(a)(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_one(x: i32) -> i32 {
        x + 1
    }

    fn double(x: i32) -> i32 {
        x * 2
    }

    fn subtract(a: i32, b: i32) -> i32 {
        a - b
    }

    #[test]
    fn test_identity() {
        assert_eq!(identity(42), 42);
        assert_eq!(identity("value"), "value");
    }

    #[test]
    fn test_constant() {
        let always_five = constant::<&str, i32>(5);
        assert_eq!(always_five("ignored"), 5);
        assert_eq!(always_five("also ignored"), 5);
    }

    #[test]
    fn test_apply() {
        assert_eq!(apply(add_one, 41), 42);
    }

    /// compose(f, g)(x) = f(g(x)), right-to-left
    #[test]
    fn test_compose_order() {
        let composed = compose(add_one, double);
        assert_eq!(composed(5), 11);

        let reversed = compose(double, add_one);
        assert_eq!(reversed(5), 12);
    }

    #[test]
    fn test_compose_identity_laws() {
        let left = compose(identity, add_one);
        let right = compose(add_one, identity);
        for x in [-3, 0, 7] {
            assert_eq!(left(x), add_one(x));
            assert_eq!(right(x), add_one(x));
        }
    }

    #[test]
    fn test_compose2() {
        // negate the result of a binary subtraction
        let negated_diff = compose2(|x: i32| -x, subtract);
        assert_eq!(negated_diff(10, 3), -7);
    }

    #[test]
    fn test_flip() {
        let flipped = flip(subtract);
        assert_eq!(flipped(3, 10), 7);
        assert_eq!(subtract(10, 3), 7);
    }

    /// flip(flip(f)) ≡ f
    #[test]
    fn test_flip_involution() {
        let twice = flip(flip(subtract));
        for (a, b) in [(10, 3), (0, 0), (-5, 5)] {
            assert_eq!(twice(a, b), subtract(a, b));
        }
    }

    #[test]
    fn test_curry() {
        let curried = curry(subtract);
        let from_ten = curried(10);
        assert_eq!(from_ten(3), 7);
        assert_eq!(from_ten(10), 0);
    }

    #[test]
    fn test_curry3() {
        let curried = curry3(|a: i32, b: i32, c: i32| a + b * c);
        assert_eq!(curried(1)(2)(3), 7);
    }

    #[test]
    fn test_uncurry_inverts_curry() {
        let roundtrip = uncurry(curry(subtract));
        assert_eq!(roundtrip(10, 3), subtract(10, 3));
    }

    fn curried_subtract(a: i32) -> Box<dyn Fn(i32) -> i32> {
        Box::new(move |b| a - b)
    }

    #[test]
    fn test_flip_curried() {
        let flipped = flip_curried(curried_subtract);
        assert_eq!(flipped(3)(10), 7);
        assert_eq!(curried_subtract(10)(3), 7);
    }
}
