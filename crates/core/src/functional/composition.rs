//! Function composition utilities: currying, composition, piping and chaining

/// Method-style composition for any unary function
pub trait Compose<A, B> {
    /// Right-to-left composition: `self.compose(g)` is `x -> self(g(x))`
    fn compose<G, Z>(self, g: G) -> impl Fn(Z) -> B
    where
        G: Fn(Z) -> A,
        Self: Fn(A) -> B + Sized;

    /// Left-to-right composition: `self.pipe(f)` is `x -> f(self(x))`
    fn pipe<F, C>(self, f: F) -> impl Fn(A) -> C
    where
        F: Fn(B) -> C,
        Self: Fn(A) -> B + Sized;
}

impl<T, A, B> Compose<A, B> for T
where
    T: Fn(A) -> B,
{
    fn compose<G, Z>(self, g: G) -> impl Fn(Z) -> B
    where
        G: Fn(Z) -> A,
    {
        move |z| self(g(z))
    }

    fn pipe<F, C>(self, f: F) -> impl Fn(A) -> C
    where
        F: Fn(B) -> C,
    {
        move |a| f(self(a))
    }
}

/// Free-function composition operators
pub mod operators {
    use std::rc::Rc;

    /// `compose(f, g)` applies `g` first, then `f`: `x -> f(g(x))`
    pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
    where
        F: Fn(B) -> C,
        G: Fn(A) -> B,
    {
        move |a| f(g(a))
    }

    /// `pipe(g, f)` applies `g` first, then `f`; same evaluation order as [`compose`]
    pub fn pipe<A, B, C, F, G>(g: G, f: F) -> impl Fn(A) -> C
    where
        G: Fn(A) -> B,
        F: Fn(B) -> C,
    {
        move |a| f(g(a))
    }

    /// Thread `value` through `functions` in order.
    ///
    /// An empty list returns `value` unchanged. Closures with distinct types
    /// can be passed as `&dyn Fn(T) -> T` or through the [`chain!`](crate::chain) macro.
    pub fn chain<T, I>(value: T, functions: I) -> T
    where
        I: IntoIterator,
        I::Item: FnOnce(T) -> T,
    {
        functions.into_iter().fold(value, |acc, f| f(acc))
    }

    /// Curry a two-argument function: `curry(f)(a)(b) == f(a, b)`.
    ///
    /// The returned functions are boxed and may outlive the call site, so `f`
    /// must be `'static`: it cannot borrow locals. Move owned data into the
    /// closure instead (`move |a, b| ...`). The first argument is cloned on
    /// every call of the inner function, hence `A: Clone`.
    pub fn curry<A, B, C, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
    where
        F: Fn(A, B) -> C + 'static,
        A: Clone + 'static,
        B: 'static,
        C: 'static,
    {
        let f = Rc::new(f);
        move |a| {
            let f = Rc::clone(&f);
            Box::new(move |b| f(a.clone(), b))
        }
    }
}

/// Apply each function to the value in turn, returning the final value
#[macro_export]
macro_rules! chain {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $($func:expr),+ $(,)?) => {{
        let result = $value;
        $(
            let result = ($func)(result);
        )+
        result
    }};
}
