//! Type-dispatched printing.
//!
//! Every printable argument is first turned into a [`Printable`], a closed set
//! of shapes with one rendering rule each. Text is written verbatim, integers
//! in decimal, floats in fixed point with six fractional digits, booleans as
//! `true`/`false` and characters as themselves. Only types implementing
//! [`TextLike`] take the text rule; anything else without a [`Print`] impl is
//! rejected at compile time.
//!
//! [`echo!`](crate::echo) and [`echo_to!`](crate::echo_to) render any number
//! of arguments in order with nothing between them.

use std::io::{self, Write};

use crate::owned_str::OwnedStr;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Printable<'a> {
    Text(&'a [u8]),
    Integer(i64),
    SingleFloat(f32),
    DoubleFloat(f64),
    Boolean(bool),
    Character(char),
}

impl Printable<'_> {
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Printable::Text(bytes) => out.write_all(bytes),
            Printable::Integer(x) => write!(out, "{x}"),
            Printable::SingleFloat(x) => render_fixed(out, f64::from(*x)),
            Printable::DoubleFloat(x) => render_fixed(out, *x),
            Printable::Boolean(x) => write!(out, "{x}"),
            Printable::Character(x) => write!(out, "{x}"),
        }
    }
}

// `%f` spelling: six fractional digits, lowercase `nan`/`inf`.
fn render_fixed<W: Write + ?Sized>(out: &mut W, x: f64) -> io::Result<()> {
    if x.is_nan() {
        out.write_all(if x.is_sign_negative() { b"-nan" } else { b"nan" })
    } else {
        write!(out, "{x:.6}")
    }
}

/// Opt-in marker for values whose bytes can be written out as text.
pub trait TextLike {
    fn text(&self) -> &[u8];
}

pub trait Print {
    fn printable(&self) -> Printable<'_>;
}

impl<T: TextLike + ?Sized> TextLike for &T {
    fn text(&self) -> &[u8] {
        (**self).text()
    }
}

impl<T: TextLike + ?Sized> Print for T {
    fn printable(&self) -> Printable<'_> {
        Printable::Text(self.text())
    }
}

impl TextLike for str {
    fn text(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl TextLike for String {
    fn text(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl TextLike for [u8] {
    fn text(&self) -> &[u8] {
        self
    }
}

impl TextLike for OwnedStr {
    fn text(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Dispatch entry used by the echo macros; integer literals fall back to
/// `i32` here, which a method call on the literal would not do.
pub fn printable<T: Print + ?Sized>(value: &T) -> Printable<'_> {
    value.printable()
}

macro_rules! impl_print_integer {
    ($($ty:ty),*) => {
        $(
            impl Print for $ty {
                fn printable(&self) -> Printable<'_> {
                    Printable::Integer(i64::from(*self))
                }
            }
        )*
    };
}

impl_print_integer!(i8, i16, i32, i64, u8, u16, u32);

impl Print for f32 {
    fn printable(&self) -> Printable<'_> {
        Printable::SingleFloat(*self)
    }
}

impl Print for f64 {
    fn printable(&self) -> Printable<'_> {
        Printable::DoubleFloat(*self)
    }
}

impl Print for bool {
    fn printable(&self) -> Printable<'_> {
        Printable::Boolean(*self)
    }
}

impl Print for char {
    fn printable(&self) -> Printable<'_> {
        Printable::Character(*self)
    }
}

/// Renders each argument into `out`, left to right, without separators.
///
/// `out` must be a `&mut` to some [`std::io::Write`]. Expands to an
/// `io::Result<()>`; rendering stops at the first write error.
#[macro_export]
macro_rules! echo_to {
    ($out:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_variables)]
        let out: &mut dyn ::std::io::Write = $out;
        $crate::__echo_each!(out $(, $arg)*)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __echo_each {
    ($out:ident) => {
        ::std::io::Result::<()>::Ok(())
    };
    ($out:ident, $head:expr $(, $tail:expr)*) => {
        match $crate::print::printable(&$head).render(&mut *$out) {
            ::std::result::Result::Ok(()) => $crate::__echo_each!($out $(, $tail)*),
            ::std::result::Result::Err(e) => ::std::result::Result::Err(e),
        }
    };
}

/// [`echo_to!`](crate::echo_to) against standard output, flushed afterwards.
#[macro_export]
macro_rules! echo {
    ($($arg:expr),* $(,)?) => {{
        let stdout = ::std::io::stdout();
        let mut lock = stdout.lock();
        match $crate::echo_to!(&mut lock $(, $arg)*) {
            ::std::result::Result::Ok(()) => ::std::io::Write::flush(&mut lock),
            ::std::result::Result::Err(e) => ::std::result::Result::Err(e),
        }
    }};
}

#[cfg(test)]
mod tests {
    use std::io;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::{printable, Print, Printable, TextLike};
    use crate::owned_str::OwnedStr;

    fn rendered(p: Printable<'_>) -> String {
        let mut buf = Vec::new();
        p.render(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn dispatch_picks_the_tag() {
        assert_eq!(printable("hi"), Printable::Text(b"hi"));
        assert_eq!(printable(&"hi"), Printable::Text(b"hi"));
        assert_eq!(printable(&42), Printable::Integer(42));
        assert_eq!(printable(&7u8), Printable::Integer(7));
        assert_eq!(printable(&1.5f32), Printable::SingleFloat(1.5));
        assert_eq!(printable(&1.5), Printable::DoubleFloat(1.5));
        assert_eq!(printable(&true), Printable::Boolean(true));
        assert_eq!(printable(&'x'), Printable::Character('x'));
    }

    #[test]
    fn render_rules() {
        assert_eq!(rendered(Printable::Integer(-42)), "-42");
        assert_eq!(rendered(Printable::Boolean(true)), "true");
        assert_eq!(rendered(Printable::Boolean(false)), "false");
        assert_eq!(rendered(Printable::Character('x')), "x");
        assert_eq!(rendered(Printable::Character('é')), "é");
        assert_eq!(rendered(Printable::Text(b"raw")), "raw");
    }

    #[test]
    fn floats_are_fixed_point() {
        assert_eq!(rendered(Printable::DoubleFloat(3.25)), "3.250000");
        assert_eq!(rendered(Printable::SingleFloat(0.1)), "0.100000");
        assert_eq!(rendered(Printable::DoubleFloat(-2.0)), "-2.000000");
        assert_eq!(rendered(Printable::DoubleFloat(1e-9)), "0.000000");
        assert_eq!(rendered(Printable::DoubleFloat(f64::INFINITY)), "inf");
        assert_eq!(rendered(Printable::DoubleFloat(f64::NAN)), "nan");
    }

    #[test]
    fn no_arguments_write_nothing() {
        let mut buf: Vec<u8> = Vec::new();
        crate::echo_to!(&mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn arguments_are_concatenated_in_order() {
        let s = OwnedStr::new("Hello, ").unwrap();
        let mut buf = Vec::new();
        crate::echo_to!(&mut buf, s, "World!", ' ', 42, ' ', true, 2.5f32).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Hello, World! 42 true2.500000");
    }

    #[test]
    fn borrowed_text_prints_like_its_target() {
        let owned = String::from("owned");
        let s = OwnedStr::new("-owned").unwrap();
        let mut buf = Vec::new();
        crate::echo_to!(&mut buf, &owned, &s, &&"x").unwrap();
        assert_eq!(buf, b"owned-ownedx");
    }

    #[test]
    fn extension_types_opt_in_as_text() {
        struct Name(&'static str);

        impl TextLike for Name {
            fn text(&self) -> &[u8] {
                self.0.as_bytes()
            }
        }

        let mut buf = Vec::new();
        crate::echo_to!(&mut buf, Name("bic"), '!').unwrap();
        assert_eq!(buf, b"bic!");
    }

    #[test]
    fn write_errors_stop_rendering() {
        struct Full;

        impl io::Write for Full {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("full"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = Full;
        let err = crate::echo_to!(&mut sink, "a", 1).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    proptest! {
        #[test]
        fn output_is_concatenation(a in "\\PC*", b in any::<i32>(), c in any::<bool>()) {
            let mut all = Vec::new();
            crate::echo_to!(&mut all, a.as_str(), b, c).unwrap();

            let mut parts = Vec::new();
            a.as_str().printable().render(&mut parts).unwrap();
            b.printable().render(&mut parts).unwrap();
            c.printable().render(&mut parts).unwrap();

            prop_assert_eq!(all, parts);
        }

        #[test]
        fn split_calls_match_one_call(a in "\\PC*", b in any::<char>(), c in any::<f64>()) {
            let mut split = Vec::new();
            crate::echo_to!(&mut split, a, b).unwrap();
            crate::echo_to!(&mut split, c).unwrap();

            let mut joined = Vec::new();
            crate::echo_to!(&mut joined, a, b, c).unwrap();

            prop_assert_eq!(split, joined);
        }
    }
}
