//! `Display` for terms, printing the textual notation.

use std::fmt::{self, Display};

use crate::func::Func;
use crate::term::{Constant, IntSeq, List, Prim, Term};

/// Write `items` separated by `, `.
fn write_args<T: Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = T>,
) -> fmt::Result {
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_instantiation<T: Display>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    args: impl IntoIterator<Item = T>,
) -> fmt::Result {
    write!(f, "{name}<")?;
    write_args(f, args)?;
    write!(f, ">")
}

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Prim(prim) => write!(f, "{}", prim.name()),
            Term::Named(name) => write!(f, "{name}"),
            Term::Pointer(inner) => write!(f, "{inner}*"),
            Term::Reference(inner) => write!(f, "{inner}&"),
            Term::ConstQualified(inner) => write!(f, "{inner} const"),
            Term::Array(inner, extent) => write!(f, "{inner}[{extent}]"),
            Term::Const(c) => write!(f, "{c}"),
            Term::List(list) => write!(f, "{list}"),
            Term::IntSeq(seq) => write!(f, "{seq}"),
            Term::Nil => write!(f, "nil_"),
            Term::App(app) => write_instantiation(f, app.template.name(), &app.args),
            Term::Defer(app) => {
                write!(f, "defer<{}", app.template.name())?;
                for arg in &app.args {
                    write!(f, ", {arg}")?;
                }
                write!(f, ">")
            }
            Term::Func(func) => write!(f, "{func}"),
            Term::Placeholder(p) => write!(f, "{p}"),
        }
    }
}

impl Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value();
        match self.ty() {
            Prim::Int => write!(f, "int_<{value}>"),
            Prim::SizeT => write!(f, "size_t<{value}>"),
            Prim::Bool => write!(f, "bool_<{}>", value != 0),
            Prim::Char => match u8::try_from(value) {
                Ok(byte) if byte.is_ascii_graphic() && byte != b'\'' && byte != b'\\' => {
                    write!(f, "char_<'{}'>", byte as char)
                }
                _ => write!(f, "char_<{value}>"),
            },
            ty => write!(f, "integral_constant<{}, {value}>", ty.name()),
        }
    }
}

impl Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_instantiation(f, "list", self)
    }
}

impl Display for IntSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "integer_sequence<{}", self.ty().name())?;
        for value in self.values() {
            write!(f, ", {value}")?;
        }
        write!(f, ">")
    }
}

impl Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Func::Quote(template) => write!(f, "quote<{}>", template.name()),
            Func::QuoteTrait(template) => write!(f, "quote_trait<{}>", template.name()),
            Func::Always(value) => write!(f, "always<{value}>"),
            Func::Compose(funcs) => write_instantiation(f, "compose", funcs),
            Func::BindFront(func, bound) => {
                write_instantiation(f, "bind_front", std::iter::once(&**func).chain(bound))
            }
            Func::BindBack(func, bound) => {
                write_instantiation(f, "bind_back", std::iter::once(&**func).chain(bound))
            }
            Func::Flip(func) => write!(f, "flip<{func}>"),
            Func::On(func, projections) => {
                write_instantiation(f, "on", std::iter::once(&**func).chain(projections))
            }
            Func::NotFn(func) => write!(f, "not_fn<{func}>"),
            Func::Lambda(lambda) => {
                write!(f, "lambda<")?;
                for param in lambda.params() {
                    write!(f, "{param}, ")?;
                }
                write!(f, "{}>", lambda.body())
            }
            Func::Native(native) => write!(f, "{}", native.name()),
        }
    }
}
