//! # Lambdas
//!
//! Anonymous metafunction classes written with placeholders:
//!
//! ```text
//! lambda<_a, _b, std::pair<_b, std::pair<_a, _a>>>(int, short)
//!     = std::pair<short, std::pair<int, int>>
//! ```
//!
//! Invoking a lambda binds its placeholders in a fresh scope frame and walks the body
//! with [`resolve`]. A variadic placeholder (`_args`, `_args_a`, ...) must come last and
//! captures every trailing argument; wherever it appears in an argument list, the
//! captured arguments are spliced in.
//!
//! ## Nesting
//!
//! A lambda inside another lambda's body is not entered by the outer substitution.
//! Instead it captures the outer bindings, so outer placeholders referenced inside it
//! resolve when it is eventually invoked, while its own parameters shadow the outer
//! ones.

mod resolve;
mod scope;

use std::fmt;

use crate::error::{MetaError, MetaResult};
use crate::eval::{Arity, Context};
use crate::func::Func;
use crate::term::Term;

pub use resolve::{resolve, resolve_args};
pub use scope::{Binding, Bindings};

/// A tag standing for an argument of a lambda.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placeholder {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    Args,
    ArgsA,
    ArgsB,
    ArgsC,
}

impl Placeholder {
    pub const ALL: [Placeholder; 13] = [
        Placeholder::A,
        Placeholder::B,
        Placeholder::C,
        Placeholder::D,
        Placeholder::E,
        Placeholder::F,
        Placeholder::G,
        Placeholder::H,
        Placeholder::I,
        Placeholder::Args,
        Placeholder::ArgsA,
        Placeholder::ArgsB,
        Placeholder::ArgsC,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Placeholder::A => "_a",
            Placeholder::B => "_b",
            Placeholder::C => "_c",
            Placeholder::D => "_d",
            Placeholder::E => "_e",
            Placeholder::F => "_f",
            Placeholder::G => "_g",
            Placeholder::H => "_h",
            Placeholder::I => "_i",
            Placeholder::Args => "_args",
            Placeholder::ArgsA => "_args_a",
            Placeholder::ArgsB => "_args_b",
            Placeholder::ArgsC => "_args_c",
        }
    }

    pub fn from_name(name: &str) -> Option<Placeholder> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn is_variadic(self) -> bool {
        matches!(
            self,
            Placeholder::Args | Placeholder::ArgsA | Placeholder::ArgsB | Placeholder::ArgsC
        )
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `lambda<Ps..., Body>` together with the bindings of its enclosing lambdas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lambda {
    params: Vec<Placeholder>,
    body: Term,
    captured: Bindings,
}

impl Lambda {
    /// Fails hard when a variadic placeholder is not last or a placeholder repeats.
    pub fn new(params: Vec<Placeholder>, body: Term) -> MetaResult<Self> {
        for (index, param) in params.iter().enumerate() {
            if param.is_variadic() && index + 1 != params.len() {
                return Err(MetaError::malformed(format!(
                    "variadic placeholder {param} must be the last lambda parameter"
                )));
            }
            if params[..index].contains(param) {
                return Err(MetaError::malformed(format!(
                    "placeholder {param} appears twice in the lambda parameters"
                )));
            }
        }
        Ok(Self {
            params,
            body,
            captured: Bindings::new(),
        })
    }

    pub fn params(&self) -> &[Placeholder] {
        &self.params
    }

    pub fn body(&self) -> &Term {
        &self.body
    }

    pub fn is_variadic(&self) -> bool {
        self.params.last().is_some_and(|p| p.is_variadic())
    }

    pub fn arity(&self) -> Arity {
        if self.is_variadic() {
            Arity::at_least(self.params.len() - 1)
        } else {
            Arity::exactly(self.params.len())
        }
    }

    /// This lambda closed over `scope`; its own earlier captures stay innermost.
    pub(crate) fn capture(&self, scope: &Bindings) -> Lambda {
        Lambda {
            params: self.params.clone(),
            body: self.body.clone(),
            captured: scope.extended_by(&self.captured),
        }
    }

    pub fn invoke(&self, args: &[Term], ctx: &mut Context) -> MetaResult<Term> {
        let arity = self.arity();
        if !arity.accepts(args.len()) {
            return Err(MetaError::not_applicable(format!(
                "lambda expects {arity} arguments, found {}",
                args.len()
            )));
        }

        let mut scope = self.captured.clone();
        scope.enter();
        for (index, param) in self.params.iter().enumerate() {
            if param.is_variadic() {
                scope.add(*param, Binding::Pack(args[index..].to_vec()));
            } else {
                scope.add(*param, Binding::One(args[index].clone()));
            }
        }
        resolve(&self.body, &scope, ctx)
    }
}

/// `lambda<Ps..., Body>` as a metafunction class.
pub fn lambda(params: Vec<Placeholder>, body: Term) -> MetaResult<Term> {
    Ok(Term::Func(Func::Lambda(Lambda::new(params, body)?.into())))
}

/// Split `lambda<Ps..., Body>` template arguments into parameters and body.
pub fn lambda_from_args(args: &[Term]) -> MetaResult<Term> {
    let (body, params) = args
        .split_last()
        .ok_or_else(|| MetaError::malformed("lambda needs a body"))?;
    let params = params
        .iter()
        .map(|param| {
            param.as_placeholder().ok_or_else(|| {
                MetaError::malformed(format!("lambda parameter {param} is not a placeholder"))
            })
        })
        .collect::<MetaResult<Vec<_>>>()?;
    lambda(params, body.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::func::{invoke, is_invocable};
    use crate::library::builtins;
    use crate::term::Prim;

    fn int() -> Term {
        Term::Prim(Prim::Int)
    }

    fn short() -> Term {
        Term::Prim(Prim::Short)
    }

    fn pair(a: Term, b: Term) -> Term {
        Term::app(builtins::std_pair(), vec![a, b])
    }

    #[test]
    fn test_placeholder_names() {
        assert_eq!(Placeholder::from_name("_c"), Some(Placeholder::C));
        assert_eq!(Placeholder::from_name("_args_b"), Some(Placeholder::ArgsB));
        assert_eq!(Placeholder::from_name("_z"), None);
        assert!(Placeholder::Args.is_variadic());
        assert!(!Placeholder::I.is_variadic());
    }

    #[test]
    fn test_swap_pair() {
        let mut ctx = Context::new();
        let f = lambda(
            vec![Placeholder::A, Placeholder::B],
            pair(Placeholder::B.into(), Placeholder::A.into()),
        )
        .unwrap();
        assert_eq!(invoke(&f, &[int(), short()], &mut ctx), Ok(pair(short(), int())));
    }

    #[test]
    fn test_variadic_must_be_last() {
        let err = Lambda::new(vec![Placeholder::Args, Placeholder::A], int()).unwrap_err();
        assert!(!err.is_soft());
        let err = Lambda::new(vec![Placeholder::A, Placeholder::A], int()).unwrap_err();
        assert!(matches!(err, MetaError::Malformed { .. }));
    }

    #[test]
    fn test_arity() {
        let mut ctx = Context::new();
        let f = lambda(vec![Placeholder::A], Placeholder::A.into()).unwrap();
        assert_eq!(is_invocable(&f, &[int(), short()], &mut ctx), Ok(false));

        let variadic = Lambda::new(
            vec![Placeholder::A, Placeholder::B, Placeholder::C, Placeholder::Args],
            int(),
        )
        .unwrap();
        assert_eq!(variadic.arity(), Arity::at_least(3));
    }

    #[test]
    fn test_pack_splices_into_lists() {
        let mut ctx = Context::new();
        let f = lambda(
            vec![Placeholder::Args],
            Term::list([Placeholder::Args.into(), Term::list([Placeholder::Args.into()])]),
        )
        .unwrap();
        assert_eq!(
            invoke(&f, &[int(), short()], &mut ctx),
            Ok(Term::list([int(), short(), Term::list([int(), short()])]))
        );
    }

    #[test]
    fn test_lambda_from_args_rejects_non_placeholders() {
        let err = lambda_from_args(&[int(), int()]).unwrap_err();
        assert!(matches!(err, MetaError::Malformed { .. }));
        assert!(lambda_from_args(&[]).is_err());
    }
}
