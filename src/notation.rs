//! # Textual Notation
//!
//! Reads terms written the way the metaprograms themselves are written, and evaluates
//! them against a [`Library`]:
//!
//! ```text
//! reverse<list<int, short, char>>                       list<char, short, int>
//! find_index<list<int, long, short, int>, short>        size_t<2>
//! invoke<lambda<_a, _b, std::pair<_b, _a>>, int, char>  std::pair<char, int>
//! let<lazy::if_<std::true_type, int, defer<std::pair, int>>>   int
//! ```
//!
//! Elaboration rules:
//!
//! - `name<args...>` instantiates the template `name`; aliases compute immediately.
//! - `lazy::name<args...>` and `defer<name, args...>` build a deferred instantiation.
//! - `quote<name>`, `quote_trait<name>` and `is<T, name>` take a template name.
//! - Bare names are types, named constants, placeholders or user definitions.
//! - Integer literals are `int_` constants, widening to `long` and then
//!   `std::size_t` when the value does not fit. `'c'` is a `char_`, `true`/`false`
//!   are `bool_`.
//! - `T*`, `T&`, `T const` (or `const T`) and `T[N]` build compound types.

use std::fmt;

use lachs::Span;
use tracing::debug;

use crate::ast::{Expr, Literal, LiteralValue, Modifier, Name};
use crate::config::{Config, DEFAULT_MAX_NESTING};
use crate::error::MetaError;
use crate::eval::{Context, Template};
use crate::func::{quote, quote_trait};
use crate::lexer::Token;
use crate::library::{Entry, Library};
use crate::parser::{self, ParseError, ParseState};
use crate::term::{Constant, Prim, Term};
use crate::traits;

const LAZY_PREFIX: &str = "lazy::";

/// Errors raised while reading or evaluating notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    Lex(String),
    Parse(ParseError),
    UnknownName { name: String, span: Span },
    ExpectedTemplate { found: String, span: Span },
    MissingArguments { name: String, span: Span },
    NotATemplate { name: String, span: Span },
    Eval { source: MetaError, span: Option<Span> },
}

impl NotationError {
    /// The evaluation failure behind this error, if it is one.
    pub fn meta_error(&self) -> Option<&MetaError> {
        match self {
            NotationError::Eval { source, .. } => Some(source),
            _ => None,
        }
    }

    fn eval_at(source: MetaError, span: &Span) -> Self {
        NotationError::Eval {
            source,
            span: Some(span.clone()),
        }
    }
}

fn write_at(f: &mut fmt::Formatter<'_>, span: Option<&Span>, msg: &str) -> fmt::Result {
    match span {
        Some(span) if !span.source.is_empty() => write!(f, "{}", span.to_string(msg)),
        _ => write!(f, "{msg}"),
    }
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Lex(msg) => write!(f, "lexing failed: {msg}"),
            NotationError::Parse(err) => write!(f, "{err}"),
            NotationError::UnknownName { name, span } => {
                write_at(f, Some(span), &format!("unknown name '{name}'"))
            }
            NotationError::ExpectedTemplate { found, span } => {
                write_at(f, Some(span), &format!("expected a template name, found {found}"))
            }
            NotationError::MissingArguments { name, span } => write_at(
                f,
                Some(span),
                &format!("template '{name}' needs an argument list"),
            ),
            NotationError::NotATemplate { name, span } => write_at(
                f,
                Some(span),
                &format!("'{name}' is not a template and takes no arguments"),
            ),
            NotationError::Eval { source, span } => write_at(f, span.as_ref(), &source.to_string()),
        }
    }
}

impl std::error::Error for NotationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NotationError::Parse(err) => Some(err),
            NotationError::Eval { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<MetaError> for NotationError {
    fn from(source: MetaError) -> Self {
        NotationError::Eval { source, span: None }
    }
}

impl From<ParseError> for NotationError {
    fn from(err: ParseError) -> Self {
        NotationError::Parse(err)
    }
}

/// Lex and parse one term without evaluating it.
pub fn parse(source: &str) -> Result<Expr, NotationError> {
    parse_with_limit(source, DEFAULT_MAX_NESTING)
}

/// Like [`parse`], failing once argument lists nest deeper than `max_nesting`.
pub fn parse_with_limit(source: &str, max_nesting: usize) -> Result<Expr, NotationError> {
    let tokens = Token::lex(source).map_err(|err| NotationError::Lex(err.to_string()))?;
    let mut state = ParseState::new(tokens).with_max_nesting(max_nesting);
    Ok(parser::parse(&mut state)?)
}

/// A library plus the evaluation context terms are elaborated in.
pub struct Session {
    library: Library,
    context: Context,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session over the standard library.
    pub fn new() -> Self {
        Self::with_library(Library::standard(), Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_library(Library::standard(), config)
    }

    pub fn with_library(library: Library, config: Config) -> Self {
        Self {
            library,
            context: Context::with_config(config),
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut Library {
        &mut self.library
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    /// Declare opaque class types such as `A`, `B`, `widget`.
    pub fn declare(&mut self, names: &[&str]) {
        for name in names {
            self.library.declare_type(name);
        }
    }

    /// Evaluate `source` and bind the result to `name`, like a `using` alias.
    pub fn define(&mut self, name: &str, source: &str) -> Result<Term, NotationError> {
        let term = self.eval(source)?;
        self.library.define(name, term.clone());
        Ok(term)
    }

    /// Parse and evaluate one term.
    pub fn eval(&mut self, source: &str) -> Result<Term, NotationError> {
        let expr = parse_with_limit(source, self.context.config().max_nesting)?;
        debug!(source, "evaluating notation");
        self.elaborate(&expr)
    }

    /// Turn a parsed term into a value, instantiating templates along the way.
    ///
    /// Each level of the tree counts against the context's depth limit.
    pub fn elaborate(&mut self, expr: &Expr) -> Result<Term, NotationError> {
        self.context
            .enter("notation")
            .map_err(|err| NotationError::eval_at(err, &expr.position()))?;
        let term = self.elaborate_expr(expr);
        self.context.leave();
        term
    }

    fn elaborate_expr(&mut self, expr: &Expr) -> Result<Term, NotationError> {
        match expr {
            Expr::Literal(literal) => literal_term(literal),
            Expr::Modified(modified) => {
                let inner = self.elaborate(&modified.inner)?;
                Ok(match modified.modifier {
                    Modifier::Pointer => Term::pointer(inner),
                    Modifier::Reference => Term::reference(inner),
                    Modifier::Const => Term::const_qualified(inner),
                    Modifier::Array(extent) => Term::array(inner, extent),
                })
            }
            Expr::Name(name) => self.elaborate_name(name),
        }
    }

    fn elaborate_name(&mut self, name: &Name) -> Result<Term, NotationError> {
        let Name {
            path,
            args,
            position,
        } = name;
        if let Some(args) = args {
            if let Some(term) = self.special_form(path, args, position)? {
                return Ok(term);
            }
        }

        if let Some(lazy_name) = path.strip_prefix(LAZY_PREFIX) {
            let template = self.template_named(lazy_name, position)?;
            let Some(args) = args else {
                return Err(NotationError::MissingArguments {
                    name: path.clone(),
                    span: position.clone(),
                });
            };
            let args = self.elaborate_all(args)?;
            return Ok(Term::defer(template, args));
        }

        match (self.library.lookup(path).cloned(), args) {
            (Some(Entry::Template(template)), Some(args)) => {
                let args = self.elaborate_all(args)?;
                template
                    .instantiate(&args, &mut self.context)
                    .map_err(|err| NotationError::eval_at(err, position))
            }
            (Some(Entry::Template(_)), None) => Err(NotationError::MissingArguments {
                name: path.clone(),
                span: position.clone(),
            }),
            (Some(Entry::Term(term)), None) => Ok(term),
            (Some(Entry::Term(_)), Some(_)) => Err(NotationError::NotATemplate {
                name: path.clone(),
                span: position.clone(),
            }),
            (None, _) => Err(NotationError::UnknownName {
                name: path.clone(),
                span: position.clone(),
            }),
        }
    }

    /// Constructs whose arguments include template names rather than terms.
    fn special_form(
        &mut self,
        path: &str,
        args: &[Expr],
        position: &Span,
    ) -> Result<Option<Term>, NotationError> {
        let term = match (path, args) {
            ("quote", [template]) => quote(self.template_arg(template)?),
            ("quote_trait", [template]) => quote_trait(self.template_arg(template)?),
            ("defer", [template, rest @ ..]) => {
                let template = self.template_arg(template)?;
                Term::defer(template, self.elaborate_all(rest)?)
            }
            ("is", [term, template]) => {
                let term = self.elaborate(term)?;
                traits::is(&term, &self.template_arg(template)?)
            }
            ("quote" | "quote_trait" | "defer" | "is", _) => {
                return Err(NotationError::eval_at(
                    MetaError::malformed(format!("wrong number of arguments to {path}")),
                    position,
                ));
            }
            _ => return Ok(None),
        };
        Ok(Some(term))
    }

    fn template_arg(&self, expr: &Expr) -> Result<Template, NotationError> {
        match expr.as_bare_name() {
            Some(name) => self.template_named(name, &expr.position()),
            None => Err(NotationError::ExpectedTemplate {
                found: describe(expr),
                span: expr.position(),
            }),
        }
    }

    fn template_named(&self, name: &str, span: &Span) -> Result<Template, NotationError> {
        match self.library.lookup(name) {
            Some(Entry::Template(template)) => Ok(template.clone()),
            Some(Entry::Term(_)) => Err(NotationError::ExpectedTemplate {
                found: format!("'{name}'"),
                span: span.clone(),
            }),
            None => Err(NotationError::UnknownName {
                name: name.to_string(),
                span: span.clone(),
            }),
        }
    }

    fn elaborate_all(&mut self, exprs: &[Expr]) -> Result<Vec<Term>, NotationError> {
        exprs.iter().map(|expr| self.elaborate(expr)).collect()
    }
}

fn describe(expr: &Expr) -> String {
    match expr {
        Expr::Name(name) => format!("'{}<...>'", name.path),
        Expr::Literal(_) => "a literal".to_string(),
        Expr::Modified(_) => "a compound type".to_string(),
    }
}

fn literal_term(literal: &Literal) -> Result<Term, NotationError> {
    match literal.value {
        LiteralValue::Integer(value) => [Prim::Int, Prim::Long, Prim::SizeT]
            .into_iter()
            .find(|ty| (ty.min_value()..=ty.max_value()).contains(&value))
            .map(|ty| Term::Const(Constant::wrapped(ty, value)))
            .ok_or_else(|| {
                NotationError::eval_at(
                    MetaError::not_applicable(format!("integer literal {value} is too large")),
                    &literal.position,
                )
            }),
        LiteralValue::Char(value) => Ok(Term::char(value)),
        LiteralValue::Bool(value) => Ok(Term::bool(value)),
    }
}

/// Evaluate one term against the standard library.
pub fn evaluate(source: &str) -> Result<Term, NotationError> {
    Session::new().eval(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        assert_eq!(evaluate("42"), Ok(Term::int(42)));
        assert_eq!(evaluate("'x'"), Ok(Term::char(b'x')));
        assert_eq!(evaluate("false"), Ok(Term::bool(false)));
        assert_eq!(evaluate("18446744073709551615"), Ok(Term::npos()));
        let long = evaluate("-3000000000").unwrap();
        assert_eq!(long.to_string(), "integral_constant<long, -3000000000>");
        assert!(evaluate("18446744073709551616").is_err());
    }

    #[test]
    fn test_compound_types() {
        let term = evaluate("const int&").unwrap();
        assert_eq!(term.to_string(), "int const&");
        assert_eq!(evaluate("char[5]").unwrap().to_string(), "char[5]");
    }

    #[test]
    fn test_lazy_names_defer() {
        let term = evaluate("lazy::plus<1, 2>").unwrap();
        assert!(matches!(term, Term::Defer(_)));
        assert_eq!(evaluate("defer<plus, 1, 2>"), Ok(term));
    }

    #[test]
    fn test_special_forms() {
        assert_eq!(
            evaluate("is<std::pair<int, int>, std::pair>"),
            Ok(Term::bool(true))
        );
        assert_eq!(
            evaluate("quote<std::pair>").unwrap().to_string(),
            "quote<std::pair>"
        );
        assert!(matches!(
            evaluate("quote<int>"),
            Err(NotationError::ExpectedTemplate { .. })
        ));
    }

    #[test]
    fn test_name_errors() {
        assert!(matches!(
            evaluate("widget"),
            Err(NotationError::UnknownName { name, .. }) if name == "widget"
        ));
        assert!(matches!(
            evaluate("list"),
            Err(NotationError::MissingArguments { .. })
        ));
        assert!(matches!(
            evaluate("int<char>"),
            Err(NotationError::NotATemplate { .. })
        ));
    }

    #[test]
    fn test_soft_failures_keep_position() {
        let err = evaluate("std::pair<int>").unwrap_err();
        assert!(err.meta_error().is_some_and(MetaError::is_soft));
        assert!(matches!(err, NotationError::Eval { span: Some(_), .. }));
    }

    #[test]
    fn test_define() {
        let mut session = Session::new();
        session.declare(&["A", "B"]);
        session.define("pairs", "list<A, B>").unwrap();
        assert_eq!(
            session.eval("reverse<pairs>").unwrap().to_string(),
            "list<B, A>"
        );
    }
}
