use std::fmt;
use std::rc::Rc;

use crate::error::{MetaError, MetaResult};
use crate::term::Term;

use super::Context;

/// Computation behind an alias template or a trait's nested `type`.
pub type TemplateFn = Rc<dyn Fn(&[Term], &mut Context) -> MetaResult<Term>>;

/// How many arguments a template or metafunction class accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    pub max: Option<usize>,
}

impl Arity {
    pub fn exactly(n: usize) -> Self {
        Self {
            min: n,
            max: Some(n),
        }
    }

    pub fn at_least(n: usize) -> Self {
        Self { min: n, max: None }
    }

    pub fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub fn any() -> Self {
        Self::at_least(0)
    }

    pub fn accepts(&self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{max}"),
            Some(max) => write!(f, "{} to {}", self.min, max),
            None => write!(f, "at least {}", self.min),
        }
    }
}

enum TemplateKind {
    /// Instantiation produces an opaque [`Term::App`]; `nested` computes its `::type`.
    Class { nested: Option<TemplateFn> },
    /// Instantiation computes a result directly.
    Alias(TemplateFn),
}

struct TemplateDef {
    name: Rc<str>,
    arity: Arity,
    kind: TemplateKind,
}

/// A named, parametrized template: the interpreter's `template <typename...> class C`.
///
/// Templates compare by name.
#[derive(Clone)]
pub struct Template(Rc<TemplateDef>);

impl Template {
    /// A class template whose instantiations have no nested `type`.
    pub fn class(name: &str, arity: Arity) -> Self {
        Self::build(name, arity, TemplateKind::Class { nested: None })
    }

    /// A class template whose instantiations expose a nested `type` (a trait).
    pub fn class_with_type(
        name: &str,
        arity: Arity,
        nested: impl Fn(&[Term], &mut Context) -> MetaResult<Term> + 'static,
    ) -> Self {
        Self::build(
            name,
            arity,
            TemplateKind::Class {
                nested: Some(Rc::new(nested)),
            },
        )
    }

    /// An alias template: instantiating it computes the result.
    pub fn alias(
        name: &str,
        arity: Arity,
        compute: impl Fn(&[Term], &mut Context) -> MetaResult<Term> + 'static,
    ) -> Self {
        Self::build(name, arity, TemplateKind::Alias(Rc::new(compute)))
    }

    fn build(name: &str, arity: Arity, kind: TemplateKind) -> Self {
        Template(Rc::new(TemplateDef {
            name: name.into(),
            arity,
            kind,
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn arity(&self) -> Arity {
        self.0.arity
    }

    pub fn is_alias(&self) -> bool {
        matches!(self.0.kind, TemplateKind::Alias(_))
    }

    pub fn is(&self, name: &str) -> bool {
        &*self.0.name == name
    }

    /// `C<args...>`. Fails softly when the arguments do not fit.
    pub fn instantiate(&self, args: &[Term], ctx: &mut Context) -> MetaResult<Term> {
        if !self.arity().accepts(args.len()) {
            return Err(MetaError::not_applicable(format!(
                "{} expects {} arguments, found {}",
                self.name(),
                self.arity(),
                args.len()
            )));
        }
        match &self.0.kind {
            TemplateKind::Class { .. } => Ok(Term::app(self.clone(), args.to_vec())),
            TemplateKind::Alias(compute) => ctx.nested(self.name(), |ctx| compute(args, ctx)),
        }
    }

    /// The nested `type` of `C<args...>`.
    pub(crate) fn nested_type(&self, args: &[Term], ctx: &mut Context) -> MetaResult<Term> {
        match &self.0.kind {
            TemplateKind::Class {
                nested: Some(nested),
            } => ctx.nested(self.name(), |ctx| nested(args, ctx)),
            _ => Err(MetaError::not_applicable(format!(
                "{} has no nested type",
                self.name()
            ))),
        }
    }
}

impl PartialEq for Template {
    fn eq(&self, other: &Self) -> bool {
        self.0.name == other.0.name
    }
}

impl Eq for Template {}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Template({})", self.name())
    }
}
