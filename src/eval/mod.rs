//! # Evaluation Core
//!
//! The primitives every other module is built on:
//!
//! - [`Context`]: the evaluation state threaded through every call. It tracks the
//!   instantiation depth against [`Config::max_depth`] and holds the registry of
//!   foreign sequence-like templates used by `apply_list`.
//! - [`Template`]: a parametrized template. Class templates produce opaque
//!   instantiations, alias templates compute results.
//! - [`eval`]: read the nested `type` of a term (`_t<T>`).
//! - [`value_of`]: read `T::type::value` of an integral-constant-like term.
//!
//! ## Nested Types
//!
//! | term | nested `type` |
//! |------|---------------|
//! | integral constant | itself |
//! | list | itself |
//! | trait instantiation (`std::is_void<int>`) | computed by the template |
//! | deferred node `defer<C, Ts...>` | `C<Ts...>` |
//! | anything else | none (soft failure) |

mod template;

use std::collections::HashMap;
use std::rc::Rc;

use tracing::{trace, warn};

use crate::config::Config;
use crate::error::{MetaError, MetaResult};
use crate::term::{Constant, Term};

pub use template::{Arity, Template, TemplateFn};

/// Unpacks the arguments of a registered sequence-like instantiation.
pub type Unpacker = Rc<dyn Fn(&[Term]) -> MetaResult<Vec<Term>>>;

/// Evaluation state: limits, current depth and the sequence extension registry.
pub struct Context {
    config: Config,
    depth: usize,
    sequences: HashMap<String, Unpacker>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            depth: 0,
            sequences: HashMap::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Run `f` one level deeper, failing hard once the configured limit is reached.
    pub fn nested<T>(
        &mut self,
        what: &str,
        f: impl FnOnce(&mut Context) -> MetaResult<T>,
    ) -> MetaResult<T> {
        self.enter(what)?;
        let result = f(self);
        self.leave();
        result
    }

    /// Go one level deeper; every successful `enter` is paired with a `leave`.
    pub(crate) fn enter(&mut self, what: &str) -> MetaResult<()> {
        if self.depth >= self.config.max_depth {
            warn!(limit = self.config.max_depth, what, "recursion limit reached");
            return Err(MetaError::RecursionLimit {
                limit: self.config.max_depth,
                while_evaluating: what.to_string(),
            });
        }
        self.depth += 1;
        trace!(depth = self.depth, what, "enter");
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Fail hard if an expansion of `length` elements exceeds the configured limit.
    pub fn check_length(&self, what: &str, length: u128) -> MetaResult<()> {
        let limit = self.config.max_length;
        if length > limit as u128 {
            warn!(limit, %length, what, "length limit reached");
            return Err(MetaError::LimitExceeded {
                what: what.to_string(),
                length,
                limit,
            });
        }
        Ok(())
    }

    /// Register a foreign sequence-like template so `apply_list` and `as_list` can
    /// unpack its instantiations.
    ///
    /// Without a registration, an instantiation `C<Ts...>` unpacks to `Ts...`.
    pub fn register_sequence(
        &mut self,
        template: &Template,
        unpack: impl Fn(&[Term]) -> MetaResult<Vec<Term>> + 'static,
    ) {
        self.sequences
            .insert(template.name().to_string(), Rc::new(unpack));
    }

    /// The elements of a sequence-like term.
    pub fn unpack(&self, sequence: &Term) -> MetaResult<Vec<Term>> {
        match sequence {
            Term::List(list) => Ok(list.to_vec()),
            Term::IntSeq(seq) => Ok(seq.constants()),
            Term::App(app) => match self.sequences.get(app.template.name()) {
                Some(unpack) => unpack(&app.args),
                None => Ok(app.args.clone()),
            },
            other => Err(MetaError::not_applicable(format!(
                "{other} is not a sequence"
            ))),
        }
    }
}

/// The nested `type` of a term (`_t<T>`).
pub fn eval(term: &Term, ctx: &mut Context) -> MetaResult<Term> {
    match term {
        Term::Const(_) | Term::List(_) => Ok(term.clone()),
        Term::App(app) => app.template.nested_type(&app.args, ctx),
        Term::Defer(app) => app.template.instantiate(&app.args, ctx),
        other => Err(MetaError::not_applicable(format!(
            "{other} has no nested type"
        ))),
    }
}

/// Whether `term` has a nested `type`. Hard failures still propagate.
pub fn is_trait(term: &Term, ctx: &mut Context) -> MetaResult<bool> {
    match eval(term, ctx) {
        Ok(_) => Ok(true),
        Err(err) if err.is_soft() => Ok(false),
        Err(err) => Err(err),
    }
}

/// `T::type::value`: follows nested types until an integral constant is reached.
pub fn value_of(term: &Term, ctx: &mut Context) -> MetaResult<Constant> {
    match term {
        Term::Const(c) => Ok(*c),
        Term::App(_) | Term::Defer(_) => {
            let next = eval(term, ctx)?;
            ctx.nested("value", |ctx| value_of(&next, ctx))
        }
        other => Err(MetaError::not_applicable(format!(
            "{other} is not an integral constant"
        ))),
    }
}

/// Whether `term` models a true Boolean constant.
pub fn truthy(term: &Term, ctx: &mut Context) -> MetaResult<bool> {
    Ok(value_of(term, ctx)?.is_true())
}

/// A non-negative count or position carried by an integral constant.
pub fn index_of(term: &Term, ctx: &mut Context) -> MetaResult<usize> {
    value_of(term, ctx)?.as_index()
}
