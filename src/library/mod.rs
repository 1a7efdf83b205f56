//! # Library
//!
//! The named vocabulary that textual terms are elaborated against: every builtin
//! template, the fundamental types, `nil_`, `npos`, the placeholders, and whatever the
//! user declares or defines on top.
//!
//! ```text
//! list, fold, std::pair, ...      templates
//! int, std::size_t, ...           fundamental types
//! nil_, npos, std::true_type      named terms
//! _a ... _i, _args, _args_a ...   placeholders
//! ```

pub mod builtins;

use std::collections::HashMap;

use crate::eval::Template;
use crate::lambda::Placeholder;
use crate::term::{Prim, Term};

/// What a library name refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Template(Template),
    Term(Term),
}

#[derive(Debug, Clone, Default)]
pub struct Library {
    entries: HashMap<String, Entry>,
}

impl Library {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every builtin template, type and named term.
    pub fn standard() -> Self {
        let mut library = Self::empty();
        for template in builtins::all() {
            library.define_template(template);
        }
        for prim in Prim::ALL {
            library.define(prim.name(), Term::Prim(prim));
        }
        for placeholder in Placeholder::ALL {
            library.define(placeholder.name(), Term::Placeholder(placeholder));
        }
        library.define("nil_", Term::Nil);
        library.define("npos", Term::npos());
        library.define("std::true_type", Term::bool(true));
        library.define("std::false_type", Term::bool(false));
        library
    }

    pub fn lookup(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn template(&self, name: &str) -> Option<&Template> {
        match self.lookup(name) {
            Some(Entry::Template(template)) => Some(template),
            _ => None,
        }
    }

    /// Register a template under its own name, replacing any previous entry.
    pub fn define_template(&mut self, template: Template) {
        self.entries
            .insert(template.name().to_string(), Entry::Template(template));
    }

    /// Give a term a name.
    pub fn define(&mut self, name: &str, term: Term) {
        self.entries.insert(name.to_string(), Entry::Term(term));
    }

    /// Declare an opaque class type and return it.
    pub fn declare_type(&mut self, name: &str) -> Term {
        let term = Term::named(name);
        self.define(name, term.clone());
        term
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}
