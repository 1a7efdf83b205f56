use std::collections::HashMap;

use crate::term::Term;

use super::Placeholder;

/// What a placeholder stands for inside a lambda body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    One(Term),
    /// Everything captured by a variadic placeholder, spliced into argument lists.
    Pack(Vec<Term>),
}

type Frame = HashMap<Placeholder, Binding>;

/// Placeholder bindings, one frame per enclosing lambda.
///
/// A nested lambda captures the frames of its enclosing lambdas and pushes its own,
/// so the innermost binding of a placeholder wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    frames: Vec<Frame>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a new frame
    pub fn enter(&mut self) {
        self.frames.push(HashMap::new());
    }

    /// Leave the current frame
    #[cfg(test)]
    fn leave(&mut self) {
        self.frames.pop();
    }

    /// Resolve a placeholder by searching from the innermost to the outermost frame
    pub fn resolve(&self, placeholder: Placeholder) -> Option<&Binding> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(&placeholder))
    }

    /// Bind a placeholder in the innermost frame, opening one if needed
    pub fn add(&mut self, placeholder: Placeholder, binding: Binding) {
        if self.frames.is_empty() {
            self.enter();
        }
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(placeholder, binding);
        }
    }

    /// `self` extended by the frames of `inner`, which take precedence.
    pub fn extended_by(&self, inner: &Bindings) -> Bindings {
        let mut frames = self.frames.clone();
        frames.extend(inner.frames.iter().cloned());
        Bindings { frames }
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.frames.iter().all(HashMap::is_empty)
    }
}
