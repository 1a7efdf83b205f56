//! Multi-line printer for terms too wide to read on one line.

use crate::func::Func;
use crate::term::Term;

const INDENT: &str = "  ";

/// Line width used by [`pretty`].
pub const DEFAULT_WIDTH: usize = 72;

struct Formatter {
    buffer: String,
    indent_level: usize,
    width: usize,
}

impl Formatter {
    fn new(width: usize) -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            width,
        }
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }

    fn write_str(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    fn write_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn column(&self) -> usize {
        let line_start = self.buffer.rfind('\n').map_or(0, |index| index + 1);
        self.buffer.len() - line_start
    }

    fn finish(self) -> String {
        self.buffer
    }
}

/// One argument slot of an instantiation-shaped term.
enum Part<'a> {
    Name(&'a str),
    Term(&'a Term),
}

/// Split a term into `head<parts...>`, if it prints that way.
fn instantiation_parts(term: &Term) -> Option<(&str, Vec<Part<'_>>)> {
    match term {
        Term::List(list) => Some(("list", terms(list.as_slice()))),
        Term::App(app) => Some((app.template.name(), terms(&app.args))),
        Term::Defer(app) => {
            let mut parts = vec![Part::Name(app.template.name())];
            parts.extend(app.args.iter().map(Part::Term));
            Some(("defer", parts))
        }
        Term::Func(func) => match func {
            Func::Compose(funcs) => Some(("compose", terms(funcs))),
            Func::BindFront(head, rest) => Some(("bind_front", with_head(head, rest))),
            Func::BindBack(head, rest) => Some(("bind_back", with_head(head, rest))),
            Func::On(head, rest) => Some(("on", with_head(head, rest))),
            Func::Lambda(lambda) => {
                let mut parts: Vec<_> = lambda
                    .params()
                    .iter()
                    .map(|param| Part::Name(param.name()))
                    .collect();
                parts.push(Part::Term(lambda.body()));
                Some(("lambda", parts))
            }
            _ => None,
        },
        _ => None,
    }
}

fn terms(items: &[Term]) -> Vec<Part<'_>> {
    items.iter().map(Part::Term).collect()
}

fn with_head<'a>(head: &'a Term, rest: &'a [Term]) -> Vec<Part<'a>> {
    std::iter::once(Part::Term(head))
        .chain(rest.iter().map(Part::Term))
        .collect()
}

fn format_term(term: &Term, f: &mut Formatter) {
    let flat = term.to_string();
    if f.column() + flat.len() <= f.width {
        f.write_str(&flat);
        return;
    }
    let Some((head, parts)) = instantiation_parts(term).filter(|(_, parts)| !parts.is_empty())
    else {
        f.write_str(&flat);
        return;
    };

    f.write_str(head);
    f.write_str("<");
    f.write_newline();
    f.indent();
    let last = parts.len() - 1;
    for (index, part) in parts.iter().enumerate() {
        f.write_indent();
        match part {
            Part::Name(name) => f.write_str(name),
            Part::Term(term) => format_term(term, f),
        }
        if index < last {
            f.write_str(",");
        }
        f.write_newline();
    }
    f.dedent();
    f.write_indent();
    f.write_str(">");
}

/// Print `term` in the notation, breaking instantiations wider than [`DEFAULT_WIDTH`]
/// one argument per line.
pub fn pretty(term: &Term) -> String {
    pretty_with_width(term, DEFAULT_WIDTH)
}

pub fn pretty_with_width(term: &Term, width: usize) -> String {
    let mut formatter = Formatter::new(width);
    format_term(term, &mut formatter);
    formatter.finish()
}
