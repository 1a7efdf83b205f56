//! Property-based tests for the list algorithms.

use metakit::algo;
use metakit::eval::Context;
use metakit::func::{quote, quote_trait};
use metakit::library::builtins;
use metakit::term::{Prim, Term};
use metakit::traits;
use metakit::{Session, evaluate};
use proptest::prelude::*;

/// Any complete fundamental type.
fn prim() -> impl Strategy<Value = Prim> {
    prop::sample::select(Prim::ALL[1..].to_vec())
}

/// Fundamental types, some behind a pointer or inside an array.
fn ty() -> impl Strategy<Value = Term> {
    prop_oneof![
        3 => prim().prop_map(Term::Prim),
        1 => prim().prop_map(|p| Term::pointer(Term::Prim(p))),
        1 => (prim(), 1u64..8).prop_map(|(p, n)| Term::array(Term::Prim(p), n)),
    ]
}

fn types() -> impl Strategy<Value = Vec<Term>> {
    prop::collection::vec(ty(), 0..12)
}

fn items(list: &Term) -> Vec<Term> {
    list.as_list().map(|l| l.to_vec()).unwrap_or_default()
}

fn size_of(term: &Term) -> i128 {
    traits::sizeof_(term)
        .ok()
        .and_then(|t| t.as_const().map(|c| c.value()))
        .unwrap_or(0)
}

proptest! {
    #[test]
    fn reversing_twice_is_identity(xs in types()) {
        let mut ctx = Context::new();
        let list = Term::list(xs);
        let back = algo::reverse(&algo::reverse(&list, &mut ctx)?, &mut ctx)?;
        prop_assert_eq!(back, list);
    }

    #[test]
    fn concat_appends_in_order(xs in types(), ys in types()) {
        let mut ctx = Context::new();
        let joined = algo::concat(&[Term::list(xs.clone()), Term::list(ys.clone())], &mut ctx)?;
        let expected: Vec<Term> = xs.iter().chain(&ys).cloned().collect();
        prop_assert_eq!(items(&joined), expected);
        let alone = algo::concat(&[Term::list(xs.clone()), Term::empty_list()], &mut ctx)?;
        prop_assert_eq!(alone, Term::list(xs));
    }

    #[test]
    fn find_returns_the_suffix_at_the_first_match(xs in types(), needle in ty()) {
        let list = Term::list(xs.clone());
        let found = algo::find(&list, &needle)?;
        let expected = match xs.iter().position(|x| *x == needle) {
            Some(i) => xs[i..].to_vec(),
            None => vec![],
        };
        prop_assert_eq!(algo::find_index(&list, &needle)?, xs.iter().position(|x| *x == needle));
        prop_assert_eq!(items(&found), expected);
    }

    #[test]
    fn sort_by_size_matches_a_stable_sort(xs in types()) {
        let mut session = Session::new();
        let list = Term::list(xs.clone());
        let sorted = session.eval(&format!(
            "sort<{list}, lambda<_a, _b, lazy::less<lazy::sizeof_<_a>, lazy::sizeof_<_b>>>>"
        ))?;
        let mut expected = xs;
        expected.sort_by_key(size_of);
        prop_assert_eq!(items(&sorted), expected);
    }

    #[test]
    fn partition_splits_without_losing_elements(xs in types()) {
        let mut ctx = Context::new();
        let integral = quote_trait(builtins::std_is_integral());
        let groups = items(&algo::partition(&Term::list(xs.clone()), &integral, &mut ctx)?);
        prop_assert_eq!(groups.len(), 2);
        let (yes, no) = (items(&groups[0]), items(&groups[1]));
        let is_integral = |t: &Term| matches!(t, Term::Prim(p) if p.is_integral());
        prop_assert!(yes.iter().all(is_integral));
        prop_assert!(!no.iter().any(is_integral));
        let expected_yes: Vec<Term> = xs.iter().filter(|t| is_integral(t)).cloned().collect();
        prop_assert_eq!(yes.len() + no.len(), xs.len());
        prop_assert_eq!(yes, expected_yes);
    }

    #[test]
    fn unique_keeps_first_occurrences(xs in types()) {
        let mut ctx = Context::new();
        let once = algo::unique(&Term::list(xs.clone()), &mut ctx)?;
        let mut expected: Vec<Term> = Vec::new();
        for x in xs {
            if !expected.contains(&x) {
                expected.push(x);
            }
        }
        prop_assert_eq!(algo::unique(&once, &mut ctx)?, once.clone());
        prop_assert_eq!(items(&once), expected);
    }

    #[test]
    fn folding_plus_sums_the_values(values in prop::collection::vec(-1000i32..1000, 0..20)) {
        let mut ctx = Context::new();
        let list = Term::list(values.iter().map(|&v| Term::int(v)));
        let plus = quote(builtins::plus());
        let total = algo::fold(&list, Term::int(0), &plus, &mut ctx)?;
        prop_assert_eq!(total, Term::int(values.iter().sum()));
    }

    #[test]
    fn printed_lists_read_back(xs in types()) {
        let list = Term::list(xs);
        prop_assert_eq!(evaluate(&list.to_string())?, list);
    }
}
