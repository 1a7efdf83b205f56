use std::rc::Rc;

use crate::error::{MetaError, MetaResult};

use super::{Constant, Prim, Term};

/// A fixed sequence of integers of one integral type (`integer_sequence<T, Is...>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntSeq {
    ty: Prim,
    values: Rc<[i128]>,
}

impl IntSeq {
    pub fn new(ty: Prim, values: impl IntoIterator<Item = i128>) -> MetaResult<Self> {
        if !ty.is_integral() {
            return Err(MetaError::not_applicable(format!(
                "integer_sequence needs an integral type, found {}",
                ty.name()
            )));
        }
        Ok(Self {
            ty,
            values: values.into_iter().map(|v| ty.wrap(v)).collect(),
        })
    }

    /// `make_integer_sequence<T, N>`: the integers `[0, N)`.
    pub fn make(ty: Prim, count: u64) -> MetaResult<Self> {
        Self::new(ty, iota(count))
    }

    /// `integer_range<T, From, To>`: the integers `[from, to)`.
    pub fn range(ty: Prim, from: i128, to: i128) -> MetaResult<Self> {
        if to < from {
            return Err(MetaError::not_applicable(format!(
                "integer_range<{}, {from}, {to}> is an inverted range",
                ty.name()
            )));
        }
        let count = u64::try_from(to - from)
            .map_err(|_| MetaError::not_applicable("integer_range is too long"))?;
        Self::new(ty, iota(count).into_iter().map(|v| v + from))
    }

    pub fn ty(&self) -> Prim {
        self.ty
    }

    pub fn values(&self) -> &[i128] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// One constant per stored integer, in order.
    pub fn constants(&self) -> Vec<Term> {
        self.values
            .iter()
            .map(|&value| Term::Const(Constant::wrapped(self.ty, value)))
            .collect()
    }
}

/// `[0, n)` built by doubling: both halves share one recursive step and the
/// odd remainder is appended, so the recursion depth is logarithmic in `n`.
fn iota(n: u64) -> Vec<i128> {
    match n {
        0 => Vec::new(),
        1 => vec![0],
        _ => {
            let half = iota(n / 2);
            let offset = half.len() as i128;
            let mut out = Vec::with_capacity(n as usize);
            out.extend_from_slice(&half);
            out.extend(half.iter().map(|v| v + offset));
            if n % 2 == 1 {
                out.push(2 * offset);
            }
            out
        }
    }
}
