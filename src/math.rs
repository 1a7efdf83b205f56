//! Integral arithmetic, comparison and bitwise operators.
//!
//! Operands are anything with an integral value (`value_of`). Binary operators apply
//! the usual arithmetic conversions: both operands are promoted and brought to a common
//! type, which is also the type of the result. Overflow wraps. Division or modulus by
//! zero is not applicable.
//!
//! ```text
//! plus<int_<1>, size_t<2>>      = size_t<3>
//! negate<char_<'a'>>            = int_<-97>
//! less<int_<-1>, integral_constant<unsigned, 1>>   = bool_<false>
//! ```

use crate::error::{MetaError, MetaResult};
use crate::eval::{Context, truthy, value_of};
use crate::term::{Constant, Prim, Term};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Plus,
    Minus,
    Multiplies,
    Divides,
    Modulus,
    BitAnd,
    BitOr,
    BitXor,
}

impl BinaryOp {
    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Plus => "plus",
            BinaryOp::Minus => "minus",
            BinaryOp::Multiplies => "multiplies",
            BinaryOp::Divides => "divides",
            BinaryOp::Modulus => "modulus",
            BinaryOp::BitAnd => "bit_and",
            BinaryOp::BitOr => "bit_or",
            BinaryOp::BitXor => "bit_xor",
        }
    }

    fn apply(self, lhs: i128, rhs: i128) -> Option<i128> {
        match self {
            BinaryOp::Plus => Some(lhs + rhs),
            BinaryOp::Minus => Some(lhs - rhs),
            BinaryOp::Multiplies => Some(lhs.wrapping_mul(rhs)),
            BinaryOp::Divides => lhs.checked_div(rhs),
            BinaryOp::Modulus => lhs.checked_rem(rhs),
            BinaryOp::BitAnd => Some(lhs & rhs),
            BinaryOp::BitOr => Some(lhs | rhs),
            BinaryOp::BitXor => Some(lhs ^ rhs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Negate,
    Inc,
    Dec,
    BitNot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    EqualTo,
    NotEqualTo,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
}

/// Both operands converted to their common type.
fn converted(lhs: &Term, rhs: &Term, ctx: &mut Context) -> MetaResult<(Prim, i128, i128)> {
    let lhs = value_of(lhs, ctx)?;
    let rhs = value_of(rhs, ctx)?;
    let ty = lhs.ty().common(rhs.ty());
    Ok((ty, lhs.cast(ty)?.value(), rhs.cast(ty)?.value()))
}

pub fn binary(op: BinaryOp, lhs: &Term, rhs: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let (ty, a, b) = converted(lhs, rhs, ctx)?;
    let result = op.apply(a, b).ok_or_else(|| {
        MetaError::not_applicable(format!("{}<{lhs}, {rhs}> divides by zero", op.name()))
    })?;
    Ok(Term::Const(Constant::new(ty, result)?))
}

pub fn unary(op: UnaryOp, operand: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let c = value_of(operand, ctx)?;
    let result = match op {
        UnaryOp::Negate => Constant::new(c.ty().promote(), -c.value())?,
        UnaryOp::BitNot => Constant::new(c.ty().promote(), !c.value())?,
        UnaryOp::Inc => {
            let ty = c.ty().common(Prim::Int);
            Constant::new(ty, c.cast(ty)?.value() + 1)?
        }
        UnaryOp::Dec => {
            let ty = c.ty().common(Prim::Int);
            Constant::new(ty, c.cast(ty)?.value() - 1)?
        }
    };
    Ok(Term::Const(result))
}

/// `equal_to` and `not_equal_to` compare values regardless of type; the orderings compare
/// after the usual arithmetic conversions.
pub fn compare(cmp: Comparison, lhs: &Term, rhs: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let result = match cmp {
        Comparison::EqualTo | Comparison::NotEqualTo => {
            let equal = value_of(lhs, ctx)?.value_eq(&value_of(rhs, ctx)?);
            equal == (cmp == Comparison::EqualTo)
        }
        _ => {
            let (_, a, b) = converted(lhs, rhs, ctx)?;
            match cmp {
                Comparison::Less => a < b,
                Comparison::Greater => a > b,
                Comparison::LessEqual => a <= b,
                _ => a >= b,
            }
        }
    };
    Ok(Term::bool(result))
}

/// The smaller operand, unchanged. Ties pick the first.
pub fn min(lhs: &Term, rhs: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let rhs_smaller = truthy(&compare(Comparison::Less, rhs, lhs, ctx)?, ctx)?;
    Ok(if rhs_smaller { rhs.clone() } else { lhs.clone() })
}

/// The larger operand, unchanged. Ties pick the second.
pub fn max(lhs: &Term, rhs: &Term, ctx: &mut Context) -> MetaResult<Term> {
    let rhs_smaller = truthy(&compare(Comparison::Less, rhs, lhs, ctx)?, ctx)?;
    Ok(if rhs_smaller { lhs.clone() } else { rhs.clone() })
}
