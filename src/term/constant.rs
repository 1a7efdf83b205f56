use crate::error::{MetaError, MetaResult};

use super::prim::Prim;

/// An integral constant: a value together with its integral type.
///
/// Derived equality is identity (`int_<1>` and `size_t<1>` differ). Value equality
/// regardless of type is [`Constant::value_eq`], which is what `equal_to` uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constant {
    ty: Prim,
    value: i128,
}

impl Constant {
    pub fn new(ty: Prim, value: i128) -> MetaResult<Self> {
        if !ty.is_integral() {
            return Err(MetaError::not_applicable(format!(
                "{} is not an integral type",
                ty.name()
            )));
        }
        Ok(Self {
            ty,
            value: ty.wrap(value),
        })
    }

    /// Build from a type already known to be integral.
    pub(crate) fn wrapped(ty: Prim, value: i128) -> Self {
        debug_assert!(ty.is_integral());
        Self {
            ty,
            value: ty.wrap(value),
        }
    }

    pub fn int(value: i32) -> Self {
        Self {
            ty: Prim::Int,
            value: value as i128,
        }
    }

    pub fn size(value: u64) -> Self {
        Self {
            ty: Prim::SizeT,
            value: value as i128,
        }
    }

    pub fn bool(value: bool) -> Self {
        Self {
            ty: Prim::Bool,
            value: value as i128,
        }
    }

    pub fn char(value: u8) -> Self {
        Self {
            ty: Prim::Char,
            value: Prim::Char.wrap(value as i128),
        }
    }

    /// `size_t` max, returned by the index searches when nothing matches.
    pub fn npos() -> Self {
        Self::size(u64::MAX)
    }

    pub fn ty(&self) -> Prim {
        self.ty
    }

    pub fn value(&self) -> i128 {
        self.value
    }

    pub fn is_true(&self) -> bool {
        self.value != 0
    }

    pub fn is_npos(&self) -> bool {
        self.ty == Prim::SizeT && self.value == u64::MAX as i128
    }

    pub fn value_eq(&self, other: &Constant) -> bool {
        self.value == other.value
    }

    /// Convert to another integral type, wrapping like a C++ integral conversion.
    pub fn cast(&self, ty: Prim) -> MetaResult<Constant> {
        Constant::new(ty, self.value)
    }

    /// Interpret as a non-negative count or index.
    pub fn as_index(&self) -> MetaResult<usize> {
        usize::try_from(self.value).map_err(|_| {
            MetaError::not_applicable(format!("{} is not a valid index", self.value))
        })
    }
}
