/// Fundamental types known to the library.
///
/// Sizes and alignments follow an LP64 target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prim {
    Void,
    Bool,
    Char,
    Short,
    Int,
    Unsigned,
    Long,
    SizeT,
    Float,
    Double,
}

impl Prim {
    pub const ALL: [Prim; 10] = [
        Prim::Void,
        Prim::Bool,
        Prim::Char,
        Prim::Short,
        Prim::Int,
        Prim::Unsigned,
        Prim::Long,
        Prim::SizeT,
        Prim::Float,
        Prim::Double,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Prim::Void => "void",
            Prim::Bool => "bool",
            Prim::Char => "char",
            Prim::Short => "short",
            Prim::Int => "int",
            Prim::Unsigned => "unsigned",
            Prim::Long => "long",
            Prim::SizeT => "std::size_t",
            Prim::Float => "float",
            Prim::Double => "double",
        }
    }

    pub fn from_name(name: &str) -> Option<Prim> {
        Prim::ALL.into_iter().find(|prim| prim.name() == name)
    }

    pub fn size(self) -> Option<u64> {
        match self {
            Prim::Void => None,
            Prim::Bool | Prim::Char => Some(1),
            Prim::Short => Some(2),
            Prim::Int | Prim::Unsigned | Prim::Float => Some(4),
            Prim::Long | Prim::SizeT | Prim::Double => Some(8),
        }
    }

    pub fn align(self) -> Option<u64> {
        self.size()
    }

    pub fn is_integral(self) -> bool {
        matches!(
            self,
            Prim::Bool
                | Prim::Char
                | Prim::Short
                | Prim::Int
                | Prim::Unsigned
                | Prim::Long
                | Prim::SizeT
        )
    }

    pub fn is_floating_point(self) -> bool {
        matches!(self, Prim::Float | Prim::Double)
    }

    pub fn is_arithmetic(self) -> bool {
        self.is_integral() || self.is_floating_point()
    }

    pub fn is_signed(self) -> bool {
        matches!(
            self,
            Prim::Char | Prim::Short | Prim::Int | Prim::Long | Prim::Float | Prim::Double
        )
    }

    /// Width in bits of an integral type.
    pub fn bits(self) -> u32 {
        match self {
            Prim::Bool => 1,
            Prim::Char => 8,
            Prim::Short => 16,
            Prim::Int | Prim::Unsigned => 32,
            Prim::Long | Prim::SizeT => 64,
            Prim::Void | Prim::Float | Prim::Double => 0,
        }
    }

    /// Integer conversion rank.
    fn rank(self) -> u8 {
        match self {
            Prim::Bool => 0,
            Prim::Char => 1,
            Prim::Short => 2,
            Prim::Int | Prim::Unsigned => 3,
            Prim::Long | Prim::SizeT => 4,
            Prim::Void | Prim::Float | Prim::Double => 0,
        }
    }

    /// Integral promotion: everything below `int` becomes `int`.
    pub fn promote(self) -> Prim {
        if self.is_integral() && self.rank() < Prim::Int.rank() {
            Prim::Int
        } else {
            self
        }
    }

    fn to_unsigned(self) -> Prim {
        match self {
            Prim::Int => Prim::Unsigned,
            Prim::Long => Prim::SizeT,
            other => other,
        }
    }

    /// The usual arithmetic conversions for two integral operands.
    pub fn common(self, other: Prim) -> Prim {
        let (a, b) = (self.promote(), other.promote());
        if a == b {
            return a;
        }
        if a.is_signed() == b.is_signed() {
            return if a.rank() >= b.rank() { a } else { b };
        }
        let (signed, unsigned) = if a.is_signed() { (a, b) } else { (b, a) };
        if unsigned.rank() >= signed.rank() {
            unsigned
        } else if signed.bits() > unsigned.bits() {
            signed
        } else {
            signed.to_unsigned()
        }
    }

    /// Signed counterpart, as computed by `std::make_signed`.
    pub fn make_signed(self) -> Option<Prim> {
        match self {
            Prim::Char | Prim::Short | Prim::Int | Prim::Long => Some(self),
            Prim::Unsigned => Some(Prim::Int),
            Prim::SizeT => Some(Prim::Long),
            _ => None,
        }
    }

    pub fn min_value(self) -> i128 {
        match self {
            Prim::Bool => 0,
            _ if self.is_signed() => -(1i128 << (self.bits() - 1)),
            _ => 0,
        }
    }

    pub fn max_value(self) -> i128 {
        match self {
            Prim::Bool => 1,
            _ if self.is_signed() => (1i128 << (self.bits() - 1)) - 1,
            _ => (1i128 << self.bits()) - 1,
        }
    }

    /// Wrap an arbitrary value into this integral type's range.
    pub fn wrap(self, value: i128) -> i128 {
        if self == Prim::Bool {
            return (value != 0) as i128;
        }
        let modulus = 1i128 << self.bits();
        let reduced = value.rem_euclid(modulus);
        if self.is_signed() && reduced > self.max_value() {
            reduced - modulus
        } else {
            reduced
        }
    }
}
