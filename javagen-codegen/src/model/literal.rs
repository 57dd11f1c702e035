//! Integer literal encoding.

use std::fmt;

use javagen_core::{Error, IntWidth, Result, group_digits};

/// Separator inserted between digit groups.
pub const DIGIT_SEPARATOR: char = '_';

/// Radix an integer literal is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary,
    Decimal,
    Hex,
}

impl Radix {
    /// Resolve a numeric radix, rejecting anything but 2, 10 and 16.
    pub fn from_u32(radix: u32, width: IntWidth) -> Result<Self> {
        match radix {
            2 => Ok(Self::Binary),
            10 => Ok(Self::Decimal),
            16 => Ok(Self::Hex),
            other => Err(Error::unsupported_radix(other, width)),
        }
    }

    pub fn value(&self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Decimal => 10,
            Self::Hex => 16,
        }
    }

    /// Literal prefix (`0b`, `0x`, or nothing for decimal).
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Binary => "0b",
            Self::Decimal => "",
            Self::Hex => "0x",
        }
    }
}

/// An `int` or `long` literal with its presentation.
///
/// # Example
///
/// ```
/// use javagen_codegen::model::{IntLiteral, Radix};
/// use javagen_core::IntWidth;
///
/// let lit = IntLiteral::new(1_234_567, IntWidth::Long, 10, 3).unwrap();
/// assert_eq!(lit.encode(), "1_234_567L");
/// assert_eq!(lit.radix(), Radix::Decimal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntLiteral {
    value: i64,
    width: IntWidth,
    radix: Radix,
    group_interval: u32,
}

impl IntLiteral {
    /// Checked constructor.
    ///
    /// Fails if the radix is not 2, 10 or 16, or if `value` does not fit in
    /// `width`.
    pub fn new(value: i64, width: IntWidth, radix: u32, group_interval: u32) -> Result<Self> {
        let radix = Radix::from_u32(radix, width)?;
        if width == IntWidth::Int && i32::try_from(value).is_err() {
            return Err(Error::literal_out_of_range(value, width));
        }
        Ok(Self {
            value,
            width,
            radix,
            group_interval,
        })
    }

    pub(crate) fn int(value: i32, radix: Radix, group_interval: u32) -> Self {
        Self {
            value: i64::from(value),
            width: IntWidth::Int,
            radix,
            group_interval,
        }
    }

    pub(crate) fn long(value: i64, radix: Radix, group_interval: u32) -> Self {
        Self {
            value,
            width: IntWidth::Long,
            radix,
            group_interval,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn width(&self) -> IntWidth {
        self.width
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// Digits per group; 0 means ungrouped.
    pub fn group_interval(&self) -> u32 {
        self.group_interval
    }

    /// Type suffix (`L` for long literals).
    pub fn suffix(&self) -> &'static str {
        match self.width {
            IntWidth::Int => "",
            IntWidth::Long => "L",
        }
    }

    /// Whether the encoded literal starts with a minus sign.
    ///
    /// Only decimal literals carry a sign; hex and binary literals encode
    /// the two's complement bit pattern of their width.
    pub fn is_negative(&self) -> bool {
        self.radix == Radix::Decimal && self.value < 0
    }

    /// Ungrouped digit string without sign, prefix or suffix.
    fn raw_digits(&self) -> String {
        let bits = match self.width {
            // Stored values of int literals always fit in 32 bits
            IntWidth::Int => u64::from(self.value as i32 as u32),
            IntWidth::Long => self.value as u64,
        };
        match self.radix {
            Radix::Binary => format!("{:b}", bits),
            Radix::Decimal => self.value.unsigned_abs().to_string(),
            Radix::Hex => format!("{:x}", bits),
        }
    }

    /// Digit string with group separators applied.
    pub fn digits(&self) -> String {
        group_digits(
            &self.raw_digits(),
            self.group_interval as usize,
            DIGIT_SEPARATOR,
        )
    }

    /// Full source text of the literal.
    pub fn encode(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}{}",
            sign,
            self.radix.prefix(),
            self.digits(),
            self.suffix()
        )
    }
}

impl fmt::Display for IntLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
