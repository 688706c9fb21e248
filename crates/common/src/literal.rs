//! Integer literals of the calculus: only 1 and 2 exist.

use log::warn;

use crate::error::ExprError;
use crate::token::Token;

/// An integer literal, restricted to the values 1 and 2.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Literal {
    One = 1,
    Two = 2,
}

impl Literal {
    /// Strict constructor. Anything other than 1 or 2 is rejected.
    pub fn new(value: i64) -> Result<Self, ExprError> {
        match value {
            1 => Ok(Literal::One),
            2 => Ok(Literal::Two),
            _ => Err(ExprError::InvalidLiteral(value)),
        }
    }

    /// Lenient constructor for recovering from malformed input.
    ///
    /// Out-of-range values become [`Literal::One`]. Only resilient
    /// decoding should reach for this; everything else uses [`Literal::new`].
    pub fn normalize(value: i64) -> Self {
        Self::new(value).unwrap_or_else(|_| {
            warn!("invalid literal {value}, substituting 1");
            Literal::One
        })
    }

    /// The literal's integer value.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// The literal's numeric value.
    pub fn as_f64(self) -> f64 {
        f64::from(self.value())
    }

    /// The bytecode token that pushes this literal.
    pub fn token(self) -> Token {
        match self {
            Literal::One => Token::One,
            Literal::Two => Token::Two,
        }
    }
}

impl TryFrom<i64> for Literal {
    type Error = ExprError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_accepts_one_and_two() {
        assert_eq!(Literal::new(1), Ok(Literal::One));
        assert_eq!(Literal::new(2), Ok(Literal::Two));
    }

    #[test]
    fn strict_rejects_everything_else() {
        for value in [-2, -1, 0, 3, 5, 255, i64::MAX, i64::MIN] {
            assert_eq!(Literal::new(value), Err(ExprError::InvalidLiteral(value)));
        }
    }

    #[test]
    fn normalize_keeps_valid_values() {
        assert_eq!(Literal::normalize(1), Literal::One);
        assert_eq!(Literal::normalize(2), Literal::Two);
    }

    #[test]
    fn normalize_coerces_to_one() {
        assert_eq!(Literal::normalize(0), Literal::One);
        assert_eq!(Literal::normalize(5), Literal::One);
        assert_eq!(Literal::normalize(-7), Literal::One);
    }

    #[test]
    fn values_and_tokens() {
        assert_eq!(Literal::One.value(), 1);
        assert_eq!(Literal::Two.value(), 2);
        assert_eq!(Literal::Two.as_f64(), 2.0);
        assert_eq!(Literal::One.token(), Token::One);
        assert_eq!(Literal::Two.token(), Token::Two);
    }

    #[test]
    fn try_from_matches_new() {
        assert_eq!(Literal::try_from(2), Ok(Literal::Two));
        assert_eq!(Literal::try_from(3), Err(ExprError::InvalidLiteral(3)));
    }
}
