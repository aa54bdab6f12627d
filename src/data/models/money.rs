use bigdecimal::{BigDecimal, RoundingMode, Zero};
use diesel::deserialize::FromSqlRow;
use diesel::expression::AsExpression;
use diesel::sql_types::Text;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::Add;

/// Number of fractional digits every stored amount is rounded to.
pub const MONEY_SCALE: i64 = 2;

/// Decimal currency amount.
///
/// Persisted as decimal text because SQLite has no exact numeric column;
/// see `utils::mappers` for the diesel conversions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, AsExpression, FromSqlRow, Serialize)]
#[diesel(sql_type = Text)]
#[serde(transparent)]
pub struct Money(pub BigDecimal);

impl Money {
    /// Wraps a decimal, rounding half-even to cents.
    pub fn new(value: BigDecimal) -> Self {
        Money(value.with_scale_round(MONEY_SCALE, RoundingMode::HalfEven))
    }

    pub fn zero() -> Self {
        Money::new(BigDecimal::zero())
    }

    pub fn is_negative(&self) -> bool {
        self.0 < BigDecimal::zero()
    }

    /// Line total for `quantity` units at this unit price.
    pub fn times(&self, quantity: i32) -> Money {
        Money::new(&self.0 * BigDecimal::from(quantity))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::new(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// Incoming JSON amounts may be floats, so they go through the same rounding.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BigDecimal::deserialize(deserializer).map(Money::new)
    }
}

impl From<BigDecimal> for Money {
    fn from(value: BigDecimal) -> Self {
        Money::new(value)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn money(s: &str) -> Money {
        Money::new(BigDecimal::from_str(s).unwrap())
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(money("8.989").to_string(), "8.99");
        assert_eq!(money("10").to_string(), "10.00");
    }

    #[test]
    fn line_totals_are_exact() {
        assert_eq!(money("8.99").times(2), money("17.98"));
        assert_eq!(money("0.10").times(3), money("0.30"));
    }

    #[test]
    fn json_floats_are_rounded() {
        let parsed: Money = serde_json::from_str("8.99").unwrap();
        assert_eq!(parsed, money("8.99"));
        let parsed: Money = serde_json::from_str("\"3.5\"").unwrap();
        assert_eq!(parsed.to_string(), "3.50");
    }

    #[test]
    fn sum_of_empty_is_zero() {
        let total: Money = Vec::<Money>::new().into_iter().sum();
        assert_eq!(total, Money::zero());
        assert!(!total.is_negative());
        assert!(money("-0.01").is_negative());
    }
}
