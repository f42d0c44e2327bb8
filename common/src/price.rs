//! [`Price`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::{prelude::ToPrimitive as _, Decimal};

/// Non-negative amount in the fixed [`Price::CURRENCY`].
///
/// No currency conversion is ever performed.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Price(Decimal);

impl Price {
    /// ISO 4217 code of the currency every [`Price`] is expressed in.
    pub const CURRENCY: &'static str = "AED";

    /// Zero [`Price`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Price`] if the provided `amount` is not negative.
    #[must_use]
    pub fn new(amount: Decimal) -> Option<Self> {
        (!amount.is_sign_negative() || amount.is_zero()).then_some(Self(amount))
    }

    /// Creates a new [`Price`] from a whole amount.
    #[must_use]
    pub fn from_units(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    /// Returns the amount of this [`Price`].
    #[must_use]
    pub fn amount(self) -> Decimal {
        self.0
    }

    /// Returns the amount of this [`Price`] as an [`f64`].
    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    /// Returns a compact human-readable form of this [`Price`], like
    /// `AED 2.5M` or `AED 850,000`.
    #[must_use]
    pub fn compact(self) -> String {
        let million = Decimal::from(1_000_000);
        if self.0 >= million {
            let millions = (self.0 / million).round_dp(1).normalize();
            format!("{} {millions}M", Self::CURRENCY)
        } else {
            format!("{} {}", Self::CURRENCY, group_thousands(self.0))
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Self::CURRENCY, group_thousands(self.0))
    }
}

impl FromStr for Price {
    type Err = &'static str;

    /// Parses a plain decimal amount, optionally prefixed with the currency
    /// code and using `,` as a thousands separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(Self::CURRENCY).unwrap_or(s).trim();
        if s.is_empty() {
            return Err("empty amount");
        }
        let amount = Decimal::from_str(&s.replace(',', ""))
            .map_err(|_| "invalid amount")?;
        Self::new(amount).ok_or("negative amount")
    }
}

impl From<u64> for Price {
    fn from(units: u64) -> Self {
        Self::from_units(units)
    }
}

/// Formats the whole part of the provided `amount` with `,` thousands
/// separators, rounding away the fraction.
fn group_thousands(amount: Decimal) -> String {
    let digits = amount.round().abs().trunc().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use rust_decimal::Decimal;
    use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

    use super::Price;

    impl Serialize for Price {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_f64(self.as_f64())
        }
    }

    impl<'de> Deserialize<'de> for Price {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            let amount = <Decimal as Deserialize>::deserialize(d)?;
            Self::new(amount).ok_or_else(|| {
                D::Error::custom(format!("negative price: {amount}"))
            })
        }
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Amount in `AED`, as a decimal string (`"2500000"`, `"2,500,000"`) or a
    /// number.
    #[graphql_scalar(with = Self, parse_token(String, f64, i32))]
    type Price = super::Price;

    impl Price {
        fn to_output<S: ScalarValue>(p: &Price) -> Value<S> {
            Value::scalar(p.as_f64())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            if let Some(s) = input.as_string_value() {
                return Self::from_str(s).map_err(|e| {
                    format!("Cannot parse `Price` input scalar: {e}")
                });
            }
            input
                .as_float_value()
                .or_else(|| input.as_int_value().map(f64::from))
                .and_then(rust_decimal::Decimal::from_f64_retain)
                .and_then(Self::new)
                .ok_or_else(|| {
                    format!("Cannot parse `Price` input scalar from: {input}")
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Price;

    #[test]
    fn from_str() {
        assert_eq!(Price::from_str("2000000").unwrap(), Price::from(2_000_000));
        assert_eq!(
            Price::from_str("AED 2,500,000").unwrap(),
            Price::from(2_500_000),
        );
        assert_eq!(
            Price::from_str("1999.5").unwrap().amount(),
            Decimal::new(19995, 1),
        );

        assert!(Price::from_str("").is_err());
        assert!(Price::from_str("AED").is_err());
        assert!(Price::from_str("-5").is_err());
        assert!(Price::from_str("2M").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_from_number_or_string() {
        let price: Price = serde_json::from_str("2500000").unwrap();
        assert_eq!(price, Price::from(2_500_000));
        let price: Price = serde_json::from_str(r#""1999.5""#).unwrap();
        assert_eq!(price.amount(), Decimal::new(19995, 1));

        assert!(serde_json::from_str::<Price>("-5").is_err());
    }

    #[test]
    fn to_string() {
        assert_eq!(Price::from(2_500_000).to_string(), "AED 2,500,000");
        assert_eq!(Price::from(850_000).to_string(), "AED 850,000");
        assert_eq!(Price::from(999).to_string(), "AED 999");
        assert_eq!(Price::ZERO.to_string(), "AED 0");
    }

    #[test]
    fn compact() {
        assert_eq!(Price::from(2_000_000).compact(), "AED 2M");
        assert_eq!(Price::from(2_500_000).compact(), "AED 2.5M");
        assert_eq!(Price::from(12_340_000).compact(), "AED 12.3M");
        assert_eq!(Price::from(850_000).compact(), "AED 850,000");
    }
}
