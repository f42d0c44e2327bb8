//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::{prelude::ToPrimitive as _, Decimal};

/// Percentage in the `0..=100` range.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[display("{_0}%")]
pub struct Percent(Decimal);

impl Percent {
    /// Zero [`Percent`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Percent`] by checking the provided value is within the
    /// `0..=100` range.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        (Decimal::ZERO..=Decimal::ONE_HUNDRED)
            .contains(&val)
            .then_some(Self(val))
    }

    /// Creates a new [`Percent`] from the provided [`f64`], if it's finite
    /// and within the `0..=100` range.
    #[must_use]
    pub fn from_f64(val: f64) -> Option<Self> {
        Decimal::from_f64_retain(val).and_then(Self::new)
    }

    /// Returns the underlying [`Decimal`] value.
    #[must_use]
    pub fn value(self) -> Decimal {
        self.0
    }

    /// Returns this [`Percent`] as an [`f64`] in the `0.0..=100.0` range.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Decimal::from_str(s.strip_suffix('%').unwrap_or(s))
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use rust_decimal::Decimal;
    use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

    use super::Percent;

    impl Serialize for Percent {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            Serialize::serialize(&self.0, s)
        }
    }

    impl<'de> Deserialize<'de> for Percent {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            let val = <Decimal as Deserialize>::deserialize(d)?;
            Self::new(val).ok_or_else(|| {
                D::Error::custom(format!("percent out of `0..=100`: {val}"))
            })
        }
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Percentage in the `0..=100` range, as a number or a decimal string.
    #[graphql_scalar(with = Self, parse_token(String, f64, i32))]
    type Percent = super::Percent;

    impl Percent {
        fn to_output<S: ScalarValue>(p: &Percent) -> Value<S> {
            Value::scalar(p.as_f64())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            if let Some(s) = input.as_string_value() {
                return Self::from_str(s).map_err(|e| {
                    format!("Cannot parse `Percent` input scalar: {e}")
                });
            }
            input
                .as_float_value()
                .or_else(|| input.as_int_value().map(f64::from))
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Percent` input scalar from \
                         non-numeric value: {input}",
                    )
                })
                .and_then(|v| {
                    Self::from_f64(v).ok_or_else(|| {
                        format!("`Percent` out of `0..=100` range: {v}")
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Percent;

    #[test]
    fn accepts_inclusive_bounds() {
        assert_eq!(Percent::new(Decimal::ZERO), Some(Percent::ZERO));
        assert!(Percent::new(Decimal::ONE_HUNDRED).is_some());
        assert!(Percent::new(Decimal::NEGATIVE_ONE).is_none());
        assert!(Percent::new(Decimal::new(1001, 1)).is_none());
    }

    #[test]
    fn from_str() {
        assert_eq!(Percent::from_str("4.5").unwrap().as_f64(), 4.5);
        assert_eq!(Percent::from_str("25%").unwrap().as_f64(), 25.0);
        assert!(Percent::from_str("abc").is_err());
        assert!(Percent::from_str("-1").is_err());
        assert!(Percent::from_str("").is_err());
    }

    #[test]
    fn from_f64() {
        assert_eq!(Percent::from_f64(80.0).unwrap().as_f64(), 80.0);
        assert!(Percent::from_f64(f64::NAN).is_none());
        assert!(Percent::from_f64(f64::INFINITY).is_none());
        assert!(Percent::from_f64(100.5).is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_keeps_decimal_value() {
        let rate: Percent = serde_json::from_str("4.5").unwrap();
        assert_eq!(rate, Percent::from_str("4.5").unwrap());
        assert_eq!(serde_json::to_string(&rate).unwrap(), r#""4.5""#);

        assert!(serde_json::from_str::<Percent>("100.5").is_err());
    }

    #[test]
    fn displays_with_sign() {
        assert_eq!(Percent::from_str("4.5").unwrap().to_string(), "4.5%");
    }
}
