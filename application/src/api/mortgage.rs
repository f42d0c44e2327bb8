//! [`Mortgage`]-related definitions.

use common::{Percent, Price};
use juniper::{graphql_object, GraphQLObject};
use service::domain::mortgage::{
    self, Amortization, Bounds, LoanParameters, LoanTerm,
};

use crate::{define_error, AsError, Context, Error};

/// Mortgage calculation of a property purchase.
#[derive(Clone, Copy, Debug)]
pub struct Mortgage {
    /// [`LoanParameters`] the calculation is done for.
    parameters: LoanParameters,

    /// Calculated [`Amortization`].
    amortization: Amortization,
}

impl Mortgage {
    /// Calculates a [`Mortgage`] for the provided property `price`, taking
    /// defaults for omitted parameters.
    ///
    /// # Errors
    ///
    /// With `INVALID_LOAN_PARAMETERS` code if the parameters cannot describe
    /// a loan.
    pub fn calculate(
        price: Price,
        down_payment: Option<Percent>,
        interest_rate: Option<Percent>,
        loan_term: Option<i32>,
    ) -> Result<Self, Error> {
        let mut parameters = LoanParameters::with_defaults(price);
        if let Some(percent) = down_payment {
            parameters.down_payment = percent;
        }
        if let Some(rate) = interest_rate {
            parameters.interest_rate = rate;
        }
        if let Some(years) = loan_term {
            parameters.term = u16::try_from(years)
                .ok()
                .and_then(LoanTerm::new)
                .ok_or(mortgage::Error::ZeroLoanTerm)
                .map_err(AsError::into_error)?;
        }

        let amortization =
            parameters.amortization().map_err(AsError::into_error)?;
        Ok(Self {
            parameters,
            amortization,
        })
    }
}

/// Mortgage calculation of a property purchase.
#[graphql_object(context = Context)]
impl Mortgage {
    /// Price of the property.
    #[must_use]
    pub fn property_price(&self) -> Price {
        self.parameters.property_price
    }

    /// Down payment percent of the property price.
    #[must_use]
    pub fn down_payment(&self) -> Percent {
        self.parameters.down_payment
    }

    /// Annual interest rate percent.
    #[must_use]
    pub fn interest_rate(&self) -> Percent {
        self.parameters.interest_rate
    }

    /// Loan term in years.
    #[must_use]
    pub fn loan_term(&self) -> i32 {
        self.parameters.term.years().into()
    }

    /// Down payment amount in `AED`.
    #[must_use]
    pub fn down_payment_amount(&self) -> f64 {
        self.amortization.down_payment_amount
    }

    /// Borrowed amount in `AED`.
    #[must_use]
    pub fn loan_amount(&self) -> f64 {
        self.amortization.loan_amount
    }

    /// Number of monthly payments.
    #[must_use]
    pub fn number_of_payments(&self) -> i32 {
        i32::try_from(self.amortization.number_of_payments)
            .unwrap_or(i32::MAX)
    }

    /// Monthly payment in `AED`.
    #[must_use]
    pub fn monthly_payment(&self) -> f64 {
        self.amortization.monthly_payment
    }

    /// Sum of all the monthly payments in `AED`.
    #[must_use]
    pub fn total_payment(&self) -> f64 {
        self.amortization.total_payment
    }

    /// Interest paid over the whole loan term in `AED`.
    #[must_use]
    pub fn total_interest(&self) -> f64 {
        self.amortization.total_interest
    }

    /// Month by month breakdown of the payments.
    ///
    /// Only the `first` months are returned, if specified.
    #[must_use]
    pub fn schedule(&self, first: Option<i32>) -> Vec<Installment> {
        let first = first.map_or(usize::MAX, |n| {
            usize::try_from(n).unwrap_or_default()
        });
        self.amortization
            .schedule()
            .take(first)
            .map(Into::into)
            .collect()
    }
}

/// Single month of a `Mortgage` schedule.
#[derive(Clone, Copy, Debug, GraphQLObject)]
#[graphql(name = "MortgageInstallment")]
pub struct Installment {
    /// Number of the month, starting from `1`.
    pub month: i32,

    /// Interest part of the payment in `AED`.
    pub interest: f64,

    /// Principal part of the payment in `AED`.
    pub principal: f64,

    /// Remaining loan balance after the payment in `AED`.
    pub balance: f64,
}

impl From<mortgage::Installment> for Installment {
    fn from(i: mortgage::Installment) -> Self {
        Self {
            month: i32::try_from(i.month).unwrap_or(i32::MAX),
            interest: i.interest,
            principal: i.principal,
            balance: i.balance,
        }
    }
}

/// Defaults and suggested ranges of the mortgage calculator inputs.
#[derive(Clone, Copy, Debug, GraphQLObject)]
pub struct MortgageSettings {
    /// Down payment percent.
    pub down_payment: InputRange,

    /// Annual interest rate percent.
    pub interest_rate: InputRange,

    /// Loan term in years.
    pub loan_term: InputRange,
}

impl MortgageSettings {
    /// Returns the [`MortgageSettings`] of the calculator.
    #[must_use]
    pub fn current() -> Self {
        let defaults = LoanParameters::with_defaults(Price::ZERO);
        Self {
            down_payment: InputRange::new(
                defaults.down_payment.as_f64(),
                LoanParameters::DOWN_PAYMENT_BOUNDS,
            ),
            interest_rate: InputRange::new(
                defaults.interest_rate.as_f64(),
                LoanParameters::INTEREST_RATE_BOUNDS,
            ),
            loan_term: InputRange::new(
                defaults.term.years(),
                LoanParameters::TERM_BOUNDS,
            ),
        }
    }
}

/// Default value and suggested range of a calculator input.
#[derive(Clone, Copy, Debug, GraphQLObject)]
#[graphql(name = "MortgageInputRange")]
pub struct InputRange {
    /// Default value.
    pub default: f64,

    /// Lowest suggested value.
    pub min: f64,

    /// Highest suggested value.
    pub max: f64,

    /// Increment between suggested values.
    pub step: f64,
}

impl InputRange {
    /// Creates a new [`InputRange`] out of the provided [`Bounds`].
    fn new<T: Into<f64>>(default: impl Into<f64>, bounds: Bounds<T>) -> Self {
        let Bounds { min, max, step } = bounds;
        Self {
            default: default.into(),
            min: min.into(),
            max: max.into(),
            step: step.into(),
        }
    }
}

impl AsError for mortgage::Error {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "INVALID_LOAN_PARAMETERS"]
                #[status = BAD_REQUEST]
                #[message = "Provided parameters cannot describe a loan"]
                InvalidLoanParameters,
            }
        }

        let mut err: crate::Error = Error::InvalidLoanParameters.into();
        err.message = format!("{}: {self}", err.message);
        Some(err)
    }
}

#[cfg(test)]
mod spec {
    use common::{Percent, Price};

    use super::{Mortgage, MortgageSettings};

    #[test]
    fn calculates_with_defaults() {
        let m = Mortgage::calculate(Price::from(2_000_000), None, None, None)
            .unwrap();

        assert_eq!(m.loan_term(), 25);
        assert_eq!(m.number_of_payments(), 300);
        assert!((m.down_payment_amount() - 500_000.0).abs() < 1e-6);
        assert!((m.loan_amount() - 1_500_000.0).abs() < 1e-6);
        assert!((m.monthly_payment() - 8_337.49).abs() < 0.01);
        assert_eq!(m.schedule(Some(12)).len(), 12);
        assert_eq!(m.schedule(None).len(), 300);
    }

    #[test]
    fn rejects_degenerate_parameters() {
        let zero_term = Mortgage::calculate(
            Price::from(2_000_000),
            Percent::from_f64(20.0),
            None,
            Some(0),
        )
        .unwrap_err();
        assert_eq!(zero_term.code, "INVALID_LOAN_PARAMETERS");
        assert_eq!(zero_term.status_code, http::StatusCode::BAD_REQUEST);

        let zero_price =
            Mortgage::calculate(Price::ZERO, None, None, None).unwrap_err();
        assert_eq!(zero_price.code, "INVALID_LOAN_PARAMETERS");
    }

    #[test]
    fn exposes_calculator_settings() {
        let settings = MortgageSettings::current();

        assert!((settings.down_payment.default - 25.0).abs() < 1e-9);
        assert!((settings.down_payment.min - 20.0).abs() < 1e-9);
        assert!((settings.interest_rate.default - 4.5).abs() < 1e-9);
        assert!((settings.loan_term.max - 30.0).abs() < 1e-9);
    }
}
