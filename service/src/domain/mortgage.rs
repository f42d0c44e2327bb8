//! Mortgage estimation definitions.

use common::{Percent, Price};
use derive_more::{Display, Error as StdError, Into};
use rust_decimal::Decimal;

/// Breakdown of a fixed-rate mortgage with monthly payments.
///
/// Values are raw [`f64`]s without any rounding applied. This is an estimate
/// for display, not a ledger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Amortization {
    /// Part of the property price paid upfront.
    pub down_payment_amount: f64,

    /// Borrowed amount.
    pub loan_amount: f64,

    /// Interest rate per month, as a fraction (`0.00375` for `4.5%` a year).
    pub monthly_rate: f64,

    /// Number of monthly payments.
    pub number_of_payments: u32,

    /// Fixed monthly payment.
    pub monthly_payment: f64,

    /// Sum of all the monthly payments.
    pub total_payment: f64,

    /// Part of the [`Amortization::total_payment`] going to interest.
    pub total_interest: f64,
}

impl Amortization {
    /// Computes an [`Amortization`] of a loan for a property.
    ///
    /// # Errors
    ///
    /// - If `property_price` is not finite or not positive.
    /// - If `down_payment_percent` is not within `0..=100`.
    /// - If `annual_interest_rate_percent` is not finite or negative.
    /// - If `loan_term_years` is zero.
    pub fn compute(
        property_price: f64,
        down_payment_percent: f64,
        annual_interest_rate_percent: f64,
        loan_term_years: u16,
    ) -> Result<Self, Error> {
        if !property_price.is_finite() || property_price <= 0.0 {
            return Err(Error::InvalidPrice {
                price: property_price,
            });
        }
        if !(0.0..=100.0).contains(&down_payment_percent) {
            return Err(Error::DownPaymentOutOfRange {
                percent: down_payment_percent,
            });
        }
        if !annual_interest_rate_percent.is_finite()
            || annual_interest_rate_percent < 0.0
        {
            return Err(Error::NegativeInterestRate {
                rate: annual_interest_rate_percent,
            });
        }
        if loan_term_years == 0 {
            return Err(Error::ZeroLoanTerm);
        }

        let down_payment_amount = property_price * down_payment_percent / 100.0;
        let loan_amount = property_price - down_payment_amount;
        let monthly_rate = annual_interest_rate_percent / 100.0 / 12.0;
        let number_of_payments = u32::from(loan_term_years) * 12;
        let n = f64::from(number_of_payments);

        #[expect(clippy::float_cmp, reason = "exact zero rate only")]
        let monthly_payment = if monthly_rate == 0.0 {
            loan_amount / n
        } else {
            let growth = (1.0 + monthly_rate).powf(n);
            loan_amount * monthly_rate * growth / (growth - 1.0)
        };
        let total_payment = monthly_payment * n;
        let total_interest = total_payment - loan_amount;

        Ok(Self {
            down_payment_amount,
            loan_amount,
            monthly_rate,
            number_of_payments,
            monthly_payment,
            total_payment,
            total_interest,
        })
    }

    /// Returns the month-by-month [`Installment`]s of this [`Amortization`].
    pub fn schedule(&self) -> impl Iterator<Item = Installment> + '_ {
        let mut balance = self.loan_amount;
        (1..=self.number_of_payments).map(move |month| {
            let interest = balance * self.monthly_rate;
            let principal = self.monthly_payment - interest;
            balance -= principal;
            Installment {
                month,
                interest,
                principal,
                balance,
            }
        })
    }
}

/// Single monthly payment of an [`Amortization::schedule()`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Installment {
    /// `1`-based number of the month.
    pub month: u32,

    /// Part of the payment going to interest.
    pub interest: f64,

    /// Part of the payment repaying the loan.
    pub principal: f64,

    /// Loan balance left after this payment.
    pub balance: f64,
}

/// Error of computing an [`Amortization`].
#[derive(Clone, Copy, Debug, Display, PartialEq, StdError)]
pub enum Error {
    /// Property price is not a positive number.
    #[display("Property price must be positive, got: {price}")]
    InvalidPrice {
        /// Provided price.
        price: f64,
    },

    /// Down payment is not within `0..=100` percent.
    #[display("Down payment must be within 0..=100%, got: {percent}")]
    DownPaymentOutOfRange {
        /// Provided percent.
        percent: f64,
    },

    /// Interest rate is negative.
    #[display("Interest rate must be non-negative, got: {rate}")]
    NegativeInterestRate {
        /// Provided rate.
        rate: f64,
    },

    /// Loan term is zero years.
    #[display("Loan term must be at least 1 year")]
    ZeroLoanTerm,
}

/// Loan term in whole years.
#[derive(Clone, Copy, Debug, Display, Eq, Into, Ord, PartialEq, PartialOrd)]
#[display("{_0} years")]
pub struct LoanTerm(u16);

impl LoanTerm {
    /// Creates a new [`LoanTerm`] if the provided `years` is non-zero.
    #[must_use]
    pub const fn new(years: u16) -> Option<Self> {
        if years == 0 {
            None
        } else {
            Some(Self(years))
        }
    }

    /// Returns the number of years in this [`LoanTerm`].
    #[must_use]
    pub const fn years(self) -> u16 {
        self.0
    }
}

/// Input of a mortgage calculator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoanParameters {
    /// [`Price`] of the property.
    pub property_price: Price,

    /// Down payment [`Percent`] of the [`LoanParameters::property_price`].
    pub down_payment: Percent,

    /// Annual interest rate [`Percent`].
    pub interest_rate: Percent,

    /// [`LoanTerm`] of the loan.
    pub term: LoanTerm,
}

impl LoanParameters {
    /// Default down payment, in percent.
    pub const DEFAULT_DOWN_PAYMENT: Decimal =
        Decimal::from_parts(25, 0, 0, false, 0);

    /// Default annual interest rate, in percent.
    pub const DEFAULT_INTEREST_RATE: Decimal =
        Decimal::from_parts(45, 0, 0, false, 1);

    /// Default [`LoanTerm`], in years.
    pub const DEFAULT_TERM: u16 = 25;

    /// Suggested down payment range and step, in percent.
    pub const DOWN_PAYMENT_BOUNDS: Bounds<u8> = Bounds {
        min: 20,
        max: 80,
        step: 5,
    };

    /// Suggested annual interest rate range and step, in percent.
    pub const INTEREST_RATE_BOUNDS: Bounds<f64> = Bounds {
        min: 2.0,
        max: 8.0,
        step: 0.1,
    };

    /// Suggested loan term range and step, in years.
    pub const TERM_BOUNDS: Bounds<u16> = Bounds {
        min: 5,
        max: 30,
        step: 5,
    };

    /// Creates new [`LoanParameters`] for the provided [`Price`] with the
    /// default down payment, interest rate and term.
    #[must_use]
    pub fn with_defaults(property_price: Price) -> Self {
        Self {
            property_price,
            down_payment: Percent::new(Self::DEFAULT_DOWN_PAYMENT)
                .unwrap_or_default(),
            interest_rate: Percent::new(Self::DEFAULT_INTEREST_RATE)
                .unwrap_or_default(),
            term: LoanTerm(Self::DEFAULT_TERM),
        }
    }

    /// Computes the [`Amortization`] for these [`LoanParameters`].
    ///
    /// # Errors
    ///
    /// If the [`LoanParameters::property_price`] is zero.
    pub fn amortization(&self) -> Result<Amortization, Error> {
        Amortization::compute(
            self.property_price.as_f64(),
            self.down_payment.as_f64(),
            self.interest_rate.as_f64(),
            self.term.years(),
        )
    }
}

/// Advisory range of a calculator input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds<T> {
    /// Lowest suggested value.
    pub min: T,

    /// Highest suggested value.
    pub max: T,

    /// Increment between suggested values.
    pub step: T,
}

#[cfg(test)]
mod spec {
    use common::Price;

    use super::{Amortization, Error, LoanParameters};

    #[test]
    fn computes_reference_loan() {
        let a = Amortization::compute(2_000_000.0, 25.0, 4.5, 25).unwrap();

        assert_eq!(a.down_payment_amount, 500_000.0);
        assert_eq!(a.loan_amount, 1_500_000.0);
        assert!((a.monthly_rate - 0.00375).abs() < 1e-12);
        assert_eq!(a.number_of_payments, 300);
        assert!(
            (a.monthly_payment - 8_337.487).abs() < 0.01,
            "monthly payment: {}",
            a.monthly_payment,
        );
        assert!(
            (a.total_payment - a.monthly_payment * 300.0).abs() < 1e-6,
        );
        assert!(
            (a.total_interest - (a.total_payment - a.loan_amount)).abs()
                < 1e-6,
        );
    }

    #[test]
    fn zero_rate_splits_loan_evenly() {
        let a = Amortization::compute(2_000_000.0, 25.0, 0.0, 25).unwrap();

        assert_eq!(a.monthly_payment, 5_000.0);
        assert_eq!(a.total_payment, 1_500_000.0);
        assert_eq!(a.total_interest, 0.0);
    }

    #[test]
    fn full_down_payment_means_no_loan() {
        let a = Amortization::compute(1_000_000.0, 100.0, 4.5, 10).unwrap();

        assert_eq!(a.loan_amount, 0.0);
        assert_eq!(a.monthly_payment, 0.0);
    }

    #[test]
    fn rejects_degenerate_input() {
        assert_eq!(
            Amortization::compute(1_000_000.0, 25.0, 4.5, 0),
            Err(Error::ZeroLoanTerm),
        );
        assert_eq!(
            Amortization::compute(1_000_000.0, 25.0, -1.0, 25),
            Err(Error::NegativeInterestRate { rate: -1.0 }),
        );
        assert_eq!(
            Amortization::compute(1_000_000.0, 120.0, 4.5, 25),
            Err(Error::DownPaymentOutOfRange { percent: 120.0 }),
        );
        assert_eq!(
            Amortization::compute(0.0, 25.0, 4.5, 25),
            Err(Error::InvalidPrice { price: 0.0 }),
        );
        assert!(Amortization::compute(1_000_000.0, f64::NAN, 4.5, 25).is_err());
        assert!(
            Amortization::compute(f64::INFINITY, 25.0, 4.5, 25).is_err(),
        );
    }

    #[test]
    fn schedule_repays_loan() {
        let a = Amortization::compute(2_000_000.0, 25.0, 4.5, 25).unwrap();
        let schedule = a.schedule().collect::<Vec<_>>();

        assert_eq!(schedule.len(), 300);
        assert_eq!(schedule[0].month, 1);
        assert!((schedule[0].interest - 5_625.0).abs() < 1e-6);
        assert!(schedule[299].balance.abs() < 0.01);
        assert!(schedule[0].principal < schedule[299].principal);
    }

    #[test]
    fn defaults_match_reference_loan() {
        let params = LoanParameters::with_defaults(Price::from(2_000_000));
        let a = params.amortization().unwrap();

        assert_eq!(params.term.years(), 25);
        assert_eq!(a.loan_amount, 1_500_000.0);
        assert!((a.monthly_payment - 8_337.487).abs() < 0.01);
    }
}
