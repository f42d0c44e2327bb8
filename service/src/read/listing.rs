//! [`Listing`]-related read definitions.

use crate::domain::Listing;

/// Default number of [`similar()`] [`Listing`]s.
pub const SIMILAR_LIMIT: usize = 3;

/// Default number of [`featured()`] [`Listing`]s.
pub const FEATURED_LIMIT: usize = 6;

/// Returns up to `limit` other [`Listing`]s of the same
/// [`PropertyType`] as the `current` one, in input order.
///
/// [`PropertyType`]: crate::domain::listing::PropertyType
pub fn similar<'l, I>(
    listings: I,
    current: &Listing,
    limit: usize,
) -> Vec<&'l Listing>
where
    I: IntoIterator<Item = &'l Listing>,
{
    listings
        .into_iter()
        .filter(|l| l.kind == current.kind && l.id != current.id)
        .take(limit)
        .collect()
}

/// Returns up to `limit` featured [`Listing`]s, in input order.
pub fn featured<'l, I>(listings: I, limit: usize) -> Vec<&'l Listing>
where
    I: IntoIterator<Item = &'l Listing>,
{
    listings.into_iter().filter(|l| l.featured).take(limit).collect()
}

pub mod list {
    //! [`Listing`] list definitions.

    use std::{cmp::Ordering, num::ParseIntError, str::FromStr};

    use derive_more::{Display, Error};
    use rust_decimal::Decimal;
    use serde::Deserialize;
    use strum::{EnumString, IntoStaticStr};

    use crate::{
        domain::{
            listing::{PropertyType, Rooms},
            neighborhood::Slug,
            Listing,
        },
        read::is_any,
    };

    /// Filters the provided [`Listing`]s with the [`Filter`] and orders the
    /// survivors by the [`Sort`].
    ///
    /// Sorting is stable, so [`Listing`]s comparing equal keep their input
    /// order.
    pub fn filter_and_sort<'l, I>(
        listings: I,
        filter: &Filter,
        sort: Sort,
    ) -> Vec<&'l Listing>
    where
        I: IntoIterator<Item = &'l Listing>,
    {
        let mut out = listings
            .into_iter()
            .filter(|l| filter.matches(l))
            .collect::<Vec<_>>();
        out.sort_by(|a, b| sort.compare(a, b));
        out
    }

    /// Conjunctive set of [`Listing`] constraints.
    ///
    /// [`Filter::default()`] passes everything.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Filter {
        /// [`PropertyType`] to match exactly.
        pub kind: Option<PropertyType>,

        /// [`Slug`] of the [`Listing::neighborhood`] to match.
        pub location: Option<Slug>,

        /// [`PriceRange`] the [`Listing::price`] must be within.
        pub price: Option<PriceRange>,

        /// [`Count`] of bedrooms.
        pub bedrooms: Count,

        /// [`Count`] of bathrooms.
        pub bathrooms: Count,

        /// Inclusive lower bound of the area, in square feet.
        pub min_area: Option<f64>,

        /// Inclusive upper bound of the area, in square feet.
        pub max_area: Option<f64>,
    }

    impl Filter {
        /// Parses a [`Filter`] out of the provided [`Params`].
        ///
        /// Empty and `all` values mean "any".
        ///
        /// # Errors
        ///
        /// If any of the non-empty [`Params`] is malformed.
        pub fn from_params(params: &Params) -> Result<Self, ParseError> {
            Ok(Self {
                kind: criterion(params.kind.as_deref())
                    .map(|v| {
                        v.parse()
                            .map_err(|_| ParseError::PropertyType(v.to_owned()))
                    })
                    .transpose()?,
                location: criterion(params.location.as_deref())
                    .map(Slug::new),
                price: criterion(params.price.as_deref())
                    .map(str::parse)
                    .transpose()?,
                bedrooms: criterion(params.bedrooms.as_deref())
                    .map(str::parse)
                    .transpose()?
                    .unwrap_or_default(),
                bathrooms: criterion(params.bathrooms.as_deref())
                    .map(str::parse)
                    .transpose()?
                    .unwrap_or_default(),
                min_area: criterion(params.min_area.as_deref())
                    .map(parse_area)
                    .transpose()?,
                max_area: criterion(params.max_area.as_deref())
                    .map(parse_area)
                    .transpose()?,
            })
        }

        /// Checks whether the provided [`Listing`] satisfies every constraint
        /// of this [`Filter`].
        #[must_use]
        pub fn matches(&self, listing: &Listing) -> bool {
            let area = listing.area.sq_ft();

            self.kind.map_or(true, |k| listing.kind == k)
                && self
                    .location
                    .as_ref()
                    .map_or(true, |l| l.matches(&listing.neighborhood))
                && self
                    .price
                    .map_or(true, |r| r.contains(listing.price.amount()))
                && self.bedrooms.matches(listing.bedrooms)
                && self.bathrooms.matches(listing.bathrooms)
                && self.min_area.map_or(true, |min| area >= min)
                && self.max_area.map_or(true, |max| area <= max)
        }
    }

    /// Raw [`Filter`] criteria in the form of URL search parameters.
    #[derive(Clone, Debug, Default, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct Params {
        /// Property type, like `villa`.
        #[serde(rename = "type")]
        pub kind: Option<String>,

        /// Location slug, like `dubai-marina`.
        pub location: Option<String>,

        /// Price range, like `2000000-5000000` or `10000000-`.
        pub price: Option<String>,

        /// Bedrooms, like `3` or `6+`.
        pub bedrooms: Option<String>,

        /// Bathrooms, like `2` or `4+`.
        pub bathrooms: Option<String>,

        /// Minimum area in square feet.
        pub min_area: Option<String>,

        /// Maximum area in square feet.
        pub max_area: Option<String>,
    }

    /// Drops the provided criterion if it means "any".
    fn criterion(value: Option<&str>) -> Option<&str> {
        value.filter(|v| !is_any(v)).map(str::trim)
    }

    /// Parses an area bound, rejecting non-finite values.
    fn parse_area(s: &str) -> Result<f64, ParseError> {
        s.parse::<f64>()
            .ok()
            .filter(|a| a.is_finite())
            .ok_or_else(|| ParseError::Area(s.to_owned()))
    }

    /// Inclusive price range with an optional upper bound.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct PriceRange {
        /// Inclusive lower bound.
        pub min: Decimal,

        /// Inclusive upper bound, if any.
        pub max: Option<Decimal>,
    }

    impl PriceRange {
        /// Checks whether the provided `price` is within this [`PriceRange`].
        #[must_use]
        pub fn contains(&self, price: Decimal) -> bool {
            self.min <= price && self.max.map_or(true, |max| price <= max)
        }
    }

    impl FromStr for PriceRange {
        type Err = ParseError;

        /// Parses `min-max`, `min-` or `min`.
        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let err = || ParseError::PriceRange(s.to_owned());
            let s = s.trim();

            // A leading `-` is the sign of `min`, not the separator.
            let sep = s.get(1..).and_then(|rest| rest.find('-')).map(|i| i + 1);
            let (min, max) = match sep {
                Some(i) => (&s[..i], Some(&s[i + 1..])),
                None => (s, None),
            };

            let min = min.trim().parse().map_err(|_| err())?;
            let max = max
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(|m| m.parse().map_err(|_| err()))
                .transpose()?;
            Ok(Self { min, max })
        }
    }

    /// Room count constraint.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub enum Count {
        /// Any number of rooms.
        #[default]
        Any,

        /// Exactly this number of rooms.
        Exact(Rooms),

        /// This number of rooms or more.
        AtLeast(Rooms),
    }

    impl Count {
        /// Checks whether the provided number of rooms satisfies this
        /// [`Count`].
        #[must_use]
        pub fn matches(self, rooms: Rooms) -> bool {
            match self {
                Self::Any => true,
                Self::Exact(n) => rooms == n,
                Self::AtLeast(n) => rooms >= n,
            }
        }
    }

    impl FromStr for Count {
        type Err = ParseError;

        /// Parses `all`, `n` or `n+`.
        fn from_str(s: &str) -> Result<Self, Self::Err> {
            if is_any(s) {
                return Ok(Self::Any);
            }
            let s = s.trim();
            let err = |_: ParseIntError| ParseError::Count(s.to_owned());
            match s.strip_suffix('+') {
                Some(n) => n.trim().parse().map(Self::AtLeast).map_err(err),
                None => s.parse().map(Self::Exact).map_err(err),
            }
        }
    }

    /// Order of a [`Listing`] list.
    #[derive(
        Clone,
        Copy,
        Debug,
        Default,
        Display,
        EnumString,
        Eq,
        Hash,
        IntoStaticStr,
        PartialEq,
    )]
    #[strum(ascii_case_insensitive)]
    pub enum Sort {
        /// Featured [`Listing`]s first.
        #[default]
        #[display("featured")]
        #[strum(serialize = "featured")]
        Featured,

        /// Cheapest first.
        #[display("price-low")]
        #[strum(serialize = "price-low")]
        PriceAsc,

        /// Most expensive first.
        #[display("price-high")]
        #[strum(serialize = "price-high")]
        PriceDesc,

        /// Largest first.
        #[display("area-large")]
        #[strum(serialize = "area-large")]
        AreaDesc,

        /// Smallest first.
        #[display("area-small")]
        #[strum(serialize = "area-small")]
        AreaAsc,
    }

    impl Sort {
        /// Compares two [`Listing`]s according to this [`Sort`].
        #[must_use]
        pub fn compare(self, a: &Listing, b: &Listing) -> Ordering {
            match self {
                Self::Featured => b.featured.cmp(&a.featured),
                Self::PriceAsc => a.price.cmp(&b.price),
                Self::PriceDesc => b.price.cmp(&a.price),
                Self::AreaDesc => b.area.sq_ft().total_cmp(&a.area.sq_ft()),
                Self::AreaAsc => a.area.sq_ft().total_cmp(&b.area.sq_ft()),
            }
        }
    }

    /// Error of parsing [`Filter`] criteria.
    #[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
    pub enum ParseError {
        /// Unknown [`PropertyType`].
        #[display("Unknown property type: `{_0}`")]
        PropertyType(#[error(not(source))] String),

        /// Malformed [`PriceRange`].
        #[display("Malformed price range: `{_0}`")]
        PriceRange(#[error(not(source))] String),

        /// Malformed [`Count`].
        #[display("Malformed room count: `{_0}`")]
        Count(#[error(not(source))] String),

        /// Malformed area bound.
        #[display("Malformed area: `{_0}`")]
        Area(#[error(not(source))] String),
    }
}
