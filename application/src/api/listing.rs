//! [`Listing`]-related definitions.

use common::{Percent, Price};
use derive_more::{Display, From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLObject, GraphQLScalar};
use service::{
    domain::{self, lead::WhatsAppLink},
    query,
    read::listing::list::ParseError,
    Query as _,
};

use crate::{api, define_error, AsError, Context, Error};

/// A property for sale.
#[derive(Clone, Debug, From, Into)]
pub struct Listing(domain::Listing);

/// A property for sale.
#[graphql_object(context = Context)]
impl Listing {
    /// Unique identifier of this `Listing`.
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.clone().into()
    }

    /// Title of this `Listing`.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.0.title
    }

    /// Asking price of this `Listing`.
    #[must_use]
    pub fn price(&self) -> Price {
        self.0.price
    }

    /// Asking price formatted for display, like `AED 2,500,000`.
    #[must_use]
    pub fn price_label(&self) -> String {
        self.0.price.to_string()
    }

    /// Asking price formatted for cards, like `AED 2.5M`.
    #[must_use]
    pub fn compact_price(&self) -> String {
        self.0.price.compact()
    }

    /// Free-text location of this `Listing`, like `Dubai Marina`.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.0.location
    }

    /// Neighborhood this `Listing` belongs to.
    #[must_use]
    pub fn neighborhood(&self) -> &str {
        &self.0.neighborhood
    }

    /// Type of this `Listing` property.
    #[graphql(name = "type")]
    #[must_use]
    pub fn kind(&self) -> PropertyType {
        self.0.kind.into()
    }

    /// Number of bedrooms.
    #[must_use]
    pub fn bedrooms(&self) -> i32 {
        self.0.bedrooms.into()
    }

    /// Number of bathrooms.
    #[must_use]
    pub fn bathrooms(&self) -> i32 {
        self.0.bathrooms.into()
    }

    /// Floor area in square feet.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.0.area.sq_ft()
    }

    /// Indicator whether this `Listing` is promoted.
    #[must_use]
    pub fn featured(&self) -> bool {
        self.0.featured
    }

    /// Indicator whether this `Listing` was recently added.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.0.is_new
    }

    /// Indicator whether this `Listing` is sold off-plan.
    #[must_use]
    pub fn off_plan(&self) -> bool {
        self.0.off_plan
    }

    /// URL of the main image.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.0.image.as_deref()
    }

    /// URLs of the gallery images.
    #[must_use]
    pub fn images(&self) -> Vec<String> {
        self.0.images.clone()
    }

    /// Description of this `Listing`.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.0.description
    }

    /// Amenities of this `Listing`.
    #[must_use]
    pub fn amenities(&self) -> Vec<String> {
        self.0.amenities.clone()
    }

    /// Facilities near this `Listing`.
    #[must_use]
    pub fn nearby_facilities(&self) -> Vec<api::Facility> {
        self.0
            .nearby_facilities
            .iter()
            .cloned()
            .map(Into::into)
            .collect()
    }

    /// GPS coordinates of this `Listing`.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.0.coordinates.map(Into::into)
    }

    /// Other `Listing`s of the same type, excluding this one.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Listing.similar",
            id = %self.0.id,
            limit = ?limit,
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn similar(
        &self,
        limit: Option<i32>,
        ctx: &Context,
    ) -> Result<Vec<Listing>, Error> {
        ctx.service()
            .execute(query::listing::Similar {
                to: self.0.clone(),
                limit: limit.map(|l| usize::try_from(l).unwrap_or_default()),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|ls| ls.into_iter().map(Into::into).collect())
    }

    /// WhatsApp chat URL with a message prefilled for this `Listing`.
    ///
    /// `null` if the agent's WhatsApp number is not configured.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Listing.whatsappUrl",
            id = %self.0.id,
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn whatsapp_url(
        &self,
        ctx: &Context,
    ) -> Result<Option<String>, Error> {
        Ok(api::site::whatsapp_number(ctx)
            .await?
            .map(|n| WhatsAppLink::for_listing(&n, &self.0).to_string()))
    }

    /// Mortgage calculation for buying this `Listing`.
    ///
    /// Omitted parameters take their default values.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_LOAN_PARAMETERS` - the provided parameters cannot describe
    ///                               a loan.
    #[tracing::instrument(
        skip_all,
        fields(
            down_payment = ?down_payment,
            gql.name = "Listing.mortgage",
            id = %self.0.id,
            interest_rate = ?interest_rate,
            loan_term = ?loan_term,
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn mortgage(
        &self,
        down_payment: Option<Percent>,
        interest_rate: Option<Percent>,
        loan_term: Option<i32>,
        ctx: &Context,
    ) -> Result<api::Mortgage, Error> {
        api::Mortgage::calculate(
            self.0.price,
            down_payment,
            interest_rate,
            loan_term,
        )
        .map_err(ctx.error())
    }
}

/// Unique identifier of a `Listing`.
#[derive(Clone, Debug, Display, From, GraphQLScalar, Into)]
#[from(domain::listing::Id)]
#[into(domain::listing::Id)]
#[graphql(name = "ListingId", transparent)]
pub struct Id(String);

/// Type of a `Listing` property.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
pub enum PropertyType {
    /// Standalone villa.
    Villa,

    /// Apartment in a building.
    Apartment,

    /// Top-floor apartment.
    Penthouse,

    /// Townhouse in a row or community.
    Townhouse,
}

impl From<domain::listing::PropertyType> for PropertyType {
    fn from(kind: domain::listing::PropertyType) -> Self {
        use domain::listing::PropertyType as T;
        match kind {
            T::Villa => Self::Villa,
            T::Apartment => Self::Apartment,
            T::Penthouse => Self::Penthouse,
            T::Townhouse => Self::Townhouse,
        }
    }
}

/// GPS coordinates of a `Listing`.
#[derive(Clone, Copy, Debug, GraphQLObject)]
pub struct Coordinates {
    /// Latitude.
    pub lat: f64,

    /// Longitude.
    pub lng: f64,
}

impl From<domain::listing::Coordinates> for Coordinates {
    fn from(c: domain::listing::Coordinates) -> Self {
        Self {
            lat: c.lat,
            lng: c.lng,
        }
    }
}

define_error! {
    enum ListingError {
        #[code = "LISTING_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Listing` with the specified ID does not exist"]
        NotExists,
    }
}

impl AsError for ParseError {
    fn try_as_error(&self) -> Option<Error> {
        Some(Error {
            code: "INVALID_FILTER",
            status_code: http::StatusCode::BAD_REQUEST,
            message: self.to_string(),
            backtrace: None,
        })
    }
}

pub mod list {
    //! Definitions related to the [`Listing`] list.
    //!
    //! [`Listing`]: super::Listing

    use juniper::{GraphQLEnum, GraphQLInputObject};
    use service::read::listing::list;

    /// Criteria to filter `Listing`s by.
    ///
    /// Every criterion is optional, and an empty string or `all` means any
    /// value.
    #[derive(Clone, Debug, Default, GraphQLInputObject)]
    #[graphql(name = "ListingFilter")]
    pub struct Filter {
        /// Property type, like `villa`.
        #[graphql(name = "type")]
        pub kind: Option<String>,

        /// Location, like `dubai-marina` or `Dubai Marina`.
        pub location: Option<String>,

        /// Price range in `AED`, like `2000000-5000000` or `10000000-`.
        pub price: Option<String>,

        /// Number of bedrooms, like `3` or `6+`.
        pub bedrooms: Option<String>,

        /// Number of bathrooms, like `2` or `4+`.
        pub bathrooms: Option<String>,

        /// Minimum area in square feet.
        pub min_area: Option<String>,

        /// Maximum area in square feet.
        pub max_area: Option<String>,
    }

    impl From<Filter> for list::Params {
        fn from(filter: Filter) -> Self {
            let Filter {
                kind,
                location,
                price,
                bedrooms,
                bathrooms,
                min_area,
                max_area,
            } = filter;
            Self {
                kind,
                location,
                price,
                bedrooms,
                bathrooms,
                min_area,
                max_area,
            }
        }
    }

    /// Order of the `Listing` list.
    #[derive(Clone, Copy, Debug, Default, GraphQLEnum)]
    #[graphql(name = "ListingSort")]
    pub enum Sort {
        /// Featured `Listing`s first.
        #[default]
        Featured,

        /// Cheapest first.
        PriceLow,

        /// Most expensive first.
        PriceHigh,

        /// Largest first.
        AreaLarge,

        /// Smallest first.
        AreaSmall,
    }

    impl From<Sort> for list::Sort {
        fn from(sort: Sort) -> Self {
            match sort {
                Sort::Featured => Self::Featured,
                Sort::PriceLow => Self::PriceAsc,
                Sort::PriceHigh => Self::PriceDesc,
                Sort::AreaLarge => Self::AreaDesc,
                Sort::AreaSmall => Self::AreaAsc,
            }
        }
    }
}
