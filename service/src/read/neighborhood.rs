//! [`Neighborhood`]-related read definitions.

use crate::domain::{Listing, Neighborhood};

/// Returns the [`Listing`]s located in the provided [`Neighborhood`], in
/// input order.
pub fn listings_in<'l, I>(
    listings: I,
    neighborhood: &Neighborhood,
) -> Vec<&'l Listing>
where
    I: IntoIterator<Item = &'l Listing>,
{
    listings
        .into_iter()
        .filter(|l| neighborhood.contains(l))
        .collect()
}
