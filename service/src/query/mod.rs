//! [`Query`] definition.

pub mod listing;
pub mod listings;
pub mod neighborhood;
pub mod neighborhoods;
pub mod project;
pub mod projects;
pub mod site;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    infra::{content, Content},
    Service,
};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] [`Select`]ing a `T`ype from a [`Content`] store as is.
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct ContentQuery<T>(T);

impl<W, B> ContentQuery<By<W, B>> {
    /// Creates a new [`ContentQuery`] selecting a `W` by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }
}

impl<C, R, W, B> Query<ContentQuery<By<W, B>>> for Service<C, R>
where
    C: Content<Select<By<W, B>>, Ok = W, Err = Traced<content::Error>>,
{
    type Ok = W;
    type Err = Traced<content::Error>;

    async fn execute(
        &self,
        ContentQuery(by): ContentQuery<By<W, B>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.content()
            .execute(Select(by))
            .await
            .map_err(tracerr::wrap!())
    }
}

#[cfg(test)]
pub(crate) mod fixture {
    //! Shared [`Service`] fixture of [`Query`] tests.

    use serde_json::json;

    use crate::{
        infra::{
            content::{Memory, Snapshot},
            relay::Disabled,
        },
        Config, Service,
    };

    /// Creates a new [`Service`] backed by a small [`Memory`] catalogue.
    pub(crate) fn service() -> Service<Memory, Disabled> {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "properties": [
                listing("v1", "Villa", 12_000_000, 5, "Palm Jumeirah", true),
                listing("a1", "Apartment", 1_800_000, 2, "Dubai Marina", false),
                listing("v2", "Villa", 8_500_000, 6, "Arabian Ranches", false),
                listing("p1", "Penthouse", 25_000_000, 4, "Downtown Dubai", true),
                listing("a2", "Apartment", 2_400_000, 3, "Dubai Marina", true),
                listing("v3", "Villa", 6_000_000, 4, "Palm Jumeirah", false),
            ],
            "projects": [
                {
                    "id": "pr1",
                    "title": "Palm Beach Towers",
                    "slug": "palm-beach-towers",
                    "developer": "Nakheel",
                    "status": "under-construction",
                },
                {
                    "id": "pr2",
                    "title": "Creek Vista",
                    "slug": "creek-vista",
                },
            ],
            "neighborhoods": [
                {"slug": "palm-jumeirah", "name": "Palm Jumeirah"},
                {"slug": "dubai-marina", "name": "Dubai Marina"},
            ],
            "siteConfig": {
                "siteName": "Dubai Prime Estates",
                "whatsappNumber": "+971 50 123 4567",
            },
        }))
        .expect("valid fixture");

        Service::new(Config::default(), Memory::from(snapshot), Disabled)
    }

    fn listing(
        id: &str,
        kind: &str,
        price: u64,
        bedrooms: u16,
        neighborhood: &str,
        featured: bool,
    ) -> serde_json::Value {
        json!({
            "id": id,
            "title": format!("{kind} {id}"),
            "price": price,
            "location": neighborhood,
            "neighborhood": neighborhood,
            "type": kind,
            "bedrooms": bedrooms,
            "bathrooms": bedrooms,
            "area": f64::from(bedrooms) * 1000.0,
            "featured": featured,
        })
    }
}
