//! Loading of a [`Snapshot`] from a JSON document.
//!
//! The document has the following shape:
//! ```json
//! {
//!   "properties": [],
//!   "projects": [],
//!   "neighborhoods": [],
//!   "siteConfig": {}
//! }
//! ```
//! Every section is optional.

use std::path::Path;

use tracerr::Traced;

use crate::infra::content;

use super::{Memory, Snapshot};

/// Parses a [`Snapshot`] from the provided JSON `document`.
///
/// # Errors
///
/// If the `document` is not a valid [`Snapshot`].
pub fn parse(document: &str) -> Result<Snapshot, Traced<content::Error>> {
    serde_json::from_str(document)
        .map_err(tracerr::from_and_wrap!(=> content::Error))
}

/// Reads a [`Snapshot`] from the JSON file at the provided `path`.
///
/// # Errors
///
/// - If the file cannot be read.
/// - If the file is not a valid [`Snapshot`].
pub async fn load(
    path: impl AsRef<Path>,
) -> Result<Snapshot, Traced<content::Error>> {
    let path = path.as_ref();
    let document = tokio::fs::read_to_string(path)
        .await
        .map_err(tracerr::from_and_wrap!(=> content::Error))?;
    let snapshot = parse(&document).map_err(tracerr::wrap!())?;

    tracing::info!(
        path = %path.display(),
        properties = snapshot.properties.len(),
        projects = snapshot.projects.len(),
        neighborhoods = snapshot.neighborhoods.len(),
        "loaded content snapshot",
    );
    Ok(snapshot)
}

impl Memory {
    /// Creates a new [`Memory`] store from the JSON file at the provided
    /// `path`.
    ///
    /// # Errors
    ///
    /// See [`load()`] for details.
    pub async fn from_json_file(
        path: impl AsRef<Path>,
    ) -> Result<Self, Traced<content::Error>> {
        load(path).await.map(Self::from).map_err(tracerr::wrap!())
    }
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Select};

    use crate::{
        domain::{
            listing, neighborhood::Slug, project::Status, Listing,
            Neighborhood, Project, SiteConfig,
        },
        infra::{content::Memory, Content},
        read::project::list::Filter,
    };

    use super::parse;

    const DOCUMENT: &str = r#"{
        "properties": [
            {
                "id": "p-1",
                "title": "Marina Gate",
                "price": 3200000,
                "location": "Dubai Marina",
                "neighborhood": "Dubai Marina",
                "type": "Apartment",
                "bedrooms": 2,
                "bathrooms": 2,
                "area": 1400,
                "featured": true
            }
        ],
        "projects": [
            {
                "id": "pr-1",
                "title": "Sobha Seahaven",
                "slug": "sobha-seahaven",
                "status": "under-construction"
            },
            {
                "id": "pr-2",
                "title": "Emaar Beachfront",
                "slug": "emaar-beachfront"
            }
        ],
        "neighborhoods": [
            {"slug": "palm-jumeirah", "name": "Palm Jumeirah"},
            {"slug": "dubai-marina", "name": "Dubai Marina"}
        ]
    }"#;

    #[tokio::test]
    async fn serves_parsed_snapshot() {
        let memory = Memory::from(parse(DOCUMENT).unwrap());

        let listing = memory
            .execute(Select(By::<Option<Listing>, _>::new(
                listing::Id::from("p-1"),
            )))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(listing.title, "Marina Gate");

        let projects = memory
            .execute(Select(By::<Vec<Project>, _>::new(Filter::from(
                Status::NewlyLaunched,
            ))))
            .await
            .unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Emaar Beachfront");

        let neighborhoods = memory
            .execute(Select(By::<Vec<Neighborhood>, _>::new(())))
            .await
            .unwrap();
        let names = neighborhoods
            .iter()
            .map(|n| n.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Dubai Marina", "Palm Jumeirah"]);

        let neighborhood = memory
            .execute(Select(By::<Option<Neighborhood>, _>::new(Slug::new(
                "Palm Jumeirah",
            ))))
            .await
            .unwrap();
        assert!(neighborhood.is_some());

        let site = memory
            .execute(Select(By::<Option<SiteConfig>, _>::new(())))
            .await
            .unwrap();
        assert!(site.is_none());
    }

    #[test]
    fn rejects_malformed_document() {
        assert!(parse(r#"{"properties": [{"id": 1}]}"#).is_err());
        assert!(parse("not json").is_err());
    }

    #[tokio::test]
    async fn loads_bundled_content() {
        let snapshot = super::load(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../content/site.json",
        ))
        .await
        .unwrap();

        assert_eq!(snapshot.properties.len(), 4);
        assert_eq!(snapshot.projects.len(), 2);
        assert!(snapshot.site_config.is_some());
    }

    #[tokio::test]
    async fn reports_missing_file() {
        assert!(Memory::from_json_file("/nonexistent/content.json")
            .await
            .is_err());
    }
}
