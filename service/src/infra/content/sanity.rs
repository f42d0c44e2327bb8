//! [Sanity] CMS [`Content`] store.
//!
//! [Sanity]: https://www.sanity.io

use std::time::Duration;

use common::operations::{By, Select};
use derive_more::Debug;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use smart_default::SmartDefault;
use tracerr::Traced;

use crate::{
    domain::{
        listing, neighborhood::Slug, Listing, Neighborhood, Project,
        SiteConfig,
    },
    infra::{content, Content},
    read,
};

/// [`Sanity`] client configuration.
#[derive(Clone, Debug, SmartDefault)]
pub struct Config {
    /// ID of the Sanity project.
    pub project_id: String,

    /// Dataset to query.
    #[default = "production"]
    pub dataset: String,

    /// Dated version of the query API.
    #[default = "2024-01-01"]
    pub api_version: String,

    /// Indicator whether to query the cached CDN API.
    #[default = true]
    pub use_cdn: bool,

    /// Timeout of a single request.
    #[default(Duration::from_secs(10))]
    pub timeout: Duration,

    /// Base URL overriding the one derived from the
    /// [`Config::project_id`].
    pub base_url: Option<String>,
}

impl Config {
    /// Returns the URL of the query endpoint.
    #[must_use]
    pub fn query_url(&self) -> String {
        let base = self.base_url.clone().unwrap_or_else(|| {
            let api = if self.use_cdn { "apicdn" } else { "api" };
            format!("https://{}.{api}.sanity.io", self.project_id)
        });
        format!(
            "{}/v{}/data/query/{}",
            base.trim_end_matches('/'),
            self.api_version,
            self.dataset,
        )
    }
}

/// GROQ projection of a [`Listing`].
const LISTING_FIELDS: &str = r#"{
    "id": _id,
    title,
    price,
    location,
    neighborhood,
    type,
    bedrooms,
    bathrooms,
    area,
    "image": mainImage.asset->url,
    "images": images[].asset->url,
    featured,
    new,
    offPlan,
    description,
    amenities,
    nearbyFacilities,
    coordinates
}"#;

/// GROQ projection of a [`Project`].
const PROJECT_FIELDS: &str = r#"{
    "id": _id,
    title,
    "slug": slug.current,
    developer,
    location,
    startingPrice,
    completionDate,
    paymentPlan,
    "image": mainImage.asset->url,
    "images": images[].asset->url,
    description,
    highlights,
    amenities,
    unitTypes,
    status,
    featured,
    brochureUrl,
    websiteUrl
}"#;

/// GROQ projection of a [`Neighborhood`].
const NEIGHBORHOOD_FIELDS: &str = r#"{
    "slug": slug.current,
    name,
    "image": mainImage.asset->url,
    description,
    fullDescription,
    "images": images[].asset->url,
    facilities,
    highlights
}"#;

/// GROQ projection of a [`SiteConfig`].
const SITE_CONFIG_FIELDS: &str = r#"{
    siteName,
    siteTagline,
    siteDescription,
    contactPhone,
    contactPhoneRaw,
    contactEmail,
    contactSecondaryEmail,
    whatsappNumber,
    officeAddress,
    contactMapUrl,
    socialMedia,
    workingHours,
    agentName,
    agentFullName,
    agentTitle,
    "agentImage": agentImage.asset->url,
    agentBio
}"#;

/// HTTP client of the Sanity query API.
#[derive(Clone, Debug)]
pub struct Sanity {
    /// Underlying HTTP client.
    #[debug(skip)]
    client: reqwest::Client,

    /// URL of the query endpoint.
    url: String,
}

/// Response envelope of the query API.
#[derive(Deserialize)]
struct Envelope<T> {
    /// Query result.
    result: T,
}

impl Sanity {
    /// Creates a new [`Sanity`] client with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If the underlying HTTP client cannot be built.
    pub fn new(conf: &Config) -> Result<Self, Traced<content::Error>> {
        let client = reqwest::Client::builder()
            .timeout(conf.timeout)
            .build()
            .map_err(tracerr::from_and_wrap!(=> content::Error))?;
        Ok(Self {
            client,
            url: conf.query_url(),
        })
    }

    /// Executes the provided GROQ `query` with the provided `params`.
    ///
    /// Each parameter value is a JSON literal, as the API expects.
    #[tracing::instrument(skip(self, query), err(Debug))]
    async fn fetch<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &[(&str, Value)],
    ) -> Result<T, Traced<content::Error>> {
        let mut pairs = vec![("query".to_owned(), query.to_owned())];
        pairs.extend(
            params
                .iter()
                .map(|(name, value)| (format!("${name}"), value.to_string())),
        );

        let resp = self
            .client
            .get(&self.url)
            .query(&pairs)
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> content::Error))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(tracerr::new!(content::Error::Status(status)));
        }

        resp.json::<Envelope<T>>()
            .await
            .map(|e| e.result)
            .map_err(tracerr::from_and_wrap!(=> content::Error))
    }
}

impl Content<Select<By<Vec<Listing>, ()>>> for Sanity {
    type Ok = Vec<Listing>;
    type Err = Traced<content::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Listing>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let query = format!(
            r#"*[_type == "property"] | order(_createdAt desc) {LISTING_FIELDS}"#,
        );
        self.fetch(&query, &[]).await.map_err(tracerr::wrap!())
    }
}

impl Content<Select<By<Option<Listing>, listing::Id>>> for Sanity {
    type Ok = Option<Listing>;
    type Err = Traced<content::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Listing>, listing::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        let query = format!(
            r#"*[_type == "property" && _id == $id][0] {LISTING_FIELDS}"#,
        );
        self.fetch(&query, &[("id", Value::from(String::from(id)))])
            .await
            .map_err(tracerr::wrap!())
    }
}

impl Content<Select<By<Vec<Project>, read::project::list::Filter>>>
    for Sanity
{
    type Ok = Vec<Project>;
    type Err = Traced<content::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Project>, read::project::list::Filter>>,
    ) -> Result<Self::Ok, Self::Err> {
        let filter = by.into_inner();
        let query = format!(
            r#"*[_type == "project"] | order(_createdAt desc) {PROJECT_FIELDS}"#,
        );
        let projects: Vec<Project> =
            self.fetch(&query, &[]).await.map_err(tracerr::wrap!())?;

        // Statuses are matched after decoding, as absent and unknown ones
        // decode as `newly-launched`.
        Ok(filter.apply(&projects).into_iter().cloned().collect())
    }
}

impl Content<Select<By<Option<Project>, Slug>>> for Sanity {
    type Ok = Option<Project>;
    type Err = Traced<content::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Project>, Slug>>,
    ) -> Result<Self::Ok, Self::Err> {
        let slug = by.into_inner();
        let query = format!(
            r#"*[_type == "project" && slug.current == $slug][0] {PROJECT_FIELDS}"#,
        );
        self.fetch(&query, &[("slug", Value::from(slug.to_string()))])
            .await
            .map_err(tracerr::wrap!())
    }
}

impl Content<Select<By<Vec<Neighborhood>, ()>>> for Sanity {
    type Ok = Vec<Neighborhood>;
    type Err = Traced<content::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Neighborhood>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let query = format!(
            r#"*[_type == "neighborhood"] | order(name asc) {NEIGHBORHOOD_FIELDS}"#,
        );
        self.fetch(&query, &[]).await.map_err(tracerr::wrap!())
    }
}

impl Content<Select<By<Option<Neighborhood>, Slug>>> for Sanity {
    type Ok = Option<Neighborhood>;
    type Err = Traced<content::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Neighborhood>, Slug>>,
    ) -> Result<Self::Ok, Self::Err> {
        let slug = by.into_inner();
        let query = format!(
            r#"*[_type == "neighborhood" && slug.current == $slug][0] {NEIGHBORHOOD_FIELDS}"#,
        );
        self.fetch(&query, &[("slug", Value::from(slug.to_string()))])
            .await
            .map_err(tracerr::wrap!())
    }
}

impl Content<Select<By<Option<SiteConfig>, ()>>> for Sanity {
    type Ok = Option<SiteConfig>;
    type Err = Traced<content::Error>;

    async fn execute(
        &self,
        _: Select<By<Option<SiteConfig>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let query =
            format!(r#"*[_type == "siteConfig"][0] {SITE_CONFIG_FIELDS}"#);
        self.fetch(&query, &[]).await.map_err(tracerr::wrap!())
    }
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Select};
    use serde_json::json;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    use crate::{
        domain::{listing, project::Status, Listing, Project, SiteConfig},
        infra::{content, Content},
        read::project::list::Filter,
    };

    use super::{Config, Sanity};

    fn client(server: &MockServer) -> Sanity {
        Sanity::new(&Config {
            project_id: "abc123".into(),
            base_url: Some(server.uri()),
            ..Config::default()
        })
        .unwrap()
    }

    #[test]
    fn derives_query_url() {
        let conf = Config {
            project_id: "abc123".into(),
            ..Config::default()
        };
        assert_eq!(
            conf.query_url(),
            "https://abc123.apicdn.sanity.io/v2024-01-01/data/query/production",
        );

        let conf = Config {
            project_id: "abc123".into(),
            dataset: "staging".into(),
            use_cdn: false,
            ..Config::default()
        };
        assert_eq!(
            conf.query_url(),
            "https://abc123.api.sanity.io/v2024-01-01/data/query/staging",
        );
    }

    #[tokio::test]
    async fn fetches_listing_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2024-01-01/data/query/production"))
            .and(query_param("$id", r#""prop-7""#))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": {
                    "id": "prop-7",
                    "title": "Jumeirah Bay Villa",
                    "price": 45_000_000,
                    "location": "Jumeirah",
                    "neighborhood": "Jumeirah Bay",
                    "type": "Villa",
                    "bedrooms": 6,
                    "bathrooms": 7,
                    "area": 12_000,
                    "image": null,
                    "images": null,
                    "featured": true,
                    "new": null,
                    "offPlan": null,
                    "description": null,
                    "amenities": null,
                    "nearbyFacilities": null,
                    "coordinates": null,
                },
            })))
            .expect(1)
            .mount(&server)
            .await;

        let listing = client(&server)
            .execute(Select(By::<Option<Listing>, _>::new(
                listing::Id::from("prop-7"),
            )))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(listing.title, "Jumeirah Bay Villa");
        assert_eq!(listing.bedrooms, 6);
        assert!(listing.amenities.is_empty());
    }

    #[tokio::test]
    async fn treats_null_result_as_absent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"result": null})),
            )
            .mount(&server)
            .await;

        let site = client(&server)
            .execute(Select(By::<Option<SiteConfig>, _>::new(())))
            .await
            .unwrap();

        assert!(site.is_none());
    }

    #[tokio::test]
    async fn filters_projects_by_decoded_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2024-01-01/data/query/production"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": [
                    {
                        "id": "pr-1",
                        "title": "Six Senses Residences",
                        "slug": "six-senses-residences",
                        "status": "coming-soon",
                        "featured": null,
                    },
                    {
                        "id": "pr-2",
                        "title": "Creek Waters",
                        "slug": "creek-waters",
                        "status": null,
                        "featured": null,
                    },
                    {
                        "id": "pr-3",
                        "title": "Harbour Lights",
                        "slug": "harbour-lights",
                        "status": "newly-launched",
                        "featured": true,
                    },
                ],
            })))
            .expect(2)
            .mount(&server)
            .await;
        let sanity = client(&server);

        let soon = sanity
            .execute(Select(By::<Vec<Project>, _>::new(Filter::from(
                Status::ComingSoon,
            ))))
            .await
            .unwrap();
        assert_eq!(soon.len(), 1);
        assert_eq!(soon[0].status, Status::ComingSoon);

        let launched = sanity
            .execute(Select(By::<Vec<Project>, _>::new(Filter {
                status: Some(Status::NewlyLaunched),
                limit: Some(1),
            })))
            .await
            .unwrap();
        assert_eq!(launched.len(), 1);
        assert_eq!(launched[0].title, "Creek Waters");
    }

    #[tokio::test]
    async fn reports_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client(&server)
            .execute(Select(By::<Vec<Listing>, _>::new(())))
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            content::Error::Status(s) if s.as_u16() == 503,
        ));
    }
}
