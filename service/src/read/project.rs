//! [`Project`]-related read definitions.

#[cfg(doc)]
use crate::domain::Project;

pub mod list {
    //! [`Project`] list definitions.

    use std::str::FromStr;

    use derive_more::{Display, Error};

    use crate::{
        domain::{project::Status, Project},
        read::is_any,
    };

    /// Filter of a [`Project`] list by its [`Status`].
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Filter {
        /// [`Status`] to match, or every [`Status`] if [`None`].
        pub status: Option<Status>,

        /// Maximum number of [`Project`]s to return, or all if [`None`].
        pub limit: Option<usize>,
    }

    impl Filter {
        /// Checks whether the provided [`Project`] passes this [`Filter`].
        #[must_use]
        pub fn matches(&self, project: &Project) -> bool {
            self.status.map_or(true, |s| project.status == s)
        }

        /// Returns the first [`Project`]s passing this [`Filter`], in input
        /// order, at most [`Filter::limit`] of them.
        pub fn apply<'p, I>(&self, projects: I) -> Vec<&'p Project>
        where
            I: IntoIterator<Item = &'p Project>,
        {
            projects
                .into_iter()
                .filter(|p| self.matches(p))
                .take(self.limit.unwrap_or(usize::MAX))
                .collect()
        }
    }

    impl From<Status> for Filter {
        fn from(status: Status) -> Self {
            Self {
                status: Some(status),
                limit: None,
            }
        }
    }

    impl FromStr for Filter {
        type Err = UnknownStatus;

        /// Parses a [`Status`] tab name, where `all` or empty passes
        /// everything.
        fn from_str(s: &str) -> Result<Self, Self::Err> {
            if is_any(s) {
                return Ok(Self::default());
            }
            s.trim()
                .parse::<Status>()
                .map(Self::from)
                .map_err(|_| UnknownStatus(s.to_owned()))
        }
    }

    /// Error of parsing a [`Filter`] from an unknown [`Status`].
    #[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
    #[display("Unknown project status: `{_0}`")]
    pub struct UnknownStatus(#[error(not(source))] String);
}
