use std::{fmt::Display, ops::Deref};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// The numeric identifier of a repository.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepositoryId(pub u64);

impl Deref for RepositoryId {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RepositoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The name of a repository.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct RepositoryName(pub String);

impl Deref for RepositoryName {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deserializes a field, mapping a JSON `null` to the default value of its type.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The account owning a repository.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Owner {
    /// The login of the account.
    #[serde(deserialize_with = "null_as_default")]
    pub login: String,

    /// The numeric identifier of the account.
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,

    /// The global node identifier of the account.
    #[serde(deserialize_with = "null_as_default")]
    pub node_id: String,

    /// The avatar URL of the account.
    #[serde(deserialize_with = "null_as_default")]
    pub avatar_url: String,

    /// The gravatar identifier of the account.
    #[serde(deserialize_with = "null_as_default")]
    pub gravatar_id: String,

    /// The API URL of the account.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,

    /// The API URL of the events received by the account.
    #[serde(deserialize_with = "null_as_default")]
    pub received_events_url: String,

    /// The account type, e.g. `User` or `Organization`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub owner_type: String,
}

/// A repository as returned by the search endpoint.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Repository {
    /// The numeric identifier of the repository.
    #[serde(deserialize_with = "null_as_default")]
    pub id: RepositoryId,

    /// The global node identifier of the repository.
    #[serde(deserialize_with = "null_as_default")]
    pub node_id: String,

    /// The name of the repository.
    #[serde(deserialize_with = "null_as_default")]
    pub name: RepositoryName,

    /// The name of the repository prefixed with its owner login.
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,

    /// Whether the repository is private.
    #[serde(deserialize_with = "null_as_default")]
    pub private: bool,

    /// The web URL of the repository.
    #[serde(deserialize_with = "null_as_default")]
    pub html_url: String,

    /// The description of the repository.
    pub description: Option<String>,

    /// Whether the repository is a fork.
    #[serde(deserialize_with = "null_as_default")]
    pub fork: bool,

    /// The API URL of the repository.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,

    /// The creation time of the repository.
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,

    /// The last time the repository (or its metadata) was updated.
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: DateTime<Utc>,

    /// The last push time, absent for repositories that never received one.
    pub pushed_at: Option<DateTime<Utc>>,

    /// The homepage of the project.
    pub homepage: Option<String>,

    /// The size of the repository in kilobytes.
    #[serde(deserialize_with = "null_as_default")]
    pub size: u64,

    /// The number of stars the repository has.
    #[serde(deserialize_with = "null_as_default")]
    pub stargazers_count: u64,

    /// The number of watchers of the repository.
    #[serde(deserialize_with = "null_as_default")]
    pub watchers_count: u64,

    /// The primary language of the repository.
    pub language: Option<String>,

    /// The number of forks of the repository.
    #[serde(deserialize_with = "null_as_default")]
    pub forks_count: u64,

    /// The number of open issues of the repository.
    #[serde(deserialize_with = "null_as_default")]
    pub open_issues_count: u64,

    /// The legacy name of the main branch.
    pub master_branch: Option<String>,

    /// The name of the default branch.
    #[serde(deserialize_with = "null_as_default")]
    pub default_branch: String,

    /// The relevance score computed by the search engine.
    #[serde(deserialize_with = "null_as_default")]
    pub score: f64,

    /// The account owning the repository.
    #[serde(deserialize_with = "null_as_default")]
    pub owner: Owner,
}

impl Repository {
    /// Creates a dummy `Repository` instance for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(id: u64, name: &str, updated_at: DateTime<Utc>) -> Self {
        Self {
            id: RepositoryId(id),
            name: RepositoryName(name.to_string()),
            full_name: format!("owner-1/{name}"),
            url: format!("https://api.github.com/repos/owner-1/{name}"),
            updated_at,
            ..Default::default()
        }
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Repository: {}, Id: {}, Updated: {}",
            self.full_name, self.id, self.updated_at
        )
    }
}

/// How recently a repository was updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecencyBucket {
    /// Updated less than an hour ago.
    Fresh,

    /// Updated between one and two hours ago.
    Recent,

    /// Updated two hours ago or more.
    Stale,
}

impl RecencyBucket {
    /// The order in which buckets are reported.
    pub const REPORT_ORDER: [RecencyBucket; 3] = [Self::Stale, Self::Recent, Self::Fresh];

    /// The header line of the bucket section in a report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fresh => "Updated less than an hour ago",
            Self::Recent => "Updated an hour ago",
            Self::Stale => "Updated more than two hours ago",
        }
    }
}

impl Display for RecencyBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
