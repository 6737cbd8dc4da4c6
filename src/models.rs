//! Endpoint options and the result structures the service returns.
//!
//! Result structs default every field the service leaves out.

use serde::{Deserialize, Serialize};

use crate::date::Date;

/// Kind of address the service reports or can be asked to filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailType {
    /// Role addresses such as `contact@` or `sales@`.
    Generic,
    /// Addresses belonging to a person.
    Personal,
    /// A value this client does not know about.
    #[default]
    #[serde(other)]
    Other,
}

impl EmailType {
    /// Query-string form, or `None` for values the API does not filter on.
    pub fn as_query(&self) -> Option<&'static str> {
        match self {
            Self::Generic => Some("generic"),
            Self::Personal => Some("personal"),
            Self::Other => None,
        }
    }
}

/// Options for [`Client::domain_search`](crate::Client::domain_search).
///
/// At least one of `domain` or `company` must be non-empty.
#[derive(Debug, Clone, Default)]
pub struct DomainSearchOptions {
    pub domain: Option<String>,
    pub company: Option<String>,
    /// Number of emails to skip; sent only when greater than zero.
    pub offset: u64,
    /// Restrict results to generic or personal addresses.
    pub email_type: Option<EmailType>,
}

impl DomainSearchOptions {
    /// Search by internet domain.
    pub fn domain(domain: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
            ..Self::default()
        }
    }

    /// Search by company name.
    pub fn company(company: impl Into<String>) -> Self {
        Self {
            company: Some(company.into()),
            ..Self::default()
        }
    }

    /// Skip the first `offset` emails.
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Only return generic or personal addresses.
    pub fn email_type(mut self, email_type: EmailType) -> Self {
        self.email_type = Some(email_type);
        self
    }
}

/// Options for [`Client::email_finder`](crate::Client::email_finder).
#[derive(Debug, Clone, Default)]
pub struct EmailFinderOptions {
    pub domain: Option<String>,
    pub company: Option<String>,
    pub first_name: String,
    pub last_name: String,
}

impl EmailFinderOptions {
    /// Look up a person at `domain`.
    pub fn new(
        domain: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            domain: Some(domain.into()),
            company: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Also match on the company name.
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }
}

/// Response of `/v1/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainSearchResults {
    pub status: String,
    pub domain: String,
    pub results: i64,
    pub webmail: bool,
    pub pattern: String,
    pub offset: i64,
    pub emails: Vec<Email>,
}

/// An address discovered for a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Email {
    pub value: String,
    #[serde(rename = "type")]
    pub email_type: EmailType,
    pub confidence: f64,
    pub sources: Vec<Source>,
}

/// A web page an address was found on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Source {
    pub domain: String,
    pub uri: String,
    pub extracted_on: Option<Date>,
}

/// Response of `/v1/generate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailFinderResults {
    pub status: String,
    pub email: String,
    pub score: f64,
    pub sources: Vec<Source>,
}

/// Response of `/v1/verify`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailVerificationResults {
    pub status: String,
    pub email: String,
    pub score: f64,
    pub result: String,
    /// The address passes the syntax check.
    pub regexp: bool,
    /// The address looks auto-generated.
    pub gibberish: bool,
    pub disposable: bool,
    pub webmail: bool,
    pub mx_records: bool,
    pub smtp_server: bool,
    pub smtp_check: bool,
    /// The mail server accepts every address on the domain.
    pub accept_all: bool,
    pub sources: Vec<Source>,
}

/// Response of `/v1/email-count`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailCountResults {
    pub status: String,
    pub count: i64,
}

/// Response of `/v1/account`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountInformationResults {
    pub status: String,
    pub email: String,
    pub plan_name: String,
    pub plan_level: i64,
    pub reset_date: Option<Date>,
    pub calls: Calls,
}

/// API call usage for the current period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calls {
    pub used: i64,
    pub available: i64,
}
