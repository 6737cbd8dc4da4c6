//! Endpoint methods exercised against a local mock server.

use email_hunter::{
    Client, Date, DecodingError, DomainSearchOptions, EmailFinderOptions, EmailType, Error,
};
use httpmock::prelude::*;
use serde_json::json;

const KEY: &str = "K";

fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .api_key(KEY)
        .base_url(server.base_url())
        .build()
        .unwrap()
}

#[tokio::test]
async fn email_count_end_to_end() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/email-count")
                .query_param("domain", "stripe.com")
                .query_param("api_key", KEY);
            then.status(200)
                .json_body(json!({"status": "success", "count": 42}));
        })
        .await;

    let results = client_for(&server).email_count("stripe.com").await.unwrap();

    assert_eq!(results.status, "success");
    assert_eq!(results.count, 42);
    mock.assert_async().await;
}

#[tokio::test]
async fn domain_search_sends_filters_and_decodes_sources() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/search")
                .query_param("domain", "stripe.com")
                .query_param("offset", "10")
                .query_param("type", "personal")
                .query_param("api_key", KEY);
            then.status(200).json_body(json!({
                "status": "success",
                "domain": "stripe.com",
                "results": 84,
                "webmail": false,
                "pattern": "{first}",
                "offset": 10,
                "emails": [{
                    "value": "john@stripe.com",
                    "type": "personal",
                    "confidence": 94,
                    "sources": [{
                        "domain": "github.com",
                        "uri": "http://github.com/john",
                        "extracted_on": "2015-07-29"
                    }]
                }]
            }));
        })
        .await;

    let options = DomainSearchOptions::domain("stripe.com")
        .offset(10)
        .email_type(EmailType::Personal);
    let results = client_for(&server).domain_search(&options).await.unwrap();

    assert_eq!(results.results, 84);
    assert_eq!(results.pattern, "{first}");
    let email = &results.emails[0];
    assert_eq!(email.value, "john@stripe.com");
    assert_eq!(email.confidence, 94.0);
    assert_eq!(email.sources[0].extracted_on, Date::from_ymd(2015, 7, 29));
    mock.assert_async().await;
}

#[tokio::test]
async fn domain_search_without_domain_or_company_is_rejected_locally() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.path("/v1/search");
            then.status(200).json_body(json!({"status": "success"}));
        })
        .await;

    let options = DomainSearchOptions {
        domain: Some(String::new()),
        company: None,
        ..DomainSearchOptions::default()
    };
    let err = client_for(&server).domain_search(&options).await.unwrap_err();

    assert!(matches!(err, Error::Validation(_)), "{err:?}");
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn domain_search_by_company_omits_empty_filters() {
    let server = MockServer::start_async().await;
    let with_extras = server
        .mock_async(|when, then| {
            when.path("/v1/search").query_param_exists("offset");
            then.status(500);
        })
        .await;
    let plain = server
        .mock_async(|when, then| {
            when.path("/v1/search")
                .query_param("company", "Stripe")
                .query_param("api_key", KEY);
            then.status(200).json_body(json!({"status": "success", "results": 0}));
        })
        .await;

    let results = client_for(&server)
        .domain_search(&DomainSearchOptions::company("Stripe"))
        .await
        .unwrap();

    assert!(results.emails.is_empty());
    assert_eq!(with_extras.hits_async().await, 0);
    plain.assert_async().await;
}

#[tokio::test]
async fn email_finder_requires_names() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.path("/v1/generate");
            then.status(200).json_body(json!({"status": "success"}));
        })
        .await;
    let client = client_for(&server);

    let missing_last = EmailFinderOptions::new("asana.com", "Dustin", "");
    let err = client.email_finder(&missing_last).await.unwrap_err();
    assert!(matches!(err, Error::Validation(ref m) if m.contains("last name")), "{err:?}");

    let missing_first = EmailFinderOptions::new("asana.com", "", "Moskovitz");
    let err = client.email_finder(&missing_first).await.unwrap_err();
    assert!(matches!(err, Error::Validation(ref m) if m.contains("first name")), "{err:?}");

    let missing_org = EmailFinderOptions {
        first_name: "Dustin".to_string(),
        last_name: "Moskovitz".to_string(),
        ..EmailFinderOptions::default()
    };
    let err = client.email_finder(&missing_org).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)), "{err:?}");

    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn email_finder_end_to_end() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/generate")
                .query_param("domain", "asana.com")
                .query_param("first_name", "Dustin")
                .query_param("last_name", "Moskovitz")
                .query_param("api_key", KEY);
            then.status(200).json_body(json!({
                "status": "success",
                "email": "dustin@asana.com",
                "score": 72,
                "sources": []
            }));
        })
        .await;

    let options = EmailFinderOptions::new("asana.com", "Dustin", "Moskovitz");
    let found = client_for(&server).email_finder(&options).await.unwrap();

    assert_eq!(found.email, "dustin@asana.com");
    assert_eq!(found.score, 72.0);
    mock.assert_async().await;
}

#[tokio::test]
async fn email_verification_decodes_flags() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/verify")
                .query_param("email", "steli@close.io");
            then.status(200).json_body(json!({
                "status": "success",
                "email": "steli@close.io",
                "score": 91,
                "result": "deliverable",
                "regexp": true,
                "gibberish": false,
                "disposable": false,
                "webmail": false,
                "mx_records": true,
                "smtp_server": true,
                "smtp_check": true,
                "accept_all": false,
                "sources": []
            }));
        })
        .await;

    let results = client_for(&server)
        .email_verification("steli@close.io")
        .await
        .unwrap();

    assert_eq!(results.result, "deliverable");
    assert!(results.regexp && results.mx_records && results.smtp_server && results.smtp_check);
    assert!(!results.gibberish && !results.disposable && !results.webmail && !results.accept_all);
}

#[tokio::test]
async fn email_verification_and_count_require_input() {
    let client = Client::new(KEY).unwrap();

    let err = client.email_verification("").await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let err = client.email_count("").await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn account_information_decodes_reset_date() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/account").query_param("api_key", KEY);
            then.status(200).json_body(json!({
                "status": "success",
                "email": "me@example.com",
                "plan_name": "Free",
                "plan_level": 0,
                "reset_date": "2016-01-04",
                "calls": {"used": 12, "available": 150}
            }));
        })
        .await;

    let account = client_for(&server).account_information().await.unwrap();

    assert_eq!(account.plan_name, "Free");
    assert_eq!(account.reset_date, Date::from_ymd(2016, 1, 4));
    assert_eq!(account.calls.used, 12);
    assert_eq!(account.calls.available, 150);
}

#[tokio::test]
async fn malformed_json_is_a_decoding_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path("/v1/email-count");
            then.status(200).body(r#"{some:"json"}"#);
        })
        .await;

    let err = client_for(&server).email_count("stripe.com").await.unwrap_err();
    assert!(matches!(err, Error::Decoding(DecodingError::Json(_))), "{err:?}");
}

#[tokio::test]
async fn bad_dates_are_decoding_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path("/v1/account");
            then.status(200)
                .json_body(json!({"status": "success", "reset_date": "not-a-date"}));
        })
        .await;

    let err = client_for(&server).account_information().await.unwrap_err();
    assert!(matches!(err, Error::Decoding(DecodingError::Json(_))), "{err:?}");
}

#[tokio::test]
async fn rate_limited_endpoint_surfaces_api_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path("/v1/email-count");
            then.status(429);
        })
        .await;

    let err = client_for(&server).email_count("stripe.com").await.unwrap_err();
    assert_eq!(err.status(), Some(429));
}
