//! Tests for credential failover dispatch and the hotel search client.

use std::sync::Mutex;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use yatra::dispatch::hotels::HotelSearchClient;
use yatra::dispatch::{dispatch, CredentialSet};
use yatra::error::YatraError;

fn creds(keys: &[&str]) -> CredentialSet {
    keys.iter().map(|k| k.to_string()).collect()
}

fn fail(message: &str) -> YatraError {
    YatraError::Api {
        status: 500,
        message: message.to_string(),
    }
}

#[tokio::test]
async fn first_success_short_circuits_in_order() {
    let calls = Mutex::new(Vec::new());

    let result = dispatch(&creds(&["A", "B", "C"]), |key| {
        calls.lock().unwrap().push(key.clone());
        async move {
            if key == "C" {
                Ok(42)
            } else {
                Err(fail("boom"))
            }
        }
    })
    .await
    .unwrap();

    assert_eq!(result, 42);
    assert_eq!(*calls.lock().unwrap(), vec!["A", "B", "C"]);
}

#[tokio::test]
async fn success_on_first_credential_makes_one_call() {
    let calls = Mutex::new(0usize);

    let result = dispatch(&creds(&["A", "B"]), |key| {
        *calls.lock().unwrap() += 1;
        async move { Ok::<_, YatraError>(key) }
    })
    .await
    .unwrap();

    assert_eq!(result, "A");
    assert_eq!(*calls.lock().unwrap(), 1);
}

#[tokio::test]
async fn empty_credential_set_exhausts_with_zero_calls() {
    let calls = Mutex::new(0usize);

    let err = dispatch(&CredentialSet::default(), |_key| {
        *calls.lock().unwrap() += 1;
        async move { Ok::<u32, _>(0) }
    })
    .await
    .unwrap_err();

    assert_eq!(*calls.lock().unwrap(), 0);
    match err {
        YatraError::AllCredentialsExhausted { attempted, .. } => assert_eq!(attempted, 0),
        other => panic!("expected AllCredentialsExhausted, got {other:?}"),
    }
}

#[tokio::test]
async fn single_failing_credential_exhausts_after_one_call() {
    let calls = Mutex::new(0usize);

    let err = dispatch(&creds(&["A"]), |_key| {
        *calls.lock().unwrap() += 1;
        async move { Err::<u32, _>(fail("down")) }
    })
    .await
    .unwrap_err();

    assert_eq!(*calls.lock().unwrap(), 1);
    match err {
        YatraError::AllCredentialsExhausted { attempted, detail } => {
            assert_eq!(attempted, 1);
            assert_eq!(detail.len(), 1);
            assert!(detail[0].contains("down"));
        }
        other => panic!("expected AllCredentialsExhausted, got {other:?}"),
    }
}

#[tokio::test]
async fn blank_credentials_are_skipped_without_an_attempt() {
    let calls = Mutex::new(Vec::new());

    let result = dispatch(&creds(&["", "  ", "K"]), |key| {
        calls.lock().unwrap().push(key.clone());
        async move { Ok::<_, YatraError>(key) }
    })
    .await
    .unwrap();

    assert_eq!(result, "K");
    assert_eq!(*calls.lock().unwrap(), vec!["K"]);
}

#[tokio::test]
async fn exhaustion_retains_per_credential_diagnostics() {
    let err = dispatch(&creds(&["A", "B"]), |key| async move {
        Err::<u32, _>(fail(&format!("{key} rejected")))
    })
    .await
    .unwrap_err();

    match err {
        YatraError::AllCredentialsExhausted { attempted, detail } => {
            assert_eq!(attempted, 2);
            assert!(detail[0].contains("A rejected"));
            assert!(detail[1].contains("B rejected"));
        }
        other => panic!("expected AllCredentialsExhausted, got {other:?}"),
    }
}

#[tokio::test]
async fn hotel_search_fails_over_to_second_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(header("x-api-key", "bad-key"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", "hotels in Goa"))
        .and(header("x-api-key", "good-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"result_type": "hotel", "name": "Sea View Inn", "rating": 4.2},
                {"result_type": "landmark", "name": "Fort Aguada"},
                {"result_type": "hotel", "name": "Palm Grove Resort", "price": "₹4500"},
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HotelSearchClient::new(server.uri(), creds(&["bad-key", "good-key"]));
    let hotels = client.search("hotels in Goa").await.unwrap();

    let names: Vec<&str> = hotels.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Sea View Inn", "Palm Grove Resort"]);
    server.verify().await;
}

#[tokio::test]
async fn hotel_search_truncates_to_first_five_hotels() {
    let server = MockServer::start().await;

    let entries: Vec<_> = (1..=8)
        .map(|i| json!({"result_type": "hotel", "name": format!("Hotel {i}")}))
        .collect();

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": entries})))
        .mount(&server)
        .await;

    let client = HotelSearchClient::new(server.uri(), creds(&["k1"]));
    let hotels = client.search("anywhere").await.unwrap();

    assert_eq!(hotels.len(), 5);
    assert_eq!(hotels[0].name, "Hotel 1");
}

#[tokio::test]
async fn hotel_search_surfaces_only_aggregate_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .expect(2)
        .mount(&server)
        .await;

    let client = HotelSearchClient::new(server.uri(), creds(&["k1", "k2"]));
    let err = client.search("hotels in Goa").await.unwrap_err();

    match err {
        YatraError::AllCredentialsExhausted { attempted, .. } => assert_eq!(attempted, 2),
        other => panic!("expected AllCredentialsExhausted, got {other:?}"),
    }
    server.verify().await;
}
