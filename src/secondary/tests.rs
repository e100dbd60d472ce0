use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::testutil::with_client;

fn primary_json(linked: &[&str]) -> serde_json::Value {
    json!({
        "id": 4,
        "account_id": 1010,
        "name": "PrimaryProduction",
        "ip": "1.2.3.4",
        "port": 4567,
        "linked_secondary_zones": linked,
        "created_at": "2021-03-05T18:02:23Z",
        "updated_at": "2021-03-05T18:02:23Z"
    })
}

fn secondary_zone_json() -> serde_json::Value {
    json!({
        "id": 734,
        "account_id": 1010,
        "name": "secondaryexample.com",
        "reverse": false,
        "secondary": true,
        "last_transferred_at": null,
        "active": true,
        "created_at": "2023-03-11T10:10:03Z",
        "updated_at": "2023-03-11T10:10:03Z"
    })
}

#[test]
fn server_attributes_omit_unset_port() {
    assert_eq!(
        serde_json::to_value(SecondaryServerAttributes::new("ns1", "1.2.3.4")).unwrap(),
        json!({"name": "ns1", "ip": "1.2.3.4"})
    );
    assert_eq!(
        serde_json::to_value(SecondaryServerAttributes::new("ns1", "1.2.3.4").port(5353)).unwrap(),
        json!({"name": "ns1", "ip": "1.2.3.4", "port": 5353})
    );
}

#[test]
fn server_port_defaults_to_53() {
    let server: SecondaryServer = serde_json::from_value(json!({
        "id": 1, "account_id": 2, "name": "ns1", "ip": "1.2.3.4"
    }))
    .unwrap();
    assert_eq!(server.port, 53);
    assert!(server.linked_secondary_zones.is_empty());
}

#[test]
fn secondary_zone_flattens_zone() {
    let zone: SecondaryZone = serde_json::from_value(json!({
        "id": 734,
        "name": "secondaryexample.com",
        "secondary": true,
        "last_transferred_at": "2023-03-12T08:00:00Z"
    }))
    .unwrap();

    assert_eq!(zone.zone.id, 734);
    assert!(zone.zone.secondary);
    assert!(zone.last_transferred_at.is_some());

    let value = serde_json::to_value(&zone).unwrap();
    assert_eq!(value["name"], "secondaryexample.com");
    assert!(value.get("created_at").is_none());
    assert_eq!(serde_json::from_value::<SecondaryZone>(value).unwrap(), zone);
}

#[tokio::test]
async fn create_secondary_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/1010/secondary_dns/primaries"))
        .and(body_json(json!({"name": "PrimaryProduction", "ip": "1.2.3.4", "port": 4567})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": primary_json(&[])})))
        .expect(1)
        .mount(&server)
        .await;

    let attributes = SecondaryServerAttributes::new("PrimaryProduction", "1.2.3.4").port(4567);
    let resp = with_client(&server, move |client| {
        client.create_secondary_server(1010, &attributes)
    })
    .await
    .unwrap();

    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(resp.data.id, 4);
    assert_eq!(resp.data.account_id, 1010);
    assert_eq!(resp.data.port, 4567);
    assert_eq!(
        resp.data.created_at,
        Some("2021-03-05T18:02:23Z".parse().unwrap())
    );
}

#[tokio::test]
async fn list_secondary_servers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/1010/secondary_dns/primaries"))
        .and(query_param("page", "1"))
        .and(query_param("sort", "id:asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [primary_json(&["secondaryzone.com"])],
            "pagination": {"current_page": 1, "per_page": 30, "total_entries": 1, "total_pages": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListOptions::default().page(1).sort("id:asc");
    let resp = with_client(&server, move |client| {
        client.list_secondary_servers(1010, Some(&options))
    })
    .await
    .unwrap();

    assert_eq!(resp.data.len(), 1);
    assert_eq!(resp.data[0].linked_secondary_zones, vec!["secondaryzone.com"]);
    assert_eq!(
        resp.pagination,
        Some(crate::Pagination {
            current_page: 1,
            per_page: 30,
            total_entries: 1,
            total_pages: 1,
        })
    );
}

#[tokio::test]
async fn get_secondary_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/1010/secondary_dns/primaries/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": primary_json(&[])})))
        .expect(1)
        .mount(&server)
        .await;

    let resp = with_client(&server, |client| client.get_secondary_server(1010, 4))
        .await
        .unwrap();
    assert_eq!(resp.data.name, "PrimaryProduction");
    assert_eq!(resp.data.ip, "1.2.3.4");
}

#[tokio::test]
async fn delete_secondary_server() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/1010/secondary_dns/primaries/4"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let resp = with_client(&server, |client| client.delete_secondary_server(1010, 4))
        .await
        .unwrap();
    assert_eq!(resp.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn delete_missing_secondary_server() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/1010/secondary_dns/primaries/9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Primary server `9` not found"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = with_client(&server, |client| client.delete_secondary_server(1010, 9))
        .await
        .unwrap_err();
    assert!(err.api_error().unwrap().is_not_found());
    assert!(err.to_string().contains("404 Primary server `9` not found"));
}

#[tokio::test]
async fn link_and_unlink_secondary_server() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v2/1010/secondary_dns/primaries/4/link"))
        .and(body_json(json!({"zone": "secondaryzone.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": primary_json(&["secondaryzone.com"])
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v2/1010/secondary_dns/primaries/4/unlink"))
        .and(body_json(json!({"zone": "secondaryzone.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": primary_json(&[])})))
        .expect(1)
        .mount(&server)
        .await;

    let (linked, unlinked) = with_client(&server, |client| {
        let linked = client.link_secondary_server(1010, 4, "secondaryzone.com")?;
        let unlinked = client.unlink_secondary_server(1010, 4, "secondaryzone.com")?;
        Ok::<_, ClientError>((linked, unlinked))
    })
    .await
    .unwrap();

    assert_eq!(linked.data.linked_secondary_zones, vec!["secondaryzone.com"]);
    assert!(unlinked.data.linked_secondary_zones.is_empty());
}

#[tokio::test]
async fn create_secondary_zone() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/1010/secondary_dns/zones"))
        .and(body_json(json!({"name": "secondaryexample.com"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"data": secondary_zone_json()})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let attributes = SecondaryZoneAttributes::new("secondaryexample.com");
    let resp = with_client(&server, move |client| {
        client.create_secondary_zone(1010, &attributes)
    })
    .await
    .unwrap();

    let zone = resp.data;
    assert_eq!(zone.zone.id, 734);
    assert_eq!(zone.zone.name, "secondaryexample.com");
    assert!(zone.zone.secondary);
    assert!(zone.zone.active);
    assert!(!zone.zone.reverse);
    assert_eq!(zone.last_transferred_at, None);
}

#[tokio::test]
async fn list_get_and_delete_secondary_zones() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/acme/secondary_dns/zones"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": [secondary_zone_json()]})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/acme/secondary_dns/zones/secondaryexample.com"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": secondary_zone_json()})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v2/acme/secondary_dns/zones/secondaryexample.com"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (zones, zone) = with_client(&server, |client| {
        let zones = client.list_secondary_zones("acme", None)?;
        let zone = client.get_secondary_zone("acme", "secondaryexample.com")?;
        client.delete_secondary_zone("acme", "secondaryexample.com")?;
        Ok::<_, ClientError>((zones, zone))
    })
    .await
    .unwrap();

    assert_eq!(zones.data, vec![zone.data.clone()]);
    assert_eq!(zones.pagination, None);
    assert_eq!(zone.data.zone.account_id, 1010);
}
