use crate::{TOKEN, TOKEN_HEADER, USER_AGENT, setup};
use postmark_sdk::account::{DeliveryType, LinkTrackingOptions};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn server_json(id: u64, name: &str) -> serde_json::Value {
    json!({
        "ID": id,
        "Name": name,
        "ApiTokens": ["server-token"],
        "Color": "red",
        "SmtpApiActivated": true,
        "RawEmailEnabled": false,
        "DeliveryType": "Live",
        "ServerLink": format!("https://postmarkapp.com/servers/{id}/streams"),
        "InboundAddress": "abc@inbound.postmarkapp.com",
        "InboundHookUrl": "",
        "BounceHookUrl": "",
        "OpenHookUrl": "",
        "DeliveryHookUrl": "",
        "PostFirstOpenOnly": false,
        "InboundDomain": "",
        "InboundHash": "abc",
        "InboundSpamThreshold": 5,
        "TrackOpens": false,
        "TrackLinks": "HtmlAndText",
        "IncludeBounceContentInHook": true,
        "ClickHookUrl": "",
        "EnableSmtpApiErrorHooks": false
    })
}

#[tokio::test]
async fn get_servers_applies_default_paging() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/servers"))
        .and(query_param("count", "100"))
        .and(query_param("offset", "0"))
        .and(header(TOKEN_HEADER, TOKEN))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .and(header("User-Agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "TotalCount": 2,
            "Servers": [server_json(1, "Production"), server_json(2, "Staging")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let servers = client.get_servers().build().send().await.unwrap();

    assert_eq!(servers.total_count, 2);
    assert_eq!(servers.servers.len(), 2);
    assert_eq!(servers.servers[0].name, "Production");
    assert_eq!(servers.servers[1].id, 2);
    assert_eq!(servers.servers[0].api_tokens, vec!["server-token"]);
    assert_eq!(servers.servers[0].delivery_type, Some(DeliveryType::Live));
    assert_eq!(
        servers.servers[0].track_links,
        Some(LinkTrackingOptions::HtmlAndText)
    );
}

#[tokio::test]
async fn get_servers_forwards_filter() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/servers"))
        .and(query_param("count", "100"))
        .and(query_param("offset", "20"))
        .and(query_param("name", "Staging"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "TotalCount": 1,
            "Servers": [server_json(2, "Staging")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // count为0时按默认值处理
    let servers = client
        .get_servers()
        .count(0)
        .offset(20)
        .name("Staging")
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(servers.servers[0].name, "Staging");
}

#[tokio::test]
async fn get_server_by_id() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/servers/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(server_json(7, "Production")))
        .expect(1)
        .mount(&server)
        .await;

    let s = client.get_server(7).await.unwrap();
    assert_eq!(s.id, 7);
    assert_eq!(s.inbound_spam_threshold, 5);
    assert!(s.include_bounce_content_in_hook);
}

#[tokio::test]
async fn create_server_sends_only_set_fields() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/servers"))
        .and(header(TOKEN_HEADER, TOKEN))
        .and(header("Content-Type", "application/json"))
        .and(header("User-Agent", USER_AGENT))
        .and(body_json(json!({
            "Name": "Staging",
            "Color": "blue",
            "DeliveryType": "Sandbox",
            "TrackLinks": "TextOnly",
            "TrackOpens": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(server_json(3, "Staging")))
        .expect(1)
        .mount(&server)
        .await;

    let s = client
        .create_server()
        .name("Staging")
        .color("blue")
        .delivery_type(DeliveryType::Sandbox)
        .track_links(LinkTrackingOptions::TextOnly)
        .track_opens(true)
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(s.id, 3);
}

#[tokio::test]
async fn create_server_requires_name() {
    let (_server, client) = setup().await;

    let res = client.create_server().name(" ").build().send().await;
    assert!(matches!(res, Err(postmark_sdk::Error::Common(_))));
}

#[tokio::test]
async fn edit_server_puts_to_id_path() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/servers/3"))
        .and(body_json(json!({
            "Name": "Staging 2",
            "BounceHookUrl": "https://example.com/bounce"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(server_json(3, "Staging 2")))
        .expect(1)
        .mount(&server)
        .await;

    let s = client
        .edit_server(3)
        .name("Staging 2")
        .bounce_hook_url("https://example.com/bounce")
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(s.name, "Staging 2");
}

#[tokio::test]
async fn delete_server() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/servers/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ErrorCode": 0,
            "Message": "Server Staging removed."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.delete_server(3).await.unwrap();
    assert_eq!(resp.error_code, 0);
    assert_eq!(resp.message, "Server Staging removed.");
}
