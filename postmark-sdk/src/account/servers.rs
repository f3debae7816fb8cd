use super::Client;
use super::types::{DefaultResponse, DeliveryType, LinkTrackingOptions};
use super::utils::PageQuery;
use crate::Error;
use bon::Builder;
use serde::{Deserialize, Serialize};

//region response
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct Server {
    #[serde(rename = "ID")]
    pub id: u64,
    pub name: String,
    pub api_tokens: Vec<String>,
    pub color: Option<String>,
    pub smtp_api_activated: bool,
    pub raw_email_enabled: bool,
    pub delivery_type: Option<DeliveryType>,
    pub server_link: Option<String>,
    pub inbound_address: Option<String>,
    pub inbound_hook_url: Option<String>,
    pub bounce_hook_url: Option<String>,
    pub open_hook_url: Option<String>,
    pub delivery_hook_url: Option<String>,
    pub click_hook_url: Option<String>,
    pub post_first_open_only: bool,
    pub inbound_domain: Option<String>,
    pub inbound_hash: Option<String>,
    pub inbound_spam_threshold: u32,
    pub track_opens: bool,
    pub track_links: Option<LinkTrackingOptions>,
    pub include_bounce_content_in_hook: bool,
    pub enable_smtp_api_error_hooks: bool,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct Servers {
    pub total_count: u32,
    pub servers: Vec<Server>,
}
//endregion

//region get_servers
#[derive(Builder)]
pub struct GetServers<'a> {
    #[builder(start_fn)]
    client: &'a Client,

    /// 默认100
    count: Option<u32>,
    /// 默认0
    offset: Option<u32>,
    /// 按名称过滤
    name: Option<&'a str>,
}

impl Client {
    pub fn get_servers(&self) -> GetServersBuilder<'_> {
        GetServers::builder(self)
    }
}

impl GetServers<'_> {
    pub async fn send(&self) -> Result<Servers, Error> {
        let query = PageQuery::new(self.count, self.offset).with_name(self.name);
        self.client.base.get_with_query("/servers", &query).await
    }
}
//endregion

//region create_server
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateServer<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    name: &'a str,
    color: Option<&'a str>,
    smtp_api_activated: Option<bool>,
    raw_email_enabled: Option<bool>,
    delivery_type: Option<DeliveryType>,
    inbound_hook_url: Option<&'a str>,
    bounce_hook_url: Option<&'a str>,
    open_hook_url: Option<&'a str>,
    delivery_hook_url: Option<&'a str>,
    click_hook_url: Option<&'a str>,
    post_first_open_only: Option<bool>,
    inbound_domain: Option<&'a str>,
    inbound_spam_threshold: Option<u32>,
    track_opens: Option<bool>,
    track_links: Option<LinkTrackingOptions>,
    include_bounce_content_in_hook: Option<bool>,
    enable_smtp_api_error_hooks: Option<bool>,
}

impl Client {
    pub fn create_server(&self) -> CreateServerBuilder<'_> {
        CreateServer::builder(self)
    }
}

impl CreateServer<'_> {
    pub async fn send(&self) -> Result<Server, Error> {
        if self.name.trim().is_empty() {
            return Err(Error::Common("server name must not be empty".to_owned()));
        }

        self.client.base.post("/servers", self).await
    }
}
//endregion

//region edit_server
// 创建之后不能再修改DeliveryType
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EditServer<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    id: u64,

    name: Option<&'a str>,
    color: Option<&'a str>,
    smtp_api_activated: Option<bool>,
    raw_email_enabled: Option<bool>,
    inbound_hook_url: Option<&'a str>,
    bounce_hook_url: Option<&'a str>,
    open_hook_url: Option<&'a str>,
    delivery_hook_url: Option<&'a str>,
    click_hook_url: Option<&'a str>,
    post_first_open_only: Option<bool>,
    inbound_domain: Option<&'a str>,
    inbound_spam_threshold: Option<u32>,
    track_opens: Option<bool>,
    track_links: Option<LinkTrackingOptions>,
    include_bounce_content_in_hook: Option<bool>,
    enable_smtp_api_error_hooks: Option<bool>,
}

impl Client {
    pub fn edit_server(&self, id: u64) -> EditServerBuilder<'_> {
        EditServer::builder(self, id)
    }
}

impl EditServer<'_> {
    pub async fn send(&self) -> Result<Server, Error> {
        self.client
            .base
            .put(&format!("/servers/{}", self.id), self)
            .await
    }
}
//endregion

impl Client {
    pub async fn get_server(&self, id: u64) -> Result<Server, Error> {
        self.base.get(&format!("/servers/{}", id)).await
    }

    pub async fn delete_server(&self, id: u64) -> Result<DefaultResponse, Error> {
        self.base.delete(&format!("/servers/{}", id)).await
    }
}
