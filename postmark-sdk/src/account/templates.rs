use super::Client;
use crate::Error;
use bon::Builder;
use serde::{Deserialize, Serialize};

//region response
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct TemplatePushResults {
    pub total_count: u32,
    pub templates: Vec<TemplatePushAction>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct TemplatePushAction {
    /// `Create` 或 `Edit`
    pub action: String,
    pub template_id: Option<u64>,
    pub alias: Option<String>,
    pub name: String,
    pub template_type: Option<String>,
}
//endregion

/// 把一个server的templates推送到另一个server
///
/// `perform_changes`为false时只返回将要执行的变更，不实际修改
#[derive(Builder, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PushTemplates<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    #[serde(rename = "SourceServerID")]
    source_server_id: u64,
    #[serde(rename = "DestinationServerID")]
    destination_server_id: u64,
    perform_changes: bool,
}

impl Client {
    pub fn push_templates(&self) -> PushTemplatesBuilder<'_> {
        PushTemplates::builder(self)
    }
}

impl PushTemplates<'_> {
    pub async fn send(&self) -> Result<TemplatePushResults, Error> {
        self.client.base.put("/templates/push", self).await
    }
}
