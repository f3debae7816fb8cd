use super::Client;
use crate::Error;
use bon::Builder;
use serde::{Deserialize, Serialize};

//region response
#[derive(Deserialize, Debug, Clone)]
pub struct DataRemovalStatus {
    #[serde(rename = "ID")]
    pub id: u64,
    /// `Pending` 或 `Done`
    #[serde(rename = "Status")]
    pub status: String,
}
//endregion

#[derive(Builder, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestDataRemoval<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    /// 发起请求的人的邮箱
    requested_by: &'a str,
    /// 需要删除数据的邮箱
    requested_for: &'a str,
    #[builder(default = false)]
    notify_when_completed: bool,
}

impl Client {
    pub fn request_data_removal(&self) -> RequestDataRemovalBuilder<'_> {
        RequestDataRemoval::builder(self)
    }

    pub async fn get_data_removal_status(&self, id: u64) -> Result<DataRemovalStatus, Error> {
        self.base.get(&format!("/data-removals/{}", id)).await
    }
}

impl RequestDataRemoval<'_> {
    pub async fn send(&self) -> Result<DataRemovalStatus, Error> {
        self.client.base.post("/data-removals", self).await
    }
}
