use serde::{Deserialize, Serialize};

/// 删除、重发确认邮件等接口的通用响应
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DefaultResponse {
    pub error_code: i64,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryType {
    Live,
    Sandbox,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTrackingOptions {
    None,
    HtmlAndText,
    HtmlOnly,
    TextOnly,
}
