use crate::Error;

/// 读取失败响应的body，转为`Error::RequestAPIFailed`
///
/// 读取body本身失败时返回`Error::Reqwest`
pub async fn into_request_failed_error(resp: reqwest::Response) -> Error {
    let status = resp.status();
    let body = resp.text().await;
    match body {
        Ok(message) => Error::RequestAPIFailed { status, message },
        Err(e) => Error::Reqwest(e),
    }
}

pub async fn parse_json_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, Error> {
    let status = resp.status();

    if !status.is_success() {
        return Err(into_request_failed_error(resp).await);
    }

    let text = resp.text().await?;
    decode_json(&text)
}

/// 空body按`null`处理，这样`()`或`Option<T>`类型的响应也能正常解析
pub fn decode_json<T: serde::de::DeserializeOwned>(text: &str) -> Result<T, Error> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| Error::Common(format!("JSON parse error: {}", e)))
}
