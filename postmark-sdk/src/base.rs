use crate::Error;
use postmark_sdk_common::helper::parse_json_response;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub(crate) const DEFAULT_REQUEST_HOST: &str = "api.postmarkapp.com";
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

const SDK_USER_AGENT: &str = concat!("postmark-sdk-rust/", env!("CARGO_PKG_VERSION"));

/// 没有请求参数的POST/PUT发送`{}`
#[derive(Serialize)]
pub(crate) struct EmptyBody {}

/// 各个api client共用的请求分发
///
/// 负责鉴权header、base url拼接、响应解析和错误转换
pub(crate) struct BaseClient {
    http_client: reqwest::Client,
    // 不以`/`结尾，request_host中可以带路径前缀
    base_url: String,
}

impl BaseClient {
    pub(crate) fn new(
        token_header: &'static str,
        token: &str,
        request_host: &str,
        use_https: bool,
        timeout: Duration,
    ) -> Result<Self, Error> {
        if token.trim().is_empty() {
            return Err(Error::Common(
                "a valid API token must be provided".to_owned(),
            ));
        }

        let mut header_map = HeaderMap::new();
        let mut token_val = HeaderValue::from_str(token)
            .map_err(|e| Error::Common(format!("invalid API token header value: {}", e)))?;
        token_val.set_sensitive(true);
        header_map.insert(HeaderName::from_static(token_header), token_val);
        header_map.insert(ACCEPT, HeaderValue::from_static("application/json"));
        header_map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        header_map.insert(USER_AGENT, HeaderValue::from_static(SDK_USER_AGENT));

        let http_client = reqwest::Client::builder()
            .default_headers(header_map)
            .timeout(timeout)
            .build()?;

        let scheme = if use_https { "https" } else { "http" };
        let base_url = Url::parse(&format!("{}://{}", scheme, request_host))
            .map_err(|e| Error::Common(format!("invalid request host {}: {}", request_host, e)))?
            .as_str()
            .trim_end_matches('/')
            .to_owned();

        Ok(Self {
            http_client,
            base_url,
        })
    }

    // 直接拼接而不是`Url::join`，join绝对路径会丢掉host后面的路径前缀
    fn url(&self, path: &str) -> Result<Url, Error> {
        let path = path.trim_start_matches('/');
        Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|e| Error::Common(format!("invalid request path {}: {}", path, e)))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");
        self.execute(self.http_client.get(url)).await
    }

    pub(crate) async fn get_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        Q: Serialize + std::fmt::Debug + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        debug!("GET {url} query={query:?}");
        self.execute(self.http_client.get(url).query(query)).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        debug!("POST {url}");
        self.execute(self.http_client.post(url).json(body)).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        debug!("PUT {url}");
        self.execute(self.http_client.put(url).json(body)).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("DELETE {url}");
        self.execute(self.http_client.delete(url)).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, Error> {
        let resp = req.send().await?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%status, url = %resp.url(), "postmark request failed");
        }

        let data = parse_json_response(resp).await?;
        Ok(data)
    }
}
