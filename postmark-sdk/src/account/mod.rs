//! Postmark账户级别api: servers, domains, sender signatures, templates push, data removals
//!
//! 需要使用Account API Token，[官方文档](https://postmarkapp.com/developer/api/overview#authentication)
//!
//! # Example
//! ```no_run
//! use postmark_sdk::account;
//!
//! # async fn run() -> Result<(), postmark_sdk::Error> {
//! let client = account::Client::builder()
//!     .account_token("my-account-token")
//!     .build()?;
//!
//! let servers = client.get_servers().count(10).build().send().await?;
//! println!("{}", servers.total_count);
//!
//! let domain = client.verify_domain_dkim(42).await?;
//! println!("{}", domain.dkim.dkim_verified);
//! # Ok(())
//! # }
//! ```

pub use self::types::*;

mod servers;
pub use servers::*;

mod domains;
pub use domains::*;

mod signatures;
pub use signatures::*;

mod templates;
pub use templates::*;

mod data_removals;
pub use data_removals::*;

mod types;
mod utils;

use crate::Error;
use crate::base::{BaseClient, DEFAULT_REQUEST_HOST, DEFAULT_TIMEOUT};
use bon::bon;
use std::time::Duration;

const ACCOUNT_TOKEN_HEADER: &str = "x-postmark-account-token";

pub struct Client {
    base: BaseClient,
}

#[bon]
impl Client {
    #[builder(on(String, into))]
    pub fn new(
        /// Account API Token，请求时放在`X-Postmark-Account-Token`中
        account_token: String,
        /// 默认`api.postmarkapp.com`，可以带端口
        #[builder(default = DEFAULT_REQUEST_HOST.to_owned())]
        request_host: String,
        #[builder(default = true)] use_https: bool,
        /// 单个请求超时，默认180秒
        #[builder(default = DEFAULT_TIMEOUT)]
        timeout: Duration,
    ) -> Result<Self, Error> {
        let base = BaseClient::new(
            ACCOUNT_TOKEN_HEADER,
            &account_token,
            &request_host,
            use_https,
            timeout,
        )?;
        Ok(Self { base })
    }
}
