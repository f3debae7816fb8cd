use super::Client;
use super::types::DefaultResponse;
use super::utils::PageQuery;
use crate::Error;
use crate::base::EmptyBody;
use bon::Builder;
use serde::{Deserialize, Serialize};

//region response
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct Domain {
    #[serde(rename = "ID")]
    pub id: u64,
    pub name: String,
    #[serde(rename = "SPFVerified")]
    pub spf_verified: bool,
    #[serde(rename = "DKIMVerified")]
    pub dkim_verified: bool,
    #[serde(rename = "WeakDKIM")]
    pub weak_dkim: bool,
    pub return_path_domain_verified: bool,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct Domains {
    pub total_count: u32,
    pub domains: Vec<Domain>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct DomainDetails {
    #[serde(rename = "ID")]
    pub id: u64,
    pub name: String,
    #[serde(rename = "SPFVerified")]
    pub spf_verified: bool,
    #[serde(rename = "SPFHost")]
    pub spf_host: Option<String>,
    #[serde(rename = "SPFTextValue")]
    pub spf_text_value: Option<String>,
    #[serde(flatten)]
    pub dkim: DkimStatus,
    pub return_path_domain: Option<String>,
    pub return_path_domain_verified: bool,
    #[serde(rename = "ReturnPathDomainCNAMEValue")]
    pub return_path_domain_cname_value: Option<String>,
}

/// domain和sender signature共有的DKIM字段
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DkimStatus {
    #[serde(rename = "DKIMVerified")]
    pub dkim_verified: bool,
    #[serde(rename = "WeakDKIM")]
    pub weak_dkim: bool,
    #[serde(rename = "DKIMHost")]
    pub dkim_host: Option<String>,
    #[serde(rename = "DKIMTextValue")]
    pub dkim_text_value: Option<String>,
    #[serde(rename = "DKIMPendingHost")]
    pub dkim_pending_host: Option<String>,
    #[serde(rename = "DKIMPendingTextValue")]
    pub dkim_pending_text_value: Option<String>,
    #[serde(rename = "DKIMRevokedHost")]
    pub dkim_revoked_host: Option<String>,
    #[serde(rename = "DKIMRevokedTextValue")]
    pub dkim_revoked_text_value: Option<String>,
    #[serde(rename = "SafeToRemoveRevokedKeyFromDNS")]
    pub safe_to_remove_revoked_key_from_dns: bool,
    #[serde(rename = "DKIMUpdateStatus")]
    pub dkim_update_status: Option<String>,
}

/// rotateDKIM的响应，只有DKIM相关字段
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct DkimRotation {
    #[serde(rename = "ID")]
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub dkim: DkimStatus,
}
//endregion

//region get_domains
#[derive(Builder)]
pub struct GetDomains<'a> {
    #[builder(start_fn)]
    client: &'a Client,

    /// 默认100
    count: Option<u32>,
    /// 默认0
    offset: Option<u32>,
}

impl Client {
    pub fn get_domains(&self) -> GetDomainsBuilder<'_> {
        GetDomains::builder(self)
    }
}

impl GetDomains<'_> {
    pub async fn send(&self) -> Result<Domains, Error> {
        let query = PageQuery::new(self.count, self.offset);
        self.client.base.get_with_query("/domains", &query).await
    }
}
//endregion

//region create_domain
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDomain<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    name: &'a str,
    return_path_domain: Option<&'a str>,
}

impl Client {
    pub fn create_domain(&self) -> CreateDomainBuilder<'_> {
        CreateDomain::builder(self)
    }
}

impl CreateDomain<'_> {
    pub async fn send(&self) -> Result<DomainDetails, Error> {
        if self.name.trim().is_empty() {
            return Err(Error::Common("domain name must not be empty".to_owned()));
        }

        self.client.base.post("/domains", self).await
    }
}
//endregion

//region edit_domain
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EditDomain<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    id: u64,

    return_path_domain: Option<&'a str>,
}

impl Client {
    pub fn edit_domain(&self, id: u64) -> EditDomainBuilder<'_> {
        EditDomain::builder(self, id)
    }
}

impl EditDomain<'_> {
    pub async fn send(&self) -> Result<DomainDetails, Error> {
        self.client
            .base
            .put(&format!("/domains/{}", self.id), self)
            .await
    }
}
//endregion

impl Client {
    pub async fn get_domain(&self, id: u64) -> Result<DomainDetails, Error> {
        self.base.get(&format!("/domains/{}", id)).await
    }

    pub async fn delete_domain(&self, id: u64) -> Result<DefaultResponse, Error> {
        self.base.delete(&format!("/domains/{}", id)).await
    }

    pub async fn verify_domain_dkim(&self, id: u64) -> Result<DomainDetails, Error> {
        self.base
            .put(&format!("/domains/{}/verifyDKIM", id), &EmptyBody {})
            .await
    }

    pub async fn verify_domain_return_path(&self, id: u64) -> Result<DomainDetails, Error> {
        self.base
            .put(&format!("/domains/{}/verifyReturnPath", id), &EmptyBody {})
            .await
    }

    /// Postmark已不再要求SPF验证，接口保留
    pub async fn verify_domain_spf(&self, id: u64) -> Result<DomainDetails, Error> {
        self.base
            .post(&format!("/domains/{}/verifySPF", id), &EmptyBody {})
            .await
    }

    /// 生成新的DKIM key，旧key进入revoked状态
    pub async fn rotate_domain_dkim(&self, id: u64) -> Result<DkimRotation, Error> {
        self.base
            .post(&format!("/domains/{}/rotateDKIM", id), &EmptyBody {})
            .await
    }
}
