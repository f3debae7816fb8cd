use super::Client;
use super::domains::DkimStatus;
use super::types::DefaultResponse;
use super::utils::PageQuery;
use crate::Error;
use crate::base::EmptyBody;
use bon::Builder;
use serde::{Deserialize, Serialize};

//region response
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct Signature {
    #[serde(rename = "ID")]
    pub id: u64,
    pub domain: String,
    pub email_address: String,
    pub reply_to_email_address: Option<String>,
    pub name: String,
    pub confirmed: bool,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct Signatures {
    pub total_count: u32,
    pub sender_signatures: Vec<Signature>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct SignatureDetails {
    #[serde(rename = "ID")]
    pub id: u64,
    pub domain: String,
    pub email_address: String,
    pub reply_to_email_address: Option<String>,
    pub name: String,
    pub confirmed: bool,
    pub confirmation_personal_note: Option<String>,
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
//endregion

//region get_sender_signatures
#[derive(Builder)]
pub struct GetSenderSignatures<'a> {
    #[builder(start_fn)]
    client: &'a Client,

    /// 默认100
    count: Option<u32>,
    /// 默认0
    offset: Option<u32>,
}

impl Client {
    pub fn get_sender_signatures(&self) -> GetSenderSignaturesBuilder<'_> {
        GetSenderSignatures::builder(self)
    }
}

impl GetSenderSignatures<'_> {
    pub async fn send(&self) -> Result<Signatures, Error> {
        let query = PageQuery::new(self.count, self.offset);
        self.client.base.get_with_query("/senders", &query).await
    }
}
//endregion

//region create_sender_signature
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSenderSignature<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,

    name: &'a str,
    /// 创建后会向该地址发送确认邮件
    from_email: &'a str,
    reply_to_email: Option<&'a str>,
    return_path_domain: Option<&'a str>,
    /// 附在确认邮件中的说明
    confirmation_personal_note: Option<&'a str>,
}

impl Client {
    pub fn create_sender_signature(&self) -> CreateSenderSignatureBuilder<'_> {
        CreateSenderSignature::builder(self)
    }
}

impl CreateSenderSignature<'_> {
    pub async fn send(&self) -> Result<SignatureDetails, Error> {
        if self.name.trim().is_empty() {
            return Err(Error::Common("sender name must not be empty".to_owned()));
        }
        if self.from_email.trim().is_empty() {
            return Err(Error::Common("from_email must not be empty".to_owned()));
        }

        self.client.base.post("/senders", self).await
    }
}
//endregion

//region edit_sender_signature
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EditSenderSignature<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    client: &'a Client,
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    id: u64,

    name: &'a str,
    reply_to_email: Option<&'a str>,
    return_path_domain: Option<&'a str>,
    confirmation_personal_note: Option<&'a str>,
}

impl Client {
    pub fn edit_sender_signature(&self, id: u64) -> EditSenderSignatureBuilder<'_> {
        EditSenderSignature::builder(self, id)
    }
}

impl EditSenderSignature<'_> {
    pub async fn send(&self) -> Result<SignatureDetails, Error> {
        self.client
            .base
            .put(&format!("/senders/{}", self.id), self)
            .await
    }
}
//endregion

impl Client {
    pub async fn get_sender_signature(&self, id: u64) -> Result<SignatureDetails, Error> {
        self.base.get(&format!("/senders/{}", id)).await
    }

    pub async fn delete_sender_signature(&self, id: u64) -> Result<DefaultResponse, Error> {
        self.base.delete(&format!("/senders/{}", id)).await
    }

    /// 重新发送确认邮件
    pub async fn resend_sender_signature_confirmation(
        &self,
        id: u64,
    ) -> Result<DefaultResponse, Error> {
        self.base
            .post(&format!("/senders/{}/resend", id), &EmptyBody {})
            .await
    }

    pub async fn verify_sender_signature_spf(&self, id: u64) -> Result<SignatureDetails, Error> {
        self.base
            .post(&format!("/senders/{}/verifySPF", id), &EmptyBody {})
            .await
    }

    pub async fn request_new_dkim_for_sender_signature(
        &self,
        id: u64,
    ) -> Result<DefaultResponse, Error> {
        self.base
            .post(&format!("/senders/{}/requestNewDKIM", id), &EmptyBody {})
            .await
    }
}
