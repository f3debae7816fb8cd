use reqwest::StatusCode;
use serde::Deserialize;

/// Postmark返回的错误会按HTTP状态码和`ErrorCode`归类
///
/// 所有API类错误都带有`status`、`error_code`、`message`，
/// body不是`{"ErrorCode": .., "Message": ..}`格式时，`error_code`为0，`message`为原始body
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("params error: {0}")]
    Common(String),
    #[error("invalid api token: {status}, code: {error_code}, message: {message}")]
    InvalidApiKey {
        status: StatusCode,
        error_code: i64,
        message: String,
    },
    #[error("resource not found: {status}, code: {error_code}, message: {message}")]
    NotFound {
        status: StatusCode,
        error_code: i64,
        message: String,
    },
    #[error("invalid email request: {status}, code: {error_code}, message: {message}")]
    InvalidEmailRequest {
        status: StatusCode,
        error_code: i64,
        message: String,
    },
    #[error("inactive recipients {recipients:?}: {status}, code: {error_code}, message: {message}")]
    InactiveRecipients {
        status: StatusCode,
        error_code: i64,
        message: String,
        recipients: Vec<String>,
    },
    #[error("api input error: {status}, code: {error_code}, message: {message}")]
    ApiInput {
        status: StatusCode,
        error_code: i64,
        message: String,
    },
    #[error("rate limit exceeded: {status}, code: {error_code}, message: {message}")]
    RateLimitExceeded {
        status: StatusCode,
        error_code: i64,
        message: String,
    },
    #[error("postmark internal server error: {status}, code: {error_code}, message: {message}")]
    InternalServer {
        status: StatusCode,
        error_code: i64,
        message: String,
    },
    #[error("postmark service unavailable: {status}, code: {error_code}, message: {message}")]
    ServiceUnavailable {
        status: StatusCode,
        error_code: i64,
        message: String,
    },
    #[error("request failed: {status}, code: {error_code}, message: {message}")]
    Unknown {
        status: StatusCode,
        error_code: i64,
        message: String,
    },
    #[error("use reqwest error:\n {0}")]
    Reqwest(#[from] reqwest::Error),
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorBody {
    #[serde(default)]
    error_code: i64,
    #[serde(default)]
    message: String,
}

const INVALID_EMAIL_REQUEST_CODE: i64 = 300;
const INACTIVE_RECIPIENTS_CODE: i64 = 406;

impl Error {
    pub(crate) fn from_response(status: StatusCode, body: String) -> Self {
        let (error_code, message) = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(b) => (b.error_code, b.message),
            Err(_) => (0, body),
        };

        match status.as_u16() {
            401 => Error::InvalidApiKey {
                status,
                error_code,
                message,
            },
            404 => Error::NotFound {
                status,
                error_code,
                message,
            },
            422 => match error_code {
                INVALID_EMAIL_REQUEST_CODE => Error::InvalidEmailRequest {
                    status,
                    error_code,
                    message,
                },
                INACTIVE_RECIPIENTS_CODE => Error::InactiveRecipients {
                    status,
                    error_code,
                    recipients: parse_inactive_recipients(&message),
                    message,
                },
                _ => Error::ApiInput {
                    status,
                    error_code,
                    message,
                },
            },
            429 => Error::RateLimitExceeded {
                status,
                error_code,
                message,
            },
            500 => Error::InternalServer {
                status,
                error_code,
                message,
            },
            503 => Error::ServiceUnavailable {
                status,
                error_code,
                message,
            },
            _ => Error::Unknown {
                status,
                error_code,
                message,
            },
        }
    }

    /// 非API错误返回`None`
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::InvalidApiKey { status, .. }
            | Error::NotFound { status, .. }
            | Error::InvalidEmailRequest { status, .. }
            | Error::InactiveRecipients { status, .. }
            | Error::ApiInput { status, .. }
            | Error::RateLimitExceeded { status, .. }
            | Error::InternalServer { status, .. }
            | Error::ServiceUnavailable { status, .. }
            | Error::Unknown { status, .. } => Some(*status),
            Error::Reqwest(e) => e.status(),
            Error::Common(_) => None,
        }
    }

    /// Postmark的`ErrorCode`
    pub fn error_code(&self) -> Option<i64> {
        match self {
            Error::InvalidApiKey { error_code, .. }
            | Error::NotFound { error_code, .. }
            | Error::InvalidEmailRequest { error_code, .. }
            | Error::InactiveRecipients { error_code, .. }
            | Error::ApiInput { error_code, .. }
            | Error::RateLimitExceeded { error_code, .. }
            | Error::InternalServer { error_code, .. }
            | Error::ServiceUnavailable { error_code, .. }
            | Error::Unknown { error_code, .. } => Some(*error_code),
            Error::Reqwest(_) | Error::Common(_) => None,
        }
    }
}

impl From<postmark_sdk_common::Error> for Error {
    fn from(e: postmark_sdk_common::Error) -> Self {
        match e {
            postmark_sdk_common::Error::Common(msg) => Error::Common(msg),
            postmark_sdk_common::Error::RequestAPIFailed { status, message } => {
                Error::from_response(status, message)
            }
            postmark_sdk_common::Error::Reqwest(e) => Error::Reqwest(e),
        }
    }
}

// 两种格式:
// "... Found inactive addresses: a@example.com, b@example.com. Inactive recipients are ..."
// "... these inactive addresses: a@example.com."
fn parse_inactive_recipients(message: &str) -> Vec<String> {
    const MARKERS: [&str; 2] = ["Found inactive addresses: ", "these inactive addresses: "];

    for marker in MARKERS {
        let Some(start) = message.find(marker) else {
            continue;
        };
        let rest = &message[start + marker.len()..];
        let end = rest.find(" Inactive").unwrap_or(rest.len());
        return rest[..end]
            .trim()
            .trim_end_matches('.')
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
    }

    Vec::new()
}
