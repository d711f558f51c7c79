use serde_derive::Serialize;
use std::error::Error;
use std::fmt;

pub type CoreResult<T> = Result<T, CodeErrorResp>;

pub struct CodeError {
    pub success: bool,
    pub error_code: u16,
    pub message: &'static str,
}

impl CodeError {
    pub const ENTROPY_SOURCE_UNAVAILABLE: CodeError = CodeError {
        success: false,
        error_code: 0,
        message: "Secure randomness source unavailable on this host!",
    };
}

pub fn code_err(cerr: CodeError, e: anyhow::Error) -> CodeErrorResp {
    let resp = CodeErrorResp {
        success: cerr.success,
        error_code: cerr.error_code,
        message: cerr.message.to_string(),
        error_message: e.to_string(),
    };
    tracing::error!(
        "Error occurred: error_code={}, message='{}', error_message='{}'",
        resp.error_code,
        resp.message,
        resp.error_message
    );
    resp
}

#[derive(Serialize, Debug)]
pub struct CodeErrorResp {
    pub success: bool,
    pub error_code: u16,
    pub message: String,
    pub error_message: String,
}

impl fmt::Display for CodeErrorResp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.error_message)
    }
}

impl Error for CodeErrorResp {}
