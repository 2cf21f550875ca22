use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Error codes for the walk system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[repr(i32)]
pub enum ErrCode {
    // Walk/statistics errors (0-99)
    #[strum(serialize = "_WALK_ERR_BEGIN")]
    WalkErrBegin = 0,
    #[strum(serialize = "COMMON_ERROR")]
    CommonError = 1,
    #[strum(serialize = "EMPTY_INPUT")]
    EmptyInput = 2,
    #[strum(serialize = "INVALID_ARGUMENT")]
    InvalidArgument = 3,
    #[strum(serialize = "MISSING_PARAMETERS")]
    MissingParameters = 4,
    #[strum(serialize = "DIVIDE_BY_ZERO")]
    DivideByZero = 5,
    #[strum(serialize = "_WALK_ERR_END")]
    WalkErrEnd = 99,

    // Price data errors (100-199)
    #[strum(serialize = "_DATA_ERR_BEGIN")]
    DataErrBegin = 100,
    #[strum(serialize = "NO_DATA")]
    NoData = 101,
    #[strum(serialize = "PRICE_BELOW_ZERO")]
    PriceBelowZero = 102,
    #[strum(serialize = "DATA_FORMAT_ERROR")]
    DataFormatError = 103,
    #[strum(serialize = "_DATA_ERR_END")]
    DataErrEnd = 199,
}

impl ErrCode {
    pub fn is_walk_err(&self) -> bool {
        let code = *self as i32;
        code > Self::WalkErrBegin as i32 && code < Self::WalkErrEnd as i32
    }

    pub fn is_data_err(&self) -> bool {
        let code = *self as i32;
        code > Self::DataErrBegin as i32 && code < Self::DataErrEnd as i32
    }
}

#[derive(Debug, Error)]
#[error("{errcode}: {msg}")]
pub struct WalkError {
    pub errcode: ErrCode,
    pub msg: String,
}

impl WalkError {
    pub fn new(message: impl Into<String>, code: ErrCode) -> Self {
        Self {
            errcode: code,
            msg: message.into(),
        }
    }

    pub fn is_walk_err(&self) -> bool {
        self.errcode.is_walk_err()
    }

    pub fn is_data_err(&self) -> bool {
        self.errcode.is_data_err()
    }
}
