use thiserror::Error;

#[derive(Error, Debug)]
pub enum SajuError {
    #[error("invalid JSON payload")]
    InvalidJson,

    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error("invalid date format: {value}")]
    InvalidDate { value: String },

    #[error("invalid time: {value}")]
    InvalidTime { value: String },

    #[error("invalid gender: {value}")]
    InvalidGender { value: String },

    #[error("invalid calendar type: {value}")]
    InvalidCalendar { value: String },

    #[error("invalid day stem: {0}")]
    InvalidDayStem(String),

    #[error("malformed pillar in oracle response: {field}={value:?}")]
    MalformedPillar { field: &'static str, value: String },

    #[error("oracle request failed: {0}")]
    OracleError(#[from] reqwest::Error),

    #[error("oracle returned status {status}")]
    OracleStatus { status: u16 },

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("conversion failed: {message}")]
    ConversionError { message: String },
}

impl SajuError {
    /// Wire-level error code exposed to API clients.
    pub fn code(&self) -> &'static str {
        match self {
            SajuError::InvalidJson => "INVALID_JSON",
            SajuError::MissingField { .. } => "MISSING_FIELD",
            SajuError::InvalidDate { .. } => "INVALID_DATE",
            SajuError::InvalidTime { .. } => "INVALID_TIME",
            SajuError::InvalidGender { .. } => "INVALID_GENDER",
            SajuError::InvalidCalendar { .. } => "INVALID_CALENDAR",
            _ => "INTERNAL_ERROR",
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SajuError::InvalidJson
                | SajuError::MissingField { .. }
                | SajuError::InvalidDate { .. }
                | SajuError::InvalidTime { .. }
                | SajuError::InvalidGender { .. }
                | SajuError::InvalidCalendar { .. }
        )
    }

    pub fn http_status(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            500
        }
    }

    /// Client-facing message. Validation errors carry precise guidance;
    /// everything else collapses to a generic message so internal detail
    /// stays in the server log.
    pub fn client_message(&self) -> String {
        match self {
            SajuError::InvalidJson => "유효하지 않은 JSON 형식입니다.".to_string(),
            SajuError::MissingField { field } => {
                format!("필수 필드가 누락되었습니다: {}", field)
            }
            SajuError::InvalidDate { .. } => {
                "날짜 형식이 올바르지 않습니다. YYYY-MM-DD 형식을 사용하세요.".to_string()
            }
            SajuError::InvalidTime { .. } => {
                "시간 형식이 올바르지 않습니다. HH:MM 형식을 사용하세요.".to_string()
            }
            SajuError::InvalidGender { .. } => {
                "성별은 male 또는 female이어야 합니다.".to_string()
            }
            SajuError::InvalidCalendar { .. } => {
                "달력 타입은 solar 또는 lunar이어야 합니다.".to_string()
            }
            _ => "서버 내부 오류가 발생했습니다.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SajuError>;
