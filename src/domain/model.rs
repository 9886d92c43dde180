use serde::{Deserialize, Serialize};

/// Body of `POST /api/convert`. Every field is optional at the serde level
/// so presence can be checked field-by-field with precise error codes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConvertRequest {
    pub calendar: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub gender: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// Day-fortune record returned by the lunar oracle for a compact
/// `YYYYMMDD` date. `year`/`month`/`day` are hangul pillar strings,
/// `hyear`/`hmonth`/`hday` their hanja counterparts, `fmt` a formatted
/// lunar date. Fields the oracle may omit stay optional; extra fields
/// (cycle indices etc.) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DayFortune {
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
    pub hyear: Option<String>,
    pub hmonth: Option<String>,
    pub hday: Option<String>,
    pub fmt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SajuPillars {
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
    pub hour: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementRows {
    pub heavenly_stems: Vec<String>,
    pub earthly_branches: Vec<String>,
}

/// Assembled chart. Arrays are ordered [year, month, day, hour].
/// Constructed fresh per request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SajuData {
    pub lunar_date: Option<String>,
    pub saju: SajuPillars,
    pub elements: ElementRows,
    pub sipseong: Vec<String>,
    pub sipseong_ji: Vec<String>,
}
