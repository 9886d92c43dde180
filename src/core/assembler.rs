//! Request validation and chart assembly: oracle call, hour pillar,
//! Ten-Gods classification, result construction.

use crate::core::hour_pillar;
use crate::core::symbols::{Branch, Stem};
use crate::core::ten_gods::{self, TenGod};
use crate::domain::model::{ConvertRequest, ElementRows, SajuData, SajuPillars};
use crate::domain::ports::FortuneOracle;
use crate::utils::error::{Result, SajuError};
use regex::Regex;
use std::sync::LazyLock;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").unwrap());

// 일진이 없을 때 시주 계산에 쓰는 기본값
const DEFAULT_DAY_PILLAR: &str = "갑자";

/// Validate a convert request. Fail-fast: the first violation is reported.
/// Presence is checked for all six fields before any format check, in the
/// same order the original API reports them.
pub fn validate(request: &ConvertRequest) -> Result<()> {
    let calendar = require("calendar", &request.calendar)?;
    let date = require("date", &request.date)?;
    let time = require("time", &request.time)?;
    let gender = require("gender", &request.gender)?;
    require("name", &request.name)?;
    require("phone", &request.phone)?;

    if !DATE_RE.is_match(date) {
        return Err(SajuError::InvalidDate {
            value: date.to_string(),
        });
    }

    if !TIME_RE.is_match(time) || !time_in_range(time) {
        return Err(SajuError::InvalidTime {
            value: time.to_string(),
        });
    }

    if !matches!(gender, "male" | "female") {
        return Err(SajuError::InvalidGender {
            value: gender.to_string(),
        });
    }

    if !matches!(calendar, "solar" | "lunar") {
        return Err(SajuError::InvalidCalendar {
            value: calendar.to_string(),
        });
    }

    Ok(())
}

fn require<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(SajuError::MissingField {
            field: field.to_string(),
        }),
    }
}

fn time_in_range(time: &str) -> bool {
    // shape already checked against ^\d{2}:\d{2}$
    match time.split_once(':') {
        Some((h, m)) => matches!((h.parse::<u32>(), m.parse::<u32>()), (Ok(hour), Ok(minute)) if hour <= 23 && minute <= 59),
        None => false,
    }
}

/// Validate, consult the oracle and assemble the full chart.
///
/// Validation errors surface as-is; any failure after validation is logged
/// with detail and collapsed into a single wrapped conversion error, so the
/// client never sees a partial result or internal specifics.
pub async fn assemble(oracle: &dyn FortuneOracle, request: &ConvertRequest) -> Result<SajuData> {
    validate(request)?;

    let date = request.date.as_deref().unwrap_or_default();
    let time = request.time.as_deref().unwrap_or_default();

    // YYYY-MM-DD -> YYYYMMDD. The calendar field is validated above but does
    // not change this transformation; the oracle receives the same compact
    // form for solar and lunar input.
    let compact_date = date.replace('-', "");

    match convert(oracle, &compact_date, time).await {
        Ok(data) => Ok(data),
        Err(e) => {
            tracing::error!("saju conversion failed for date {}: {}", compact_date, e);
            Err(SajuError::ConversionError {
                message: e.to_string(),
            })
        }
    }
}

async fn convert(oracle: &dyn FortuneOracle, compact_date: &str, time: &str) -> Result<SajuData> {
    let fortune = oracle.day_fortune(compact_date).await?;

    let day_pillar = fortune.day.as_deref().unwrap_or(DEFAULT_DAY_PILLAR);
    let day_stem_char = day_pillar
        .chars()
        .next()
        .ok_or_else(|| SajuError::InvalidDayStem(day_pillar.to_string()))?;
    let day_stem = Stem::from_char(day_stem_char)
        .ok_or_else(|| SajuError::InvalidDayStem(day_stem_char.to_string()))?;

    let hour = hour_pillar::compute(time, day_stem)?;

    let (year_stem, year_branch) = split_pillar("hyear", fortune.hyear.as_deref())?;
    let (month_stem, month_branch) = split_pillar("hmonth", fortune.hmonth.as_deref())?;
    let (hday_stem, hday_branch) = split_pillar("hday", fortune.hday.as_deref())?;

    let stems = [year_stem, month_stem, hday_stem, hour.stem.hanja()];
    let branches = [year_branch, month_branch, hday_branch, hour.branch.hanja()];

    let sipseong = stems
        .iter()
        .map(|&c| stem_relation(day_stem, c))
        .collect::<Vec<_>>();
    let sipseong_ji = branches
        .iter()
        .map(|&c| branch_relation(day_stem, c))
        .collect::<Vec<_>>();

    Ok(SajuData {
        lunar_date: fortune.fmt.clone(),
        saju: SajuPillars {
            year: fortune.year.clone(),
            month: fortune.month.clone(),
            day: fortune.day.clone(),
            hour: hour.hangul(),
        },
        elements: ElementRows {
            heavenly_stems: stems.iter().map(|c| c.to_string()).collect(),
            earthly_branches: branches.iter().map(|c| c.to_string()).collect(),
        },
        sipseong,
        sipseong_ji,
    })
}

/// Split a combined stem+branch pillar into its two characters. Every
/// well-formed pillar is exactly 2 characters; anything else violates the
/// oracle's format invariant.
fn split_pillar(field: &'static str, value: Option<&str>) -> Result<(char, char)> {
    let raw = value.unwrap_or_default();
    let mut chars = raw.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(stem), Some(branch), None) => Ok((stem, branch)),
        _ => Err(SajuError::MalformedPillar {
            field,
            value: raw.to_string(),
        }),
    }
}

// Symbols the tables do not recognize degrade to the unknown sentinel
// instead of failing the request.
fn stem_relation(day_stem: Stem, c: char) -> String {
    Stem::from_char(c)
        .map(|target| ten_gods::classify(day_stem, target))
        .unwrap_or(TenGod::Unknown)
        .hangul()
        .to_string()
}

fn branch_relation(day_stem: Stem, c: char) -> String {
    Branch::from_char(c)
        .map(|branch| ten_gods::classify_branch(day_stem, branch))
        .unwrap_or(TenGod::Unknown)
        .hangul()
        .to_string()
}
