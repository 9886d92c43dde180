//! Hour pillar (시주) derivation from clock time and the day stem.

use crate::core::symbols::{Branch, Pillar, Stem};
use crate::utils::error::{Result, SajuError};

use crate::core::symbols::Stem::*;

// 시두법 테이블: row = day stem (cycle order), column = hour branch index.
// Reproduced verbatim from the reference data; the table is the artifact,
// it is not derived from a starting-stem formula.
const HOUR_STEM_TABLE: [[Stem; 12]; 10] = [
    // 갑
    [Gap, Eul, Byeong, Jeong, Mu, Gi, Gyeong, Sin, Im, Gye, Gap, Eul],
    // 을
    [Byeong, Jeong, Mu, Gi, Gyeong, Sin, Im, Gye, Gap, Eul, Byeong, Jeong],
    // 병
    [Mu, Gi, Gyeong, Sin, Im, Gye, Gap, Eul, Byeong, Jeong, Mu, Gi],
    // 정
    [Gyeong, Sin, Im, Gye, Gap, Eul, Byeong, Jeong, Mu, Gi, Gyeong, Sin],
    // 무
    [Im, Gye, Gap, Eul, Byeong, Jeong, Mu, Gi, Gyeong, Sin, Im, Gye],
    // 기
    [Im, Gye, Gap, Eul, Byeong, Jeong, Mu, Gi, Gyeong, Sin, Im, Gye],
    // 경
    [Gap, Eul, Byeong, Jeong, Mu, Gi, Gyeong, Sin, Im, Gye, Gap, Eul],
    // 신
    [Byeong, Jeong, Mu, Gi, Gyeong, Sin, Im, Gye, Gap, Eul, Byeong, Jeong],
    // 임
    [Mu, Gi, Gyeong, Sin, Im, Gye, Gap, Eul, Byeong, Jeong, Mu, Gi],
    // 계
    [Gyeong, Sin, Im, Gye, Gap, Eul, Byeong, Jeong, Mu, Gi, Gyeong, Sin],
];

/// Compute the hour pillar for a `"HH:MM"` clock time and day stem.
///
/// The day runs in twelve two-hour blocks; the +60 minute shift centers
/// the blocks so 23:00–00:59 lands on branch index 0 (자).
pub fn compute(time: &str, day_stem: Stem) -> Result<Pillar> {
    let (hour, minute) = parse_time(time)?;
    let index = branch_index(hour, minute);

    let branch = Branch::ALL[index];
    let stem = HOUR_STEM_TABLE[day_stem as usize][index];

    Ok(Pillar { stem, branch })
}

pub(crate) fn branch_index(hour: u32, minute: u32) -> usize {
    (((hour * 60 + minute + 60) / 120) % 12) as usize
}

fn parse_time(time: &str) -> Result<(u32, u32)> {
    let invalid = || SajuError::InvalidTime {
        value: time.to_string(),
    };

    let (h, m) = time.split_once(':').ok_or_else(invalid)?;
    let hour: u32 = h.parse().map_err(|_| invalid())?;
    let minute: u32 = m.parse().map_err(|_| invalid())?;

    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    Ok((hour, minute))
}
