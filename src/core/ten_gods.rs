//! Ten Gods (십성) classification: each stem or branch is labelled by its
//! elemental relation to the day stem.

use crate::core::symbols::{Branch, Stem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    Bigyeon,
    Geopjae,
    Siksin,
    Sanggwan,
    Pyeonjae,
    Jeongjae,
    Pyeongwan,
    Jeonggwan,
    Pyeonin,
    Jeongin,
    /// Defensive sentinel for symbols outside the defined tables; never
    /// produced for any pair of the 10 stems.
    Unknown,
}

impl TenGod {
    pub fn hangul(self) -> &'static str {
        match self {
            TenGod::Bigyeon => "비견",
            TenGod::Geopjae => "겁재",
            TenGod::Siksin => "식신",
            TenGod::Sanggwan => "상관",
            TenGod::Pyeonjae => "편재",
            TenGod::Jeongjae => "정재",
            TenGod::Pyeongwan => "편관",
            TenGod::Jeonggwan => "정관",
            TenGod::Pyeonin => "편인",
            TenGod::Jeongin => "정인",
            TenGod::Unknown => "미상",
        }
    }

    pub fn hanja(self) -> &'static str {
        match self {
            TenGod::Bigyeon => "比肩",
            TenGod::Geopjae => "劫財",
            TenGod::Siksin => "食神",
            TenGod::Sanggwan => "傷官",
            TenGod::Pyeonjae => "偏財",
            TenGod::Jeongjae => "正財",
            TenGod::Pyeongwan => "偏官",
            TenGod::Jeonggwan => "正官",
            TenGod::Pyeonin => "偏印",
            TenGod::Jeongin => "正印",
            TenGod::Unknown => "未詳",
        }
    }
}

/// Classify `target` relative to `day`. First matching rule wins.
pub fn classify(day: Stem, target: Stem) -> TenGod {
    if target == day {
        return TenGod::Bigyeon;
    }

    let day_element = day.element();
    let target_element = target.element();
    let same_polarity = day.polarity() == target.polarity();

    if day_element == target_element {
        return if same_polarity {
            TenGod::Bigyeon
        } else {
            TenGod::Geopjae
        };
    }

    if day_element.generates() == target_element {
        return if same_polarity {
            TenGod::Siksin
        } else {
            TenGod::Sanggwan
        };
    }

    if day_element.controls() == target_element {
        return if same_polarity {
            TenGod::Pyeonjae
        } else {
            TenGod::Jeongjae
        };
    }

    if target_element.controls() == day_element {
        return if same_polarity {
            TenGod::Pyeongwan
        } else {
            TenGod::Jeonggwan
        };
    }

    if target_element.generates() == day_element {
        return if same_polarity {
            TenGod::Pyeonin
        } else {
            TenGod::Jeongin
        };
    }

    // unreachable for the 10 defined stems
    TenGod::Unknown
}

/// Classify a branch via its representative stem.
pub fn classify_branch(day: Stem, branch: Branch) -> TenGod {
    classify(day, branch.representative())
}
