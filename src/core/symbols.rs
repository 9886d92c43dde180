//! Calendrical symbol tables: the 10 heavenly stems and 12 earthly
//! branches, with their fixed element/polarity attributes and both
//! textual renderings (hangul and hanja). All data is static; nothing
//! here is constructed at runtime.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    /// Generating cycle (상생): wood→fire→earth→metal→water→wood.
    pub fn generates(self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// Controlling cycle (상극): wood→earth→water→fire→metal→wood.
    pub fn controls(self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Earth => Element::Water,
            Element::Water => Element::Fire,
            Element::Fire => Element::Metal,
            Element::Metal => Element::Wood,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Yang,
    Yin,
}

/// Heavenly stem (천간), in cycle order 갑을병정무기경신임계.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Gap,
        Stem::Eul,
        Stem::Byeong,
        Stem::Jeong,
        Stem::Mu,
        Stem::Gi,
        Stem::Gyeong,
        Stem::Sin,
        Stem::Im,
        Stem::Gye,
    ];

    pub fn hangul(self) -> char {
        match self {
            Stem::Gap => '갑',
            Stem::Eul => '을',
            Stem::Byeong => '병',
            Stem::Jeong => '정',
            Stem::Mu => '무',
            Stem::Gi => '기',
            Stem::Gyeong => '경',
            Stem::Sin => '신',
            Stem::Im => '임',
            Stem::Gye => '계',
        }
    }

    pub fn hanja(self) -> char {
        match self {
            Stem::Gap => '甲',
            Stem::Eul => '乙',
            Stem::Byeong => '丙',
            Stem::Jeong => '丁',
            Stem::Mu => '戊',
            Stem::Gi => '己',
            Stem::Gyeong => '庚',
            Stem::Sin => '辛',
            Stem::Im => '壬',
            Stem::Gye => '癸',
        }
    }

    pub fn element(self) -> Element {
        match self {
            Stem::Gap | Stem::Eul => Element::Wood,
            Stem::Byeong | Stem::Jeong => Element::Fire,
            Stem::Mu | Stem::Gi => Element::Earth,
            Stem::Gyeong | Stem::Sin => Element::Metal,
            Stem::Im | Stem::Gye => Element::Water,
        }
    }

    pub fn polarity(self) -> Polarity {
        match self {
            Stem::Gap | Stem::Byeong | Stem::Mu | Stem::Gyeong | Stem::Im => Polarity::Yang,
            Stem::Eul | Stem::Jeong | Stem::Gi | Stem::Sin | Stem::Gye => Polarity::Yin,
        }
    }

    /// Resolve a stem from either script.
    pub fn from_char(c: char) -> Option<Stem> {
        Stem::ALL
            .into_iter()
            .find(|s| s.hangul() == c || s.hanja() == c)
    }
}

/// Earthly branch (지지), in cycle order 자축인묘진사오미신유술해.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Ja,
        Branch::Chuk,
        Branch::In,
        Branch::Myo,
        Branch::Jin,
        Branch::Sa,
        Branch::O,
        Branch::Mi,
        Branch::Sin,
        Branch::Yu,
        Branch::Sul,
        Branch::Hae,
    ];

    pub fn hangul(self) -> char {
        match self {
            Branch::Ja => '자',
            Branch::Chuk => '축',
            Branch::In => '인',
            Branch::Myo => '묘',
            Branch::Jin => '진',
            Branch::Sa => '사',
            Branch::O => '오',
            Branch::Mi => '미',
            Branch::Sin => '신',
            Branch::Yu => '유',
            Branch::Sul => '술',
            Branch::Hae => '해',
        }
    }

    pub fn hanja(self) -> char {
        match self {
            Branch::Ja => '子',
            Branch::Chuk => '丑',
            Branch::In => '寅',
            Branch::Myo => '卯',
            Branch::Jin => '辰',
            Branch::Sa => '巳',
            Branch::O => '午',
            Branch::Mi => '未',
            Branch::Sin => '申',
            Branch::Yu => '酉',
            Branch::Sul => '戌',
            Branch::Hae => '亥',
        }
    }

    /// Dominant hidden stem (지장간 본기) used for branch relations.
    pub fn representative(self) -> Stem {
        match self {
            Branch::Ja => Stem::Gye,
            Branch::Chuk => Stem::Gi,
            Branch::In => Stem::Gap,
            Branch::Myo => Stem::Eul,
            Branch::Jin => Stem::Mu,
            Branch::Sa => Stem::Byeong,
            Branch::O => Stem::Jeong,
            Branch::Mi => Stem::Gi,
            Branch::Sin => Stem::Gyeong,
            Branch::Yu => Stem::Sin,
            Branch::Sul => Stem::Mu,
            Branch::Hae => Stem::Im,
        }
    }

    /// Resolve a branch from either script.
    pub fn from_char(c: char) -> Option<Branch> {
        Branch::ALL
            .into_iter()
            .find(|b| b.hangul() == c || b.hanja() == c)
    }
}

/// One calendrical unit: a (stem, branch) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub fn hangul(&self) -> String {
        format!("{}{}", self.stem.hangul(), self.branch.hangul())
    }

    pub fn hanja(&self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_stem_has_one_element_and_polarity() {
        // 10 stems = 5 elements x 2 polarities, in cycle order
        let expected = [
            (Element::Wood, Polarity::Yang),
            (Element::Wood, Polarity::Yin),
            (Element::Fire, Polarity::Yang),
            (Element::Fire, Polarity::Yin),
            (Element::Earth, Polarity::Yang),
            (Element::Earth, Polarity::Yin),
            (Element::Metal, Polarity::Yang),
            (Element::Metal, Polarity::Yin),
            (Element::Water, Polarity::Yang),
            (Element::Water, Polarity::Yin),
        ];
        for (stem, (element, polarity)) in Stem::ALL.into_iter().zip(expected) {
            assert_eq!(stem.element(), element, "element of {:?}", stem);
            assert_eq!(stem.polarity(), polarity, "polarity of {:?}", stem);
        }
    }

    #[test]
    fn test_generating_cycle_closes_after_five_steps() {
        let mut element = Element::Wood;
        for _ in 0..5 {
            element = element.generates();
        }
        assert_eq!(element, Element::Wood);
    }

    #[test]
    fn test_controlling_cycle_closes_after_five_steps() {
        let mut element = Element::Water;
        for _ in 0..5 {
            element = element.controls();
        }
        assert_eq!(element, Element::Water);
    }

    #[test]
    fn test_representative_stems_full_table() {
        let expected = [
            (Branch::Ja, Stem::Gye),
            (Branch::Chuk, Stem::Gi),
            (Branch::In, Stem::Gap),
            (Branch::Myo, Stem::Eul),
            (Branch::Jin, Stem::Mu),
            (Branch::Sa, Stem::Byeong),
            (Branch::O, Stem::Jeong),
            (Branch::Mi, Stem::Gi),
            (Branch::Sin, Stem::Gyeong),
            (Branch::Yu, Stem::Sin),
            (Branch::Sul, Stem::Mu),
            (Branch::Hae, Stem::Im),
        ];
        for (branch, stem) in expected {
            assert_eq!(branch.representative(), stem, "representative of {:?}", branch);
        }
    }

    #[test]
    fn test_from_char_resolves_both_scripts() {
        for stem in Stem::ALL {
            assert_eq!(Stem::from_char(stem.hangul()), Some(stem));
            assert_eq!(Stem::from_char(stem.hanja()), Some(stem));
        }
        for branch in Branch::ALL {
            assert_eq!(Branch::from_char(branch.hangul()), Some(branch));
            assert_eq!(Branch::from_char(branch.hanja()), Some(branch));
        }
        assert_eq!(Stem::from_char('x'), None);
        assert_eq!(Branch::from_char('자'), Some(Branch::Ja));
    }

    #[test]
    fn test_hangul_sin_is_both_a_stem_and_a_branch() {
        // '신' resolves per symbol class: stem 辛 vs branch 申
        assert_eq!(Stem::from_char('신'), Some(Stem::Sin));
        assert_eq!(Branch::from_char('신'), Some(Branch::Sin));
        assert_eq!(Stem::Sin.hanja(), '辛');
        assert_eq!(Branch::Sin.hanja(), '申');
    }

    #[test]
    fn test_pillar_rendering() {
        let pillar = Pillar {
            stem: Stem::Gye,
            branch: Branch::Sa,
        };
        assert_eq!(pillar.hangul(), "계사");
        assert_eq!(pillar.hanja(), "癸巳");
    }
}
