use serde::Serialize;

/// Lowest total that counts as a pass.
pub const PASS_MARK: i32 = 50;

/// Letter grade bracket for a course total.
///
/// | Total  | Grade | Point |
/// |--------|-------|-------|
/// | >= 90  | O     | 10    |
/// | >= 80  | A+    | 9     |
/// | >= 70  | A     | 8     |
/// | >= 60  | B+    | 7     |
/// | >= 55  | B     | 6     |
/// | >= 50  | C     | 5     |
/// | < 50   | F     | 0     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    #[serde(rename = "O")]
    O,
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "F")]
    F,
}

impl Grade {
    /// Total over every integer; anything below 50, negatives included, is `F`.
    pub fn from_total(total: i32) -> Self {
        match total {
            t if t >= 90 => Grade::O,
            t if t >= 80 => Grade::APlus,
            t if t >= 70 => Grade::A,
            t if t >= 60 => Grade::BPlus,
            t if t >= 55 => Grade::B,
            t if t >= 50 => Grade::C,
            _ => Grade::F,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::O => "O",
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::C => "C",
            Grade::F => "F",
        }
    }

    pub fn point(self) -> u8 {
        match self {
            Grade::O => 10,
            Grade::APlus => 9,
            Grade::A => 8,
            Grade::BPlus => 7,
            Grade::B => 6,
            Grade::C => 5,
            Grade::F => 0,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub fn grade_point(total: i32) -> u8 {
    Grade::from_total(total).point()
}

pub fn grade_label(total: i32) -> &'static str {
    Grade::from_total(total).label()
}

pub fn passed(total: i32) -> bool {
    total >= PASS_MARK
}
