// THEORY:
// The photograph set is fixed: two recording conditions, each shot at five
// distances. Instead of a mutable counter walking nested lists, `label_pairs` is a
// pure generator yielding the ten (condition, distance) pairs in the order rows must
// appear in the output: every distance for `BG` first, then every distance for
// `OF`, distances ascending.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Botanical garden.
    Bg,
    /// Open field.
    Of,
}

impl Condition {
    pub const ALL: [Condition; 2] = [Condition::Bg, Condition::Of];

    pub fn label(self) -> &'static str {
        match self {
            Condition::Bg => "BG",
            Condition::Of => "OF",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Distance {
    M100,
    M200,
    M300,
    M400,
    M500,
}

impl Distance {
    pub const ALL: [Distance; 5] = [
        Distance::M100,
        Distance::M200,
        Distance::M300,
        Distance::M400,
        Distance::M500,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Distance::M100 => "100m",
            Distance::M200 => "200m",
            Distance::M300 => "300m",
            Distance::M400 => "400m",
            Distance::M500 => "500m",
        }
    }

    pub fn meters(self) -> u32 {
        match self {
            Distance::M100 => 100,
            Distance::M200 => 200,
            Distance::M300 => 300,
            Distance::M400 => 400,
            Distance::M500 => 500,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One photograph of the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelPair {
    pub condition: Condition,
    pub distance: Distance,
}

impl LabelPair {
    /// `<condition>_<distance>.jpg`
    pub fn file_name(&self) -> String {
        format!("{}_{}.jpg", self.condition, self.distance)
    }
}

/// Total number of photographs, and rows, in a run.
pub const PAIR_COUNT: usize = Condition::ALL.len() * Distance::ALL.len();

/// All pairs in output order.
pub fn label_pairs() -> impl Iterator<Item = LabelPair> + Clone {
    Condition::ALL.into_iter().flat_map(|condition| {
        Distance::ALL
            .into_iter()
            .map(move |distance| LabelPair { condition, distance })
    })
}
