use std::fmt;

/// Six fixed age buckets used for both drivers and casualties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgeBand {
    Child,
    Teenager,
    YoungAdult,
    Adult,
    OlderAdult,
    Old,
}

impl AgeBand {
    pub const ALL: [AgeBand; 6] = [
        AgeBand::Child,
        AgeBand::Teenager,
        AgeBand::YoungAdult,
        AgeBand::Adult,
        AgeBand::OlderAdult,
        AgeBand::Old,
    ];

    /// Total over all integers. 12 counts as a Teenager.
    pub fn from_age(age: i32) -> Self {
        match age {
            a if a < 12 => AgeBand::Child,
            12..=19 => AgeBand::Teenager,
            20..=30 => AgeBand::YoungAdult,
            31..=40 => AgeBand::Adult,
            41..=50 => AgeBand::OlderAdult,
            _ => AgeBand::Old,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeBand::Child => "Child (<12)",
            AgeBand::Teenager => "Teenager (12 - 20)",
            AgeBand::YoungAdult => "Young Adult (20 - 30)",
            AgeBand::Adult => "Adult (30 - 40)",
            AgeBand::OlderAdult => "Older Adult (40 - 50)",
            AgeBand::Old => "Old (50+)",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Missing ages have no band.
pub fn binnify(age: Option<i32>) -> Option<AgeBand> {
    age.map(AgeBand::from_age)
}
