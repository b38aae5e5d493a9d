//! Risk-profile quiz: one selected choice maps to one fixed verdict.

pub const SELECT_PROMPT: &str = "Please select an option.";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RiskProfile {
    Aggressive,
    Moderate,
    Conservative,
}

impl RiskProfile {
    pub const ALL: [RiskProfile; 3] = [
        RiskProfile::Aggressive,
        RiskProfile::Moderate,
        RiskProfile::Conservative,
    ];

    pub fn value(self) -> &'static str {
        match self {
            RiskProfile::Aggressive => "aggressive",
            RiskProfile::Moderate => "moderate",
            RiskProfile::Conservative => "conservative",
        }
    }

    pub fn from_value(raw: &str) -> Option<RiskProfile> {
        Self::ALL.into_iter().find(|p| p.value() == raw)
    }

    /// The radio option shown to the reader.
    pub fn label(self) -> &'static str {
        match self {
            RiskProfile::Aggressive => "A 20% market dip is a buying opportunity",
            RiskProfile::Moderate => "I stay invested but stop adding money in a dip",
            RiskProfile::Conservative => "I would sell to protect what I have",
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            RiskProfile::Aggressive => {
                "You have an Aggressive risk profile. You see market dips as opportunities."
            }
            RiskProfile::Moderate => {
                "You have a Moderate risk profile. You are cautious but optimistic for the long term."
            }
            RiskProfile::Conservative => {
                "You have a Conservative risk profile. You prioritize capital protection over high returns."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_value_round_trips() {
        for profile in RiskProfile::ALL {
            assert_eq!(RiskProfile::from_value(profile.value()), Some(profile));
        }
    }

    #[test]
    fn unknown_values_map_to_nothing() {
        assert_eq!(RiskProfile::from_value("reckless"), None);
        assert_eq!(RiskProfile::from_value(""), None);
    }

    #[test]
    fn verdicts_are_the_fixed_sentences() {
        assert_eq!(
            RiskProfile::Aggressive.verdict(),
            "You have an Aggressive risk profile. You see market dips as opportunities."
        );
        assert_eq!(
            RiskProfile::Moderate.verdict(),
            "You have a Moderate risk profile. You are cautious but optimistic for the long term."
        );
        assert_eq!(
            RiskProfile::Conservative.verdict(),
            "You have a Conservative risk profile. You prioritize capital protection over high returns."
        );
    }
}
