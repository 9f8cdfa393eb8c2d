// Verdict mapper — turns the aggregate score into a discrete outcome.
//
// Two parallel tracks share the same thresholds. When any red flag is
// present every threshold lands one tier worse than it would otherwise.

use serde::Serialize;

/// Score thresholds, checked top-down with `>=`.
pub const STRONG_THRESHOLD: i32 = 50;
pub const POSITIVE_THRESHOLD: i32 = 20;
pub const NEUTRAL_THRESHOLD: i32 = -20;
pub const NEGATIVE_THRESHOLD: i32 = -50;

/// Presentation class for a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayClass {
    Real,
    Fake,
    Uncertain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerdictTier {
    LikelyReal,
    ProbablyReal,
    PossiblyReal,
    Uncertain,
    Suspicious,
    LikelyFake,
    DefinitelyFake,
}

impl VerdictTier {
    /// Pick the tier for a score. Total over all inputs, no gaps.
    pub fn from_score(score: i32, has_red_flags: bool) -> Self {
        if has_red_flags {
            match score {
                s if s >= STRONG_THRESHOLD => VerdictTier::PossiblyReal,
                s if s >= POSITIVE_THRESHOLD => VerdictTier::Uncertain,
                s if s >= NEUTRAL_THRESHOLD => VerdictTier::Suspicious,
                s if s >= NEGATIVE_THRESHOLD => VerdictTier::LikelyFake,
                _ => VerdictTier::DefinitelyFake,
            }
        } else {
            match score {
                s if s >= STRONG_THRESHOLD => VerdictTier::LikelyReal,
                s if s >= POSITIVE_THRESHOLD => VerdictTier::ProbablyReal,
                s if s >= NEUTRAL_THRESHOLD => VerdictTier::Uncertain,
                s if s >= NEGATIVE_THRESHOLD => VerdictTier::Suspicious,
                _ => VerdictTier::LikelyFake,
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictTier::LikelyReal => "Likely Real",
            VerdictTier::ProbablyReal => "Probably Real",
            VerdictTier::PossiblyReal => "Possibly Real",
            VerdictTier::Uncertain => "Uncertain",
            VerdictTier::Suspicious => "Suspicious",
            VerdictTier::LikelyFake => "Likely Fake",
            VerdictTier::DefinitelyFake => "Definitely Fake",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            VerdictTier::LikelyReal => {
                "This link appears to be legitimate. It shows multiple positive indicators and no red flags."
            }
            VerdictTier::ProbablyReal => {
                "This link shows mostly legitimate characteristics. Exercise normal caution."
            }
            VerdictTier::PossiblyReal => {
                "This link looks legitimate overall, but some warning signs were found. Verify before trusting it."
            }
            VerdictTier::Uncertain => {
                "This link has mixed indicators and the analysis is inconclusive. Verify independently before proceeding."
            }
            VerdictTier::Suspicious => {
                "This link has concerning characteristics that suggest it may be fake. Exercise extreme caution."
            }
            VerdictTier::LikelyFake => {
                "This link shows multiple strong indicators of being fake. Avoid clicking and verify independently."
            }
            VerdictTier::DefinitelyFake => {
                "This link matches many known scam and fake-content patterns. Do not open it or share it."
            }
        }
    }

    pub fn display_class(&self) -> DisplayClass {
        match self {
            VerdictTier::LikelyReal | VerdictTier::ProbablyReal => DisplayClass::Real,
            VerdictTier::PossiblyReal | VerdictTier::Uncertain => DisplayClass::Uncertain,
            VerdictTier::Suspicious | VerdictTier::LikelyFake | VerdictTier::DefinitelyFake => {
                DisplayClass::Fake
            }
        }
    }
}

impl std::fmt::Display for VerdictTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The verdict record handed to presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub tier: VerdictTier,
    pub title: String,
    pub description: String,
    pub display_class: DisplayClass,
}

impl From<VerdictTier> for Verdict {
    fn from(tier: VerdictTier) -> Self {
        Self {
            tier,
            title: tier.as_str().to_string(),
            description: tier.description().to_string(),
            display_class: tier.display_class(),
        }
    }
}

/// Map `(score, has_red_flags)` to a verdict.
pub fn determine_verdict(score: i32, has_red_flags: bool) -> Verdict {
    VerdictTier::from_score(score, has_red_flags).into()
}
