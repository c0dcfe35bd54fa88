//! Run tracing.
//!
//! Every dictionary probe made while stemming a word can be recorded as a
//! [`StepSummary`]. Recording is opt-in: the plain `stem` path keeps the step
//! list disabled and only pays for the [`Stages`] bitmask.

/// Which half of the cascade ran first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    PrefixFirst,
    SuffixFirst,
}

/// The part of the cascade that produced a probed candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// The input word itself.
    Lookup,
    Particle,
    Possessive,
    Derivational,
    Prefix,
    Recoding,
    Recombination,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Lookup => "lookup",
            Stage::Particle => "particle",
            Stage::Possessive => "possessive",
            Stage::Derivational => "derivational",
            Stage::Prefix => "prefix",
            Stage::Recoding => "recoding",
            Stage::Recombination => "recombination",
        }
    }
}

bitflags::bitflags! {
    /// Stages that took effect during a run, whether or not the path they
    /// were on reached the root.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Stages: u8 {
        const PARTICLE      = 1 << 0;
        const POSSESSIVE    = 1 << 1;
        const DERIVATIONAL  = 1 << 2;
        const PREFIX        = 1 << 3;
        const RECODING      = 1 << 4;
        const RECOMBINATION = 1 << 5;
    }
}

/// One dictionary probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSummary {
    pub stage: Stage,
    /// Rule (or suffix layer) that produced `word`, if any.
    pub rule: Option<&'static str>,
    /// The candidate that was looked up.
    pub word: String,
    /// Whether the dictionary contained `word`.
    pub hit: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct Trace {
    steps: Option<Vec<StepSummary>>,
    pub stages: Stages,
    pub branch: Option<Branch>,
}

impl Trace {
    pub fn disabled() -> Self {
        Trace { steps: None, stages: Stages::empty(), branch: None }
    }

    pub fn recording() -> Self {
        Trace { steps: Some(Vec::new()), stages: Stages::empty(), branch: None }
    }

    pub fn step(&mut self, stage: Stage, rule: Option<&'static str>, word: &str, hit: bool) {
        if let Some(steps) = &mut self.steps {
            steps.push(StepSummary { stage, rule, word: word.to_string(), hit });
        }
    }

    pub fn mark(&mut self, stages: Stages) {
        self.stages |= stages;
    }

    pub fn into_steps(self) -> Vec<StepSummary> {
        self.steps.unwrap_or_default()
    }
}
