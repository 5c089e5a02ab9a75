// This module implements the exhaustive iCE40 PLL divider search used by pllcalc. The PLL
// output in non-simple (feedback) mode is F_REF * (DIVF+1) / (DIVR+1); simple mode adds a
// 2^DIVQ post-divider. The search space is small (1024 and 8192 candidates) so every
// triple is evaluated in a fixed order: divr outermost, then divf, then divq. A candidate
// within 1e-6 Hz of the target ends the search for that mode immediately, so the first
// exact triple in iteration order wins. Otherwise the closest candidate is kept, with ties
// resolved in favor of the earlier one. An exact non-simple match also skips the simple
// mode search entirely; SearchOutcome records which of the two shapes happened.

//! Exhaustive PLL divider search.

use std::fmt;

/// Largest reference divider value.
pub const DIVR_MAX: u8 = 15;

/// Largest feedback divider value.
pub const DIVF_MAX: u8 = 63;

/// Largest post-divider exponent (simple mode only).
pub const DIVQ_MAX: u8 = 7;

/// Absolute distance in Hz below which a candidate counts as an exact match.
pub const EXACT_MATCH_TOLERANCE: f64 = 1e-6;

const NO_DIVQ: [Option<u8>; 1] = [None];
const ALL_DIVQ: [Option<u8>; DIVQ_MAX as usize + 1] = [
    Some(0),
    Some(1),
    Some(2),
    Some(3),
    Some(4),
    Some(5),
    Some(6),
    Some(7),
];

/// PLL feedback mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PllMode {
    /// `F_REF * (DIVF+1) / (DIVR+1)`
    NonSimple,
    /// `F_REF * (DIVF+1) / (2^DIVQ * (DIVR+1))`
    Simple,
}

impl PllMode {
    fn divq_values(self) -> &'static [Option<u8>] {
        match self {
            PllMode::NonSimple => &NO_DIVQ,
            PllMode::Simple => &ALL_DIVQ,
        }
    }

    /// Every divider setting for this mode, in search order.
    pub fn dividers(self) -> impl Iterator<Item = Dividers> {
        let divqs = self.divq_values();
        (0..=DIVR_MAX).flat_map(move |divr| {
            (0..=DIVF_MAX).flat_map(move |divf| {
                divqs.iter().map(move |&divq| Dividers { divr, divf, divq })
            })
        })
    }

    /// Size of this mode's search space.
    pub fn candidate_count(self) -> usize {
        (DIVR_MAX as usize + 1) * (DIVF_MAX as usize + 1) * self.divq_values().len()
    }
}

impl fmt::Display for PllMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PllMode::NonSimple => write!(f, "non simple"),
            PllMode::Simple => write!(f, "simple"),
        }
    }
}

/// One divider setting. `divq` is present only in simple mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dividers {
    pub divr: u8,
    pub divf: u8,
    pub divq: Option<u8>,
}

impl Dividers {
    pub fn mode(&self) -> PllMode {
        if self.divq.is_some() {
            PllMode::Simple
        } else {
            PllMode::NonSimple
        }
    }

    /// PLL output frequency for a reference clock in Hz.
    pub fn output_frequency(&self, ref_hz: f64) -> f64 {
        let numerator = ref_hz * f64::from(self.divf + 1);
        match self.divq {
            None => numerator / f64::from(self.divr + 1),
            Some(divq) => numerator / (f64::from(1u32 << divq) * f64::from(self.divr + 1)),
        }
    }
}

/// An evaluated divider setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PllCandidate {
    pub dividers: Dividers,
    pub frequency: f64,
    /// `|frequency - desired|`
    pub distance: f64,
}

impl PllCandidate {
    pub fn evaluate(dividers: Dividers, ref_hz: f64, desired_hz: f64) -> Self {
        let frequency = dividers.output_frequency(ref_hz);
        Self {
            dividers,
            frequency,
            distance: (frequency - desired_hz).abs(),
        }
    }

    pub fn is_exact(&self) -> bool {
        self.distance < EXACT_MATCH_TOLERANCE
    }
}

/// Result of searching a single mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModeResult {
    /// First candidate within tolerance; the rest of the mode was not searched.
    Exact(PllCandidate),
    /// Closest candidate over the whole mode.
    Best(PllCandidate),
}

impl ModeResult {
    pub fn candidate(&self) -> &PllCandidate {
        match self {
            ModeResult::Exact(candidate) | ModeResult::Best(candidate) => candidate,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, ModeResult::Exact(_))
    }
}

/// Result of the two-mode search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchOutcome {
    /// Non-simple mode matched exactly; simple mode was never searched.
    NonSimpleExact(PllCandidate),
    /// Non-simple mode had no exact match, so both modes were searched.
    Searched {
        non_simple: PllCandidate,
        simple: ModeResult,
    },
}

/// Divider search for one reference/target clock pair.
#[derive(Debug, Clone, Copy)]
pub struct PllSearcher {
    ref_hz: f64,
    desired_hz: f64,
}

impl PllSearcher {
    pub fn new(ref_hz: f64, desired_hz: f64) -> Self {
        Self { ref_hz, desired_hz }
    }

    /// Search one mode to completion or to its first exact match.
    pub fn search_mode(&self, mode: PllMode) -> ModeResult {
        let mut best: Option<PllCandidate> = None;

        for dividers in mode.dividers() {
            let candidate = PllCandidate::evaluate(dividers, self.ref_hz, self.desired_hz);
            if candidate.is_exact() {
                log::debug!("Exact {} mode match: {:?}", mode, candidate.dividers);
                return ModeResult::Exact(candidate);
            }
            if best.map_or(true, |b| candidate.distance < b.distance) {
                log::trace!(
                    "{} mode improved to {} Hz (distance {}) with {:?}",
                    mode,
                    candidate.frequency,
                    candidate.distance,
                    candidate.dividers
                );
                best = Some(candidate);
            }
        }

        match best {
            Some(best) => {
                log::debug!(
                    "Best {} mode candidate after {} evaluations: {} Hz {:?}",
                    mode,
                    mode.candidate_count(),
                    best.frequency,
                    best.dividers
                );
                ModeResult::Best(best)
            }
            None => unreachable!("{} mode search space is empty", mode),
        }
    }

    /// Search non-simple mode, then simple mode unless non-simple matched exactly.
    pub fn search(&self) -> SearchOutcome {
        let non_simple = match self.search_mode(PllMode::NonSimple) {
            ModeResult::Exact(candidate) => return SearchOutcome::NonSimpleExact(candidate),
            ModeResult::Best(candidate) => candidate,
        };
        SearchOutcome::Searched {
            non_simple,
            simple: self.search_mode(PllMode::Simple),
        }
    }
}

/// Run the two-mode search for `ref_hz` -> `desired_hz`.
pub fn search(ref_hz: f64, desired_hz: f64) -> SearchOutcome {
    PllSearcher::new(ref_hz, desired_hz).search()
}
