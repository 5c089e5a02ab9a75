//! Console lines for `pllcalc`.
//!
//! Exact matches echo the requested clock as typed; approximations print the achieved
//! frequency in `%g` style. The wording, including the double space in the simple mode
//! exact line, matches what existing scripts around the tool already parse.

use super::search::{Dividers, ModeResult, PllCandidate, SearchOutcome};
use crate::core::format::format_general;

/// Lines to print for a finished search, in order.
pub fn report_lines(outcome: &SearchOutcome, desired_hz: i64) -> Vec<String> {
    match outcome {
        SearchOutcome::NonSimpleExact(candidate) => {
            vec![non_simple_exact_line(&candidate.dividers, desired_hz)]
        }
        SearchOutcome::Searched { non_simple, simple } => {
            let simple_line = match simple {
                ModeResult::Exact(candidate) => simple_exact_line(&candidate.dividers, desired_hz),
                ModeResult::Best(candidate) => simple_best_line(candidate),
            };
            vec![non_simple_best_line(non_simple), simple_line]
        }
    }
}

pub fn non_simple_exact_line(dividers: &Dividers, desired_hz: i64) -> String {
    format!(
        "Perfect frequency match for {}hz : divf = {} divr = {} divq = 0",
        desired_hz, dividers.divf, dividers.divr
    )
}

pub fn non_simple_best_line(candidate: &PllCandidate) -> String {
    format!(
        "Best non simple mode PLL is a frequency of {}hz : divf = {} divr = {}",
        format_general(candidate.frequency),
        candidate.dividers.divf,
        candidate.dividers.divr
    )
}

pub fn simple_exact_line(dividers: &Dividers, desired_hz: i64) -> String {
    format!(
        "Perfect simple mode frequency match for {}hz :  divf = {} divr = {} divq = {}",
        desired_hz,
        dividers.divf,
        dividers.divr,
        dividers.divq.unwrap_or(0)
    )
}

pub fn simple_best_line(candidate: &PllCandidate) -> String {
    format!(
        "Best simple mode PLL is a frequency of {}hz : divf = {} divr = {} divq = {}",
        format_general(candidate.frequency),
        candidate.dividers.divf,
        candidate.dividers.divr,
        candidate.dividers.divq.unwrap_or(0)
    )
}
