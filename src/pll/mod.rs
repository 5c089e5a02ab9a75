//! iCE40 PLL divider calculation.
//!
//! - [`search`] - exhaustive search over `divr`/`divf`/`divq` for both feedback modes
//! - [`report`] - console lines describing the outcome

pub mod report;
pub mod search;

pub use report::report_lines;
pub use search::{
    search, Dividers, ModeResult, PllCandidate, PllMode, PllSearcher, SearchOutcome, DIVF_MAX,
    DIVQ_MAX, DIVR_MAX, EXACT_MATCH_TOLERANCE,
};
