//! Line-oriented extractor for State → LGA → Ward tables.
//!
//! The input is the text dump of a multi-hundred-page tabular PDF. Column
//! and row geometry is gone: every cell arrives as whitespace-separated
//! tokens, long names wrap onto following lines, and page footers and page
//! numbers are interleaved with the data. The extractor recovers the table
//! in a single forward pass:
//!
//! 1. **Classification** ([`classify`]) sorts each line into footer, bare
//!    numeral, mode marker, column label, state header or data row.
//! 2. **Lookahead** ([`lookahead`]) resolves bare numerals (ward code,
//!    polling-unit count or page number) and bare state names by scanning a
//!    bounded window of following lines.
//! 3. **Splitting** ([`split`]) partitions a data row around its two-digit
//!    codes according to the active table layout.
//! 4. **Wrap buffers** hold LGA and ward name fragments until the row that
//!    completes them arrives.
//! 5. **Cleanup** removes duplicate wards, empty LGAs and empty states.
//!
//! The scan never fails. Lines it cannot use are dropped and recorded in
//! [`ExtractionDiagnostics`] with a [`DropReason`].
//!
//! The primary entry point is [`WardExtractor::extract`]; most consumers
//! should use [`extract_lines`](crate::extract_lines) or
//! [`extract_with_report`](crate::extract_with_report) instead.

pub mod classify;
pub mod lookahead;
pub mod split;

mod accumulator;
mod buffer;
mod clean;
mod diagnostics;
mod states;
mod util;

use tracing::{debug, info};

use ward_hierarchy_core::{TableMode, WardHierarchy, normalize_name};

use crate::config::ExtractorConfig;
use accumulator::Accumulator;
use buffer::{Fragment, OverflowPolicy, PushOutcome, WrapBuffer};
use classify::{LineClass, LineContext, classify_line};
use lookahead::{NumeralContext, NumeralRole, resolve_numeral};
use split::{LgaName, RowShape, looks_like_new_row, split_row, starts_with_code};

pub use clean::{CleanSummary, clean_hierarchy};
pub use diagnostics::{DropReason, DroppedLine, ExtractionDiagnostics};
pub use states::{FCT_KEY, KNOWN_STATES, is_known_state};

/// Result of one extraction.
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    /// The cleaned hierarchy.
    pub hierarchy: WardHierarchy,
    pub diagnostics: ExtractionDiagnostics,
    /// What the post-scan cleanup removed.
    pub cleanup: CleanSummary,
}

/// Extractor for linearized ward tables.
///
/// Each call to [`extract`](Self::extract) runs an independent scan with its
/// own state, so one extractor can be shared freely.
///
/// # Examples
///
/// ```
/// use ward_hierarchy_extract::{ExtractorConfig, WardExtractor};
///
/// let lines = [
///     "LAGOS STATE",
///     "LGA NAME LGA",
///     "IKEJA 05 OJODU WARD I 01",
///     "OJODU WARD II 02",
/// ];
/// let outcome = WardExtractor::new(ExtractorConfig::default()).extract(&lines);
///
/// assert_eq!(
///     outcome.hierarchy.wards("LAGOS", "IKEJA").unwrap(),
///     ["OJODU WARD I", "OJODU WARD II"]
/// );
/// assert_eq!(outcome.diagnostics.state_headers, ["LAGOS"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WardExtractor {
    config: ExtractorConfig,
}

impl WardExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Scans `lines` in order and returns the cleaned hierarchy.
    pub fn extract<S: AsRef<str>>(&self, lines: &[S]) -> ExtractionOutcome {
        let mut scan = Scan::new(lines, &self.config);
        for index in 0..lines.len() {
            scan.step(index);
        }
        let (hierarchy, diagnostics) = scan.finish();
        let (hierarchy, cleanup) = clean_hierarchy(hierarchy);

        info!(
            lines = diagnostics.total_lines,
            states = hierarchy.state_count(),
            lgas = hierarchy.lga_count(),
            wards = hierarchy.ward_count(),
            dropped = diagnostics.dropped.len(),
            "Extraction complete"
        );

        ExtractionOutcome {
            hierarchy,
            diagnostics,
            cleanup,
        }
    }
}

/// Working memory of one scan.
#[derive(Debug)]
struct ParseState {
    mode: TableMode,
    lga_fragments: WrapBuffer,
    ward_fragments: WrapBuffer,
    pending_pu_count: Option<String>,
    /// The previous line was a page footer.
    prev_was_footer: bool,
    /// The previous line ended a page. Starts `true` so a bare state name on
    /// the first line opens a section.
    prev_was_page_break: bool,
}

impl ParseState {
    fn new(wrap_capacity: usize) -> Self {
        Self {
            mode: TableMode::Basic,
            lga_fragments: WrapBuffer::new(wrap_capacity, OverflowPolicy::EvictOldest),
            ward_fragments: WrapBuffer::new(wrap_capacity, OverflowPolicy::Discard),
            pending_pu_count: None,
            prev_was_footer: false,
            prev_was_page_break: true,
        }
    }
}

struct Scan<'a, S> {
    lines: &'a [S],
    window: usize,
    state: ParseState,
    acc: Accumulator,
    diagnostics: ExtractionDiagnostics,
}

impl<'a, S: AsRef<str>> Scan<'a, S> {
    fn new(lines: &'a [S], config: &ExtractorConfig) -> Self {
        Self {
            lines,
            window: config.lookahead_window,
            state: ParseState::new(config.wrap_capacity),
            acc: Accumulator::new(&config.default_state_key()),
            diagnostics: ExtractionDiagnostics {
                total_lines: lines.len(),
                ..Default::default()
            },
        }
    }

    fn step(&mut self, index: usize) {
        let text = normalize_name(self.lines[index].as_ref());
        if text.is_empty() {
            return;
        }

        let class = classify_line(&LineContext {
            lines: self.lines,
            index,
            text: &text,
            window: self.window,
            prev_was_page_break: self.state.prev_was_page_break,
        });
        let prev_was_footer = std::mem::replace(&mut self.state.prev_was_footer, false);

        match class {
            LineClass::Footer => {
                self.diagnostics.record(index, &text, DropReason::Footer);
                self.state.prev_was_footer = true;
                self.state.prev_was_page_break = true;
            }
            LineClass::Numeral => self.handle_numeral(index, &text, prev_was_footer),
            LineClass::ModeMarker => {
                if self.state.mode != TableMode::WithPuCount {
                    debug!(index, state = self.acc.current_state(), "Switching to PU-count layout");
                    self.diagnostics.mode_switches += 1;
                }
                self.state.mode = TableMode::WithPuCount;
            }
            LineClass::Noise => self.diagnostics.record(index, &text, DropReason::Noise),
            LineClass::StateHeader(key) => self.enter_state(index, &key),
            LineClass::DataRow => {
                self.handle_data_row(index, &text);
                self.state.prev_was_page_break = false;
            }
        }
    }

    fn finish(mut self) -> (WardHierarchy, ExtractionDiagnostics) {
        let leftovers = self.state.ward_fragments.take();
        self.record_all(leftovers, DropReason::WrapAborted);
        let leftovers = self.state.lga_fragments.take();
        self.record_all(leftovers, DropReason::WrapAborted);
        (self.acc.into_hierarchy(), self.diagnostics)
    }

    fn handle_numeral(&mut self, index: usize, digits: &str, prev_was_footer: bool) {
        let context = NumeralContext {
            mode: self.state.mode,
            has_pending_ward: !self.state.ward_fragments.is_empty(),
            has_pending_pu_count: self.state.pending_pu_count.is_some(),
            prev_was_footer,
        };

        match resolve_numeral(digits, &context, self.lines, index, self.window) {
            NumeralRole::WardCode => {
                let ward = self.state.ward_fragments.take_joined();
                self.state.pending_pu_count = None;
                self.add_ward(index, &ward);
                self.state.prev_was_page_break = false;
            }
            NumeralRole::PuCount => {
                self.state.pending_pu_count = Some(digits.to_string());
                self.state.prev_was_page_break = false;
            }
            NumeralRole::PageNumber => {
                self.diagnostics.record(index, digits, DropReason::PageNumber);
                self.state.prev_was_page_break = true;
            }
            NumeralRole::Stray => {
                self.diagnostics.record(index, digits, DropReason::StrayNumeral);
                self.state.prev_was_page_break = false;
            }
        }
    }

    fn enter_state(&mut self, index: usize, key: &str) {
        debug!(index, state = key, "State header");
        let abandoned = self.state.ward_fragments.take();
        self.record_all(abandoned, DropReason::WrapAborted);
        let abandoned = self.state.lga_fragments.take();
        self.record_all(abandoned, DropReason::WrapAborted);

        self.acc.enter_state(key);
        self.state.pending_pu_count = None;
        self.state.mode = TableMode::Basic;
        self.state.prev_was_page_break = false;
        self.diagnostics.state_headers.push(key.to_string());
    }

    fn handle_data_row(&mut self, index: usize, line: &str) {
        if !self.state.ward_fragments.is_empty() && !self.continue_ward(index, line) {
            return;
        }

        match split_row(line, self.state.mode, self.acc.has_active_lga()) {
            RowShape::WardOnly { ward } => self.add_ward(index, &ward),
            RowShape::LgaWithWard { lga, ward } => {
                self.open_lga(index, lga);
                self.add_ward(index, &ward);
            }
            RowShape::LgaWithWrappedWard { lga, ward_start } => {
                self.open_lga(index, lga);
                self.start_ward(index, ward_start);
            }
            RowShape::WardStart => self.start_ward(index, line.to_string()),
            RowShape::LgaFragment => self.push_lga_fragment(index, line.to_string()),
            RowShape::Unrecognized => {
                self.diagnostics.record(index, line, DropReason::Unclassifiable);
            }
        }
    }

    /// Feeds a line to the pending wrapped ward.
    ///
    /// Returns `true` when the line still has to be split as a row of its own.
    fn continue_ward(&mut self, index: usize, line: &str) -> bool {
        if !looks_like_new_row(line) {
            if let PushOutcome::Overflowed(dropped) = self.state.ward_fragments.push(index, line) {
                debug!(index, fragments = dropped.len(), "Ward wrap overflowed");
                self.state.pending_pu_count = None;
                self.record_all(dropped, DropReason::WrapOverflow);
            }
            return false;
        }

        let abandoned = self.state.ward_fragments.take();
        self.state.pending_pu_count = None;
        if starts_with_code(line) && self.state.lga_fragments.is_empty() {
            // A multi-line LGA name printed above a row that opens with its
            // LGA code, while the previous LGA is still active:
            // "ISIALA NGWA" / "SOUTH" / "11 AKAOKWA 01".
            debug!(index, fragments = abandoned.len(), "Re-reading wrap as LGA name");
            for fragment in abandoned {
                self.push_lga_fragment(fragment.index, fragment.text);
            }
        } else {
            self.record_all(abandoned, DropReason::WrapAborted);
        }
        true
    }

    fn open_lga(&mut self, index: usize, lga: LgaName) {
        let name = match lga {
            LgaName::Inline(name) => {
                let stale = self.state.lga_fragments.take();
                self.record_all(stale, DropReason::WrapAborted);
                name
            }
            LgaName::FromFragments => self.state.lga_fragments.take_joined(),
        };

        if self.acc.start_lga(&name) {
            self.diagnostics.lgas_started += 1;
            debug!(
                index,
                state = self.acc.current_state(),
                lga = self.acc.current_lga(),
                "Started LGA"
            );
        }
    }

    fn start_ward(&mut self, index: usize, text: String) {
        self.state.pending_pu_count = None;
        if !text.is_empty() {
            self.state.ward_fragments.push(index, text);
        }
    }

    fn push_lga_fragment(&mut self, index: usize, text: String) {
        if let PushOutcome::Overflowed(evicted) = self.state.lga_fragments.push(index, text) {
            self.record_all(evicted, DropReason::WrapOverflow);
        }
    }

    fn add_ward(&mut self, index: usize, ward: &str) {
        if self.acc.add_ward(ward) || ward.is_empty() {
            return;
        }
        if !self.acc.has_active_lga() {
            self.diagnostics.record(index, ward, DropReason::WardWithoutLga);
        }
    }

    fn record_all(&mut self, fragments: Vec<Fragment>, reason: DropReason) {
        for fragment in fragments {
            self.diagnostics.record(fragment.index, &fragment.text, reason);
        }
    }
}
