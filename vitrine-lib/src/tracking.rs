//! Scroll-position section tracking and one-shot visibility latching.
//!
//! Both state machines are independent of the widget layer: the frontend feeds
//! them scroll offsets and visible fractions and reads back the active section
//! and the reveal flags. Geometry is injected as [`SectionSpan`]s, so tests
//! drive them without any real viewport.

/// The fixed, ordered set of page sections. Declaration order is the
/// navigation order and the tracker's match order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::VariantArray)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

/// Vertical extent of one section in the page's scroll coordinate space.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpan {
    pub section: Section,
    pub top: f32,
    pub height: f32,
}

impl SectionSpan {
    fn contains(&self, y: f32) -> bool {
        self.top <= y && y < self.top + self.height
    }
}

/// Look-ahead added to the raw scroll offset before matching sections, so a
/// section becomes active slightly before its edge reaches the viewport top.
const LOOKAHEAD: f32 = 100.0;

/// Tracks which section the page is currently scrolled to.
///
/// On every offset report, the first span in declared order containing the
/// offset (plus look-ahead) wins; first-match iteration doubles as the
/// tie-break for overlapping spans. When no span matches, the previously
/// active section is retained.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    spans: Vec<SectionSpan>,
    active: Section,
}

impl SectionTracker {
    pub fn new(spans: Vec<SectionSpan>) -> Self {
        Self {
            spans,
            active: Section::Home,
        }
    }

    /// Recompute the active section for a new scroll offset.
    pub fn track(&mut self, scroll_y: f32) {
        let y = scroll_y + LOOKAHEAD;

        if let Some(span) = self.spans.iter().find(|span| span.contains(y)) {
            self.active = span.section;
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn span(&self, section: Section) -> Option<SectionSpan> {
        self.spans.iter().copied().find(|span| span.section == section)
    }
}

/// One-shot `Unseen -> Seen` latch gating a section's entrance effect.
///
/// Once the reported visible fraction crosses the threshold the latch stays
/// set; scrolling away never clears it.
#[derive(Debug, Clone, Copy)]
pub struct VisibilityLatch {
    threshold: f32,
    seen: bool,
}

impl VisibilityLatch {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            seen: false,
        }
    }

    /// Report the currently visible fraction of the observed area.
    pub fn report(&mut self, fraction: f32) {
        if fraction >= self.threshold {
            self.seen = true;
        }
    }

    pub fn is_seen(&self) -> bool {
        self.seen
    }
}

/// Fraction of `span` overlapping the viewport starting at `viewport_top`.
pub fn visible_fraction(span: SectionSpan, viewport_top: f32, viewport_height: f32) -> f32 {
    if span.height <= 0.0 {
        return 0.0;
    }

    let top = span.top.max(viewport_top);
    let bottom = (span.top + span.height).min(viewport_top + viewport_height);

    ((bottom - top) / span.height).clamp(0.0, 1.0)
}
