//! Scroll-spy, anchor resolution, and back-to-top rules.
//!
//! DESIGN
//! ======
//! The page reports section geometry and scroll metrics as plain numbers;
//! everything here is a pure function of those snapshots so the rules can
//! be exercised without a layout engine.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Layout box of one `section[id]` / `header[id]`, in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }
}

/// Scroll position snapshot.
///
/// `body_scroll_top` and `root_scroll_top` are the two engine-dependent
/// sources of the vertical scroll position; at most one is non-zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub page_offset: f64,
    pub viewport_height: f64,
    pub body_height: f64,
    pub body_scroll_top: f64,
    pub root_scroll_top: f64,
}

/// Tunables for the active-section scan.
#[derive(Clone, Debug, PartialEq)]
pub struct SpyRules {
    pub buffer_ratio: f64,
    pub bottom_threshold: f64,
    pub home_id: String,
    pub contact_id: String,
}

impl SpyRules {
    pub fn from_config(config: &crate::config::SiteConfig) -> Self {
        Self {
            buffer_ratio: config.scroll_buffer_ratio,
            bottom_threshold: config.bottom_threshold_px,
            home_id: config.home_section.clone(),
            contact_id: config.contact_section.clone(),
        }
    }
}

/// Why a section was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpyReason {
    /// Offset falls inside the section's buffered range.
    InRange,
    /// Near the document bottom; the last section is selected.
    Bottom,
    /// Near the document bottom; the contact section wins.
    ContactAtBottom,
    /// Above the first section's buffered top.
    AboveFirst,
    /// No rule matched (gap between sections, or no sections at all).
    Default,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpyDecision {
    pub section_id: String,
    pub reason: SpyReason,
}

/// Compute the section considered in view.
///
/// A section matches when `offset ∈ [top - buffer, top + height - buffer)`
/// with `buffer = viewport_height * buffer_ratio`; the last match in
/// document order wins. Without a match, the bottom rule applies first:
/// contact is preferred when it is the last section, otherwise when it is
/// the second-to-last section and the offset is already past its top;
/// otherwise the last section is used. Everything else resolves to home.
pub fn active_section(sections: &[SectionBox], metrics: &ScrollMetrics, rules: &SpyRules) -> SpyDecision {
    let offset = metrics.page_offset;
    let buffer = metrics.viewport_height * rules.buffer_ratio;

    let in_range = sections
        .iter()
        .rev()
        .find(|s| offset >= s.top - buffer && offset < s.top + s.height - buffer);
    if let Some(section) = in_range {
        return decision(&section.id, SpyReason::InRange);
    }

    let at_bottom = metrics.viewport_height + offset >= metrics.body_height - rules.bottom_threshold;
    if at_bottom {
        if let Some(last) = sections.last() {
            if last.id == rules.contact_id {
                return decision(&last.id, SpyReason::ContactAtBottom);
            }
            if let [.., contact, _] = sections
                && contact.id == rules.contact_id
                && offset > contact.top
            {
                return decision(&contact.id, SpyReason::ContactAtBottom);
            }
            return decision(&last.id, SpyReason::Bottom);
        }
    }

    let first_top = sections.first().map_or(0.0, |s| s.top - buffer);
    if offset < first_top {
        return decision(&rules.home_id, SpyReason::AboveFirst);
    }
    decision(&rules.home_id, SpyReason::Default)
}

fn decision(id: &str, reason: SpyReason) -> SpyDecision {
    SpyDecision { section_id: id.to_owned(), reason }
}

/// Whether the back-to-top control should be shown.
pub fn back_to_top_visible(metrics: &ScrollMetrics, threshold: f64) -> bool {
    metrics.body_scroll_top > threshold || metrics.root_scroll_top > threshold
}

/// Section id targeted by an in-page link, if `href` is a non-empty
/// fragment. Whether the id exists on this page is checked by the caller.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// `href` value that nav links use to point at `section_id`.
pub fn nav_href(section_id: &str) -> String {
    format!("#{section_id}")
}
