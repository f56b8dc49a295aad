//! Presentation values computed from scroll offset, motion preference and
//! section visibility. Everything here is a plain function of its inputs and
//! is recomputed on every render.

use crate::config::{NAV_SCROLLED_THRESHOLD, SCROLL_TO_TOP_THRESHOLD};
use crate::view_state::visibility::VisibleSections;

pub const HERO_TITLE_PARALLAX: f64 = 0.3;
pub const HERO_LAYER_PARALLAX: f64 = 0.5;
pub const TIMELINE_BACKGROUND_PARALLAX: f64 = 0.1;
pub const TIMELINE_GLOW_PARALLAX: f64 = 0.08;

const TITLE_SCALE_RATE: f64 = 0.0003;
const TITLE_SCALE_FLOOR: f64 = 0.85;
const TITLE_FADE_RATE: f64 = 0.002;

pub fn parallax_offset(scroll: f64, factor: f64, reduced_motion: bool) -> f64 {
    if reduced_motion {
        0.0
    } else {
        scroll * factor
    }
}

/// Shrinks from 1 towards 0.85 as the page scrolls.
pub fn title_scale(scroll: f64, reduced_motion: bool) -> f64 {
    if reduced_motion {
        1.0
    } else {
        (1.0 - scroll * TITLE_SCALE_RATE).max(TITLE_SCALE_FLOOR)
    }
}

/// Fades from 1 to 0 over the first 500px.
pub fn title_opacity(scroll: f64, reduced_motion: bool) -> f64 {
    if reduced_motion {
        1.0
    } else {
        (1.0 - scroll * TITLE_FADE_RATE).max(0.0)
    }
}

/// Share of the timeline reached, from the furthest visible step.
pub fn progress_percent(sections: &VisibleSections, reduced_motion: bool) -> f64 {
    if reduced_motion {
        return 100.0;
    }
    let total = sections.total();
    if total == 0 {
        return 0.0;
    }
    match sections.max_visible() {
        Some(index) => ((index + 1) as f64 / total as f64 * 100.0).max(0.0),
        None => 0.0,
    }
}

/// Fill level (0..=100) of segment `index` in an indicator split into
/// `segments` equal parts.
pub fn segment_progress(progress: f64, index: usize, segments: usize) -> f64 {
    if segments == 0 {
        return 0.0;
    }
    let width = 100.0 / segments as f64;
    let start = index as f64 * width;
    ((progress - start) / width * 100.0).clamp(0.0, 100.0)
}

/// Hero transforms for one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroMotion {
    pub title_offset: f64,
    pub layer_offset: f64,
    pub title_scale: f64,
    pub title_opacity: f64,
}

impl HeroMotion {
    pub fn derive(scroll: f64, reduced_motion: bool) -> Self {
        Self {
            title_offset: parallax_offset(scroll, HERO_TITLE_PARALLAX, reduced_motion),
            layer_offset: parallax_offset(scroll, HERO_LAYER_PARALLAX, reduced_motion),
            title_scale: title_scale(scroll, reduced_motion),
            title_opacity: title_opacity(scroll, reduced_motion),
        }
    }

    pub fn title_style(&self) -> String {
        format!(
            "transform: translateY({:.1}px) scale({:.4}); opacity: {:.3};",
            self.title_offset, self.title_scale, self.title_opacity
        )
    }

    pub fn layer_style(&self) -> String {
        format!("transform: translateY({:.1}px);", self.layer_offset)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineMotion {
    pub background_offset: f64,
    pub glow_offset: f64,
    pub progress: f64,
    pub segments: Vec<f64>,
}

impl TimelineMotion {
    pub fn derive(scroll: f64, sections: &VisibleSections, reduced_motion: bool) -> Self {
        let progress = progress_percent(sections, reduced_motion);
        let count = sections.total();
        Self {
            background_offset: parallax_offset(scroll, TIMELINE_BACKGROUND_PARALLAX, reduced_motion),
            glow_offset: parallax_offset(scroll, TIMELINE_GLOW_PARALLAX, reduced_motion),
            progress,
            segments: (0..count)
                .map(|index| segment_progress(progress, index, count))
                .collect(),
        }
    }
}

pub fn nav_is_scrolled(scroll: f64) -> bool {
    scroll > NAV_SCROLLED_THRESHOLD
}

pub fn show_scroll_to_top(scroll: f64) -> bool {
    scroll > SCROLL_TO_TOP_THRESHOLD
}
