//! Orbital layout of the planets around the user.

use crate::track::TrackRecord;
use rand::Rng;
use serde::Serialize;

const BASE_RADIUS_PX: u32 = 100;
const RADIUS_STEP_PX: u32 = 45;
const BASE_PERIOD_SECS: u32 = 25;
const PERIOD_STEP_SECS: u32 = 5;
const HUE_STEP_DEG: f32 = 51.4;

/// Where and how fast one planet orbits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitSlot {
    pub index: usize,
    pub radius_px: u32,
    /// Time for one full revolution.
    pub period_secs: u32,
    /// Start offset into the revolution; always below `period_secs`.
    pub delay_secs: u32,
    /// Hue of the placeholder color `hsl(hue, 70%, 60%)`.
    pub placeholder_hue: f32,
}

impl OrbitSlot {
    pub fn for_index(index: usize, rng: &mut impl Rng) -> Self {
        let step = index as u32;
        let period_secs = BASE_PERIOD_SECS + step * PERIOD_STEP_SECS;
        Self {
            index,
            radius_px: BASE_RADIUS_PX + step * RADIUS_STEP_PX,
            period_secs,
            delay_secs: rng.gen_range(0..period_secs),
            placeholder_hue: index as f32 * HUE_STEP_DEG,
        }
    }

    pub fn placeholder_color(&self) -> String {
        format!("hsl({}, 70%, 60%)", self.placeholder_hue)
    }
}

/// One slot per track, innermost first.
pub fn plan_orbits(tracks: &[TrackRecord], rng: &mut impl Rng) -> Vec<OrbitSlot> {
    (0..tracks.len())
        .map(|index| OrbitSlot::for_index(index, rng))
        .collect()
}
