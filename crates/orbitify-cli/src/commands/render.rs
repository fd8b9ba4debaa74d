//! Plain-text solar system.

use colored::Colorize;
use orbitify_core::PipelineState;
use orbitify_core::image_probe::ImageStatus;
use orbitify_core::orbit::OrbitSlot;
use orbitify_core::user::DEFAULT_DISPLAY_NAME;

pub fn render(state: &PipelineState, slots: &[OrbitSlot]) -> String {
    let mut out = String::new();

    let sun = state
        .profile
        .as_ref()
        .map(|profile| profile.name_or_default().to_string())
        .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());
    out.push_str(&format!("☀️  {}\n", sun.yellow().bold()));
    if let Some(avatar) = state.profile.as_ref().and_then(|p| p.avatar_url()) {
        out.push_str(&format!("    {}\n", avatar.dimmed()));
    }
    out.push_str(&format!(
        "🕒 {} ({})\n\n",
        state.time_range.description(),
        state.time_range
    ));

    if let Some(error) = state.error() {
        out.push_str(&format!("{}\n", error.red()));
    }

    if state.tracks.is_empty() {
        if state.error().is_none() {
            out.push_str("No top tracks available for the selected time range\n");
        }
        return out;
    }

    for (slot, track) in slots.iter().zip(&state.tracks) {
        let artwork = match state.album_images.get(slot.index) {
            Some(ImageStatus::Usable) => "artwork".green().to_string(),
            Some(ImageStatus::Pending) => "artwork pending".dimmed().to_string(),
            _ => slot.placeholder_color().magenta().to_string(),
        };
        out.push_str(&format!(
            "  🪐 {}. {} - {}\n",
            slot.index + 1,
            track.name.bold(),
            track.artist
        ));
        out.push_str(&format!(
            "       orbit {}px · {}s · delay {}s · {}\n",
            slot.radius_px, slot.period_secs, slot.delay_secs, artwork
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbitify_core::TimeRange;
    use orbitify_core::orbit::plan_orbits;
    use orbitify_core::track::TrackRecord;
    use orbitify_core::user::UserProfile;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn state_with_tracks() -> PipelineState {
        let mut state = PipelineState::new(TimeRange::MediumTerm);
        state.loading = false;
        state.profile = Some(UserProfile {
            display_name: Some("Ada".to_string()),
            id: "ada42".to_string(),
            images: Vec::new(),
        });
        state.tracks = vec![
            TrackRecord {
                id: "a".to_string(),
                name: "Starman".to_string(),
                artist: "David Bowie".to_string(),
                album_image: "https://img/a.jpg".to_string(),
            },
            TrackRecord {
                id: "b".to_string(),
                name: "Rocket Man".to_string(),
                artist: "Elton John".to_string(),
                album_image: String::new(),
            },
        ];
        state.album_images = vec![ImageStatus::Usable, ImageStatus::Unusable];
        state
    }

    #[test]
    fn test_render_lists_planets() {
        let state = state_with_tracks();
        let slots = plan_orbits(&state.tracks, &mut StdRng::seed_from_u64(3));
        let text = render(&state, &slots);
        assert!(text.contains("Ada"));
        assert!(text.contains("Last 6 months"));
        assert!(text.contains("Starman"));
        assert!(text.contains("Elton John"));
        assert!(text.contains("orbit 145px"));
        assert!(text.contains("hsl(51.4, 70%, 60%)"));
    }

    #[test]
    fn test_render_empty_without_error() {
        let mut state = PipelineState::new(TimeRange::ShortTerm);
        state.loading = false;
        let text = render(&state, &[]);
        assert!(text.contains("User"));
        assert!(text.contains("No top tracks available"));
    }

    #[test]
    fn test_render_shows_error() {
        let mut state = PipelineState::new(TimeRange::ShortTerm);
        state.session.error = Some("Failed to fetch data: HTTP 500: boom".to_string());
        let text = render(&state, &[]);
        assert!(text.contains("HTTP 500: boom"));
        assert!(!text.contains("No top tracks available"));
    }
}
