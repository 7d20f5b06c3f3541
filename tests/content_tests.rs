// Host-side tests for the static scene content and frontend tuning.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod content {
    include!("../src/core/content.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use content::*;

#[test]
fn there_are_sixteen_achievements_with_real_text() {
    assert_eq!(ACHIEVEMENTS.len(), 16);
    for a in ACHIEVEMENTS.iter() {
        assert!(!a.title.is_empty());
        assert!(!a.description.is_empty());
    }
}

#[test]
fn achievement_titles_are_unique() {
    for (i, a) in ACHIEVEMENTS.iter().enumerate() {
        for b in ACHIEVEMENTS.iter().skip(i + 1) {
            assert_ne!(a.title, b.title);
        }
    }
}

#[test]
fn markers_sit_inside_the_decorative_field() {
    // Markers stay inside the particle cube and well inside the star shell
    for a in ACHIEVEMENTS.iter() {
        let [x, y, z] = a.position;
        let len = (x * x + y * y + z * z).sqrt();
        assert!(len < 20.0, "{} is too far out ({len})", a.title);
    }
}

#[test]
fn markers_do_not_overlap_each_other() {
    // Pick spheres must stay disjoint so hover can only ever name one marker
    for (i, a) in ACHIEVEMENTS.iter().enumerate() {
        for b in ACHIEVEMENTS.iter().skip(i + 1) {
            let dx = a.position[0] - b.position[0];
            let dy = a.position[1] - b.position[1];
            let dz = a.position[2] - b.position[2];
            let dist = (dx * dx + dy * dy + dz * dz).sqrt();
            assert!(
                dist > 2.0 * PICK_SPHERE_RADIUS,
                "{} and {} pick spheres overlap",
                a.title,
                b.title
            );
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn decorative_counts_are_positive() {
    assert!(BACKGROUND_STAR_COUNT > 0);
    assert!(PARTICLE_COUNT > 0);
    assert!(!NEBULAS.is_empty());
}

#[test]
fn nebula_sprites_are_translucent() {
    for n in NEBULAS.iter() {
        assert!(n.scale > 0.0);
        assert!(n.color[3] > 0.0 && n.color[3] < 0.5, "haze must stay faint");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_tuning_is_coherent() {
    assert!(PICK_SPHERE_RADIUS > 0.0);
    assert!(PANEL_FADE_MS > 0);
    assert!(HINT_DISMISS_MS > PANEL_FADE_MS);
    assert!(PARTICLE_SIZE > 0.0);
    assert!(PARTICLE_OPACITY > 0.0 && PARTICLE_OPACITY <= 1.0);
    assert_ne!(CURSOR_INTERACTIVE, CURSOR_EXPLORE);
}
