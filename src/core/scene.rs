use glam::Vec3;
use rand::prelude::*;

// Animation tuning. All angular frequencies are per millisecond of scene
// time, matching the millisecond clock accumulated by `SceneState::advance`.

// Marker breathing pulse
pub const MARKER_BASE_SCALE: f32 = 0.9;
pub const MARKER_SCALE_AMPLITUDE: f32 = 0.15;
pub const MARKER_SCALE_SPEED: f32 = 0.0015;
pub const MARKER_SCALE_PHASE_STEP: f32 = 1.8; // per marker index, desynchronizes pulses
pub const MARKER_HOVER_BOOST: f32 = 0.35;

// Marker opacity pulse
pub const MARKER_OPACITY_BASE: f32 = 0.75;
pub const MARKER_OPACITY_AMPLITUDE: f32 = 0.25;
pub const MARKER_OPACITY_SPEED: f32 = 0.002;
pub const MARKER_OPACITY_PHASE_STEP: f32 = 2.5;

// Background star twinkle; speed and offset are fixed per star at creation
pub const STAR_TWINKLE_AMPLITUDE: f32 = 0.15;
pub const STAR_TWINKLE_SPEED_MIN: f32 = 0.0008;
pub const STAR_TWINKLE_SPEED_MAX: f32 = 0.0038;
pub const STAR_TWINKLE_OFFSET_MAX: f32 = 6000.0;
pub const STAR_BASE_OPACITY_MIN: f32 = 0.4;
pub const STAR_BASE_OPACITY_MAX: f32 = 0.7;
pub const STAR_SHELL_RADIUS_MIN: f32 = 26.0;
pub const STAR_SHELL_RADIUS_MAX: f32 = 90.0;
pub const STAR_SIZE_MIN: f32 = 0.10;
pub const STAR_SIZE_MAX: f32 = 0.34;

// Constellation line
pub const LINE_OPACITY_BASE: f32 = 0.08;
pub const LINE_OPACITY_AMPLITUDE: f32 = 0.04;
pub const LINE_OPACITY_SPEED: f32 = 0.001;

// Particle drift: one step per tick, toroidal wraparound on a 40-unit cube
pub const PARTICLE_BOUND: f32 = 20.0;
pub const PARTICLE_SPEED_MAX: f32 = 0.015;

/// An achievement point in scene space. Immutable after creation; identity
/// is the index into `SceneState::markers`.
#[derive(Clone, Copy, Debug)]
pub struct Marker {
    pub position: Vec3,
    pub title: &'static str,
    pub description: &'static str,
}

/// A decorative background star with fixed per-star twinkle parameters.
#[derive(Clone, Copy, Debug)]
pub struct Star {
    pub position: Vec3,
    pub size: f32,
    pub base_opacity: f32,
    pub twinkle_speed: f32,
    pub twinkle_offset: f32,
    pub tint: [f32; 3],
}

/// A drifting dust particle. The velocity never changes after creation.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// All time-varying scene state: the marker list, decorative objects, the
/// single hover reference and the millisecond clock. Owned behind one
/// `Rc<RefCell<_>>` and touched only from the page's logical thread.
pub struct SceneState {
    pub markers: Vec<Marker>,
    pub stars: Vec<Star>,
    pub particles: Vec<Particle>,
    hovered: Option<usize>,
    time_ms: f32,
}

impl SceneState {
    /// Build the scene from the static marker list plus `star_count` stars
    /// and `particle_count` particles generated from `seed`.
    pub fn new(markers: Vec<Marker>, star_count: usize, particle_count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = (0..star_count).map(|_| random_star(&mut rng)).collect();
        let particles = (0..particle_count)
            .map(|_| random_particle(&mut rng))
            .collect();
        Self {
            markers,
            stars,
            particles,
            hovered: None,
            time_ms: 0.0,
        }
    }

    pub fn time_ms(&self) -> f32 {
        self.time_ms
    }

    /// At most one marker is hovered at any instant.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Replace the hover target. Returns `true` if it changed; calling again
    /// with the same target is a no-op, and clearing it drops the previous
    /// marker's hover enlargement back to the breathing baseline.
    pub fn set_hover(&mut self, target: Option<usize>) -> bool {
        if self.hovered == target {
            return false;
        }
        self.hovered = target;
        true
    }

    /// Advance the clock by `dt_ms` and step every particle once.
    pub fn advance(&mut self, dt_ms: f32) {
        self.time_ms += dt_ms.max(0.0);
        for p in &mut self.particles {
            step_particle(p);
        }
    }

    /// Breathing scale for marker `index`, including the hover enlargement.
    pub fn marker_scale(&self, index: usize) -> f32 {
        marker_scale_at(self.time_ms, index, self.hovered == Some(index))
    }

    pub fn marker_opacity(&self, index: usize) -> f32 {
        marker_opacity_at(self.time_ms, index)
    }

    pub fn star_opacity(&self, star: &Star) -> f32 {
        star_opacity_at(self.time_ms, star)
    }

    pub fn line_opacity(&self) -> f32 {
        line_opacity_at(self.time_ms)
    }
}

pub fn marker_scale_at(time_ms: f32, index: usize, hovered: bool) -> f32 {
    let phase = time_ms * MARKER_SCALE_SPEED + index as f32 * MARKER_SCALE_PHASE_STEP;
    let base = MARKER_BASE_SCALE + phase.sin() * MARKER_SCALE_AMPLITUDE;
    if hovered {
        base + MARKER_HOVER_BOOST
    } else {
        base
    }
}

pub fn marker_opacity_at(time_ms: f32, index: usize) -> f32 {
    let phase = time_ms * MARKER_OPACITY_SPEED + index as f32 * MARKER_OPACITY_PHASE_STEP;
    MARKER_OPACITY_BASE + phase.sin() * MARKER_OPACITY_AMPLITUDE
}

pub fn star_opacity_at(time_ms: f32, star: &Star) -> f32 {
    star.base_opacity
        + (time_ms * star.twinkle_speed + star.twinkle_offset).sin() * STAR_TWINKLE_AMPLITUDE
}

pub fn line_opacity_at(time_ms: f32) -> f32 {
    LINE_OPACITY_BASE + (time_ms * LINE_OPACITY_SPEED).sin() * LINE_OPACITY_AMPLITUDE
}

/// One drift step with per-axis wraparound: past +20 snaps to -20 and past
/// -20 snaps to +20, keeping every coordinate inside the cube.
pub fn step_particle(p: &mut Particle) {
    p.position += p.velocity;
    p.position.x = wrap_axis(p.position.x);
    p.position.y = wrap_axis(p.position.y);
    p.position.z = wrap_axis(p.position.z);
}

#[inline]
fn wrap_axis(v: f32) -> f32 {
    if v > PARTICLE_BOUND {
        -PARTICLE_BOUND
    } else if v < -PARTICLE_BOUND {
        PARTICLE_BOUND
    } else {
        v
    }
}

fn random_star(rng: &mut StdRng) -> Star {
    // Uniform direction, then push to a shell well outside the marker field
    let dir = loop {
        let v = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let len = v.length();
        if len > 1e-3 && len <= 1.0 {
            break v / len;
        }
    };
    let radius = rng.gen_range(STAR_SHELL_RADIUS_MIN..STAR_SHELL_RADIUS_MAX);
    // Mostly white with a cold or warm cast
    let cast = rng.gen_range(0.0..1.0f32);
    let tint = if cast < 0.6 {
        [0.95, 0.97, 1.0]
    } else if cast < 0.85 {
        [0.8, 0.88, 1.0]
    } else {
        [1.0, 0.92, 0.8]
    };
    Star {
        position: dir * radius,
        size: rng.gen_range(STAR_SIZE_MIN..STAR_SIZE_MAX),
        base_opacity: rng.gen_range(STAR_BASE_OPACITY_MIN..STAR_BASE_OPACITY_MAX),
        twinkle_speed: rng.gen_range(STAR_TWINKLE_SPEED_MIN..STAR_TWINKLE_SPEED_MAX),
        twinkle_offset: rng.gen_range(0.0..STAR_TWINKLE_OFFSET_MAX),
        tint,
    }
}

fn random_particle(rng: &mut StdRng) -> Particle {
    Particle {
        position: Vec3::new(
            rng.gen_range(-PARTICLE_BOUND..PARTICLE_BOUND),
            rng.gen_range(-PARTICLE_BOUND..PARTICLE_BOUND),
            rng.gen_range(-PARTICLE_BOUND..PARTICLE_BOUND),
        ),
        velocity: Vec3::new(
            rng.gen_range(-PARTICLE_SPEED_MAX..PARTICLE_SPEED_MAX),
            rng.gen_range(-PARTICLE_SPEED_MAX..PARTICLE_SPEED_MAX),
            rng.gen_range(-PARTICLE_SPEED_MAX..PARTICLE_SPEED_MAX),
        ),
    }
}
