/// Frontend interaction and presentation tuning.
///
/// Scene-animation constants live next to the math in `core::scene`; these
/// cover the parts only the wasm frontend touches.
// Ray-sphere radius for marker picking
pub const PICK_SPHERE_RADIUS: f32 = 0.9;

// Info panel exit-transition duration; the deferred hide fires after this
pub const PANEL_FADE_MS: i32 = 500;

// Transient hint shown after the intro overlay is dismissed
pub const HINT_DISMISS_MS: i32 = 6000;

// Cursor affordances
pub const CURSOR_INTERACTIVE: &str = "pointer";
pub const CURSOR_EXPLORE: &str = "grab";

// Sprite softness per object class (0 = crisp disc, 1 = wide soft falloff)
pub const MARKER_SOFTNESS: f32 = 0.25;
pub const STAR_SOFTNESS: f32 = 0.0;
pub const NEBULA_SOFTNESS: f32 = 1.0;
pub const PARTICLE_SOFTNESS: f32 = 0.4;

// Particle presentation
pub const PARTICLE_SIZE: f32 = 0.12;
pub const PARTICLE_OPACITY: f32 = 0.5;
