use glam::{Mat4, Vec3, Vec4};

// Orbit constraints and feel. The camera is rotation-only (no panning): it
// always looks at the origin from a yaw/pitch/distance triple.
pub const MIN_DISTANCE: f32 = 5.0;
pub const MAX_DISTANCE: f32 = 40.0;
pub const INITIAL_DISTANCE: f32 = 18.0;
pub const ROTATE_SPEED: f32 = 0.005; // radians per screen pixel
pub const ZOOM_STEP: f32 = 0.012; // distance units per wheel delta unit
pub const DAMPING_TAU_SEC: f32 = 0.12; // smoothing time constant toward targets
pub const AUTO_ROTATE_RAD_PER_SEC: f32 = 0.05; // slow spin while idle
pub const PITCH_LIMIT: f32 = 1.45; // keeps the up vector well-defined

pub const FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 200.0;

/// Damped orbit camera. Input nudges the targets; `update` eases the live
/// values toward them once per frame and applies the idle auto-rotation.
#[derive(Clone, Copy, Debug)]
pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
    target_yaw: f32,
    target_pitch: f32,
    target_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self {
            yaw: 0.6,
            pitch: 0.3,
            distance: INITIAL_DISTANCE,
            target_yaw: 0.6,
            target_pitch: 0.3,
            target_distance: INITIAL_DISTANCE,
        }
    }

    /// Rotate by a pointer delta in screen pixels.
    pub fn rotate_by(&mut self, dx_px: f32, dy_px: f32) {
        self.target_yaw -= dx_px * ROTATE_SPEED;
        self.target_pitch = (self.target_pitch - dy_px * ROTATE_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Zoom by a wheel delta. Distance stays clamped to [MIN, MAX].
    pub fn zoom_by(&mut self, delta: f32) {
        self.target_distance = (self.target_distance + delta * ZOOM_STEP).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Advance damping by `dt_sec`; when `idle` (no button held), also apply
    /// the constant slow auto-rotation.
    pub fn update(&mut self, dt_sec: f32, idle: bool) {
        if idle {
            self.target_yaw += AUTO_ROTATE_RAD_PER_SEC * dt_sec;
        }
        let alpha = 1.0 - (-dt_sec.max(0.0) / DAMPING_TAU_SEC).exp();
        self.yaw += (self.target_yaw - self.yaw) * alpha;
        self.pitch += (self.target_pitch - self.pitch) * alpha;
        self.distance += (self.target_distance - self.distance) * alpha;
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(self.distance * cp * sy, self.distance * sp, self.distance * cp * cy)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(FOV_Y, aspect.max(1e-3), NEAR_PLANE, FAR_PLANE) * self.view()
    }

    /// Camera-space right axis in world space (for billboarding).
    pub fn right(&self) -> Vec3 {
        let forward = (-self.eye()).normalize();
        forward.cross(Vec3::Y).normalize()
    }

    /// Camera-space up axis in world space.
    pub fn up(&self) -> Vec3 {
        let forward = (-self.eye()).normalize();
        self.right().cross(forward).normalize()
    }

    /// Compute a world-space ray from canvas backing-store coordinates.
    ///
    /// Returns `(ray_origin, ray_direction)`; the origin is the camera eye.
    pub fn screen_to_world_ray(&self, width: f32, height: f32, sx: f32, sy: f32) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
        let aspect = width / height.max(1.0);
        let inv = self.view_proj(aspect).inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let far_point: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.eye();
        let rd = (far_point - ro).normalize();
        (ro, rd)
    }
}
