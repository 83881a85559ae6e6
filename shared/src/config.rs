/// Physics tuning for the ball simulation. The defaults are the values the
/// game was balanced around; changing them changes game feel.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsConfig {
    /// Gravitational acceleration on the vertical axis (units/s^2)
    pub gravity: f64,
    /// Fraction of vertical speed retained after a floor bounce
    pub ball_bounciness: f64,
    /// Fraction of vertical speed retained after a rim bounce
    pub rim_bounciness: f64,
    /// Below this |vertical speed| a bouncing ball settles (units/s)
    pub rest_speed: f64,
    /// Horizontal impulse magnitude applied on rim contact
    pub rim_impulse: f64,
    /// Launch speed = shot power / power_divisor
    pub power_divisor: f64,
    /// Fixed upward velocity added at launch for shot arc (units/s)
    pub arc_boost: f64,
    /// Grounded movement speed (units/s)
    pub move_speed: f64,
    /// Visual roll increment per tick while moving (radians)
    pub roll_rate: f64,
    /// Upper clamp on a single tick's delta; a stalled frame must not
    /// integrate seconds of flight in one step
    pub max_tick_dt: f64,
    /// Fixed timestep for trajectory prediction (seconds)
    pub prediction_dt: f64,
    /// Maximum number of predicted trajectory points
    pub prediction_steps: usize,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: -9.8,         // units/s^2
            ball_bounciness: 0.7,  // 0 = no bounce, 1 = perfect bounce
            rim_bounciness: 0.8,
            rest_speed: 1.0,       // units/s
            rim_impulse: 0.5,
            power_divisor: 4.0,    // power 0..=100 -> speed 0..=25
            arc_boost: 7.0,        // units/s
            move_speed: 5.0,       // units/s
            roll_rate: 0.1,        // rad per tick
            max_tick_dt: 0.1,      // seconds
            prediction_dt: 0.016,  // seconds
            prediction_steps: 100,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.gravity.is_finite() || self.gravity >= 0.0 {
            return Err("gravity must be finite and < 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.ball_bounciness) || self.ball_bounciness == 0.0 {
            return Err("ball_bounciness must be in (0, 1]".to_string());
        }
        if !(0.0..=1.0).contains(&self.rim_bounciness) || self.rim_bounciness == 0.0 {
            return Err("rim_bounciness must be in (0, 1]".to_string());
        }
        if !self.rest_speed.is_finite() || self.rest_speed <= 0.0 {
            return Err("rest_speed must be finite and > 0".to_string());
        }
        if !self.power_divisor.is_finite() || self.power_divisor <= 0.0 {
            return Err("power_divisor must be finite and > 0".to_string());
        }
        if !self.max_tick_dt.is_finite() || self.max_tick_dt <= 0.0 {
            return Err("max_tick_dt must be finite and > 0".to_string());
        }
        if !self.prediction_dt.is_finite() || self.prediction_dt <= 0.0 {
            return Err("prediction_dt must be finite and > 0".to_string());
        }
        if self.prediction_steps == 0 {
            return Err("prediction_steps must be > 0".to_string());
        }
        Ok(())
    }
}

/// Court and hoop dimensions. Immutable after startup; the standard hoop
/// and collider layout is derived from these.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtConfig {
    /// Court extent along the long (x) axis
    pub width: f64,
    /// Court extent along the short (z) axis
    pub depth: f64,
    /// Height of the playing surface
    pub surface_y: f64,
    pub ball_radius: f64,
    pub rim_radius: f64,
    /// Rim tube (torus minor) radius; aperture = rim_radius - rim_tube
    pub rim_tube: f64,
    /// Pole height; the rim sits at surface_y + pole_height
    pub pole_height: f64,
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self {
            width: 30.0,
            depth: 15.0,
            surface_y: 0.1,
            ball_radius: 0.3,
            rim_radius: 0.7,
            rim_tube: 0.02,
            pole_height: 3.05,
        }
    }
}

impl CourtConfig {
    /// Effective "hole" radius the ball center must pass through to score.
    pub fn aperture_radius(&self) -> f64 {
        self.rim_radius - self.rim_tube
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err("width must be finite and > 0".to_string());
        }
        if !self.depth.is_finite() || self.depth <= 0.0 {
            return Err("depth must be finite and > 0".to_string());
        }
        if !self.ball_radius.is_finite() || self.ball_radius <= 0.0 {
            return Err("ball_radius must be finite and > 0".to_string());
        }
        if !self.rim_radius.is_finite() || self.rim_radius <= self.rim_tube {
            return Err("rim_radius must be finite and > rim_tube".to_string());
        }
        if self.aperture_radius() <= self.ball_radius {
            return Err("rim aperture must be wide enough to admit the ball".to_string());
        }
        if !self.pole_height.is_finite() || self.pole_height <= 0.0 {
            return Err("pole_height must be finite and > 0".to_string());
        }
        Ok(())
    }
}
