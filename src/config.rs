//! Engine configuration.
//!
//! Every field has a default, so `{}` is a valid configuration describing the
//! stock face: a raster backend, one-second ticks, a five-second 60 fps camera
//! orbit and the background/left/right complication slots.

use crate::complication::model::SlotDescriptor;
use crate::foundation::error::{FaceError, FaceResult};
use crate::render::backend::BackendKind;
use crate::style::prefs::Preferences;

pub const DEFAULT_TICK_LENGTH_MS: u64 = 1000;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub frame_rate: u32,
    pub cycle_secs: u32,
    pub orbit_radius: f64,
    pub eye_z: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            cycle_secs: 5,
            orbit_radius: 1.0,
            eye_z: -2.3,
            near: 2.0,
            far: 7.0,
        }
    }
}

impl CameraConfig {
    /// One camera step per rendered frame over a full orbit.
    pub fn camera_angle_count(&self) -> usize {
        self.frame_rate as usize * self.cycle_secs as usize
    }

    /// Whole milliseconds per frame; 0 when the rate is 0 or above 1000.
    pub fn frame_period_ms(&self) -> u64 {
        if self.frame_rate == 0 {
            return 0;
        }
        1000 / u64::from(self.frame_rate)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub backend: BackendKind,
    pub tick_length_ms: u64,
    pub camera: CameraConfig,
    pub slots: Vec<SlotDescriptor>,
    pub preferences: Preferences,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Canvas,
            tick_length_ms: DEFAULT_TICK_LENGTH_MS,
            camera: CameraConfig::default(),
            slots: SlotDescriptor::defaults(),
            preferences: Preferences::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> FaceResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| FaceError::serde(format!("engine config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json_pretty(&self) -> FaceResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FaceError::serde(e.to_string()))
    }

    pub fn validate(&self) -> FaceResult<()> {
        if self.tick_length_ms == 0 {
            return Err(FaceError::validation("tick_length_ms must be > 0"));
        }
        let cam = &self.camera;
        if cam.frame_rate == 0 || cam.frame_rate > 1000 {
            return Err(FaceError::validation(format!(
                "camera.frame_rate must be in 1..=1000, got {}",
                cam.frame_rate
            )));
        }
        if cam.cycle_secs == 0 {
            return Err(FaceError::validation("camera.cycle_secs must be > 0"));
        }
        if !(cam.orbit_radius.is_finite() && cam.eye_z.is_finite()) {
            return Err(FaceError::validation("camera position must be finite"));
        }
        if !(cam.near.is_finite() && cam.far.is_finite()) || cam.near <= 0.0 || cam.near >= cam.far {
            return Err(FaceError::validation(format!(
                "camera clip planes must satisfy 0 < near < far, got near={} far={}",
                cam.near, cam.far
            )));
        }
        Ok(())
    }
}
