// Camera, orbit and render tuning. Scene composition lives in `city::constants`.

// Perspective projection
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Eye position before the first animated frame
pub const CAMERA_START_EYE: [f32; 3] = [100.0, 100.0, 100.0];

// Orbit around the world origin
pub const ORBIT_RADIUS: f32 = 150.0;
pub const ORBIT_ALTITUDE: f32 = 100.0;

// Scene clock runs at half wall-clock speed (one orbit every ~12.6 s)
pub const SCENE_TIME_SCALE: f32 = 0.5;

// Fallback viewport before the canvas has been measured
pub const DEFAULT_VIEWPORT: [u32; 2] = [800, 600];

// Rendering
pub const MSAA_SAMPLES: u32 = 4;
