// Scene composition and animation tuning for the city.

// Starfield
pub const STAR_COUNT: usize = 15_000;
pub const STAR_CUBE_SIDE: f32 = 2000.0;

// Ground square the city is laid out in (centred on the origin)
pub const GROUND_SIDE: f32 = 400.0;

// Buildings
pub const BUILDING_COUNT: usize = 200;
pub const BUILDING_HEIGHT_MIN: f32 = 10.0;
pub const BUILDING_HEIGHT_SPAN: f32 = 50.0;
pub const BUILDING_WIDTH_MIN: f32 = 5.0;
pub const BUILDING_WIDTH_SPAN: f32 = 10.0;
pub const PULSE_FACTOR_MIN: f32 = 0.9;
pub const PULSE_FACTOR_SPAN: f32 = 0.2;
pub const SHININESS_MIN: f32 = 50.0;
pub const SHININESS_SPAN: f32 = 50.0;

// Floating markers
pub const MARKER_COUNT: usize = 50;
pub const MARKER_ALTITUDE_MIN: f32 = 50.0;
pub const MARKER_ALTITUDE_SPAN: f32 = 100.0;
pub const MARKER_RADIUS: f32 = 0.5;
pub const MARKER_COLOR: u32 = 0xffff00;
pub const MARKER_EMISSIVE_INTENSITY: f32 = 0.5;
pub const MARKER_SHININESS: f32 = 30.0;

// Lights
pub const AMBIENT_COLOR: u32 = 0x404040;
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const SUN_COLOR: u32 = 0xffffff;
pub const SUN_INTENSITY: f32 = 0.8;
pub const SUN_POSITION: [f32; 3] = [100.0, 100.0, 50.0];
pub const POINT_LIGHT_COLORS: [u32; 6] = [0xff3333, 0x33ff33, 0x3333ff, 0xffff33, 0xff33ff, 0x33ffff];
pub const POINT_LIGHT_INTENSITY: f32 = 1.0;
pub const POINT_LIGHT_RANGE: f32 = 50.0;
pub const POINT_LIGHT_DECAY: f32 = 1.0;
pub const POINT_LIGHT_ALTITUDE_MIN: f32 = 10.0;
pub const POINT_LIGHT_ALTITUDE_SPAN: f32 = 100.0;

// Sky and fog
pub const SKY_DAY: u32 = 0x87ceeb;
pub const SKY_NIGHT: u32 = 0x000011;
pub const FOG_DENSITY: f32 = 0.0015;

// Hover highlight
pub const HIGHLIGHT_EMISSIVE: u32 = 0xff0000;

// Per-tick building animation
pub const BUILDING_SPIN_PER_TICK: f32 = 0.002;
pub const HUE_RATE: f32 = 0.1;
pub const HUE_JITTER: f32 = 0.1;
pub const BUILDING_SATURATION: f32 = 0.5;
pub const BUILDING_LIGHTNESS: f32 = 0.5;
pub const PULSE_RATE: f32 = 2.0;

// Marker bobbing (raw elapsed milliseconds)
pub const BOB_RATE_PER_MS: f64 = 0.001;
pub const BOB_STEP: f32 = 0.02;

// Tessellation, matching the classic primitive defaults
pub const CYLINDER_SEGMENTS: u32 = 8;
pub const CONE_SEGMENTS: u32 = 6;
pub const SPHERE_SEGMENTS: u32 = 32;
pub const SPHERE_RINGS: u32 = 32;
