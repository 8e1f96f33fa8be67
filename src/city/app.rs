use super::animation::{self, FrameClock};
use super::picking;
use super::scene::CityScene;
use super::toggles::ToggleState;
use crate::camera::Camera;
use crate::constants::DEFAULT_VIEWPORT;
use crate::input::pointer_ndc;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Everything the host can ask of the app, in arrival order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AppEvent {
    /// New drawable size in device pixels.
    Resize { width: u32, height: u32 },
    /// Pointer position in device pixels relative to the canvas.
    PointerMove { x: f32, y: f32 },
    ToggleRotation,
    ToggleDayNight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Whole application state: scene, camera, switches and the hover target.
pub struct CityApp {
    pub scene: CityScene,
    pub camera: Camera,
    pub toggles: ToggleState,
    pub viewport: Viewport,
    pub hovered: Option<usize>,
    rng: StdRng,
}

impl CityApp {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_rng(StdRng::from_entropy(), viewport)
    }

    pub fn with_seed(seed: u64, viewport: Viewport) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), viewport)
    }

    pub fn with_rng(mut rng: StdRng, viewport: Viewport) -> Self {
        let mut scene = CityScene::build(&mut rng);
        let toggles = ToggleState::default();
        scene.atmosphere = toggles.atmosphere();
        let mut camera = Camera::new(1.0);
        camera.set_viewport(viewport.width, viewport.height);
        log::info!(
            "[scene] stars={} buildings={} markers={} point_lights={}",
            scene.stars.len(),
            scene.buildings.len(),
            scene.markers.len(),
            scene.lighting.points.len()
        );
        Self {
            scene,
            camera,
            toggles,
            viewport,
            hovered: None,
            rng,
        }
    }

    pub fn dispatch(&mut self, event: AppEvent) {
        match event {
            AppEvent::Resize { width, height } => self.resize(width, height),
            AppEvent::PointerMove { x, y } => self.pointer_moved(Vec2::new(x, y)),
            AppEvent::ToggleRotation => {
                self.toggles.toggle_rotation();
                log::info!("[ui] camera rotation {}", on_off(self.toggles.camera_rotating));
            }
            AppEvent::ToggleDayNight => {
                self.toggles.toggle_day_night(&mut self.scene.atmosphere);
                log::info!(
                    "[ui] {}",
                    if self.toggles.daytime { "day" } else { "night" }
                );
            }
        }
    }

    /// Advance the animation to `clock`.
    pub fn tick(&mut self, clock: FrameClock) {
        animation::advance(
            &mut self.scene,
            &mut self.camera,
            &self.toggles,
            clock,
            &mut self.rng,
        );
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = Viewport { width, height };
        self.camera.set_viewport(width, height);
    }

    fn pointer_moved(&mut self, px: Vec2) {
        let ndc = pointer_ndc(px, self.viewport.width, self.viewport.height);
        let (ro, rd) = self.camera.ray_through_ndc(ndc);
        let hit = picking::resolve_pick(ro, rd, &self.scene.buildings).map(|h| h.index);
        picking::apply_highlight(&mut self.scene.buildings, hit);
        if hit != self.hovered {
            log::debug!("[pointer] hover {:?} -> {:?}", self.hovered, hit);
            self.hovered = hit;
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT[0],
            height: DEFAULT_VIEWPORT[1],
        }
    }
}

fn on_off(v: bool) -> &'static str {
    if v {
        "on"
    } else {
        "off"
    }
}
