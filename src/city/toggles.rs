use super::scene::Atmosphere;

/// The two user-controlled switches. Every combination is valid and stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleState {
    pub camera_rotating: bool,
    pub daytime: bool,
}

impl Default for ToggleState {
    fn default() -> Self {
        Self {
            camera_rotating: true,
            daytime: true,
        }
    }
}

impl ToggleState {
    pub fn toggle_rotation(&mut self) {
        self.camera_rotating = !self.camera_rotating;
    }

    /// Flip day/night and repaint background and fog right away.
    pub fn toggle_day_night(&mut self, atmosphere: &mut Atmosphere) {
        self.daytime = !self.daytime;
        *atmosphere = self.atmosphere();
    }

    pub fn atmosphere(&self) -> Atmosphere {
        if self.daytime {
            Atmosphere::day()
        } else {
            Atmosphere::night()
        }
    }
}
