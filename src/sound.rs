use beep::beep;
use std::error::Error;

/// The audio collaborator. Once per frame the host tells it whether the
/// sound timer is nonzero; it owns the tone itself.
pub trait Sound {
    fn update(&mut self, active: bool) -> Result<(), Box<dyn Error>>;
}

const BEEPER_PITCH: u16 = 440; // A

/// square-wave beeper; only touches the device on state transitions
pub struct Beeper {
    tone_on: bool,
}

impl Beeper {
    pub fn new() -> Self {
        Beeper { tone_on: false }
    }
}

impl Default for Beeper {
    fn default() -> Self {
        Self::new()
    }
}

impl Sound for Beeper {
    fn update(&mut self, active: bool) -> Result<(), Box<dyn Error>> {
        if active && !self.tone_on {
            beep(BEEPER_PITCH)?;
            self.tone_on = true;
        } else if !active && self.tone_on {
            beep(0)?;
            self.tone_on = false;
        }
        Ok(())
    }
}

impl Drop for Beeper {
    fn drop(&mut self) {
        // leave the speaker quiet whatever state the run ended in
        let _ = beep(0);
    }
}

pub struct Mute;

impl Mute {
    pub fn new() -> Self {
        Mute {}
    }
}

impl Default for Mute {
    fn default() -> Self {
        Self::new()
    }
}

impl Sound for Mute {
    fn update(&mut self, _active: bool) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
}
