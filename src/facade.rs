//! A home-theater facade: a couple of composite operations over
//! subsystems handed in at construction.
//!
//! The facade composes, it never creates, so a test can inject recording
//! fakes and watch the exact call order. Subsystem references are never
//! handed back out.

use log::debug;

// ============================================================================
// Subsystem capabilities
// ============================================================================

pub trait Amplifier {
    fn power_on(&mut self);
    fn set_volume(&mut self, level: u8);
    fn power_off(&mut self);
}

pub trait Projector {
    fn power_on(&mut self);
    fn wide_screen_mode(&mut self);
    fn power_off(&mut self);
}

pub trait Screen {
    fn lower(&mut self);
    fn raise(&mut self);
}

pub trait MediaSource {
    fn play(&mut self, title: &str);
    fn stop(&mut self);
}

// ============================================================================
// Stock in-memory subsystems
// ============================================================================

#[derive(Debug, Default)]
pub struct BasicAmplifier {
    powered: bool,
    volume: u8,
}

impl BasicAmplifier {
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }
}

impl Amplifier for BasicAmplifier {
    fn power_on(&mut self) {
        self.powered = true;
    }

    fn set_volume(&mut self, level: u8) {
        self.volume = level;
    }

    fn power_off(&mut self) {
        self.powered = false;
    }
}

#[derive(Debug, Default)]
pub struct BasicProjector {
    powered: bool,
    wide: bool,
}

impl BasicProjector {
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    pub fn is_wide(&self) -> bool {
        self.wide
    }
}

impl Projector for BasicProjector {
    fn power_on(&mut self) {
        self.powered = true;
    }

    fn wide_screen_mode(&mut self) {
        self.wide = true;
    }

    fn power_off(&mut self) {
        self.powered = false;
        self.wide = false;
    }
}

#[derive(Debug, Default)]
pub struct RollerScreen {
    lowered: bool,
}

impl RollerScreen {
    pub fn is_lowered(&self) -> bool {
        self.lowered
    }
}

impl Screen for RollerScreen {
    fn lower(&mut self) {
        self.lowered = true;
    }

    fn raise(&mut self) {
        self.lowered = false;
    }
}

#[derive(Debug, Default)]
pub struct DiscPlayer {
    playing: Option<String>,
}

impl DiscPlayer {
    pub fn now_playing(&self) -> Option<&str> {
        self.playing.as_deref()
    }
}

impl MediaSource for DiscPlayer {
    fn play(&mut self, title: &str) {
        self.playing = Some(title.to_string());
    }

    fn stop(&mut self) {
        self.playing = None;
    }
}

// ============================================================================
// The facade
// ============================================================================

pub struct HomeTheater {
    amp: Box<dyn Amplifier>,
    projector: Box<dyn Projector>,
    screen: Box<dyn Screen>,
    source: Box<dyn MediaSource>,
}

impl HomeTheater {
    pub fn new(
        amp: Box<dyn Amplifier>,
        projector: Box<dyn Projector>,
        screen: Box<dyn Screen>,
        source: Box<dyn MediaSource>,
    ) -> Self {
        Self {
            amp,
            projector,
            screen,
            source,
        }
    }

    /// One call, fixed order: screen down, projector up and wide, amp on
    /// at a sane volume, then the feature starts.
    pub fn start_show(&mut self, title: &str) {
        debug!("theater: start_show({title})");
        self.screen.lower();
        self.projector.power_on();
        self.projector.wide_screen_mode();
        self.amp.power_on();
        self.amp.set_volume(5);
        self.source.play(title);
    }

    /// Teardown in reverse: stop the feature, power down, stow the screen.
    pub fn end_show(&mut self) {
        debug!("theater: end_show");
        self.source.stop();
        self.amp.power_off();
        self.projector.power_off();
        self.screen.raise();
    }
}
