//! Duck behavior slots: one composite entity, three independently
//! swappable capabilities.
//!
//! A duck kind differs from another only in its name and in which slots
//! happen to be filled; the behaviors themselves are interchangeable
//! across every duck. Calling through a slot is a single-level
//! delegation, and an unset slot is a typed failure rather than a quiet
//! shrug.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BehaviorError {
    #[error("no {slot} behavior bound")]
    MissingBehavior { slot: &'static str },
}

// ============================================================================
// Capabilities and stock behaviors
// ============================================================================

pub trait Sound {
    fn make_sound(&self) -> String;
}

pub trait Swim {
    fn swim(&self) -> String;
}

pub trait Flight {
    fn fly(&self) -> String;
}

pub struct Quack;

impl Sound for Quack {
    fn make_sound(&self) -> String {
        "quack".to_string()
    }
}

pub struct Squeak;

impl Sound for Squeak {
    fn make_sound(&self) -> String {
        "squeak".to_string()
    }
}

/// A bound no-op: the slot is filled, the duck just says nothing.
/// Distinct from a slot that was never set.
pub struct MuteSound;

impl Sound for MuteSound {
    fn make_sound(&self) -> String {
        String::new()
    }
}

pub struct Paddle;

impl Swim for Paddle {
    fn swim(&self) -> String {
        "paddles across the pond".to_string()
    }
}

pub struct Float;

impl Swim for Float {
    fn swim(&self) -> String {
        "bobs along on the surface".to_string()
    }
}

pub struct WingFlight;

impl Flight for WingFlight {
    fn fly(&self) -> String {
        "flies off on real wings".to_string()
    }
}

pub struct Grounded;

impl Flight for Grounded {
    fn fly(&self) -> String {
        "stays on the ground".to_string()
    }
}

// ============================================================================
// The composite
// ============================================================================

pub struct Duck {
    name: String,
    sound: Option<Box<dyn Sound>>,
    swim: Option<Box<dyn Swim>>,
    flight: Option<Box<dyn Flight>>,
}

impl Duck {
    /// A new duck has every slot unset.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sound: None,
            swim: None,
            flight: None,
        }
    }

    pub fn with_sound(mut self, behavior: impl Sound + 'static) -> Self {
        self.sound = Some(Box::new(behavior));
        self
    }

    pub fn with_swim(mut self, behavior: impl Swim + 'static) -> Self {
        self.swim = Some(Box::new(behavior));
        self
    }

    pub fn with_flight(mut self, behavior: impl Flight + 'static) -> Self {
        self.flight = Some(Box::new(behavior));
        self
    }

    /// Slots can be rebound at any time; nothing else is touched.
    pub fn set_sound(&mut self, behavior: impl Sound + 'static) {
        self.sound = Some(Box::new(behavior));
    }

    pub fn set_swim(&mut self, behavior: impl Swim + 'static) {
        self.swim = Some(Box::new(behavior));
    }

    pub fn set_flight(&mut self, behavior: impl Flight + 'static) {
        self.flight = Some(Box::new(behavior));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn perform_sound(&self) -> Result<String, BehaviorError> {
        self.sound
            .as_ref()
            .map(|behavior| behavior.make_sound())
            .ok_or(BehaviorError::MissingBehavior { slot: "sound" })
    }

    pub fn perform_swim(&self) -> Result<String, BehaviorError> {
        self.swim
            .as_ref()
            .map(|behavior| behavior.swim())
            .ok_or(BehaviorError::MissingBehavior { slot: "swim" })
    }

    pub fn perform_flight(&self) -> Result<String, BehaviorError> {
        self.flight
            .as_ref()
            .map(|behavior| behavior.fly())
            .ok_or(BehaviorError::MissingBehavior { slot: "flight" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_mallard() -> Duck {
        Duck::new("mallard")
            .with_sound(Quack)
            .with_swim(Paddle)
            .with_flight(WingFlight)
    }

    #[test]
    fn test_slots_delegate_directly() {
        let duck = sample_mallard();

        assert_eq!(duck.perform_sound().unwrap(), "quack");
        assert_eq!(duck.perform_swim().unwrap(), "paddles across the pond");
        assert_eq!(duck.perform_flight().unwrap(), "flies off on real wings");
    }

    #[test]
    fn test_unset_slot_is_a_typed_failure() {
        let duck = Duck::new("decoy");

        assert_eq!(
            duck.perform_sound(),
            Err(BehaviorError::MissingBehavior { slot: "sound" })
        );
        assert_eq!(
            duck.perform_flight(),
            Err(BehaviorError::MissingBehavior { slot: "flight" })
        );
    }

    #[test]
    fn test_mute_is_distinct_from_unset() {
        let rubber = Duck::new("rubber").with_sound(MuteSound);
        let decoy = Duck::new("decoy");

        assert_eq!(rubber.perform_sound(), Ok(String::new()));
        assert!(decoy.perform_sound().is_err());
    }

    #[test]
    fn test_reassignment_changes_subsequent_calls() {
        let mut duck = sample_mallard();
        assert_eq!(duck.perform_sound().unwrap(), "quack");

        duck.set_sound(Squeak);

        assert_eq!(duck.perform_sound().unwrap(), "squeak");
        // Other slots are untouched.
        assert_eq!(duck.perform_swim().unwrap(), "paddles across the pond");
    }

    #[test]
    fn test_reassignment_does_not_affect_sibling_ducks() {
        let mut first = Duck::new("first").with_sound(Quack);
        let second = Duck::new("second").with_sound(Quack);

        first.set_sound(MuteSound);

        assert_eq!(first.perform_sound(), Ok(String::new()));
        assert_eq!(second.perform_sound().unwrap(), "quack");
    }

    #[test]
    fn test_kinds_differ_only_in_exposed_slots() {
        // A rubber duck squeaks and floats but never flies; the slot is
        // simply left unset.
        let rubber = Duck::new("rubber").with_sound(Squeak).with_swim(Float);

        assert_eq!(rubber.perform_sound().unwrap(), "squeak");
        assert_eq!(
            rubber.perform_flight(),
            Err(BehaviorError::MissingBehavior { slot: "flight" })
        );
    }
}
