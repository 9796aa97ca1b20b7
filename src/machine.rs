//! Event-driven state machines: a coin-operated vending machine and a
//! small media player.
//!
//! States are closed enum sets. Every (state, event) pair either moves
//! the machine forward with an output line or rejects with a reason, and
//! a rejected event leaves the machine exactly as it was. A state never
//! holds a reference back to its machine; it receives a narrow handle to
//! the one resource it may touch.

use log::trace;
use thiserror::Error;

/// A rejected event. The machine stays where it was and reports why.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot {event} while {state}: {reason}")]
pub struct Rejection {
    pub state: &'static str,
    pub event: &'static str,
    pub reason: &'static str,
}

// ============================================================================
// Vending machine
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendState {
    NoInput,
    HasInput,
    Dispensing,
    Depleted,
}

impl VendState {
    fn label(self) -> &'static str {
        match self {
            VendState::NoInput => "waiting for a coin",
            VendState::HasInput => "holding a coin",
            VendState::Dispensing => "dispensing",
            VendState::Depleted => "depleted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendEvent {
    InsertCoin,
    EjectCoin,
    TurnCrank,
    /// Fired internally right after a successful crank.
    Dispense,
}

impl VendEvent {
    fn label(self) -> &'static str {
        match self {
            VendEvent::InsertCoin => "insert a coin",
            VendEvent::EjectCoin => "eject the coin",
            VendEvent::TurnCrank => "turn the crank",
            VendEvent::Dispense => "dispense",
        }
    }
}

/// The counted resource, and the only thing a state may mutate. States
/// get this handle per transition instead of a back pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Inventory {
    count: u32,
}

impl Inventory {
    fn take_one(&mut self) -> u32 {
        self.count = self.count.saturating_sub(1);
        self.count
    }
}

enum Step {
    Next { state: VendState, output: String },
    Reject { reason: &'static str },
}

impl VendState {
    /// The full transition table. Each state decides, for every event,
    /// either the next state plus output or a rejection.
    fn handle(self, event: VendEvent, inventory: &mut Inventory) -> Step {
        use VendEvent::*;
        use VendState::*;

        match (self, event) {
            (NoInput, InsertCoin) => Step::Next {
                state: HasInput,
                output: "coin accepted".to_string(),
            },
            (NoInput, EjectCoin) => Step::Reject {
                reason: "there is no coin to return",
            },
            (NoInput, TurnCrank) => Step::Reject {
                reason: "insert a coin first",
            },
            (HasInput, InsertCoin) => Step::Reject {
                reason: "a coin is already in the slot",
            },
            (HasInput, EjectCoin) => Step::Next {
                state: NoInput,
                output: "coin returned".to_string(),
            },
            (HasInput, TurnCrank) => Step::Next {
                state: Dispensing,
                output: "crank turned".to_string(),
            },
            (Dispensing, Dispense) => {
                let left = inventory.take_one();
                let state = if left == 0 { Depleted } else { NoInput };
                Step::Next {
                    state,
                    output: format!("dispensed one item, {left} left"),
                }
            }
            (Dispensing, _) => Step::Reject {
                reason: "busy dispensing",
            },
            (Depleted, _) => Step::Reject {
                reason: "the machine is empty",
            },
            (_, Dispense) => Step::Reject {
                reason: "nothing was vended",
            },
        }
    }
}

#[derive(Debug)]
pub struct VendingMachine {
    state: VendState,
    inventory: Inventory,
}

impl VendingMachine {
    /// Starts with the given inventory. An empty machine begins depleted.
    pub fn new(count: u32) -> Self {
        let state = if count == 0 {
            VendState::Depleted
        } else {
            VendState::NoInput
        };
        Self {
            state,
            inventory: Inventory { count },
        }
    }

    pub fn state(&self) -> VendState {
        self.state
    }

    pub fn stock(&self) -> u32 {
        self.inventory.count
    }

    /// Feeds one event to the current state. A successful crank is
    /// immediately followed by the internal dispense, so a vend that
    /// empties the inventory lands in `Depleted` without another
    /// caller-visible event.
    pub fn handle(&mut self, event: VendEvent) -> Result<String, Rejection> {
        match self.state.handle(event, &mut self.inventory) {
            Step::Next { state, output } => {
                trace!("vend: {:?} --{:?}--> {:?}", self.state, event, state);
                self.state = state;
                if self.state == VendState::Dispensing {
                    let followup = self.handle(VendEvent::Dispense)?;
                    return Ok(format!("{output}; {followup}"));
                }
                Ok(output)
            }
            Step::Reject { reason } => Err(Rejection {
                state: self.state.label(),
                event: event.label(),
                reason,
            }),
        }
    }

    /// Maintenance refill, deliberately outside the event alphabet.
    /// Restocking a depleted machine reopens it for coins.
    pub fn refill(&mut self, count: u32) {
        self.inventory.count += count;
        if self.state == VendState::Depleted && self.inventory.count > 0 {
            self.state = VendState::NoInput;
        }
    }
}

// ============================================================================
// Media player
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Stopped,
    Playing,
    Paused,
}

impl PlayerState {
    fn label(self) -> &'static str {
        match self {
            PlayerState::Stopped => "stopped",
            PlayerState::Playing => "playing",
            PlayerState::Paused => "paused",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    Play,
    Pause,
    Stop,
}

impl PlayerEvent {
    fn label(self) -> &'static str {
        match self {
            PlayerEvent::Play => "play",
            PlayerEvent::Pause => "pause",
            PlayerEvent::Stop => "stop",
        }
    }
}

/// The same contract as the vending machine, minus the counted resource:
/// one current state, a total transition table, typed rejections.
#[derive(Debug)]
pub struct Player {
    state: PlayerState,
}

impl Player {
    pub fn new() -> Self {
        Self {
            state: PlayerState::Stopped,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn handle(&mut self, event: PlayerEvent) -> Result<String, Rejection> {
        use PlayerEvent::*;
        use PlayerState::*;

        let (next, output): (PlayerState, &str) = match (self.state, event) {
            (Stopped, Play) => (Playing, "playback started"),
            (Playing, Pause) => (Paused, "playback paused"),
            (Playing, Stop) => (Stopped, "playback stopped"),
            (Paused, Play) => (Playing, "playback resumed"),
            (Paused, Stop) => (Stopped, "playback stopped"),
            (Stopped, Pause) => return Err(self.reject(event, "nothing is playing")),
            (Stopped, Stop) => return Err(self.reject(event, "already stopped")),
            (Playing, Play) => return Err(self.reject(event, "already playing")),
            (Paused, Pause) => return Err(self.reject(event, "already paused")),
        };

        trace!("player: {:?} --{:?}--> {:?}", self.state, event, next);
        self.state = next;
        Ok(output.to_string())
    }

    fn reject(&self, event: PlayerEvent, reason: &'static str) -> Rejection {
        Rejection {
            state: self.state.label(),
            event: event.label(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_item_vend_ends_depleted() {
        let mut machine = VendingMachine::new(1);

        machine.handle(VendEvent::InsertCoin).unwrap();
        let output = machine.handle(VendEvent::TurnCrank).unwrap();

        assert!(output.contains("dispensed one item"));
        assert_eq!(machine.state(), VendState::Depleted);
        assert_eq!(machine.stock(), 0);
    }

    #[test]
    fn test_vend_with_stock_left_returns_to_no_input() {
        let mut machine = VendingMachine::new(2);

        machine.handle(VendEvent::InsertCoin).unwrap();
        machine.handle(VendEvent::TurnCrank).unwrap();

        assert_eq!(machine.state(), VendState::NoInput);
        assert_eq!(machine.stock(), 1);
    }

    #[test]
    fn test_eject_without_coin_is_rejected_and_state_unchanged() {
        let mut machine = VendingMachine::new(3);

        let rejection = machine.handle(VendEvent::EjectCoin).unwrap_err();

        assert_eq!(rejection.reason, "there is no coin to return");
        assert_eq!(machine.state(), VendState::NoInput);
        assert_eq!(machine.stock(), 3);
    }

    #[test]
    fn test_double_insert_is_rejected() {
        let mut machine = VendingMachine::new(3);

        machine.handle(VendEvent::InsertCoin).unwrap();
        let rejection = machine.handle(VendEvent::InsertCoin).unwrap_err();

        assert_eq!(rejection.reason, "a coin is already in the slot");
        assert_eq!(machine.state(), VendState::HasInput);
    }

    #[test]
    fn test_eject_returns_the_coin() {
        let mut machine = VendingMachine::new(3);

        machine.handle(VendEvent::InsertCoin).unwrap();
        let output = machine.handle(VendEvent::EjectCoin).unwrap();

        assert_eq!(output, "coin returned");
        assert_eq!(machine.state(), VendState::NoInput);
    }

    #[test]
    fn test_depleted_rejects_everything() {
        let mut machine = VendingMachine::new(0);
        assert_eq!(machine.state(), VendState::Depleted);

        for event in [VendEvent::InsertCoin, VendEvent::EjectCoin, VendEvent::TurnCrank] {
            let rejection = machine.handle(event).unwrap_err();
            assert_eq!(rejection.reason, "the machine is empty");
            assert_eq!(machine.state(), VendState::Depleted);
        }
    }

    #[test]
    fn test_external_dispense_is_rejected() {
        let mut machine = VendingMachine::new(3);

        let rejection = machine.handle(VendEvent::Dispense).unwrap_err();

        assert_eq!(rejection.reason, "nothing was vended");
        assert_eq!(machine.stock(), 3);
    }

    #[test]
    fn test_refill_reopens_a_depleted_machine() {
        let mut machine = VendingMachine::new(1);
        machine.handle(VendEvent::InsertCoin).unwrap();
        machine.handle(VendEvent::TurnCrank).unwrap();
        assert_eq!(machine.state(), VendState::Depleted);

        machine.refill(5);

        assert_eq!(machine.state(), VendState::NoInput);
        assert_eq!(machine.stock(), 5);
        machine.handle(VendEvent::InsertCoin).unwrap();
        machine.handle(VendEvent::TurnCrank).unwrap();
        assert_eq!(machine.stock(), 4);
    }

    #[test]
    fn test_rejection_displays_its_reason() {
        let mut machine = VendingMachine::new(1);
        let rejection = machine.handle(VendEvent::TurnCrank).unwrap_err();

        let message = rejection.to_string();
        assert!(message.contains("turn the crank"));
        assert!(message.contains("insert a coin first"));
    }

    #[test]
    fn test_player_full_session() {
        let mut player = Player::new();

        player.handle(PlayerEvent::Play).unwrap();
        player.handle(PlayerEvent::Pause).unwrap();
        assert_eq!(player.state(), PlayerState::Paused);

        let output = player.handle(PlayerEvent::Play).unwrap();
        assert_eq!(output, "playback resumed");

        player.handle(PlayerEvent::Stop).unwrap();
        assert_eq!(player.state(), PlayerState::Stopped);
    }

    #[test]
    fn test_player_pause_while_stopped_is_rejected() {
        let mut player = Player::new();

        let rejection = player.handle(PlayerEvent::Pause).unwrap_err();

        assert_eq!(rejection.reason, "nothing is playing");
        assert_eq!(player.state(), PlayerState::Stopped);
    }
}
