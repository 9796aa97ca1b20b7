//! Commands with undo: a command is an immutable binding of one receiver
//! and one action; an invoker holds commands in fixed, addressable slots
//! and keeps a most-recent-first undo history.
//!
//! The history is unbounded on purpose; trimming it would change which
//! presses can be taken back. A failed undo leaves the history exactly
//! as it was, mirroring the state machines' reject-leaves-state-unchanged
//! contract.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("undo is not supported for '{command}'")]
    UndoNotSupported { command: String },

    #[error("slot {slot} does not exist")]
    NoSuchSlot { slot: usize },

    #[error("slot {slot} has no command assigned")]
    EmptySlot { slot: usize },

    #[error("nothing to undo")]
    NothingToUndo,
}

pub trait Command {
    fn name(&self) -> &str;

    fn execute(&mut self);

    /// The exact inverse of `execute`. Command types without an inverse
    /// keep this default and report the failure instead of silently
    /// doing nothing.
    fn undo(&mut self) -> Result<(), CommandError> {
        Err(CommandError::UndoNotSupported {
            command: self.name().to_string(),
        })
    }
}

// ============================================================================
// Receivers
// ============================================================================

#[derive(Debug, Default)]
pub struct Light {
    on: bool,
}

impl Light {
    pub fn switch_on(&mut self) {
        self.on = true;
    }

    pub fn switch_off(&mut self) {
        self.on = false;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

#[derive(Debug, Default)]
pub struct Bell {
    rings: u32,
}

impl Bell {
    pub fn ring(&mut self) {
        self.rings += 1;
    }

    pub fn rings(&self) -> u32 {
        self.rings
    }
}

// ============================================================================
// Concrete commands
// ============================================================================

pub struct SwitchOn {
    light: Rc<RefCell<Light>>,
}

impl SwitchOn {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        Self { light }
    }
}

impl Command for SwitchOn {
    fn name(&self) -> &str {
        "switch on"
    }

    fn execute(&mut self) {
        self.light.borrow_mut().switch_on();
    }

    fn undo(&mut self) -> Result<(), CommandError> {
        self.light.borrow_mut().switch_off();
        Ok(())
    }
}

pub struct SwitchOff {
    light: Rc<RefCell<Light>>,
}

impl SwitchOff {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        Self { light }
    }
}

impl Command for SwitchOff {
    fn name(&self) -> &str {
        "switch off"
    }

    fn execute(&mut self) {
        self.light.borrow_mut().switch_off();
    }

    fn undo(&mut self) -> Result<(), CommandError> {
        self.light.borrow_mut().switch_on();
        Ok(())
    }
}

/// One-shot: a ring cannot be un-rung, so `undo` keeps the default.
pub struct RingBell {
    bell: Rc<RefCell<Bell>>,
}

impl RingBell {
    pub fn new(bell: Rc<RefCell<Bell>>) -> Self {
        Self { bell }
    }
}

impl Command for RingBell {
    fn name(&self) -> &str {
        "ring bell"
    }

    fn execute(&mut self) {
        self.bell.borrow_mut().ring();
    }
}

// ============================================================================
// The invoker
// ============================================================================

type SlotCommand = Rc<RefCell<dyn Command>>;

pub struct Invoker {
    slots: Vec<Option<SlotCommand>>,
    history: Vec<SlotCommand>,
}

impl Invoker {
    /// A fixed bank of `count` addressable slots and an empty history.
    pub fn with_slots(count: usize) -> Self {
        Self {
            slots: vec![None; count],
            history: Vec::new(),
        }
    }

    pub fn assign(&mut self, slot: usize, command: impl Command + 'static) -> Result<(), CommandError> {
        let entry = self
            .slots
            .get_mut(slot)
            .ok_or(CommandError::NoSuchSlot { slot })?;
        *entry = Some(Rc::new(RefCell::new(command)));
        Ok(())
    }

    /// Executes the command in `slot` and pushes it onto the history.
    pub fn press(&mut self, slot: usize) -> Result<(), CommandError> {
        let command = self
            .slots
            .get(slot)
            .ok_or(CommandError::NoSuchSlot { slot })?
            .clone()
            .ok_or(CommandError::EmptySlot { slot })?;

        command.borrow_mut().execute();
        self.history.push(command);
        Ok(())
    }

    /// Undoes the most recent press. The entry is only removed once its
    /// undo succeeds, so a failed undo leaves the invoker as it was.
    pub fn undo_last(&mut self) -> Result<(), CommandError> {
        let command = self
            .history
            .last()
            .cloned()
            .ok_or(CommandError::NothingToUndo)?;

        command.borrow_mut().undo()?;
        self.history.pop();
        Ok(())
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
