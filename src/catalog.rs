//! Pizza factories: a closed variant set with a total selector, a store
//! that takes its factory by injection, and an abstract room-factory
//! family whose products cannot mix.

use log::debug;

// ============================================================================
// Simple factory: closed variant set, total selector resolution
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PizzaKind {
    Cheese,
    Veggie,
    MeatLovers,
}

impl PizzaKind {
    /// Resolves a free-form selector, case-insensitively. Unrecognized
    /// selectors fall back to `Cheese` on purpose: ordering something
    /// off-menu gets you the house pizza, not an error.
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim().to_ascii_lowercase().as_str() {
            "cheese" => PizzaKind::Cheese,
            "veggie" => PizzaKind::Veggie,
            "meat" | "meat lovers" | "meat-lovers" | "meat_lovers" => PizzaKind::MeatLovers,
            _ => PizzaKind::Cheese,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PizzaKind::Cheese => "cheese",
            PizzaKind::Veggie => "veggie",
            PizzaKind::MeatLovers => "meat lovers",
        }
    }
}

/// An immutable product. A pizza is its kind; there is no other state.
#[derive(Debug, Clone, PartialEq)]
pub struct Pizza {
    kind: PizzaKind,
}

impl Pizza {
    fn new(kind: PizzaKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> PizzaKind {
        self.kind
    }

    /// Ordered preparation steps for this kind.
    pub fn prepare(&self) -> Vec<String> {
        let mut steps = vec![format!("roll dough for {}", self.kind.label())];
        match self.kind {
            PizzaKind::Cheese => steps.push("add mozzarella".to_string()),
            PizzaKind::Veggie => steps.push("add grilled vegetables".to_string()),
            PizzaKind::MeatLovers => {
                steps.push("add pepperoni".to_string());
                steps.push("add sausage".to_string());
            }
        }
        steps
    }

    pub fn cook(&self) -> String {
        format!("bake {} at 220C for 12 minutes", self.kind.label())
    }

    pub fn cost(&self) -> f64 {
        match self.kind {
            PizzaKind::Cheese => 7.50,
            PizzaKind::Veggie => 8.25,
            PizzaKind::MeatLovers => 9.75,
        }
    }
}

/// The factory seam. `Store` only ever sees this trait, so a test can
/// hand it a stub instead of the real menu.
pub trait PizzaFactory {
    fn create(&self, selector: &str) -> Pizza;
}

/// The stock menu: selector resolution plus construction, nothing else.
#[derive(Debug, Default)]
pub struct Menu;

impl PizzaFactory for Menu {
    fn create(&self, selector: &str) -> Pizza {
        Pizza::new(PizzaKind::from_selector(selector))
    }
}

// ============================================================================
// Store with an injected factory
// ============================================================================

pub struct Store {
    factory: Box<dyn PizzaFactory>,
    last_order: Option<Pizza>,
}

impl Store {
    pub fn new(factory: Box<dyn PizzaFactory>) -> Self {
        Self {
            factory,
            last_order: None,
        }
    }

    /// Orders a pizza and keeps it as the current order.
    pub fn order(&mut self, selector: &str) -> &Pizza {
        let pizza = self.factory.create(selector);
        debug!("store: ordered '{selector}' -> {:?}", pizza.kind());
        self.last_order.insert(pizza)
    }

    /// Cost of the last order, `None` before anything has been ordered.
    pub fn cost(&self) -> Option<f64> {
        self.last_order.as_ref().map(Pizza::cost)
    }

    pub fn last_order(&self) -> Option<&Pizza> {
        self.last_order.as_ref()
    }
}

// ============================================================================
// Abstract factory: room families that cannot mix
// ============================================================================

pub trait Room {
    fn number(&self) -> u32;
    fn neighbor(&self) -> Option<u32>;
    fn describe(&self) -> String;
}

/// A factory for one family of rooms. The associated type pins every
/// product of a factory to that family, so a suite built through one
/// factory cannot mix families.
pub trait RoomFactory {
    type Output: Room;

    fn make_room(&self, number: u32) -> Self::Output;
    fn connect(&self, from: &mut Self::Output, to: &Self::Output);
}

/// Builds a two-room suite, binding the connect relation (room 1 leads
/// to room 2) before handing the pair back.
pub fn build_suite<F: RoomFactory>(factory: &F) -> (F::Output, F::Output) {
    let mut first = factory.make_room(1);
    let second = factory.make_room(2);
    factory.connect(&mut first, &second);
    (first, second)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdinaryRoom {
    number: u32,
    neighbor: Option<u32>,
}

impl Room for OrdinaryRoom {
    fn number(&self) -> u32 {
        self.number
    }

    fn neighbor(&self) -> Option<u32> {
        self.neighbor
    }

    fn describe(&self) -> String {
        format!("room {}", self.number)
    }
}

#[derive(Debug, Default)]
pub struct OrdinaryRooms;

impl RoomFactory for OrdinaryRooms {
    type Output = OrdinaryRoom;

    fn make_room(&self, number: u32) -> OrdinaryRoom {
        OrdinaryRoom {
            number,
            neighbor: None,
        }
    }

    fn connect(&self, from: &mut OrdinaryRoom, to: &OrdinaryRoom) {
        from.neighbor = Some(to.number);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemedRoom {
    number: u32,
    neighbor: Option<u32>,
    theme: String,
}

impl Room for ThemedRoom {
    fn number(&self) -> u32 {
        self.number
    }

    fn neighbor(&self) -> Option<u32> {
        self.neighbor
    }

    fn describe(&self) -> String {
        format!("room {} ({})", self.number, self.theme)
    }
}

/// Every room from this factory carries the factory's theme.
#[derive(Debug)]
pub struct ThemedRooms {
    theme: String,
}

impl ThemedRooms {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
        }
    }
}

impl RoomFactory for ThemedRooms {
    type Output = ThemedRoom;

    fn make_room(&self, number: u32) -> ThemedRoom {
        ThemedRoom {
            number,
            neighbor: None,
            theme: self.theme.clone(),
        }
    }

    fn connect(&self, from: &mut ThemedRoom, to: &ThemedRoom) {
        from.neighbor = Some(to.number);
    }
}
