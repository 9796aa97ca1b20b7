//! Topping wrappers over a menu item.
//!
//! Every wrapper owns exactly one inner item and satisfies the same
//! capability set, so chains compose freely. Cost is the recursive sum
//! of surcharges down to the concrete base; the description grows
//! outward, one comma-separated fragment per wrapper, outermost last.
//! Wrapping the same topping twice doubles its surcharge; nothing is
//! deduplicated.

pub trait MenuItem {
    fn cost(&self) -> f64;
    fn description(&self) -> String;
}

/// The concrete base every chain terminates at.
#[derive(Debug)]
pub struct Margherita;

impl MenuItem for Margherita {
    fn cost(&self) -> f64 {
        6.40
    }

    fn description(&self) -> String {
        "margherita".to_string()
    }
}

pub struct ExtraCheese {
    inner: Box<dyn MenuItem>,
}

impl ExtraCheese {
    pub fn new(inner: Box<dyn MenuItem>) -> Self {
        Self { inner }
    }
}

impl MenuItem for ExtraCheese {
    fn cost(&self) -> f64 {
        self.inner.cost() + 0.80
    }

    fn description(&self) -> String {
        format!("{}, extra cheese", self.inner.description())
    }
}

pub struct Olives {
    inner: Box<dyn MenuItem>,
}

impl Olives {
    pub fn new(inner: Box<dyn MenuItem>) -> Self {
        Self { inner }
    }
}

impl MenuItem for Olives {
    fn cost(&self) -> f64 {
        self.inner.cost() + 0.60
    }

    fn description(&self) -> String {
        format!("{}, olives", self.inner.description())
    }
}

pub struct TruffleOil {
    inner: Box<dyn MenuItem>,
}

impl TruffleOil {
    pub fn new(inner: Box<dyn MenuItem>) -> Self {
        Self { inner }
    }
}

impl MenuItem for TruffleOil {
    fn cost(&self) -> f64 {
        self.inner.cost() + 1.50
    }

    fn description(&self) -> String {
        format!("{}, truffle oil", self.inner.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_bare_base() {
        let item = Margherita;
        assert!(close(item.cost(), 6.40));
        assert_eq!(item.description(), "margherita");
    }

    #[test]
    fn test_single_topping_adds_its_surcharge() {
        let item = ExtraCheese::new(Box::new(Margherita));
        assert!(close(item.cost(), 6.40 + 0.80));
        assert_eq!(item.description(), "margherita, extra cheese");
    }

    #[test]
    fn test_description_order_matches_construction_order() {
        let item = Olives::new(Box::new(ExtraCheese::new(Box::new(Margherita))));
        // Innermost fragment first, outermost wrapper last.
        assert_eq!(item.description(), "margherita, extra cheese, olives");
    }

    #[test]
    fn test_double_wrap_doubles_the_surcharge() {
        let once = ExtraCheese::new(Box::new(Margherita));
        let twice = ExtraCheese::new(Box::new(ExtraCheese::new(Box::new(Margherita))));

        assert!(close(twice.cost(), Margherita.cost() + 2.0 * 0.80));
        assert!(close(twice.cost() - once.cost(), 0.80));
        assert_eq!(
            twice.description(),
            "margherita, extra cheese, extra cheese"
        );
    }

    #[test]
    fn test_mixed_chain_sums_every_layer() {
        let item = TruffleOil::new(Box::new(Olives::new(Box::new(ExtraCheese::new(
            Box::new(Margherita),
        )))));
        assert!(close(item.cost(), 6.40 + 0.80 + 0.60 + 1.50));
    }

    proptest! {
        #[test]
        fn test_n_wraps_cost_n_surcharges(n in 0usize..8) {
            let mut item: Box<dyn MenuItem> = Box::new(Margherita);
            for _ in 0..n {
                item = Box::new(Olives::new(item));
            }
            prop_assert!(close(item.cost(), 6.40 + 0.60 * n as f64));
            prop_assert_eq!(item.description().matches(", olives").count(), n);
        }
    }
}
