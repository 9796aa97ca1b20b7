//! A turkey pressed into duck service.
//!
//! The adapter owns exactly one turkey and re-exposes it under the duck
//! behavior capabilities from [`crate::strategy`]. Each target call has
//! a fixed translation: one sound is one gobble, and one flight fans out
//! into five short hops. The bird itself is never handed back out.

use itertools::Itertools;

use crate::strategy::{Flight, Sound};

/// The foreign capability set. Turkeys gobble and only manage short hops.
#[derive(Debug, Default)]
pub struct Turkey;

impl Turkey {
    pub fn gobble(&self) -> String {
        "gobble".to_string()
    }

    pub fn flap(&self) -> String {
        "short hop".to_string()
    }
}

pub struct TurkeyAdapter {
    inner: Turkey,
}

impl TurkeyAdapter {
    /// How many turkey hops stand in for one duck flight.
    pub const FLAPS_PER_FLIGHT: usize = 5;

    pub fn new(inner: Turkey) -> Self {
        Self { inner }
    }
}

impl Sound for TurkeyAdapter {
    fn make_sound(&self) -> String {
        self.inner.gobble()
    }
}

impl Flight for TurkeyAdapter {
    fn fly(&self) -> String {
        (0..Self::FLAPS_PER_FLIGHT)
            .map(|_| self.inner.flap())
            .join(", ")
    }
}
