#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Discrete navigation directive, emitted once per decision cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    Forward,
    Reverse,
    TurnLeft,
    TurnRight,
    Stop,
}
