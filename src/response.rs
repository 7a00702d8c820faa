use serde::{Deserialize, Serialize};

/// A successful outcome payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Response {
    /// A number drawn uniformly from `[0, max)`. Fractional values are
    /// expected; nothing is rounded.
    RandomNumber(f64),
}

impl Response {
    pub fn value(&self) -> f64 {
        match self {
            Response::RandomNumber(value) => *value,
        }
    }
}
