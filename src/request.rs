use serde::{Deserialize, Serialize};

/// A request to the mock service.
///
/// Each variant carries exactly the data its kind requires. `max` must
/// be finite and non-negative; the dispatcher does not validate it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Request {
    /// Always succeeds with a random number in `[0, max)`.
    GetRandomNumber(f64),

    /// Always fails with a randomly chosen error kind.
    GetAnError,

    /// Coin flip between the two behaviors above.
    GetNumberOrError(f64),
}
