//! Outcome synthesis: the number and error generators behind the
//! dispatcher's decision policy. Payloads are drawn here, never fetched
//! from anywhere real.

use rand::Rng;

use crate::errors::ServiceError;
use crate::response::Response;

/// The message carried by every [`ServiceError::ErrorWithMessage`].
/// The double space is intentional and part of the contract.
pub const ERROR_MESSAGE: &str = "Oh no!  Some possibly very specific error occurred!";

/// Draws a number uniformly from `[0, max)`.
///
/// A unit-interval draw scaled by `max`, so `max == 0.0` yields `0.0`
/// rather than an empty-range panic.
pub(crate) fn random_number<R: Rng>(rng: &mut R, max: f64) -> Response {
    Response::RandomNumber(rng.gen::<f64>() * max)
}

/// Picks one of the two error kinds uniformly at random.
///
/// The set and its order are observable contract: index 0 is the
/// message error, index 1 the generic error, each at probability 1/2.
pub(crate) fn random_error<R: Rng>(rng: &mut R) -> ServiceError {
    match rng.gen_range(0..2) {
        0 => ServiceError::ErrorWithMessage(ERROR_MESSAGE.to_string()),
        _ => ServiceError::GenericError,
    }
}
