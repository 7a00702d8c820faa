//! A mock asynchronous backend service.
//!
//! Stands in for a not-yet-built remote service so client code can
//! exercise its success and failure handling before the real thing
//! exists. Every response is synthetic: the dispatcher decides success
//! vs. failure per request kind, draws a payload, and delivers it after
//! a fixed artificial latency.
//!
//! # Usage
//!
//! ```no_run
//! use mocksvc::{MockService, Request, Response};
//!
//! # async fn demo() {
//! let service = MockService::new();
//!
//! match service.send(Request::GetRandomNumber(10.0)).await {
//!     Ok(Response::RandomNumber(n)) => println!("got {n}"),
//!     Err(e) => println!("failed: {e}"),
//! }
//! # }
//! ```
//!
//! Multiple requests may be in flight at once; each [`Operation`] owns
//! its own timer and resolves exactly once. There is no cancellation.

use std::time::Duration;

mod errors;
mod outcome;
mod request;
mod response;
mod service;

pub use errors::ServiceError;
pub use outcome::ERROR_MESSAGE;
pub use request::Request;
pub use response::Response;
pub use service::{MockService, Operation, Outcome};

/// Delay between dispatch and delivery. Simulated latency only; fixed
/// by contract, not configuration.
#[cfg(not(test))]
pub const RESPONSE_LATENCY: Duration = Duration::from_millis(3000);

#[cfg(test)]
pub const RESPONSE_LATENCY: Duration = Duration::from_millis(30);
