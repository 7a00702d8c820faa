use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::task::{Context, Poll};

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::{sleep_until, Instant};

use crate::errors::ServiceError;
use crate::outcome;
use crate::request::Request;
use crate::response::Response;
use crate::RESPONSE_LATENCY;

/// The eventual result of an [`Operation`].
pub type Outcome = Result<Response, ServiceError>;

/// The mock service's request dispatcher.
///
/// Explicitly constructed and passed by reference (or `Arc`) wherever a
/// backend handle is needed; there is no ambient global instance.
/// [`send`](MockService::send) never blocks and many requests may be in
/// flight independently.
pub struct MockService {
    rng: Mutex<StdRng>,
}

impl MockService {
    /// Creates a service whose draws are seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Creates a service with a deterministic draw sequence. Intended
    /// for tests that want reproducible outcomes.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Dispatches a request, returning immediately with the pending
    /// operation.
    ///
    /// The success-vs-failure decision and the payload draw happen here,
    /// at dispatch time; the returned [`Operation`] only holds the
    /// outcome back until its timer fires, [`RESPONSE_LATENCY`] after
    /// this call.
    pub fn send(&self, request: Request) -> Operation {
        debug!("dispatching request: {request:?}");
        Operation::new(self.decide(request))
    }

    /// Applies the decision policy for one request.
    fn decide(&self, request: Request) -> Outcome {
        let mut rng = self.rng.lock().unwrap();
        match request {
            Request::GetRandomNumber(max) => Ok(outcome::random_number(&mut *rng, max)),
            Request::GetAnError => Err(outcome::random_error(&mut *rng)),
            Request::GetNumberOrError(max) => {
                // Uniform coin flip: 0 succeeds, 1 fails.
                if rng.gen_range(0..2) == 0 {
                    Ok(outcome::random_number(&mut *rng, max))
                } else {
                    Err(outcome::random_error(&mut *rng))
                }
            }
        }
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

/// One in-flight request.
///
/// Owns its delivery timer exclusively and resolves exactly once, to
/// the outcome fixed at dispatch time. There is no way to cancel it
/// short of dropping the future unawaited.
pub struct Operation {
    inner: Pin<Box<dyn Future<Output = Outcome> + Send>>,
}

impl Operation {
    fn new(outcome: Outcome) -> Self {
        // The delivery deadline is anchored to dispatch, not to the
        // first poll; an operation awaited late may already be due.
        let deadline = Instant::now() + RESPONSE_LATENCY;
        let inner = Box::pin(async move {
            sleep_until(deadline).await;
            outcome
        });
        Self { inner }
    }
}

impl Future for Operation {
    type Output = Outcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.as_mut().poll(cx)
    }
}
