// Statistical tests against the decision policy's distributions. Trial
// counts and tolerances follow a plain binomial bound: at n = 2000 the
// standard deviation of a fair-coin fraction is ~0.011, so +/- 0.05 is
// over four sigma and effectively never flakes.

use futures_util::future::join_all;
use mocksvc::{MockService, Request, ServiceError};

const TRIALS: usize = 2000;
const TOLERANCE: f64 = 0.05;

#[tokio::test(start_paused = true)]
async fn number_or_error_is_a_fair_coin() {
    let service = MockService::new();

    let operations: Vec<_> = (0..TRIALS)
        .map(|_| service.send(Request::GetNumberOrError(1.0)))
        .collect();

    let successes = join_all(operations)
        .await
        .into_iter()
        .filter(Result::is_ok)
        .count();

    let fraction = successes as f64 / TRIALS as f64;
    assert!(
        (fraction - 0.5).abs() < TOLERANCE,
        "success fraction {fraction} outside 0.5 +/- {TOLERANCE}"
    );
}

#[tokio::test(start_paused = true)]
async fn error_kinds_are_a_fair_coin() {
    let service = MockService::new();

    let operations: Vec<_> = (0..TRIALS)
        .map(|_| service.send(Request::GetAnError))
        .collect();

    let mut with_message = 0usize;
    for outcome in join_all(operations).await {
        match outcome {
            Err(ServiceError::ErrorWithMessage(_)) => with_message += 1,
            Err(ServiceError::GenericError) => {}
            Ok(response) => panic!("GetAnError must never succeed, got {response:?}"),
        }
    }

    let fraction = with_message as f64 / TRIALS as f64;
    assert!(
        (fraction - 0.5).abs() < TOLERANCE,
        "message-error fraction {fraction} outside 0.5 +/- {TOLERANCE}"
    );
}

#[tokio::test(start_paused = true)]
async fn random_number_covers_the_range() {
    let service = MockService::new();
    let max = 100.0;

    let operations: Vec<_> = (0..TRIALS)
        .map(|_| service.send(Request::GetRandomNumber(max)))
        .collect();

    let mut low_half = 0usize;
    for outcome in join_all(operations).await {
        let value = outcome.expect("GetRandomNumber must succeed").value();
        assert!((0.0..max).contains(&value));
        if value < max / 2.0 {
            low_half += 1;
        }
    }

    // Uniformity smoke check, not a full goodness-of-fit test.
    let fraction = low_half as f64 / TRIALS as f64;
    assert!(
        (fraction - 0.5).abs() < TOLERANCE,
        "low-half fraction {fraction} outside 0.5 +/- {TOLERANCE}"
    );
}
