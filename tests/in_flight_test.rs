mod common;

use common::{harness, sample_demand};
use demandpay::application::workflow::Resolution;
use demandpay::domain::transfer::SubmissionOutcome;
use demandpay::error::TransferError;
use demandpay::infrastructure::in_memory::ScriptedGateway;
use std::sync::Arc;
use tokio::sync::Semaphore;

#[tokio::test]
async fn test_second_submission_for_same_demand_is_rejected() {
    let gate = Arc::new(Semaphore::new(0));
    let gateway = ScriptedGateway::new(SubmissionOutcome::Initiated {
        payment_id: "p1".to_string(),
    })
    .held_by(gate.clone());
    let h = harness(gateway);
    let workflow = Arc::new(h.workflow);
    let demand = sample_demand();

    let first = {
        let workflow = workflow.clone();
        let demand = demand.clone();
        tokio::spawn(async move { workflow.approve(&demand).await })
    };

    // Wait until the first submission reached the gateway.
    while h.gateway.submissions() == 0 {
        tokio::task::yield_now().await;
    }

    let second = workflow.approve(&demand).await;
    assert!(matches!(
        second,
        Err(TransferError::SubmissionInFlight { demand_id }) if demand_id == "t1"
    ));
    // The guard fails fast: no second request was issued.
    assert_eq!(h.gateway.submissions(), 1);

    // The held submission still resolves normally once released.
    gate.add_permits(1);
    let first = first.await.unwrap().unwrap();
    assert_eq!(
        first,
        Resolution::Succeeded {
            payment_id: "p1".to_string()
        }
    );
    assert_eq!(h.notifier.toasts().len(), 1);
}

#[tokio::test]
async fn test_distinct_demands_may_overlap() {
    let gate = Arc::new(Semaphore::new(0));
    let gateway = ScriptedGateway::new(SubmissionOutcome::Rejected {
        payment_id: "p1".to_string(),
    })
    .held_by(gate.clone());
    let h = harness(gateway);
    let workflow = Arc::new(h.workflow);

    let mut other = sample_demand();
    other.id = "t2".to_string();

    let first = {
        let workflow = workflow.clone();
        let demand = sample_demand();
        tokio::spawn(async move { workflow.approve(&demand).await })
    };
    let second = {
        let workflow = workflow.clone();
        let demand = other;
        tokio::spawn(async move { workflow.approve(&demand).await })
    };

    // Both submissions are allowed through the guard.
    while h.gateway.submissions() < 2 {
        tokio::task::yield_now().await;
    }

    gate.add_permits(2);
    first.await.unwrap().unwrap();
    second.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_guard_resets_after_a_failed_submission() {
    let h = harness(ScriptedGateway::rejecting("ForbiddenRejection", "Not allowed"));
    let demand = sample_demand();

    assert!(h.workflow.approve(&demand).await.is_err());
    // The demand is approvable again once the attempt settled.
    assert!(matches!(
        h.workflow.approve(&demand).await,
        Err(TransferError::Rejection { .. })
    ));
    assert_eq!(h.gateway.submissions(), 2);
}
