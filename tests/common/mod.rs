use demandpay::application::workflow::ApprovalWorkflow;
use demandpay::domain::demand::{Amount, Beneficiary, PendingDemand};
use demandpay::infrastructure::in_memory::{RecordingNavigator, RecordingNotifier, ScriptedGateway};
use rust_decimal_macros::dec;

pub const ACCOUNT_ID: &str = "bd348fa7-0388-4725-b316-cb3fef9bd664";
pub const MEMBERSHIP_ID: &str = "membership-1";

pub fn sample_demand() -> PendingDemand {
    PendingDemand {
        id: "t1".to_string(),
        amount: Amount {
            value: dec!(50.00),
            currency: "EUR".to_string(),
        },
        beneficiary: Beneficiary {
            name: "ERIKA".to_string(),
            iban: "ES6411112222008763481670".to_string(),
        },
        created_at: "2025-01-08T12:47:44.170Z".to_string(),
    }
}

pub struct Harness {
    pub workflow: ApprovalWorkflow,
    pub gateway: ScriptedGateway,
    pub navigator: RecordingNavigator,
    pub notifier: RecordingNotifier,
}

pub fn harness(gateway: ScriptedGateway) -> Harness {
    let navigator = RecordingNavigator::new();
    let notifier = RecordingNotifier::new();
    let workflow = ApprovalWorkflow::new(
        Box::new(gateway.clone()),
        Box::new(navigator.clone()),
        Box::new(notifier.clone()),
        ACCOUNT_ID,
        MEMBERSHIP_ID,
    );
    Harness {
        workflow,
        gateway,
        navigator,
        notifier,
    }
}
