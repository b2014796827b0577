use clap::{Parser, ValueEnum};
use demandpay::application::workflow::ApprovalWorkflow;
use demandpay::domain::ports::{NavigatorBox, NotifierBox, TransferGatewayBox};
use demandpay::domain::transfer::SubmissionOutcome;
use demandpay::infrastructure::graphql::GraphqlGateway;
use demandpay::infrastructure::in_memory::ScriptedGateway;
use demandpay::infrastructure::terminal::{TerminalNavigator, TerminalNotifier};
use demandpay::interfaces::graphql::demand_reader::DemandReader;
use miette::{IntoDiagnostic, Result, miette};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum ScriptedOutcome {
    Initiated,
    Rejected,
    ConsentPending,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pending demands connection document (JSON)
    input: PathBuf,

    /// Identifier of the demand to approve
    #[arg(long)]
    demand_id: String,

    /// Account the transfer is drawn from
    #[arg(long)]
    account_id: String,

    /// Account membership used for navigation and the consent return URL
    #[arg(long)]
    account_membership_id: String,

    /// GraphQL endpoint (optional). If provided, submits over HTTP;
    /// a bearer token is read from DEMANDPAY_TOKEN.
    #[arg(long, conflicts_with = "outcome")]
    endpoint: Option<String>,

    /// Scripted outcome for offline runs
    #[arg(long, value_enum, default_value = "initiated")]
    outcome: ScriptedOutcome,

    /// Consent URL answered by the scripted consent-pending outcome
    #[arg(long, default_value = "https://consent.example/pending")]
    consent_url: String,

    /// Origin used to build the consent redirect URL
    #[arg(long, default_value = "https://banking.example")]
    origin: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("demandpay=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load the pending demands list
    let file = File::open(&cli.input).into_diagnostic()?;
    let (demands, page_info) = DemandReader::new(file).read().into_diagnostic()?;
    if page_info.has_next_page {
        tracing::info!("more demands are available upstream; showing the first page only");
    }

    let demand = demands
        .iter()
        .find(|demand| demand.id == cli.demand_id)
        .ok_or_else(|| miette!("demand `{}` is not in the pending list", cli.demand_id))?;

    let gateway: TransferGatewayBox = if let Some(endpoint) = cli.endpoint {
        let mut gateway = GraphqlGateway::new(endpoint);
        if let Ok(token) = std::env::var("DEMANDPAY_TOKEN") {
            gateway = gateway.with_token(token);
        }
        Box::new(gateway)
    } else {
        let outcome = match cli.outcome {
            ScriptedOutcome::Initiated => SubmissionOutcome::Initiated {
                payment_id: "payment-1".to_string(),
            },
            ScriptedOutcome::Rejected => SubmissionOutcome::Rejected {
                payment_id: "payment-1".to_string(),
            },
            ScriptedOutcome::ConsentPending => SubmissionOutcome::ConsentPending {
                payment_id: "payment-1".to_string(),
                consent_url: cli.consent_url.clone(),
            },
        };
        Box::new(ScriptedGateway::new(outcome))
    };

    let navigator: NavigatorBox = Box::new(TerminalNavigator::new(cli.origin));
    let notifier: NotifierBox = Box::new(TerminalNotifier);

    let workflow = ApprovalWorkflow::new(
        gateway,
        navigator,
        notifier,
        cli.account_id,
        cli.account_membership_id,
    );

    workflow.select(&demand.id).await;
    let resolution = workflow.approve(demand).await.into_diagnostic()?;
    println!("{resolution}");

    Ok(())
}
