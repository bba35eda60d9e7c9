use multisend::{
    account::Account,
    config::{AccountConfig, Config},
    ingest::RecipientParser,
    node::JsonRpcNode,
    BatchOrchestrator,
};
use tracing::info;

/// The main entry point for the multisend application.
///
/// This function initializes logging, loads the job configuration, builds the
/// signing account and node client, prepares every batch from the input file,
/// and prints the result as JSON. Nothing is broadcast.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging using tracing_subscriber.
    tracing_subscriber::fmt::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/default.toml".to_string());
    let config = Config::load(&config_path)?;
    info!("Multisend starting with config: {:?}", config);

    let account = load_account(&config.account)?;
    let node = JsonRpcNode::connect(&config.node.rpc_url)?;
    let parser = RecipientParser::new(config.input.mode.clone());

    let orchestrator = BatchOrchestrator::new(node, account, config.node.chain_id, config.batch);
    let output = orchestrator
        .prepare_from_file(&config.input.path, config.input.has_headers, &parser)
        .await?;
    info!(
        "Prepared {} transactions for {}",
        output.transactions.len(),
        output.address
    );

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Pick the signing account: phrase first, then raw key, else a new one
fn load_account(config: &AccountConfig) -> anyhow::Result<Account> {
    let account = match (&config.mnemonic, &config.private_key) {
        (Some(phrase), _) => Account::from_mnemonic(phrase)?,
        (None, Some(key)) => Account::from_private_key(key)?,
        (None, None) => Account::generate()?,
    };
    Ok(account)
}
