//! vela-cli — command-line front end for the Vela wallet service.
//!
//! Exposes the service's five operations against a running node: key
//! generation, address derivation, balance lookup, transaction signing,
//! injection and status polling. Results print as JSON.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use vela_api::WalletService;
use vela_client::Node;

/// Vela wallet command-line interface.
#[derive(Parser)]
#[command(name = "vela-cli")]
#[command(version, about = "Wallet operations against a Vela node")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fresh keypair.
    Keygen(KeygenArgs),
    /// Derive the address for a private key.
    Address(AddressArgs),
    /// Query the confirmed balance of an address.
    Balance(BalanceArgs),
    /// Sign a raw transaction with a private key.
    Sign(SignArgs),
    /// Broadcast a raw transaction to the network.
    Inject(InjectArgs),
    /// Poll the confirmation status of a transaction.
    Status(StatusArgs),
}

#[derive(Args)]
struct NodeArgs {
    /// Node RPC host.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Node RPC port.
    #[arg(long, default_value = "6430")]
    port: u16,
}

impl NodeArgs {
    fn descriptor(&self) -> Node {
        Node::new(self.host.clone(), self.port)
    }
}

#[derive(Args)]
struct KeygenArgs {
    #[command(flatten)]
    node: NodeArgs,
}

#[derive(Args)]
struct AddressArgs {
    /// Hex-encoded private key.
    private: String,

    #[command(flatten)]
    node: NodeArgs,
}

#[derive(Args)]
struct BalanceArgs {
    /// Address to query.
    address: String,

    #[command(flatten)]
    node: NodeArgs,
}

#[derive(Args)]
struct SignArgs {
    /// Hex-encoded private key.
    private: String,

    /// Hex-encoded raw transaction.
    raw_tx: String,

    #[command(flatten)]
    node: NodeArgs,
}

#[derive(Args)]
struct InjectArgs {
    /// Hex-encoded raw transaction.
    raw_tx: String,

    #[command(flatten)]
    node: NodeArgs,
}

#[derive(Args)]
struct StatusArgs {
    /// Transaction id.
    txid: String,

    #[command(flatten)]
    node: NodeArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Keygen(args) => {
            let service = connect(&args.node.descriptor())?;
            print_json(&service.generate_key_pair())
        }
        Commands::Address(args) => {
            let service = connect(&args.node.descriptor())?;
            let rsp = service
                .generate_addr(&args.private)
                .context("Failed to derive address")?;
            print_json(&rsp)
        }
        Commands::Balance(args) => {
            let service = connect(&args.node.descriptor())?;
            let rsp = service
                .check_balance(&args.address)
                .await
                .context("Failed to fetch balance")?;
            print_json(&rsp)
        }
        Commands::Sign(args) => {
            let service = connect(&args.node.descriptor())?;
            let rsp = service
                .sign_transaction(&args.private, &args.raw_tx)
                .context("Failed to sign transaction")?;
            print_json(&rsp)
        }
        Commands::Inject(args) => {
            let service = connect(&args.node.descriptor())?;
            let rsp = service
                .inject_transaction(&args.raw_tx)
                .await
                .context("Failed to inject transaction")?;
            print_json(&rsp)
        }
        Commands::Status(args) => {
            let service = connect(&args.node.descriptor())?;
            let rsp = service
                .check_transaction_status(&args.txid)
                .await
                .context("Failed to fetch transaction status")?;
            print_json(&rsp)
        }
    }
}

fn connect(node: &Node) -> Result<WalletService<vela_client::NodeClient>> {
    WalletService::connect(node).context("Failed to construct node client")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
