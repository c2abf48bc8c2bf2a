//! CLI walkthrough of the Vela client core transaction lifecycle.
//!
//! Generates a keypair, imports it back through WIF, assembles a sponsored
//! contract call against an in-memory chain client, signs it, and recovers
//! the signer from the signature. The output uses ANSI escape codes for
//! colored terminal rendering.
//!
//! Run with:
//!   cargo run --example demo

use std::sync::Arc;

use async_trait::async_trait;

use vela_protocol::crypto::keys::{recover_public_key, VelaKeypair};
use vela_protocol::rpc::{ChainClient, TransactionReceipt};
use vela_protocol::transaction::builder::TransactionBuilder;
use vela_protocol::transaction::types::{Operation, Transaction};
use vela_protocol::Result;

// ---------------------------------------------------------------------------
// ANSI color constants
// ---------------------------------------------------------------------------

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

fn banner(title: &str) {
    println!("\n{BOLD}{CYAN}== {title} =={RESET}");
}

// ---------------------------------------------------------------------------
// A toy chain for the demo to talk to
// ---------------------------------------------------------------------------

struct DemoChain;

#[async_trait]
impl ChainClient for DemoChain {
    async fn get_account_nonce(&self, _address: &[u8]) -> Result<u64> {
        Ok(41)
    }

    async fn get_account_rc(&self, _address: &[u8]) -> Result<u64> {
        Ok(10_000_000)
    }

    async fn get_chain_id(&self) -> Result<Vec<u8>> {
        Ok(vec![0x12, 0x20, 0x0d, 0xe0])
    }

    async fn submit_transaction(
        &self,
        transaction: &Transaction,
        broadcast: bool,
    ) -> Result<TransactionReceipt> {
        Ok(TransactionReceipt {
            id: transaction
                .id
                .as_ref()
                .map(|id| id.encode())
                .unwrap_or_default(),
            payer: transaction.header.payer.clone(),
            rc_limit: transaction.header.rc_limit,
            rc_used: 1_337,
            reverted: false,
            logs: vec![format!("demo chain accepted (broadcast={broadcast})")],
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    banner("Key lifecycle");
    let keypair = VelaKeypair::generate()?;
    println!("address:       {GREEN}{}{RESET}", keypair.address());
    println!("public key:    {}", keypair.public_key_base58());
    let wif = keypair.to_wif();
    println!("wif (secret!): {DIM}{wif}{RESET}");

    let reimported = VelaKeypair::from_wif(&wif)?;
    assert_eq!(reimported, keypair);
    println!("re-import through WIF: {GREEN}ok{RESET}");

    banner("Build and sign");
    let chain: Arc<dyn ChainClient> = Arc::new(DemoChain);
    let tx = TransactionBuilder::new()
        .add_operations(vec![Operation::CallContract {
            contract_id: vec![0x5a; 25],
            entry_point: 0x27f576ca,
            args: b"transfer 100 VELA".to_vec(),
        }])
        .client(chain.clone())
        .keypair(keypair.clone())
        .build(true)
        .await?;

    let id = tx.id.clone().ok_or(vela_protocol::Error::Request("missing id"))?;
    println!("transaction id: {YELLOW}{id}{RESET}");
    println!("rc limit:       {}", tx.header.rc_limit);
    println!("signatures:     {}", tx.signatures.len());

    banner("Recover the signer");
    let recovered = recover_public_key(id.digest(), &tx.signatures[0])?;
    assert_eq!(recovered, keypair.public_key());
    println!("recovered public key matches the signer: {GREEN}ok{RESET}");

    banner("Submit");
    let receipt = chain.submit_transaction(&tx, true).await?;
    println!("rc used: {} / {}", receipt.rc_used, receipt.rc_limit);
    for line in &receipt.logs {
        println!("log: {DIM}{line}{RESET}");
    }

    Ok(())
}
