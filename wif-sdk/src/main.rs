use anyhow::Context;
use clap::Parser;

use wif_sdk::generate_private_key;

/// Generate a random secp256k1 private key and print it in testnet WIF.
#[derive(Debug, Parser)]
#[command(version)]
struct Arguments {}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let _arguments = Arguments::parse();

    let record = generate_private_key().context("failed to generate private key")?;
    log::debug!("generated {} private key", record.network);

    println!("Bitcoin Testnet Private Key\n");
    println!("{record}");

    Ok(())
}
