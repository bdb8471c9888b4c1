//! The `isthmus` command.

use alloy_primitives::{Bytes, B256};
use anyhow::{Context, Result};
use clap::Args;
use kona_hardforks::{Hardfork, Isthmus, IsthmusConfig, UpgradeStep};
use kona_protocol::encode_deposits;
use serde::Serialize;
use std::{fmt::Write, path::PathBuf};
use tracing::info;

/// Arguments of the `isthmus` command.
#[derive(Debug, Clone, Args)]
pub(crate) struct IsthmusArgs {
    /// A JSON file overriding parts of the default upgrade configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Print the transactions as a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// A built upgrade transaction, as printed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpgradeTx {
    index: usize,
    intent: String,
    source_hash: B256,
    hash: B256,
    tx: Bytes,
}

impl IsthmusArgs {
    pub(crate) fn exec(&self) -> Result<String> {
        let config = self.load_config()?;
        let txs = build_upgrade_txs(&config)?;
        if self.json {
            return Ok(serde_json::to_string_pretty(&txs)?);
        }

        let mut out = String::new();
        for tx in &txs {
            writeln!(out, "[{}] {}", tx.index, tx.intent)?;
            writeln!(out, "    source hash: {}", tx.source_hash)?;
            writeln!(out, "    tx hash:     {}", tx.hash)?;
            writeln!(out, "    tx:          {}", tx.tx)?;
        }
        Ok(out.trim_end().to_string())
    }

    fn load_config(&self) -> Result<IsthmusConfig> {
        let Some(path) = &self.config else {
            return Ok(IsthmusConfig::default());
        };
        info!(target: "upgrades", "Loading isthmus config from {}", path.display());
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
    }
}

/// Builds the upgrade transactions together with their metadata.
pub(crate) fn build_upgrade_txs(config: &IsthmusConfig) -> Result<Vec<UpgradeTx>> {
    let isthmus = Isthmus::new(config);
    let deposits = isthmus.deposits()?;
    let encoded = encode_deposits(&deposits);

    Ok(UpgradeStep::ALL
        .into_iter()
        .zip(deposits.iter().zip(encoded))
        .map(|(step, (deposit, tx))| UpgradeTx {
            index: step.index(),
            intent: isthmus.intent(step).to_string(),
            source_hash: deposit.source_hash,
            hash: deposit.tx_hash(),
            tx,
        })
        .collect())
}
