//! The `system-config` command.

use crate::commands::fees::render_scalars;
use anyhow::{Context, Result};
use clap::Args;
use kona_protocol::SystemConfig;
use std::{fmt::Write, path::PathBuf};
use tracing::warn;

/// Arguments of the `system-config` command.
#[derive(Debug, Clone, Args)]
pub(crate) struct SystemConfigArgs {
    /// The JSON system config file.
    pub path: PathBuf,
    /// Emit the pre-Holocene projection, without `eip1559Params` and `operatorFeeParams`.
    #[arg(long)]
    pub pre_holocene: bool,
}

impl SystemConfigArgs {
    pub(crate) fn exec(&self) -> Result<String> {
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let mut config: SystemConfig = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        if self.pre_holocene {
            config.marshal_pre_holocene = true;
        }
        render_system_config(&config)
    }
}

/// Renders the decoded fee parameters of a system config followed by its JSON projection.
pub(crate) fn render_system_config(config: &SystemConfig) -> Result<String> {
    let mut out = String::new();
    match config.ecotone_scalars() {
        Ok(decoded) => writeln!(out, "{}", render_scalars(config.scalar[0], &decoded))?,
        Err(err) => {
            warn!(target: "upgrades", "Undecodable scalar {}: {err}", config.scalar);
            writeln!(out, "scalar:               {err}")?;
        }
    }

    let operator_fee = config.operator_fee();
    writeln!(out, "operator fee scalar:  {}", operator_fee.scalar)?;
    writeln!(out, "operator fee const:   {}", operator_fee.constant)?;
    if !config.marshal_pre_holocene {
        writeln!(out, "eip1559 denominator:  {}", config.eip1559_denominator())?;
        writeln!(out, "eip1559 elasticity:   {}", config.eip1559_elasticity())?;
    }
    out.push_str(&serde_json::to_string(config)?);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kona_protocol::{EcotoneScalars, OperatorFeeParams};

    #[test]
    fn test_render_system_config() {
        let mut config = SystemConfig {
            scalar: EcotoneScalars::new(1368, 810949).encode(),
            gas_limit: 30_000_000,
            ..Default::default()
        };
        config.set_operator_fee(OperatorFeeParams::new(20_000, 500));

        let out = render_system_config(&config).unwrap();
        assert!(out.contains("base fee scalar:      1368"));
        assert!(out.contains("operator fee scalar:  20000"));
        assert!(out.ends_with(
            r#""operatorFeeParams":"0x000000000000000000000000000000000000000000004e2000000000000001f4"}"#
        ));
    }

    #[test]
    fn test_render_pre_holocene() {
        let config = SystemConfig { marshal_pre_holocene: true, ..Default::default() };
        let out = render_system_config(&config).unwrap();
        assert!(!out.contains("eip1559"));
        assert!(out.ends_with(r#""gasLimit":0}"#));
    }

    #[test]
    fn test_render_undecodable_scalar() {
        let config = SystemConfig { scalar: [0xff; 32].into(), ..Default::default() };
        let out = render_system_config(&config).unwrap();
        assert!(out.starts_with("scalar:               unrecognized scalar version: 255"));
    }
}
