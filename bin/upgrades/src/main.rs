#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

use clap::Parser;

pub(crate) mod cli;
pub(crate) mod commands;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().init_telemetry()?.run()
}
