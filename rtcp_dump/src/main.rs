use std::num::ParseIntError;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::metadata::LevelFilter;
use tracing_subscriber::{EnvFilter, prelude::*};

use rtcp_dump::bit_view::{DEFAULT_BLOCK_SIZE, MaskPolicy};
use rtcp_dump::{NtpTimestamp, ReceiverReportBlock, RenderOptions, render_block, render_value};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dump a receiver report block word by word
    Block(BlockArgs),
    /// Render a single value in binary
    Bits(BitsArgs),
    /// Decode the compact (LSR) form of an NTP timestamp
    Ntp(NtpArgs),
}

#[derive(clap::Args, Debug)]
struct BlockArgs {
    #[clap(long, default_value_t = 1, value_parser = parse_u32)]
    ssrc: u32,
    #[clap(long, default_value_t = 2, value_parser = parse_u32)]
    fraction_lost: u32,
    #[clap(long, default_value_t = 3, value_parser = parse_u32)]
    cumulative_lost: u32,
    #[clap(long, default_value_t = 4, value_parser = parse_u32)]
    highest_seq: u32,
    #[clap(long, default_value_t = 5, value_parser = parse_u32)]
    jitter: u32,
    #[clap(long, default_value_t = 6, value_parser = parse_u32)]
    lsr: u32,
    #[clap(long, default_value_t = 7, value_parser = parse_u32)]
    dlsr: u32,
    #[clap(long, env = "RTCP_DUMP_TITLE")]
    title: bool,
    #[clap(long, env = "RTCP_DUMP_BLOCK_SIZE", default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: usize,
}

#[derive(clap::Args, Debug)]
struct BitsArgs {
    #[clap(default_value = "0xB710", value_parser = parse_u64)]
    value: u64,
    #[clap(long, default_value_t = 32)]
    width: usize,
    #[clap(long, env = "RTCP_DUMP_BLOCK_SIZE", default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: usize,
    /// Keep one bit above the width, as older dumps did
    #[clap(long)]
    legacy_mask: bool,
}

#[derive(clap::Args, Debug)]
struct NtpArgs {
    #[clap(value_parser = parse_u32)]
    compact: u32,
}

fn parse_u64(s: &str) -> Result<u64, ParseIntError> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    }
}

fn parse_u32(s: &str) -> Result<u32, ParseIntError> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    }
}

fn run(command: Command) -> Result<String> {
    match command {
        Command::Block(args) => {
            let fraction_lost =
                u8::try_from(args.fraction_lost).context("fraction lost must fit in 8 bits")?;
            let block = ReceiverReportBlock::new(
                args.ssrc,
                fraction_lost,
                args.cumulative_lost,
                args.highest_seq,
                args.jitter,
                args.lsr,
                args.dlsr,
            )
            .context("Building receiver report block")?;
            let options = RenderOptions {
                title: args.title,
                block_size: args.block_size,
            };
            Ok(render_block(&block, &options))
        }
        Command::Bits(args) => {
            let policy = if args.legacy_mask {
                MaskPolicy::Legacy
            } else {
                MaskPolicy::Exact
            };
            let bits = render_value(args.width, args.value, policy, args.block_size)
                .context("Rendering value")?;
            Ok(format!("{bits}\n"))
        }
        Command::Ntp(args) => {
            let ts = NtpTimestamp::from_compact(args.compact);
            Ok(format!("{ts}  seconds = {:.6}\n", ts.as_secs_f64()))
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(std::io::stderr),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    tracing::debug!(?args, "parsed arguments");
    let output = run(args.command)?;
    print!("{output}");
    Ok(())
}
