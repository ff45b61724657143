use clap::{Parser, Subcommand};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;
use trilogic::*;

/// Prints truth tables and sums computed by tri-state gate networks.
#[derive(Parser, Debug)]
#[command(name = "trilogic")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Maximum number of gate inputs a wire may drive
    #[arg(long, global = true, default_value_t = MAX_FANOUT, value_parser = parse_positive)]
    max_fanout: usize,

    /// Maximum propagation depth before a drive is treated as a loop
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_PROPAGATION_DEPTH, value_parser = parse_positive)]
    max_depth: usize,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Truth table of an OR gate built from three NAND gates
    NandOr,
    /// Truth table of a half adder
    HalfAdder,
    /// Truth table of a full adder with a fixed carry in
    FullAdder {
        /// Carry in level
        #[arg(short, long)]
        carry_in: bool,
    },
    /// Adds two numbers with a ripple carry adder
    Adder {
        /// Number of bits
        #[arg(short, long, default_value_t = 3)]
        width: usize,
        /// First operand
        a: u64,
        /// Second operand
        b: u64,
        /// Carry in level
        #[arg(short, long)]
        carry_in: bool,
    },
}

/// Parses a limit that must be at least 1.
fn parse_positive(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(err) => Err(err.to_string()),
    }
}

fn run(cli: Cli) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = NetworkConfig::default()
        .with_max_fanout(cli.max_fanout)
        .with_max_propagation_depth(cli.max_depth);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::NandOr => write_truth_table(&mut NandOr::with_config(config)?, &mut out)?,
        Command::HalfAdder => write_truth_table(&mut HalfAdder::with_config(config)?, &mut out)?,
        Command::FullAdder { carry_in } => {
            let mut circuit = FixedCarry {
                adder: FullAdder::with_config(config)?,
                cin: carry_in.into(),
            };
            write_truth_table(&mut circuit, &mut out)?
        }
        Command::Adder {
            width,
            a,
            b,
            carry_in,
        } => {
            let mut adder = Adder::with_config(width, config)?;
            let result = adder.compute_u64(a, b, carry_in)?;
            let bits: Vec<String> = adder.sum().iter().rev().map(|l| l.to_string()).collect();
            writeln!(
                out,
                "{} + {} + {}: carry={} sum={}",
                a,
                b,
                carry_in as u8,
                adder.carry(),
                bits.join("")
            )?;
            match result {
                Some(value) => writeln!(out, "Result: {}", value)?,
                None => writeln!(out, "Result: undefined")?,
            }
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()) {
        tracing::error!(%err, "trilogic failed");
        std::process::exit(1);
    }
}
