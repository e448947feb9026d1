//! Check an I2C link by sending a message and printing the peripheral's reply.
//!
//! ```text
//! i2c-echo
//! i2c-echo -m "Capitalize me!"
//! i2c-echo -a 0x20 -p 2 -m Hi
//! ```
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use i2c_echo::{EchoPeripheral, Message, Session, StdDelay};

#[derive(Debug, Parser)]
#[command(version, about = "Write a message to an I2C peripheral and read back its reply.")]
struct Args {
    /// I2C slave address, decimal or 0x-prefixed hex
    #[arg(short = 'a', long = "slave_address", default_value = "0x0f", value_parser = parse_address)]
    slave_address: u8,

    /// I2C bus number, opened as /dev/i2c-<port>
    #[arg(short, long, default_value_t = 1)]
    port: u32,

    /// Message to send to the slave device, at most 16 characters
    #[arg(short, long, default_value = "Hello World!")]
    message: String,

    /// Talk to a simulated echo peripheral instead of the hardware bus
    #[arg(long)]
    simulate: bool,
}

fn parse_address(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    };
    match parsed {
        Ok(address @ 0..=0x7f) => Ok(address),
        Ok(address) => Err(format!("{address:#04x} is not a 7-bit address")),
        Err(err) => Err(format!("invalid address {s:?}: {err}")),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let message = match Message::new(&args.message) {
        Ok(message) => message,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1)
        }
    };

    let reply = if args.simulate {
        let peripheral = EchoPeripheral::new(args.slave_address);
        Session::new(peripheral, StdDelay, args.slave_address).exchange(&message)?
    } else {
        i2c_echo::write_and_read(args.slave_address, args.port, &message).with_context(|| {
            format!(
                "exchange with {:#04x} on bus {} failed",
                args.slave_address, args.port
            )
        })?
    };

    println!("Read data: {reply}");
    Ok(())
}
