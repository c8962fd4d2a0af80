use anyhow::{Context, Result};
use bytes::BytesMut;
use clap::{Parser, Subcommand};
use pmsi_packet::{ParseOption, PmsiTunnel};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, help = "Enable debug logging")]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Decode {
        #[arg(help = "PMSI Tunnel attribute body in hex")]
        hex: String,

        #[arg(short, long, help = "Reject identifiers on No tunnel attributes")]
        strict: bool,

        #[arg(short, long, help = "Print as JSON")]
        json: bool,
    },
    Encode {
        #[arg(help = "Attribute text, e.g. pmsi:ingressreplication:-:2:192.168.0.1")]
        text: String,
    },
}

fn print_help() {
    eprintln!("`pmsictl' decodes and encodes BGP PMSI Tunnel attributes.");
    eprintln!();
    eprintln!("Basic Commands:");
    eprintln!("  decode      Decode attribute body hex.");
    eprintln!("  encode      Encode attribute text to hex.");
}

fn setup_tracing(debug_mode: bool) {
    let filter = if debug_mode {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn decode(input: &str, strict: bool, json: bool) -> Result<String> {
    let input: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let input = input.strip_prefix("0x").unwrap_or(&input);
    let buf = hex::decode(input).context("attribute body is not valid hex")?;
    debug!("decoding {} bytes", buf.len());

    let opt = if strict {
        ParseOption::strict()
    } else {
        ParseOption::default()
    };
    let pmsi = PmsiTunnel::parse_attr(&buf, &opt)?;
    if json {
        Ok(serde_json::to_string_pretty(&pmsi)?)
    } else {
        Ok(pmsi.to_string())
    }
}

fn encode(text: &str) -> Result<String> {
    let pmsi: PmsiTunnel = text.parse()?;
    debug!("encoding {:?}", pmsi);

    let mut buf = BytesMut::with_capacity(pmsi.len());
    pmsi.emit_checked(&mut buf)?;
    Ok(hex::encode(&buf[..]))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.debug);

    match &cli.command {
        Some(Commands::Decode { hex, strict, json }) => {
            println!("{}", decode(hex, *strict, *json)?);
        }
        Some(Commands::Encode { text }) => {
            println!("{}", encode(text)?);
        }
        None => {
            print_help();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_text() {
        assert_eq!(
            decode("0006000020c0a80001", false, false).unwrap(),
            "pmsi:ingressreplication:-:2:192.168.0.1"
        );
        assert_eq!(
            decode("0x00 00 00 00 10", false, false).unwrap(),
            "pmsi:notunnel:-:1:"
        );
        assert!(decode("0000000010ff", true, false).is_err());
        assert!(decode("zz", false, false).is_err());
    }

    #[test]
    fn encode_text() {
        assert_eq!(
            encode("pmsi:ingressreplication:-:2:192.168.0.1").unwrap(),
            "0006000020c0a80001"
        );
        assert_eq!(encode("pmsi:201:1:-:0xABCD").unwrap(), "01c9000000abcd");
        assert!(encode("pmsi:notunnel:-:2000000:").is_err());
    }
}
