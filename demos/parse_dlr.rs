// ABOUTME: Example application that reads delivery receipt text and prints the parsed record
// ABOUTME: Shows strict and lenient parsing, esm_class detection and canonical re-rendering

use argh::FromArgs;
use chrono::FixedOffset;
use smpp_dlr::{HandlerConfig, InboundMessage, ParseMode, ReceiptDetection, ReceiptHandler};
use std::error::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Parse an SMSC delivery receipt and print it in canonical form
#[derive(FromArgs)]
struct CliArgs {
    /// whether or not to enable debugging
    #[argh(switch, short = 'd')]
    debugging: bool,

    /// tolerate missing fields
    #[argh(switch, short = 'l')]
    lenient: bool,

    /// detect receipts by optional parameters instead of esm_class
    #[argh(switch)]
    by_optional_parameters: bool,

    /// the esm_class of the received message (default: 4, SMSC delivery receipt)
    #[argh(option, short = 'e', default = "4")]
    esm_class: u8,

    /// UTC offset of the receipt timestamps in minutes (default: 0)
    #[argh(option, short = 'z', default = "0")]
    offset_minutes: i32,

    /// the source address the receipt came from
    #[argh(option, short = 'f', default = "String::from(\"SMSC\")")]
    from: String,

    /// the receipt text
    #[argh(positional)]
    text: String,
}

/// Fixed zone east of UTC by `minutes`, if that is a valid offset.
fn zone_from_offset_minutes(minutes: i32) -> Option<FixedOffset> {
    minutes.checked_mul(60).and_then(FixedOffset::east_opt)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli_args: CliArgs = argh::from_env();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli_args.debugging {
            Level::TRACE
        } else {
            Level::INFO
        })
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let zone =
        zone_from_offset_minutes(cli_args.offset_minutes).ok_or("UTC offset out of range")?;

    let config = HandlerConfig::new()
        .mode(if cli_args.lenient {
            ParseMode::Lenient
        } else {
            ParseMode::Strict
        })
        .detection(if cli_args.by_optional_parameters {
            ReceiptDetection::OptionalParameters
        } else {
            ReceiptDetection::EsmClass
        });

    let handler = ReceiptHandler::with_config(zone, config);
    let message = InboundMessage {
        source_addr: &cli_args.from,
        esm_class: cli_args.esm_class,
        has_optional_parameters: cli_args.by_optional_parameters,
        text: &cli_args.text,
    };

    match handler.handle(&message) {
        Some(receipt) => {
            println!("{receipt:#?}");
            println!("{receipt}");
        }
        None => println!("No delivery receipt"),
    }

    Ok(())
}
