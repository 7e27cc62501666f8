use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use console::{StyledObject, style};
use isowrite_core::device::DeviceRef;
use isowrite_core::write::{self, WriteReport};
use std::path::PathBuf;
use std::process::ExitCode;

mod logging;

const USAGE: &str = "Usage: isowrite <ISO path> <device path>";

#[derive(Parser, Debug)]
#[command(name = "isowrite")]
#[command(about = "Unmount a removable device and write an ISO image to it", version)]
struct Cli {
    /// ISO image to write
    image: PathBuf,

    /// Target block device (e.g. /dev/sdb, /dev/disk4, \\.\E:)
    device: String,

    /// Log each step to stderr (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Unmounts the device and writes the image onto it.
fn flash(cli: &Cli) -> Result<WriteReport> {
    let device = DeviceRef::new(cli.device.as_str())?;
    let report = write::run(&isowrite_core::platform::native(), &cli.image, &device)?;
    Ok(report)
}

/// `Error:` label for the diagnostic line, coloured only when stderr is a terminal.
fn error_prefix() -> StyledObject<&'static str> {
    style("Error:").for_stderr().red().bold()
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    match flash(&cli) {
        Ok(report) => {
            println!(
                "ISO file successfully written to {} ({} bytes).",
                style(&cli.device).cyan(),
                report.bytes_written
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            // `{:#}` keeps the whole cause chain on one line.
            eprintln!("{} {:#}", error_prefix(), e);
            ExitCode::FAILURE
        }
    }
}
