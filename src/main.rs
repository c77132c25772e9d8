use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tethershot::CameraSession;
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Parser)]
#[command(version, about = "Take a single picture with a tethered camera")]
struct Cli {
  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
  /// Capture one image and download it as <unix-timestamp>.jpg
  Shoot {
    /// Drive the autofocus before capturing
    #[arg(long)]
    focus: bool,

    /// Directory the image is downloaded into
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
  },
  /// Drive the autofocus without taking a picture
  Focus,
  /// Print what the camera reports about itself
  Info,
}

impl Default for Command {
  fn default() -> Self {
    Command::Shoot { focus: false, output: PathBuf::from(".") }
  }
}

fn main() -> gphoto2::Result<()> {
  tracing_subscriber::registry()
    .with(tracing_subscriber::fmt::layer())
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let cli = Cli::parse();
  let session = CameraSession::open()?;

  match cli.command.unwrap_or_default() {
    Command::Shoot { focus, output } => {
      if focus {
        session.autofocus();
      }
      session.capture_to(&output)?;
    }
    Command::Focus => session.autofocus(),
    Command::Info => println!("{}", session.describe()?),
  }

  Ok(())
}
