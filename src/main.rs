use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;

use winconsole::console::mode::flag_names;
use winconsole::{
    disable_console_quick_edit_mode, get_console_mode, set_console_mode, ConsoleError, StdStream,
};

#[derive(Debug, Parser)]
#[command(bin_name = "winconsole")]
#[command(about = "Inspect and change Windows console modes")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[arg(global = true, long, short = 'v', help = "Log console calls to stderr")]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the current mode of a standard stream
    Get {
        #[arg(long, short, value_enum, default_value_t = Stream::Input)]
        stream: Stream,
    },
    /// Write a raw mode mask to a standard stream
    Set {
        #[arg(value_parser = parse_mask, help = "Mode mask, hex (0x..) or decimal")]
        mask: u32,

        #[arg(long, short, value_enum, default_value_t = Stream::Input)]
        stream: Stream,
    },
    /// Turn quick edit mode off on the input console
    DisableQuickEdit,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Stream {
    Input,
    Output,
    Error,
}

impl From<Stream> for StdStream {
    fn from(stream: Stream) -> Self {
        match stream {
            Stream::Input => StdStream::Input,
            Stream::Output => StdStream::Output,
            Stream::Error => StdStream::Error,
        }
    }
}

fn parse_mask(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };

    parsed.map_err(|e| format!("invalid mask {:?}: {}", s, e))
}

fn run(command: Command) -> Result<(), ConsoleError> {
    match command {
        Command::Get { stream } => {
            let stream = StdStream::from(stream);
            let mode = get_console_mode(stream)?;

            println!("{:#06x}", mode);
            for name in flag_names(mode, stream.flag_table()) {
                println!("  {}", name);
            }
        }
        Command::Set { mask, stream } => {
            set_console_mode(mask, stream.into())?;
        }
        Command::DisableQuickEdit => {
            disable_console_quick_edit_mode();
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(args.command) {
        eprintln!("winconsole: {}", err);
        std::process::exit(1);
    }
}
