use anyhow::Context as _;
use clap::Parser;
use discord_fmt::{
    BoldStyle, Clipboard as _, ClipboardStream, FileStream, OutputSink, OutputStream as _,
    Session, StdoutStream, SystemClipboard,
};
use std::{
    io::Read as _,
    path::{Path, PathBuf},
    time::Instant,
};
use tracing_subscriber::EnvFilter;

/// Reformat pasted Discord chat logs: bold author names, one paragraph per
/// message and single-line pin notices
#[derive(Parser)]
#[command(name = "discord-fmt", version)]
struct Args {
    /// Log file to format (`-` for stdin). Reads the clipboard when omitted
    input: Option<PathBuf>,
    /// Bold markup used for author names
    #[arg(short, long, value_enum, default_value_t = BoldStyle::default())]
    bold: BoldStyle,
    /// Also write the formatted log to this file
    #[arg(short, long)]
    output: Vec<PathBuf>,
    /// Print the formatted log to stdout
    #[arg(long)]
    print: bool,
    /// Don't copy the formatted log back to the clipboard
    #[arg(long)]
    no_copy: bool,
    /// List the available bold styles and exit
    #[arg(long)]
    list_styles: bool,
    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        None => {
            tracing::debug!("reading log from the clipboard");
            let text = SystemClipboard::new()?
                .get_text()
                .context("pasting log from the clipboard")?;
            Ok(text)
        }
        Some(path) if path == Path::new("-") => {
            tracing::debug!("reading log from stdin");
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading log from stdin")?;
            Ok(text)
        }
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading log from file");
            std::fs::read_to_string(path)
                .with_context(|| format!("reading log from `{}`", path.display()))
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.list_styles {
        for style in BoldStyle::ALL {
            println!("{}\t{}", style.id(), style.name());
        }
        return Ok(());
    }

    let mut session = Session::with_style(args.bold);
    let raw = read_input(args.input.as_deref())?;
    session.paste(&raw);

    // Add file, stdout and clipboard sinks
    let mut sink = OutputSink::new();
    for out in args.output.iter() {
        sink.add_output(FileStream::create(out)?);
    }
    if args.print || (args.no_copy && args.output.is_empty()) {
        sink.add_output(StdoutStream);
    }
    let copy = !args.no_copy;
    if copy {
        sink.add_output(ClipboardStream::new(SystemClipboard::new()?));
    }

    sink.write_log(session.text())?;

    if copy {
        session.mark_copied(Instant::now());
    }
    if session.just_copied(Instant::now()) {
        eprintln!("copied to clipboard!");
    }

    Ok(())
}
