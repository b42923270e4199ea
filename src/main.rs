use anyhow::Context;
use argh::FromArgs;
use pointer_map::commands::map::{map_point, parse_viewport};
use pointer_map::commands::replay::process_pointer_replay;
use pointer_map::input::{DiagnosticSink, StdoutSink, TracingSink};
use pointer_map::MapperConfig;
use std::path::PathBuf;

#[derive(FromArgs)]
/// Map host pointer positions into a fixed logical screen
struct Args {
    #[argh(option, arg_name = "PATH")]
    /// mapper configuration file (JSON); defaults to a 632x400 screen
    config: Option<PathBuf>,

    #[argh(switch)]
    /// send periodic diagnostics to the log instead of stdout
    log_diagnostics: bool,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Replay(ReplayCommand),
    Map(MapCommand),
}

#[derive(FromArgs)]
#[argh(subcommand, name = "replay")]
/// Replay recorded pointer samples and write mapped coordinates
struct ReplayCommand {
    #[argh(option, arg_name = "PATH")]
    /// recorded samples (JSON array)
    input: PathBuf,

    #[argh(option, arg_name = "PATH")]
    /// where to write the mapped samples
    output: PathBuf,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "map")]
/// Map a single window-relative position
struct MapCommand {
    #[argh(option)]
    /// window-relative x
    x: i32,

    #[argh(option)]
    /// window-relative y
    y: i32,

    #[argh(option, arg_name = "WxH")]
    /// viewport size, e.g. 1264x800
    viewport: String,
}

fn main() -> anyhow::Result<()> {
    pointer_map::init_tracing();

    let args: Args = argh::from_env();

    let config = match &args.config {
        Some(path) => MapperConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => MapperConfig::default(),
    };

    match args.command {
        Command::Replay(cmd) => {
            let sink: Box<dyn DiagnosticSink> = if args.log_diagnostics {
                Box::new(TracingSink)
            } else {
                Box::new(StdoutSink)
            };
            process_pointer_replay(&cmd.input, &cmd.output, &config, sink)
                .context("replay failed")?;
        }
        Command::Map(cmd) => {
            let viewport = parse_viewport(&cmd.viewport)?;
            let report = map_point(cmd.x, cmd.y, viewport, &config);
            println!("{}", report);
        }
    }

    Ok(())
}
