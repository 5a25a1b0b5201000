use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use stackscroll::{ScrollProgress, StackConfig, StackContainer, Viewport};

#[derive(Parser, Debug)]
#[command(name = "stackscroll", version)]
struct Cli {
    /// Log layout decisions to stderr (repeat for trace output).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print stack geometry and row lengths as JSON.
    Layout(StackArgs),
    /// Print per-row motion for one scroll progress value as JSON.
    Sample(SampleArgs),
    /// Print a table of row scales across the whole scroll range.
    Sweep(SweepArgs),
    /// Validate a config file without clamping.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct StackArgs {
    /// Config JSON (defaults apply to missing fields; omit for all defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of items in the stack.
    #[arg(long)]
    items: usize,

    /// Viewport width in pixels.
    #[arg(long)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long)]
    height: f64,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    #[command(flatten)]
    stack: StackArgs,

    /// Scroll progress in [0, 1].
    #[arg(long)]
    progress: f64,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    #[command(flatten)]
    stack: StackArgs,

    /// Number of progress steps between 0 and 1.
    #[arg(long, default_value_t = 10)]
    steps: u32,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Config JSON to validate.
    #[arg(long)]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config_json(path: &Path) -> anyhow::Result<StackConfig> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let cfg: StackConfig = serde_json::from_reader(r).with_context(|| "parse config JSON")?;
    Ok(cfg)
}

fn build_stack(args: &StackArgs) -> anyhow::Result<StackContainer<usize>> {
    let config = match &args.config {
        Some(path) => read_config_json(path)?,
        None => StackConfig::default(),
    };
    let mut stack = StackContainer::builder((0..args.items).collect())
        .config(config)
        .build();
    let viewport = Viewport::new(args.width, args.height);
    if !viewport.is_measured() {
        anyhow::bail!(
            "viewport must be positive, got {}x{}",
            args.width,
            args.height
        );
    }
    stack.set_viewport(viewport);
    Ok(stack)
}

fn cmd_layout(args: StackArgs) -> anyhow::Result<()> {
    let stack = build_stack(&args)?;
    let geometry = stack.effective_geometry();
    let row_lengths: Vec<usize> = stack.rows().iter().map(|r| r.len()).collect();
    let out = serde_json::json!({
        "geometry": geometry,
        "row_lengths": row_lengths,
        "content_height": geometry.content_height(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let mut stack = build_stack(&args.stack)?;
    stack.set_scroll_progress(ScrollProgress::new(args.progress));
    let out = serde_json::json!({
        "progress": stack.scroll_progress().map(ScrollProgress::value),
        "rows": stack.motion(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let mut stack = build_stack(&args.stack)?;
    let steps = args.steps.max(1);
    let rows = stack.motion().len();

    let header: Vec<String> = (0..rows).map(|i| format!("row{i:<3}")).collect();
    println!("progress  {}", header.join(" "));
    for step in 0..=steps {
        let p = f64::from(step) / f64::from(steps);
        stack.set_scroll_progress(ScrollProgress::new(p));
        let scales: Vec<String> = stack
            .motion()
            .iter()
            .map(|m| format!("{:.3} ", m.current_scale))
            .collect();
        println!("{p:<8.3}  {}", scales.join(" "));
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let cfg = read_config_json(&args.config)?;
    cfg.validate()
        .with_context(|| format!("config '{}' is invalid", args.config.display()))?;
    eprintln!("ok {}", args.config.display());
    Ok(())
}
