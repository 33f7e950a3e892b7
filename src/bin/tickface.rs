use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tickface", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Run the interactive timer on a simulated clock and report its wake-ups.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Engine config JSON. Defaults to the stock face.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Instant to draw, in ms since the Unix epoch. Defaults to now.
    #[arg(long)]
    at_ms: Option<u64>,

    /// Fixed offset from UTC in minutes. Defaults to the system time zone.
    #[arg(long, allow_hyphen_values = true)]
    utc_offset_min: Option<i32>,

    /// Override the configured backend.
    #[arg(long, value_enum)]
    backend: Option<BackendChoice>,

    #[arg(long, default_value_t = 400)]
    width: u32,

    #[arg(long, default_value_t = 400)]
    height: u32,

    /// Draw in ambient mode.
    #[arg(long)]
    ambient: bool,

    /// Report a low-bit ambient display.
    #[arg(long)]
    low_bit: bool,

    /// Report a display that needs burn-in protection.
    #[arg(long)]
    burn_in: bool,

    /// Complication data as `ID=RECORD_JSON`, e.g. `1={"type":"RANGED_VALUE","payload":42}`.
    #[arg(long = "complication")]
    complications: Vec<String>,

    /// Unread notification count.
    #[arg(long, default_value_t = 0)]
    unread: u32,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Engine config JSON. Defaults to the stock face.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated start instant, in ms since the Unix epoch.
    #[arg(long, default_value_t = 0)]
    start_ms: u64,

    /// Number of wake-ups to deliver.
    #[arg(long, default_value_t = 10)]
    ticks: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackendChoice {
    Canvas,
    Gl,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<tickface::EngineConfig> {
    let Some(path) = path else {
        return Ok(tickface::EngineConfig::default());
    };
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    let cfg = tickface::EngineConfig::from_json_str(&s)
        .with_context(|| format!("parse config '{}'", path.display()))?;
    Ok(cfg)
}

fn parse_complication(arg: &str) -> anyhow::Result<(u32, tickface::ComplicationRecord)> {
    let (id, json) = arg
        .split_once('=')
        .with_context(|| format!("complication '{arg}' must look like ID=JSON"))?;
    let id: u32 = id
        .trim()
        .parse()
        .with_context(|| format!("complication id '{id}'"))?;
    let record = serde_json::from_str(json).with_context(|| format!("complication {id} record"))?;
    Ok((id, record))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut cfg = read_config(args.config.as_deref())?;
    if let Some(choice) = args.backend {
        cfg.backend = match choice {
            BackendChoice::Canvas => tickface::BackendKind::Canvas,
            BackendChoice::Gl => tickface::BackendKind::Gl,
        };
    }

    let at_ms = args
        .at_ms
        .unwrap_or_else(|| tickface::Clock::now_millis(&tickface::SystemClock));

    let clock = tickface::ManualClock::new(at_ms);
    let mut services = tickface::HostServices::new(cfg.preferences);
    if let Some(minutes) = args.utc_offset_min {
        let offset = minutes
            .checked_mul(60)
            .and_then(chrono::FixedOffset::east_opt)
            .with_context(|| format!("utc offset {minutes} min out of range"))?;
        services = services.with_environment(tickface::FixedEnvironment::new(offset));
    }
    let surface = tickface::RasterSurface::new(tickface::SurfaceSize::new(args.width, args.height))?;
    let mut sim = tickface::Simulator::with_services(&cfg, clock, services, surface)?;

    let mut events = vec![tickface::HostEvent::PropertiesChanged(
        tickface::DisplayCapabilities {
            low_bit_ambient: args.low_bit,
            burn_in_protection: args.burn_in,
        },
    )];
    for arg in &args.complications {
        let (slot_id, record) = parse_complication(arg)?;
        events.push(tickface::HostEvent::ComplicationDataUpdated { slot_id, record });
    }
    events.push(tickface::HostEvent::UnreadCountChanged(args.unread));
    events.push(tickface::HostEvent::AmbientChanged(args.ambient));
    for event in events {
        if let Some(w) = sim.send(event)?.warning {
            eprintln!("warning: {w}");
        }
    }
    sim.start()?;

    let frame = sim.surface_mut().render_frame()?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.to_straight_rgba(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let mut sim = tickface::Simulator::new(&cfg, args.start_ms, tickface::SurfaceSize::new(400, 400))?;
    sim.start()?;
    let delivered = sim.run_ticks(args.ticks)?;

    for at in sim.fired_at() {
        println!("{at}");
    }
    eprintln!(
        "delivered {delivered} wake-ups, drew {} frames, next wake-up {:?}",
        sim.engine().draw_count(),
        sim.engine().pending_wakeup().map(|w| w.due_at_ms)
    );
    Ok(())
}
