use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use framescrub::{
    DeviceProfile, DirSource, EventHost, FrameLoader, FrameRequestId, FrameSequencePlayer,
    HostEvent, LayoutProbe, ListenerId, LoadState, PlayerConfig, Presenter, Region, RegionIds,
    StaticLayout, Surface, TierSettings, ViewportSize, resolve_settings,
};

#[derive(Parser, Debug)]
#[command(name = "framescrub", version)]
struct Cli {
    /// Player config JSON. Defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the tier settings chosen for a device.
    Tier(DeviceArgs),
    /// Paint a single scroll position as a PNG.
    Frame(FrameArgs),
    /// Paint a sweep of scroll positions as numbered PNGs.
    Scrub(ScrubArgs),
}

#[derive(Args, Debug)]
struct DeviceArgs {
    /// Viewport width in CSS pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Viewport height in CSS pixels.
    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Device pixel ratio.
    #[arg(long, default_value_t = 1.0)]
    dpr: f64,

    /// Reported logical CPU count.
    #[arg(long)]
    cores: Option<u32>,

    /// Reported device memory in GiB.
    #[arg(long)]
    memory_gb: Option<f64>,
}

impl DeviceArgs {
    fn profile(&self) -> DeviceProfile {
        DeviceProfile {
            viewport_width: self.width,
            hardware_concurrency: self.cores,
            device_memory_gb: self.memory_gb,
            device_pixel_ratio: self.dpr,
        }
    }

    fn viewport(&self) -> anyhow::Result<ViewportSize> {
        Ok(ViewportSize::new(self.width, self.height, self.dpr)?)
    }
}

#[derive(Args, Debug)]
struct PageArgs {
    /// Directory the frame paths are resolved against.
    #[arg(long)]
    frames: PathBuf,

    /// Height of the hero region.
    #[arg(long, default_value_t = 800.0)]
    hero_height: f64,

    /// Offset of the region after the hero.
    #[arg(long, default_value_t = 2400.0)]
    next_top: f64,

    /// Height of the region after the hero.
    #[arg(long, default_value_t = 600.0)]
    next_height: f64,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    device: DeviceArgs,

    #[command(flatten)]
    page: PageArgs,

    /// Scroll offset to paint.
    #[arg(long)]
    scroll: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct ScrubArgs {
    #[command(flatten)]
    device: DeviceArgs,

    #[command(flatten)]
    page: PageArgs,

    /// Number of evenly spaced scroll positions.
    #[arg(long, default_value_t = 10)]
    steps: usize,

    /// Output directory for `scrub_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => PlayerConfig::from_path(path)?,
        None => PlayerConfig::default(),
    };
    config.validate()?;

    match cli.cmd {
        Command::Tier(args) => cmd_tier(&config, args),
        Command::Frame(args) => cmd_frame(&config, args),
        Command::Scrub(args) => cmd_scrub(&config, args),
    }
}

fn cmd_tier(config: &PlayerConfig, args: DeviceArgs) -> anyhow::Result<()> {
    let settings = resolve_settings(&args.profile(), &config.thresholds, &config.tiers);
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

fn cmd_frame(config: &PlayerConfig, args: FrameArgs) -> anyhow::Result<()> {
    let settings = resolve_settings(&args.device.profile(), &config.thresholds, &config.tiers);
    let mut player = load_player(config, settings, &args.device, &args.page)?;
    let layout = page_layout(&args.page, &config.regions, args.device.viewport()?, args.scroll);

    player.update(&layout.snapshot(&config.regions.hero, &config.regions.next));
    player.paint()?;
    write_png(player.surface(), player.state().opacity, &args.out)?;

    let state = player.state();
    eprintln!(
        "wrote {} (frame {}, progress {:.3})",
        args.out.display(),
        state.frame.base.number(),
        state.progress
    );
    Ok(())
}

fn cmd_scrub(config: &PlayerConfig, args: ScrubArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.steps >= 2, "--steps must be >= 2");
    let settings = resolve_settings(&args.device.profile(), &config.thresholds, &config.tiers);
    let player = load_player(config, settings, &args.device, &args.page)?;
    let viewport = args.device.viewport()?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut presenter = PngSequence {
        dir: args.out_dir.clone(),
        written: 0,
    };
    let mut mounted =
        framescrub::MountedPlayer::mount(player, CliHost::default(), &mut presenter)?;
    let span = args.page.next_top + args.page.next_height;
    for step in 0..args.steps {
        let y = span * step as f64 / (args.steps - 1) as f64;
        let layout = page_layout(&args.page, &config.regions, viewport, y);
        mounted.handle(HostEvent::Scroll, &layout)?;
        let now = Duration::from_millis(16 * (step as u64 + 1));
        mounted.animation_frame(now, &layout, &mut presenter)?;
    }

    eprintln!("wrote {} frames to {}", presenter.written, args.out_dir.display());
    Ok(())
}

fn load_player(
    config: &PlayerConfig,
    settings: TierSettings,
    device: &DeviceArgs,
    page: &PageArgs,
) -> anyhow::Result<FrameSequencePlayer> {
    tracing::info!(tier = settings.tier.as_str(), frames = settings.frame_count, "loading");
    let loader = FrameLoader::new(config.frames.clone(), config.loader.clone())?;
    let mut player = FrameSequencePlayer::new(config, settings, device.viewport()?)?;
    let source = DirSource::new(&page.frames);
    match player.load_frames(&loader, &source, |p| tracing::trace!("{}", p.overlay_label())) {
        LoadState::Ready(p) if p.placeholders > 0 => {
            tracing::warn!(placeholders = p.placeholders, total = p.total, "some frames missing");
        }
        LoadState::Failed(msg) => anyhow::bail!("{msg}"),
        _ => {}
    }
    Ok(player)
}

fn page_layout(
    page: &PageArgs,
    ids: &RegionIds,
    viewport: ViewportSize,
    scroll_y: f64,
) -> StaticLayout {
    StaticLayout {
        scroll_y,
        viewport,
        regions: vec![
            (ids.hero.clone(), Region::new(0.0, page.hero_height)),
            (ids.next.clone(), Region::new(page.next_top, page.next_height)),
        ],
    }
}

fn write_png(surface: &Surface, opacity: f64, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    surface
        .to_rgba_image(opacity)?
        .save_with_format(out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}

/// Host stand-in that hands out ids and never fires events on its own.
#[derive(Default)]
struct CliHost {
    next: u64,
}

impl EventHost for CliHost {
    fn add_listener(&mut self, _event: HostEvent) -> ListenerId {
        self.next += 1;
        ListenerId(self.next)
    }

    fn remove_listener(&mut self, _id: ListenerId) {}

    fn request_animation_frame(&mut self) -> FrameRequestId {
        self.next += 1;
        FrameRequestId(self.next)
    }

    fn cancel_animation_frame(&mut self, _id: FrameRequestId) {}
}

struct PngSequence {
    dir: PathBuf,
    written: usize,
}

impl Presenter for PngSequence {
    fn present(&mut self, surface: &Surface, opacity: f64) -> framescrub::FramescrubResult<()> {
        let path = self.dir.join(format!("scrub_{:04}.png", self.written));
        write_png(surface, opacity, &path)?;
        self.written += 1;
        Ok(())
    }
}
