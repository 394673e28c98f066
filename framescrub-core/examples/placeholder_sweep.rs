use framescrub::{
    DeviceProfile, FrameLoader, FrameSequencePlayer, LayoutProbe, MemorySource, PlayerConfig,
    Region, StaticLayout, ViewportSize, resolve_settings,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = PlayerConfig::default();
    let device = DeviceProfile {
        viewport_width: 390.0,
        hardware_concurrency: Some(4),
        device_memory_gb: Some(3.0),
        device_pixel_ratio: 3.0,
    };
    let settings = resolve_settings(&device, &config.thresholds, &config.tiers);
    let viewport = ViewportSize::new(390.0, 844.0, 3.0)?;

    // No frames exist in an empty source, so every slot becomes a placeholder.
    let loader = FrameLoader::new(config.frames.clone(), config.loader.clone())?;
    let mut player = FrameSequencePlayer::new(&config, settings, viewport)?;
    player.load_frames(&loader, &MemorySource::new(), |p| {
        if p.is_complete() {
            println!("{}", p.overlay_label());
        }
    });

    let out_dir = std::path::Path::new("target").join("placeholder_sweep");
    std::fs::create_dir_all(&out_dir)?;
    for (i, y) in [0.0, 600.0, 1200.0, 1800.0, 2400.0].into_iter().enumerate() {
        let layout = StaticLayout {
            scroll_y: y,
            viewport,
            regions: vec![
                ("hero".to_string(), Region::new(0.0, 844.0)),
                ("about".to_string(), Region::new(2400.0, 900.0)),
            ],
        };
        player.update(&layout.snapshot(&config.regions.hero, &config.regions.next));
        player.paint()?;
        let out = out_dir.join(format!("sweep_{i}.png"));
        player
            .surface()
            .to_rgba_image(player.state().opacity)?
            .save(&out)?;
        println!(
            "{} -> frame {}",
            out.display(),
            player.state().frame.base.number()
        );
    }
    Ok(())
}
