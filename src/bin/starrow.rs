use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use starrow::{
    Canvas, FrameRGBA, Gallery, Point, RatingRow, Rgba8, RowConfig, Scene, Size, render_scene,
};

#[derive(Parser, Debug)]
#[command(name = "starrow", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one row at a point in time as a PNG.
    Frame(FrameArgs),
    /// Render the six-row demo gallery as a PNG.
    Gallery(GalleryArgs),
    /// Print the preferred size of a row.
    Size(SizeArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Row config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Apply this rating after layout, replacing any display rating.
    #[arg(long)]
    rating: Option<f64>,

    /// Tap at this x offset (row space) after layout. Interactive rows only.
    #[arg(long)]
    tap: Option<f64>,

    /// Seconds after layout to sample the animation at.
    #[arg(long, default_value_t = 0.0)]
    at: f64,

    /// Padding around the row, in pixels.
    #[arg(long, default_value_t = 8.0)]
    padding: f64,

    /// Background color (#rrggbb or #rrggbbaa).
    #[arg(long, default_value = "#ffffff")]
    background: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct GalleryArgs {
    /// Seconds after layout to sample the animations at.
    #[arg(long, default_value_t = 1.0)]
    at: f64,

    /// Background color (#rrggbb or #rrggbbaa).
    #[arg(long, default_value = "#ffffff")]
    background: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SizeArgs {
    /// Row config JSON.
    #[arg(long)]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Gallery(args) => cmd_gallery(args),
        Command::Size(args) => cmd_size(args),
    }
}

fn init_tracing(verbose: u8) {
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

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = RowConfig::from_path(&args.config)?;
    let background = Rgba8::parse_hex(&args.background)?;
    if !args.padding.is_finite() || args.padding < 0.0 {
        anyhow::bail!("padding must be >= 0");
    }

    let mut row = RatingRow::with_listener(config, |rating: f64| {
        eprintln!("user rated {rating:.3}");
    })?;
    let size = row.preferred_size();
    let canvas = Canvas::covering(Size::new(
        size.width + 2.0 * args.padding,
        size.height + 2.0 * args.padding,
    ))?;

    let mut scene = Scene::new();
    row.layout_finalized(canvas.bounds(), &mut scene);
    if let Some(rating) = args.rating {
        row.apply_rating(rating, &mut scene);
    }
    if let Some(x) = args.tap {
        let y = row.config().star.radius();
        if row.handle_pointer_up(Point::new(x, y), &mut scene).is_none() {
            eprintln!("tap at x={x} was ignored");
        }
    }
    scene.advance(args.at);

    let frame = render_scene(&scene, canvas, background)?;
    write_png(&frame, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_gallery(args: GalleryArgs) -> anyhow::Result<()> {
    let background = Rgba8::parse_hex(&args.background)?;
    let mut gallery = Gallery::demo()?;
    gallery.set_time(args.at);
    let frame = gallery.render(background)?;
    write_png(&frame, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_size(args: SizeArgs) -> anyhow::Result<()> {
    let config = RowConfig::from_path(&args.config)?;
    let size = config.preferred_size();
    println!("{}x{}", size.width, size.height);
    Ok(())
}

fn write_png(frame: &FrameRGBA, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        out,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))
}

