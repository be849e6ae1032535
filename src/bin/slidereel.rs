use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use sha2::Digest as _;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "slidereel", version, about = "Turn slide text into a slideshow video")]
struct Cli {
    /// Pipeline config JSON.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level (overridden by `RUST_LOG`).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Segment text and print the slides as JSON.
    Parse(ParseArgs),
    /// Render slides to PNG images and print their paths as JSON.
    Render(RenderArgs),
    /// Run the full pipeline and print the video path (requires `ffmpeg` on PATH).
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct ParseArgs {
    /// Input text file, relative to the configured input directory.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Input dialect (defaults to the configured one).
    #[arg(long, value_enum)]
    dialect: Option<DialectChoice>,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Input text file, relative to the configured input directory.
    #[arg(long = "in", required_unless_present = "slides", conflicts_with = "slides")]
    in_path: Option<PathBuf>,

    /// Slide list JSON (strings, `{title, content}` or `{title, body}` objects), relative to the
    /// configured input directory.
    #[arg(long)]
    slides: Option<PathBuf>,

    /// Input dialect for `--in` (defaults to the configured one).
    #[arg(long, value_enum)]
    dialect: Option<DialectChoice>,

    /// Directory receiving slide images (and the video).
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Rasterize slides on a worker pool.
    #[arg(long)]
    parallel: bool,

    /// Worker count for `--parallel`.
    #[arg(long)]
    threads: Option<usize>,

    /// Print diagnostics about font resolution (source, family + SHA-256 of font bytes).
    #[arg(long)]
    dump_fonts: bool,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output MP4 name, relative to the output directory. Defaults to `<input stem>.mp4`.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Frames per second; each slide is one frame.
    #[arg(long)]
    fps: Option<u32>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DialectChoice {
    Marker,
    BlankLine,
}

impl From<DialectChoice> for slidereel::Dialect {
    fn from(choice: DialectChoice) -> Self {
        match choice {
            DialectChoice::Marker => slidereel::Dialect::Marker,
            DialectChoice::BlankLine => slidereel::Dialect::BlankLine,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let res = match cli.cmd {
        Command::Parse(args) => cmd_parse(cli.config.as_deref(), args),
        Command::Render(args) => cmd_render(cli.config.as_deref(), args),
        Command::Generate(args) => cmd_generate(cli.config.as_deref(), args),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let kind = err
                .downcast_ref::<slidereel::SlideError>()
                .map_or("other", |e| e.kind());
            eprintln!("error[{kind}]: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "slidereel=debug,info"
        } else {
            "slidereel=info"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<slidereel::PipelineConfig> {
    match path {
        Some(p) => Ok(slidereel::PipelineConfig::from_path(p)?),
        None => Ok(slidereel::PipelineConfig::default()),
    }
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read input text '{}'", path.display()))
}

fn read_slides_json(path: &Path) -> anyhow::Result<Vec<slidereel::SlideRecord>> {
    let f = File::open(path).with_context(|| format!("open slides '{}'", path.display()))?;
    let legacy: Vec<slidereel::LegacySlide> =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse slides JSON")?;
    Ok(slidereel::SlideRecord::from_legacy_list(legacy)?)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value).context("serialize output JSON")?;
    println!("{s}");
    Ok(())
}

fn cmd_parse(config: Option<&Path>, args: ParseArgs) -> anyhow::Result<()> {
    let cfg = load_config(config)?;
    let dialect = args.dialect.map_or(cfg.dialect, Into::into);
    let text = read_text(&cfg.input_dir.join(&args.in_path))?;
    let slides = slidereel::segment_with(&text, dialect)?;
    print_json(&slides)
}

fn build_pipeline(
    config: Option<&Path>,
    source: &SourceArgs,
    fps: Option<u32>,
) -> anyhow::Result<slidereel::Pipeline> {
    let mut cfg = load_config(config)?;
    if let Some(d) = source.dialect {
        cfg.dialect = d.into();
    }
    if let Some(dir) = &source.out_dir {
        cfg.output_dir = dir.clone();
    }
    if source.parallel {
        cfg.parallel = true;
    }
    if source.threads.is_some() {
        cfg.threads = source.threads;
    }
    if let Some(fps) = fps {
        cfg.fps = slidereel::Fps::new(fps)?;
    }
    let pipeline = slidereel::Pipeline::new(cfg)?;
    if source.dump_fonts {
        dump_font_diagnostics(pipeline.fonts());
    }
    Ok(pipeline)
}

fn load_slides(
    pipeline: &slidereel::Pipeline,
    source: &SourceArgs,
) -> anyhow::Result<Vec<slidereel::SlideRecord>> {
    match (&source.in_path, &source.slides) {
        (_, Some(slides)) => read_slides_json(&pipeline.input_path(slides)),
        (Some(in_path), None) => Ok(pipeline.parse_text(&pipeline.read_input(in_path)?)?),
        (None, None) => anyhow::bail!("either --in or --slides is required"),
    }
}

fn cmd_render(config: Option<&Path>, args: RenderArgs) -> anyhow::Result<()> {
    let pipeline = build_pipeline(config, &args.source, None)?;
    let slides = load_slides(&pipeline, &args.source)?;
    let frames = pipeline.render_slides(slides)?;
    print_json(&slidereel::ordered_image_paths(&frames))
}

fn cmd_generate(config: Option<&Path>, args: GenerateArgs) -> anyhow::Result<()> {
    let pipeline = build_pipeline(config, &args.source, args.fps)?;
    let slides = load_slides(&pipeline, &args.source)?;

    let video_name = match (&args.out, &args.source.in_path) {
        (Some(out), _) => out.clone(),
        (None, Some(in_path)) => slidereel::video_name_for(in_path),
        (None, None) => slidereel::video_name_for(Path::new("")),
    };

    let out = pipeline.generate_from_slides(slides, &video_name)?;
    eprintln!(
        "wrote {} ({} frames, {:.1}s)",
        out.video.path.display(),
        out.video.frame_count,
        out.video.duration_secs()
    );
    println!("{}", out.video.path.display());
    Ok(())
}

fn dump_font_diagnostics(fonts: &slidereel::ResolvedFonts) {
    eprintln!("font diagnostics:");
    for weight in [slidereel::Weight::Title, slidereel::Weight::Body] {
        eprintln!("  {weight}:");
        match fonts.get(weight) {
            slidereel::FontChoice::Scalable {
                source,
                family,
                bytes,
            } => {
                eprintln!("    source:  {}", source.display());
                eprintln!("    family:  {family}");
                eprintln!("    sha256:  {}", sha256_hex(bytes));
            }
            slidereel::FontChoice::Bitmap => {
                eprintln!("    source:  built-in 8x8 bitmap");
            }
        }
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{b:02x}"));
    }
    out
}
