use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "snapline", version)]
struct Cli {
    /// Log engine events to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a one-screen summary of a play.
    Info(InfoArgs),
    /// Print the scene snapshot for one frame as JSON.
    Snapshot(SnapshotArgs),
    /// Render one frame to SVG or PNG (picked from the output extension).
    Frame(FrameArgs),
    /// Play from frame 1 to the end, printing captions per frame.
    Play(PlayArgs),
    /// Play until the throw, pick a receiver, and report the result.
    Quiz(QuizArgs),
}

#[derive(Args, Debug)]
struct InfoArgs {
    /// Input play JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Args, Debug)]
struct DisplayArgs {
    /// Hide movement trails.
    #[arg(long, default_value_t = false)]
    no_trails: bool,

    /// Hide player name labels.
    #[arg(long, default_value_t = false)]
    no_names: bool,

    /// Hide the ball trajectory.
    #[arg(long, default_value_t = false)]
    no_ball_trajectory: bool,

    /// Hide players that only appear after the throw.
    #[arg(long, default_value_t = false)]
    no_output_players: bool,
}

impl DisplayArgs {
    fn toggles(&self) -> snapline::DisplayToggles {
        snapline::DisplayToggles {
            show_trails: !self.no_trails,
            show_names: !self.no_names,
            show_ball_trajectory: !self.no_ball_trajectory,
            show_output_players: !self.no_output_players,
        }
    }
}

#[derive(Args, Debug)]
struct SnapshotArgs {
    /// Input play JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame number (1-based).
    #[arg(long)]
    frame: u32,

    #[command(flatten)]
    display: DisplayArgs,
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Input play JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame number (1-based).
    #[arg(long)]
    frame: u32,

    /// Output path, `.svg` or `.png`.
    #[arg(long)]
    out: PathBuf,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 1200)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 560)]
    height: u32,

    #[command(flatten)]
    display: DisplayArgs,
}

#[derive(Args, Debug)]
struct PlayArgs {
    /// Input play JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Sleep one tick interval between frames instead of running as fast as possible.
    #[arg(long, default_value_t = false)]
    realtime: bool,

    /// Milliseconds between frames.
    #[arg(long, default_value_t = 200)]
    interval_ms: u64,
}

#[derive(Args, Debug)]
struct QuizArgs {
    /// Input play JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Player id to throw to. Without it, the eligible receivers are listed.
    #[arg(long)]
    pick: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Snapshot(args) => cmd_snapshot(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Play(args) => cmd_play(args),
        Command::Quiz(args) => cmd_quiz(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: &Path) -> anyhow::Result<snapline::Play> {
    snapline::Play::from_path(path).with_context(|| format!("load play '{}'", path.display()))
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let play = load(&args.in_path)?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "game {} play {}", play.game_id(), play.play_id())?;
    writeln!(out, "direction: {}", play.direction())?;
    writeln!(
        out,
        "frames: {} (throw at {}, tracked to {})",
        play.total_frames(),
        play.throw_frame(),
        play.max_frame()
    )?;
    let rostered = play.entities().filter(|e| e.roster.is_some()).count();
    writeln!(
        out,
        "players: {} ({} post-throw only)",
        play.entity_count(),
        play.entity_count() - rostered
    )?;
    if let Some(supp) = play.supplementary() {
        if let Some(desc) = &supp.play_description {
            writeln!(out, "description: {desc}")?;
        }
        writeln!(out, "coverage: {}", snapline::coverage_label(supp))?;
    }
    if let Some(target) = snapline::targeted_receiver(&play) {
        writeln!(out, "targeted receiver: {} ({})", target.name, target.id)?;
    }
    Ok(())
}

fn cmd_snapshot(args: SnapshotArgs) -> anyhow::Result<()> {
    let play = load(&args.in_path)?;
    let snap = snapline::SceneBuilder::build(
        &play,
        snapline::FrameIndex(args.frame),
        &args.display.toggles(),
    )?;
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &snap).context("write snapshot JSON")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let play = load(&args.in_path)?;
    let snap = snapline::SceneBuilder::build(
        &play,
        snapline::FrameIndex(args.frame),
        &args.display.toggles(),
    )?;
    let renderer = snapline::SvgRenderer::new(snapline::SvgRenderOpts {
        width: args.width,
        height: args.height,
        ..Default::default()
    })?;
    let svg = renderer.render(&snap);

    let ext = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("svg") => {
            if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&args.out, svg)
                .with_context(|| format!("write svg '{}'", args.out.display()))?;
        }
        Some("png") => snapline::rasterize_svg_to_png(&svg, &args.out)?,
        _ => anyhow::bail!(
            "output '{}' must end in .svg or .png",
            args.out.display()
        ),
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

/// Prints one caption line per presented frame.
struct CaptionSink<W: std::io::Write> {
    out: W,
}

impl<W: std::io::Write> snapline::SceneSink for CaptionSink<W> {
    fn begin(&mut self, cfg: snapline::SinkConfig) -> snapline::SnaplineResult<()> {
        writeln!(
            self.out,
            "game {} play {} ({} frames)",
            cfg.game_id, cfg.play_id, cfg.total_frames
        )
        .map_err(anyhow::Error::from)?;
        Ok(())
    }

    fn present(&mut self, snap: &snapline::SceneSnapshot) -> snapline::SnaplineResult<()> {
        writeln!(
            self.out,
            "{} | {} | ball {:?}",
            snap.captions.frame, snap.captions.time_to_throw, snap.ball.phase
        )
        .map_err(anyhow::Error::from)?;
        Ok(())
    }
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let play = load(&args.in_path)?;
    let opts = snapline::EngineOpts {
        tick_interval: std::time::Duration::from_millis(args.interval_ms),
        ..Default::default()
    };
    let sink = CaptionSink {
        out: std::io::stdout().lock(),
    };
    let mut engine =
        snapline::PlaybackEngine::new(play, snapline::ManualScheduler::new(), sink, opts.clone())?;
    engine.play();
    while engine.is_playing() {
        if args.realtime {
            std::thread::sleep(opts.tick_interval);
        }
        engine.advance(opts.tick_interval)?;
    }
    Ok(())
}

fn cmd_quiz(args: QuizArgs) -> anyhow::Result<()> {
    let play = load(&args.in_path)?;
    let mut quiz = snapline::QuizSession::new(
        play,
        snapline::ManualScheduler::new(),
        snapline::InMemorySink::new(),
        snapline::EngineOpts::default(),
    )?;

    let Some(pick) = args.pick else {
        println!("decision frame: {}", quiz.round().decision_frame());
        for r in quiz.round().eligible() {
            println!("{}\t{}\t{}", r.id, r.position, r.name);
        }
        return Ok(());
    };

    let tick = quiz.engine().clock().interval();
    quiz.play();
    while quiz.engine().is_playing() {
        quiz.advance(tick)?;
    }
    let answer = quiz.submit(&snapline::EntityId(pick))?.clone();
    while quiz.engine().is_playing() {
        quiz.advance(tick)?;
    }

    let verdict = if answer.correct { "correct" } else { "wrong" };
    println!(
        "{verdict} after {:.1}s",
        answer.decision_time.as_secs_f64()
    );
    if let Some(target) = quiz.round().target() {
        println!("ball went to {} ({})", target.name, target.id);
    }
    let cmp = quiz.stats().compare();
    println!("accuracy: {}", cmp.accuracy_summary());
    println!("decision time: {}", cmp.time_summary());
    Ok(())
}
