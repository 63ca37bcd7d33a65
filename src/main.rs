use clap::{Parser, ValueEnum};
use ohmlab::applet::{
    self, Applet, ColorApplet, KclApplet, KvlApplet, ProductsApplet, QuantitiesApplet, Session,
    SignalApplet,
};
use ohmlab::ir::Command;
use ohmlab::parser;
use ohmlab::render;
use ohmlab::stats::Stats;
use std::io;
use std::path::PathBuf;

/// Interactive electrical engineering demonstrations
#[derive(Parser)]
#[command(name = "ohmlab", version)]
struct Cli {
    /// Applet to run
    #[arg(value_enum)]
    applet: AppletKind,

    /// Apply an edit before the first render (repeatable), e.g. --set r1=220
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Render once and exit instead of reading commands from stdin
    #[arg(long)]
    once: bool,

    /// Save the plot after the first render
    #[arg(long)]
    save: bool,

    /// Directory for saved plots (default: next to the executable)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Print session stats to stderr
    #[arg(long)]
    stats: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum AppletKind {
    Signal,
    Color,
    Kvl,
    Kcl,
    Quantities,
    Products,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match cli.applet {
        AppletKind::Signal => run(SignalApplet::default(), &cli),
        AppletKind::Color => run(ColorApplet::default(), &cli),
        AppletKind::Kvl => run(KvlApplet::default(), &cli),
        AppletKind::Kcl => run(KclApplet::default(), &cli),
        AppletKind::Quantities => run(QuantitiesApplet::default(), &cli),
        AppletKind::Products => run(ProductsApplet::default(), &cli),
    }
}

fn run<A: Applet>(applet: A, cli: &Cli) {
    let mut stats = if cli.stats { Some(Stats::new()) } else { None };
    let name = applet.name();
    let dir = cli.output_dir.clone().unwrap_or_else(render::default_output_dir);
    let mut session = Session::new(applet, dir);

    for edit in &cli.set {
        let command = match parser::parse_command(edit) {
            Ok(Some(cmd @ Command::Set { .. })) => cmd,
            Ok(_) => {
                eprintln!("Error: --set expects KEY=VALUE, got '{}'", edit);
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };
        session.handle(&command, stats.as_mut()).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
    }

    let mut stdout = io::stdout();

    if cli.save {
        match session.save() {
            Ok(path) => {
                if let Some(s) = stats.as_mut() {
                    s.saves += 1;
                }
                eprintln!("Plot saved to: {}", path.display());
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    if cli.once {
        session.write_report(&mut stdout).unwrap_or_else(|e| {
            eprintln!("Output error: {}", e);
            std::process::exit(1);
        });
    } else {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut stderr = io::stderr();
        applet::run(&mut session, &mut input, &mut stdout, &mut stderr, stats.as_mut())
            .unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            });
    }

    if let Some(ref s) = stats {
        s.display(name);
    }
}
