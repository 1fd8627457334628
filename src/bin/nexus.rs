//! Nexus CLI — offline host for the generative engine
//!
//! Commands:
//!   nexus mint      — derive a trait record from seed material
//!   nexus render    — render a record to SVG at a given time and frame
//!   nexus describe  — list a record's attributes
//!   nexus metadata  — emit full token metadata JSON
//!   nexus stage     — show evolution stage and progress
//!   nexus demo      — mint a few entities and render their life timeline
//!
//! This binary is the host: it is the only place that reads the clock or
//! draws random seed bytes, and it passes both into the library explicitly.

use nexus_core::evolution::{stage_progress, EvolutionStage, SECONDS_PER_DAY};
use nexus_core::genome::seed_fingerprint;
use nexus_core::{
    create_trait_record, describe_traits, rarity_band, Compositor, MintPolicy, RenderConfig,
    TokenMetadata, TraitRecord,
};
use std::env;
use std::path::Path;

const DEMO_DIR: &str = "nexus-demo";

fn print_usage() {
    println!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║        NEXUS v0.1 — Generative Evolving Entities             ║
║        Deterministic traits, stages and SVG rendering        ║
╚══════════════════════════════════════════════════════════════╝

Usage: nexus <command> [options]

Records are given as a 44-character hex string or a path to a JSON file.

Commands:
  mint     <id> [--seed <hex>] [--birth <unix>] [--enhanced] [--out <file>]
  render   <record> [--now <unix>] [--frame <n>] [--config <file>] [--animated] [--out <file>]
  describe <record> [--now <unix>]
  metadata <record> [--now <unix>] [--config <file>]
  stage    <record> [--now <unix>]
  demo

Examples:
  nexus mint 1 --enhanced --out nexus-1.json
  nexus render nexus-1.json --frame 0 --out nexus-1.svg
  nexus stage 0000000000000001000000006553f10004020503c301
  nexus demo
"#
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "mint" => cmd_mint(&args[2..]),
        "render" => cmd_render(&args[2..]),
        "describe" => cmd_describe(&args[2..]),
        "metadata" => cmd_metadata(&args[2..]),
        "stage" => cmd_stage(&args[2..]),
        "demo" => cmd_demo(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("  Error: {}", e);
        std::process::exit(1);
    }
}

type CmdResult = Result<(), Box<dyn std::error::Error>>;

fn flag<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}

fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

fn wall_clock() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}

fn now_arg(args: &[String]) -> Result<u64, Box<dyn std::error::Error>> {
    Ok(match flag(args, "--now") {
        Some(s) => s.parse::<u64>()?,
        None => wall_clock(),
    })
}

/// Accept either the hex encoding or a JSON file
fn load_record(arg: &str) -> Result<TraitRecord, Box<dyn std::error::Error>> {
    if Path::new(arg).exists() {
        let json = std::fs::read_to_string(arg)?;
        Ok(serde_json::from_str(&json)?)
    } else {
        Ok(TraitRecord::from_hex(arg)?)
    }
}

fn load_config(args: &[String]) -> Result<RenderConfig, Box<dyn std::error::Error>> {
    let mut config = match flag(args, "--config") {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::reference(),
    };
    if has_flag(args, "--animated") {
        config.animate = true;
    }
    Ok(config)
}

fn cmd_mint(args: &[String]) -> CmdResult {
    let Some(id) = args.first() else {
        eprintln!("Usage: nexus mint <id> [--seed <hex>] [--birth <unix>] [--enhanced] [--out <file>]");
        return Ok(());
    };
    let id: u64 = id.parse()?;
    let seed = match flag(args, "--seed") {
        Some(hex_seed) => hex::decode(hex_seed)?,
        None => rand::random::<[u8; 32]>().to_vec(),
    };
    let birth = match flag(args, "--birth") {
        Some(s) => s.parse::<u64>()?,
        None => wall_clock(),
    };
    let enhanced = has_flag(args, "--enhanced");

    let record = create_trait_record(&seed, enhanced, id, birth, &MintPolicy::default())?;
    println!("\n  Seed:   {} (fingerprint {})", hex::encode(&seed), seed_fingerprint(&seed));
    println!("  {}", record.summary());
    println!("  Rarity: {}", rarity_band(&record).label());
    println!("  Hex:    {}", record.to_hex());

    if let Some(out) = flag(args, "--out") {
        std::fs::write(out, serde_json::to_string_pretty(&record)?)?;
        println!("  Saved to {}", out);
    }
    Ok(())
}

fn cmd_render(args: &[String]) -> CmdResult {
    let Some(source) = args.first() else {
        eprintln!("Usage: nexus render <record> [--now <unix>] [--frame <n>] [--config <file>] [--animated] [--out <file>]");
        return Ok(());
    };
    let record = load_record(source)?;
    let now = now_arg(args)?;
    let frame: u64 = match flag(args, "--frame") {
        Some(s) => s.parse::<u64>()?,
        None => 0,
    };
    let compositor = Compositor::new(load_config(args)?)?;
    let document = compositor.render(&record, now, frame)?;

    match flag(args, "--out") {
        Some(out) => {
            std::fs::write(out, document.as_str())?;
            println!("  Rendered #{} -> {} ({} bytes, sha256 {})", record.id(), out, document.len(), &document.digest()[..16]);
        }
        None => println!("{}", document),
    }
    Ok(())
}

fn cmd_describe(args: &[String]) -> CmdResult {
    let Some(source) = args.first() else {
        eprintln!("Usage: nexus describe <record> [--now <unix>]");
        return Ok(());
    };
    let record = load_record(source)?;
    let attributes = describe_traits(&record, now_arg(args)?)?;
    println!("{}", serde_json::to_string_pretty(&attributes)?);
    Ok(())
}

fn cmd_metadata(args: &[String]) -> CmdResult {
    let Some(source) = args.first() else {
        eprintln!("Usage: nexus metadata <record> [--now <unix>] [--config <file>]");
        return Ok(());
    };
    let record = load_record(source)?;
    let metadata = TokenMetadata::build(&record, now_arg(args)?, &load_config(args)?)?;
    println!("{}", metadata.to_json()?);
    Ok(())
}

fn cmd_stage(args: &[String]) -> CmdResult {
    let Some(source) = args.first() else {
        eprintln!("Usage: nexus stage <record> [--now <unix>]");
        return Ok(());
    };
    let record = load_record(source)?;
    let progress = stage_progress(&record, now_arg(args)?)?;

    println!("\n  Entity #{} Evolution", record.id());
    println!("  {}", "=".repeat(40));
    println!("  Stage:     {} ({})", progress.stage.number(), progress.stage.label());
    println!("  Age:       {:.2} days", progress.age_secs as f64 / SECONDS_PER_DAY as f64);
    println!("  Progress:  {:.1}%", progress.fraction * 100.0);
    match progress.time_until_next_stage() {
        Some(secs) => println!("  Next in:   {:.2} days", secs as f64 / SECONDS_PER_DAY as f64),
        None => println!("  Next in:   final stage reached"),
    }
    Ok(())
}

fn cmd_demo() -> CmdResult {
    println!("\n  === NEXUS DEMO ===\n");
    std::fs::create_dir_all(DEMO_DIR)?;

    let birth = wall_clock();
    let policy = MintPolicy::default();
    let compositor = Compositor::new(RenderConfig::reference())?;

    for id in 1..=4u64 {
        let enhanced = id % 2 == 0;
        let seed: [u8; 32] = rand::random();
        let record = create_trait_record(&seed, enhanced, id, birth, &policy)?;
        println!("  {}", record.summary());

        for stage in EvolutionStage::ALL {
            let now = birth + stage.starts_at();
            let document = compositor.render(&record, now, 0)?;
            let path = Path::new(DEMO_DIR).join(format!("nexus-{}-stage{}.svg", id, stage.number()));
            std::fs::write(&path, document.as_str())?;
            println!(
                "    stage {} ({:<5}) -> {} [{}]",
                stage.number(),
                stage.label(),
                path.display(),
                &document.digest()[..12]
            );
        }
    }

    println!("\n  Demo renders written to {}/", DEMO_DIR);
    Ok(())
}
