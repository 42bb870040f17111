use colorful::Colorful;
use log::LevelFilter;
use pokeset_core::{derive_stats, parse_message, BossScaling, Nature, Pokedex, Species};
use std::collections::HashMap;
use std::error::Error;
use std::io::Read;
use std::{env, fs, io};

type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

// Enough of a dex to try the parser out without wiring a real one up.
const DEMO_DEX: &str = include_str!("demo_dex.json");

fn main() -> Result<()> {
    init_logger();

    let mut path = None;
    let mut scaling = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--boss" {
            let hp = args.next().and_then(|v| v.parse().ok());
            let stat = args.next().and_then(|v| v.parse().ok());

            scaling = match (hp, stat) {
                (Some(hp_multiplier), Some(stat_multiplier)) => Some(BossScaling {
                    hp_multiplier,
                    stat_multiplier,
                }),
                _ => return Err("--boss needs two multipliers".into()),
            };
        } else {
            path = Some(arg);
        }
    }

    let raw = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let dex: HashMap<String, Species> = serde_json::from_str(DEMO_DEX)?;
    let sets = parse_message(&raw)?;
    log::info!("parsed {} set(s)", sets.len());

    for set in &sets {
        println!("{}", set.to_string().trim_end().green());

        let species = match dex.species(&set.species) {
            Some(species) => species,
            None => {
                log::warn!("`{}` is not in the demo dex, skipping stats", set.species);
                println!();
                continue;
            }
        };

        let nature = set.nature.parse::<Nature>().unwrap_or_default();
        let stats = derive_stats(
            &species.base_stats,
            &set.ivs,
            &set.evs,
            set.level,
            nature.effect(),
            scaling,
        );

        println!(
            "HP: {} / Atk: {} / Def: {} / SpA: {} / SpD: {} / Spe: {}\n",
            stats.max_hp, stats.atk, stats.def, stats.sp_atk, stats.sp_def, stats.speed,
        );
    }

    Ok(())
}

fn init_logger() {
    let console = fern::Dispatch::new()
        .format(console_format)
        .level(LevelFilter::Warn)
        .level_for("pokeset_core", LevelFilter::Debug)
        .chain(io::stderr());

    let file = fern::Dispatch::new()
        .format(file_format)
        .level(LevelFilter::Warn)
        .level_for("pokeset_core", LevelFilter::Debug)
        .chain(fern::DateBased::new("logs/", "pokeset-%F.log"));

    fern::Dispatch::new()
        .chain(console)
        .chain(file)
        .apply()
        .unwrap();
}

fn console_format(cb: fern::FormatCallback, message: &core::fmt::Arguments, record: &log::Record) {
    cb.finish(format_args!(
        "{}{}{} {}",
        "[".dark_gray(),
        level_style(record.level()),
        "]".dark_gray(),
        message,
    ))
}

fn file_format(cb: fern::FormatCallback, message: &core::fmt::Arguments, record: &log::Record) {
    cb.finish(format_args!(
        "{} {:<5} {} {}",
        chrono::Local::now().format("%T%.3f"),
        record.level(),
        record.target(),
        message,
    ))
}

fn level_style(level: log::Level) -> colorful::core::color_string::CString {
    match level {
        log::Level::Trace => "TRACE".dark_gray(),
        log::Level::Debug => "DEBUG".white(),
        log::Level::Info => "INFO".green(),
        log::Level::Warn => "WARN".yellow(),
        log::Level::Error => "ERROR".red().bold(),
    }
}
