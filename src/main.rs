use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use zodiac_almanac::models::{CompatibilityResult, Fortune, FortuneCategory, ZodiacInfo};
use zodiac_almanac::{
    Almanac, AlmanacError, Element, FortunePeriod, Resolution, Theme, WallpaperConfig,
};

#[derive(Parser)]
#[command(name = "zodiac")]
#[command(about = "Zodiac signs, fortunes, matches, fortune sticks and wallpapers.")]
struct CommandLine {
    /// Directory with zodiac.json / sticks.json / texts.json overrides
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the sign for a birthday
    #[command(alias = "s")]
    Sign { month: u32, day: u32 },
    /// Show the full profile of a sign
    #[command(alias = "i")]
    Info { sign: String },
    /// List every sign, optionally of one element
    #[command(alias = "l")]
    List {
        #[arg(long)]
        element: Option<Element>,
    },
    /// Generate a fortune
    #[command(alias = "f")]
    Fortune {
        sign: String,
        /// daily, weekly or monthly
        #[arg(short, long, default_value = "daily")]
        period: FortunePeriod,
        /// Reference date for the period label (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Score the compatibility of two signs
    #[command(alias = "m")]
    Match { first: String, second: String },
    /// Draw fortune sticks
    #[command(alias = "d")]
    Stick {
        /// Draws to attempt in this session
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,
    },
    /// Render a wallpaper PNG
    #[command(alias = "w")]
    Wallpaper {
        sign: String,
        #[arg(short, long, default_value = "nebula")]
        theme: Theme,
        #[arg(short, long, default_value = "1080p")]
        resolution: Resolution,
        /// Up to 20 characters drawn near the bottom
        #[arg(short, long)]
        caption: Option<String>,
        /// Directory to save into
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the layer plan instead of rendering
        #[arg(long)]
        plan: bool,
    },
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "zodiac_almanac=debug,info"
    } else {
        "zodiac_almanac=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = CommandLine::parse();
    init_logger(args.verbose);

    let mut builder = Almanac::builder();
    if let Some(dir) = &args.data_dir {
        builder = builder.data_dir(dir);
    }
    let output = match &args.command {
        Commands::Wallpaper { output, .. } => output.as_ref(),
        _ => None,
    };
    if let Some(dir) = output {
        builder = builder.output_dir(dir);
    }
    let almanac = builder.build().context("failed to load reference data")?;
    tracing::debug!("{}", almanac);

    let json = args.json;
    match args.command {
        Commands::Sign { month, day } => {
            let sign = almanac.signs().by_date(month, day)?;
            let info = almanac.signs().info(sign);
            if json {
                return emit(info);
            }
            println!("{} {} ({}) {}", info.symbol, info.name_en, info.name, info.date_range);
            println!("Element: {}  Ruling planet: {}", info.element, info.ruling_planet);
        }
        Commands::Info { sign } => {
            let info = almanac.signs().get(&sign)?;
            if json {
                return emit(info);
            }
            print_profile(&almanac, info);
        }
        Commands::List { element } => {
            let signs: Vec<&ZodiacInfo> = match element {
                Some(element) => almanac.signs().by_element(element),
                None => almanac.signs().all().iter().collect(),
            };
            if json {
                return emit(&signs);
            }
            for info in signs {
                println!(
                    "{} {:<12} {:<6} {:<14} {}",
                    info.symbol, info.name_en, info.name, info.date_range, info.element
                );
            }
        }
        Commands::Fortune { sign, period, date } => {
            let info = almanac.signs().get(&sign)?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let fortune = almanac.fortunes().generate_for(info.id, period, date);
            if json {
                return emit(&fortune);
            }
            print_fortune(info, &fortune);
        }
        Commands::Match { first, second } => {
            let first = almanac.signs().get(&first)?;
            let second = almanac.signs().get(&second)?;
            let result = almanac.compatibility().score(first.id, second.id);
            if json {
                return emit(&result);
            }
            print_match(first, second, &result);
        }
        Commands::Stick { count } => {
            let sticks = almanac.sticks();
            let mut session = almanac.session();
            for _ in 0..count {
                match session.draw(&sticks) {
                    Ok(_) => {}
                    Err(AlmanacError::QuotaExhausted { quota }) => {
                        eprintln!("All {} draws for today are used up. Come back tomorrow!", quota);
                        break;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            if json {
                return emit(session.history());
            }
            for record in session.history().iter().rev() {
                let stick = &record.stick;
                println!("{} [{}] {}", stick.kind.icon(), record.time_label(), stick.title);
                println!("  {}", stick.content);
                println!("  {}", stick.humor);
                println!("  Advice: {}", stick.advice);
                println!("  {}", stick.blessing);
            }
            println!("Draws left today: {}/{}", session.remaining(), session.quota());
        }
        Commands::Wallpaper {
            sign,
            theme,
            resolution,
            caption,
            plan,
            ..
        } => {
            let info = almanac.signs().get(&sign)?;
            let mut config = WallpaperConfig::new(info.id).theme(theme).resolution(resolution);
            if let Some(caption) = caption {
                config = config.caption(caption);
            }
            if plan {
                return emit(&almanac.wallpaper().plan(&config)?);
            }
            let path = almanac.save_wallpaper(&config)?;
            if json {
                return emit(&path);
            }
            println!("Saved {}", path.display());
        }
    }

    Ok(())
}

fn emit<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_profile(almanac: &Almanac, info: &ZodiacInfo) {
    println!("{} {} ({})  {}", info.symbol, info.name_en, info.name, info.date_range);
    println!("Element: {}  Ruling planet: {}", info.element, info.ruling_planet);
    println!("Qualities: {}", info.qualities.join(", "));
    println!("Strengths: {}", info.positive_traits.join(", "));
    println!("Weaknesses: {}", info.negative_traits.join(", "));
    println!("Food: {}", info.preferences.food.join(", "));
    println!("Fashion: {}", info.preferences.fashion.join(", "));
    println!("Hobbies: {}", info.preferences.hobbies.join(", "));
    println!("Avoid: {}", info.preferences.avoid.join(", "));

    let names = |signs: Vec<&ZodiacInfo>| {
        signs
            .iter()
            .map(|s| format!("{} {}", s.symbol, s.name_en))
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("Best matches: {}", names(almanac.signs().compatible_with(info.id)));
    println!("Challenging: {}", names(almanac.signs().incompatible_with(info.id)));

    let numbers: Vec<String> = info.lucky.numbers.iter().map(u32::to_string).collect();
    println!(
        "Lucky numbers: {}  colors: {}  days: {}",
        numbers.join(", "),
        info.lucky.colors.join(", "),
        info.lucky.days.join(", ")
    );
}

fn print_fortune(info: &ZodiacInfo, fortune: &Fortune) {
    println!("{} {} {} fortune, {}", info.symbol, info.name_en, fortune.period, fortune.date);
    for category in FortuneCategory::ALL {
        let reading = fortune.reading(category);
        println!("{:<8} {:>3} {}", category.as_str(), reading.score, bar(reading.score));
        println!("         {}", reading.description);
        println!("         {}", reading.humor);
    }
    let lucky = &fortune.lucky;
    println!(
        "Lucky number {}  color {}  direction {}  item {}",
        lucky.number, lucky.color, lucky.direction, lucky.item
    );
    println!("Advice: {}", fortune.advice);
}

fn print_match(first: &ZodiacInfo, second: &ZodiacInfo, result: &CompatibilityResult) {
    println!(
        "{} {} & {} {}: {} ({})",
        first.symbol, first.name_en, second.symbol, second.name_en, result.overall, result.relation
    );
    println!("{}", result.description);
    println!("love       {:>3} {}", result.love, bar(result.love));
    println!("friendship {:>3} {}", result.friendship, bar(result.friendship));
    println!("career     {:>3} {}", result.career, bar(result.career));
    for bond in &result.bonds {
        println!("+ {}", bond);
    }
    for conflict in &result.conflicts {
        println!("- {}", conflict);
    }
    for advice in &result.advice {
        println!("* {}", advice);
    }
}

fn bar(score: u8) -> String {
    let filled = (score as usize + 5) / 10;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled.min(10)))
}
