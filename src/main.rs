use anyhow::{Context, Result};
use datepick::calendar::CalendarMath;
use datepick::config::Config;
use datepick::{logger, ui};

const USAGE: &str = "Usage: datepick [--generate-config [PATH]] | [grid <YEAR> <MONTH 1-12>]";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("--generate-config") => {
            let path = match args.get(1) {
                Some(path) => path.into(),
                None => Config::get_default_config_path()?,
            };
            return Config::generate_default_config(path);
        }
        Some("grid") => return print_grid(&args[1..]),
        Some("-h" | "--help") => {
            println!("{USAGE}");
            return Ok(());
        }
        Some(other) => {
            eprintln!("❌ Unknown argument: {other}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
        None => {}
    }

    let config = Config::load()?;
    logger::init(&config.logging)?;

    // Run the TUI application
    if let Some(value) = ui::run_app(&config).await? {
        println!("{value}");
    }

    Ok(())
}

/// Print the grid for a year and a 1-based month as JSON
fn print_grid(args: &[String]) -> Result<()> {
    let (year, month) = match args {
        [year, month] => (
            year.parse::<i32>().with_context(|| format!("Invalid year: {year}"))?,
            month.parse::<u32>().with_context(|| format!("Invalid month: {month}"))?,
        ),
        _ => anyhow::bail!("{USAGE}"),
    };
    if !(1..=12).contains(&month) {
        anyhow::bail!("Month must be between 1 and 12, got {month}");
    }

    let config = Config::load()?;
    let math = CalendarMath::new(config.names.name_tables()?);
    let month0 = month as i32 - 1;
    let output = serde_json::json!({
        "year": year,
        "month": math.month_name(month0)?,
        "grid": math.build_month_grid(year, month0),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
