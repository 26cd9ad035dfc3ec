use std::fs;

use anyhow::{ensure, Context, Result};
use tracing::info;

use wcal_holidays::{CzechRepublic, France, HolidayCalendar, NameStyle};

use crate::cli::{Country, HolidaysArgs, Style};

/// Print `yyyy-mm-dd,name` holiday lines for a span of years.
pub fn run(args: HolidaysArgs) -> Result<()> {
    let from = args.from;
    let to = args.to.unwrap_or(from + 1);
    ensure!(
        from <= to,
        "year range is empty: --from {from} is after --to {to}"
    );

    let style = match args.style {
        Style::Long => NameStyle::Long,
        Style::Short => NameStyle::Short,
    };
    let calendar: Box<dyn HolidayCalendar> = match args.country {
        Country::Cz => Box::new(CzechRepublic::new(style)),
        Country::Fr => Box::new(France),
    };
    info!(calendar = calendar.name(), from, to, "listing holidays");

    let mut lines = Vec::new();
    for year in from..=to {
        let holidays = calendar
            .holidays(year)
            .with_context(|| format!("no holiday dates for {year}"))?;
        for holiday in holidays {
            lines.push(format!("{},{}", holiday.date(), holiday.name()));
        }
    }

    let text = lines.join("\n");
    match &args.output {
        Some(path) => {
            fs::write(path, format!("{text}\n"))
                .with_context(|| format!("failed to write holiday file: {}", path.display()))?;
            info!(path = %path.display(), lines = lines.len(), "holiday file written");
        }
        None => println!("{text}"),
    }
    Ok(())
}
