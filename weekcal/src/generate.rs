use std::fs;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use wcal_holidays::{CzechRepublic, France, HolidayCalendar, NameStyle};
use wcal_planner::{Attachment, Event, MonthNames, Observance, Planner};

use crate::cli::{Country, GenerateArgs};
use crate::input;

/// Build the week grid for the requested year, attach every input
/// annotation, and emit the CSV.
pub fn run(args: GenerateArgs) -> Result<()> {
    let months = match &args.month_file {
        Some(path) => input::read_month_names(path)?,
        None => MonthNames::default(),
    };

    let mut planner = Planner::new(args.year, args.extra_weeks, args.start_page, months)
        .with_context(|| format!("cannot build the week grid for {}", args.year))?;
    info!(
        year = args.year,
        weeks = planner.weeks().len(),
        first_day = %planner.first_day(),
        last_day = %planner.last_day(),
        "week grid built"
    );

    if let Some(path) = &args.birthday_file {
        let birthdays = input::read_birthdays(path)?;
        let mut placed = 0;
        for birthday in &birthdays {
            placed += checked(planner.add_birthday(birthday));
        }
        info!(read = birthdays.len(), placed, "birthdays attached");
    }

    if let Some(path) = &args.event_file {
        let events = input::read_events(path, "event")?;
        let mut placed = 0;
        for event in &events {
            placed += checked(planner.add_event(event));
        }
        info!(read = events.len(), placed, "events attached");
    }

    match (&args.holiday_file, args.holiday_country) {
        (Some(path), _) => {
            let holidays = input::read_events(path, "holiday")?;
            let mut placed = 0;
            for holiday in &holidays {
                placed += checked(planner.set_holiday(holiday.observance()));
            }
            info!(read = holidays.len(), placed, "holidays attached");
        }
        (None, Some(country)) => {
            let placed = attach_computed_holidays(&mut planner, country);
            info!(country = ?country, placed, "computed holidays attached");
        }
        (None, None) => debug!("no holiday source given"),
    }

    if let Some(path) = &args.moon_file {
        let moons = input::read_events(path, "moon")?;
        let mut placed = 0;
        for moon in &moons {
            placed += checked(planner.set_moon(moon.observance()));
        }
        info!(read = moons.len(), placed, "moon phases attached");
    }

    if let Some(path) = &args.nameday_file {
        let namedays = input::read_namedays(path)?;
        let mut placed = 0;
        for nameday in &namedays {
            placed += checked(planner.add_nameday(nameday));
        }
        info!(read = namedays.len(), placed, "namedays attached");
    }

    let csv = planner.to_csv();
    match &args.output {
        Some(path) => {
            fs::write(path, format!("{csv}\n"))
                .with_context(|| format!("failed to write CSV: {}", path.display()))?;
            info!(path = %path.display(), "CSV written");
        }
        None => println!("{csv}"),
    }
    Ok(())
}

/// Feed a country's computed holidays for every year the grid touches.
fn attach_computed_holidays(planner: &mut Planner, country: Country) -> usize {
    let calendar: Box<dyn HolidayCalendar> = match country {
        Country::Cz => Box::new(CzechRepublic::new(NameStyle::Long)),
        Country::Fr => Box::new(France),
    };
    let year = planner.year();
    let mut placed = 0;
    for candidate in [year - 1, year, year + 1] {
        // Years at the edge of the representable range have no dates.
        let Ok(holidays) = calendar.holidays(candidate) else {
            continue;
        };
        for holiday in holidays {
            let obs = Observance::new(holiday.date(), holiday.name());
            placed += checked(planner.set_holiday(obs));
        }
    }
    placed
}

/// Log dropped entries from an attachment report; count the placed ones.
fn checked(report: Attachment) -> usize {
    for misplaced in &report.dropped {
        warn!(%misplaced, "entry dropped");
    }
    report.placed.len()
}
