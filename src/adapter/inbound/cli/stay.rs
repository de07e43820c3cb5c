//! Handlers for `quote` and `availability`.

use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::{format_price, AvailabilityArgs, QuoteArgs};
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::run::{load_config, open_service};
use crate::domain::{CalendarDay, PropertyId, StayQuote, StayRequest, StaySelection};
use crate::error::Result;

#[derive(Tabled)]
struct NightRow {
    #[tabled(rename = "Night")]
    date: String,
    #[tabled(rename = "Day")]
    weekday: String,
    #[tabled(rename = "Price")]
    price: String,
}

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "")]
    marker: &'static str,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Day")]
    weekday: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Price")]
    price: String,
}

/// Execute `quote`.
pub async fn quote(args: &QuoteArgs) -> Result<()> {
    let config = load_config(&args.config.config)?;
    let service = open_service(&config)?;

    let stay = StayRequest {
        check_in: args.check_in,
        check_out: args.check_out,
        guests: args.guests,
    };
    let quote = service.quote(PropertyId::new(args.property_id), stay).await?;

    if output::is_json() {
        output::record("quote", &quote);
        return Ok(());
    }
    print_quote(&quote);
    Ok(())
}

fn print_quote(quote: &StayQuote) {
    output::section(&format!(
        "{} → {} ({} nights)",
        quote.check_in, quote.check_out, quote.nights
    ));
    let rows: Vec<NightRow> = quote
        .nightly
        .iter()
        .map(|night| NightRow {
            date: night.date.to_string(),
            weekday: night.date.format("%a").to_string(),
            price: format_price(night.price),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());

    output::field("Subtotal", format_price(quote.subtotal));
    output::field("Service fee", format_price(quote.service_fee));
    output::field("Cleaning fee", format_price(quote.cleaning_fee));
    output::field("Total", output::highlight(format_price(quote.total)));
}

/// Execute `availability`.
///
/// Each `--select` date is applied in order the way a guest clicks through
/// the calendar; the resulting selection is highlighted and, once both ends
/// are set, priced.
pub async fn availability(args: &AvailabilityArgs) -> Result<()> {
    let config = load_config(&args.config.config)?;
    let service = open_service(&config)?;
    let id = PropertyId::new(args.property_id);

    let calendar = service.availability(id, args.from, args.days).await?;
    let selection = select(&calendar, &args.selections);

    for day in &calendar {
        output::record("day", day);
    }
    if !output::is_json() {
        let rows: Vec<DayRow> = calendar
            .iter()
            .map(|day| DayRow {
                marker: if selection.contains(day.date) { "▶" } else { "" },
                date: day.date.to_string(),
                weekday: day.date.format("%a").to_string(),
                status: if day.available { "available" } else { "booked" }.to_string(),
                price: day.price.map_or_else(|| "-".to_string(), format_price),
            })
            .collect();
        output::lines(&Table::new(rows).to_string());
    }

    match selection {
        StaySelection::Empty => {}
        StaySelection::CheckIn(check_in) => {
            output::hint(&format!("check-in {check_in} selected; pick a later date to check out"));
        }
        StaySelection::Range {
            check_in,
            check_out,
        } => {
            let stay = StayRequest {
                check_in,
                check_out,
                guests: 1,
            };
            match service.quote(id, stay).await {
                Ok(quote) if output::is_json() => output::record("quote", &quote),
                Ok(quote) => print_quote(&quote),
                Err(e) => output::warning(&format!("selected stay cannot be booked: {e}")),
            }
        }
    }
    Ok(())
}

/// Fold the clicked dates into a selection. Dates outside the calendar
/// count as unavailable.
fn select(calendar: &[CalendarDay], clicks: &[chrono::NaiveDate]) -> StaySelection {
    clicks.iter().fold(StaySelection::default(), |selection, date| {
        let available = calendar
            .iter()
            .any(|day| day.date == *date && day.available);
        selection.select(*date, available)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn calendar() -> Vec<CalendarDay> {
        (2..=8)
            .map(|d| CalendarDay {
                date: date(d),
                available: d != 4,
                price: None,
            })
            .collect()
    }

    #[test]
    fn clicks_build_a_range() {
        let selection = select(&calendar(), &[date(2), date(6)]);
        assert_eq!(selection.range(), Some((date(2), date(6))));
    }

    #[test]
    fn unavailable_and_out_of_window_clicks_are_ignored() {
        let selection = select(&calendar(), &[date(4), date(3), date(20)]);
        assert_eq!(selection, StaySelection::CheckIn(date(3)));
    }

    #[test]
    fn earlier_click_restarts_the_selection() {
        let selection = select(&calendar(), &[date(6), date(3)]);
        assert_eq!(selection, StaySelection::CheckIn(date(3)));
    }
}
