use chrono::NaiveDate;
use cityweather_core::{CurrentResult, ReportView, view::date_label};

/// Text block for the current result; empty when there is nothing to show.
pub fn render(result: &CurrentResult, today: NaiveDate) -> String {
    match result {
        CurrentResult::Empty => String::new(),
        CurrentResult::Failure(failure) => format!("{}\n", failure.message),
        CurrentResult::Report(report) => {
            let view = ReportView::from(report);
            format!(
                "\n{heading}\n{date}\n\n  {symbol}  {description}\n  {temperature}\n\n  \
                 Humidity  {humidity}\n  Wind      {wind}\n  Pressure  {pressure}\n\n",
                heading = view.heading,
                date = date_label(today),
                symbol = view.glyph.symbol(),
                description = view.description,
                temperature = view.temperature,
                humidity = view.humidity,
                wind = view.wind,
                pressure = view.pressure,
            )
        }
    }
}
