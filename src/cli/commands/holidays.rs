use crate::cli::parser::Commands;
use crate::core::{GermanHolidays, HolidayOracle};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};
use chrono::Datelike;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Holidays { year } = cmd {
        let year = year.unwrap_or_else(|| crate::utils::date::now().year());

        let mut table = Table::new(vec![
            Column::new("Date", 10),
            Column::new("Day", 3),
            Column::new("Holiday", 20),
        ]);
        for h in GermanHolidays.holidays(year) {
            table.add_row(vec![
                h.date.format("%d.%m.%Y").to_string(),
                h.date.format("%a").to_string(),
                h.label,
            ]);
        }
        table.fit();

        header(format!("Holidays {year}"));
        print!("{}", table.render());
    }

    Ok(())
}
