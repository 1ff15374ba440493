use crate::cli::commands::open_reporting_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::selectable_domain;
use crate::errors::AppResult;
use crate::ui::labels::slot_label;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{CYAN, RESET};
use crate::utils::table::{Column, Table};

/// Handle the `range` command: what can be selected in `report`/`export`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Range = cmd {
        let mut pool = open_reporting_db(cfg)?;

        let Some(domain) = selectable_domain(&mut pool)? else {
            warning("No reservations in the database.");
            return Ok(());
        };

        header("Selectable filters");
        println!(
            "{}• Reservations:{} {} → {}",
            CYAN, RESET, domain.first_date, domain.last_date
        );
        println!(
            "{}• Years:{} {}-{}",
            CYAN,
            RESET,
            domain.years().start(),
            domain.years().end()
        );
        println!(
            "{}• Months:{} {}-{}",
            CYAN,
            RESET,
            domain.months().start(),
            domain.months().end()
        );
        println!("{}• Time slots:{}", CYAN, RESET);

        let mut table = Table::new(vec![Column::new("id"), Column::new("label")]);
        for slot in domain.slots() {
            table.add_row(vec![
                slot.id().to_string(),
                slot_label(slot, cfg.language).to_string(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
