use crate::errors::AppResult;
use crate::store::log::load_log;
use crate::store::pool::StorePool;
use crate::utils::table::{Column, Table};

pub struct LogLogic;

impl LogLogic {
    /// Print the internal log table, newest entries first.
    pub fn print_log(pool: &mut StorePool) -> AppResult<()> {
        let rows = load_log(pool)?;

        if rows.is_empty() {
            println!("Log is empty.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("DATE", 32),
            Column::new("OPERATION", 10),
            Column::new("MESSAGE", 48),
        ]);

        for (date, operation, message) in rows {
            table.add_row(vec![date, operation, message]);
        }

        print!("{}", table.render());
        Ok(())
    }
}
