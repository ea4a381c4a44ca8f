use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, ContactInput};
use crate::errors::AppResult;
use crate::store::pool::StorePool;

/// Add a new contact or edit an existing one.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        restaurant,
        phone,
        instagram,
        notes,
        shifts,
        edit_reference,
        clear_shifts,
    } = cmd
    {
        let mut pool = StorePool::new(&cfg.storage)?;

        let input = ContactInput {
            first_name: name.clone(),
            restaurant: restaurant.clone(),
            phone: phone.clone(),
            instagram: instagram.clone(),
            notes: notes.clone(),
            shifts: shifts.clone(),
            clear_shifts: *clear_shifts,
        };

        AddLogic::apply(&mut pool, input, edit_reference.clone())?;
    }

    Ok(())
}
