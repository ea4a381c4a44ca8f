use crate::core::resolve::resolve_contact;
use crate::core::validate;
use crate::errors::{AppError, AppResult};
use crate::models::contact::Contact;
use crate::models::shift::{ShiftGrid, parse_shift_spec};
use crate::store::log::rlog;
use crate::store::pool::StorePool;
use crate::store::slots;
use crate::ui::messages::success;

/// Field values collected by the `add` command. `None` means "not
/// provided"; in edit mode that keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct ContactInput {
    pub first_name: Option<String>,
    pub restaurant: Option<String>,
    pub phone: Option<String>,
    pub instagram: Option<String>,
    pub notes: Option<String>,
    pub shifts: Vec<String>,
    pub clear_shifts: bool,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(
        pool: &mut StorePool,
        input: ContactInput,
        edit_reference: Option<String>,
    ) -> AppResult<()> {
        let mut contacts = slots::load_contacts(pool)?;

        // ------------------------------------------------
        // 1️⃣ EDIT MODE
        // ------------------------------------------------
        if let Some(reference) = edit_reference {
            let existing = resolve_contact(&contacts, &reference)?.clone();
            let updated = merge_input(existing, &input)?;

            let id = updated.id.clone();
            let name = updated.first_name.clone();

            slots::upsert(&mut contacts, updated);
            slots::save_contacts(pool, &contacts)?;
            rlog(
                &pool.conn,
                "edit",
                &id,
                &format!("Updated contact '{}'", name),
            )?;

            success(format!("Updated {}.", name));
            return Ok(());
        }

        // ------------------------------------------------
        // 2️⃣ INSERT MODE
        // ------------------------------------------------
        let first_name =
            validate::validate_first_name(input.first_name.as_deref().unwrap_or(""))?;

        let mut contact = Contact::new(first_name);
        contact.restaurant = trimmed_opt(input.restaurant.as_deref());
        contact.phone = validate::validate_phone(input.phone.as_deref())?;
        contact.instagram = validate::validate_instagram(input.instagram.as_deref())?;
        contact.notes = trimmed_opt(input.notes.as_deref());
        contact.shifts = parse_shifts(&input.shifts)?;

        let id = contact.id.clone();
        let name = contact.first_name.clone();

        slots::upsert(&mut contacts, contact);
        slots::save_contacts(pool, &contacts)?;
        rlog(
            &pool.conn,
            "add",
            &id,
            &format!("Added contact '{}'", name),
        )?;

        success(format!("Added {} ({}).", name, id));
        Ok(())
    }
}

fn trimmed_opt(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn parse_shifts(specs: &[String]) -> AppResult<ShiftGrid> {
    let mut grid = ShiftGrid::new();
    for spec in specs {
        let (day, period) =
            parse_shift_spec(spec).ok_or_else(|| AppError::InvalidShift(spec.clone()))?;
        grid.entry(day).or_default().insert(period);
    }
    Ok(grid)
}

/// Apply provided fields over an existing card; omitted fields keep their
/// stored values. An explicitly provided empty value clears the field.
fn merge_input(mut contact: Contact, input: &ContactInput) -> AppResult<Contact> {
    if let Some(name) = &input.first_name {
        contact.first_name = validate::validate_first_name(name)?;
    }
    if let Some(restaurant) = &input.restaurant {
        contact.restaurant = trimmed_opt(Some(restaurant));
    }
    if input.phone.is_some() {
        contact.phone = validate::validate_phone(input.phone.as_deref())?;
    }
    if input.instagram.is_some() {
        contact.instagram = validate::validate_instagram(input.instagram.as_deref())?;
    }
    if let Some(notes) = &input.notes {
        contact.notes = trimmed_opt(Some(notes));
    }

    if input.clear_shifts {
        contact.shifts.clear();
    }
    for (day, periods) in parse_shifts(&input.shifts)? {
        contact.shifts.entry(day).or_default().extend(periods);
    }

    Ok(contact)
}
