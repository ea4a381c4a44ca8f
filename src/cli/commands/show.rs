use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::resolve::resolve_contact;
use crate::errors::AppResult;
use crate::models::contact::Contact;
use crate::store::pool::StorePool;
use crate::store::slots;
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::{bold, dash_if_empty, italic, shift_grid, wrap_notes};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let mut pool = StorePool::new(&cfg.storage)?;
        let contacts = slots::load_contacts(&mut pool)?;

        let contact = resolve_contact(&contacts, id)?;
        print_card(contact);
    }

    Ok(())
}

/// Detail card: every field, plus the 7x3 shift grid.
fn print_card(contact: &Contact) {
    println!("\n=== {} ===", bold(&contact.first_name));
    println!("ID:         {}", contact.id);
    println!(
        "Location:   {}",
        colorize_optional(dash_if_empty(Some(contact.effective_location_label())))
    );
    println!(
        "Phone:      {}",
        colorize_optional(dash_if_empty(contact.phone.as_deref()))
    );
    println!("Instagram:  {}", format_instagram(contact.instagram.as_deref()));

    if let Some(place) = &contact.place {
        println!("Address:    {}", place.formatted_address);
    }

    println!("\nShifts:\n{}", shift_grid(contact));

    if let Some(notes) = &contact.notes {
        println!("Notes:\n{}", italic(&wrap_notes(notes, 60)));
    }
}

fn format_instagram(handle: Option<&str>) -> String {
    match handle {
        Some(h) if !h.trim().is_empty() => format!("@{}", h),
        _ => colorize_optional("—"),
    }
}
