use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::{self, ContactGroup, ListMode};
use crate::errors::AppResult;
use crate::store::pool::StorePool;
use crate::store::slots;
use crate::utils::colors;
use crate::utils::formatting::pad_right;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        search,
        category,
        mode,
        tabs,
    } = cmd
    {
        let mut pool = StorePool::new(&cfg.storage)?;
        let contacts = slots::load_contacts(&mut pool)?;

        let mode = (*mode).unwrap_or_else(|| default_mode(cfg));

        if *tabs {
            for tab in query::category_tabs(&contacts, mode) {
                println!("{}", tab);
            }
            return Ok(());
        }

        let term = search.as_deref().unwrap_or("");
        let groups = query::query(&contacts, term, category.as_deref(), mode);

        if groups.is_empty() {
            if term.trim().is_empty() {
                println!("No contacts yet. Add one with `rolo add NAME`.");
            } else {
                println!("No contacts matching \"{}\".", term.trim());
            }
            return Ok(());
        }

        print_groups(&groups, cfg, mode);
    }

    Ok(())
}

fn default_mode(cfg: &Config) -> ListMode {
    ListMode::from_code(&cfg.default_mode).unwrap_or(ListMode::Name)
}

fn print_groups(groups: &[ContactGroup], cfg: &Config, mode: ListMode) {
    // The fixed tab set only exists in name mode.
    if cfg.show_empty_groups && mode == ListMode::Name {
        for (index, tab) in query::ALPHABET_TABS.iter().enumerate() {
            print_group_header(index, tab);
            match groups.iter().find(|g| g.label == *tab) {
                Some(group) => print_group_rows(group),
                None => println!("  (empty)"),
            }
        }
        return;
    }

    for (index, group) in groups.iter().enumerate() {
        print_group_header(index, &group.label);
        print_group_rows(group);
    }
}

fn print_group_header(index: usize, label: &str) {
    println!(
        "{}{}▸ {}{}",
        colors::group_color(index),
        colors::BOLD,
        label,
        colors::RESET
    );
}

fn print_group_rows(group: &ContactGroup) {
    for contact in &group.contacts {
        let label = contact.effective_location_label();
        let location = if label.is_empty() { "—" } else { label };

        println!(
            "  {} {}  {}{}{}",
            pad_right(&contact.first_name, 18),
            pad_right(location, 24),
            colors::GREY,
            contact.id,
            colors::RESET
        );
    }
}
