use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::initialize::init_store;
use crate::store::log;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the storage file (prod or test mode)
///  - all pending schema migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.store {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();
    let storage_path = if let Some(custom) = &cli.store {
        custom.clone()
    } else {
        cfg.storage.clone()
    };

    println!("⚙️  Initializing Rolo…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Storage    : {}", &storage_path);

    let conn = Connection::open(&storage_path)?;
    init_store(&conn)?;

    println!("✅ Storage initialized at {}", &storage_path);

    // Internal log (non-blocking)
    if let Err(e) = log::rlog(
        &conn,
        "init",
        "storage",
        &format!("Storage initialized at {}", &storage_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 Rolo initialization completed!");
    Ok(())
}
