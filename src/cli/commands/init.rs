//! `init` writes a default settings file; `config` prints the effective settings.

use crate::config::Settings;

/// Write `.opcalc/settings.toml` with defaults. Refuses to overwrite unless `force`.
pub fn run_init(force: bool) {
    let path = Settings::init_config_file(force).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let verb = if force { "Wrote" } else { "Created" };
    println!("{verb} {}", path.display());
    println!("Every key is optional; delete the ones you do not want to override.");
}

/// Settings after defaults, file and `OPCALC_*` variables have been merged.
pub fn render_config(settings: &Settings) -> Result<String, toml::ser::Error> {
    let body = toml::to_string_pretty(settings)?;
    Ok(format!("# effective settings: defaults < settings.toml < OPCALC_* env\n{body}"))
}

pub fn run_config(settings: &Settings) {
    match render_config(settings) {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("Error: cannot render settings: {e}");
            std::process::exit(1);
        }
    }
}
