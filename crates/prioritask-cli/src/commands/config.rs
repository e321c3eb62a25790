use clap::Subcommand;
use prioritask_core::{Config, ConfigError, ScoringEngine};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one setting, e.g. "scoring.formula" or "store.file_name"
    Get { key: String },
    /// Change a setting; scoring changes are validated before saving
    Set { key: String, value: String },
    /// Print the whole configuration as JSON
    List,
    /// Restore the default scoring rules and store file
    Reset,
}

/// One line describing the rules tasks are ranked by.
fn describe(engine: &ScoringEngine) -> String {
    format!(
        "{} formula, {} urgency, estimates scaled x{} (limit {} min)",
        engine.formula(),
        engine.urgency_mode(),
        engine.scale().scale_factor(),
        engine.scale().limit()
    )
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let value = Config::load()?
                .get(&key)
                .ok_or(ConfigError::UnknownKey(key))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let engine = Config::load()?.set(&key, &value)?;
            println!("{key} = {value}");
            println!("scoring: {}", describe(&engine));
        }
        ConfigAction::List => {
            println!("{}", serde_json::to_string_pretty(&Config::load()?)?);
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            println!("scoring: {}", describe(&config.engine()?));
        }
    }
    Ok(())
}
