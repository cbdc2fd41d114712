use crate::config::PartialStudyConfig;
use crate::error::Result;
use tracing::info;

pub fn run() -> Result<()> {
    info!("Rendering built-in study configuration.");
    print!("{}", PartialStudyConfig::defaults().to_toml_string()?);
    Ok(())
}
