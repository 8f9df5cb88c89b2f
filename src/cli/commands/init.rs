//! Init Command
//!
//! Set up docstitch in the current directory: write the default config
//! and the starter Handlebars template.

use crate::config::ConfigLoader;
use crate::constants::paths;
use crate::types::Result;

pub fn run(force: bool) -> Result<()> {
    let root = std::env::current_dir()?;
    let config_path = ConfigLoader::init_project(&root, force)?;

    println!("✓ Initialized docstitch");
    println!("  Config:   {}", config_path.display());
    println!("  Template: {}", root.join(paths::TEMPLATE_FILE).display());
    println!();
    println!("Next steps:");
    println!("  1. List your package directories under [packages] include in docstitch.toml");
    println!("  2. Add the sentinel comments to each package README");
    println!("  3. Run 'docstitch generate' to splice the API tables");

    Ok(())
}
