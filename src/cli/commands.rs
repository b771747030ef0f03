use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::catalog::Catalog;
use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::config::Settings;
use crate::errors::CatalogResult;
use crate::shell::Shell;
use crate::{loader, validator};

pub fn execute_command(cli: &Cli, settings: &Settings) -> CatalogResult<()> {
    let delimiter = cli.delimiter.unwrap_or_else(|| settings.delimiter());

    match &cli.command {
        Some(Commands::Validate { file }) => _validate(file, delimiter),
        Some(Commands::List { file }) => _list(file, delimiter),
        Some(Commands::Show { file, number }) => _show(file, number, delimiter),
        Some(Commands::Tree { file }) => _tree(file, delimiter),
        Some(Commands::Shell { file }) => _shell(file.as_deref(), delimiter),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "coursecat", &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Validate, then load the whole file into a fresh catalog. Nothing is
/// inserted when validation fails.
fn load_catalog(file: &Path, delimiter: char) -> CatalogResult<Catalog> {
    validator::validate_file(file, delimiter)?;
    let mut catalog = Catalog::new();
    let loaded = loader::load_file(file, &mut catalog, delimiter)?;
    debug!(loaded, file = %file.display(), "catalog ready");
    Ok(catalog)
}

#[instrument]
fn _validate(file: &Path, delimiter: char) -> CatalogResult<()> {
    validator::validate_file(file, delimiter)?;
    output::success(&format!("{} is valid", file.display()));
    Ok(())
}

#[instrument]
fn _list(file: &Path, delimiter: char) -> CatalogResult<()> {
    let catalog = load_catalog(file, delimiter)?;
    for course in catalog.iter_inorder() {
        output::info(&format!("{}\n", course));
    }
    Ok(())
}

#[instrument]
fn _show(file: &Path, number: &str, delimiter: char) -> CatalogResult<()> {
    let catalog = load_catalog(file, delimiter)?;
    match catalog.search(number) {
        Some(course) => output::info(&format!("{}\n", course)),
        None => output::warning("Course Number not found!"),
    }
    Ok(())
}

#[instrument]
fn _tree(file: &Path, delimiter: char) -> CatalogResult<()> {
    let catalog = load_catalog(file, delimiter)?;
    match catalog.render_tree() {
        Some(tree) => output::info(&tree),
        None => output::detail("catalog is empty"),
    }
    Ok(())
}

#[instrument]
fn _shell(file: Option<&Path>, delimiter: char) -> CatalogResult<()> {
    Shell::on_stdio(file, delimiter).run()
}
