//! helm-scaffold's main application entry point.
//! Handles command-line argument parsing and coordinates the
//! select, resolve and write flow for one run.

use helm_scaffold::{
    catalog::TemplateCatalog,
    chart::ChartManager,
    cli::{get_args, Args, Command},
    config::get_config,
    error::{default_error_handler, Result},
    logger::init_logger,
    prompt::DialoguerPrompter,
    resolver::VariableResolver,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the configuration from the chart directory
/// 2. Opens the chart and discovers the template catalog
/// 3. Lets the user select one or more templates
/// 4. Resolves each template's variables and writes it into the chart
fn run(args: Args) -> Result<()> {
    let Command::Resource { component, multi } = args.command;

    let mut config = get_config(&args.chart_dir)?;
    if let Some(templates_dir) = args.templates_dir {
        config.templates_dir = Some(templates_dir);
    }

    let prompt = DialoguerPrompter::new();
    let resolver = VariableResolver::new(&config.pattern)?;
    let catalog = TemplateCatalog::from_directory(config.templates_dir()?)?;
    let mut manager = ChartManager::new(&args.chart_dir, component, resolver, &prompt)?
        .with_defaults(config.defaults);

    let templates = if multi {
        catalog.select_multiple(&prompt)?
    } else {
        catalog.select_one(&prompt)?.into_iter().collect()
    };

    if templates.is_empty() {
        println!("No template selected.");
        return Ok(());
    }

    let written = manager.add_resources(templates)?;
    println!(
        "Added {} resource(s) to chart '{}'.",
        written.len(),
        manager.name()
    );
    Ok(())
}
