//! ngxgen's application entry point.
//! Parses the command line, sets up logging and hands over to the generator.

use ngxgen::{
    cli::get_args,
    error::default_error_handler,
    generator::{run, Services},
    logger::init_logger,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    tools::SystemRunner,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    let engine = MiniJinjaRenderer::new();
    let prompter = DialoguerPrompter::new();
    let runner = SystemRunner;
    let services = Services { engine: &engine, prompter: &prompter, runner: &runner };

    if let Err(err) = run(&args, &services) {
        default_error_handler(err);
    }
}
