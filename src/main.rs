use clap::Parser;
use sealvars::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    sealvars::output::set_verbose(cli.verbose);

    let result = match cli.command {
        Commands::Resolve {
            ref format,
            ref output,
        } => sealvars::cli::commands::resolve::execute(&cli, format.as_deref(), output.as_deref()),
        Commands::Get { ref name } => sealvars::cli::commands::get::execute(&cli, name),
        Commands::List => sealvars::cli::commands::list::execute(&cli),
        Commands::Encrypt { ref input } => sealvars::cli::commands::encrypt::execute(&cli, input),
    };

    if let Err(e) = result {
        sealvars::output::error(&e.to_string());
        std::process::exit(1);
    }
}
