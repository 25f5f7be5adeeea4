#[derive(clap::Parser)]
#[command(name = "ignite-node")]
#[command(about = "Inspect and edit an Ignite node's flash configuration")]
struct Cli {
    /// Flash image directory (defaults to $IGNITE_HOME, then ~/.ignite)
    #[arg(long, global = true)]
    home: Option<std::path::PathBuf>,

    /// More log output (-v info, -vv debug); $IGNITE_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: ignite_node::Command,
}

fn main() {
    let cli: Cli = clap::Parser::parse();
    ignite_node::console::init(cli.verbose);

    match ignite_node::run(cli.home, cli.command) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
