use clap::{Parser, Subcommand};
use std::fs::File;
use std::io;
use std::io::Read;
use std::process;

use dashlint::dashboard::display as dashboard_display;
use dashlint::dashboard::types::Dashboard;
use dashlint::lint::display;
use dashlint::lint::engine::RuleSet;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Lint {
        #[clap(short, long, value_parser)]
        file: Option<String>,
    },
    Show {
        #[clap(short, long, value_parser)]
        file: Option<String>,
    },
}

fn get_input(file: Option<String>) -> String {
    let mut payload = String::new();
    match file {
        Some(file_path) => {
            let mut file = File::open(file_path).expect("Unable to open file");
            file.read_to_string(&mut payload).expect("");
        }
        None => {
            io::stdin()
                .read_to_string(&mut payload)
                .expect("Unable to read from stdin");
        }
    }
    payload
}

fn decode(input: &str) -> Dashboard {
    match Dashboard::new(input.as_bytes()) {
        Ok(dashboard) => dashboard,
        Err(error) => {
            println!("{} - {}", display::error_header("Parse error"), error);
            process::exit(1);
        }
    }
}

fn main() {
    let args = Args::parse();

    match args.command {
        Commands::Lint { file } => {
            let input = get_input(file);
            let dashboard = decode(&input);

            let results = RuleSet::default().lint(&dashboard);

            for result in results.reportable() {
                println!("{}", display::format_result(result));
            }

            let exit_code = match results.is_passing() {
                true => 0,
                false => 1,
            };
            process::exit(exit_code);
        }

        Commands::Show { file } => {
            let input = get_input(file);
            let dashboard = decode(&input);

            dashboard_display::print_dashboard(dashboard);
        }
    }
}
