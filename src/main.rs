use std::path::PathBuf;
use std::process::exit;

use structopt::StructOpt;

use boogie_frontend::ast::ast::Decl;
use boogie_frontend::config::config::{load_frontend_config, FrontendConfig};
use boogie_frontend::parser::parser::{load_program, LoadError};

#[derive(StructOpt, Debug)]
#[structopt(name = "Boogie frontend")]
struct Opt {
    /// Path of the program to parse
    #[structopt(short, long, parse(from_os_str))]
    file: PathBuf,

    /// Sets a custom config file
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,
}

fn main() {
    let opt = Opt::from_args();

    let config = match &opt.config {
        Some(path) => {
            let config_path = path.to_str().unwrap();
            match load_frontend_config(config_path) {
                Ok(config) => config,
                Err(error) => {
                    println!("Failed to load {}. Cause: {}", config_path, error);
                    exit(1);
                }
            }
        }
        None => FrontendConfig::default(),
    };

    let path = opt.file.to_str().unwrap();
    let program = match load_program(path) {
        Ok(program) => program,
        Err(err) => {
            println!("Loading program '{}' failed.", path);
            match err {
                LoadError::ParseError(err) => {
                    println!("{}", err);
                    exit(1);
                }
                LoadError::NotFoundError(msg) => {
                    println!("{}", msg);
                    exit(1);
                }
            }
        }
    };

    if config.trace.parse {
        for decl in &program.decls {
            match decl {
                Decl::Implementation(implementation) => {
                    println!("Parsed implementation '{}'", implementation.name)
                }
            }
        }
    }

    if config.trace.ast {
        println!("{:#?}", program);
    }

    if config.pretty_print {
        print!("{}", program);
    }
}
