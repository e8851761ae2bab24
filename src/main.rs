use clap::{crate_version, App, Arg};
use elf_exports::list_exported_functions;

fn main() {
    drop(env_logger::init());

    let matches = App::new("elf-exports")
        .version(crate_version!())
        .about("Lists the exported function symbols of a 64-bit ELF shared object")
        .arg(
            Arg::with_name("file")
                .value_name("filename")
                .help("Path to the shared object")
                .required(true),
        )
        .get_matches();
    let matches_file = matches.value_of("file").unwrap();

    match list_exported_functions(matches_file) {
        Ok(names) => {
            for name in names {
                println!("{}", name);
            }
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}
