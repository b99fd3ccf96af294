fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match lwcli::app::run(args) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("\nERROR {:#}", err);
            std::process::exit(1);
        }
    }
}
