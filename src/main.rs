// src/main.rs

use sequence::{cli, exit_code, logging, run};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let program = cli::program_name();

    let args = match cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            std::process::exit(cli::exit_code_for(&err));
        }
    };

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("{program}: {err:#}");
        std::process::exit(1);
    }

    let result = run(args).await;
    match &result {
        Ok(outcome) => {
            if let Some(message) = outcome.diagnostic() {
                eprintln!("{program}: {message}");
            }
        }
        Err(err) => eprintln!("{program}: {err}"),
    }
    std::process::exit(exit_code(&result));
}
