use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let Some(rom_path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        println!("usage: retroduo <romfile>");
        return ExitCode::SUCCESS;
    };

    match retroduo::run(&rom_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
