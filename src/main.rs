use mastermind::cli::{CliInterface, parse_cli};
use mastermind::logging::{LogTarget, default_log_path, init_logging, log_target};
use mastermind::tui::TuiInterface;
use mastermind::{Controls, GameState, Theme, game_loop};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();

    let logged = match log_target(cli.log_file.clone(), cli.plain, default_log_path()) {
        LogTarget::File(path) => init_logging(Some(&path)),
        LogTarget::Stderr => init_logging(None),
        LogTarget::Off => Ok(()),
    };
    if let Err(e) = logged {
        eprintln!("Failed to open log file: {e}");
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let theme = if cli.light { Theme::Light } else { Theme::Dark };
    let mut controls = Controls::new(theme);
    let mut state = GameState::new(&mut rng);
    log::info!(
        "Starting mastermind (plain={}, theme={:?}, seed={:?})",
        cli.plain,
        theme,
        cli.seed
    );

    let result = if cli.plain {
        let mut interface = CliInterface::new(io::stdin().lock());
        game_loop(&mut state, &mut controls, &mut rng, &mut interface)
    } else {
        // Dropping the interface restores the terminal before any error is printed.
        TuiInterface::new().and_then(|mut interface| {
            game_loop(&mut state, &mut controls, &mut rng, &mut interface)
        })
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Exiting with error: {e}");
            eprintln!("mastermind: {e}");
            ExitCode::FAILURE
        }
    }
}
