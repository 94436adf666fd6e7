use clap::{value_parser, Arg, Command};
use log::info;
use simplelog::{
    format_description, ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::File;
use std::path::Path;

use run_aeu_simulator::application;
use run_aeu_simulator::constants::{DEFAULT_ARB_DATA_DIR, DEFAULT_CALIBRATION_FILE};

fn main() {
    // Parse the command line arguments
    let matches = Command::new("aeu simulator")
        .about("AEU camera ground-support equipment simulator.")
        .arg(
            Arg::new("calibration")
                .short('c')
                .long("calibration")
                .help("Path to the calibration file.")
                .default_value(DEFAULT_CALIBRATION_FILE),
        )
        .arg(
            Arg::new("arb-data")
                .short('a')
                .long("arb-data")
                .help("Path to the folder with the .arb waveform files.")
                .default_value(DEFAULT_ARB_DATA_DIR),
        )
        .arg(
            Arg::new("period")
                .short('p')
                .long("period")
                .help("Telemetry period in millisecond.")
                .default_value("1000")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("level")
                .short('l')
                .long("log-level")
                .help("Log level: 0 (Off), 1 (Error), 2 (Warn), 3 (Info), 4 (Debug), 5 (Trace)")
                .default_value("3")
                .value_parser(value_parser!(u32)),
        )
        .get_matches();

    let calibration_file = matches
        .get_one::<String>("calibration")
        .expect("There should be a calibration file.");
    let arb_data_dir = matches
        .get_one::<String>("arb-data")
        .expect("There should be an ARB data folder.");
    let period_millisecond = *matches
        .get_one::<u64>("period")
        .expect("There should be a period.");

    // Check the log filter
    let log_filter = get_log_filter(matches.get_one::<u32>("level"));

    // Initiate the logger
    initiate_logger(log_filter, "aeu_simulator.log");
    info!("Log level: {log_filter}.");

    // Run the application
    application::run(
        Path::new(calibration_file),
        Path::new(arb_data_dir),
        period_millisecond,
    );
}

/// Get the log filter.
///
/// # Arguments
/// * `log_level` - Log level.
///
/// # Returns
/// Log filter.
fn get_log_filter(log_level: Option<&u32>) -> LevelFilter {
    match log_level {
        Some(level) => match level {
            0 => LevelFilter::Off,
            1 => LevelFilter::Error,
            2 => LevelFilter::Warn,
            3 => LevelFilter::Info,
            4 => LevelFilter::Debug,
            5 => LevelFilter::Trace,
            _ => LevelFilter::Info,
        },
        None => LevelFilter::Info,
    }
}

/// Initiate the logger.
///
/// # Arguments
/// * `level` - Log level.
/// * `filepath` - Log file path.
fn initiate_logger(level: LevelFilter, filepath: &str) {
    let config = ConfigBuilder::new()
        .set_time_format_custom(format_description!(
            "[year]/[month]/[day] [hour]:[minute]:[second].[subsecond]"
        ))
        .build();

    // Log to the terminal
    let logger_terminal = TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    // Log to the file
    let logger_file: Option<Box<WriteLogger<File>>>;
    match File::create(filepath) {
        Ok(file) => {
            logger_file = Some(WriteLogger::new(level, config.clone(), file));
        }
        Err(error) => {
            logger_file = None;
            eprintln!("Failed to create the log file: {error}.");
        }
    }

    if logger_file.is_some() {
        let _ = CombinedLogger::init(vec![logger_terminal, logger_file.unwrap()]);
    } else {
        let _ = CombinedLogger::init(vec![logger_terminal]);
    }
}
