// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use brachium_core::consts;
use clap::Parser;

mod config;

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Laixer Equipment B.V.")]
#[command(version, propagate_version = true)]
#[command(about = "Brachium arm pose tool", long_about = None)]
struct Args {
    /// Configuration file.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<std::path::PathBuf>,
    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Commands.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Solve a single target elevation.
    Solve {
        /// Target elevation in degrees.
        #[arg(allow_negative_numbers = true)]
        elevation: f32,
    },
    /// Tabulate solutions across the elevation input range.
    Sweep {
        /// Step between targets in degrees.
        #[arg(short, long, default_value_t = 5.0)]
        step: f32,
    },
    /// Solve target elevations read from standard input, one per line.
    Watch,
}

fn main() -> anyhow::Result<()> {
    use log::LevelFilter;

    let args = Args::parse();

    let mut log_config = simplelog::ConfigBuilder::new();
    log_config.set_time_level(LevelFilter::Off);
    log_config.set_thread_level(LevelFilter::Off);
    log_config.set_target_level(LevelFilter::Off);
    log_config.set_location_level(LevelFilter::Off);

    let log_level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let config = match args.config {
        Some(path) => config::Config::try_from_file(path)?,
        None => config::Config::default(),
    };

    log::trace!("{:#?}", config);

    let profile = config.profile()?;

    log::debug!(
        "Profile: segment {:.1} mm; effector {:.1} mm; limits {:.1}°..{:.1}°",
        profile.segment_length(),
        profile.effector_length(),
        profile.constraint().min(),
        profile.constraint().max()
    );

    match args.command {
        Command::Solve { elevation } => {
            let solution = profile.solve(elevation)?;

            println!("Target:   {:>+7.1}°", elevation);
            println!("{}", solution.angles);
            println!("{}", solution.pose);
            println!("Reach:    {:>7.1} mm", solution.pose.reach());
            println!("Achieved: {:>+7.1}°", solution.elevation);

            if (solution.elevation - elevation).abs() > 0.05 {
                log::warn!(
                    "Target {:.1}° is out of reach, joints clamped at {:.1}°",
                    elevation,
                    solution.elevation
                );
            }
        }
        Command::Sweep { step } => {
            if !step.is_finite() || step <= 0.0 {
                return Err(anyhow::anyhow!("Sweep step must be positive"));
            }

            println!(
                "{:>8}  {:>8}  {:>8}  {:>8}  {:>8}  {:>8}  {:>8}",
                "target", "shoulder", "elbow", "wrist", "tip x", "tip y", "achieved"
            );

            let count = ((consts::ELEVATION_MAX - consts::ELEVATION_MIN) / step).floor() as i32;
            for i in 0..=count {
                let target = consts::ELEVATION_MIN + i as f32 * step;
                let solution = profile.solve(target)?;

                println!(
                    "{:>+8.1}  {:>+8.1}  {:>+8.1}  {:>+8.1}  {:>+8.1}  {:>+8.1}  {:>+8.1}",
                    target,
                    solution.angles.shoulder,
                    solution.angles.elbow,
                    solution.angles.wrist,
                    solution.pose.tip.x,
                    solution.pose.tip.y,
                    solution.elevation
                );
            }
        }
        Command::Watch => {
            use std::io::BufRead;

            for line in std::io::stdin().lock().lines() {
                let line = line?;
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }

                match input.parse::<f32>() {
                    Ok(target) => match profile.solve(target) {
                        Ok(solution) => println!("{}", solution),
                        Err(e) => log::error!("{}", e),
                    },
                    Err(e) => log::error!("Invalid target {:?}: {}", input, e),
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_accepts_negative_target() {
        let args = Args::try_parse_from(["brachctl", "solve", "-45"]).unwrap();

        match args.command {
            Command::Solve { elevation } => assert_eq!(elevation, -45.0),
            _ => panic!("expected solve command"),
        }
    }

    #[test]
    fn test_solve_accepts_fractional_target() {
        let args = Args::try_parse_from(["brachctl", "solve", "-90.5"]).unwrap();

        match args.command {
            Command::Solve { elevation } => assert_eq!(elevation, -90.5),
            _ => panic!("expected solve command"),
        }
    }
}
