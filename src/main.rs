use glider_wb::{
    audit::{AuditLog, ConsoleAuditLog},
    balance::LoadConfiguration,
    config::Config,
    error, fatal, info,
    report::{LoadReport, WeighingSheet},
    store::{Fleet, GliderStore},
    warn,
};
use std::env;

const LOAD_FIELDS: [&str; 5] = ["front pilot", "rear pilot", "front ballast", "rear ballast", "wing water-ballast"];

/// Reads the optional load values following the registration, missing ones count as 0 kg.
fn parse_load(args: &[String]) -> Result<LoadConfiguration, String> {
    if args.len() > LOAD_FIELDS.len() {
        return Err(format!("expected at most {} load values, got {}", LOAD_FIELDS.len(), args.len()));
    }
    let mut values = [0.0; 5];
    for ((slot, arg), name) in values.iter_mut().zip(args).zip(LOAD_FIELDS) {
        *slot = arg.parse::<f64>().map_err(|e| format!("invalid {name} mass {arg:?}: {e}"))?;
    }
    let [front_pilot, rear_pilot, front_ballast, rear_ballast, wing_water_ballast] = values;
    Ok(LoadConfiguration { front_pilot, rear_pilot, front_ballast, rear_ballast, wing_water_ballast })
}

fn main() {
    let config = Config::from_env();
    let args: Vec<String> = env::args().skip(1).collect();
    let fleet = Fleet::load(config.db_path())
        .unwrap_or_else(|e| fatal!("Cannot open {}: {e}", config.db_path().display()));

    let Some(registration) = args.first() else {
        info!("Usage: glider-wb <REG> [front_pilot rear_pilot front_ballast rear_ballast wing_water]");
        info!("Known gliders: {}", fleet.registrations().join(", "));
        return;
    };
    let glider = fleet.glider(registration).unwrap_or_else(|e| fatal!("{e}"));
    if config.is_debug() {
        info!("{glider:#?}");
    }

    match WeighingSheet::new(&glider) {
        Ok(sheet) => println!("{sheet}"),
        Err(e) => {
            error!("No weighing sheet for {registration}: {e}");
            return;
        }
    }

    if args.len() > 1 {
        let load = parse_load(&args[1..]).unwrap_or_else(|e| fatal!("{e}"));
        match LoadReport::new(&glider, load) {
            Ok(report) => {
                println!("{report}");
                if !report.is_acceptable() {
                    warn!("{registration}: loading outside of the certified limits");
                }
            }
            Err(e) => error!("Loading check failed for {registration}: {e}"),
        }
    }
    ConsoleAuditLog.log(config.operator(), &format!("printed weighing sheet of {registration}"));
}
