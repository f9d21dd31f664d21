#![warn(unused_extern_crates)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::trivially_copy_pass_by_ref)]

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use time::OffsetDateTime;
use warp_clock::cli::{Cli, Command, parse_display_time};
use warp_clock::clock::ClockFace;
use warp_clock::editor::Editor;
use warp_clock::presets::morph;
use warp_clock::store::{FileBackend, PositionStore};
use warp_clock::prelude::*;

fn report(mode: ClockMode, face: &ClockFace) {
    info!(
        "{} hand angles (deg): hour={:.1}, minute={:.1}",
        mode, face.hands.hour, face.hands.minute
    );
    let markers: Vec<String> = face
        .markers
        .iter()
        .map(|marker| format!("{}@{:.1}", marker.hour, marker.angle))
        .collect();
    info!("Markers: {}", markers.join(" "));
    let ticks: Vec<String> = face.ticks.iter().map(|tick| format!("{:.1}", tick)).collect();
    debug!("Minute ticks: {}", ticks.join(" "));
}

fn open_store(dir: &Path, now: OffsetDateTime) -> Result<PositionStore<FileBackend>, ClockError> {
    let backend = FileBackend::open(dir).inspect_err(|err| {
        error!("Failed to open store: {err}");
    })?;
    Ok(PositionStore::open(backend, now))
}

fn cli_main() -> Result<(), ExitCode> {
    let cliopts = Cli::parse();

    let level = if cliopts.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    #[allow(clippy::expect_used)]
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .without_timestamps()
        .init()
        .expect("Failed to initialize logger");

    let now = local_now();

    match cliopts.command {
        Command::Show { at, mode } => {
            let store = open_store(&cliopts.store, now)?;
            let time = match at {
                Some(at) => parse_display_time(&at, now)?,
                None => now,
            };
            let mode = mode.map(ClockMode::from).unwrap_or(ClockMode::from_time(time));
            report(mode, &ClockFace::compose(&store.get(mode), time));
        }
        Command::Set {
            hour,
            degrees,
            mode,
        } => {
            let hour = Hour::try_from(hour)?;
            let mut store = open_store(&cliopts.store, now)?;
            if let Some(mode) = mode {
                store.set_mode(mode.into());
            }
            let applied = Editor::new(&mut store)
                .propose(hour, degrees)
                .inspect_err(|err| error!("Failed to move hour {hour}: {err}"))?;
            info!("{} hour {} now at {}", store.current_mode(), hour, applied);
        }
        Command::Drag {
            hour,
            dx,
            dy,
            mode,
        } => {
            let hour = Hour::try_from(hour)?;
            let mut store = open_store(&cliopts.store, now)?;
            if let Some(mode) = mode {
                store.set_mode(mode.into());
            }
            let applied = Editor::new(&mut store)
                .drag(hour, dx, dy)
                .inspect_err(|err| error!("Failed to drag hour {hour}: {err}"))?;
            info!("{} hour {} now at {}", store.current_mode(), hour, applied);
        }
        Command::Positions { mode } => {
            let store = open_store(&cliopts.store, now)?;
            let mode = mode.map(ClockMode::from).unwrap_or(store.current_mode());
            let json =
                serde_json::to_string_pretty(&store.get(mode)).map_err(ClockError::from)?;
            println!("{json}");
        }
        Command::Preview { page, at } => {
            let time = parse_display_time(&at, now)?;
            let face = ClockFace::compose(&morph(page), time);
            report(ClockMode::from_time(time), &face);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match cli_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => code,
    }
}
