//! CLI tool for listgrid - runs a render pass over a JSON list view
//!
//! Usage:
//!   listgrid_cli <view.json>                          # Empty grid, JSON to stdout
//!   listgrid_cli <view.json> <state.json>             # With a data state
//!   listgrid_cli <view.json> [state.json] -o out.json # Output JSON to file
//!
//! Set `RUST_LOG=listgrid=debug` to see degraded width hints.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use listgrid::error::Result;
use listgrid::pipeline::render_view;
use listgrid::{DataState, ViewDescriptor};
use tracing_subscriber::EnvFilter;

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: listgrid_cli <view.json> [state.json] [-o output.json]");
        std::process::exit(1);
    }

    let view_path = &args[1];
    let rest = &args[2..];
    let (state_path, output_path) = match rest {
        [flag, out] if flag == "-o" => (None, Some(out)),
        [state, flag, out] if flag == "-o" => (Some(state), Some(out)),
        [state] => (Some(state), None),
        [] => (None, None),
        _ => {
            eprintln!("Usage: listgrid_cli <view.json> [state.json] [-o output.json]");
            std::process::exit(1);
        }
    };

    let view: ViewDescriptor = match read_json(Path::new(view_path)) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error reading {}: {}", view_path, e);
            std::process::exit(1);
        }
    };

    let state: DataState = match state_path {
        Some(path) => match read_json(Path::new(path)) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => DataState::default(),
    };

    let rendered = match render_view(&view, &state) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error rendering view: {}", e);
            std::process::exit(1);
        }
    };

    let json = match serde_json::to_string_pretty(&rendered) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
