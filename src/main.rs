//! steam-resolver - resolve Steam account identifiers.
//! Copyright (C) 2024  AlphaKeks <alphakeks@dawn>
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program. If not, see https://www.gnu.org/licenses.

mod cli;
mod config;
mod telemetry;

use {
	color_eyre::eyre::{self, WrapErr},
	std::{
		io::{self, Write},
		process::ExitCode,
		sync::Arc,
	},
	steam_resolver::{Resolver, SteamId, steam},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<ExitCode>
{
	color_eyre::install()?;

	match dotenvy::dotenv() {
		Err(error) if !error.not_found() => {
			return Err(error).wrap_err("failed to load `.env` file");
		},
		Ok(_) | Err(_) => {},
	}

	let args = cli::args();
	let config = config::Config::load(args.config_path.as_deref())?;
	let _guard = telemetry::init(&config.tracing).wrap_err("failed to initialize telemetry")?;

	let api_key = args
		.api_key
		.as_deref()
		.filter(|key| !key.is_empty())
		.map(Arc::from)
		.or_else(|| config.steam.api_key());

	let steam_client = match config.steam.api_url {
		None => steam::Client::new(api_key),
		Some(ref api_url) => steam::Client::new(api_key).with_base_url(api_url.as_str()),
	};

	let mut stdout = io::stdout().lock();

	match args.command {
		cli::Command::Resolve { inputs } => {
			let resolver = Resolver::new(steam_client);
			let mut exit_code = ExitCode::SUCCESS;

			for input in &inputs {
				match resolver.try_resolve(input).await {
					Ok(steam_id) => writeln!(stdout, "{}", steam_resolver::expand(steam_id))?,
					Err(error) => {
						tracing::debug!(%error, ?input, "failed to resolve");
						writeln!(stdout, "could not resolve {input:?}")?;
						exit_code = ExitCode::FAILURE;
					},
				}
			}

			Ok(exit_code)
		},
		cli::Command::Expand { steam_ids } => {
			for steam_id in steam_ids.into_iter().map(SteamId::from_u64) {
				writeln!(stdout, "{}", steam_resolver::expand(steam_id))?;
			}

			Ok(ExitCode::SUCCESS)
		},
	}
}
