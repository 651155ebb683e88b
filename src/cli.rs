use std::path::Path;

pub(crate) fn args() -> Args
{
	<Args as clap::Parser>::parse()
}

/// Resolve Steam accounts from IDs and vanity names
#[derive(Debug, clap::Parser)]
pub(crate) struct Args
{
	/// Path to the configuration file
	///
	/// Defaults to `steam-resolver.toml` in the working directory, if it exists.
	#[arg(long = "config", global = true)]
	pub config_path: Option<Box<Path>>,

	/// Steam Web API key used for resolving vanity names
	#[arg(long, env = "STEAM_API_KEY", hide_env_values = true, global = true)]
	pub api_key: Option<Box<str>>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Command
{
	/// Resolve Steam2 IDs, 64-bit IDs or vanity names and describe the result
	#[clap(name = "resolve")]
	Resolve
	{
		#[arg(required = true)]
		inputs: Vec<String>,
	},

	/// Describe raw 64-bit SteamIDs
	#[clap(name = "expand")]
	Expand
	{
		#[arg(required = true)]
		steam_ids: Vec<u64>,
	},
}

#[cfg(test)]
mod tests
{
	use {super::*, clap::Parser};

	#[test]
	fn parses_resolve()
	{
		let Ok(args) = Args::try_parse_from(["steam-resolver", "resolve", "gaben", "STEAM_0:0:11101"])
		else {
			panic!("valid arguments");
		};

		assert!(matches!(args.command, Command::Resolve { ref inputs } if inputs.len() == 2));
	}

	#[test]
	fn expand_requires_integers()
	{
		assert!(Args::try_parse_from(["steam-resolver", "expand", "gaben"]).is_err());
		assert!(Args::try_parse_from(["steam-resolver", "expand", "76561197960287930"]).is_ok());
	}

	#[test]
	fn cli_is_consistent()
	{
		<Args as clap::CommandFactory>::command().debug_assert();
	}
}
