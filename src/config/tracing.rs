use {
	serde::Deserialize,
	std::path::{Path, PathBuf},
};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct TracingConfig
{
	pub stderr: StderrConfig,
	pub files: FilesConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct StderrConfig
{
	pub enable: bool,
	pub ansi: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct FilesConfig
{
	pub enable: bool,
	pub directory: Box<Path>,
}

impl Default for StderrConfig
{
	fn default() -> Self
	{
		Self { enable: true, ansi: true }
	}
}

impl Default for FilesConfig
{
	fn default() -> Self
	{
		Self { enable: false, directory: default_files_directory() }
	}
}

fn default_files_directory() -> Box<Path>
{
	PathBuf::from("/var/log/steam-resolver").into_boxed_path()
}
