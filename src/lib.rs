#![doc = include_str!("../README.md")]

#[macro_use(Debug, Display, From, Error)]
extern crate derive_more as _;

#[macro_use]
extern crate tracing as _;

pub use {
	self::{
		inspect::expand,
		resolver::{ResolveError, Resolver},
	},
	steam_id::SteamId,
};

pub mod inspect;
pub mod resolver;
pub mod steam;

#[cfg(test)]
mod testing;
