//! Steam Web API access.

pub use self::{
	api::{ApiError, Client},
	result_code::ResultCode,
	vanity::{VanityError, VanityLookup},
};

pub mod api;
mod result_code;
mod vanity;
