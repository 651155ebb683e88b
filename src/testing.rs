//! Test helpers.

use {
	crate::{SteamId, steam::{VanityError, VanityLookup}},
	std::{
		fmt,
		sync::{Arc, Mutex},
	},
	tracing::{Level, field::Field},
	tracing_subscriber::{field, layer, layer::SubscriberExt, registry},
};

/// A [`VanityLookup`] that records every name it is asked about and returns a canned result.
#[derive(Debug)]
pub(crate) struct CountingLookup
{
	names: Mutex<Vec<String>>,
	resolves_to: Option<SteamId>,
}

impl CountingLookup
{
	pub(crate) fn resolving_to(steam_id: SteamId) -> Self
	{
		Self { names: Mutex::default(), resolves_to: Some(steam_id) }
	}

	pub(crate) fn failing() -> Self
	{
		Self { names: Mutex::default(), resolves_to: None }
	}

	pub(crate) fn names(&self) -> Vec<String>
	{
		self.names.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}

	pub(crate) fn calls(&self) -> usize
	{
		self.names().len()
	}
}

impl VanityLookup for CountingLookup
{
	async fn resolve_vanity_url(&self, vanity_name: &str) -> Result<SteamId, VanityError>
	{
		self.names
			.lock()
			.unwrap_or_else(|err| err.into_inner())
			.push(vanity_name.to_owned());

		self.resolves_to.ok_or(VanityError::MissingApiKey)
	}
}

/// A recorded [`tracing::Event`].
#[derive(Debug, Clone)]
pub(crate) struct CapturedEvent
{
	pub(crate) level: Level,
	pub(crate) target: String,
	pub(crate) message: String,
}

/// Collects events emitted while installed as the thread's default subscriber.
#[derive(Debug, Default, Clone)]
pub(crate) struct CapturedEvents
{
	events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CapturedEvents
{
	pub(crate) fn set_default(&self) -> tracing::subscriber::DefaultGuard
	{
		let subscriber = tracing_subscriber::registry().with(self.clone());
		tracing::subscriber::set_default(subscriber)
	}

	pub(crate) fn at_level(&self, level: Level) -> Vec<CapturedEvent>
	{
		self.events
			.lock()
			.unwrap_or_else(|err| err.into_inner())
			.iter()
			.filter(|event| event.level == level)
			.cloned()
			.collect()
	}
}

impl<S> tracing_subscriber::Layer<S> for CapturedEvents
where
	S: tracing::Subscriber + for<'a> registry::LookupSpan<'a>,
{
	fn on_event(&self, event: &tracing::Event<'_>, _ctx: layer::Context<'_, S>)
	{
		let mut visitor = MessageVisitor(String::new());
		event.record(&mut visitor);

		self.events.lock().unwrap_or_else(|err| err.into_inner()).push(CapturedEvent {
			level: *event.metadata().level(),
			target: event.metadata().target().to_owned(),
			message: visitor.0,
		});
	}
}

struct MessageVisitor(String);

impl field::Visit for MessageVisitor
{
	fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug)
	{
		if field.name() == "message" {
			self.0 = format!("{value:?}");
		}
	}

	fn record_str(&mut self, field: &Field, value: &str)
	{
		if field.name() == "message" {
			value.clone_into(&mut self.0);
		}
	}
}
