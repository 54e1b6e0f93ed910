//! Ordered request parameters shared by the authorization URL and the token exchanges.
//!
//! Salesforce reads every value from the query string, so [`Params`] keeps insertion order
//! and serializes with the same escaping rules as a browser's `encodeURIComponent`.

// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
// self
use crate::_prelude::*;

/// Characters left untouched when serializing query values. `'` stays escaped because `Url`
/// escapes it in special-scheme queries anyway.
const QUERY_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'(')
	.remove(b')');

/// Ordered mapping of parameter names to string values.
///
/// Keys are unique. Re-inserting a key replaces its value without moving it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);
impl Params {
	/// Creates an empty parameter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts or replaces `key`, returning the previous value when one existed.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
		let key = key.into();
		let value = value.into();

		match self.0.iter_mut().find(|(k, _)| *k == key) {
			Some((_, slot)) => Some(std::mem::replace(slot, value)),
			None => {
				self.0.push((key, value));

				None
			},
		}
	}

	/// Builder-style variant of [`Params::insert`].
	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(key, value);

		self
	}

	/// Merges `defaults` in front of the caller's parameters.
	///
	/// Default keys are placed first, in the order given. A key the caller already supplied
	/// keeps the caller's value but moves to its default's position; the remaining caller
	/// keys follow in insertion order.
	pub fn with_defaults<'a, I>(mut self, defaults: I) -> Self
	where
		I: IntoIterator<Item = (&'a str, &'a str)>,
	{
		let mut merged = Vec::with_capacity(self.0.len() + 1);

		for (key, value) in defaults {
			if merged.iter().any(|(k, _): &(String, String)| k == key) {
				continue;
			}

			let value = self.remove(key).unwrap_or_else(|| value.to_owned());

			merged.push((key.to_owned(), value));
		}

		merged.extend(self.0);

		Self(merged)
	}

	/// Returns the value stored for `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
	}

	/// Returns true when `key` is present.
	pub fn contains(&self, key: &str) -> bool {
		self.0.iter().any(|(k, _)| k == key)
	}

	/// Removes `key`, returning its value.
	pub fn remove(&mut self, key: &str) -> Option<String> {
		let idx = self.0.iter().position(|(k, _)| k == key)?;

		Some(self.0.remove(idx).1)
	}

	/// Number of parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when no parameters are set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over `(key, value)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Serializes the parameters as `k=v&k=v` with percent-encoded keys and values.
	pub fn to_query_string(&self) -> String {
		let mut buf = String::new();

		for (idx, (key, value)) in self.0.iter().enumerate() {
			if idx > 0 {
				buf.push('&');
			}

			buf.extend(utf8_percent_encode(key, QUERY_COMPONENT_SET));
			buf.push('=');
			buf.extend(utf8_percent_encode(value, QUERY_COMPONENT_SET));
		}

		buf
	}

	/// Returns `base` with its query replaced by these parameters.
	pub fn apply_to(&self, base: &Url) -> Url {
		let mut url = base.clone();

		if self.is_empty() {
			url.set_query(None);
		} else {
			url.set_query(Some(&self.to_query_string()));
		}

		url
	}
}
impl Debug for Params {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let mut map = f.debug_map();

		for (key, value) in &self.0 {
			if is_sensitive(key) {
				map.entry(key, &"<redacted>");
			} else {
				map.entry(key, value);
			}
		}

		map.finish()
	}
}
impl<K, V> FromIterator<(K, V)> for Params
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		let mut params = Self::new();

		for (key, value) in iter {
			params.insert(key, value);
		}

		params
	}
}
impl<K, V, const N: usize> From<[(K, V); N]> for Params
where
	K: Into<String>,
	V: Into<String>,
{
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

fn is_sensitive(key: &str) -> bool {
	matches!(key, "client_secret" | "password" | "refresh_token" | "code")
}
