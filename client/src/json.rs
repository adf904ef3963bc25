//! JSON decoding for backend bodies.

use serde::de::DeserializeOwned;

/// Decode `body` as JSON with no nesting limit.
///
/// serde_json stops at 128 levels by default; result documents may nest
/// deeper. Depth is bounded only by the stack of the calling thread.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    deserializer.disable_recursion_limit();
    let value = T::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}
