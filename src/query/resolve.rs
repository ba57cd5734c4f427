use crate::model::Client;

/// Display name for a case whose client id resolves to nothing.
pub const UNKNOWN_CLIENT: &str = "Unknown Client";

/// Name of the client with `client_id`, or [`UNKNOWN_CLIENT`].
///
/// A client with an empty name also resolves to the fallback.
pub fn resolve_client_name<'a>(clients: &'a [Client], client_id: &str) -> &'a str {
    clients
        .iter()
        .find(|client| client.id == client_id)
        .map(|client| client.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_CLIENT)
}

/// First letter of every word, e.g. "Acme Corp" -> "AC".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}
