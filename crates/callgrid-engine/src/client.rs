//! Client directory lookup.

use crate::booking::Client;

/// Clients whose name or phone contains `term`, ignoring case.
/// A blank term matches everyone.
pub fn search_clients(clients: Vec<Client>, term: &str) -> Vec<Client> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return clients;
    }
    clients
        .into_iter()
        .filter(|c| c.name.to_lowercase().contains(&term) || c.phone.to_lowercase().contains(&term))
        .collect()
}
