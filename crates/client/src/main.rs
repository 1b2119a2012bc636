//! Terminal shell over the client: restores the saved session (or signs in
//! with credentials from the environment) and prints what the signed-in role
//! can see.

use anyhow::Result;
use ecoobra_client::{tecnicos_for_session, ApiClient, ApiConfig};
use ecoobra_routing::{home_view, visible_items};
use ecoobra_session::{FileStorage, SessionStore, UserProfile};

#[tokio::main]
async fn main() -> Result<()> {
    ecoobra_observability::init();

    let config = ApiConfig::from_env();
    let storage = FileStorage::open_default()?;
    let mut session = SessionStore::new(storage);
    session.restore();

    let client = if session.is_logged_in() {
        tracing::info!("resuming saved session");
        match session.token() {
            Some(token) => ApiClient::with_token(config, token),
            None => ApiClient::new(config),
        }
    } else {
        let (email, password) = match (
            std::env::var("ECOOBRA_EMAIL"),
            std::env::var("ECOOBRA_PASSWORD"),
        ) {
            (Ok(email), Ok(password)) => (email, password),
            _ => {
                println!("No saved session. Set ECOOBRA_EMAIL and ECOOBRA_PASSWORD to sign in.");
                return Ok(());
            }
        };

        let mut client = ApiClient::new(config);
        let resp = client.login(&email, &password).await?;
        client.set_token(resp.token.clone());
        session.login(UserProfile::new(resp.email, resp.rol), resp.token);
        client
    };

    let role = match session.role() {
        Some(role) => role.clone(),
        None => {
            println!("Signed in without a role; nothing to show.");
            return Ok(());
        }
    };
    let email = session.user().map(|u| u.email.clone()).unwrap_or_default();

    println!("Signed in as {email} ({role})");
    println!("Home view: {:?}", home_view(true, Some(&role)));
    println!("Menu:");
    for item in visible_items(&role) {
        println!("  {} -> {}", item.label, item.path);
    }

    let tecnicos = tecnicos_for_session(&role, &email, client.list_tecnicos().await?);
    println!("Technicians available to this session:");
    for t in &tecnicos {
        println!("  #{} {}", t.id, t.nombre);
    }

    Ok(())
}
