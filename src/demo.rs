use tracing::info;

use crate::db::Database;
use crate::error::Result;
use crate::models::{ClientFilter, ClientPatch, ClientSearchRow, NewClient};

pub const DEMO_EMAIL: &str = "ivan.petrov@example.com";

/// Run the fixed walkthrough: reset the schema, then create, edit and delete
/// one client, finishing with a search that should come back empty.
///
/// Returns the rows of the final search. Stops at the first error.
pub async fn run_demo(db: &Database) -> Result<Vec<ClientSearchRow>> {
    info!("starting demo");

    db.create_db().await?;
    println!("Database schema created.");

    let client = NewClient::new("Иван", "Петров", DEMO_EMAIL)
        .with_phones(["+79001112233", "+79004445566"]);
    let client_id = db.add_client(&client).await?;
    println!("Client Иван Петров added with ID {client_id}");

    db.add_phone(client_id, "+79007778899").await?;
    println!("Phone +79007778899 added to client with ID {client_id}");

    let patch = ClientPatch::default()
        .first_name("Иванка")
        .email("ivanka@example.com")
        .phones(["+79009998877"]);
    db.change_client(client_id, &patch).await?;
    println!("Client with ID {client_id} updated.");

    db.delete_phone(client_id, "+79009998877").await?;
    println!("Phone +79009998877 removed from client with ID {client_id}.");

    db.delete_client(client_id).await?;
    println!("Client with ID {client_id} deleted.");

    let rows = db.find_client(&ClientFilter::by_email(DEMO_EMAIL)).await?;
    print_search_results(&rows);

    Ok(rows)
}

pub fn print_search_results(rows: &[ClientSearchRow]) {
    if rows.is_empty() {
        println!("Client not found.");
        return;
    }

    println!("Clients found:");
    for row in rows {
        println!("{row}");
    }
}
