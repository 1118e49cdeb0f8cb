use anyhow::Result;

use crate::app::App;

pub async fn run(app: &App) -> Result<i32> {
    let session = app.session_store.restore().await;
    if session.authenticated {
        println!("Logged in as {}.", session.username);
    } else {
        println!("Not logged in.");
    }
    Ok(0)
}
