use anyhow::Result;
use sentiscope_core::auth::Credentials;

use crate::app::App;
use crate::commands::render_error;

pub async fn run(app: &App, username: &str, password: &str) -> Result<i32> {
    let credentials = Credentials {
        username: username.to_string(),
        password: password.to_string(),
    };

    match app.account.login(&credentials).await {
        Ok(session) => {
            println!("Welcome, {}.", session.username);
            Ok(0)
        }
        Err(err) => Ok(render_error(err)),
    }
}
