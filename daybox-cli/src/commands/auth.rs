use anyhow::Result;
use owo_colors::OwoColorize;

use daybox_core::Session;

pub fn login(token: String, account: Option<String>) -> Result<()> {
    let session = Session::new(account, token);
    session.save()?;

    match &session.account {
        Some(account) => println!("{}", format!("Logged in as {}", account).green()),
        None => println!("{}", "Logged in".green()),
    }
    Ok(())
}

pub fn logout() -> Result<()> {
    Session::clear()?;
    println!("Logged out");
    Ok(())
}
