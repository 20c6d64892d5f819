#![allow(clippy::no_effect_underscore_binding)]
use rocket::{response::content::RawCss, State};

use error::Error;
use roster::Roster;
use table::MemberTable;
use templates::{PageRenderer, TemplateFairing, Webpage};

mod error;
mod roster;
mod table;
mod templates;
#[cfg(test)]
mod test_support;

#[macro_use]
extern crate rocket;

#[get("/style.css")]
async fn get_style(renderer: PageRenderer<'_>) -> RawCss<String> {
    renderer.style().await
}

#[get("/")]
async fn index(roster: &State<Roster>, mut renderer: PageRenderer<'_>) -> Result<Webpage, Error> {
    let table = MemberTable::new(roster.members());
    if table.is_empty() {
        info!("The roster is empty, rendering the header only.");
    } else {
        debug!("Rendering {} member rows.", table.len());
    }
    renderer.members(&table).await
}

#[launch]
fn rocket() -> _ {
    rocket::build()
        .attach(TemplateFairing::fairing())
        .manage(Roster::sample())
        .mount("/", routes![get_style, index])
}
