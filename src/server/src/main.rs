pub mod app_data;
pub mod controllers;
pub mod errors;
pub mod params;
pub mod routes;
pub mod templates;
#[cfg(test)]
pub mod test;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use env_logger::Env;

use liblinkpager::config::ServerConfig;
use liblinkpager::constants::{DEFAULT_LISTEN_ADDR, DEFAULT_PAGE_SIZE, DEFAULT_TEMPLATE_DIR};
use liblinkpager::store::EntryStore;
use liblinkpager::watcher::FileWatcher;

use crate::app_data::LinkPagerAppData;
use crate::templates::Templates;

#[derive(Parser, Debug)]
#[command(name = "linkpager-server", version)]
#[command(about = "Serves a paginated, live-reloading list of links from a text file")]
struct Cli {
    /// Filename to read `URL OWNER` lines from
    #[arg(long, env = "LINKPAGER_FILENAME")]
    filename: Option<PathBuf>,

    /// Number of links to show per page
    #[arg(long, env = "LINKPAGER_PER_PAGE", default_value_t = DEFAULT_PAGE_SIZE)]
    per_page: usize,

    /// Address to listen on
    #[arg(long, env = "LINKPAGER_LISTEN_ADDR", default_value = DEFAULT_LISTEN_ADDR)]
    listen_addr: String,

    /// Directory to load index.html and 404.html from
    #[arg(long, env = "LINKPAGER_TEMPLATE_DIR", default_value = DEFAULT_TEMPLATE_DIR)]
    template_dir: PathBuf,
}

impl Cli {
    fn into_config(self) -> ServerConfig {
        ServerConfig {
            filename: self.filename.unwrap_or_default(),
            per_page: self.per_page,
            listen_addr: self.listen_addr,
            template_dir: self.template_dir,
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Cli::parse().into_config();
    if let Err(err) = config.validate() {
        // Prints the usage and exits
        Cli::command().error(ErrorKind::InvalidValue, err).exit();
    }
    let addr = config.socket_addr().map_err(io::Error::other)?;

    let templates = Templates::load(&config.template_dir).map_err(io::Error::other)?;
    let store = EntryStore::load(&config.filename, config.per_page).map_err(io::Error::other)?;
    let store = Arc::new(store);

    let watcher = FileWatcher::new(store.source()).map_err(io::Error::other)?;
    println!("Running 🔗 server on {}", addr);
    println!("Serving links from: {}", watcher.path().display());
    let watch_handle = tokio::spawn(watcher.watch_store(store.clone()));

    let data = LinkPagerAppData::new(store, templates);
    let result = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes::config)
            .default_service(web::route().to(controllers::not_found::index))
            .wrap(Logger::default())
            .wrap(Logger::new("%a %{User-Agent}i"))
    })
    .bind(addr)?
    .run()
    .await;

    log::info!("Shutting down file watcher");
    watch_handle.abort();
    result
}
