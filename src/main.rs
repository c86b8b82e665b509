use std::convert::Infallible;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use hunger_locator::client::{
    FixedGeolocator, Geolocator, HttpSearchApi, NoGeolocation, ResultsView, SearchApi,
    SearchClient,
};
use hunger_locator::config::Config;
use hunger_locator::locator::Coordinate;
use hunger_locator::map::{HeadlessSurface, MapPanel, MapSurface, SelectionLink};
use hunger_locator::proxy::{init_tracing, ProxyServer};

#[derive(Parser)]
#[command(name = "hunger-locator", version, about = "Emergency food locator")]
struct Cli {
    /// Config file (default: ~/.config/hunger-locator/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the search endpoint
    Serve {
        /// Override the bind address (host:port)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Search around a position through a running server
    Locate {
        /// Latitude of the device position; omit both to simulate no geolocation
        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude of the device position
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,
        /// Base URL of the locator server
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        server: String,
        /// Select the n-th result (1-based) after the search
        #[arg(long)]
        select: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .with_context(|| {
        let path = cli.config.clone().unwrap_or_else(Config::config_path);
        format!("loading {}", path.display())
    })?
    .with_env_overrides();

    match cli.command {
        Command::Serve { bind } => serve(config, bind).await,
        Command::Locate {
            lat,
            lng,
            server,
            select,
        } => {
            let api = HttpSearchApi::new(&server);
            match (lat, lng) {
                (Some(lat), Some(lng)) => {
                    let position = Coordinate::new(lat, lng).context("invalid position")?;
                    locate(&config, FixedGeolocator::new(position), api, select).await
                }
                _ => locate(&config, NoGeolocation, api, select).await,
            }
        }
    }
}

async fn serve(mut config: Config, bind: Option<String>) -> Result<()> {
    if let Some(bind) = bind {
        config.server.bind_addr = bind;
    }
    config.validate()?;

    let mut server = ProxyServer::new(&config)?;
    server.try_bind().await?;
    server.run().await?;
    Ok(())
}

async fn locate<G, A>(config: &Config, geolocator: G, api: A, select: Option<usize>) -> Result<()>
where
    G: Geolocator,
    A: SearchApi,
{
    let client = SearchClient::new(geolocator, api);
    let mut panel = MapPanel::mount(&config.map, |_| Ok::<_, Infallible>(HeadlessSurface::new()));
    let mut link = SelectionLink::new(&client);

    client.locate_me().await;
    let state = client.snapshot();

    if let Some(index) = select {
        if let Some(id) = state.places.get(index.saturating_sub(1)).and_then(|p| p.id.clone()) {
            client.select(id);
        }
    }
    let selection = client.selection();

    print_results(&ResultsView::from_state(&state, &selection));

    match &mut panel {
        MapPanel::Live(map) => {
            link.step(map, &client).await;
            map.settled().await;
            if selection.selected().is_some() {
                link.step(map, &client).await;
            }
            let camera = map.surface().lock().camera();
            println!(
                "Map: center {:.5}, {:.5} zoom {}",
                camera.center.lat, camera.center.lng, camera.zoom
            );
        }
        MapPanel::SetupRequired(notice) | MapPanel::LoadFailed(notice) => {
            println!("Map: {} - {}", notice.title, notice.hint);
        }
    }

    Ok(())
}

fn print_results(view: &ResultsView) {
    if let Some(error) = &view.error {
        println!("Error: {}", error);
    }
    if let Some(hint) = view.empty_hint {
        println!("{}", hint);
    }
    if let Some(header) = &view.header {
        println!("{}", header);
    }
    for (i, card) in view.cards.iter().enumerate() {
        let marker = if card.selected { '*' } else { ' ' };
        println!("{}{:>2}. {}", marker, i + 1, card.name);
        println!("     {}", card.address);
        let mut details = Vec::new();
        if let Some(badge) = card.open_badge {
            details.push(badge.to_string());
        }
        if let Some(rating) = &card.rating_line {
            details.push(format!("rated {}", rating));
        }
        if !details.is_empty() {
            println!("     {}", details.join(" | "));
        }
        if let Some(uri) = &card.directions_uri {
            println!("     {}", uri);
        }
    }
}
