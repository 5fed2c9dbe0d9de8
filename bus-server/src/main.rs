use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bus_server::config::{DEFAULT_HOURS_AHEAD, MonitorConfig, load_routes};
use bus_server::transport::{TransportClient, TransportConfig};
use bus_server::web::{AppState, create_router};

/// Bus departure monitor API server.
#[derive(Debug, Parser)]
#[command(name = "bus-server", about = "JSON API for upcoming bus departures")]
struct Args {
    /// Route configuration file path
    #[arg(long, default_value = "config.txt")]
    config: String,

    /// Hours into the future to look for departures
    #[arg(long, default_value_t = DEFAULT_HOURS_AHEAD)]
    hours: i64,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to run the server on
    #[arg(long, default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // A server with nothing to monitor is a config problem, not a
    // degraded mode worth binding a port for.
    let routes = load_routes(&args.config);
    if routes.is_empty() {
        eprintln!(
            "No routes configured. Please check your config file: {}",
            args.config
        );
        std::process::exit(1);
    }

    let config = MonitorConfig::new(routes, args.hours);

    let transport =
        TransportClient::new(TransportConfig::new()).expect("Failed to create transport client");

    println!("Bus Departure Monitor");
    println!("Config file: {}", args.config);
    println!("Time window: {} hours ahead", config.hours_ahead);
    println!("Monitoring {} routes:", config.routes.len());
    for route in &config.routes {
        println!(
            "  Bus {}: {} -> {}",
            route.bus_number, route.departure, route.destination
        );
    }

    let state = AppState::new(transport, config);
    let app = create_router(state);

    let addr = SocketAddr::new(args.host.parse().expect("Invalid host address"), args.port);
    println!();
    println!("Listening on http://{addr}");
    println!("API Endpoints:");
    println!("  GET /api/status          - Health check");
    println!("  GET /api/bus_departures  - Upcoming departures");
    println!("  GET /api/routes          - Configured routes");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
