use clap::Parser;
use tracing::info;
use book_inventory::core::library::LibraryError;
use book_inventory::mockapi::router::create_router;
use book_inventory::mockapi::store::{sample_books, BookStore};
use book_inventory::utils::logs::setup_tracing;

// Local stand-in for the hosted books API, e.g. `inventory --base-url http://127.0.0.1:3000/books`.
#[derive(Parser)]
#[command(name = "mockapi")]
#[command(about = "Serve an in-memory /books REST collection", long_about = None)]
struct Args {
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Preload the sample catalog
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    setup_tracing(tracing::Level::INFO, false);
    let args = Args::parse();

    let store = if args.seed {
        BookStore::with_books(sample_books())
    } else {
        BookStore::new()
    };

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", args.port)).await?;
    info!("serving books on http://{}/books", listener.local_addr()?);
    axum::serve(listener, create_router(store)).await?;
    Ok(())
}
