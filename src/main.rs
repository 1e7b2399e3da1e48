#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use landing_enhancer::app::*;
    use landing_enhancer::core::config::Config;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use tracing_subscriber::EnvFilter;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Load server config from environment variables
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(config.log_filter()).unwrap_or_else(|err| {
            eprintln!("invalid log filter {:?}: {err}", config.log_filter());
            EnvFilter::new("info")
        }))
        .init();

    tracing::info!(gtm = config.has_gtm(), "config loaded");
    if config.gtm_container_id.is_some() && !config.has_gtm() {
        tracing::warn!("GTM_CONTAINER_ID is not of the form GTM-XXXX, Tag Manager disabled");
    }

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let gtm = config.gtm_container_id().map(str::to_string);

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Serves .br (brotli) and .gz (gzip) files automatically
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let app = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone(), gtm.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(error_shell))
        .with_state(leptos_options)
        // Compresses responses, Brotli first
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    tracing::info!("listening on http://{}", &addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Shell for static file misses and error pages, rendered without Tag Manager
#[cfg(feature = "ssr")]
fn error_shell(options: leptos::prelude::LeptosOptions) -> impl leptos::prelude::IntoView {
    landing_enhancer::app::shell(options, None)
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
