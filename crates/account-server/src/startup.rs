//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
    ___                                  __     ___    ____  ____
   /   |  _________ ____  __  ______   / /_   /   |  / __ \/  _/
  / /| | / ___/ __// __ \/ / / / __ \ / __/  / /| | / /_/ // /
 / ___ |/ /__/ /__/ /_/ / /_/ / / / // /_   / ___ |/ ____// /
/_/  |_|\___/\___/\____/\__,_/_/ /_/ \__/  /_/  |_/_/   /___/
    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(port: u16) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://0.0.0.0:{}", port);
    info!("Health:    http://0.0.0.0:{}/health", port);
    info!("API Docs:  http://0.0.0.0:{}/swagger-ui", port);
    info!("{}", separator);
}
