use tracing::info;

use super::config::UploadConfig;

/// One-shot boot hook for the host application: installs the log subscriber,
/// loads `.env` outside deployed environments, and reads the upload limits.
pub fn app_init_proc() -> anyhow::Result<UploadConfig> {
    tracing_subscriber::fmt().init();
    if std::env::var("IS_DEPLOYED").is_err() {
        dotenvy::dotenv()?;
    }

    let upload_config = UploadConfig::from_env()?;
    info!(
        "Multipart limits: {} byte files, {} byte requests",
        upload_config.max_file_size_bytes(),
        upload_config.max_request_size_bytes()
    );
    info!("Backend core initialized.");

    Ok(upload_config)
}
