use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Run the causelist upload server")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "CAUSELIST_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Directory where uploads are stored while they are processed
    #[arg(long, env = "CAUSELIST_UPLOADS_DIR", default_value = "Uploads")]
    pub uploads_dir: PathBuf,

    /// Largest accepted request body, in bytes
    #[arg(long, env = "CAUSELIST_MAX_UPLOAD_BYTES", default_value = "52428800")]
    pub max_upload_bytes: usize,

    /// Characters of the document echoed back in the upload response
    #[arg(long, default_value_t = causelist_core::upload::UPLOAD_PREVIEW_LEN)]
    pub preview_len: usize,
}
