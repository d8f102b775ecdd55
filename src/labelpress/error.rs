use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("Failed to load catalog: {0}")]
    CatalogLoad(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Document assembly error: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, LabelError>;
