use actix_files::{Files, NamedFile};
use actix_web::web;
use std::path::{Path, PathBuf};

/// Directory holding the built frontend
#[derive(Debug, Clone)]
pub struct StaticRoot(pub PathBuf);

/// Serves `index.html` for the page and any path the other services don't match.
pub async fn index(root: web::Data<StaticRoot>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open(root.0.join("index.html"))?)
}

pub fn configure(cfg: &mut web::ServiceConfig, root: &Path) {
    cfg.app_data(web::Data::new(StaticRoot(root.to_path_buf())))
        .service(Files::new("/pkg", root.join("pkg")))
        .service(Files::new("/assets", root.join("assets")))
        .route("/", web::get().to(index));
}
