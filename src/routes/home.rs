use std::path::Path;

use actix_files::NamedFile;
use actix_web::web;

use crate::configuration::StaticFilesSettings;

pub async fn home(static_files: web::Data<StaticFilesSettings>) -> actix_web::Result<NamedFile> {
    let index = Path::new(&static_files.root).join("index.html");
    Ok(NamedFile::open_async(index).await?)
}
