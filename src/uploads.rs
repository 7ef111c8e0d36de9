use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse};
use anyhow::anyhow;
use chrono::Utc;
use futures_util::TryStreamExt;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};
use crate::settings::Settings;

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub files: Vec<String>,
}

// Unix milliseconds plus the original extension; same-millisecond uploads
// with one extension collide.
pub fn stored_file_name(original: &str, millis: i64) -> String {
    match Path::new(original).extension() {
        Some(ext) => format!("{}.{}", millis, ext.to_string_lossy()),
        None => millis.to_string(),
    }
}

pub fn ensure_uploads_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)
}

#[post("/upload")]
pub async fn upload(settings: web::Data<Settings>, mut payload: Multipart) -> Result<HttpResponse> {
    let mut files = Vec::new();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| anyhow!("Failed to read multipart field: {}", e))?
    {
        let original = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(|name| name.to_string());

        let Some(original) = original else {
            while field
                .try_next()
                .await
                .map_err(|e| anyhow!("Failed to read multipart field: {}", e))?
                .is_some()
            {}
            continue;
        };

        let name = stored_file_name(&original, Utc::now().timestamp_millis());
        let target: PathBuf = Path::new(&settings.uploads_dir).join(&name);

        let path = target.clone();
        let mut file = web::block(move || File::create(path)).await??;
        let mut written = 0usize;

        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| anyhow!("Failed to read upload {}: {}", original, e))?
        {
            written += chunk.len();
            if written > settings.max_upload_bytes {
                drop(file);
                let path = target.clone();
                if let Err(e) = web::block(move || std::fs::remove_file(path)).await? {
                    log::warn!("Failed to remove partial upload {}: {}", name, e);
                }
                return Err(ApiError::UploadTooLarge(settings.max_upload_bytes));
            }
            file = web::block(move || {
                let mut file = file;
                file.write_all(&chunk)?;
                Ok::<_, std::io::Error>(file)
            })
            .await??;
        }

        log::info!("Stored upload {} as {} ({} bytes)", original, name, written);
        files.push(format!("/uploads/{}", name));
    }

    Ok(HttpResponse::Ok().json(UploadResponse {
        success: true,
        files,
    }))
}
