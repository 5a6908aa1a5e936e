use std::path::Path;

use chrono::Local;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tokio::{fs::File, io::AsyncWriteExt};

use crate::model::Category;
use crate::{info_time, Result};

const INDENT: &[u8] = b"    ";

/// Pretty JSON with 4-space indentation. Non-ASCII characters are written as is.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Creates (or truncates) the file at `path` and writes all the categories to it.
pub async fn write_predictions(path: impl AsRef<Path>, categories: &[Category]) -> Result<()> {
    let path = path.as_ref();
    let local_now = Local::now();
    let json = to_json_string(categories)?;

    let mut file = File::create(path).await?;
    file.write_all(json.as_bytes()).await?;
    file.flush().await?;

    info_time!(local_now, "Wrote the results to file: {}", path.display());
    Ok(())
}
