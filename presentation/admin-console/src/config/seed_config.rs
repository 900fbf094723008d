use std::path::Path;

use anyhow::Context;

use business::domain::product::input::ProductInput;

/// Reads the start-up catalog: a JSON array of product submissions.
///
/// # Errors
/// Returns error if the file cannot be read or is not a JSON array of products
pub async fn load_seed(path: &Path) -> anyhow::Result<Vec<ProductInput>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading seed file {}", path.display()))?;
    let products = serde_json::from_str(&raw)
        .with_context(|| format!("parsing seed file {}", path.display()))?;
    Ok(products)
}
