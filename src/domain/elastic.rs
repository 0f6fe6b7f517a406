use url::Url;

use crate::domain::{AppError, ConfigMap, require_scalar};

/// Build the Elasticsearch endpoint from the `elasticsearch_config` bundle.
///
/// `url` is required; when both `username` and `password` are present they
/// are embedded into the URL authority.
pub fn elastic_url(bundle: &ConfigMap) -> Result<String, AppError> {
    let raw = require_scalar(bundle, "url")?;
    let credentials = match (bundle.get("username"), bundle.get("password")) {
        (Some(_), Some(_)) => {
            Some((require_scalar(bundle, "username")?, require_scalar(bundle, "password")?))
        }
        _ => None,
    };

    let Some((username, password)) = credentials else {
        return Ok(raw);
    };

    let mut url = Url::parse(&raw)
        .map_err(|e| AppError::InvalidUrl { url: raw.clone(), details: e.to_string() })?;
    url.set_username(&username)
        .and_then(|_| url.set_password(Some(&password)))
        .map_err(|_| AppError::InvalidUrl {
            url: raw.clone(),
            details: "URL cannot carry credentials".to_string(),
        })?;

    Ok(url.as_str().trim_end_matches('/').to_string())
}
