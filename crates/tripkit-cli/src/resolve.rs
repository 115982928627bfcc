//! Maps link resolution command handler.

use std::sync::Arc;

use tripkit_core::{AppConfig, ResolvedPlace};
use tripkit_places::PlacesClient;
use tripkit_resolver::PlaceResolver;

/// Resolve a shared maps link and print the resulting place.
///
/// # Errors
///
/// Returns an error if the link is blank, the API key is missing, the client
/// cannot be built, or every resolution strategy fails.
pub(crate) async fn run_resolve(
    config: &AppConfig,
    link: &str,
    as_json: bool,
) -> anyhow::Result<()> {
    let link = link.trim();
    if link.is_empty() {
        anyhow::bail!("link must not be empty");
    }

    let api_key = config
        .places_api_key
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("GOOGLE_PLACES_API_KEY is not set; cannot resolve links"))?;

    let client = match config.places_base_url.as_deref() {
        Some(base_url) => PlacesClient::with_base_url(
            api_key,
            config.http_timeout_secs,
            &config.http_user_agent,
            base_url,
        ),
        None => PlacesClient::new(api_key, config.http_timeout_secs, &config.http_user_agent),
    }
    .map_err(|e| anyhow::anyhow!("failed to build Places client: {e}"))?;

    let resolver = PlaceResolver::new(Arc::new(client));
    let place = resolver.resolve(link).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&place)?);
        return Ok(());
    }

    print_place(&place);
    Ok(())
}

fn print_place(place: &ResolvedPlace) {
    let address = if place.full_address.is_empty() {
        "\u{2014}"
    } else {
        place.full_address.as_str()
    };

    println!("Name:     {}", place.name);
    println!("Location: {}", place.location);
    println!("Address:  {address}");
    println!("Category: {}", place.category);
    if let Some(ref place_id) = place.place_id {
        println!("Place ID: {place_id}");
    }
}
