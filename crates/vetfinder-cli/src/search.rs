//! `search` command handler.

use vetfinder_core::{AppConfig, ClinicRecord, SearchResult};
use vetfinder_places::PlacesClient;

/// Runs one clinic discovery and prints the ranked result.
///
/// # Errors
///
/// Returns an error if the Places client cannot be built, the credential is
/// missing, the input is rejected, or the upstream search fails.
pub(crate) async fn run_search(
    config: &AppConfig,
    zip_code: &str,
    radius_miles: Option<f64>,
    json: bool,
) -> anyhow::Result<()> {
    let client = PlacesClient::with_base_url(
        config.places_timeout_secs,
        config.places_connect_timeout_secs,
        &config.user_agent,
        &config.places_base_url,
    )?;

    let result = vetfinder_discovery::discover(
        &client,
        config.google_api_key.as_deref(),
        zip_code,
        radius_miles,
    )
    .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_table(zip_code, &result));
    }
    Ok(())
}

fn render_table(zip_code: &str, result: &SearchResult) -> String {
    let Some(best) = result.recommended.as_ref() else {
        return format!("no open emergency vet clinics found near {zip_code}\n");
    };

    let rows: String = result
        .records
        .iter()
        .enumerate()
        .map(|(idx, clinic)| table_row(idx + 1, clinic))
        .collect();
    format!(
        "recommended: {} ({})\n\n{:<4}{:<36}{:<8}{:<20}ADDRESS\n{rows}",
        best.name, best.address, "#", "NAME", "RATING", "PHONE"
    )
}

fn table_row(position: usize, clinic: &ClinicRecord) -> String {
    let rating = clinic
        .rating
        .map_or_else(|| "-".to_owned(), |r| format!("{r:.1}"));
    format!(
        "{:<4}{:<36}{:<8}{:<20}{}\n",
        position,
        clinic.name,
        rating,
        clinic.phone.as_deref().unwrap_or("-"),
        clinic.address
    )
}
