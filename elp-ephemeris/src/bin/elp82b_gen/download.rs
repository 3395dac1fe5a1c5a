use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use reqwest::blocking::Client;

use elp_ephemeris::tables::{file_name, TABLE_COUNT};

const BASE_URL: &str = "http://cyrano-se.obspm.fr/pub/2_lunar_solutions/1_elp82b";

pub fn file_url(base_url: &str, filename: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), filename)
}

/// `ELP1` .. `ELP36`.
pub fn data_files() -> Vec<String> {
    (1..=TABLE_COUNT).map(file_name).collect()
}

pub fn default_client() -> Result<Client, String> {
    Client::builder()
        .timeout(std::time::Duration::from_secs(120))
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {}", e))
}

pub fn download_file_with_client(
    client: &Client,
    url: &str,
    filename: &str,
    output_dir: &Path,
) -> Result<(), String> {
    let output_path = output_dir.join(filename);

    if output_path.exists() {
        println!("  {} already exists, skipping", filename);
        return Ok(());
    }

    println!("  Downloading {} ...", url);

    let response = client
        .get(url)
        .send()
        .map_err(|e| format!("Failed to fetch {}: {}", url, e))?;

    if !response.status().is_success() {
        return Err(format!("HTTP error {} for {}", response.status(), url));
    }

    let bytes = response
        .bytes()
        .map_err(|e| format!("Failed to read response: {}", e))?;

    // Written beside the target and renamed, so an interrupted write never
    // leaves a file that later runs would skip.
    let partial_path = output_dir.join(format!("{}.part", filename));
    let mut file = File::create(&partial_path)
        .map_err(|e| format!("Failed to create {}: {}", partial_path.display(), e))?;

    if let Err(e) = file.write_all(&bytes).and_then(|_| file.sync_all()) {
        let _ = fs::remove_file(&partial_path);
        return Err(format!("Failed to write {}: {}", partial_path.display(), e));
    }
    drop(file);

    fs::rename(&partial_path, &output_path).map_err(|e| {
        format!(
            "Failed to move {} to {}: {}",
            partial_path.display(),
            output_path.display(),
            e
        )
    })?;

    println!("  Saved {} ({} bytes)", filename, bytes.len());
    Ok(())
}

/// Fetches every table from `base_url` into `output_dir`.
pub fn download_all_from(client: &Client, base_url: &str, output_dir: &Path) -> Result<(), String> {
    fs::create_dir_all(output_dir)
        .map_err(|e| format!("Failed to create output directory: {}", e))?;

    println!("Downloading ELP2000-82B tables to {}", output_dir.display());

    for filename in data_files() {
        let url = file_url(base_url, &filename);
        download_file_with_client(client, &url, &filename, output_dir)?;
    }

    println!("Download complete!");
    Ok(())
}

pub fn download_all(client: &Client, output_dir: &Path) -> Result<(), String> {
    download_all_from(client, BASE_URL, output_dir)
}
