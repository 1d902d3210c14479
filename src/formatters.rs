use crate::models::CityName;

/// Formats the summary file body: the summary text followed by the
/// temperature trailer.
pub fn format_city_summary(summary: &str, city: &CityName, temperature: f64) -> String {
    format!(
        "{} \n \n{}",
        summary,
        format_temperature_sentence(city, temperature)
    )
}

/// Formats the single sentence describing the current temperature
pub fn format_temperature_sentence(city: &CityName, temperature: f64) -> String {
    format!(
        "Current temperature in {} is {} degrees Celsius.",
        city, temperature
    )
}

/// Maps a city name to its summary file name: lowercased, with spaces and
/// path separators replaced by underscores.
pub fn summary_file_name(city: &CityName) -> String {
    let stem: String = city
        .as_str()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    format!("{}.txt", stem)
}
