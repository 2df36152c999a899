use serde::{Deserialize, Deserializer, Serialize};

/// One chapter of the Quran as listed by the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Surah {
    pub number: u32,
    pub name: String,
    #[serde(default, alias = "englishName")]
    pub english_name: String,
    #[serde(default, alias = "englishNameTranslation")]
    pub english_name_translation: String,
    #[serde(default, alias = "numberOfAyahs")]
    pub number_of_ayahs: u32,
    #[serde(default, alias = "revelationType")]
    pub revelation_type: String,
}

impl Surah {
    /// Label shown in the chapter selector, e.g. `2. البقرة (Al-Baqara)`.
    pub fn select_label(&self) -> String {
        format!("{}. {} ({})", self.number, self.name, self.english_name)
    }
}

/// One verse, carrying its display text and (after the merge step) the audio
/// URL recorded by the selected reciter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Ayah {
    pub number: u32,
    #[serde(default)]
    pub text: String,
    #[serde(default, alias = "numberInSurah")]
    pub number_in_surah: u32,
    #[serde(default)]
    pub juz: u32,
    #[serde(default)]
    pub manzil: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub ruku: u32,
    #[serde(default, alias = "hizbQuarter")]
    pub hizb_quarter: u32,
    // The API sends `false` or a detail object here, never `true`.
    #[serde(default, deserialize_with = "sajda_flag")]
    pub sajda: bool,
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default, alias = "audioSecondary")]
    pub audio_secondary: Vec<String>,
}

fn sajda_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(flag) => flag,
        serde_json::Value::Object(_) => true,
        _ => false,
    })
}

/// A narrator whose verse-by-verse recording backs the reel audio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reciter {
    pub identifier: String,
    pub name: String,
    #[serde(default, alias = "englishName")]
    pub english_name: String,
    #[serde(default)]
    pub format: String,
    #[serde(default, alias = "type")]
    pub style: String,
}

impl Reciter {
    pub fn verse_by_verse(identifier: &str, name: &str, english_name: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            name: name.to_string(),
            english_name: english_name.to_string(),
            format: "audio".to_string(),
            style: "versebyverse".to_string(),
        }
    }
}
