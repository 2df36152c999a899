use crate::api::models::*;
use crate::constants::API_BASE_URL;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Edition used for the display text of every reel, regardless of reciter.
const TEXT_EDITION: &str = "quran-uthmani";

/// Thin client for the alquran.cloud REST API.
///
/// The API is unauthenticated; every endpoint answers with a
/// `{ code, status, data }` envelope where `data` is a string on errors, so
/// payloads are lifted out of a `serde_json::Value` after the code check.
pub struct QuranClient {
    pub base_url: String,
}

impl Default for QuranClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QuranClient {
    pub fn new() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Chapter catalog: number, names, and verse counts for all 114 surahs.
    pub async fn get_surahs(&self) -> Result<Vec<Surah>, String> {
        let url = self.endpoint("surah");
        let response = HTTP_CLIENT
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let envelope: ApiEnvelope = response.json().await.map_err(|e| e.to_string())?;
        envelope.take::<Vec<Surah>>()
    }

    /// All verses of one chapter under one edition. A text edition fills
    /// `text`, an audio edition fills `audio` (and leaves `text` in the
    /// reciter's script, which the merge step discards).
    pub async fn get_surah_edition(
        &self,
        surah_number: u32,
        edition: &str,
    ) -> Result<Vec<Ayah>, String> {
        let url = self.endpoint(&format!("surah/{}/{}", surah_number, edition));
        let response = HTTP_CLIENT
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let envelope: ApiEnvelope = response.json().await.map_err(|e| e.to_string())?;
        let payload = envelope.take::<SurahEditionPayload>()?;
        Ok(payload.ayahs)
    }

    /// Text and audio for one chapter, merged by verse position and sliced
    /// to the inclusive `[start, end]` range.
    ///
    /// Both edition fetches must succeed; a failure in either surfaces as
    /// `Err` so callers fall back to an empty list instead of showing verses
    /// paired with the wrong reciter.
    pub async fn fetch_verse_range(
        &self,
        surah_number: u32,
        start: u32,
        end: u32,
        reciter_identifier: &str,
    ) -> Result<Vec<Ayah>, String> {
        let text = self.get_surah_edition(surah_number, TEXT_EDITION).await?;
        let audio = self
            .get_surah_edition(surah_number, reciter_identifier)
            .await?;
        Ok(merge_verse_range(text, audio, start, end))
    }
}

/// Pair each text verse with the audio URL at the same list position, then
/// keep only verses whose in-chapter number falls inside `[start, end]`.
///
/// Either input being empty yields an empty result: a reel must never mix a
/// present text edition with an absent audio edition (or vice versa).
pub fn merge_verse_range(text: Vec<Ayah>, audio: Vec<Ayah>, start: u32, end: u32) -> Vec<Ayah> {
    if text.is_empty() || audio.is_empty() {
        return Vec::new();
    }

    text.into_iter()
        .enumerate()
        .map(|(index, mut ayah)| {
            ayah.audio = audio.get(index).and_then(|a| a.audio.clone());
            ayah
        })
        .filter(|ayah| ayah.number_in_surah >= start && ayah.number_in_surah <= end)
        .collect()
}

#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    #[serde(default)]
    code: u32,
    #[serde(default)]
    status: String,
    #[serde(default)]
    data: serde_json::Value,
}

impl ApiEnvelope {
    fn take<T: DeserializeOwned>(self) -> Result<T, String> {
        if self.code != 200 {
            return Err(if self.status.is_empty() {
                format!("request failed with code {}", self.code)
            } else {
                self.status
            });
        }
        serde_json::from_value(self.data).map_err(|e| e.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct SurahEditionPayload {
    #[serde(default)]
    ayahs: Vec<Ayah>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse(position: u32, text: &str) -> Ayah {
        Ayah {
            number: 200 + position,
            text: text.to_string(),
            number_in_surah: position,
            ..Default::default()
        }
    }

    fn narration(position: u32, url: &str) -> Ayah {
        Ayah {
            number: 200 + position,
            number_in_surah: position,
            audio: Some(url.to_string()),
            ..Default::default()
        }
    }

    fn chapter(len: u32) -> (Vec<Ayah>, Vec<Ayah>) {
        let text = (1..=len).map(|n| verse(n, &format!("آية {n}"))).collect();
        let audio = (1..=len)
            .map(|n| narration(n, &format!("https://cdn.example/{n}.mp3")))
            .collect();
        (text, audio)
    }

    #[test]
    fn merge_slices_to_inclusive_range() {
        let (text, audio) = chapter(7);
        let merged = merge_verse_range(text, audio, 2, 4);

        assert_eq!(merged.len(), 3);
        let positions: Vec<u32> = merged.iter().map(|a| a.number_in_surah).collect();
        assert_eq!(positions, vec![2, 3, 4]);
        for ayah in &merged {
            let expected = format!("https://cdn.example/{}.mp3", ayah.number_in_surah);
            assert_eq!(ayah.audio.as_deref(), Some(expected.as_str()));
        }
    }

    #[test]
    fn merge_keeps_text_and_audio_from_matching_positions() {
        let (text, audio) = chapter(5);
        let merged = merge_verse_range(text, audio, 1, 5);

        assert_eq!(merged.len(), 5);
        for (index, ayah) in merged.iter().enumerate() {
            assert_eq!(ayah.number_in_surah as usize, index + 1);
            assert_eq!(ayah.text, format!("آية {}", index + 1));
        }
    }

    #[test]
    fn merge_with_either_list_empty_is_empty() {
        let (text, audio) = chapter(3);
        assert!(merge_verse_range(Vec::new(), audio.clone(), 1, 3).is_empty());
        assert!(merge_verse_range(text, Vec::new(), 1, 3).is_empty());
        assert!(merge_verse_range(Vec::new(), Vec::new(), 1, 3).is_empty());
    }

    #[test]
    fn merge_tolerates_short_audio_edition() {
        let (text, mut audio) = chapter(4);
        audio.truncate(2);
        let merged = merge_verse_range(text, audio, 1, 4);

        assert_eq!(merged.len(), 4);
        assert!(merged[0].audio.is_some());
        assert!(merged[1].audio.is_some());
        assert!(merged[2].audio.is_none());
        assert!(merged[3].audio.is_none());
    }

    #[test]
    fn merge_with_range_outside_chapter_is_empty() {
        let (text, audio) = chapter(3);
        assert!(merge_verse_range(text, audio, 9, 12).is_empty());
    }

    #[test]
    fn envelope_rejects_error_payloads() {
        let raw = r#"{ "code": 404, "status": "Surah not found", "data": "Something went wrong" }"#;
        let envelope: ApiEnvelope = serde_json::from_str(raw).unwrap();
        let result = envelope.take::<Vec<Surah>>();
        assert_eq!(result.unwrap_err(), "Surah not found");
    }

    #[test]
    fn envelope_extracts_catalog_payload() {
        let raw = r#"{
            "code": 200,
            "status": "OK",
            "data": [{
                "number": 1,
                "name": "سورة الفاتحة",
                "englishName": "Al-Faatiha",
                "englishNameTranslation": "The Opening",
                "numberOfAyahs": 7,
                "revelationType": "Meccan"
            }]
        }"#;
        let envelope: ApiEnvelope = serde_json::from_str(raw).unwrap();
        let surahs = envelope.take::<Vec<Surah>>().unwrap();

        assert_eq!(surahs.len(), 1);
        assert_eq!(surahs[0].number, 1);
        assert_eq!(surahs[0].number_of_ayahs, 7);
        assert_eq!(surahs[0].english_name, "Al-Faatiha");
        assert_eq!(surahs[0].select_label(), "1. سورة الفاتحة (Al-Faatiha)");
    }

    #[test]
    fn edition_payload_parses_sajda_variants() {
        let raw = r#"{
            "code": 200,
            "status": "OK",
            "data": {
                "ayahs": [
                    { "number": 5906, "text": "...", "numberInSurah": 19, "sajda": { "id": 14, "recommended": false, "obligatory": true } },
                    { "number": 5907, "text": "...", "numberInSurah": 20, "sajda": false }
                ]
            }
        }"#;
        let envelope: ApiEnvelope = serde_json::from_str(raw).unwrap();
        let payload = envelope.take::<SurahEditionPayload>().unwrap();

        assert!(payload.ayahs[0].sajda);
        assert!(!payload.ayahs[1].sajda);
    }
}
