use crate::api::models::Reciter;
use once_cell::sync::Lazy;

pub const API_BASE_URL: &str = "https://api.alquran.cloud/v1";

/// Verse-by-verse audio editions offered in the sidebar. The catalog API
/// lists dozens more, but these cover the recitations people actually ask
/// for and all of them stream reliably from the islamic.network CDN.
pub static POPULAR_RECITERS: Lazy<Vec<Reciter>> = Lazy::new(|| {
    vec![
        Reciter::verse_by_verse("ar.alafasy", "مشاري العفاسي", "Mishary Rashid Alafasy"),
        Reciter::verse_by_verse(
            "ar.abdulbasitmurattal",
            "عبد الباسط عبد الصمد (مرتل)",
            "Abdul Basit (Murattal)",
        ),
        Reciter::verse_by_verse("ar.sudais", "عبد الرحمن السديس", "Abdurrahmaan As-Sudais"),
        Reciter::verse_by_verse("ar.hudhaify", "علي الحذيفي", "Ali Al-Hudhaify"),
        Reciter::verse_by_verse("ar.mahermuaiqly", "ماهر المعيقلي", "Maher Al Muaiqly"),
        Reciter::verse_by_verse("ar.minshawi", "محمد صديق المنشاوي", "Mohamed Siddiq Al-Minshawi"),
    ]
});

pub const BACKGROUND_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1519817650390-64a93db51149?q=80&w=1000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1537420327992-d6e192287183?q=80&w=1000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1506744038136-46273834b3fb?q=80&w=1000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1542259681-d4cd4a317730?q=80&w=1000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1465146344425-f00d5f5c8f07?q=80&w=1000&auto=format&fit=crop",
];

pub const BACKGROUND_VIDEOS: &[&str] = &[
    "https://assets.mixkit.co/videos/preview/mixkit-stars-in-space-1610-large.mp4",
    "https://assets.mixkit.co/videos/preview/mixkit-clouds-and-blue-sky-2408-large.mp4",
    "https://assets.mixkit.co/videos/preview/mixkit-forest-stream-in-the-sunlight-529-large.mp4",
    "https://assets.mixkit.co/videos/preview/mixkit-waves-coming-to-the-beach-5016-large.mp4",
];

pub const BACKGROUND_COLORS: &[&str] = &[
    "#111827", // Gray 900
    "#064e3b", // Emerald 900
    "#1e3a8a", // Blue 900
    "#312e81", // Indigo 900
    "#4c1d95", // Violet 900
    "#831843", // Pink 900
    "#000000", // Black
];

pub const TEXT_COLORS: &[&str] = &["#ffffff", "#fcd34d", "#34d399", "#000000"];
