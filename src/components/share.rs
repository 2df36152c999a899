use crate::components::transport::show_alert;
use crate::components::Icon;
use crate::config::ReelConfig;
use dioxus::prelude::*;

/// Landing page for shared reels. Export is a stub, so every reel shares the
/// same demo link.
pub const SHARE_LINK: &str = "https://quran-reels.app/share/demo";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    Facebook,
    Twitter,
    Whatsapp,
}

/// Caption attached to the shared link.
pub fn share_text(surah_name: &str) -> String {
    format!("شاهد هذا الفيديو القرآني الرائع لسورة {surah_name}")
}

/// Web intent URL for one platform. TikTok has no web intent, so it is
/// handled as a copy-and-paste hint instead of appearing here.
pub fn share_intent_url(platform: SharePlatform, surah_name: &str) -> String {
    let text = share_text(surah_name);
    match platform {
        SharePlatform::Facebook => format!(
            "https://www.facebook.com/sharer/sharer.php?u={}",
            urlencoding::encode(SHARE_LINK)
        ),
        SharePlatform::Twitter => format!(
            "https://twitter.com/intent/tweet?text={}&url={}",
            urlencoding::encode(&text),
            urlencoding::encode(SHARE_LINK)
        ),
        SharePlatform::Whatsapp => format!(
            "https://wa.me/?text={}",
            urlencoding::encode(&format!("{text} {SHARE_LINK}"))
        ),
    }
}

#[cfg(target_arch = "wasm32")]
fn open_share_popup(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target_and_features(url, "_blank", "width=600,height=400");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_share_popup(_url: &str) {}

/// Modal with the platform buttons and the copyable demo link.
#[component]
pub fn ShareOverlay(mut visible: Signal<bool>) -> Element {
    let config = use_context::<Signal<ReelConfig>>();
    let mut copied = use_signal(|| false);

    let on_platform = use_callback(move |platform: SharePlatform| {
        let surah_name = config
            .peek()
            .surah
            .as_ref()
            .map(|s| s.name.clone())
            .unwrap_or_default();
        open_share_popup(&share_intent_url(platform, &surah_name));
        visible.set(false);
    });

    if !visible() {
        return rsx! {};
    }

    let on_tiktok = move |_| {
        show_alert(
            "تم نسخ رابط الفيديو! يمكنك الآن فتح تطبيق تيك توك ولصق الرابط أو رفع الفيديو المحمل.",
        );
    };

    let on_copy = move |_| {
        #[cfg(target_arch = "wasm32")]
        {
            use gloo_timers::future::TimeoutFuture;

            if let Some(window) = web_sys::window() {
                let clipboard = window.navigator().clipboard();
                let promise = clipboard.write_text(SHARE_LINK);
                spawn(async move {
                    if wasm_bindgen_futures::JsFuture::from(promise).await.is_ok() {
                        copied.set(true);
                        TimeoutFuture::new(2000).await;
                        copied.set(false);
                    }
                });
            }
        }
    };

    rsx! {
        div { class: "absolute inset-0 z-50 flex items-center justify-center bg-black/70 backdrop-blur-sm p-4",
            div { class: "bg-gray-800 border border-gray-700 rounded-2xl p-6 w-full max-w-sm shadow-2xl",
                div { class: "flex justify-between items-center mb-6",
                    h3 { class: "text-xl font-bold text-white flex items-center gap-2",
                        Icon {
                            name: "share".to_string(),
                            class: "w-5 h-5 text-emerald-500".to_string(),
                        }
                        "مشاركة الريلز"
                    }
                    button {
                        class: "text-gray-400 hover:text-white transition-colors",
                        onclick: move |_| visible.set(false),
                        Icon { name: "x".to_string(), class: "w-6 h-6".to_string() }
                    }
                }

                div { class: "grid grid-cols-2 gap-3 mb-6",
                    button {
                        class: "flex flex-col items-center justify-center gap-2 p-4 bg-gray-700 hover:bg-[#1877F2] text-white rounded-xl transition-all hover:scale-105",
                        onclick: move |_| on_platform.call(SharePlatform::Facebook),
                        Icon {
                            name: "facebook".to_string(),
                            class: "w-6 h-6".to_string(),
                        }
                        span { class: "text-sm font-medium", "فيسبوك" }
                    }
                    button {
                        class: "flex flex-col items-center justify-center gap-2 p-4 bg-gray-700 hover:bg-[#1DA1F2] text-white rounded-xl transition-all hover:scale-105",
                        onclick: move |_| on_platform.call(SharePlatform::Twitter),
                        Icon {
                            name: "twitter".to_string(),
                            class: "w-6 h-6".to_string(),
                        }
                        span { class: "text-sm font-medium", "تويتر" }
                    }
                    button {
                        class: "flex flex-col items-center justify-center gap-2 p-4 bg-gray-700 hover:bg-[#25D366] text-white rounded-xl transition-all hover:scale-105",
                        onclick: move |_| on_platform.call(SharePlatform::Whatsapp),
                        Icon {
                            name: "message-circle".to_string(),
                            class: "w-6 h-6".to_string(),
                        }
                        span { class: "text-sm font-medium", "واتساب" }
                    }
                    button {
                        class: "flex flex-col items-center justify-center gap-2 p-4 bg-gray-700 hover:bg-black text-white rounded-xl transition-all hover:scale-105 border border-transparent hover:border-gray-600",
                        onclick: on_tiktok,
                        span { class: "text-xl font-bold", "TikTok" }
                        span { class: "text-sm font-medium", "تيك توك" }
                    }
                }

                div { class: "relative",
                    label { class: "text-xs text-gray-400 mb-2 block", "رابط المشاركة" }
                    div { class: "flex bg-gray-900 rounded-lg border border-gray-700 overflow-hidden",
                        input {
                            r#type: "text",
                            readonly: true,
                            value: SHARE_LINK,
                            class: "bg-transparent text-sm text-gray-300 px-3 py-3 flex-1 outline-none font-mono",
                            dir: "ltr",
                        }
                        button {
                            class: "bg-gray-700 hover:bg-gray-600 text-white px-4 flex items-center justify-center transition-colors border-r border-gray-600",
                            onclick: on_copy,
                            if copied() {
                                Icon {
                                    name: "check".to_string(),
                                    class: "w-4 h-4 text-emerald-400".to_string(),
                                }
                            } else {
                                Icon { name: "copy".to_string(), class: "w-4 h-4".to_string() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facebook_intent_wraps_the_share_link() {
        let url = share_intent_url(SharePlatform::Facebook, "الفاتحة");
        assert_eq!(
            url,
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fquran-reels.app%2Fshare%2Fdemo"
        );
    }

    #[test]
    fn twitter_intent_carries_caption_and_link() {
        let url = share_intent_url(SharePlatform::Twitter, "الفاتحة");
        assert!(url.starts_with("https://twitter.com/intent/tweet?text="));
        assert!(url.ends_with("&url=https%3A%2F%2Fquran-reels.app%2Fshare%2Fdemo"));
        // The caption must be percent-encoded, never raw Arabic.
        assert!(!url.contains("سورة"));
        assert!(url.contains("%D8%B3%D9%88%D8%B1%D8%A9"));
    }

    #[test]
    fn whatsapp_intent_joins_caption_and_link_in_one_text() {
        let url = share_intent_url(SharePlatform::Whatsapp, "النبأ");
        assert!(url.starts_with("https://wa.me/?text="));
        assert!(url.contains("quran-reels.app%2Fshare%2Fdemo"));
        assert_eq!(url.matches("text=").count(), 1);
    }

    #[test]
    fn caption_names_the_surah() {
        assert!(share_text("الكهف").ends_with("الكهف"));
    }
}
